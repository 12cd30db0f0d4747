/*
 * Responsibility
 * - HTTP に依存しない処理 (認可判定 / principal の復号) を束ねる
 */
pub mod authz;
pub mod principal;
