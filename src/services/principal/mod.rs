/*
 * Responsibility
 * - ホスト (Easy Auth 等) が注入した principal ヘッダを claim 列に変換する
 * - 検証はしない。ヘッダの中身はホストが検証済みという前提
 */
mod decode;
mod types;

pub use decode::decode_principal;
pub use types::{Claim, ClientPrincipal};

#[cfg(test)]
pub(crate) use decode::encode_principal;
