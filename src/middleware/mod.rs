/*
 * Responsibility
 * - middleware の公開インターフェース (re-export)
 * - pub fn apply(...) を各モジュールに揃える
 */
pub mod cors;
pub mod http;
pub mod principal;
pub mod security_headers;
