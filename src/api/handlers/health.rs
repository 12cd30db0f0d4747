/*
 * Responsibility
 * - GET /health (疎通用)
 * - principal middleware を通さないことの確認用
 */
pub async fn health() -> &'static str {
    "ok"
}
