/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / plain text body)
 *
 * Notes
 * - トークン不正 (署名/期限/issuer) はホストが手前で弾くので、ここに来るのは認可失敗だけ
 * - 起動時のエラーは ConfigError / anyhow で扱い、HTTP には出さない
 */
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub const FORBIDDEN_BODY: &str = "Forbidden";

#[derive(Debug, Error)]
pub enum AppError {
    /// 必須スコープを持たない呼び出し。欠落か値違いかは区別しない
    #[error("forbidden")]
    Forbidden,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Forbidden => (StatusCode::FORBIDDEN, FORBIDDEN_BODY).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn forbidden_renders_plain_text_403() {
        let res = AppError::Forbidden.into_response();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        assert!(
            res.headers()["content-type"]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );

        let body = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Forbidden");
    }
}
