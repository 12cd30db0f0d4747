use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

use super::Principal;

/// Handler で Principal を受け取るための extractor
/// middleware が Principal を request.extensions() に insert 済みである前提
/// 見つからない場合は 403 を返す（middleware 未設定でも fail closed）
pub struct PrincipalExtractor(pub Principal);

impl FromRequestParts<AppState> for PrincipalExtractor
where
    AppState: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(PrincipalExtractor)
            .ok_or_else(|| {
                tracing::warn!("principal missing from request extensions");
                AppError::Forbidden
            })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::{HeaderName, Request};

    use super::*;
    use crate::services::authz::ScopeGate;
    use crate::services::principal::Claim;

    fn state() -> AppState {
        AppState::new(
            Arc::new(ScopeGate::new(["Greeting.Read"]).unwrap()),
            HeaderName::from_static("x-ms-client-principal"),
        )
    }

    #[tokio::test]
    async fn returns_principal_from_extensions() {
        let (mut parts, ()) = Request::builder().body(()).unwrap().into_parts();
        parts.extensions.insert(Principal {
            claims: vec![Claim::new("scp", "Greeting.Read")],
            auth_typ: None,
        });

        let PrincipalExtractor(p) = PrincipalExtractor::from_request_parts(&mut parts, &state())
            .await
            .unwrap();
        assert_eq!(p.claims.len(), 1);
    }

    #[tokio::test]
    async fn rejects_with_forbidden_when_middleware_is_absent() {
        let (mut parts, ()) = Request::builder().body(()).unwrap().into_parts();

        let rejection = PrincipalExtractor::from_request_parts(&mut parts, &state()).await;
        assert!(matches!(rejection, Err(AppError::Forbidden)));
    }
}
