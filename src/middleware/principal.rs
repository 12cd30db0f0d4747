//! Host principal header → `Principal` in request extensions.
//!
//! The fronting host (Easy Auth or an equivalent gateway) has already validated the
//! access token's signature, issuer, audience and expiry. This middleware only decodes
//! what the host forwarded; it must never re-validate the token.
//!
//! - header missing → anonymous principal (no claims)
//! - header undecodable → logged, anonymous principal
//!
//! Either way the request continues; the handler's scope check answers 403.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::Principal;
use crate::services::principal::decode_principal;
use crate::state::AppState;

/// Apply principal extraction to the given routes.
///
/// 例：
/// ```ignore
/// let api = Router::new().route("/greeting", get(greeting));
/// let api = middleware::principal::apply(api, state.clone());
/// app = app.nest("/api", api);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, principal_middleware))
}

async fn principal_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let principal = principal_from_request(&state, &req);

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(principal);

    next.run(req).await
}

fn principal_from_request(state: &AppState, req: &Request<Body>) -> Principal {
    let Some(value) = req.headers().get(&state.principal_header) else {
        tracing::debug!("no principal header; treating caller as anonymous");
        return Principal::anonymous();
    };

    let Ok(value) = value.to_str() else {
        tracing::warn!(header = %state.principal_header, "principal header is not visible ASCII");
        return Principal::anonymous();
    };

    match decode_principal(value) {
        Ok(p) => p.into(),
        Err(err) => {
            tracing::warn!(
                error = %err,
                header = %state.principal_header,
                "principal header could not be decoded"
            );
            Principal::anonymous()
        }
    }
}
