/*
 * Responsibility
 * - GET /api/greeting
 * - Principal の claim 値を ScopeGate に渡し、許可なら固定の挨拶文を返す
 * - 判定結果は audit target に 1 件ずつ記録する (claim 値そのものは出さない)
 *   allowed / denied とも同じフィールド構成にして突き合わせられるようにする
 */
use axum::extract::State;

use crate::{
    api::extractors::{Principal, PrincipalExtractor},
    error::AppError,
    services::authz::ScopeGate,
    state::AppState,
};

pub const GREETING: &str = "Hello, world. You were able to access this because you provided a valid access token with the Greeting.Read scope as a claim.";

pub async fn greeting(
    State(state): State<AppState>,
    PrincipalExtractor(principal): PrincipalExtractor,
) -> Result<&'static str, AppError> {
    let outcome = state.gate.authorize(&principal.claims);

    DecisionAudit::new(&state.gate, &principal, outcome.is_ok()).emit();

    outcome.map(|()| GREETING)
}

/// One audit line per decision. Both outcomes carry the same fields.
#[derive(Debug, PartialEq, Eq)]
struct DecisionAudit<'a> {
    allowed: bool,
    claims: usize,
    anonymous: bool,
    auth_typ: &'a str,
    required: String,
}

impl<'a> DecisionAudit<'a> {
    fn new(gate: &ScopeGate, principal: &'a Principal, allowed: bool) -> Self {
        Self {
            allowed,
            claims: principal.claims.len(),
            anonymous: principal.is_anonymous(),
            auth_typ: principal.auth_typ.as_deref().unwrap_or("-"),
            required: gate.required_scopes().collect::<Vec<_>>().join(","),
        }
    }

    fn emit(&self) {
        if self.allowed {
            tracing::info!(
                target: "audit",
                decision = "allowed",
                claims = self.claims,
                anonymous = self.anonymous,
                auth_typ = self.auth_typ,
                required = %self.required,
                "greeting authorized"
            );
        } else {
            tracing::warn!(
                target: "audit",
                decision = "denied",
                claims = self.claims,
                anonymous = self.anonymous,
                auth_typ = self.auth_typ,
                required = %self.required,
                "greeting forbidden"
            );
        }
    }
}
