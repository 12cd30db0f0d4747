/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: gate: ScopeGate, principal_header: HeaderName
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use axum::http::HeaderName;

use crate::services::authz::ScopeGate;

#[derive(Clone, Debug)]
pub struct AppState {
    pub gate: Arc<ScopeGate>,
    pub principal_header: HeaderName,
}

impl AppState {
    pub fn new(gate: Arc<ScopeGate>, principal_header: HeaderName) -> Self {
        Self {
            gate,
            principal_header,
        }
    }
}
