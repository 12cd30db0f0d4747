/*
 * Responsibility
 * - /api 配下の URL 構造を定義
 * - principal middleware はここで route 群に掛ける (/health には掛けない)
 */
use axum::{Router, routing::get};

use crate::api::handlers::greeting::greeting;
use crate::middleware;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let router = Router::new().route("/greeting", get(greeting));

    middleware::principal::apply(router, state)
}
