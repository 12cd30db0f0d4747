/*
 * Responsibility
 * - Handler から見える「ホスト認証済み caller」の型
 * - middleware が principal ヘッダを復号して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - トークンの署名/iss/aud/exp 検証はホスト側の責務
 * - ヘッダが無い・壊れている場合は claims が空の anonymous になる
 */

use crate::services::principal::{Claim, ClientPrincipal};

/// Claims attached to the request by the host.
///
/// - `claims` keeps the order the host supplied; authorization does not depend on it
/// - `auth_typ` is the identity provider label (`aad` etc.), for logging only
#[derive(Debug, Clone, Default)]
pub struct Principal {
    pub claims: Vec<Claim>,
    pub auth_typ: Option<String>,
}

impl Principal {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_anonymous(&self) -> bool {
        self.claims.is_empty()
    }
}

impl From<ClientPrincipal> for Principal {
    fn from(p: ClientPrincipal) -> Self {
        Self {
            claims: p.claims,
            auth_typ: p.auth_typ,
        }
    }
}
