use serde::{Deserialize, Serialize};

/// One assertion from the validated token. Only `val` takes part in authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    #[serde(default)]
    pub typ: String,
    pub val: String,
}

impl Claim {
    pub fn new(typ: impl Into<String>, val: impl Into<String>) -> Self {
        Self {
            typ: typ.into(),
            val: val.into(),
        }
    }
}

/// Principal document the host attaches to each request
/// (`X-MS-CLIENT-PRINCIPAL`, base64 encoded JSON).
///
/// - `auth_typ` / `name_typ` / `role_typ` are carried for logging only
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientPrincipal {
    #[serde(default)]
    pub auth_typ: Option<String>,
    #[serde(default)]
    pub claims: Vec<Claim>,
    #[serde(default)]
    pub name_typ: Option<String>,
    #[serde(default)]
    pub role_typ: Option<String>,
}
