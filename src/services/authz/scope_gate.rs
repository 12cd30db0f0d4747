/*
 * Responsibility
 * - 必須スコープ集合と caller の claim 値を突き合わせて allow/deny を決める
 * - 署名 / iss / aud / exp の検証はホスト側の責務。ここでは claim 値しか見ない
 *
 * Notes
 * - 完全一致のみ (大文字小文字の同一視・prefix・階層スコープは扱わない)
 * - 判定は純粋関数。ログは呼び出し側 (handler) で出す
 */
use std::collections::BTreeSet;

use crate::error::AppError;
use crate::services::principal::Claim;

/// Outcome of a single authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied,
}

/// Immutable set of scopes, any one of which grants access.
#[derive(Debug, Clone)]
pub struct ScopeGate {
    required: BTreeSet<String>,
}

impl ScopeGate {
    /// Returns `None` when no scope is given: an empty gate could never allow anything.
    pub fn new<I, S>(required_scopes: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let required: BTreeSet<String> = required_scopes.into_iter().map(Into::into).collect();
        if required.is_empty() {
            return None;
        }
        Some(Self { required })
    }

    pub fn required_scopes(&self) -> impl Iterator<Item = &str> {
        self.required.iter().map(String::as_str)
    }

    /// Allowed iff some claim value is a member of the required set. Claim type is ignored.
    pub fn decide(&self, claims: &[Claim]) -> Decision {
        if claims.iter().any(|c| self.required.contains(c.val.as_str())) {
            Decision::Allowed
        } else {
            Decision::Denied
        }
    }

    pub fn authorize(&self, claims: &[Claim]) -> Result<(), AppError> {
        match self.decide(claims) {
            Decision::Allowed => Ok(()),
            Decision::Denied => Err(AppError::Forbidden),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> ScopeGate {
        ScopeGate::new(["Greeting.Read"]).unwrap()
    }

    fn claims(values: &[&str]) -> Vec<Claim> {
        values.iter().map(|v| Claim::new("scp", *v)).collect()
    }

    #[test]
    fn empty_claims_are_denied() {
        assert_eq!(gate().decide(&[]), Decision::Denied);
    }

    #[test]
    fn other_scope_is_denied() {
        assert_eq!(gate().decide(&claims(&["Greeting.Write"])), Decision::Denied);
    }

    #[test]
    fn required_scope_is_allowed() {
        assert_eq!(gate().decide(&claims(&["Greeting.Read"])), Decision::Allowed);
    }

    #[test]
    fn required_scope_among_others_is_allowed() {
        assert_eq!(
            gate().decide(&claims(&["Greeting.Read", "Other.Scope"])),
            Decision::Allowed
        );
    }

    #[test]
    fn decision_ignores_order_and_duplicates() {
        let g = gate();
        let forward = claims(&["Other.Scope", "Greeting.Read", "Greeting.Write"]);
        let mut reversed = forward.clone();
        reversed.reverse();
        let duplicated = claims(&["Greeting.Read", "Greeting.Read", "Other.Scope"]);

        assert_eq!(g.decide(&forward), Decision::Allowed);
        assert_eq!(g.decide(&reversed), Decision::Allowed);
        assert_eq!(g.decide(&duplicated), Decision::Allowed);

        let denied = claims(&["Other.Scope", "Other.Scope"]);
        assert_eq!(g.decide(&denied), Decision::Denied);
    }

    #[test]
    fn matching_is_exact() {
        let g = gate();
        for value in [
            "greeting.read",
            "GREETING.READ",
            "Greeting.Read.All",
            "Greeting",
            " Greeting.Read",
        ] {
            assert_eq!(g.decide(&claims(&[value])), Decision::Denied, "{value}");
        }
    }

    #[test]
    fn claim_type_is_not_considered() {
        let g = gate();
        let c = vec![Claim::new(
            "http://schemas.microsoft.com/identity/claims/scope",
            "Greeting.Read",
        )];
        assert_eq!(g.decide(&c), Decision::Allowed);
        let c = vec![Claim::new("roles", "Greeting.Read")];
        assert_eq!(g.decide(&c), Decision::Allowed);
    }

    #[test]
    fn any_configured_scope_allows() {
        let g = ScopeGate::new(["Greeting.Read", "Greeting.Admin"]).unwrap();
        assert_eq!(g.decide(&claims(&["Greeting.Admin"])), Decision::Allowed);
        assert_eq!(g.decide(&claims(&["Greeting.Write"])), Decision::Denied);
    }

    #[test]
    fn empty_required_set_is_rejected() {
        assert!(ScopeGate::new(Vec::<String>::new()).is_none());
    }

    #[test]
    fn authorize_maps_denial_to_forbidden() {
        let g = gate();
        assert!(g.authorize(&claims(&["Greeting.Read"])).is_ok());
        assert!(matches!(
            g.authorize(&claims(&["Greeting.Write"])),
            Err(AppError::Forbidden)
        ));
    }
}
