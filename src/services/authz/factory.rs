//! Factory: build `ScopeGate` from application `Config`.

use std::sync::Arc;

use crate::config::{Config, ConfigError};
use crate::services::authz::ScopeGate;

pub fn build_scope_gate(config: &Config) -> Result<Arc<ScopeGate>, ConfigError> {
    let gate = ScopeGate::new(config.required_scopes.iter().cloned())
        .ok_or(ConfigError::Invalid("REQUIRED_SCOPES"))?;

    Ok(Arc::new(gate))
}
