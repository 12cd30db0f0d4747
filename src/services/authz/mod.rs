pub mod factory;
pub mod scope_gate;

pub use factory::build_scope_gate;
pub use scope_gate::ScopeGate;
