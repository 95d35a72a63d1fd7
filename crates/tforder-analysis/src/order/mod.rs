//! Apply-order resolution.

pub mod resolver;
pub mod types;

pub use resolver::resolve_order;
pub use types::ModuleOrder;
