//! Domain layer containing the verification result model and the
//! descriptors consumed by the host UI.

pub mod entities;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::*;
pub use value_objects::*;
