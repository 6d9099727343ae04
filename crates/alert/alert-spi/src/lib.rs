//! Alert Service Provider Interface
//!
//! Types shared by threshold evaluation and the report layer.

pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use error::{AlertError, Result};
pub use model::{Alert, Nutrient};
