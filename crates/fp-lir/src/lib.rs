//! FerroPhase LIR value model
//!
//! Value kinds, runtime values and base types shared by the LIR interpreter
//! and the components that build interpreter nodes from parsed bitcode.

pub mod config;
pub mod error;
pub mod kind;
pub mod ty;
pub mod value;

// Re-export commonly used items for convenience
pub use tracing;

pub use config::OptimizationConfig;
pub use kind::ValueKind;
pub use ty::Ty;
pub use value::{Address, FunctionAddress, Value, X86Fp80};

pub type Error = crate::error::Error;
pub type Result<T> = crate::error::Result<T>;
