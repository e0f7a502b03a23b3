//! FerroPhase LIR Interpreter
//!
//! Tree-walking evaluation nodes for FerroPhase LIR. Nodes are built once from
//! parsed instructions and then executed repeatedly against a [`Frame`].

pub mod error;
pub mod frame;
pub mod node;
pub mod nodes;
pub mod select;

pub use frame::Frame;
pub use node::{BoxedNode, ExprNode};
pub use select::{
    create_select, create_select_of_kind, BranchCounters, BranchProfile, BranchProfiler,
    PlainSelectNode, ProfilingSelectNode, SelectFamily, SelectNode, Unprofiled,
};
