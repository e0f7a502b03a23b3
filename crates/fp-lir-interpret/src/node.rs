use std::fmt::Debug;

use fp_lir::{Result, Value, ValueKind};

use crate::error::kind_mismatch;
use crate::frame::Frame;
use crate::select::BranchProfile;

/// An executable node of the interpreter tree.
///
/// A node produces values of exactly one [`ValueKind`], the one reported by
/// [`ExprNode::kind`], on every execution. Nodes may be shared between
/// threads executing the same function body.
pub trait ExprNode: Debug + Send + Sync {
    fn kind(&self) -> ValueKind;

    fn execute(&self, frame: &mut Frame) -> Result<Value>;

    fn execute_bool(&self, frame: &mut Frame) -> Result<bool> {
        match self.execute(frame)? {
            Value::Bool1(value) => Ok(value),
            other => Err(kind_mismatch(ValueKind::Bool1, other.kind())),
        }
    }

    /// Branch history recorded by this node, if it records any.
    fn branch_profile(&self) -> Option<BranchProfile> {
        None
    }
}

pub type BoxedNode = Box<dyn ExprNode>;
