//! Leaf nodes producing operand values.

use fp_lir::{Result, Value, ValueKind};

use crate::frame::Frame;
use crate::kind_ensure;
use crate::node::ExprNode;

/// Always yields the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantNode {
    value: Value,
}

impl ConstantNode {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn boxed(value: impl Into<Value>) -> Box<Self> {
        Box::new(Self::new(value))
    }
}

impl ExprNode for ConstantNode {
    fn kind(&self) -> ValueKind {
        self.value.kind()
    }

    fn execute(&self, _frame: &mut Frame) -> Result<Value> {
        Ok(self.value)
    }
}

/// Reads a frame slot holding a value of a declared kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotReadNode {
    slot: usize,
    kind: ValueKind,
}

impl SlotReadNode {
    pub fn new(slot: usize, kind: ValueKind) -> Self {
        Self { slot, kind }
    }

    pub fn boxed(slot: usize, kind: ValueKind) -> Box<Self> {
        Box::new(Self::new(slot, kind))
    }

    pub fn slot(&self) -> usize {
        self.slot
    }
}

impl ExprNode for SlotReadNode {
    fn kind(&self) -> ValueKind {
        self.kind
    }

    fn execute(&self, frame: &mut Frame) -> Result<Value> {
        let value = frame.get(self.slot)?;
        kind_ensure!(self.kind, value.kind());
        Ok(value)
    }
}
