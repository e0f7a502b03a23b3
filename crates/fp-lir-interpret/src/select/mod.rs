//! The `select` instruction.
//!
//! `select` is executed as a two-way branch: only the operand picked by the
//! condition is evaluated. One generic [`SelectNode`] covers every value
//! kind; the kind is a tag fixed at construction and the branch profiling
//! strategy is a type parameter, so the unprofiled node carries no counters
//! at all.

mod factory;
mod profile;

use fp_lir::{Result, Value, ValueKind};

use crate::frame::Frame;
use crate::node::{BoxedNode, ExprNode};

pub use factory::{create_select, create_select_of_kind, SelectFamily};
pub use profile::{BranchCounters, BranchProfile, BranchProfiler, Unprofiled};

pub type PlainSelectNode = SelectNode<Unprofiled>;
pub type ProfilingSelectNode = SelectNode<BranchCounters>;

#[derive(Debug)]
pub struct SelectNode<P> {
    kind: ValueKind,
    condition: BoxedNode,
    if_true: BoxedNode,
    if_false: BoxedNode,
    profiler: P,
}

impl<P: BranchProfiler> SelectNode<P> {
    /// Operand kinds are trusted here; [`create_select_of_kind`] is the
    /// checked entry point.
    pub fn new(
        kind: ValueKind,
        condition: BoxedNode,
        if_true: BoxedNode,
        if_false: BoxedNode,
        profiler: P,
    ) -> Self {
        Self {
            kind,
            condition,
            if_true,
            if_false,
            profiler,
        }
    }

    pub fn profiler(&self) -> &P {
        &self.profiler
    }

    pub fn family(&self) -> SelectFamily {
        P::FAMILY
    }
}

impl<P: BranchProfiler> ExprNode for SelectNode<P> {
    fn kind(&self) -> ValueKind {
        self.kind
    }

    #[inline]
    fn execute(&self, frame: &mut Frame) -> Result<Value> {
        let taken = self.condition.execute_bool(frame)?;
        self.profiler.record(taken);
        if taken {
            self.if_true.execute(frame)
        } else {
            self.if_false.execute(frame)
        }
    }

    fn branch_profile(&self) -> Option<BranchProfile> {
        self.profiler.snapshot()
    }
}
