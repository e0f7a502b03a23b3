use serde::{Deserialize, Serialize};

use fp_lir::{OptimizationConfig, Result, Ty, ValueKind};

use super::profile::{BranchCounters, Unprofiled};
use super::SelectNode;
use crate::error::internal_error;
use crate::node::BoxedNode;

/// Which select implementation a factory call produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectFamily {
    /// No per-site bookkeeping.
    Plain,
    /// Counts taken branches for the optimizing tier.
    Profiling,
}

impl SelectFamily {
    pub fn from_config(config: &OptimizationConfig) -> Self {
        if config.branch_injection_select {
            SelectFamily::Profiling
        } else {
            SelectFamily::Plain
        }
    }
}

/// Builds the node for `select <ty> condition, if_true, if_false`.
///
/// `ty` must be one of the base types a single value can carry; anything
/// else is an internal error of the producer.
pub fn create_select(
    config: &OptimizationConfig,
    ty: &Ty,
    condition: BoxedNode,
    if_true: BoxedNode,
    if_false: BoxedNode,
) -> Result<BoxedNode> {
    let kind = ValueKind::from_ty(ty)?;
    create_select_of_kind(config, kind, condition, if_true, if_false)
}

/// Builds a select node specialized to `kind`.
///
/// The family is decided by `config` now and stays fixed for the life of the
/// node. No operand is evaluated.
pub fn create_select_of_kind(
    config: &OptimizationConfig,
    kind: ValueKind,
    condition: BoxedNode,
    if_true: BoxedNode,
    if_false: BoxedNode,
) -> Result<BoxedNode> {
    if condition.kind() != ValueKind::Bool1 {
        return Err(internal_error(format!(
            "select condition must be i1, found {}",
            condition.kind()
        )));
    }
    for (label, operand) in [("true", &if_true), ("false", &if_false)] {
        if operand.kind() != kind {
            return Err(internal_error(format!(
                "select {} operand must be {}, found {}",
                label,
                kind,
                operand.kind()
            )));
        }
    }

    let family = SelectFamily::from_config(config);
    tracing::debug!(%kind, ?family, "creating select node");
    let node: BoxedNode = match family {
        SelectFamily::Plain => Box::new(SelectNode::new(
            kind,
            condition,
            if_true,
            if_false,
            Unprofiled,
        )),
        SelectFamily::Profiling => Box::new(SelectNode::new(
            kind,
            condition,
            if_true,
            if_false,
            BranchCounters::new(),
        )),
    };
    Ok(node)
}
