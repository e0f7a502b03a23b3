use serde::{Deserialize, Serialize};

pub const BRANCH_INJECTION_SELECT_ENV: &str = "FERROPHASE_BRANCH_INJECTION_SELECT";

fn env_true(key: &str) -> Option<bool> {
    std::env::var(key).ok().map(|val| {
        let trimmed = val.trim();
        !trimmed.is_empty() && !matches!(trimmed, "0" | "false" | "FALSE" | "False")
    })
}

/// Optimization switches consulted while interpreter nodes are built.
///
/// The value is passed to node factories explicitly; a node keeps whatever
/// variant was chosen when it was built, even if the configuration changes
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OptimizationConfig {
    /// Build select nodes that record how often each branch is taken.
    pub branch_injection_select: bool,
}

impl OptimizationConfig {
    pub fn from_env() -> Self {
        let config = Self {
            branch_injection_select: env_true(BRANCH_INJECTION_SELECT_ENV).unwrap_or(false),
        };
        tracing::debug!(?config, "loaded optimization config from environment");
        config
    }

    pub fn with_branch_injection_select(mut self, enabled: bool) -> Self {
        self.branch_injection_select = enabled;
        self
    }
}
