//! Workspace count and window classification rules.

use serde::{Deserialize, Serialize};

/// Workspace configuration. The count is fixed once the engine starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspacesConfig {
    /// Number of workspaces (valid range: 1-10).
    pub count: usize,
}

impl Default for WorkspacesConfig {
    fn default() -> Self {
        Self { count: 5 }
    }
}

/// Name-based window rules, matched as case-sensitive substrings of the
/// window name reported by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Windows that are never tracked (bars, backgrounds), only raised.
    pub unmanaged_names: Vec<String>,
    /// Windows that always float.
    pub floating_names: Vec<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            unmanaged_names: vec!["hackerbar".into(), "hackerland-bg".into()],
            floating_names: Vec::new(),
        }
    }
}

impl RulesConfig {
    pub fn is_unmanaged(&self, name: &str) -> bool {
        self.unmanaged_names
            .iter()
            .any(|pattern| !pattern.is_empty() && name.contains(pattern.as_str()))
    }

    pub fn is_floating(&self, name: &str) -> bool {
        self.floating_names
            .iter()
            .any(|pattern| !pattern.is_empty() && name.contains(pattern.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_workspace_count() {
        assert_eq!(WorkspacesConfig::default().count, 5);
    }

    #[test]
    fn default_rules_skip_bar_and_background() {
        let rules = RulesConfig::default();
        assert!(rules.is_unmanaged("hackerbar"));
        assert!(rules.is_unmanaged("hackerland-bg"));
        assert!(!rules.is_unmanaged("alacritty"));
        assert!(!rules.is_floating("pavucontrol"));
    }

    #[test]
    fn empty_patterns_never_match() {
        let rules = RulesConfig {
            unmanaged_names: vec![String::new()],
            floating_names: vec![String::new(), "picker".into()],
        };
        assert!(!rules.is_unmanaged("anything"));
        assert!(rules.is_floating("color picker"));
        assert!(!rules.is_floating("editor"));
    }
}
