//! Verification harness
//!
//! Wraps a lint run over one fixture source and exposes the queries the
//! contract tests assert on: which rule identifiers fired, whether anything
//! with a given namespace prefix fired, and whether the run failed to parse.

use kasane_core::ConfigurationSequence;

use crate::engine::{Diagnostic, FixtureEngine};

/// Collected diagnostics for one fixture lint run
#[derive(Debug, Clone)]
pub struct LintReport {
    diagnostics: Vec<Diagnostic>,
}

impl LintReport {
    /// Lint a fixture source against a composed sequence
    pub fn check(path: &str, source: &str, sequence: &ConfigurationSequence) -> Self {
        let diagnostics = FixtureEngine::new().lint(path, source, sequence);
        Self { diagnostics }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Rule identifiers present in the diagnostics, in reporting order
    pub fn rule_ids(&self) -> Vec<&str> {
        self.diagnostics
            .iter()
            .filter_map(|d| d.rule_id.as_deref())
            .collect()
    }

    /// Whether the named rule fired
    pub fn fired(&self, rule_id: &str) -> bool {
        self.rule_ids().contains(&rule_id)
    }

    /// Whether any rule under the given namespace prefix fired
    pub fn fired_with_prefix(&self, prefix: &str) -> bool {
        self.rule_ids().iter().any(|id| id.starts_with(prefix))
    }

    /// Whether the run reported a parse failure instead of rule diagnostics
    pub fn has_parse_error(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_parse_error)
    }

    /// Whether the run produced no diagnostics at all
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
