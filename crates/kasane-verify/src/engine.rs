//! Fixture rule engine
//!
//! A deliberately small stand-in for the external rule engine, used to verify
//! the composition contract end to end: it honors the layered-application
//! semantics (effective severity per file, parser selection, global ignores)
//! and recognizes a fixed set of rule violations via text detectors. Fixture
//! sources are written to contain exactly the violations under test, so the
//! detectors can stay simple.
//!
//! Rules without a registered detector never fire here; that is fine, the
//! harness only asserts on rules it plants violations for.

use std::sync::LazyLock;

use kasane_core::{ConfigurationSequence, RuleSetting, Severity};
use regex::Regex;
use serde::Serialize;

use crate::resolve;

static VAR_DECL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bvar\s+[A-Za-z_$]").unwrap());
static CONSOLE_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bconsole\.[a-z]+\s*\(").unwrap());
static FUNCTION_PARAMS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"function\s*[A-Za-z0-9_$]*\s*\(([^)]*)\)").unwrap());
static EXPLICIT_ANY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":\s*any\b").unwrap());
static DESCRIBE_CALL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bdescribe\s*\(").unwrap());
static KEY_HANDLER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"onKey(?:Down|Up|Press)=").unwrap());

/// TypeScript-only constructs that a default parser cannot handle
static TYPESCRIPT_SYNTAX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^\s*(?:interface\s+\w+|type\s+\w+\s*=|enum\s+\w+)|:\s*(?:string|number|boolean|any|unknown|void)\b|\bsatisfies\b|\bas\s+const\b",
    )
    .unwrap()
});

/// A single finding returned by the engine.
///
/// A missing `rule_id` marks a parse failure rather than a rule violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub rule_id: Option<String>,
    pub severity: Severity,
    pub line: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn is_parse_error(&self) -> bool {
        self.rule_id.is_none()
    }
}

/// 1-based line number of a byte offset
fn line_of(source: &str, offset: usize) -> usize {
    source[..offset].matches('\n').count() + 1
}

/// Read an integer option from a rule setting, with a fallback
fn option_usize(setting: &RuleSetting, key: &str, fallback: usize) -> usize {
    setting
        .options
        .as_ref()
        .and_then(|options| options.get(key))
        .and_then(|value| value.as_u64())
        .map_or(fallback, |value| value as usize)
}

/// Locate the first violation of a rule in the fixture source.
///
/// Returns the byte offset of the violation, or `None` when the rule has no
/// detector or the source is clean.
fn detect(rule_id: &str, setting: &RuleSetting, source: &str) -> Option<usize> {
    match rule_id {
        "no-var" => VAR_DECL.find(source).map(|m| m.start()),
        "no-console" => CONSOLE_CALL.find(source).map(|m| m.start()),
        "max-params" => {
            let max = option_usize(setting, "max", 3);
            FUNCTION_PARAMS.captures_iter(source).find_map(|captures| {
                let params = captures.get(1).map_or("", |m| m.as_str());
                let count = params
                    .split(',')
                    .filter(|p| !p.trim().is_empty())
                    .count();
                (count > max).then(|| captures.get(0).unwrap().start())
            })
        }
        "@typescript-eslint/no-explicit-any" => EXPLICIT_ANY.find(source).map(|m| m.start()),
        "react/no-danger" => source.find("dangerouslySetInnerHTML"),
        "jsx-a11y/click-events-have-key-events" => {
            let offset = source.find("onClick=")?;
            (!KEY_HANDLER.is_match(source)).then_some(offset)
        }
        "vitest/max-nested-describe" => {
            let max = option_usize(setting, "max", 2);
            let matches: Vec<_> = DESCRIBE_CALL.find_iter(source).collect();
            (matches.len() > max).then(|| matches.last().unwrap().start())
        }
        _ => None,
    }
}

/// The fixture rule engine
#[derive(Debug, Default)]
pub struct FixtureEngine;

impl FixtureEngine {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a composed sequence against one fixture source.
    ///
    /// Parse failures surface as diagnostics, never as errors; the
    /// composition layer has no visibility into per-file outcomes.
    pub fn lint(
        &self,
        path: &str,
        source: &str,
        sequence: &ConfigurationSequence,
    ) -> Vec<Diagnostic> {
        if resolve::is_ignored(sequence, path) {
            tracing::debug!(path, "path excluded by global ignores");
            return Vec::new();
        }

        // Without a TypeScript parser active for this path, TypeScript-only
        // syntax is a parse failure and rule evaluation never starts.
        let typescript_path = path.ends_with(".ts") || path.ends_with(".tsx");
        let parser = resolve::effective_parser(sequence, path);
        if typescript_path
            && parser != Some("@typescript-eslint/parser")
            && TYPESCRIPT_SYNTAX.is_match(source)
        {
            let offset = TYPESCRIPT_SYNTAX.find(source).map_or(0, |m| m.start());
            return vec![Diagnostic {
                rule_id: None,
                severity: Severity::Error,
                line: line_of(source, offset),
                message: "parsing error: unexpected token".to_string(),
            }];
        }

        let mut diagnostics = Vec::new();
        for (rule_id, setting) in resolve::effective_rules(sequence, path) {
            if setting.severity == Severity::Off {
                continue;
            }
            if let Some(offset) = detect(&rule_id, &setting, source) {
                diagnostics.push(Diagnostic {
                    rule_id: Some(rule_id.clone()),
                    severity: setting.severity,
                    line: line_of(source, offset),
                    message: format!("violation of {rule_id}"),
                });
            }
        }

        diagnostics.sort_by(|a, b| (a.line, &a.rule_id).cmp(&(b.line, &b.rule_id)));
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kasane_core::{FeatureFlagSet, compose};

    const BASELINE_VIOLATIONS: &str = "var x = 1;\nconsole.log(x);\nfunction join(a, b, c, d) { return a + b + c + d; }\n";

    #[test]
    fn baseline_rules_fire_on_fixture_violations() {
        let sequence = compose(&FeatureFlagSet::default());
        let engine = FixtureEngine::new();
        let diagnostics = engine.lint("src/legacy.js", BASELINE_VIOLATIONS, &sequence);

        let ids: Vec<&str> = diagnostics
            .iter()
            .filter_map(|d| d.rule_id.as_deref())
            .collect();
        assert!(ids.contains(&"no-var"));
        assert!(ids.contains(&"no-console"));
        assert!(ids.contains(&"max-params"));
    }

    #[test]
    fn diagnostics_carry_lines_and_severities() {
        let sequence = compose(&FeatureFlagSet::default());
        let diagnostics =
            FixtureEngine::new().lint("src/legacy.js", BASELINE_VIOLATIONS, &sequence);
        let no_var = diagnostics
            .iter()
            .find(|d| d.rule_id.as_deref() == Some("no-var"))
            .unwrap();
        assert_eq!(no_var.line, 1);
        assert_eq!(no_var.severity, Severity::Error);
        let max_params = diagnostics
            .iter()
            .find(|d| d.rule_id.as_deref() == Some("max-params"))
            .unwrap();
        assert_eq!(max_params.line, 3);
    }

    #[test]
    fn three_parameters_stay_within_the_limit() {
        let sequence = compose(&FeatureFlagSet::default());
        let diagnostics = FixtureEngine::new().lint(
            "src/ok.js",
            "function join(a, b, c) { return a + b + c; }\n",
            &sequence,
        );
        assert!(diagnostics
            .iter()
            .all(|d| d.rule_id.as_deref() != Some("max-params")));
    }

    #[test]
    fn typescript_syntax_without_typescript_parser_is_a_parse_error() {
        let sequence = compose(&FeatureFlagSet {
            typescript: false,
            ..Default::default()
        });
        let diagnostics = FixtureEngine::new().lint(
            "src/model.ts",
            "interface Point { x: number; y: number }\n",
            &sequence,
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].is_parse_error());
        assert_eq!(diagnostics[0].severity, Severity::Error);
    }

    #[test]
    fn typescript_syntax_with_typescript_parser_is_evaluated() {
        let sequence = compose(&FeatureFlagSet {
            typescript: true,
            ..Default::default()
        });
        let diagnostics = FixtureEngine::new().lint(
            "src/model.ts",
            "export function load(id: any) { return id; }\n",
            &sequence,
        );
        assert!(diagnostics.iter().all(|d| !d.is_parse_error()));
        assert!(diagnostics
            .iter()
            .any(|d| d.rule_id.as_deref() == Some("@typescript-eslint/no-explicit-any")));
    }

    #[test]
    fn ignored_paths_produce_no_diagnostics() {
        let sequence = compose(&FeatureFlagSet::default());
        let diagnostics =
            FixtureEngine::new().lint("dist/bundle.js", BASELINE_VIOLATIONS, &sequence);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn rules_from_disabled_fragments_never_fire() {
        let sequence = compose(&FeatureFlagSet {
            typescript: true,
            ..Default::default()
        });
        let diagnostics = FixtureEngine::new().lint(
            "src/chain.test.ts",
            "describe('a', () => { describe('b', () => { describe('c', () => {}) }) })\n",
            &sequence,
        );
        // vitest fragment is not enabled, so the nesting rule cannot fire
        assert!(diagnostics
            .iter()
            .all(|d| d.rule_id.as_deref() != Some("vitest/max-nested-describe")));
    }

    #[test]
    fn vitest_nesting_rule_fires_when_enabled() {
        let sequence = compose(&FeatureFlagSet {
            typescript: true,
            vitest: true,
            ..Default::default()
        });
        let diagnostics = FixtureEngine::new().lint(
            "src/chain.test.ts",
            "describe('a', () => { describe('b', () => { describe('c', () => {}) }) })\n",
            &sequence,
        );
        assert!(diagnostics
            .iter()
            .any(|d| d.rule_id.as_deref() == Some("vitest/max-nested-describe")));
    }
}
