//! Effective-configuration resolution
//!
//! The rule engine applies a composed sequence by layering: for a given file,
//! later fragments override earlier ones per rule key, globals merge
//! additively, and a fragment with no file scope applies globally. This
//! module implements those semantics over a [`ConfigurationSequence`] so the
//! harness can check order-dependent outcomes against concrete paths.

use glob::Pattern;
use indexmap::IndexMap;
use kasane_core::{ConfigurationSequence, Fragment, GlobalAccess, RuleSetting, Severity};

/// Match a path against a single glob pattern.
///
/// A leading `**/` also matches paths with no directory component, so
/// `**/*.ts` covers both `index.ts` and `src/index.ts`.
fn matches_pattern(pattern: &str, path: &str) -> bool {
    if Pattern::new(pattern).is_ok_and(|p| p.matches(path)) {
        return true;
    }
    if let Some(rest) = pattern.strip_prefix("**/") {
        return Pattern::new(rest).is_ok_and(|p| p.matches(path));
    }
    false
}

/// Whether a fragment's scope covers the given path
pub fn applies_to(fragment: &Fragment, path: &str) -> bool {
    if fragment.ignores.iter().any(|p| matches_pattern(p, path)) {
        return false;
    }
    fragment.is_global() || fragment.files.iter().any(|p| matches_pattern(p, path))
}

/// Whether the path is excluded outright by a global fragment's ignores
pub fn is_ignored(sequence: &ConfigurationSequence, path: &str) -> bool {
    sequence
        .iter()
        .filter(|fragment| fragment.is_global())
        .any(|fragment| fragment.ignores.iter().any(|p| matches_pattern(p, path)))
}

/// Effective rule assignments for a path: later fragments win per rule key
pub fn effective_rules(
    sequence: &ConfigurationSequence,
    path: &str,
) -> IndexMap<String, RuleSetting> {
    let mut rules = IndexMap::new();
    for fragment in sequence.iter() {
        if !applies_to(fragment, path) {
            continue;
        }
        for (rule_id, setting) in &fragment.rules {
            rules.insert(rule_id.clone(), setting.clone());
        }
    }
    rules
}

/// Effective severity of one rule for a path; unconfigured rules are off
pub fn effective_severity(sequence: &ConfigurationSequence, path: &str, rule_id: &str) -> Severity {
    effective_rules(sequence, path)
        .get(rule_id)
        .map_or(Severity::Off, |setting| setting.severity)
}

/// Effective global set for a path: the additive union across fragments.
///
/// A later fragment may change an identifier's access mode but nothing ever
/// removes a global contributed earlier.
pub fn effective_globals(
    sequence: &ConfigurationSequence,
    path: &str,
) -> IndexMap<String, GlobalAccess> {
    let mut globals = IndexMap::new();
    for fragment in sequence.iter() {
        if !applies_to(fragment, path) {
            continue;
        }
        for (name, access) in &fragment.globals {
            globals.insert(name.clone(), *access);
        }
    }
    globals
}

/// Parser active for a path: the last applicable parser selection wins
pub fn effective_parser<'a>(sequence: &'a ConfigurationSequence, path: &str) -> Option<&'a str> {
    sequence
        .iter()
        .filter(|fragment| applies_to(fragment, path))
        .filter_map(|fragment| fragment.language_options.as_ref())
        .map(|lang| lang.parser.as_str())
        .last()
}
