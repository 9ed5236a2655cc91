//! Configuration composition engine
//!
//! [`compose`] turns a [`FeatureFlagSet`] into the ordered
//! [`ConfigurationSequence`] the rule engine consumes. Order is load-bearing:
//! the engine applies later fragments' rule assignments over earlier ones for
//! files matched by both scopes, so the precedence below is a contract, not
//! an implementation detail.
//!
//! The engine is a pure function of its input. Identical flags always yield
//! an identical sequence, and flipping one flag only adds or removes that
//! flag's fragments without reordering the rest.

use serde::Serialize;

use crate::catalog;
use crate::flags::{CycleCheckMode, FeatureFlagSet};
use crate::fragment::Fragment;
use crate::result::Result;

/// The ordered list of fragments produced by composition.
///
/// Serializes as a plain JSON array of fragments, the exact layered shape the
/// rule engine expects; no further translation happens at that seam.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigurationSequence {
    fragments: Vec<&'static Fragment>,
}

impl ConfigurationSequence {
    /// Fragments in application order
    pub fn fragments(&self) -> &[&'static Fragment] {
        &self.fragments
    }

    /// Iterate fragments in application order
    pub fn iter(&self) -> impl Iterator<Item = &'static Fragment> + '_ {
        self.fragments.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Fragment names in application order
    pub fn names(&self) -> Vec<&str> {
        self.fragments.iter().map(|f| f.name.as_str()).collect()
    }

    /// Whether a fragment with the given name is present
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Position of the named fragment within the sequence
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fragments.iter().position(|f| f.name == name)
    }

    /// Serialize the sequence to the JSON document handed to the rule engine
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<'a> IntoIterator for &'a ConfigurationSequence {
    type Item = &'static Fragment;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, &'static Fragment>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter().copied()
    }
}

/// Ordered-append builder; only ever appends fragments that are present
struct SequenceBuilder {
    fragments: Vec<&'static Fragment>,
}

impl SequenceBuilder {
    fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    fn push(&mut self, fragment: &'static Fragment) -> &mut Self {
        tracing::trace!(fragment = %fragment.name, "appending fragment");
        self.fragments.push(fragment);
        self
    }

    fn push_if(&mut self, enabled: bool, fragment: &'static Fragment) -> &mut Self {
        if enabled {
            self.push(fragment)
        } else {
            tracing::trace!(fragment = %fragment.name, "skipping fragment");
            self
        }
    }

    fn build(self) -> ConfigurationSequence {
        ConfigurationSequence {
            fragments: self.fragments,
        }
    }
}

/// Assemble the ordered configuration sequence for a flag set.
///
/// Precedence (later wins on conflicting rule keys for overlapping scopes):
///
/// 1. baseline, always, global
/// 2. typescript, iff `typescript`
/// 3. sorting, always, after the language fragments so they cannot override it
/// 4. cypress, iff `cypress`
/// 5. a11y, iff `a11y`
/// 6. vitest, iff `vitest`
/// 7. filenames, function-naming, promise, code-quality, always
/// 8. import-alias, always
/// 9. react, iff `react`
/// 10. exactly one import-hygiene variant, selected by `typescript`
/// 11. assertion-compat, always
/// 12. graphql, iff `graphql`
/// 13. storybook, iff `storybook`
/// 14. query, iff `query`
/// 15. router, iff `router`
/// 16. node-globals, iff `node_globals` (additive only)
/// 17. browser-globals, iff `browser_globals` (additive only)
/// 18. cycle-check-off, iff the cycle-check mode is off; strictly last so it
///     wins regardless of what the import-hygiene fragments configured
pub fn compose(flags: &FeatureFlagSet) -> ConfigurationSequence {
    let mut builder = SequenceBuilder::new();

    builder
        .push(&catalog::BASELINE)
        .push_if(flags.typescript, &catalog::TYPESCRIPT)
        .push(&catalog::SORTING)
        .push_if(flags.cypress, &catalog::CYPRESS)
        .push_if(flags.a11y, &catalog::A11Y)
        .push_if(flags.vitest, &catalog::VITEST)
        .push(&catalog::FILENAMES)
        .push(&catalog::FUNCTION_NAMING)
        .push(&catalog::PROMISE)
        .push(&catalog::CODE_QUALITY)
        .push(&catalog::IMPORT_ALIAS)
        .push_if(flags.react, &catalog::REACT);

    if flags.typescript {
        builder.push(&catalog::IMPORT_HYGIENE_TS);
    } else {
        builder.push(&catalog::IMPORT_HYGIENE_JS);
    }

    builder
        .push(&catalog::ASSERTION_COMPAT)
        .push_if(flags.graphql, &catalog::GRAPHQL)
        .push_if(flags.storybook, &catalog::STORYBOOK)
        .push_if(flags.query, &catalog::QUERY)
        .push_if(flags.router, &catalog::ROUTER)
        .push_if(flags.node_globals, &catalog::NODE_GLOBALS)
        .push_if(flags.browser_globals, &catalog::BROWSER_GLOBALS)
        .push_if(
            flags.cycle_check == CycleCheckMode::Off,
            &catalog::CYCLE_CHECK_OFF,
        );

    let sequence = builder.build();
    tracing::debug!(fragments = sequence.len(), "composed configuration sequence");
    sequence
}
