//! Kasane Core
//!
//! Deterministic composition of layered lint configuration. Given an
//! application-type preset or a fine-grained feature-flag set, the
//! composition engine assembles an ordered sequence of immutable
//! configuration fragments for an external flat-config rule engine, and a
//! companion generator produces the matching formatter options.
//!
//! The crate performs no I/O and holds no mutable state: the fragment
//! catalog is built eagerly as process-wide immutable singletons, and every
//! composition call is a pure function of its flag set, safe to invoke
//! concurrently without coordination.

pub mod catalog;
pub mod compose;
pub mod error;
pub mod flags;
pub mod formatter;
pub mod fragment;
pub mod result;

use std::sync::LazyLock;

pub use compose::{ConfigurationSequence, compose};
pub use error::{ErrorKind, KasaneError};
pub use flags::{
    AppType, CycleCheckMode, FeatureFlagOverrides, FeatureFlagSet, resolve_preset,
    resolve_preset_named,
};
pub use formatter::{FormatOptions, TrailingComma, format_options};
pub use fragment::{
    Fragment, FragmentBuilder, GlobalAccess, LanguageOptions, PluginRef, RuleSetting, Severity,
};
pub use result::Result;

/// Pre-composed default configuration: the fullstack preset.
///
/// Computed eagerly so consumers can hand it straight to the rule engine
/// without calling the composition entry points.
pub static DEFAULT_SEQUENCE: LazyLock<ConfigurationSequence> = LazyLock::new(|| {
    compose(&resolve_preset(
        AppType::Fullstack,
        &FeatureFlagOverrides::default(),
    ))
});

/// Pre-generated default formatter options: the fullstack preset.
pub static DEFAULT_FORMAT_OPTIONS: LazyLock<FormatOptions> =
    LazyLock::new(|| format_options(AppType::Fullstack));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sequence_matches_fullstack_composition() {
        let composed = compose(&resolve_preset(
            AppType::Fullstack,
            &FeatureFlagOverrides::default(),
        ));
        assert_eq!(*DEFAULT_SEQUENCE, composed);
        assert!(DEFAULT_SEQUENCE.contains("typescript"));
        assert!(DEFAULT_SEQUENCE.contains("react"));
    }

    #[test]
    fn default_format_options_are_fullstack() {
        assert_eq!(*DEFAULT_FORMAT_OPTIONS, format_options(AppType::Fullstack));
    }
}
