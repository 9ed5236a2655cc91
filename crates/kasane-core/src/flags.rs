//! Feature flags and application-type presets
//!
//! A [`FeatureFlagSet`] is the complete input to the composition engine: one
//! boolean per optional capability plus the cycle-check mode. Inside the
//! engine a flag that was never set means `false`; only the application-type
//! selector itself is strictly validated. The two presets translate the
//! high-level application type into a fully populated flag set, and a partial
//! [`FeatureFlagOverrides`] can flip individual flags on top of a preset.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::KasaneError;
use crate::result::Result;

/// Whether the expensive cross-file cyclic-import-detection rule is active.
///
/// Two states only. The upstream documentation that floated a `"ci"` mode was
/// stale; cycle detection is either left at the import-hygiene severity or
/// forced off by a final override fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CycleCheckMode {
    /// Keep the severity configured by the import-hygiene fragment
    On,
    /// Append a final override forcing the rule off
    Off,
}

impl Default for CycleCheckMode {
    fn default() -> Self {
        Self::Off
    }
}

/// High-level application type, a closed enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum AppType {
    /// Browser frontend plus server runtime
    Fullstack,
    /// Server runtime only
    BackendOnly,
}

impl AppType {
    /// Canonical selector string for this application type
    pub fn as_str(&self) -> &'static str {
        match self {
            AppType::Fullstack => "fullstack",
            AppType::BackendOnly => "backend-only",
        }
    }
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppType {
    type Err = KasaneError;

    /// Any selector outside the closed enumeration is a hard error naming the
    /// offending value; there is no fallback preset.
    fn from_str(value: &str) -> Result<Self> {
        match value {
            "fullstack" => Ok(AppType::Fullstack),
            "backend-only" => Ok(AppType::BackendOnly),
            other => Err(KasaneError::invalid_app_type(other)),
        }
    }
}

/// Complete set of capability flags read by the composition engine.
///
/// `Default` is the all-off set (cycle check off as well); the engine never
/// distinguishes "absent" from "explicitly false". TypeScript arrives enabled
/// through both presets, not through `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureFlagSet {
    pub typescript: bool,
    pub react: bool,
    pub a11y: bool,
    pub cypress: bool,
    pub vitest: bool,
    pub graphql: bool,
    pub storybook: bool,
    pub query: bool,
    pub router: bool,
    pub node_globals: bool,
    pub browser_globals: bool,
    pub cycle_check: CycleCheckMode,
}

impl FeatureFlagSet {
    /// Apply a partial override set on top of these flags
    pub fn with_overrides(mut self, overrides: &FeatureFlagOverrides) -> Self {
        self.typescript = overrides.typescript.unwrap_or(self.typescript);
        self.react = overrides.react.unwrap_or(self.react);
        self.a11y = overrides.a11y.unwrap_or(self.a11y);
        self.cypress = overrides.cypress.unwrap_or(self.cypress);
        self.vitest = overrides.vitest.unwrap_or(self.vitest);
        self.graphql = overrides.graphql.unwrap_or(self.graphql);
        self.storybook = overrides.storybook.unwrap_or(self.storybook);
        self.query = overrides.query.unwrap_or(self.query);
        self.router = overrides.router.unwrap_or(self.router);
        self.node_globals = overrides.node_globals.unwrap_or(self.node_globals);
        self.browser_globals = overrides.browser_globals.unwrap_or(self.browser_globals);
        self.cycle_check = overrides.cycle_check.unwrap_or(self.cycle_check);
        self
    }
}

/// Partial flag set; any flag present overrides the preset's default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureFlagOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typescript: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub react: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a11y: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cypress: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitest: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphql: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storybook: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_globals: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_globals: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_check: Option<CycleCheckMode>,
}

/// Translate an application type into a fully populated flag set, then apply
/// any overrides on top.
///
/// No side effects; every flag the composition engine reads gets an explicit
/// value.
pub fn resolve_preset(app_type: AppType, overrides: &FeatureFlagOverrides) -> FeatureFlagSet {
    let preset = match app_type {
        AppType::Fullstack => FeatureFlagSet {
            typescript: true,
            react: true,
            a11y: true,
            cypress: true,
            vitest: true,
            graphql: false,
            storybook: true,
            query: true,
            router: true,
            node_globals: true,
            browser_globals: true,
            cycle_check: CycleCheckMode::Off,
        },
        AppType::BackendOnly => FeatureFlagSet {
            typescript: true,
            react: false,
            a11y: false,
            cypress: false,
            vitest: true,
            graphql: false,
            storybook: false,
            query: false,
            router: false,
            node_globals: true,
            browser_globals: false,
            cycle_check: CycleCheckMode::Off,
        },
    };

    let flags = preset.with_overrides(overrides);
    tracing::debug!(app_type = %app_type, ?flags, "resolved preset");
    flags
}

/// [`resolve_preset`] for callers holding an untyped selector string.
///
/// Fails with [`KasaneError::InvalidAppType`] for anything outside the closed
/// enumeration.
pub fn resolve_preset_named(
    app_type: &str,
    overrides: &FeatureFlagOverrides,
) -> Result<FeatureFlagSet> {
    let app_type = AppType::from_str(app_type)?;
    Ok(resolve_preset(app_type, overrides))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fullstack_preset_enables_frontend_capabilities() {
        let flags = resolve_preset(AppType::Fullstack, &FeatureFlagOverrides::default());
        assert!(flags.typescript);
        assert!(flags.react);
        assert!(flags.a11y);
        assert!(flags.cypress);
        assert!(flags.vitest);
        assert!(flags.storybook);
        assert!(flags.query);
        assert!(flags.router);
        assert!(flags.browser_globals);
        assert!(flags.node_globals);
        assert!(!flags.graphql);
    }

    #[test]
    fn backend_only_preset_disables_frontend_capabilities() {
        let flags = resolve_preset(AppType::BackendOnly, &FeatureFlagOverrides::default());
        assert!(flags.typescript);
        assert!(flags.vitest);
        assert!(flags.node_globals);
        assert!(!flags.react);
        assert!(!flags.a11y);
        assert!(!flags.cypress);
        assert!(!flags.graphql);
        assert!(!flags.storybook);
        assert!(!flags.query);
        assert!(!flags.router);
        assert!(!flags.browser_globals);
    }

    #[test]
    fn overrides_win_over_preset_defaults() {
        let overrides = FeatureFlagOverrides {
            typescript: Some(false),
            graphql: Some(true),
            cycle_check: Some(CycleCheckMode::On),
            ..Default::default()
        };
        let flags = resolve_preset(AppType::Fullstack, &overrides);
        assert!(!flags.typescript);
        assert!(flags.graphql);
        assert_eq!(flags.cycle_check, CycleCheckMode::On);
        // Untouched flags keep their preset values
        assert!(flags.react);
        assert!(flags.storybook);
    }

    #[test]
    fn unknown_app_type_is_a_hard_error() {
        let err = resolve_preset_named("staging", &FeatureFlagOverrides::default()).unwrap_err();
        assert!(err.to_string().contains("staging"));
        assert!("staging".parse::<AppType>().is_err());
    }

    #[test]
    fn missing_flags_deserialize_to_false() {
        let flags: FeatureFlagSet = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlagSet::default());
        assert!(!flags.typescript);
        assert_eq!(flags.cycle_check, CycleCheckMode::Off);
    }

    #[test]
    fn flag_set_round_trips_through_serde() {
        let flags = resolve_preset(AppType::Fullstack, &FeatureFlagOverrides::default());
        let json = serde_json::to_string(&flags).unwrap();
        assert!(json.contains("\"nodeGlobals\":true"));
        assert!(json.contains("\"cycleCheck\":\"off\""));
        let back: FeatureFlagSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, flags);
    }
}
