//! Configuration fragment model
//!
//! A [`Fragment`] is an immutable, independently-applicable slice of lint
//! configuration: a file-glob scope, rule severity assignments, environment
//! globals, plugin bindings, and at most one parser selection. Fragments are
//! built once at catalog-definition time and never mutated; the composition
//! engine only decides which fragments appear and in what order.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Rule severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Disable the rule
    Off,
    /// Warning (doesn't fail the lint run)
    Warn,
    /// Error (fails the lint run)
    Error,
}

/// A rule severity assignment with optional rule-specific options
///
/// Serializes in the shape the rule engine consumes: a bare severity string
/// (`"error"`) when there are no options, or a `[severity, options]` tuple
/// when the rule carries an option payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSetting {
    /// Severity assigned to the rule
    pub severity: Severity,
    /// Rule-specific option payload
    pub options: Option<Value>,
}

impl RuleSetting {
    /// Severity-only assignment
    pub fn plain(severity: Severity) -> Self {
        Self {
            severity,
            options: None,
        }
    }

    /// Assignment carrying an option payload
    pub fn with_options(severity: Severity, options: Value) -> Self {
        Self {
            severity,
            options: Some(options),
        }
    }
}

impl Serialize for RuleSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.options {
            None => self.severity.serialize(serializer),
            Some(options) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(&self.severity)?;
                seq.serialize_element(options)?;
                seq.end()
            }
        }
    }
}

/// Access mode for an environment global
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum GlobalAccess {
    /// Reads allowed, assignment is a lint violation
    Readonly,
    /// Reads and assignment allowed
    Writable,
}

/// Opaque handle to a rule plugin package
///
/// The composition engine never inspects plugin internals; a binding only
/// records which package provides the namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginRef {
    /// Distribution package providing the plugin
    pub package: String,
}

impl PluginRef {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
        }
    }
}

/// Parser selection and parser options for a fragment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOptions {
    /// Parser package to use for files in this fragment's scope
    pub parser: String,

    /// Parser-specific options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_options: Option<Value>,
}

/// An immutable slice of lint configuration
///
/// Fragments are independent and side-effect-free; they never reference each
/// other. Layering semantics belong to the rule engine: for a file matched by
/// the scope of several fragments, a later fragment's rule assignments win
/// over earlier ones, globals merge additively, and an empty `files` scope
/// applies globally.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    /// Stable fragment identifier
    pub name: String,

    /// Glob patterns the fragment applies to; empty means global scope
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,

    /// Glob patterns excluded from the fragment's scope
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignores: Vec<String>,

    /// Parser selection, at most one per fragment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_options: Option<LanguageOptions>,

    /// Plugin namespace bindings enabled by this fragment
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub plugins: IndexMap<String, PluginRef>,

    /// Plugin-specific settings (resolver configuration and the like)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,

    /// Environment globals contributed by this fragment, merged additively
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub globals: IndexMap<String, GlobalAccess>,

    /// Rule severity assignments
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub rules: IndexMap<String, RuleSetting>,
}

impl Fragment {
    /// Start building a fragment with the given identifier
    pub fn builder(name: impl Into<String>) -> FragmentBuilder {
        FragmentBuilder {
            fragment: Fragment {
                name: name.into(),
                files: Vec::new(),
                ignores: Vec::new(),
                language_options: None,
                plugins: IndexMap::new(),
                settings: None,
                globals: IndexMap::new(),
                rules: IndexMap::new(),
            },
        }
    }

    /// Whether the fragment applies to every file (no glob scope)
    pub fn is_global(&self) -> bool {
        self.files.is_empty()
    }

    /// Severity this fragment assigns to a rule, if any
    pub fn rule_severity(&self, rule_id: &str) -> Option<Severity> {
        self.rules.get(rule_id).map(|setting| setting.severity)
    }
}

/// Ordered-append builder for [`Fragment`]
pub struct FragmentBuilder {
    fragment: Fragment,
}

impl FragmentBuilder {
    /// Add glob patterns to the fragment's file scope
    pub fn files<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fragment
            .files
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Add glob patterns excluded from the fragment's scope
    pub fn ignores<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fragment
            .ignores
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Assign a severity to a rule
    pub fn rule(mut self, rule_id: impl Into<String>, severity: Severity) -> Self {
        self.fragment
            .rules
            .insert(rule_id.into(), RuleSetting::plain(severity));
        self
    }

    /// Assign a severity with a rule-specific option payload
    pub fn rule_with(
        mut self,
        rule_id: impl Into<String>,
        severity: Severity,
        options: Value,
    ) -> Self {
        self.fragment
            .rules
            .insert(rule_id.into(), RuleSetting::with_options(severity, options));
        self
    }

    /// Contribute an environment global
    pub fn global(mut self, name: impl Into<String>, access: GlobalAccess) -> Self {
        self.fragment.globals.insert(name.into(), access);
        self
    }

    /// Bind a plugin namespace to a package
    pub fn plugin(mut self, namespace: impl Into<String>, package: impl Into<String>) -> Self {
        self.fragment
            .plugins
            .insert(namespace.into(), PluginRef::new(package));
        self
    }

    /// Select a parser for files in this fragment's scope
    pub fn parser(mut self, package: impl Into<String>) -> Self {
        self.fragment.language_options = Some(LanguageOptions {
            parser: package.into(),
            parser_options: None,
        });
        self
    }

    /// Select a parser with parser-specific options
    pub fn parser_with(mut self, package: impl Into<String>, options: Value) -> Self {
        self.fragment.language_options = Some(LanguageOptions {
            parser: package.into(),
            parser_options: Some(options),
        });
        self
    }

    /// Attach plugin-specific settings
    pub fn settings(mut self, settings: Value) -> Self {
        self.fragment.settings = Some(settings);
        self
    }

    pub fn build(self) -> Fragment {
        self.fragment
    }
}
