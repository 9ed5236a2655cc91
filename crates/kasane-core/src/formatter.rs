//! Formatter options generator
//!
//! The formatter boundary is intentionally thin: a fixed style-option mapping
//! where the only conditional behavior is whether the CSS-utility-class
//! sorting plugin is appended for fullstack applications.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::flags::AppType;

/// Trailing-comma policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TrailingComma {
    /// No trailing commas
    None,
    /// Trailing commas where valid in ES5
    Es5,
    /// Trailing commas wherever possible
    All,
}

/// Style-option mapping consumed by the external code formatter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    /// Maximum line width before wrapping
    pub print_width: usize,

    /// Indentation width in spaces
    pub tab_width: usize,

    /// Prefer single quotes over double quotes
    pub single_quote: bool,

    /// Terminate statements with semicolons
    pub semi: bool,

    /// Trailing-comma policy
    pub trailing_comma: TrailingComma,

    /// Formatter plugin packages, in load order
    pub plugins: Vec<String>,
}

/// Generate the formatter options for an application type.
///
/// Pure function; the fullstack variant appends the CSS-utility-class
/// sorting plugin, the backend-only variant omits it.
pub fn format_options(app_type: AppType) -> FormatOptions {
    let mut plugins = vec!["prettier-plugin-packagejson".to_string()];
    if app_type == AppType::Fullstack {
        plugins.push("prettier-plugin-tailwindcss".to_string());
    }

    FormatOptions {
        print_width: 100,
        tab_width: 2,
        single_quote: true,
        semi: true,
        trailing_comma: TrailingComma::All,
        plugins,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fullstack_appends_class_sorting_plugin() {
        let options = format_options(AppType::Fullstack);
        assert!(options
            .plugins
            .iter()
            .any(|p| p == "prettier-plugin-tailwindcss"));
    }

    #[test]
    fn backend_only_omits_class_sorting_plugin() {
        let options = format_options(AppType::BackendOnly);
        assert!(!options
            .plugins
            .iter()
            .any(|p| p == "prettier-plugin-tailwindcss"));
        // Everything but the plugin list is identical across app types
        let fullstack = format_options(AppType::Fullstack);
        assert_eq!(options.print_width, fullstack.print_width);
        assert_eq!(options.tab_width, fullstack.tab_width);
        assert_eq!(options.trailing_comma, fullstack.trailing_comma);
    }

    #[test]
    fn options_serialize_in_formatter_shape() {
        let value = serde_json::to_value(format_options(AppType::Fullstack)).unwrap();
        assert_eq!(value["printWidth"], 100);
        assert_eq!(value["tabWidth"], 2);
        assert_eq!(value["trailingComma"], "all");
        assert_eq!(value["singleQuote"], true);
    }
}
