//! Fragment catalog
//!
//! The fixed library of named configuration fragments the composition engine
//! selects from. Every fragment is a process-wide immutable singleton built
//! eagerly on first use; the catalog holds no mutable state and fragments
//! never reference each other.
//!
//! Rule identifiers and plugin packages follow the flat-config ecosystem the
//! composed sequence targets; the catalog only records which capabilities a
//! fragment enables, never how a plugin implements them.

use std::sync::LazyLock;

use serde_json::{Value, json};

use crate::fragment::{Fragment, GlobalAccess, Severity};

/// Glob scope for TypeScript sources
const TYPESCRIPT_FILES: [&str; 2] = ["**/*.ts", "**/*.tsx"];

/// Glob scope for markup-bearing component sources
const COMPONENT_FILES: [&str; 2] = ["**/*.jsx", "**/*.tsx"];

/// Glob scope for unit test files
const TEST_FILES: [&str; 4] = [
    "**/*.test.ts",
    "**/*.test.tsx",
    "**/*.spec.ts",
    "**/*.spec.tsx",
];

/// Glob scope for end-to-end test files
const CYPRESS_FILES: [&str; 3] = ["**/*.cy.ts", "**/*.cy.tsx", "cypress/**/*.ts"];

/// Build-output and tool-config directories that are never linted.
///
/// These live on the always-included baseline fragment so they are excluded
/// regardless of which feature flags are set.
const GLOBAL_IGNORES: [&str; 5] = [
    "dist/**",
    "build/**",
    "coverage/**",
    "storybook-static/**",
    "node_modules/**",
];

/// Maximum parameter count before the baseline flags a function signature
const MAX_PARAMS: u32 = 3;

/// Verbs exempt from the "functions must start with a verb" convention
const FUNCTION_NAME_ALLOWLIST: [&str; 9] = [
    "success", "failure", "noop", "idle", "ready", "pipe", "memo", "invariant", "middleware",
];

/// Alias prefix preferred over deep relative import paths
const ALIAS_PREFIX: &str = "@";

/// Directory the alias prefix resolves to
const ALIAS_ROOT: &str = "src";

/// Relative imports deeper than this must use the alias prefix instead
const ALIAS_MAX_DEPTH: u32 = 2;

/// Option payload for the import-alias-preference rule
fn alias_options() -> Value {
    json!({
        "allowSameFolder": true,
        "rootDir": ALIAS_ROOT,
        "prefix": ALIAS_PREFIX,
        "allowedDepth": ALIAS_MAX_DEPTH,
    })
}

/// Language-level baseline rules, always included, global scope
pub static BASELINE: LazyLock<Fragment> = LazyLock::new(|| {
    Fragment::builder("baseline")
        .ignores(GLOBAL_IGNORES)
        .rule("no-var", Severity::Error)
        .rule("no-console", Severity::Error)
        .rule_with("max-params", Severity::Error, json!({ "max": MAX_PARAMS }))
        .rule("prefer-const", Severity::Error)
        .rule("eqeqeq", Severity::Error)
        .rule("no-param-reassign", Severity::Error)
        .rule("no-unused-vars", Severity::Error)
        .rule("curly", Severity::Error)
        .build()
});

/// TypeScript parser and rule layer, scoped to `.ts`/`.tsx` files only
pub static TYPESCRIPT: LazyLock<Fragment> = LazyLock::new(|| {
    Fragment::builder("typescript")
        .files(TYPESCRIPT_FILES)
        .parser_with("@typescript-eslint/parser", json!({ "projectService": true }))
        .plugin("@typescript-eslint", "@typescript-eslint/eslint-plugin")
        // The TypeScript-aware variant replaces the core unused-vars check
        .rule("no-unused-vars", Severity::Off)
        .rule("@typescript-eslint/no-unused-vars", Severity::Error)
        .rule("@typescript-eslint/no-explicit-any", Severity::Error)
        .rule("@typescript-eslint/no-floating-promises", Severity::Error)
        .rule("@typescript-eslint/consistent-type-imports", Severity::Warn)
        .build()
});

/// Alphabetical ordering of imports, exports, and members.
///
/// Always included, and placed after the language fragments so the ordering
/// severities are not overridden by them.
pub static SORTING: LazyLock<Fragment> = LazyLock::new(|| {
    Fragment::builder("sorting")
        .plugin("simple-import-sort", "eslint-plugin-simple-import-sort")
        .rule("simple-import-sort/imports", Severity::Error)
        .rule("simple-import-sort/exports", Severity::Error)
        .build()
});

/// End-to-end test runner layer: test globals plus relaxed async assertions
pub static CYPRESS: LazyLock<Fragment> = LazyLock::new(|| {
    Fragment::builder("cypress")
        .files(CYPRESS_FILES)
        .plugin("cypress", "eslint-plugin-cypress")
        .global("cy", GlobalAccess::Readonly)
        .global("Cypress", GlobalAccess::Readonly)
        .rule("cypress/no-unnecessary-waiting", Severity::Error)
        .rule("cypress/unsafe-to-chain-command", Severity::Error)
        // Command chains are thenable but intentionally not awaited
        .rule("@typescript-eslint/no-floating-promises", Severity::Off)
        .build()
});

/// Accessibility heuristics, scoped to markup-bearing file types
pub static A11Y: LazyLock<Fragment> = LazyLock::new(|| {
    Fragment::builder("a11y")
        .files(COMPONENT_FILES)
        .plugin("jsx-a11y", "eslint-plugin-jsx-a11y")
        .rule("jsx-a11y/click-events-have-key-events", Severity::Error)
        .rule("jsx-a11y/alt-text", Severity::Error)
        .rule("jsx-a11y/anchor-is-valid", Severity::Warn)
        .rule(
            "jsx-a11y/no-noninteractive-element-interactions",
            Severity::Warn,
        )
        .build()
});

/// Unit test framework layer with one stricter nesting-depth override
pub static VITEST: LazyLock<Fragment> = LazyLock::new(|| {
    Fragment::builder("vitest")
        .files(TEST_FILES)
        .plugin("vitest", "@vitest/eslint-plugin")
        .rule("vitest/expect-expect", Severity::Error)
        .rule("vitest/no-focused-tests", Severity::Error)
        .rule("vitest/no-identical-title", Severity::Error)
        .rule_with("vitest/max-nested-describe", Severity::Error, json!({ "max": 2 }))
        .build()
});

/// Filename casing conventions
pub static FILENAMES: LazyLock<Fragment> = LazyLock::new(|| {
    Fragment::builder("filenames")
        .plugin("check-file", "eslint-plugin-check-file")
        .rule_with(
            "check-file/filename-naming-convention",
            Severity::Error,
            json!({ "**/*.{ts,tsx}": "KEBAB_CASE", "ignoreMiddleExtensions": true }),
        )
        .rule_with(
            "check-file/folder-naming-convention",
            Severity::Error,
            json!({ "src/**/": "KEBAB_CASE" }),
        )
        .build()
});

/// Function naming conventions with an explicit verb allow-list
pub static FUNCTION_NAMING: LazyLock<Fragment> = LazyLock::new(|| {
    Fragment::builder("function-naming")
        .plugin("function-name", "eslint-plugin-function-name")
        .rule_with(
            "function-name/starts-with-verb",
            Severity::Error,
            json!({ "whitelist": FUNCTION_NAME_ALLOWLIST }),
        )
        .build()
});

/// Promise-usage hygiene
pub static PROMISE: LazyLock<Fragment> = LazyLock::new(|| {
    Fragment::builder("promise")
        .plugin("promise", "eslint-plugin-promise")
        .rule("promise/catch-or-return", Severity::Error)
        .rule("promise/param-names", Severity::Error)
        .rule("promise/no-nesting", Severity::Warn)
        .rule("promise/always-return", Severity::Off)
        .build()
});

/// General code-quality heuristics
pub static CODE_QUALITY: LazyLock<Fragment> = LazyLock::new(|| {
    Fragment::builder("code-quality")
        .plugin("sonarjs", "eslint-plugin-sonarjs")
        .rule_with("sonarjs/cognitive-complexity", Severity::Error, json!(15))
        .rule("sonarjs/no-identical-functions", Severity::Error)
        .rule("sonarjs/no-duplicate-string", Severity::Warn)
        .build()
});

/// Alias-prefix preference over deep relative import paths
pub static IMPORT_ALIAS: LazyLock<Fragment> = LazyLock::new(|| {
    Fragment::builder("import-alias")
        .plugin(
            "no-relative-import-paths",
            "eslint-plugin-no-relative-import-paths",
        )
        .rule_with(
            "no-relative-import-paths/no-relative-import-paths",
            Severity::Warn,
            alias_options(),
        )
        .build()
});

/// Component framework layer, scoped to component file types
pub static REACT: LazyLock<Fragment> = LazyLock::new(|| {
    Fragment::builder("react")
        .files(COMPONENT_FILES)
        .plugin("react", "eslint-plugin-react")
        .plugin("react-hooks", "eslint-plugin-react-hooks")
        .settings(json!({ "react": { "version": "detect" } }))
        .rule("react/jsx-key", Severity::Error)
        .rule("react/no-danger", Severity::Error)
        .rule("react/self-closing-comp", Severity::Warn)
        // Automatic runtime, no explicit React import required
        .rule("react/react-in-jsx-scope", Severity::Off)
        .rule("react-hooks/rules-of-hooks", Severity::Error)
        .rule("react-hooks/exhaustive-deps", Severity::Warn)
        .build()
});

/// Import hygiene, TypeScript variant: type-aware unresolved-import check
/// backed by the TypeScript resolver
pub static IMPORT_HYGIENE_TS: LazyLock<Fragment> = LazyLock::new(|| {
    Fragment::builder("import-hygiene-ts")
        .plugin("import", "eslint-plugin-import")
        .settings(json!({ "import/resolver": { "typescript": true } }))
        .rule("import/no-unresolved", Severity::Error)
        .rule_with("import/no-cycle", Severity::Error, json!({ "maxDepth": 8 }))
        .rule("import/no-self-import", Severity::Error)
        .rule("import/first", Severity::Error)
        .rule("import/newline-after-import", Severity::Warn)
        .build()
});

/// Import hygiene, JavaScript variant: no compiler to resolve bare
/// extensions, so the extension-in-path check is disabled; scoped to
/// non-TypeScript file types
pub static IMPORT_HYGIENE_JS: LazyLock<Fragment> = LazyLock::new(|| {
    Fragment::builder("import-hygiene-js")
        .files(["**/*.js", "**/*.jsx", "**/*.mjs", "**/*.cjs"])
        .plugin("import", "eslint-plugin-import")
        .rule("import/extensions", Severity::Off)
        .rule_with("import/no-cycle", Severity::Error, json!({ "maxDepth": 8 }))
        .rule("import/no-self-import", Severity::Error)
        .rule("import/first", Severity::Error)
        .build()
});

/// Compatibility layer for assertion-style conflicts with the core
/// unused-expression check
pub static ASSERTION_COMPAT: LazyLock<Fragment> = LazyLock::new(|| {
    Fragment::builder("assertion-compat")
        .plugin("chai-friendly", "eslint-plugin-chai-friendly")
        .rule("no-unused-expressions", Severity::Off)
        .rule("chai-friendly/no-unused-expressions", Severity::Error)
        .build()
});

/// GraphQL document rules with a dedicated parser
pub static GRAPHQL: LazyLock<Fragment> = LazyLock::new(|| {
    Fragment::builder("graphql")
        .files(["**/*.graphql", "**/*.gql"])
        .parser("@graphql-eslint/eslint-plugin")
        .plugin("@graphql-eslint", "@graphql-eslint/eslint-plugin")
        .rule("@graphql-eslint/known-type-names", Severity::Error)
        .rule("@graphql-eslint/no-anonymous-operations", Severity::Warn)
        .rule("@graphql-eslint/naming-convention", Severity::Warn)
        .build()
});

/// Storybook story rules; tool config is excluded from the story scope
pub static STORYBOOK: LazyLock<Fragment> = LazyLock::new(|| {
    Fragment::builder("storybook")
        .files([
            "**/*.stories.ts",
            "**/*.stories.tsx",
            "**/*.story.ts",
            "**/*.story.tsx",
        ])
        .ignores([".storybook/**"])
        .plugin("storybook", "eslint-plugin-storybook")
        .rule("storybook/await-interactions", Severity::Error)
        .rule("storybook/no-redundant-story-name", Severity::Warn)
        .rule("storybook/hierarchy-separator", Severity::Warn)
        .build()
});

/// Data-fetching query library rules
pub static QUERY: LazyLock<Fragment> = LazyLock::new(|| {
    Fragment::builder("query")
        .plugin("@tanstack/query", "@tanstack/eslint-plugin-query")
        .rule("@tanstack/query/exhaustive-deps", Severity::Error)
        .rule("@tanstack/query/stable-query-client", Severity::Error)
        .rule("@tanstack/query/no-rest-destructuring", Severity::Warn)
        .build()
});

/// Router library rules
pub static ROUTER: LazyLock<Fragment> = LazyLock::new(|| {
    Fragment::builder("router")
        .plugin("@tanstack/router", "@tanstack/eslint-plugin-router")
        .rule("@tanstack/router/create-route-property-order", Severity::Error)
        .build()
});

/// Process-runtime globals override; additive only, global scope
pub static NODE_GLOBALS: LazyLock<Fragment> = LazyLock::new(|| {
    Fragment::builder("node-globals")
        .global("process", GlobalAccess::Readonly)
        .global("Buffer", GlobalAccess::Readonly)
        .global("__dirname", GlobalAccess::Readonly)
        .global("__filename", GlobalAccess::Readonly)
        .global("require", GlobalAccess::Readonly)
        .global("module", GlobalAccess::Writable)
        .build()
});

/// Browser globals override; additive only, global scope
pub static BROWSER_GLOBALS: LazyLock<Fragment> = LazyLock::new(|| {
    Fragment::builder("browser-globals")
        .global("window", GlobalAccess::Readonly)
        .global("document", GlobalAccess::Readonly)
        .global("navigator", GlobalAccess::Readonly)
        .global("fetch", GlobalAccess::Readonly)
        .global("localStorage", GlobalAccess::Readonly)
        .global("sessionStorage", GlobalAccess::Readonly)
        .build()
});

/// Synthetic override that disables cross-file cycle detection.
///
/// Appended strictly last by the composition engine when the cycle-check
/// mode is off, so it wins over whichever import-hygiene variant configured
/// the rule.
pub static CYCLE_CHECK_OFF: LazyLock<Fragment> = LazyLock::new(|| {
    Fragment::builder("cycle-check-off")
        .rule("import/no-cycle", Severity::Off)
        .build()
});
