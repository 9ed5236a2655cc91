//! End-to-end contract tests: compose a sequence, lint fixture sources with
//! the fixture engine, and assert which diagnostics appear.

use kasane_core::{
    AppType, CycleCheckMode, FeatureFlagOverrides, FeatureFlagSet, Severity, compose,
    resolve_preset, resolve_preset_named,
};
use kasane_verify::{LintReport, effective_globals, effective_severity};

fn fullstack() -> FeatureFlagSet {
    resolve_preset(AppType::Fullstack, &FeatureFlagOverrides::default())
}

fn backend_only() -> FeatureFlagSet {
    resolve_preset(AppType::BackendOnly, &FeatureFlagOverrides::default())
}

#[test]
fn compose_is_deterministic_across_calls() {
    for flags in [fullstack(), backend_only(), FeatureFlagSet::default()] {
        assert_eq!(compose(&flags), compose(&flags));
    }
}

#[test]
fn absent_flags_behave_like_explicit_false() {
    let deserialized: FeatureFlagSet = serde_json::from_str("{}").unwrap();
    assert_eq!(compose(&deserialized), compose(&FeatureFlagSet::default()));
}

#[test]
fn enabling_both_global_overrides_yields_the_union() {
    let sequence = compose(&FeatureFlagSet {
        node_globals: true,
        browser_globals: true,
        ..Default::default()
    });
    let globals = effective_globals(&sequence, "src/main.js");
    assert!(globals.contains_key("process"));
    assert!(globals.contains_key("window"));

    let sequence = compose(&FeatureFlagSet::default());
    let globals = effective_globals(&sequence, "src/main.js");
    assert!(!globals.contains_key("process"));
    assert!(!globals.contains_key("window"));
}

#[test]
fn import_hygiene_variants_are_mutually_exclusive() {
    for flags in [fullstack(), backend_only(), FeatureFlagSet::default()] {
        let sequence = compose(&flags);
        let ts = sequence.contains("import-hygiene-ts");
        let js = sequence.contains("import-hygiene-js");
        assert!(ts ^ js, "exactly one import-hygiene variant expected");
        assert_eq!(ts, flags.typescript);
    }
}

#[test]
fn cycle_override_wins_over_import_hygiene() {
    let sequence = compose(&fullstack());
    for path in ["src/a.ts", "src/b.tsx", "scripts/c.js"] {
        assert_eq!(
            effective_severity(&sequence, path, "import/no-cycle"),
            Severity::Off
        );
    }

    let flags = FeatureFlagSet {
        cycle_check: CycleCheckMode::On,
        ..fullstack()
    };
    let sequence = compose(&flags);
    assert_eq!(
        effective_severity(&sequence, "src/a.ts", "import/no-cycle"),
        Severity::Error
    );
}

#[test]
fn presets_disagree_on_frontend_flags() {
    let fullstack = fullstack();
    assert!(fullstack.react && fullstack.a11y && fullstack.storybook);

    let backend = backend_only();
    assert!(!backend.react && !backend.a11y && !backend.storybook);
}

// Scenario 1: a JSX-returning function linted under the backend-only preset
// must produce no react-namespace diagnostics.
#[test]
fn backend_only_never_fires_react_rules() {
    let sequence = compose(&backend_only());
    let source = "export function Widget({ html }) {\n  return <div dangerouslySetInnerHTML={{ __html: html }} />;\n}\n";
    let report = LintReport::check("src/widget.jsx", source, &sequence);
    assert!(!report.fired_with_prefix("react/"));
}

#[test]
fn fullstack_fires_react_rules_on_component_files() {
    let sequence = compose(&fullstack());
    let source = "export function Widget({ html }) {\n  return <div dangerouslySetInnerHTML={{ __html: html }} />;\n}\n";
    let report = LintReport::check("src/widget.jsx", source, &sequence);
    assert!(report.fired("react/no-danger"));
}

// Scenario 2: a clickable non-interactive element without a keyboard handler
// must be flagged under the fullstack preset.
#[test]
fn fullstack_flags_missing_keyboard_support() {
    let sequence = compose(&fullstack());
    let source =
        "export function Card({ open }) {\n  return <div onClick={open}>Open</div>;\n}\n";
    let report = LintReport::check("src/card.tsx", source, &sequence);
    assert!(report.fired("jsx-a11y/click-events-have-key-events"));

    let with_handler =
        "export function Card({ open }) {\n  return <div onClick={open} onKeyDown={open}>Open</div>;\n}\n";
    let report = LintReport::check("src/card.tsx", with_handler, &sequence);
    assert!(!report.fired("jsx-a11y/click-events-have-key-events"));
}

// Scenario 3: the baseline fragment flags var declarations, console usage,
// and signatures beyond three parameters.
#[test]
fn baseline_flags_var_console_and_parameter_count() {
    let sequence = compose(&FeatureFlagSet::default());
    let source =
        "var total = 1;\nconsole.log(total);\nfunction sum(a, b, c, d) {\n  return a + b + c + d;\n}\n";
    let report = LintReport::check("src/legacy.js", source, &sequence);
    assert!(report.fired("no-var"));
    assert!(report.fired("no-console"));
    assert!(report.fired("max-params"));
}

// Scenario 4: TypeScript-only syntax without the TypeScript fragment is a
// parse failure, not a stream of TypeScript rule diagnostics.
#[test]
fn typescript_syntax_without_fragment_is_a_parse_error() {
    let flags = resolve_preset(
        AppType::Fullstack,
        &FeatureFlagOverrides {
            typescript: Some(false),
            ..Default::default()
        },
    );
    let sequence = compose(&flags);
    let report = LintReport::check(
        "src/model.ts",
        "interface Point { x: number; y: number }\n",
        &sequence,
    );
    assert!(report.has_parse_error());
    assert!(!report.fired_with_prefix("@typescript-eslint/"));
}

// Scenario 5: an unrecognized application type fails instead of falling back
// to a default preset.
#[test]
fn unknown_app_type_fails() {
    let err = resolve_preset_named("staging", &FeatureFlagOverrides::default()).unwrap_err();
    assert!(err.to_string().contains("staging"));
}
