//! Snapshot tests for Swift code generation.
//!
//! These tests verify that the generated Swift code matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use viewbridge_codegen::{
    pipeline::DiagnosticsExt,
    testing::{ViewFixture, finish, show_badge, show_map},
};
use viewbridge_codegen_swift::{Generator, LanguageCodegen};
use viewbridge_core::GeneratorTarget;
use viewbridge_ir::KotlinType;

/// Generate the Swift files for the primary target, sorted by path.
fn generate_files() -> Vec<(String, String)> {
    let ctx = finish(GeneratorTarget::Primary, vec![show_map(), show_badge()]);
    let generator = Generator::new(&ctx);
    let files = generator.preview();

    let mut result: Vec<(String, String)> =
        files.into_iter().map(|f| (f.path, f.content)).collect();
    result.sort_by(|a, b| a.0.cmp(&b.0));
    result
}

/// Get a specific file from the generated output.
fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

fn paths(files: &[(String, String)]) -> Vec<&str> {
    files.iter().map(|(p, _)| p.as_str()).collect()
}

#[test]
fn test_primary_files() {
    let files = generate_files();
    assert_eq!(
        paths(&files),
        vec![
            "ForeignNativeViewFactory.swift",
            "NativeViewFactory.swift",
            "ShowBadgeObservable.swift",
        ]
    );
}

#[test]
fn test_factory_protocol() {
    let files = generate_files();
    let protocol = get_file(&files, "NativeViewFactory.swift").expect("protocol not found");
    insta::assert_snapshot!("factory_protocol", protocol);
}

#[test]
fn test_foreign_binding() {
    let files = generate_files();
    let binding =
        get_file(&files, "ForeignNativeViewFactory.swift").expect("binding not found");
    insta::assert_snapshot!("foreign_binding", binding);
}

#[test]
fn test_observable() {
    let files = generate_files();
    let observable =
        get_file(&files, "ShowBadgeObservable.swift").expect("observable not found");
    insta::assert_snapshot!("show_badge_observable", observable);
}

#[test]
fn test_non_primary_targets_have_no_swift_surface() {
    for target in [GeneratorTarget::Common, GeneratorTarget::Other] {
        let ctx = finish(target, vec![show_map(), show_badge()]);
        let generator = Generator::new(&ctx);
        assert!(generator.preview().is_empty());
        assert!(generator.diagnostics().is_empty());
    }
}

#[test]
fn test_framework_module_import() {
    let ctx = finish(GeneratorTarget::Primary, vec![show_badge()]);
    let generator = Generator::new(&ctx).framework_module(Some("Shared".to_string()));

    for file in generator.preview() {
        assert!(
            file.content.contains("\nimport Shared\n"),
            "{} does not import the framework module",
            file.path
        );
    }
}

#[test]
fn test_unmapped_declaration_left_out() {
    let broken = ViewFixture::new("ShowChart")
        .group("Charts")
        .param(
            "points",
            KotlinType::generic("kotlin.Array", [KotlinType::class("kotlin.Float")]),
        )
        .build();
    let ctx = finish(GeneratorTarget::Primary, vec![show_map(), broken]);
    let generator = Generator::new(&ctx);

    let diagnostics = generator.diagnostics();
    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(diagnostics[0].code, Some("unmapped-type"));
    assert!(diagnostics[0].message.starts_with("ShowChart: "));

    let files = generator.preview();
    let chart_protocol = files
        .iter()
        .find(|f| f.path == "ChartsFactory.swift")
        .expect("protocol kept for emptied group");
    assert!(!chart_protocol.content.contains("ShowChart"));
    assert!(!files.iter().any(|f| f.path == "ShowChartObservable.swift"));
    assert!(files.iter().any(|f| f.path == "NativeViewFactory.swift"));
}

#[test]
fn test_output_is_deterministic() {
    assert_eq!(generate_files(), generate_files());
}

#[test]
fn test_generate_skips_unchanged_files() {
    let temp = tempfile::TempDir::new().unwrap();
    let ctx = finish(GeneratorTarget::Primary, vec![show_map(), show_badge()]);
    let generator = Generator::new(&ctx);

    let first = generator.generate(temp.path()).unwrap();
    assert_eq!(first.written.len(), 3);
    assert!(temp.path().join("ShowBadgeObservable.swift").exists());

    let second = generator.generate(temp.path()).unwrap();
    assert!(second.written.is_empty());
    assert_eq!(second.unchanged.len(), 3);
}

#[test]
fn test_same_name_in_two_groups_keeps_first_observable() {
    let badges = ViewFixture::new("ShowBadge")
        .group("Badges")
        .file("src/commonMain/kotlin/com/example/badges/Badges.kt", "com.example.badges")
        .data("label", "kotlin.String")
        .build();
    let ctx = finish(GeneratorTarget::Primary, vec![show_badge(), badges]);
    let generator = Generator::new(&ctx);

    let diagnostics = generator.diagnostics();
    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(diagnostics[0].code, Some("path-collision"));
    assert_eq!(diagnostics[0].location.as_deref(), Some("ShowBadgeObservable.swift"));

    let files = generator.preview();
    let observables: Vec<_> = files
        .iter()
        .filter(|f| f.path == "ShowBadgeObservable.swift")
        .collect();
    assert_eq!(observables.len(), 1);
    assert!(!observables[0].content.contains("label"));
    assert!(files.iter().any(|f| f.path == "BadgesFactory.swift"));
}
