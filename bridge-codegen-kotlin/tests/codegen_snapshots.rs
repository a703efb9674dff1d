//! Snapshot tests for Kotlin code generation.
//!
//! These tests verify that the generated Kotlin code matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use viewbridge_codegen::{
    pipeline::DiagnosticsExt,
    testing::{ViewFixture, finish, show_badge, show_map},
};
use viewbridge_codegen_kotlin::{Generator, LanguageCodegen};
use viewbridge_core::GeneratorTarget;

/// Generate the files of one target and return them sorted by path.
fn generate_files(target: GeneratorTarget) -> Vec<(String, String)> {
    let ctx = finish(target, vec![show_map(), show_badge()]);
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
fn test_common_files() {
    let files = generate_files(GeneratorTarget::Common);
    assert_eq!(
        paths(&files),
        vec![
            "dev/viewbridge/ComposeNativeViewFactory.kt",
            "dev/viewbridge/Compositions.kt",
        ]
    );
}

#[test]
fn test_common_compositions() {
    let files = generate_files(GeneratorTarget::Common);
    let compositions =
        get_file(&files, "dev/viewbridge/Compositions.kt").expect("Compositions.kt not found");
    insta::assert_snapshot!("common_compositions", compositions);
}

#[test]
fn test_common_factory() {
    let files = generate_files(GeneratorTarget::Common);
    let factory = get_file(&files, "dev/viewbridge/ComposeNativeViewFactory.kt")
        .expect("common factory not found");
    insta::assert_snapshot!("common_factory", factory);
}

#[test]
fn test_primary_files() {
    let files = generate_files(GeneratorTarget::Primary);
    assert_eq!(
        paths(&files),
        vec![
            "com/example/ShowBadge.primary.kt",
            "com/example/ShowMap.primary.kt",
            "dev/viewbridge/ComposeNativeViewFactory.primary.kt",
            "dev/viewbridge/delegate/ShowBadgeDelegate.kt",
            "dev/viewbridge/delegate/ShowMapDelegate.kt",
        ]
    );
}

#[test]
fn test_primary_factory() {
    let files = generate_files(GeneratorTarget::Primary);
    let factory = get_file(&files, "dev/viewbridge/ComposeNativeViewFactory.primary.kt")
        .expect("primary factory not found");
    insta::assert_snapshot!("primary_factory", factory);
}

#[test]
fn test_delegate() {
    let files = generate_files(GeneratorTarget::Primary);
    let delegate = get_file(&files, "dev/viewbridge/delegate/ShowMapDelegate.kt")
        .expect("delegate not found");
    insta::assert_snapshot!("show_map_delegate", delegate);
}

#[test]
fn test_retained_call_site() {
    let files = generate_files(GeneratorTarget::Primary);
    let call_site =
        get_file(&files, "com/example/ShowMap.primary.kt").expect("call site not found");
    insta::assert_snapshot!("show_map_call_site", call_site);
}

#[test]
fn test_call_site_without_handle_slot() {
    let files = generate_files(GeneratorTarget::Primary);
    let call_site =
        get_file(&files, "com/example/ShowBadge.primary.kt").expect("call site not found");
    insta::assert_snapshot!("show_badge_call_site", call_site);
}

#[test]
fn test_other_target_gets_empty_factory() {
    let files = generate_files(GeneratorTarget::Other);
    assert_eq!(
        files,
        vec![(
            "dev/viewbridge/ComposeNativeViewFactory.nonprimary.kt".to_string(),
            "// Code generated by viewbridge. DO NOT EDIT.\n\n\
             package dev.viewbridge\n\n\
             public actual interface ComposeNativeViewFactory\n"
                .to_string()
        )]
    );
}

#[test]
fn test_no_declarations_no_files() {
    let ctx = finish(GeneratorTarget::Common, Vec::new());
    assert!(Generator::new(&ctx).preview().is_empty());
}

#[test]
fn test_output_is_deterministic() {
    assert_eq!(
        generate_files(GeneratorTarget::Primary),
        generate_files(GeneratorTarget::Primary)
    );
}

#[test]
fn test_generate_skips_unchanged_files() {
    let temp = tempfile::TempDir::new().unwrap();
    let ctx = finish(GeneratorTarget::Primary, vec![show_map()]);
    let generator = Generator::new(&ctx);

    let first = generator.generate(temp.path()).unwrap();
    assert_eq!(first.written.len(), 3);
    assert!(
        temp.path()
            .join("dev/viewbridge/delegate/ShowMapDelegate.kt")
            .exists()
    );

    let second = generator.generate(temp.path()).unwrap();
    assert!(second.written.is_empty());
    assert_eq!(second.unchanged.len(), 3);
}

#[test]
fn test_same_name_in_two_groups_keeps_first_delegate() {
    let maps = ViewFixture::new("ShowMap")
        .group("Maps")
        .file("src/commonMain/kotlin/com/example/maps/Maps.kt", "com.example.maps")
        .data("zoom", "kotlin.Int")
        .build();
    let ctx = finish(GeneratorTarget::Primary, vec![show_map(), maps]);
    let generator = Generator::new(&ctx);

    let diagnostics = generator.diagnostics();
    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(diagnostics[0].code, Some("path-collision"));
    assert_eq!(
        diagnostics[0].location.as_deref(),
        Some("dev/viewbridge/delegate/ShowMapDelegate.kt")
    );

    let files = generator.preview();
    let delegates: Vec<_> = files
        .iter()
        .filter(|f| f.path == "dev/viewbridge/delegate/ShowMapDelegate.kt")
        .collect();
    assert_eq!(delegates.len(), 1);
    assert!(delegates[0].content.contains("factoryName = \"NativeView\""));
    assert!(files.iter().any(|f| f.path == "dev/viewbridge/ComposeMapsFactory.primary.kt"));
}

#[test]
fn test_same_source_stem_in_one_package_is_reported() {
    let a = ViewFixture::new("ShowA")
        .file("src/commonMain/kotlin/a/Views.kt", "com.example")
        .build();
    let b = ViewFixture::new("ShowB")
        .file("src/iosMain/kotlin/b/Views.kt", "com.example")
        .build();
    let ctx = finish(GeneratorTarget::Primary, vec![a, b]);
    let generator = Generator::new(&ctx);

    let diagnostics = generator.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, Some("path-collision"));
    assert_eq!(diagnostics[0].location.as_deref(), Some("com/example/Views.primary.kt"));

    let call_sites: Vec<_> = generator
        .preview()
        .into_iter()
        .filter(|f| f.path == "com/example/Views.primary.kt")
        .collect();
    assert_eq!(call_sites.len(), 1);
    assert!(call_sites[0].content.contains("actual fun ShowA("));
}

#[test]
fn test_distinct_declarations_report_nothing() {
    let ctx = finish(GeneratorTarget::Primary, vec![show_map(), show_badge()]);
    assert!(Generator::new(&ctx).diagnostics().is_empty());
}
