//! Round accumulation and the terminal finish hook.

use indexmap::IndexMap;
use viewbridge_core::GeneratorTarget;
use viewbridge_ir::{RawDeclaration, SourceFile, ViewDeclaration};
use viewbridge_manifest::BridgeOptions;

use super::{DeclarationReader, Diagnostic, DiagnosticsExt, Lint, ReaderOptions, lints};
use crate::naming::RuntimePackage;

/// Process-scoped state shared by every discovery round.
///
/// Declarations only ever accumulate: each round reads the newly visible
/// raw declarations and appends the ones that pass validation. Generators
/// never see the session itself, only the [`FinishContext`] produced by
/// [`Session::on_finish`].
///
/// # Example
///
/// ```ignore
/// let mut session = Session::new(&options);
/// for (_, round) in manifest.rounds() {
///     session.on_round_discovered(round);
/// }
/// let ctx = session.on_finish(GeneratorTarget::Primary);
/// let generator = KotlinGenerator::new(&ctx);
/// ```
pub struct Session {
    reader: DeclarationReader,
    runtime: RuntimePackage,
    declarations: Vec<ViewDeclaration>,
    diagnostics: Vec<Diagnostic>,
    lints: Vec<Box<dyn Lint>>,
    rounds: usize,
}

impl Session {
    /// Create a session with the built-in lints.
    pub fn new(options: &BridgeOptions) -> Self {
        Self {
            reader: DeclarationReader::new(ReaderOptions::from_options(options)),
            runtime: RuntimePackage::new(options.runtime_package()),
            declarations: Vec::new(),
            diagnostics: Vec::new(),
            lints: lints::builtin(),
            rounds: 0,
        }
    }

    /// Add a lint to run at finish.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Drop every registered lint.
    pub fn without_lints(mut self) -> Self {
        self.lints.clear();
        self
    }

    /// Read one round of newly visible declarations.
    ///
    /// Returns how many of them were accepted.
    pub fn on_round_discovered(&mut self, raw: &[RawDeclaration]) -> usize {
        self.rounds += 1;
        let before = self.declarations.len();
        let first_diagnostic = self.diagnostics.len();

        for decl in raw {
            if let Some(view) = self.reader.read(decl, &mut self.diagnostics) {
                self.declarations.push(view);
            }
        }

        for diagnostic in &self.diagnostics[first_diagnostic..] {
            diagnostic.log();
        }

        let accepted = self.declarations.len() - before;
        tracing::debug!(
            round = self.rounds,
            discovered = raw.len(),
            accepted,
            total = self.declarations.len(),
            "processed round"
        );
        accepted
    }

    pub fn declarations(&self) -> &[ViewDeclaration] {
        &self.declarations
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Run lints and freeze the accumulated state for `target`.
    pub fn on_finish(mut self, target: GeneratorTarget) -> FinishContext {
        let first_diagnostic = self.diagnostics.len();
        for lint in &self.lints {
            lint.check(&self.declarations, &mut self.diagnostics);
        }
        for diagnostic in &self.diagnostics[first_diagnostic..] {
            diagnostic.log();
        }

        tracing::debug!(
            %target,
            declarations = self.declarations.len(),
            errors = self.diagnostics.error_count(),
            warnings = self.diagnostics.warning_count(),
            "finishing"
        );

        FinishContext {
            target,
            declarations: self.declarations,
            diagnostics: self.diagnostics,
            runtime: self.runtime,
        }
    }
}

/// Read-only input to every generator for one target.
#[derive(Debug, Clone)]
pub struct FinishContext {
    pub target: GeneratorTarget,
    /// Accepted declarations in discovery order.
    pub declarations: Vec<ViewDeclaration>,
    /// Diagnostics from every round and from the lints.
    pub diagnostics: Vec<Diagnostic>,
    pub runtime: RuntimePackage,
}

impl FinishContext {
    pub fn new(
        target: GeneratorTarget,
        declarations: Vec<ViewDeclaration>,
        runtime: RuntimePackage,
    ) -> Self {
        Self {
            target,
            declarations,
            diagnostics: Vec::new(),
            runtime,
        }
    }

    /// Declarations keyed by factory group, groups in first-discovery order.
    pub fn groups(&self) -> IndexMap<&str, Vec<&ViewDeclaration>> {
        let mut groups: IndexMap<&str, Vec<&ViewDeclaration>> = IndexMap::new();
        for decl in &self.declarations {
            groups
                .entry(decl.factory_group.as_str())
                .or_default()
                .push(decl);
        }
        groups
    }

    /// Declarations keyed by containing file, files in first-discovery order.
    pub fn by_source_file(&self) -> IndexMap<&SourceFile, Vec<&ViewDeclaration>> {
        let mut files: IndexMap<&SourceFile, Vec<&ViewDeclaration>> = IndexMap::new();
        for decl in &self.declarations {
            files.entry(&decl.file).or_default().push(decl);
        }
        files
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

#[cfg(test)]
mod tests {
    use viewbridge_ir::{KotlinType, RawParameter};

    use super::*;
    use crate::pipeline::reader::MODIFIER_FQN;

    fn raw(name: &str, file: &str, group: Option<&str>) -> RawDeclaration {
        let mut decl = RawDeclaration::new(name, SourceFile::new(file, "com.example"))
            .with_parameter(RawParameter::new("modifier", KotlinType::class(MODIFIER_FQN)))
            .with_parameter(RawParameter::new("title", KotlinType::class("kotlin.String")));
        decl.bridge.factory_name = group.map(str::to_string);
        decl
    }

    #[test]
    fn test_rounds_accumulate() {
        let mut session = Session::new(&BridgeOptions::default());

        let accepted = session.on_round_discovered(&[raw("ShowMap", "Map.kt", None)]);
        assert_eq!(accepted, 1);

        let mut stub = raw("ShowChart", "Chart.kt", None);
        stub.is_expect = false;
        let accepted =
            session.on_round_discovered(&[stub, raw("ShowList", "List.kt", None)]);
        assert_eq!(accepted, 1);

        let names: Vec<_> = session.declarations().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["ShowMap", "ShowList"]);
        assert_eq!(session.rounds(), 2);
        assert_eq!(session.diagnostics().error_count(), 1);
    }

    #[test]
    fn test_groups_in_discovery_order() {
        let mut session = Session::new(&BridgeOptions::default());
        session.on_round_discovered(&[
            raw("ShowChart", "Chart.kt", Some("Charts")),
            raw("ShowMap", "Map.kt", None),
            raw("ShowPie", "Chart.kt", Some("Charts")),
        ]);
        let ctx = session.on_finish(GeneratorTarget::Primary);

        let groups = ctx.groups();
        let keys: Vec<_> = groups.keys().copied().collect();
        assert_eq!(keys, vec!["Charts", "NativeView"]);
        let charts: Vec<_> = groups["Charts"].iter().map(|d| d.name.as_str()).collect();
        assert_eq!(charts, vec!["ShowChart", "ShowPie"]);

        let files: Vec<_> = ctx.by_source_file().keys().map(|f| f.path.as_str()).collect();
        assert_eq!(files, vec!["Chart.kt", "Map.kt"]);
    }

    #[test]
    fn test_finish_runs_lints() {
        let mut session = Session::new(&BridgeOptions::default());
        session.on_round_discovered(&[raw("ShowMap", "A.kt", None)]);
        session.on_round_discovered(&[raw("ShowMap", "B.kt", None)]);

        let ctx = session.on_finish(GeneratorTarget::Common);
        assert_eq!(ctx.declarations.len(), 2);
        assert_eq!(ctx.diagnostics.len(), 1);
        assert_eq!(ctx.diagnostics[0].code, Some("duplicate-factory-method"));
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_without_lints() {
        let mut session = Session::new(&BridgeOptions::default()).without_lints();
        session.on_round_discovered(&[raw("ShowMap", "A.kt", None), raw("ShowMap", "B.kt", None)]);

        let ctx = session.on_finish(GeneratorTarget::Common);
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_custom_lint() {
        struct NoCharts;
        impl Lint for NoCharts {
            fn name(&self) -> &'static str {
                "no-charts"
            }
            fn description(&self) -> &'static str {
                "Reject the Charts group"
            }
            fn check(&self, declarations: &[ViewDeclaration], diagnostics: &mut Vec<Diagnostic>) {
                for decl in declarations.iter().filter(|d| d.factory_group == "Charts") {
                    diagnostics.push(Diagnostic::error("lint", decl.name.clone()));
                }
            }
        }

        let mut session = Session::new(&BridgeOptions::default()).with_lint(NoCharts);
        session.on_round_discovered(&[raw("ShowChart", "Chart.kt", Some("Charts"))]);

        assert!(session.on_finish(GeneratorTarget::Primary).has_errors());
    }

    #[test]
    fn test_runtime_package_from_options() {
        let mut options = BridgeOptions::default();
        options.merge([(
            viewbridge_manifest::keys::RUNTIME_PACKAGE.to_string(),
            "com.example.bridge".to_string(),
        )]);
        let ctx = Session::new(&options).on_finish(GeneratorTarget::Primary);
        assert_eq!(ctx.runtime.delegate(), "com.example.bridge.delegate");
    }
}
