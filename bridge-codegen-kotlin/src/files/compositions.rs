//! Composition-local factory accessors.

use viewbridge_codegen::naming::{self, RuntimePackage};
use viewbridge_core::GeneratedFile;
use viewbridge_ir::ClassName;

use super::{GENERATED_HEADER, source_path, symbols};
use crate::{KotlinFile, ast::Property};

/// `Compositions.kt`: one `Local<G>Factory` per factory group.
///
/// ```kotlin
/// public val LocalNativeViewFactory: ProvidableCompositionLocal<ComposeNativeViewFactory> =
///     compositionLocalOf(defaultFactory = { error("""You have to provide LocalNativeViewFactory""") })
/// ```
pub struct CompositionsFile<'a> {
    pub groups: Vec<&'a str>,
    pub runtime: &'a RuntimePackage,
}

impl<'a> CompositionsFile<'a> {
    pub fn new(groups: Vec<&'a str>, runtime: &'a RuntimePackage) -> Self {
        Self { groups, runtime }
    }
}

impl GeneratedFile for CompositionsFile<'_> {
    fn path(&self) -> String {
        source_path(self.runtime.root(), "Compositions.kt")
    }

    fn render(&self) -> String {
        let mut file = KotlinFile::new(self.runtime.root());
        let local = file.import_fqn(symbols::PROVIDABLE_COMPOSITION_LOCAL);
        let local_of = file.import_fqn(symbols::COMPOSITION_LOCAL_OF);

        for group in &self.groups {
            let accessor = naming::local_factory_accessor_name(group);
            let factory = file.import(&ClassName::new(
                self.runtime.root(),
                naming::factory_interface_name(group),
            ));
            file.add(
                Property::new(
                    &accessor,
                    format!("{}<{}>", local, factory),
                    format!(
                        "{}(defaultFactory = {{ error(\"\"\"You have to provide {}\"\"\") }})",
                        local_of, accessor
                    ),
                )
                .modifier("public"),
            );
        }

        file.render_with_header(GENERATED_HEADER)
    }
}
