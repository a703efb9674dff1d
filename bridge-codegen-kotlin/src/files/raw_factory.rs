//! Raw factory interface per factory group.

use viewbridge_codegen::naming::{self, RuntimePackage};
use viewbridge_core::{GeneratedFile, GeneratorTarget};
use viewbridge_ir::{ClassName, ViewDeclaration};

use super::{GENERATED_HEADER, handle_type, source_path, symbols, with_type_parameters};
use crate::{
    KOTLIN_NAMING, KotlinFile,
    ast::{Fun, Interface, Param, TypeAlias},
};

/// `Compose<G>Factory<suffix>.kt`, shaped by the build target:
///
/// - Common: `expect` interface with no members plus the `<G>Factory` alias
/// - Primary: `actual` interface with one `create<Decl>` per declaration
/// - Other: `actual` interface with no members
pub struct RawFactoryFile<'a> {
    pub group: &'a str,
    pub declarations: Vec<&'a ViewDeclaration>,
    pub target: GeneratorTarget,
    pub runtime: &'a RuntimePackage,
}

impl<'a> RawFactoryFile<'a> {
    pub fn new(
        group: &'a str,
        declarations: Vec<&'a ViewDeclaration>,
        target: GeneratorTarget,
        runtime: &'a RuntimePackage,
    ) -> Self {
        Self {
            group,
            declarations,
            target,
            runtime,
        }
    }

    fn factory_method(&self, file: &mut KotlinFile, decl: &ViewDeclaration) -> Fun {
        let mut method = Fun::new(naming::factory_method_name(&decl.name))
            .modifier("public")
            .type_parameters(decl.type_parameters.iter().cloned());

        for param in decl.data_parameters() {
            method = method.param(Param::new(
                KOTLIN_NAMING.safe_name(&param.name),
                file.type_name(&param.value_type()),
            ));
        }

        let pair = file.import_fqn(symbols::PAIR);
        let handle = file.import_fqn(handle_type(decl.render_mode));
        let delegate = file.import(&ClassName::new(
            self.runtime.delegate(),
            naming::delegate_name(&decl.name),
        ));
        method.returns(format!(
            "{}<{}, {}>",
            pair,
            handle,
            with_type_parameters(delegate, &decl.type_parameters)
        ))
    }
}

impl GeneratedFile for RawFactoryFile<'_> {
    fn path(&self) -> String {
        source_path(
            self.runtime.root(),
            &format!(
                "{}{}.kt",
                naming::factory_interface_name(self.group),
                naming::target_file_suffix(self.target)
            ),
        )
    }

    fn render(&self) -> String {
        let interface_name = naming::factory_interface_name(self.group);
        let mut file = KotlinFile::new(self.runtime.root());
        file.declare(&interface_name);

        let interface = Interface::new(&interface_name).modifier("public");
        match self.target {
            GeneratorTarget::Common => {
                let alias = naming::factory_alias_name(self.group);
                file.declare(&alias);
                file.add(interface.modifier("expect"));
                file.add(TypeAlias::new(alias, &interface_name).modifier("public"));
            }
            GeneratorTarget::Primary => {
                let mut interface = interface.modifier("actual");
                for decl in &self.declarations {
                    interface = interface.function(self.factory_method(&mut file, decl));
                }
                file.add(interface);
            }
            GeneratorTarget::Other => {
                file.add(interface.modifier("actual"));
            }
        }

        file.render_with_header(GENERATED_HEADER)
    }
}
