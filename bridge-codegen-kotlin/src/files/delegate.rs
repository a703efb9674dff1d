//! Per-declaration delegate interfaces.

use viewbridge_codegen::naming::{self, RuntimePackage};
use viewbridge_core::GeneratedFile;
use viewbridge_ir::{ClassName, ViewDeclaration};

use super::{GENERATED_HEADER, source_path};
use crate::{
    KOTLIN_NAMING, KotlinFile,
    ast::{Annotation, Fun, Interface, Param},
};

/// `<Decl>Delegate.kt`: one `update<Param>` member per data parameter.
///
/// The interface carries the runtime marker annotation so the foreign side
/// can discover which factory group and render mode it belongs to.
pub struct DelegateFile<'a> {
    pub declaration: &'a ViewDeclaration,
    pub runtime: &'a RuntimePackage,
}

impl<'a> DelegateFile<'a> {
    pub fn new(declaration: &'a ViewDeclaration, runtime: &'a RuntimePackage) -> Self {
        Self {
            declaration,
            runtime,
        }
    }

    fn marker(&self, file: &mut KotlinFile) -> Annotation {
        let decl = self.declaration;
        let name = file.import(&ClassName::from_fqn(&self.runtime.marker_annotation()));
        Annotation::new(name).arguments(format!(
            "factoryName = \"{}\", type = \"{}\", viewName = \"{}\"",
            decl.factory_group,
            decl.render_mode.annotation_name(),
            decl.name
        ))
    }
}

impl GeneratedFile for DelegateFile<'_> {
    fn path(&self) -> String {
        source_path(
            &self.runtime.delegate(),
            &format!("{}.kt", naming::delegate_name(&self.declaration.name)),
        )
    }

    fn render(&self) -> String {
        let decl = self.declaration;
        let delegate_name = naming::delegate_name(&decl.name);

        let mut file = KotlinFile::new(self.runtime.delegate());
        file.declare(&delegate_name);

        let marker = self.marker(&mut file);
        let mut interface = Interface::new(delegate_name)
            .annotation(marker)
            .modifier("public")
            .type_parameters(decl.type_parameters.iter().cloned());

        for param in decl.data_parameters() {
            let name = KOTLIN_NAMING.safe_name(&param.name);
            let ty = file.type_name(&param.value_type());
            interface = interface.function(
                Fun::new(naming::update_method_name(&param.name))
                    .modifier("public")
                    .param(Param::new(name, ty)),
            );
        }

        file.add(interface);
        file.render_with_header(GENERATED_HEADER)
    }
}
