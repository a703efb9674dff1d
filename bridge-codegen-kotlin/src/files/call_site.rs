//! `actual` implementations of the bridged declarations.

use viewbridge_codegen::{
    builder::CodeFragment,
    naming::{self, RuntimePackage},
};
use viewbridge_core::{GeneratedFile, GeneratorTarget, file_stem};
use viewbridge_ir::{ClassName, SourceFile, ViewDeclaration};

use super::{GENERATED_HEADER, source_path, symbols};
use crate::{
    KOTLIN_NAMING, KotlinFile,
    ast::{Annotation, Fun, Param},
};

const MODIFIER_FQN: &str = "androidx.compose.ui.Modifier";

/// `<stem><suffix>.kt` holding one `actual fun` per declaration of a source file.
///
/// Each body fetches the group factory from its composition local, creates
/// the view once, forwards every data parameter to the delegate whenever it
/// changes, and hands the view to the render target.
pub struct CallSiteFile<'a> {
    pub source: &'a SourceFile,
    pub declarations: Vec<&'a ViewDeclaration>,
    pub target: GeneratorTarget,
    pub runtime: &'a RuntimePackage,
}

impl<'a> CallSiteFile<'a> {
    pub fn new(
        source: &'a SourceFile,
        declarations: Vec<&'a ViewDeclaration>,
        target: GeneratorTarget,
        runtime: &'a RuntimePackage,
    ) -> Self {
        Self {
            source,
            declarations,
            target,
            runtime,
        }
    }

    fn actual_fun(&self, file: &mut KotlinFile, decl: &ViewDeclaration) -> Fun {
        let opt_in = file.import_fqn(symbols::OPT_IN);
        let foreign_api = file.import_fqn(symbols::EXPERIMENTAL_FOREIGN_API);

        let mut function = Fun::new(&decl.name)
            .annotation(Annotation::new(opt_in).arguments(format!("{}::class", foreign_api)));
        for annotation in &decl.annotations {
            let name = file.import(&annotation.name);
            let mut rendered = Annotation::new(name);
            if let Some(arguments) = &annotation.arguments {
                rendered = rendered.arguments(arguments);
            }
            function = function.annotation(rendered);
        }

        function = function
            .modifier(decl.visibility.keyword())
            .modifier("actual")
            .type_parameters(decl.type_parameters.iter().cloned());

        for param in &decl.parameters {
            let ty = file.type_name(&param.ty);
            let mut rendered = Param::new(KOTLIN_NAMING.safe_name(&param.name), ty);
            for modifier in &param.modifiers {
                rendered = rendered.modifier(modifier.keyword());
            }
            function = function.param(rendered);
        }

        let body = self.body(file, decl);
        function.wrap_params().body(body)
    }

    fn body(&self, file: &mut KotlinFile, decl: &ViewDeclaration) -> Vec<CodeFragment> {
        let local = file.import(&ClassName::new(
            self.runtime.root(),
            naming::local_factory_accessor_name(&decl.factory_group),
        ));
        let remember = file.import_fqn(symbols::REMEMBER);

        let args = decl
            .data_parameters()
            .map(|p| KOTLIN_NAMING.safe_name(&p.name))
            .collect::<Vec<_>>();
        let type_args = if decl.is_generic() {
            format!("<{}>", decl.type_parameters.join(", "))
        } else {
            String::new()
        };
        let create = format!(
            "factory.{}{}({})",
            naming::factory_method_name(&decl.name),
            type_args,
            args.join(", ")
        );

        let mut body = vec![CodeFragment::line(format!("val factory = {}.current", local))];

        if decl.retain_across_navigation {
            let saveable = file.import_fqn(symbols::REMEMBER_SAVEABLE);
            let random = file.import_fqn(symbols::RANDOM);
            let view_model = file.import_fqn(symbols::VIEW_MODEL);
            let holder = file.import_fqn(&self.runtime.view_holder());
            body.extend([
                CodeFragment::line(format!(
                    "val key = {} {{ {}.nextInt().toString(16) }}",
                    saveable, random
                )),
                CodeFragment::braced(
                    format!("val holder = {}(key = key) {{", view_model),
                    vec![CodeFragment::line(format!("{}({{ {} }})", holder, create))],
                ),
                CodeFragment::line(format!("val delegate = {}(holder) {{ holder.delegate }}", remember)),
                CodeFragment::line(format!("val view = {}(holder) {{ holder.view }}", remember)),
            ]);
        } else {
            body.extend([
                CodeFragment::braced(
                    format!("val viewFactory = {} {{", remember),
                    vec![CodeFragment::line(create)],
                ),
                CodeFragment::line(format!(
                    "val delegate = {}(viewFactory) {{ viewFactory.second }}",
                    remember
                )),
                CodeFragment::line(format!(
                    "val view = {}(viewFactory) {{ viewFactory.first }}",
                    remember
                )),
            ]);
        }

        if !args.is_empty() {
            body.push(CodeFragment::blank());
            for (param, arg) in decl.data_parameters().zip(&args) {
                body.push(CodeFragment::line(format!(
                    "{}({}) {{ delegate.{}({}) }}",
                    remember,
                    arg,
                    naming::update_method_name(&param.name),
                    arg
                )));
            }
        }

        let modifier = match decl.handle_slot() {
            Some(slot) if slot.ty.is_nullable() => format!(
                "{} ?: {}",
                KOTLIN_NAMING.safe_name(&slot.name),
                file.import_fqn(MODIFIER_FQN)
            ),
            Some(slot) => KOTLIN_NAMING.safe_name(&slot.name),
            None => file.import_fqn(MODIFIER_FQN),
        };
        let render_target = file.import(&decl.render_target);

        body.push(CodeFragment::blank());
        body.push(CodeFragment::block(
            format!("{}(", render_target),
            vec![
                CodeFragment::line(format!("modifier = {},", modifier)),
                CodeFragment::line("factory = { view },"),
            ],
            Some(")".to_string()),
        ));
        body
    }
}

impl GeneratedFile for CallSiteFile<'_> {
    fn path(&self) -> String {
        source_path(
            &self.source.package,
            &format!(
                "{}{}.kt",
                file_stem(&self.source.path),
                naming::target_file_suffix(self.target)
            ),
        )
    }

    fn render(&self) -> String {
        let mut file = KotlinFile::new(&self.source.package);
        for decl in &self.declarations {
            let function = self.actual_fun(&mut file, decl);
            file.add(function);
        }
        file.render_with_header(GENERATED_HEADER)
    }
}

#[cfg(test)]
mod tests {
    use viewbridge_codegen::testing::{RUNTIME_PACKAGE, ViewFixture};
    use viewbridge_ir::ParamModifier;

    use super::*;

    fn render(decl: &ViewDeclaration) -> String {
        let runtime = RuntimePackage::new(RUNTIME_PACKAGE);
        CallSiteFile::new(&decl.file, vec![decl], GeneratorTarget::Primary, &runtime).render()
    }

    #[test]
    fn test_path_uses_source_stem() {
        let runtime = RuntimePackage::new(RUNTIME_PACKAGE);
        let decl = ViewFixture::new("ShowMap")
            .file("src/commonMain/kotlin/Maps.kt", "")
            .build();
        let file = CallSiteFile::new(&decl.file, vec![&decl], GeneratorTarget::Primary, &runtime);
        assert_eq!(file.path(), "Maps.primary.kt");
    }

    #[test]
    fn test_missing_handle_slot_uses_default_modifier() {
        let decl = ViewFixture::new("ShowBadge")
            .without_handle_slot()
            .data("count", "kotlin.Int")
            .build();
        let content = render(&decl);
        assert!(content.contains("import androidx.compose.ui.Modifier\n"));
        assert!(content.contains("        modifier = Modifier,\n"));
    }

    #[test]
    fn test_nullable_handle_slot_falls_back() {
        let decl = ViewFixture::new("ShowBadge").nullable_handle_slot().build();
        let content = render(&decl);
        assert!(content.contains("    modifier: Modifier?,\n"));
        assert!(content.contains("        modifier = modifier ?: Modifier,\n"));
    }

    #[test]
    fn test_parameter_modifiers_and_visibility_are_kept() {
        let decl = ViewFixture::new("ShowButton")
            .visibility(viewbridge_ir::Visibility::Internal)
            .param(
                "onTap",
                viewbridge_ir::KotlinType::function([], viewbridge_ir::KotlinType::class("kotlin.Unit")),
            )
            .modifier(ParamModifier::Noinline)
            .build();
        let content = render(&decl);
        assert!(content.contains("internal actual fun ShowButton(\n"));
        assert!(content.contains("    noinline onTap: () -> Unit,\n"));
        assert!(content.contains("    remember(onTap) { delegate.updateOnTap(onTap) }\n"));
    }

    #[test]
    fn test_custom_render_target_is_imported() {
        let decl = ViewFixture::new("ShowMap")
            .render_target("com.example.interop.MapInterop")
            .build();
        let content = render(&decl);
        assert!(content.contains("import com.example.interop.MapInterop\n"));
        assert!(content.contains("    MapInterop(\n"));
    }

    #[test]
    fn test_generic_call_passes_type_arguments() {
        let decl = ViewFixture::new("ShowItem")
            .type_parameter("T")
            .param("item", viewbridge_ir::KotlinType::variable("T"))
            .build();
        let content = render(&decl);
        assert!(content.contains("public actual fun <T> ShowItem(\n"));
        assert!(content.contains("        factory.createShowItem<T>(item)\n"));
    }

    #[test]
    fn test_declarations_of_one_file_share_it() {
        let runtime = RuntimePackage::new(RUNTIME_PACKAGE);
        let a = ViewFixture::new("ShowA").file("src/Views.kt", "com.example").build();
        let b = ViewFixture::new("ShowB").file("src/Views.kt", "com.example").build();
        let content =
            CallSiteFile::new(&a.file, vec![&a, &b], GeneratorTarget::Primary, &runtime).render();
        let first = content.find("actual fun ShowA(").unwrap();
        let second = content.find("actual fun ShowB(").unwrap();
        assert!(first < second);
        assert_eq!(content.matches("import androidx.compose.runtime.remember\n").count(), 1);
    }

    #[test]
    fn test_vararg_is_forwarded_as_array() {
        let decl = ViewFixture::new("ShowTags")
            .data("tags", "kotlin.String")
            .modifier(ParamModifier::Vararg)
            .build();
        let content = render(&decl);
        assert!(content.contains("    vararg tags: String,\n"));
        assert!(content.contains("        factory.createShowTags(tags)\n"));
        assert!(content.contains("    remember(tags) { delegate.updateTags(tags) }\n"));
    }
}
