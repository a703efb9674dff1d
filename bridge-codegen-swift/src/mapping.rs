//! Swift view of the accepted declarations.

use indexmap::IndexMap;
use viewbridge_codegen::{
    language::{TypeMapper, TypePosition, Unmapped},
    pipeline::{Diagnostic, FinishContext},
};
use viewbridge_codegen::naming;
use viewbridge_ir::{KotlinType, RenderMode, TypeArgument, ViewDeclaration};

use crate::{SWIFT_NAMING, files::handle_type};

const PHASE: &str = "map";

/// A data parameter with its Swift types resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedParam {
    /// Parameter name as written in Swift (escaped when reserved).
    pub name: String,
    /// Name used to derive the `update<Pascal>` method.
    pub source_name: String,
    /// Type in parameter position, `@escaping` included.
    pub parameter_type: String,
    /// Type as a stored property.
    pub property_type: String,
}

/// A declaration whose data parameters all have Swift counterparts.
#[derive(Debug, Clone)]
pub struct MappedDeclaration<'a> {
    pub decl: &'a ViewDeclaration,
    pub params: Vec<MappedParam>,
    /// Return type of the protocol's factory method.
    pub factory_return: String,
}

impl<'a> MappedDeclaration<'a> {
    /// Map every data parameter of `decl`, stopping at the first failure.
    pub fn map(decl: &'a ViewDeclaration, mapper: &impl TypeMapper) -> Result<Self, Unmapped> {
        if let Some(variable) = decl.type_parameters.first() {
            return Err(mapper.unmapped(&KotlinType::variable(variable.clone())));
        }

        let params = decl
            .data_parameters()
            .map(|param| -> Result<MappedParam, Unmapped> {
                Ok(MappedParam {
                    name: SWIFT_NAMING.safe_name(&param.name),
                    source_name: param.name.clone(),
                    parameter_type: mapper.map_type(&param.value_type(), TypePosition::Parameter)?,
                    property_type: mapper.map_type(&param.value_type(), TypePosition::Property)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let factory_return = if decl.render_mode == RenderMode::ObservedObject {
            "AnyView".to_string()
        } else {
            let pair = KotlinType::generic(
                "kotlin.Pair",
                [
                    KotlinType::class(&format!("platform.UIKit.{}", handle_type(decl.render_mode))),
                    KotlinType::class(&naming::delegate_name(&decl.name)),
                ],
            );
            mapper.map_type(&pair, TypePosition::FactoryReturn)?
        };

        Ok(Self {
            decl,
            params,
            factory_return,
        })
    }

    /// `name: name, ...` for calls forwarding every data parameter.
    pub fn forwarded_arguments(&self) -> String {
        self.params
            .iter()
            .map(|p| format!("{}: {}", p.name, p.name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Declarations grouped by factory group, with mapping failures reported.
///
/// Every group of the context is present, even when all of its
/// declarations were dropped.
pub fn map_groups<'a>(
    ctx: &'a FinishContext,
    mapper: &impl TypeMapper,
    diagnostics: &mut Vec<Diagnostic>,
) -> IndexMap<&'a str, Vec<MappedDeclaration<'a>>> {
    let mut groups = IndexMap::new();
    for (group, declarations) in ctx.groups() {
        let mapped = declarations
            .into_iter()
            .filter_map(|decl| match MappedDeclaration::map(decl, mapper) {
                Ok(mapped) => Some(mapped),
                Err(unmapped) => {
                    let diagnostic = unmapped_diagnostic(decl, &unmapped);
                    diagnostic.log();
                    diagnostics.push(diagnostic);
                    None
                }
            })
            .collect();
        groups.insert(group, mapped);
    }
    groups
}

fn unmapped_diagnostic(decl: &ViewDeclaration, unmapped: &Unmapped) -> Diagnostic {
    let subject = match decl
        .data_parameters()
        .find(|p| contains(&p.value_type(), &unmapped.ty))
    {
        Some(param) => format!("parameter '{}' of type '{}'", param.name, param.value_type()),
        None => format!("type parameter '{}'", unmapped.ty),
    };
    Diagnostic::error(
        PHASE,
        format!(
            "{}: {} cannot be bridged ({}); left out of the {} sources",
            decl.name, subject, unmapped, unmapped.language
        ),
    )
    .with_code("unmapped-type")
    .at(decl.file.path.clone())
}

/// Whether `needle` occurs anywhere inside `ty`.
fn contains(ty: &KotlinType, needle: &KotlinType) -> bool {
    if ty == needle {
        return true;
    }
    match ty {
        KotlinType::Class { arguments, .. } => arguments.iter().any(|arg| match arg {
            TypeArgument::Invariant(inner) | TypeArgument::Out(inner) | TypeArgument::In(inner) => {
                contains(inner, needle)
            }
            TypeArgument::Star => false,
        }),
        KotlinType::Function {
            parameters,
            returns,
            ..
        } => parameters.iter().any(|p| contains(p, needle)) || contains(returns, needle),
        KotlinType::Variable { .. } | KotlinType::Dynamic => false,
    }
}
