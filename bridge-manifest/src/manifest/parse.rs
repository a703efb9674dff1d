//! Manifest parsing from files and strings.

use std::{collections::BTreeMap, ops::Range, path::Path, str::FromStr};

use toml::Spanned;
use viewbridge_core::is_identifier;
use viewbridge_ir::{AnnotationRef, ClassName, RawDeclaration, RawParameter, SourceFile};

use super::{
    Manifest,
    schema::{DeclarationToml, FileToml, ManifestToml, ParameterToml},
};
use crate::{Error, Result, error::SourceContext, type_expr::parse_type};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "bridge.toml")
    }
}

impl Manifest {
    /// Parse a bridge.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a bridge.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
///
/// Within a round, declarations keep file order; declarations without a file
/// follow those of every `[[files]]` entry.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = SourceContext::new(content, filename);
    let raw: ManifestToml = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

    let mut rounds: BTreeMap<u32, Vec<RawDeclaration>> = BTreeMap::new();
    for file in &raw.files {
        let source = source_file(&ctx, file)?;
        for decl in &file.declarations {
            let lowered = lower_declaration(&ctx, decl, Some(source.clone()))?;
            rounds.entry(decl.round).or_default().push(lowered);
        }
    }
    for decl in &raw.declarations {
        let lowered = lower_declaration(&ctx, decl, None)?;
        rounds.entry(decl.round).or_default().push(lowered);
    }

    Ok(Manifest {
        platforms: raw.platforms,
        options: raw.options,
        rounds,
    })
}

fn source_file(ctx: &SourceContext, file: &FileToml) -> Result<SourceFile> {
    let package = match &file.package {
        Some(package) => {
            if !package.get_ref().is_empty() && !is_qualified_name(package.get_ref()) {
                return Err(ctx.validation_error_at(
                    format!("invalid package name '{}'", package.get_ref()),
                    to_span(package.span()),
                ));
            }
            package.get_ref().clone()
        }
        None => String::new(),
    };
    Ok(SourceFile::new(&file.path, package))
}

fn lower_declaration(
    ctx: &SourceContext,
    decl: &DeclarationToml,
    file: Option<SourceFile>,
) -> Result<RawDeclaration> {
    let name = expect_identifier(ctx, &decl.name, "declaration")?;

    let type_parameters = decl
        .type_parameters
        .iter()
        .map(|tp| expect_identifier(ctx, tp, "type parameter"))
        .collect::<Result<Vec<_>>>()?;

    let annotations = decl
        .annotations
        .iter()
        .map(|annotation| lower_annotation(ctx, annotation))
        .collect::<Result<Vec<_>>>()?;

    let parameters = decl
        .parameters
        .iter()
        .map(|param| lower_parameter(ctx, param, &type_parameters))
        .collect::<Result<Vec<_>>>()?;

    Ok(RawDeclaration {
        name,
        is_expect: decl.expect,
        visibility: decl.visibility,
        file,
        annotations,
        type_parameters,
        bridge: decl.bridge.clone(),
        custom_render_target: decl.custom_render_target.clone(),
        parameters,
    })
}

fn lower_parameter(
    ctx: &SourceContext,
    param: &ParameterToml,
    type_parameters: &[String],
) -> Result<RawParameter> {
    let name = param
        .name
        .as_ref()
        .map(|name| expect_identifier(ctx, name, "parameter"))
        .transpose()?;

    let expr = param.ty.get_ref();
    let ty = parse_type(expr, type_parameters).map_err(|err| {
        let start = value_start(ctx.src(), param.ty.span()) + err.offset;
        ctx.invalid_type_error(expr, err.reason, (start, err.len))
    })?;

    Ok(RawParameter {
        name,
        ty,
        modifiers: param.modifiers.clone(),
    })
}

/// `com.example.Tracked` or `kotlin.Suppress("UNCHECKED_CAST")`.
fn lower_annotation(ctx: &SourceContext, annotation: &Spanned<String>) -> Result<AnnotationRef> {
    let text = annotation.get_ref().trim();
    let (name, arguments) = match text.split_once('(') {
        Some((name, rest)) => match rest.strip_suffix(')') {
            Some(args) => (name.trim(), Some(args.trim().to_string())),
            None => {
                return Err(ctx.validation_error_at(
                    format!("unterminated argument list in annotation '{}'", text),
                    to_span(annotation.span()),
                ));
            }
        },
        None => (text, None),
    };

    if !is_qualified_name(name) {
        return Err(ctx.validation_error_at(
            format!("invalid annotation name '{}'", name),
            to_span(annotation.span()),
        ));
    }

    Ok(AnnotationRef {
        name: ClassName::from_fqn(name),
        arguments,
    })
}

fn expect_identifier(ctx: &SourceContext, value: &Spanned<String>, kind: &str) -> Result<String> {
    if is_identifier(value.get_ref()) {
        Ok(value.get_ref().clone())
    } else {
        Err(ctx.validation_error_at(
            format!("invalid {} name '{}'", kind, value.get_ref()),
            to_span(value.span()),
        ))
    }
}

fn is_qualified_name(s: &str) -> bool {
    s.split('.').all(is_identifier)
}

fn to_span(range: Range<usize>) -> (usize, usize) {
    (range.start, range.end - range.start)
}

/// Offset of a string value's first character, skipping its opening quotes.
fn value_start(src: &str, span: Range<usize>) -> usize {
    let raw = src.get(span.start..).unwrap_or_default();
    let quote = ["\"\"\"", "'''", "\"", "'"]
        .into_iter()
        .find(|q| raw.starts_with(q))
        .map_or(0, str::len);
    span.start + quote
}
