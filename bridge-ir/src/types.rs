//! Kotlin type model as reported by the host resolver.

use std::fmt;

use serde::Serialize;

/// A fully-qualified class reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ClassName {
    pub package: String,
    pub simple_name: String,
}

impl ClassName {
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            simple_name: simple_name.into(),
        }
    }

    /// Split a dotted name at its last segment
    /// (e.g., "androidx.compose.ui.Modifier" -> ("androidx.compose.ui", "Modifier")).
    pub fn from_fqn(fqn: &str) -> Self {
        match fqn.rsplit_once('.') {
            Some((package, simple)) => Self::new(package, simple),
            None => Self::new("", fqn),
        }
    }

    /// Dotted name including the package.
    pub fn canonical_name(&self) -> String {
        if self.package.is_empty() {
            self.simple_name.clone()
        } else {
            format!("{}.{}", self.package, self.simple_name)
        }
    }

    pub fn is(&self, fqn: &str) -> bool {
        match fqn.rsplit_once('.') {
            Some((package, simple)) => self.package == package && self.simple_name == simple,
            None => self.package.is_empty() && self.simple_name == fqn,
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.package.is_empty() {
            write!(f, "{}.", self.package)?;
        }
        f.write_str(&self.simple_name)
    }
}

/// A resolved Kotlin type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum KotlinType {
    /// A class, possibly parameterized.
    Class {
        name: ClassName,
        arguments: Vec<TypeArgument>,
        nullable: bool,
    },
    /// A function type `(A, B) -> R`.
    Function {
        parameters: Vec<KotlinType>,
        returns: Box<KotlinType>,
        nullable: bool,
    },
    /// A reference to a type parameter of the declaration.
    Variable { name: String, nullable: bool },
    /// Kotlin/JS `dynamic`.
    Dynamic,
}

/// An argument in a parameterized class type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "variance", content = "type", rename_all = "kebab-case")]
pub enum TypeArgument {
    Invariant(KotlinType),
    Out(KotlinType),
    In(KotlinType),
    /// Star projection `*`.
    Star,
}

impl KotlinType {
    /// Non-null class type without arguments.
    pub fn class(fqn: &str) -> Self {
        KotlinType::Class {
            name: ClassName::from_fqn(fqn),
            arguments: Vec::new(),
            nullable: false,
        }
    }

    /// Non-null class type with invariant arguments.
    pub fn generic(fqn: &str, arguments: impl IntoIterator<Item = KotlinType>) -> Self {
        KotlinType::Class {
            name: ClassName::from_fqn(fqn),
            arguments: arguments.into_iter().map(TypeArgument::Invariant).collect(),
            nullable: false,
        }
    }

    pub fn function(parameters: impl IntoIterator<Item = KotlinType>, returns: KotlinType) -> Self {
        KotlinType::Function {
            parameters: parameters.into_iter().collect(),
            returns: Box::new(returns),
            nullable: false,
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        KotlinType::Variable {
            name: name.into(),
            nullable: false,
        }
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            KotlinType::Class { nullable, .. }
            | KotlinType::Function { nullable, .. }
            | KotlinType::Variable { nullable, .. } => *nullable,
            KotlinType::Dynamic => true,
        }
    }

    /// Copy of this type with the given nullability.
    pub fn with_nullable(&self, value: bool) -> Self {
        let mut copy = self.clone();
        match &mut copy {
            KotlinType::Class { nullable, .. }
            | KotlinType::Function { nullable, .. }
            | KotlinType::Variable { nullable, .. } => *nullable = value,
            KotlinType::Dynamic => {}
        }
        copy
    }

    pub fn class_name(&self) -> Option<&ClassName> {
        match self {
            KotlinType::Class { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Whether this is a non-parameterized reference to the class `fqn`, ignoring nullability.
    pub fn is_class(&self, fqn: &str) -> bool {
        self.class_name().is_some_and(|name| name.is(fqn))
    }
}

impl fmt::Display for KotlinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KotlinType::Class {
                name,
                arguments,
                nullable,
            } => {
                write!(f, "{}", name)?;
                if !arguments.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in arguments.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    f.write_str(">")?;
                }
                if *nullable {
                    f.write_str("?")?;
                }
                Ok(())
            }
            KotlinType::Function {
                parameters,
                returns,
                nullable,
            } => {
                if *nullable {
                    f.write_str("(")?;
                }
                f.write_str("(")?;
                for (i, param) in parameters.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", param)?;
                }
                write!(f, ") -> {}", returns)?;
                if *nullable {
                    f.write_str(")?")?;
                }
                Ok(())
            }
            KotlinType::Variable { name, nullable } => {
                f.write_str(name)?;
                if *nullable {
                    f.write_str("?")?;
                }
                Ok(())
            }
            KotlinType::Dynamic => f.write_str("dynamic"),
        }
    }
}

impl fmt::Display for TypeArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeArgument::Invariant(ty) => write!(f, "{}", ty),
            TypeArgument::Out(ty) => write!(f, "out {}", ty),
            TypeArgument::In(ty) => write!(f, "in {}", ty),
            TypeArgument::Star => f.write_str("*"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name_from_fqn() {
        let name = ClassName::from_fqn("androidx.compose.ui.Modifier");
        assert_eq!(name.package, "androidx.compose.ui");
        assert_eq!(name.simple_name, "Modifier");
        assert_eq!(name.canonical_name(), "androidx.compose.ui.Modifier");

        let bare = ClassName::from_fqn("Foo");
        assert_eq!(bare.package, "");
        assert_eq!(bare.canonical_name(), "Foo");
    }

    #[test]
    fn test_is_class_ignores_nullability() {
        let ty = KotlinType::class("androidx.compose.ui.Modifier").with_nullable(true);
        assert!(ty.is_class("androidx.compose.ui.Modifier"));
        assert!(!ty.is_class("androidx.compose.ui.Alignment"));
        assert!(ty.is_nullable());
    }

    #[test]
    fn test_display_nested_generics() {
        let ty = KotlinType::generic(
            "kotlin.collections.Map",
            [
                KotlinType::class("kotlin.String"),
                KotlinType::generic("kotlin.collections.List", [KotlinType::class("kotlin.Int")]),
            ],
        );
        assert_eq!(
            ty.to_string(),
            "kotlin.collections.Map<kotlin.String, kotlin.collections.List<kotlin.Int>>"
        );
    }

    #[test]
    fn test_display_nullable_function() {
        let ty = KotlinType::function(
            [KotlinType::class("kotlin.String")],
            KotlinType::class("kotlin.Unit"),
        )
        .with_nullable(true);
        assert_eq!(ty.to_string(), "((kotlin.String) -> kotlin.Unit)?");
    }

    #[test]
    fn test_display_projections() {
        let ty = KotlinType::Class {
            name: ClassName::from_fqn("kotlin.collections.List"),
            arguments: vec![TypeArgument::Star],
            nullable: false,
        };
        assert_eq!(ty.to_string(), "kotlin.collections.List<*>");

        let ty = KotlinType::Class {
            name: ClassName::from_fqn("kotlin.Comparable"),
            arguments: vec![TypeArgument::In(KotlinType::variable("T"))],
            nullable: true,
        };
        assert_eq!(ty.to_string(), "kotlin.Comparable<in T>?");
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(KotlinType::variable("T")).unwrap();
        assert_eq!(json["kind"], "variable");
        assert_eq!(json["name"], "T");
    }
}
