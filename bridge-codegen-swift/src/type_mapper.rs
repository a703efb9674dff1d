//! Swift type mapper implementation.
//!
//! Kotlin types reach Swift through the Objective-C export of the shared
//! framework. Primitives keep their value types unless they have to be
//! objects (nullable, generic arguments, closure signatures), in which case
//! the framework's boxed `Kotlin<Name>` classes are used.

use viewbridge_codegen::language::{TypeMapper, TypePosition, Unmapped};
use viewbridge_ir::{KotlinType, TypeArgument};

/// `(fqn, value type, boxed class)`
const PRIMITIVES: &[(&str, &str, &str)] = &[
    ("kotlin.Boolean", "Bool", "KotlinBoolean"),
    ("kotlin.Byte", "Int8", "KotlinByte"),
    ("kotlin.Short", "Int16", "KotlinShort"),
    ("kotlin.Int", "Int32", "KotlinInt"),
    ("kotlin.Long", "Int64", "KotlinLong"),
    ("kotlin.Float", "Float", "KotlinFloat"),
    ("kotlin.Double", "Double", "KotlinDouble"),
];

/// Swift type mapper implementation.
pub struct SwiftTypeMapper;

impl TypeMapper for SwiftTypeMapper {
    fn language(&self) -> &'static str {
        "swift"
    }

    fn map_type(&self, ty: &KotlinType, position: TypePosition) -> Result<String, Unmapped> {
        let mapped = self.map(ty, position, false)?;
        let escaping = position == TypePosition::Parameter
            && matches!(ty, KotlinType::Function { nullable: false, .. });
        Ok(if escaping {
            format!("@escaping {}", mapped)
        } else {
            mapped
        })
    }
}

impl SwiftTypeMapper {
    fn map(&self, ty: &KotlinType, position: TypePosition, boxed: bool) -> Result<String, Unmapped> {
        match ty {
            KotlinType::Class {
                name,
                arguments,
                nullable,
            } => {
                let fqn = name.canonical_name();
                if let (Some((_, value, object)), true) = (primitive(&fqn), arguments.is_empty()) {
                    let mapped = if boxed || *nullable { object } else { value };
                    return Ok(optional(mapped.to_string(), *nullable));
                }
                let mapped = match (fqn.as_str(), arguments.as_slice()) {
                    ("kotlin.String", []) => "String".to_string(),
                    ("kotlin.Any", []) => "Any".to_string(),
                    ("kotlin.Unit", []) => "Void".to_string(),
                    ("kotlin.collections.List" | "kotlin.collections.MutableList", [item]) => {
                        format!("[{}]", self.argument(ty, item)?)
                    }
                    ("kotlin.collections.Set" | "kotlin.collections.MutableSet", [item]) => {
                        format!("Set<{}>", self.argument(ty, item)?)
                    }
                    ("kotlin.collections.Map" | "kotlin.collections.MutableMap", [key, value]) => {
                        format!("[{}: {}]", self.argument(ty, key)?, self.argument(ty, value)?)
                    }
                    ("kotlin.Pair", [first, second]) => {
                        let (a, b) = match position {
                            TypePosition::FactoryReturn => ("view", "delegate"),
                            _ => ("first", "second"),
                        };
                        format!(
                            "({}: {}, {}: {})",
                            a,
                            self.argument(ty, first)?,
                            b,
                            self.argument(ty, second)?
                        )
                    }
                    _ if is_kotlin_package(&name.package) => return Err(self.unmapped(ty)),
                    (_, []) => name.simple_name.clone(),
                    _ => return Err(self.unmapped(ty)),
                };
                Ok(optional(mapped, *nullable))
            }
            KotlinType::Function {
                parameters,
                returns,
                nullable,
            } => {
                let params = parameters
                    .iter()
                    .map(|p| self.map(p, TypePosition::Parameter, true))
                    .collect::<Result<Vec<_>, _>>()?;
                let returns = self.map(returns, TypePosition::Parameter, true)?;
                let signature = format!("({}) -> {}", params.join(", "), returns);
                Ok(if *nullable {
                    format!("({})?", signature)
                } else {
                    signature
                })
            }
            KotlinType::Variable { .. } | KotlinType::Dynamic => Err(self.unmapped(ty)),
        }
    }

    /// Generic arguments are always objects.
    fn argument(&self, owner: &KotlinType, argument: &TypeArgument) -> Result<String, Unmapped> {
        match argument {
            TypeArgument::Invariant(ty) | TypeArgument::Out(ty) | TypeArgument::In(ty) => {
                self.map(ty, TypePosition::Parameter, true)
            }
            TypeArgument::Star => Err(self.unmapped(owner)),
        }
    }
}

fn primitive(fqn: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    PRIMITIVES.iter().find(|(name, _, _)| *name == fqn)
}

fn is_kotlin_package(package: &str) -> bool {
    package == "kotlin" || package.starts_with("kotlin.")
}

fn optional(name: String, nullable: bool) -> String {
    if nullable { format!("{}?", name) } else { name }
}

#[cfg(test)]
mod tests {
    use viewbridge_ir::ClassName;

    use super::*;

    fn map(ty: &KotlinType) -> Result<String, Unmapped> {
        SwiftTypeMapper.map_type(ty, TypePosition::Property)
    }

    fn class(fqn: &str) -> KotlinType {
        KotlinType::class(fqn)
    }

    #[test]
    fn test_scalar_table() {
        let expected = [
            ("kotlin.String", "String"),
            ("kotlin.Boolean", "Bool"),
            ("kotlin.Byte", "Int8"),
            ("kotlin.Short", "Int16"),
            ("kotlin.Int", "Int32"),
            ("kotlin.Long", "Int64"),
            ("kotlin.Float", "Float"),
            ("kotlin.Double", "Double"),
            ("kotlin.Unit", "Void"),
            ("kotlin.Any", "Any"),
            ("com.example.Coord", "Coord"),
        ];
        for (kotlin, swift) in expected {
            assert_eq!(map(&class(kotlin)).as_deref(), Ok(swift), "{}", kotlin);
        }
    }

    #[test]
    fn test_nullable_primitives_are_boxed() {
        let ty = class("kotlin.Int").with_nullable(true);
        assert_eq!(map(&ty).unwrap(), "KotlinInt?");
        assert_eq!(map(&class("kotlin.String").with_nullable(true)).unwrap(), "String?");
    }

    #[test]
    fn test_containers() {
        let list = KotlinType::generic("kotlin.collections.List", [class("kotlin.Int")]);
        assert_eq!(map(&list).unwrap(), "[KotlinInt]");

        let map_ty = KotlinType::generic(
            "kotlin.collections.MutableMap",
            [class("kotlin.String"), class("com.example.Item")],
        );
        assert_eq!(map(&map_ty).unwrap(), "[String: Item]");

        let set = KotlinType::generic("kotlin.collections.Set", [class("kotlin.String")]);
        assert_eq!(map(&set).unwrap(), "Set<String>");
    }

    #[test]
    fn test_pair_labels_depend_on_position() {
        let pair = KotlinType::generic(
            "kotlin.Pair",
            [
                class("platform.UIKit.UIViewController"),
                class("dev.viewbridge.delegate.ShowMapDelegate"),
            ],
        );
        assert_eq!(
            SwiftTypeMapper
                .map_type(&pair, TypePosition::FactoryReturn)
                .unwrap(),
            "(view: UIViewController, delegate: ShowMapDelegate)"
        );
        assert_eq!(
            map(&pair).unwrap(),
            "(first: UIViewController, second: ShowMapDelegate)"
        );
    }

    #[test]
    fn test_function_types() {
        let callback = KotlinType::function([class("kotlin.Int")], class("kotlin.Unit"));
        assert_eq!(map(&callback).unwrap(), "(KotlinInt) -> Void");
        assert_eq!(
            SwiftTypeMapper.map_parameter(&callback).unwrap(),
            "@escaping (KotlinInt) -> Void"
        );

        let optional = callback.with_nullable(true);
        assert_eq!(
            SwiftTypeMapper.map_parameter(&optional).unwrap(),
            "((KotlinInt) -> Void)?"
        );

        let nested = KotlinType::generic("kotlin.collections.List", [callback]);
        assert_eq!(
            SwiftTypeMapper.map_parameter(&nested).unwrap(),
            "[(KotlinInt) -> Void]"
        );
    }

    #[test]
    fn test_unmapped_types() {
        let star = KotlinType::Class {
            name: ClassName::from_fqn("kotlin.collections.List"),
            arguments: vec![TypeArgument::Star],
            nullable: false,
        };
        let cases = [
            class("kotlin.Char"),
            class("kotlin.Array"),
            KotlinType::generic("kotlin.collections.Collection", [class("kotlin.Int")]),
            KotlinType::generic("com.example.Box", [class("kotlin.Int")]),
            KotlinType::variable("T"),
            KotlinType::Dynamic,
            star.clone(),
        ];
        for ty in cases {
            let err = map(&ty).unwrap_err();
            assert_eq!(err.language, "swift");
            assert_eq!(err.ty, ty);
        }
    }

    #[test]
    fn test_unmapped_reports_innermost_type() {
        let list = KotlinType::generic("kotlin.collections.List", [class("kotlin.Char")]);
        let err = map(&list).unwrap_err();
        assert_eq!(err.ty, class("kotlin.Char"));
        assert_eq!(err.to_string(), "type 'kotlin.Char' has no swift counterpart");
    }
}
