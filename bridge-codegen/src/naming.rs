//! Name derivation shared by every generator.
//!
//! Generated files are never type-checked against each other at generation
//! time, so every identifier that crosses a file or language boundary is
//! derived here and nowhere else.

use viewbridge_core::{GeneratorTarget, to_pascal_case};

/// Primary-language factory interface: `Compose<G>Factory`.
pub fn factory_interface_name(group: &str) -> String {
    format!("Compose{}Factory", group)
}

/// Short alias of the factory interface, also the foreign protocol name: `<G>Factory`.
pub fn factory_alias_name(group: &str) -> String {
    format!("{}Factory", group)
}

/// Foreign-language protocol: `<G>Factory`.
pub fn factory_protocol_name(group: &str) -> String {
    factory_alias_name(group)
}

/// Composition-local accessor: `Local<G>Factory`.
pub fn local_factory_accessor_name(group: &str) -> String {
    format!("Local{}Factory", group)
}

pub fn delegate_name(decl_name: &str) -> String {
    format!("{}Delegate", decl_name)
}

pub fn observable_name(decl_name: &str) -> String {
    format!("{}Observable", decl_name)
}

pub fn factory_method_name(decl_name: &str) -> String {
    format!("create{}", decl_name)
}

/// `update` + PascalCase(param), e.g. `mapTitle` -> `updateMapTitle`.
pub fn update_method_name(param_name: &str) -> String {
    format!("update{}", to_pascal_case(param_name))
}

/// Foreign adapter class implementing the factory interface: `Foreign<G>Factory`.
pub fn foreign_binding_class_name(group: &str) -> String {
    format!("Foreign{}Factory", group)
}

pub fn target_file_suffix(target: GeneratorTarget) -> &'static str {
    target.file_suffix()
}

/// Package holding the runtime-facing generated declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimePackage {
    root: String,
}

impl RuntimePackage {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    /// Factories, composition locals and the view marker annotation.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Delegate interfaces.
    pub fn delegate(&self) -> String {
        format!("{}.delegate", self.root)
    }

    /// Holder that keeps a view alive across navigation.
    pub fn view_holder(&self) -> String {
        format!("{}.NativeViewHolderViewModel", self.root)
    }

    /// Fully-qualified name of the marker annotation carried by delegates.
    pub fn marker_annotation(&self) -> String {
        format!("{}.GeneratedBridgeView", self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_names() {
        assert_eq!(factory_interface_name("NativeView"), "ComposeNativeViewFactory");
        assert_eq!(factory_alias_name("NativeView"), "NativeViewFactory");
        assert_eq!(factory_protocol_name("NativeView"), "NativeViewFactory");
        assert_eq!(local_factory_accessor_name("NativeView"), "LocalNativeViewFactory");
        assert_eq!(foreign_binding_class_name("NativeView"), "ForeignNativeViewFactory");
    }

    #[test]
    fn test_declaration_names() {
        assert_eq!(delegate_name("ShowMap"), "ShowMapDelegate");
        assert_eq!(observable_name("ShowMap"), "ShowMapObservable");
        assert_eq!(factory_method_name("ShowMap"), "createShowMap");
    }

    #[test]
    fn test_update_method_name() {
        assert_eq!(update_method_name("title"), "updateTitle");
        assert_eq!(update_method_name("mapTitle"), "updateMapTitle");
        assert_eq!(update_method_name("on_tap"), "updateOnTap");
    }

    #[test]
    fn test_target_file_suffix() {
        assert_eq!(target_file_suffix(GeneratorTarget::Common), "");
        assert_eq!(target_file_suffix(GeneratorTarget::Primary), ".primary");
        assert_eq!(target_file_suffix(GeneratorTarget::Other), ".nonprimary");
    }

    #[test]
    fn test_runtime_package() {
        let runtime = RuntimePackage::new("dev.viewbridge");
        assert_eq!(runtime.root(), "dev.viewbridge");
        assert_eq!(runtime.delegate(), "dev.viewbridge.delegate");
        assert_eq!(runtime.marker_annotation(), "dev.viewbridge.GeneratedBridgeView");
        assert_eq!(runtime.view_holder(), "dev.viewbridge.NativeViewHolderViewModel");
    }
}
