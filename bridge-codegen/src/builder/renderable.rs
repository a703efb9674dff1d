//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes of both target languages render to fragments; only
//! [`CodeBuilder`](super::CodeBuilder) turns fragments into text.

/// A piece of generated code, independent of indentation.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line (newline appended).
    Line(String),
    /// An empty line, never indented.
    Blank,
    /// A header line, an indented body and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Fragments one level deeper than the surrounding code.
    Indent(Vec<CodeFragment>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// A block closed by `}` on its own line.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::block(header, body, Some("}".to_string()))
    }

    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }
}

/// An AST node that can be lowered to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_braced_block() {
        let block = CodeFragment::braced(
            "public interface ShowMapDelegate {",
            vec![CodeFragment::line("fun updateTitle(title: String)")],
        );
        let CodeFragment::Block {
            header,
            body,
            close,
        } = block
        else {
            panic!("expected a block");
        };
        assert_eq!(header, "public interface ShowMapDelegate {");
        assert_eq!(body, vec![CodeFragment::line("fun updateTitle(title: String)")]);
        assert_eq!(close.as_deref(), Some("}"));
    }
}
