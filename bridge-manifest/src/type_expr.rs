//! Parser for Kotlin type expressions as written in `bridge.toml`.
//!
//! Grammar:
//!
//! ```text
//! type      := function | paren | "dynamic" | named
//! function  := "(" [type ("," type)*] ")" "->" type
//! paren     := "(" type ")" ["?"]
//! named     := ident ("." ident)* ["<" argument ("," argument)* ">"] ["?"]
//! argument  := "*" | ("out" | "in") type | type
//! ```
//!
//! A single-segment name listed among the declaration's type parameters
//! parses as a type variable.

use viewbridge_ir::{ClassName, KotlinType, TypeArgument};

/// A parse failure with a byte range relative to the expression text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExprError {
    pub offset: usize,
    pub len: usize,
    pub reason: String,
}

/// Parse `src` into a [`KotlinType`], resolving bare names found in
/// `type_parameters` to type variables.
pub fn parse_type(src: &str, type_parameters: &[String]) -> Result<KotlinType, TypeExprError> {
    let mut parser = Parser {
        src,
        pos: 0,
        type_parameters,
    };
    let ty = parser.parse_type()?;
    parser.skip_ws();
    if parser.pos < src.len() {
        return Err(parser.error_here("unexpected trailing input"));
    }
    Ok(ty)
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    type_parameters: &'a [String],
}

impl<'a> Parser<'a> {
    fn skip_ws(&mut self) {
        while self
            .src
            .as_bytes()
            .get(self.pos)
            .is_some_and(|b| b.is_ascii_whitespace())
        {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<u8> {
        self.skip_ws();
        self.src.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, ch: u8) -> bool {
        if self.peek() == Some(ch) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_arrow(&mut self) -> bool {
        self.skip_ws();
        if self.src[self.pos..].starts_with("->") {
            self.pos += 2;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, ch: u8) -> Result<(), TypeExprError> {
        if self.eat(ch) {
            Ok(())
        } else {
            Err(self.error_here(format!("expected '{}'", ch as char)))
        }
    }

    fn error_here(&self, reason: impl Into<String>) -> TypeExprError {
        let len = self.src[self.pos..].chars().next().map_or(0, char::len_utf8);
        TypeExprError {
            offset: self.pos,
            len,
            reason: reason.into(),
        }
    }

    fn parse_type(&mut self) -> Result<KotlinType, TypeExprError> {
        match self.peek() {
            Some(b'(') => self.parse_parenthesized(),
            Some(b) if b.is_ascii_alphabetic() || b == b'_' => self.parse_named(),
            None => Err(self.error_here("expected a type")),
            Some(_) => Err(self.error_here("unexpected character")),
        }
    }

    /// Either a function type or a parenthesized type.
    fn parse_parenthesized(&mut self) -> Result<KotlinType, TypeExprError> {
        let open = self.pos;
        self.expect(b'(')?;

        let mut items = Vec::new();
        if !self.eat(b')') {
            loop {
                items.push(self.parse_type()?);
                if self.eat(b',') {
                    continue;
                }
                self.expect(b')')?;
                break;
            }
        }

        if self.eat_arrow() {
            let returns = self.parse_type()?;
            return Ok(KotlinType::function(items, returns));
        }

        match items.len() {
            1 => {
                let ty = items.remove(0);
                if self.eat(b'?') {
                    Ok(ty.with_nullable(true))
                } else {
                    Ok(ty)
                }
            }
            _ => Err(TypeExprError {
                offset: open,
                len: self.pos - open,
                reason: "parameter list must be followed by '->'".to_string(),
            }),
        }
    }

    fn parse_ident(&mut self) -> Result<&'a str, TypeExprError> {
        self.skip_ws();
        let start = self.pos;
        let src = self.src;
        let bytes = src.as_bytes();
        if !bytes
            .get(start)
            .is_some_and(|b| b.is_ascii_alphabetic() || *b == b'_')
        {
            return Err(self.error_here("expected an identifier"));
        }
        while bytes
            .get(self.pos)
            .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_')
        {
            self.pos += 1;
        }
        Ok(&src[start..self.pos])
    }

    fn parse_named(&mut self) -> Result<KotlinType, TypeExprError> {
        let mut segments = vec![self.parse_ident()?.to_string()];
        // A dot only continues the name when directly followed by an identifier.
        while self.src.as_bytes().get(self.pos) == Some(&b'.') {
            self.pos += 1;
            segments.push(self.parse_ident()?.to_string());
        }

        if segments.len() == 1 {
            let name = &segments[0];
            if name == "dynamic" {
                return Ok(KotlinType::Dynamic);
            }
            if self.type_parameters.iter().any(|p| p == name) {
                let nullable = self.eat(b'?');
                return Ok(KotlinType::Variable {
                    name: name.clone(),
                    nullable,
                });
            }
        }

        let mut arguments = Vec::new();
        if self.eat(b'<') {
            loop {
                arguments.push(self.parse_argument()?);
                if self.eat(b',') {
                    continue;
                }
                self.expect(b'>')?;
                break;
            }
        }

        let nullable = self.eat(b'?');
        Ok(KotlinType::Class {
            name: ClassName::from_fqn(&segments.join(".")),
            arguments,
            nullable,
        })
    }

    fn parse_argument(&mut self) -> Result<TypeArgument, TypeExprError> {
        if self.eat(b'*') {
            return Ok(TypeArgument::Star);
        }

        let save = self.pos;
        if self.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
            let word = self.parse_ident()?;
            let variance: Option<fn(KotlinType) -> TypeArgument> = match word {
                "out" => Some(TypeArgument::Out),
                "in" => Some(TypeArgument::In),
                _ => None,
            };
            // `out`/`in` only act as variance markers when another type follows.
            if let Some(variance) = variance
                && self
                    .peek()
                    .is_some_and(|b| b.is_ascii_alphabetic() || b == b'_' || b == b'(')
            {
                return Ok(variance(self.parse_type()?));
            }
            self.pos = save;
        }

        Ok(TypeArgument::Invariant(self.parse_type()?))
    }
}
