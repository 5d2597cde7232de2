//! Schema-qualified names and their translation into target identifiers.
//!
//! A qualified name is a `/`-separated path: zero or more scope segments
//! (the library, e.g. `test.conformance`) followed by a leaf (the type name).

use crate::utils::{to_lower_camel_case, to_snake_case, to_upper_camel_case};

/// Separator between scope segments and the leaf in schema names.
pub const SCOPE_DELIMITER: char = '/';

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("empty qualified name")]
    Empty,
    #[error("empty segment in qualified name `{0}`")]
    EmptySegment(String),
}

/// Identifier case convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Case {
    UpperCamel,
    LowerCamel,
    Snake,
}

impl Case {
    pub fn apply(self, s: &str) -> String {
        match self {
            Self::UpperCamel => to_upper_camel_case(s),
            Self::LowerCamel => to_lower_camel_case(s),
            Self::Snake => to_snake_case(s),
        }
    }
}

/// How a target spells qualified identifiers.
#[derive(Clone, Copy, Debug)]
pub struct NameStyle {
    /// Joins scope segments and the leaf (`.` for Go, `::` for Rust).
    pub separator: &'static str,
    pub scope_case: Case,
    pub leaf_case: Case,
    /// Words that cannot be used as identifiers; colliding segments get a
    /// trailing underscore.
    pub reserved: &'static [&'static str],
}

impl NameStyle {
    /// Convert a single segment and avoid reserved words.
    pub fn segment(&self, segment: &str, case: Case) -> String {
        escape_reserved(case.apply(segment), self.reserved)
    }
}

/// Append `_` to identifiers that collide with a reserved word.
pub fn escape_reserved(ident: String, reserved: &[&str]) -> String {
    if reserved.contains(&ident.as_str()) {
        format!("{ident}_")
    } else {
        ident
    }
}

/// A parsed schema-qualified name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QualifiedName<'a> {
    scopes: Vec<&'a str>,
    leaf: &'a str,
}

impl<'a> QualifiedName<'a> {
    /// Split `name` into scopes and leaf.
    ///
    /// Every segment must contain at least one alphanumeric character, so
    /// that no case conversion can produce an empty identifier.
    pub fn parse(name: &'a str) -> Result<Self, NameError> {
        if name.is_empty() {
            return Err(NameError::Empty);
        }

        let mut scopes: Vec<&str> = name.split(SCOPE_DELIMITER).collect();
        if scopes
            .iter()
            .any(|s| !s.chars().any(|c| c.is_ascii_alphanumeric()))
        {
            return Err(NameError::EmptySegment(name.to_string()));
        }

        let leaf = scopes
            .pop()
            .ok_or_else(|| NameError::EmptySegment(name.to_string()))?;
        Ok(Self { scopes, leaf })
    }

    pub fn scopes(&self) -> &[&'a str] {
        &self.scopes
    }

    pub fn leaf(&self) -> &'a str {
        self.leaf
    }

    /// Render as a target-qualified identifier.
    pub fn render(&self, style: &NameStyle) -> String {
        let mut parts: Vec<String> = self
            .scopes
            .iter()
            .map(|scope| style.segment(scope, style.scope_case))
            .collect();
        parts.push(style.segment(self.leaf, style.leaf_case));
        parts.join(style.separator)
    }
}

/// Parse and render in one step.
pub fn qualified_identifier(name: &str, style: &NameStyle) -> Result<String, NameError> {
    Ok(QualifiedName::parse(name)?.render(style))
}
