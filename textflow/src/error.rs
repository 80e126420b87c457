// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Error returned when a CSS text property value cannot be parsed.
///
/// Carries a non-exhaustive [`ParseErrorKind`] plus the name of the property being parsed and
/// the offending token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The non-exhaustive category describing this error.
    kind: ParseErrorKind,

    /// The CSS property whose value was rejected.
    property: &'static str,

    /// The token that could not be interpreted.
    token: String,
}

impl ParseError {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// The CSS property being parsed.
    pub fn property(&self) -> &'static str {
        self.property
    }

    /// The token that could not be interpreted.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub(crate) fn empty(property: &'static str) -> Self {
        Self {
            kind: ParseErrorKind::Empty,
            property,
            token: String::new(),
        }
    }

    pub(crate) fn unknown_keyword(property: &'static str, token: &str) -> Self {
        Self {
            kind: ParseErrorKind::UnknownKeyword,
            property,
            token: token.into(),
        }
    }

    pub(crate) fn invalid_number(property: &'static str, token: &str) -> Self {
        Self {
            kind: ParseErrorKind::InvalidNumber,
            property,
            token: token.into(),
        }
    }

    pub(crate) fn unknown_unit(property: &'static str, token: &str) -> Self {
        Self {
            kind: ParseErrorKind::UnknownUnit,
            property,
            token: token.into(),
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ParseErrorKind::Empty => write!(f, "empty value for `{}`", self.property),
            ParseErrorKind::UnknownKeyword => {
                write!(f, "unknown keyword `{}` for `{}`", self.token, self.property)
            }
            ParseErrorKind::InvalidNumber => {
                write!(f, "invalid number `{}` for `{}`", self.token, self.property)
            }
            ParseErrorKind::UnknownUnit => {
                write!(f, "unknown unit in `{}` for `{}`", self.token, self.property)
            }
        }
    }
}

impl core::error::Error for ParseError {}

/// Categories of [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The value was empty or only whitespace.
    Empty,
    /// The value is not one of the property's keywords.
    UnknownKeyword,
    /// A numeric component could not be parsed.
    InvalidNumber,
    /// A length carried a unit the property does not understand.
    UnknownUnit,
}
