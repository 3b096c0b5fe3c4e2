//! Attribute selectors for widget queries.
//!
//! Supports:
//! - `"[data-testid='filters']"` - by test ID
//! - `"[aria-label='Filters']"` - by accessible name
//! - `"[role='checkbox']"` - by accessible role
//! - `"filters"` - bare test ID shorthand

use tagbar_core::{AccessibleRole, Widget};
use thiserror::Error;

/// Parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match by test ID
    TestId(String),
    /// Match by accessible name
    Label(String),
    /// Match by accessible role
    Role(AccessibleRole),
}

impl Selector {
    /// Parse a selector string.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is empty, malformed, or names an
    /// unsupported attribute or role.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        SelectorParser::new(input).parse()
    }

    /// Check if this selector matches a widget.
    #[must_use]
    pub fn matches<W: Widget + ?Sized>(&self, widget: &W) -> bool {
        match self {
            Self::TestId(id) => widget.test_id() == Some(id.as_str()),
            Self::Label(name) => widget.accessible_name() == Some(name.as_str()),
            Self::Role(role) => widget.accessible_role() == *role,
        }
    }
}

struct SelectorParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> SelectorParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input: input.trim(),
            pos: 0,
        }
    }

    fn parse(&mut self) -> Result<Selector, SelectorError> {
        match self.peek_char() {
            None => Err(SelectorError::Empty),
            Some('[') => self.parse_attribute(),
            Some(c) if c.is_alphanumeric() => self.parse_bare_test_id(),
            Some(c) => Err(SelectorError::UnexpectedChar(c)),
        }
    }

    fn parse_bare_test_id(&mut self) -> Result<Selector, SelectorError> {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                self.advance();
            } else {
                return Err(SelectorError::UnexpectedChar(c));
            }
        }
        Ok(Selector::TestId(self.input[start..].to_string()))
    }

    fn parse_attribute(&mut self) -> Result<Selector, SelectorError> {
        self.advance(); // '['

        let name = self.read_until_any(&['=', ']']);
        if name.is_empty() || self.peek_char() != Some('=') {
            return Err(SelectorError::InvalidAttribute);
        }
        self.advance(); // '='

        let quote = self.peek_char().filter(|c| *c == '\'' || *c == '"');
        if quote.is_some() {
            self.advance();
        }
        let value = self.read_until_any(&['\'', '"', ']']);
        if let Some(quote) = quote {
            if self.peek_char() != Some(quote) {
                return Err(SelectorError::InvalidAttribute);
            }
            self.advance();
        }

        if self.peek_char() != Some(']') {
            return Err(SelectorError::UnclosedAttribute);
        }
        self.advance();
        if let Some(c) = self.peek_char() {
            return Err(SelectorError::UnexpectedChar(c));
        }

        match name.as_str() {
            "data-testid" => Ok(Selector::TestId(value)),
            "aria-label" => Ok(Selector::Label(value)),
            "role" => parse_role(&value).map(Selector::Role),
            _ => Err(SelectorError::UnknownAttribute(name)),
        }
    }

    fn read_until_any(&mut self, stops: &[char]) -> String {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if stops.contains(&c) {
                break;
            }
            self.advance();
        }
        self.input[start..self.pos].to_string()
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }
}

fn parse_role(value: &str) -> Result<AccessibleRole, SelectorError> {
    match value {
        "checkbox" => Ok(AccessibleRole::Checkbox),
        "generic" => Ok(AccessibleRole::Generic),
        other => Err(SelectorError::UnknownRole(other.to_string())),
    }
}

/// Selector parsing error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Empty selector
    #[error("empty selector")]
    Empty,
    /// Unexpected character
    #[error("unexpected character: '{0}'")]
    UnexpectedChar(char),
    /// Invalid attribute syntax
    #[error("invalid attribute syntax")]
    InvalidAttribute,
    /// Unclosed attribute bracket
    #[error("unclosed attribute bracket")]
    UnclosedAttribute,
    /// Attribute other than `data-testid`, `aria-label` or `role`
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),
    /// Role with no [`AccessibleRole`] counterpart
    #[error("unknown role: {0}")]
    UnknownRole(String),
}
