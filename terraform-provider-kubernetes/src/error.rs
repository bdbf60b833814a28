//! Schema errors

use crate::types::ValueType;
use thiserror::Error;

/// Errors raised by schema lookup, validation and type decoding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("unknown resource {name} - cannot find schema")]
    UnknownResource { name: String },
    #[error("unknown data source {}: cannot find schema", go_quote(.name))]
    UnknownDataSource { name: String },
    #[error("duplicate member {name:?} in block {block:?}")]
    DuplicateMember { block: String, name: String },
    #[error("attribute {attribute:?} in block {block:?}: {reason}")]
    InvalidAttributeRoles {
        block: String,
        attribute: String,
        reason: &'static str,
    },
    #[error("nested block {type_name:?}: min_items {min_items} exceeds max_items {max_items}")]
    InvalidItemBounds {
        type_name: String,
        min_items: u64,
        max_items: u64,
    },
    #[error("invalid type expression: {message}")]
    InvalidTypeExpression { message: String },
}

impl SchemaError {
    /// Type handed to callers that carry on past a failed lookup
    pub fn fallback_type(&self) -> ValueType {
        ValueType::Dynamic
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;

/// Double-quote `s` with the escapes of Go's `%q` verb
///
/// Printability follows Go for control characters, separators other than
/// the ASCII space, and the common format characters.
pub fn go_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if is_printable(c) => out.push(c),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            c if c < ' ' || c == '\u{7f}' => out.push_str(&format!("\\x{:02x}", c as u32)),
            c if (c as u32) < 0x10000 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push_str(&format!("\\U{:08x}", c as u32)),
        }
    }
    out.push('"');
    out
}

fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    let format_char = matches!(
        c,
        '\u{ad}'
            | '\u{600}'..='\u{605}'
            | '\u{200b}'..='\u{200f}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{feff}'
    );
    let private_use = matches!(c, '\u{e000}'..='\u{f8ff}' | '\u{f0000}'..='\u{10ffff}');
    !(c.is_control() || c.is_whitespace() || format_char || private_use)
}
