//! Tokenizer for the `KEY: value` lines of an area block body.
//!
//! A value containing unquoted commas becomes an ordered list of tokens;
//! anything else is a single token. Surrounding quotes are removed, `#`
//! starts a comment outside quotes.

use area_common::{AreaError, AreaResult};

/// A parsed block value: one token or an ordered list of tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Scalar(String),
    List(Vec<String>),
}

impl RawValue {
    /// The value's tokens in order; a scalar yields one token.
    pub fn tokens(&self) -> Vec<&str> {
        match self {
            RawValue::Scalar(s) => vec![s.as_str()],
            RawValue::List(items) => items.iter().map(String::as_str).collect(),
        }
    }

    /// Render back to text, joining list tokens with `", "`.
    pub fn joined(&self) -> String {
        match self {
            RawValue::Scalar(s) => s.clone(),
            RawValue::List(items) => items.join(", "),
        }
    }
}

/// Tokenize block content lines into ordered `(KEY, value)` pairs.
///
/// Block delimiters (`{`, `};`) are stripped, blank and comment lines are
/// skipped.
///
/// # Errors
/// [`AreaError::MalformedLine`] for a line without a `:` separator or with
/// an empty key, [`AreaError::DuplicateKey`] for a key given twice.
pub fn tokenize_block<S: AsRef<str>>(lines: &[S]) -> AreaResult<Vec<(String, RawValue)>> {
    let mut entries: Vec<(String, RawValue)> = Vec::new();
    for line in lines {
        let cleaned = line.as_ref().replace("};", "").replace('{', "");
        let cleaned = cleaned.trim();
        if cleaned.is_empty() || cleaned.starts_with('#') {
            continue;
        }
        let (key, value) = cleaned
            .split_once(':')
            .ok_or_else(|| AreaError::malformed_line(cleaned))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(AreaError::malformed_line(cleaned));
        }
        if entries.iter().any(|(k, _)| k == key) {
            return Err(AreaError::duplicate_key(key));
        }
        entries.push((key.to_string(), parse_value(value)));
    }
    Ok(entries)
}

/// Parse a value string into a scalar or list.
pub fn parse_value(raw: &str) -> RawValue {
    let mut parts = split_unquoted(raw);
    let is_list = parts.len() > 1;
    // Trailing comma: "a, b," is the list [a, b] and "a," is [a]
    if is_list && parts.last().is_some_and(|p| p.trim().is_empty()) {
        parts.pop();
    }
    let mut tokens: Vec<String> = parts
        .iter()
        .map(|p| unquote(p.trim()).to_string())
        .collect();
    if is_list {
        RawValue::List(tokens)
    } else {
        RawValue::Scalar(tokens.swap_remove(0))
    }
}

/// Split on commas outside quotes, stopping at an unquoted `#`.
fn split_unquoted(raw: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in raw.chars() {
        match (quote, c) {
            (Some(q), c) if c == q => {
                quote = None;
                current.push(c);
            }
            (Some(_), c) => current.push(c),
            (None, '"') | (None, '\'') => {
                quote = Some(c);
                current.push(c);
            }
            (None, '#') => break,
            (None, ',') => parts.push(std::mem::take(&mut current)),
            (None, c) => current.push(c),
        }
    }
    parts.push(current);
    parts
}

fn unquote(token: &str) -> &str {
    for q in ['"', '\''] {
        if token.len() >= 2 && token.starts_with(q) && token.ends_with(q) {
            return &token[1..token.len() - 1];
        }
    }
    token
}
