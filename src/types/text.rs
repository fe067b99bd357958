//! TEXT values (RFC 5545 3.3.11).
//!
//! On the wire a backslash escapes `\`, `;`, `,` and newlines (`\n` or `\N`). An unescaped comma
//! separates the items of a multi-valued text property.

const LIST_DELIMITER: char = ',';

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidText {
    #[error("invalid escape sequence \"\\{1}\" in text {0:?}")]
    InvalidEscape(String, char),
    #[error("text {0:?} ends with a lone backslash")]
    DanglingEscape(String),
}

/// Escape a single text item. Commas are escaped too, so the result is always one item.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | ';' | ',' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape every item and join them with unescaped commas.
pub fn join_text_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(LIST_DELIMITER);
        }
        out.push_str(&escape_text(item.as_ref()));
    }
    out
}

/// Unescape text and split it on unescaped commas.
pub fn split_text_list(text: &str) -> Result<Vec<String>, InvalidText> {
    let mut items = vec![];
    let mut item = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped @ ('\\' | ';' | ',')) => item.push(escaped),
                Some('n' | 'N') => item.push('\n'),
                Some(other) => return Err(InvalidText::InvalidEscape(text.to_owned(), other)),
                None => return Err(InvalidText::DanglingEscape(text.to_owned())),
            },
            LIST_DELIMITER => items.push(std::mem::take(&mut item)),
            _ => item.push(c),
        }
    }
    items.push(item);
    Ok(items)
}

/// Unescape a whole text value without splitting it into items.
pub fn unescape_text(text: &str) -> Result<String, InvalidText> {
    Ok(split_text_list(text)?.join(","))
}
