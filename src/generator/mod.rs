//! Serialize component trees back to iCalendar text.
//!
//! [`Emitter::generate`] writes any tree as is. [`Encoder`] validates first and refuses to
//! write a tree that breaks RFC 5545 structure.

use std::borrow::Cow;

mod encoder;
pub use encoder::{EncodeError, Encoder};
mod ical;

use crate::PARAM_QUOTE;

/// Longest content line, in octets, written without folding.
pub const MAX_LINE_OCTETS: usize = 75;
/// Octets per folded chunk. Continuation lines gain a leading space.
const FOLD_OCTETS: usize = MAX_LINE_OCTETS - 1;

pub trait Emitter {
    fn generate(&self) -> String;
}

impl<T: Emitter> Emitter for [T] {
    fn generate(&self) -> String {
        self.iter().map(Emitter::generate).collect()
    }
}

impl<T: Emitter> Emitter for Vec<T> {
    fn generate(&self) -> String {
        self.as_slice().generate()
    }
}

/// Fold a content line to at most 75 octets per physical line and terminate it with CRLF.
///
/// Lines are only split between UTF-8 code points.
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return format!("{line}\r\n");
    }

    let mut out = String::with_capacity(line.len() + 3 * (line.len() / FOLD_OCTETS + 1));
    let mut rest = line;
    while rest.len() > FOLD_OCTETS {
        let mut end = FOLD_OCTETS;
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        out.push_str(&rest[..end]);
        out.push_str("\r\n ");
        rest = &rest[end..];
    }
    out.push_str(rest);
    out.push_str("\r\n");
    tracing::trace!(octets = line.len(), "Folded content line");
    out
}

/// Quote a parameter value when it is empty or contains `;`, `:`, `,`, `"` or `\`.
pub fn quote_param_value(value: &str) -> Cow<'_, str> {
    if !value.is_empty() && !value.contains([';', ':', ',', PARAM_QUOTE, '\\']) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 2);
    out.push(PARAM_QUOTE);
    for c in value.chars() {
        if c == PARAM_QUOTE || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(PARAM_QUOTE);
    Cow::Owned(out)
}
