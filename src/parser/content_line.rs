//! Parse the result of `LineReader` into properties.
//!
//! A content line is split into:
//! - A name formated in uppercase.
//! - A list of parameters. Each key is formatted in uppercase and keeps one or more values, in
//!   the order they appeared.
//! - A value, kept as raw, still escaped text. Decoding it is the job of the typed accessors on
//!   [`Property`].
//!
//! Blank logical lines are skipped.
//!
//! # Examples
//!
//! ```rust
//! let input = "SUMMARY;LANGUAGE=en;X-TAGS=a,\"b:c\":Lunch\\, then coffee\r\n";
//! let mut reader = calcodec::ContentLineParser::from_slice(input.as_bytes());
//!
//! let prop = reader.next().unwrap().unwrap();
//! assert_eq!(prop.name, "SUMMARY");
//! assert_eq!(prop.params.get("language"), Some("en"));
//! assert_eq!(prop.params.get_all("X-TAGS").unwrap(), ["a", "b:c"]);
//! assert_eq!(prop.value, "Lunch\\, then coffee");
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use std::io::BufRead;
use std::iter::Iterator;

use super::{Line, LineError, LineReader};
use crate::property::{Parameters, Property};
use crate::{
    PARAM_DELIMITER, PARAM_NAME_DELIMITER, PARAM_QUOTE, PARAM_VALUE_DELIMITER, VALUE_DELIMITER,
};

lazy_static! {
    static ref NAME_TOKEN: Regex = Regex::new("^[A-Za-z0-9-]+").unwrap();
}

/// Whether all of `name` is a property name or parameter key the parser accepts.
pub(crate) fn is_name_token(name: &str) -> bool {
    NAME_TOKEN
        .find(name)
        .is_some_and(|token| token.end() == name.len())
}

/// Characters ending an unquoted parameter value.
const UNQUOTED_STOP: [char; 5] = [
    PARAM_VALUE_DELIMITER,
    PARAM_DELIMITER,
    VALUE_DELIMITER,
    PARAM_QUOTE,
    '\\',
];

/// Error arising when trying to parse a content line
#[derive(Debug, thiserror::Error)]
pub enum ContentLineError {
    #[error("Line {0}: Missing property name: {1:?}")]
    MissingName(usize, String),
    #[error("Line {0}: Unexpected {1:?}, expected \";\" or \":\": {2:?}")]
    UnexpectedChar(usize, char, String),
    #[error("Line {0}: Missing a parameter key: {1:?}")]
    MissingParamKey(usize, String),
    #[error("Line {0}: Missing a \"{1}\" delimiter: {2:?}")]
    MissingDelimiter(usize, char, String),
    #[error("Line {0}: Empty parameter value: {1:?}")]
    EmptyParamValue(usize, String),
    #[error("Line {0}: Missing a closing quote: {1:?}")]
    MissingClosingQuote(usize, String),
    #[error("Line {0}: Missing value: {1:?}")]
    MissingValue(usize, String),
    #[error(transparent)]
    LineError(#[from] LineError),
}

pub struct ContentLineParser<R>(LineReader<R>);

impl<'a> ContentLineParser<&'a [u8]> {
    pub fn from_slice(slice: &'a [u8]) -> Self {
        ContentLineParser(LineReader::from_slice(slice))
    }
}

impl<R: BufRead> ContentLineParser<R> {
    pub fn new(line_reader: LineReader<R>) -> Self {
        ContentLineParser(line_reader)
    }
}

/// Parse one logical line into a property.
pub fn parse_line(line: &Line) -> Result<Property, ContentLineError> {
    let text = line.as_str();

    let Some(name) = NAME_TOKEN.find(text) else {
        return Err(ContentLineError::MissingName(line.number(), text.to_owned()));
    };
    let mut to_parse = &text[name.end()..];
    let mut params = Parameters::default();

    loop {
        if let Some(value) = to_parse.strip_prefix(VALUE_DELIMITER) {
            return Ok(Property {
                name: name.as_str().to_uppercase(),
                params,
                value: value.to_owned(),
            });
        }
        if let Some(remainder) = to_parse.strip_prefix(PARAM_DELIMITER) {
            to_parse = parse_param(remainder, &mut params, line)?;
            continue;
        }
        return Err(match to_parse.chars().next() {
            Some(c) => ContentLineError::UnexpectedChar(line.number(), c, text.to_owned()),
            None => ContentLineError::MissingValue(line.number(), text.to_owned()),
        });
    }
}

/// Parse `NAME=value *("," value)` and return what follows it.
fn parse_param<'l>(
    to_parse: &'l str,
    params: &mut Parameters,
    line: &Line,
) -> Result<&'l str, ContentLineError> {
    let Some(key) = NAME_TOKEN.find(to_parse) else {
        return Err(ContentLineError::MissingParamKey(
            line.number(),
            line.inner.clone(),
        ));
    };
    let Some(mut to_parse) = to_parse[key.end()..].strip_prefix(PARAM_NAME_DELIMITER) else {
        return Err(ContentLineError::MissingDelimiter(
            line.number(),
            PARAM_NAME_DELIMITER,
            line.inner.clone(),
        ));
    };

    // Loop over comma-separated parameter values
    loop {
        if let Some(quoted) = to_parse.strip_prefix(PARAM_QUOTE) {
            // This is a dquoted value. (NAME;Foo="Bar":value)
            let Some((content, remainder)) = split_quoted(quoted) else {
                return Err(ContentLineError::MissingClosingQuote(
                    line.number(),
                    line.inner.clone(),
                ));
            };
            params.add(key.as_str(), content);
            to_parse = remainder;
        } else {
            // This is a 'raw' value. (NAME;Foo=Bar:value)
            let end = to_parse.find(UNQUOTED_STOP).unwrap_or(to_parse.len());
            if end == 0 {
                return Err(ContentLineError::EmptyParamValue(
                    line.number(),
                    line.inner.clone(),
                ));
            }
            let (content, remainder) = to_parse.split_at(end);
            params.add(key.as_str(), content);
            to_parse = remainder;
        }

        match to_parse.strip_prefix(PARAM_VALUE_DELIMITER) {
            Some(remainder) => to_parse = remainder,
            None => return Ok(to_parse),
        }
    }
}

/// Split the body of a quoted value (opening quote already removed) at its closing quote.
///
/// `\"` and `\\` stand for `"` and `\`; any other backslash is kept as is.
fn split_quoted(input: &str) -> Option<(String, &str)> {
    let mut content = String::new();
    let mut chars = input.char_indices();
    while let Some((pos, c)) = chars.next() {
        match c {
            PARAM_QUOTE => return Some((content, &input[pos + 1..])),
            '\\' => match input[pos + 1..].chars().next() {
                Some(escaped @ (PARAM_QUOTE | '\\')) => {
                    content.push(escaped);
                    chars.next();
                }
                _ => content.push('\\'),
            },
            _ => content.push(c),
        }
    }
    None
}

impl<R: BufRead> Iterator for ContentLineParser<R> {
    type Item = Result<Property, ContentLineError>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.0.by_ref() {
            match line {
                Ok(line) if line.is_empty() => {}
                Ok(line) => return Some(parse_line(&line)),
                Err(err) => return Some(Err(err.into())),
            }
        }
        None
    }
}
