//! Assemble properties into component trees.
//!
//! Every top-level component starts with `BEGIN:<name>` and ends with the matching
//! `END:<name>`. Nested `BEGIN` lines open child components, everything else is appended to the
//! innermost open component, in order.
//!
//! # Examples
//!
//! ```rust
//! let input = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nBEGIN:VEVENT\r\nUID:1\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n";
//!
//! let calendar = calcodec::Decoder::from_slice(input.as_bytes())
//!     .expect_one()
//!     .unwrap();
//! assert_eq!(calendar.name, "VCALENDAR");
//! assert_eq!(calendar.components[0].name, "VEVENT");
//! ```

use std::io::BufRead;

use crate::{
    ContentLineParser, LineReader, ParserError,
    component::Component,
    parser::DecoderOptions,
    property::Property,
    tables::{BEGIN, END},
};

pub struct Decoder<R> {
    line_parser: ContentLineParser<R>,
    options: DecoderOptions,
}

impl<'a> Decoder<&'a [u8]> {
    /// Return a new `Decoder` reading from a byte slice.
    pub fn from_slice(slice: &'a [u8]) -> Self {
        Decoder::new(slice)
    }
}

impl<R: BufRead> Decoder<R> {
    pub fn new(reader: R) -> Self {
        Decoder {
            line_parser: ContentLineParser::new(LineReader::new(reader)),
            options: Default::default(),
        }
    }

    pub fn with_options(mut self, options: DecoderOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    fn next_property(&mut self) -> Result<Option<Property>, ParserError> {
        Ok(self.line_parser.next().transpose()?)
    }

    /// Decode the next top-level component. `Ok(None)` signals the end of the stream.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn decode(&mut self) -> Result<Option<Component>, ParserError> {
        let Some(first) = self.next_property()? else {
            return Ok(None);
        };
        if first.name != BEGIN {
            return Err(ParserError::ExpectedBegin(first.name));
        }

        let component = self.decode_component(&first.value, 1)?;
        tracing::debug!(
            name = %component.name,
            properties = component.properties.len(),
            components = component.components.len(),
            "Decoded component"
        );
        Ok(Some(component))
    }

    /// Read the body of a component whose `BEGIN` line has already been consumed.
    fn decode_component(&mut self, name: &str, depth: usize) -> Result<Component, ParserError> {
        if name.is_empty() {
            return Err(ParserError::MissingComponentName);
        }
        if let Some(max_depth) = self.options.max_depth
            && depth > max_depth
        {
            return Err(ParserError::TooDeeplyNested(max_depth));
        }

        let mut component = Component::new(name);
        tracing::trace!(name = %component.name, depth, "BEGIN");

        loop {
            let Some(prop) = self.next_property()? else {
                return Err(ParserError::Unterminated(component.name));
            };

            match prop.name.as_str() {
                BEGIN => {
                    let child = self.decode_component(&prop.value, depth + 1)?;
                    component.add_component(child);
                }
                END => {
                    if !prop.value.eq_ignore_ascii_case(&component.name) {
                        return Err(ParserError::MismatchedEnd {
                            expected: component.name,
                            found: prop.value,
                        });
                    }
                    tracing::trace!(name = %component.name, depth, "END");
                    return Ok(component);
                }
                _ => component.add_property(prop),
            }
        }
    }

    /// Decode a stream holding exactly one top-level component.
    pub fn expect_one(mut self) -> Result<Component, ParserError> {
        let item = self.decode()?.ok_or(ParserError::EmptyInput)?;
        if self.decode()?.is_some() {
            return Err(ParserError::TooManyComponents);
        }
        Ok(item)
    }
}

impl<R: BufRead> Iterator for Decoder<R> {
    type Item = Result<Component, ParserError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.decode().transpose()
    }
}
