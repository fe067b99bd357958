use std::io::Write;

use crate::{Component, ValidationError, generator::Emitter, validate};

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("refusing to encode an invalid component: {0}")]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Writes validated component trees to a byte stream.
///
/// # Examples
///
/// ```rust
/// let input = "BEGIN:VCALENDAR\r\nPRODID:-//x//\r\nVERSION:2.0\r\nDTSTART:19960704T120000Z\r\n\
///     BEGIN:VEVENT\r\nUID:u1\r\nDTSTAMP:19960704T120000Z\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n";
/// let calendar = calcodec::Decoder::from_slice(input.as_bytes()).expect_one().unwrap();
///
/// let mut encoder = calcodec::Encoder::new(Vec::new());
/// encoder.encode(&calendar).unwrap();
/// assert_eq!(encoder.into_inner(), input.as_bytes());
/// ```
pub struct Encoder<W> {
    writer: W,
}

impl<W: Write> Encoder<W> {
    pub fn new(writer: W) -> Self {
        Encoder { writer }
    }

    /// Validate `component` and write it. Nothing is written when validation fails.
    #[tracing::instrument(skip_all, fields(name = %component.name), level = "debug")]
    pub fn encode(&mut self, component: &Component) -> Result<(), EncodeError> {
        if let Err(err) = validate(component) {
            tracing::warn!(%err, "Refusing to encode invalid component");
            return Err(err.into());
        }
        let text = component.generate();
        self.writer.write_all(text.as_bytes())?;
        tracing::debug!(octets = text.len(), "Encoded component");
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
