mod error;
pub use error::ParserError;

mod line;
pub use line::{Line, LineError, LineReader};

mod content_line;
pub use content_line::{ContentLineError, ContentLineParser, parse_line};
pub(crate) use content_line::is_name_token;

mod decoder;
pub use decoder::Decoder;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Maximum nesting depth of components, the top-level component being at depth 1.
    /// `None` leaves the depth bounded by available memory only.
    pub max_depth: Option<usize>,
}
