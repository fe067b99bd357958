use crate::parser::ContentLineError;

#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("empty input")]
    EmptyInput,
    #[error("too many components in input, expected one")]
    TooManyComponents,
    #[error("content line error: {0}")]
    ContentLineError(#[from] ContentLineError),
    #[error("malformed component: expected BEGIN, found {0}")]
    ExpectedBegin(String),
    #[error("malformed component: BEGIN without a component name")]
    MissingComponentName,
    #[error("malformed component: expected END:{expected}, found END:{found}")]
    MismatchedEnd { expected: String, found: String },
    #[error("unterminated component: {0}")]
    Unterminated(String),
    #[error("components nested deeper than {0} levels")]
    TooDeeplyNested(usize),
}
