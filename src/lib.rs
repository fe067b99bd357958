const PARAM_VALUE_DELIMITER: char = ',';
const VALUE_DELIMITER: char = ':';
const PARAM_DELIMITER: char = ';';
const PARAM_NAME_DELIMITER: char = '=';
const PARAM_QUOTE: char = '"';

pub mod component;
pub use component::{Component, ComponentKind};

pub mod parser;
pub use parser::{ContentLineParser, Decoder, DecoderOptions, LineReader, ParserError};

pub mod property;
pub use property::{Parameters, Property, ValueError};

pub mod generator;
pub use generator::{Emitter, EncodeError, Encoder};

pub mod tables;

pub mod types;

pub mod validator;
pub use validator::{ValidationError, validate};
