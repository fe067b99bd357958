//! Properties and their typed values.
//!
//! A [`Property`] keeps its value as raw, still escaped text. The typed accessors in this module
//! convert between that text and domain values according to the property's effective value
//! type: the `VALUE` parameter when present, else the default type of the property name.

use std::fmt;

mod params;
pub use params::Parameters;

mod value;
pub use value::ValueError;

use crate::{tables, types::ValueType};

/// An iCalendar property (one content line).
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Property {
    /// Property name, uppercased.
    pub name: String,
    /// Property list of parameters.
    pub params: Parameters,
    /// Raw property value.
    pub value: String,
}

impl Property {
    pub fn new(name: &str) -> Self {
        Property {
            name: name.to_uppercase(),
            ..Default::default()
        }
    }

    /// A property with a raw, already escaped value.
    pub fn with_value(name: &str, value: impl Into<String>) -> Self {
        Property {
            value: value.into(),
            ..Self::new(name)
        }
    }

    pub fn with_param(mut self, name: &str, value: impl Into<String>) -> Self {
        self.params.add(name, value);
        self
    }

    /// Type set by the `VALUE` parameter, else the default type of this property.
    /// `None` when neither is known.
    pub fn value_type(&self) -> Option<ValueType> {
        match self.params.get_value_type() {
            Some(value_type) => value_type.parse().ok(),
            None => self.default_value_type(),
        }
    }

    #[inline]
    pub fn default_value_type(&self) -> Option<ValueType> {
        tables::default_value_type(&self.name)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "name: {}\nparams: {:?}\nvalue: {:?}",
            self.name, self.params, self.value
        )
    }
}
