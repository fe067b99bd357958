use itertools::Itertools;

use crate::{
    Component, PARAM_DELIMITER, PARAM_NAME_DELIMITER, PARAM_VALUE_DELIMITER, Property,
    VALUE_DELIMITER,
    generator::{Emitter, fold_line, quote_param_value},
    tables::{BEGIN, END},
};

impl Emitter for Property {
    fn generate(&self) -> String {
        let mut line = self.name.clone();
        for (key, values) in self.params.iter() {
            line.push(PARAM_DELIMITER);
            line.push_str(key);
            line.push(PARAM_NAME_DELIMITER);
            line += &values
                .iter()
                .map(|value| quote_param_value(value))
                .join(&PARAM_VALUE_DELIMITER.to_string());
        }
        line.push(VALUE_DELIMITER);
        line.push_str(&self.value);
        fold_line(&line)
    }
}

impl Emitter for Component {
    fn generate(&self) -> String {
        let mut text = fold_line(&format!("{BEGIN}{VALUE_DELIMITER}{}", self.name));
        text += &self.properties.generate();
        text += &self.components.generate();
        text + &fold_line(&format!("{END}{VALUE_DELIMITER}{}", self.name))
    }
}
