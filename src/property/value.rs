use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use std::num::{ParseFloatError, ParseIntError};

use super::Property;
use crate::{
    tables::param,
    types::{
        CalDateTimeError, FloatingTime, InvalidDuration, InvalidText, TimezoneResolver, Tz,
        ValueType, format_date, format_datetime, format_duration, join_text_list, parse_date,
        parse_datetime, parse_duration, split_text_list,
    },
};

/// Error arising when converting a property value from or to a typed value
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    #[error("property {property}: expected a {expected} value, found {found}")]
    TypeMismatch {
        property: String,
        expected: ValueType,
        found: ValueType,
    },
    #[error(transparent)]
    Text(#[from] InvalidText),
    #[error("invalid boolean {0:?}")]
    InvalidBoolean(String),
    #[error("invalid integer {0:?}: {1}")]
    InvalidInteger(String, #[source] ParseIntError),
    #[error("invalid float {0:?}: {1}")]
    InvalidFloat(String, #[source] ParseFloatError),
    #[error("invalid binary: {0}")]
    InvalidBinary(#[from] base64::DecodeError),
    #[error(transparent)]
    Duration(#[from] InvalidDuration),
    #[error(transparent)]
    DateTime(#[from] CalDateTimeError),
}

impl Property {
    /// Fail unless the effective value type is `expected` or unknown.
    fn expect_type(&self, expected: ValueType) -> Result<(), ValueError> {
        match self.value_type() {
            Some(found) if found != expected => Err(ValueError::TypeMismatch {
                property: self.name.clone(),
                expected,
                found,
            }),
            _ => Ok(()),
        }
    }

    /// Record the type of a newly set value, leaving out `VALUE` when it is implied.
    fn update_value_type(&mut self, value_type: ValueType) {
        match self.default_value_type() {
            Some(default) if default == value_type => self.params.remove(param::VALUE),
            None if value_type == ValueType::Text => self.params.remove(param::VALUE),
            _ => self.params.set(param::VALUE, value_type.to_string()),
        }
    }

    pub fn get_text_list(&self) -> Result<Vec<String>, ValueError> {
        self.expect_type(ValueType::Text)?;
        Ok(split_text_list(&self.value)?)
    }

    pub fn set_text_list<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.update_value_type(ValueType::Text);
        self.value = join_text_list(items);
    }

    /// First item of the text value.
    pub fn get_text(&self) -> Result<String, ValueError> {
        Ok(self.get_text_list()?.into_iter().next().unwrap_or_default())
    }

    pub fn set_text(&mut self, text: &str) {
        self.set_text_list([text]);
    }

    pub fn get_bool(&self) -> Result<bool, ValueError> {
        self.expect_type(ValueType::Boolean)?;
        if self.value.eq_ignore_ascii_case("TRUE") {
            Ok(true)
        } else if self.value.eq_ignore_ascii_case("FALSE") {
            Ok(false)
        } else {
            Err(ValueError::InvalidBoolean(self.value.clone()))
        }
    }

    pub fn set_bool(&mut self, value: bool) {
        self.update_value_type(ValueType::Boolean);
        self.value = if value { "TRUE" } else { "FALSE" }.to_owned();
    }

    pub fn get_integer(&self) -> Result<i32, ValueError> {
        self.expect_type(ValueType::Integer)?;
        self.value
            .parse()
            .map_err(|err| ValueError::InvalidInteger(self.value.clone(), err))
    }

    pub fn set_integer(&mut self, value: i32) {
        self.update_value_type(ValueType::Integer);
        self.value = value.to_string();
    }

    pub fn get_float(&self) -> Result<f64, ValueError> {
        self.expect_type(ValueType::Float)?;
        self.value
            .parse()
            .map_err(|err| ValueError::InvalidFloat(self.value.clone(), err))
    }

    pub fn set_float(&mut self, value: f64) {
        self.update_value_type(ValueType::Float);
        self.value = value.to_string();
    }

    pub fn get_binary(&self) -> Result<Vec<u8>, ValueError> {
        self.expect_type(ValueType::Binary)?;
        Ok(BASE64.decode(&self.value)?)
    }

    pub fn set_binary(&mut self, bytes: &[u8]) {
        self.update_value_type(ValueType::Binary);
        self.params.set(param::ENCODING, "BASE64");
        self.value = BASE64.encode(bytes);
    }

    pub fn get_date(&self) -> Result<NaiveDate, ValueError> {
        self.expect_type(ValueType::Date)?;
        Ok(parse_date(&self.value)?)
    }

    pub fn set_date(&mut self, date: &NaiveDate) {
        self.update_value_type(ValueType::Date);
        self.value = format_date(date);
    }

    /// Decode a DATE-TIME, reading values without `TZID` and without `Z` as UTC.
    pub fn get_datetime<R>(&self, resolver: &R) -> Result<DateTime<Tz>, ValueError>
    where
        R: TimezoneResolver + ?Sized,
    {
        self.get_datetime_with(resolver, FloatingTime::default())
    }

    /// Decode a DATE-TIME. A `TZID` parameter is looked up through `resolver`, an unknown TZID
    /// is an error. Values with neither `TZID` nor `Z` are placed in the zone chosen by
    /// `floating`.
    pub fn get_datetime_with<R>(
        &self,
        resolver: &R,
        floating: FloatingTime,
    ) -> Result<DateTime<Tz>, ValueError>
    where
        R: TimezoneResolver + ?Sized,
    {
        self.expect_type(ValueType::DateTime)?;
        let zone = match self.params.get_tzid() {
            Some(tzid) => resolver
                .resolve(tzid)
                .ok_or_else(|| CalDateTimeError::UnknownTimezone(tzid.to_owned()))?,
            None => floating.zone(),
        };
        Ok(parse_datetime(&self.value, zone)?)
    }

    /// Store the datetime in its UTC form. A `TZID` parameter no longer applies and is dropped.
    pub fn set_datetime<T: TimeZone>(&mut self, datetime: &DateTime<T>) {
        self.update_value_type(ValueType::DateTime);
        self.params.remove(param::TZID);
        self.value = format_datetime(datetime);
    }

    pub fn get_duration(&self) -> Result<Duration, ValueError> {
        self.expect_type(ValueType::Duration)?;
        Ok(parse_duration(&self.value)?)
    }

    pub fn set_duration(&mut self, duration: &Duration) {
        self.update_value_type(ValueType::Duration);
        self.value = format_duration(duration);
    }
}
