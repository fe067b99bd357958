use crate::tables::param;

/// Property parameters, in the order they were first seen.
///
/// Keys are stored uppercased and looked up case-insensitively. Every key holds at least one
/// value.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Parameters(Vec<(String, Vec<String>)>);

impl Parameters {
    #[inline]
    fn position(&self, name: &str) -> Option<usize> {
        self.0
            .iter()
            .position(|(key, _)| key.eq_ignore_ascii_case(name))
    }

    /// First value of the parameter.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    #[inline]
    pub fn get_all(&self, name: &str) -> Option<&[String]> {
        self.position(name).map(|pos| self.0[pos].1.as_slice())
    }

    #[inline]
    pub fn get_tzid(&self) -> Option<&str> {
        self.get(param::TZID)
    }

    #[inline]
    pub fn get_value_type(&self) -> Option<&str> {
        self.get(param::VALUE)
    }

    /// Replace the parameter by a single value.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.set_all(name, vec![value.into()]);
    }

    /// Replace all values of the parameter. An empty list removes it.
    pub fn set_all(&mut self, name: &str, values: Vec<String>) {
        if values.is_empty() {
            self.remove(name);
            return;
        }
        match self.position(name) {
            Some(pos) => self.0[pos].1 = values,
            None => self.0.push((name.to_uppercase(), values)),
        }
    }

    /// Append one value, keeping the values already present.
    pub fn add(&mut self, name: &str, value: impl Into<String>) {
        match self.position(name) {
            Some(pos) => self.0[pos].1.push(value.into()),
            None => self.0.push((name.to_uppercase(), vec![value.into()])),
        }
    }

    #[inline]
    pub fn remove(&mut self, name: &str) {
        self.0.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: AsRef<str>> FromIterator<(K, Vec<String>)> for Parameters {
    fn from_iter<T: IntoIterator<Item = (K, Vec<String>)>>(iter: T) -> Self {
        let mut params = Parameters::default();
        for (name, values) in iter {
            for value in values {
                params.add(name.as_ref(), value);
            }
        }
        params
    }
}
