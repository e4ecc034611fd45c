use serde::Serialize;
use std::collections::BTreeMap;

/// Value bound to a route parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Bound by a dynamic segment
    One(String),
    /// Bound by a catch-all segment, possibly empty
    Many(Vec<String>),
}

/// Parameters extracted while matching a request path
///
/// Built once per match and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params {
    values: BTreeMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Value of a dynamic parameter
    ///
    /// ```
    /// use approute_router::{ParamValue, Params};
    ///
    /// let params: Params = [("productID", ParamValue::One("42".into()))].into_iter().collect();
    /// assert_eq!(params.one("productID"), Some("42"));
    /// assert_eq!(params.many("productID"), None);
    /// ```
    pub fn one(&self, name: &str) -> Option<&str> {
        match self.values.get(name)? {
            ParamValue::One(value) => Some(value),
            ParamValue::Many(_) => None,
        }
    }

    /// Components captured by a catch-all parameter
    pub fn many(&self, name: &str) -> Option<&[String]> {
        match self.values.get(name)? {
            ParamValue::Many(values) => Some(values),
            ParamValue::One(_) => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn insert(&mut self, name: &str, value: ParamValue) {
        self.values.insert(name.to_string(), value);
    }
}

impl<K: Into<String>> FromIterator<(K, ParamValue)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, ParamValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
