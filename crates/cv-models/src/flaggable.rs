//! String-keyed data bag shared by contexts, users, and sessions

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form key/value data attached to a platform object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flaggable {
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl Flaggable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a value, returning `None` when the key is missing or has another shape
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.data
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Raw JSON value for `key`
    pub fn get_value(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.data.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
