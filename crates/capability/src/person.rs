//! A plain record with no capability attached.

use serde::{Deserialize, Serialize};

/// A person with a first and last name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl Default for Person {
    fn default() -> Self {
        Self::new("Tom", "Cruise")
    }
}
