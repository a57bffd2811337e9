use std::fmt;

use serde::{Deserialize, Serialize};

/// Immutable payload stored in every list node.
///
/// `age` is signed: negative ages are valid keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    name: String,
    age: i64,
}

impl Record {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ name: {}, age: {} }}", self.name, self.age)
    }
}
