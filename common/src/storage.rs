use std::collections::HashMap;

use anyhow::Result;

// persisted key-value storage
//
// the navbar only ever touches one key, but the port is kept general so the
// browser's localStorage and the in-memory store look the same to the controller.
// callers are expected to treat errors as "storage unavailable" and carry on
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

// in-memory store
//
// used by the tests and by any host without real persistence.  flipping
// `available` off makes every call fail, the same way a disabled or full
// localStorage does
#[derive(Clone, Debug)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    available: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            values: HashMap::new(),
            available: true,
        }
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_owned(), value.to_owned());
        store
    }

    pub fn unavailable() -> Self {
        MemoryStore {
            values: HashMap::new(),
            available: false,
        }
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    // bypasses availability, for inspecting what actually got persisted
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn check(&self) -> Result<()> {
        if self.available {
            Ok(())
        } else {
            Err(anyhow::Error::msg("preference store unavailable"))
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
