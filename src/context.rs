use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Read-only page fields consumed as fallback values by the property
/// resolver. Produced by the hosting page, passed explicitly into every
/// render call — there is no process-wide current-page state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContext {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub placeholder: Option<String>,
    /// The user-input key interactive kinds read and write under.
    pub key: Option<String>,
    pub options: Vec<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

/// A value held in the user-input store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    Text(String),
    Number(f64),
}

impl InputValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            InputValue::Text(s) => Some(s),
            InputValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            InputValue::Number(n) => Some(*n),
            InputValue::Text(_) => None,
        }
    }
}

/// External user-input capability, keyed by string.
///
/// The renderer only ever reads (`current_value`, at mount); writes happen
/// later, from the host, when an interactive widget reports a change for
/// the key it carries. Updates are fire-and-forget: the renderer never
/// awaits or observes the result of a write.
pub trait InputStore {
    fn current_value(&self, key: &str) -> Option<InputValue>;
    fn update(&mut self, key: &str, value: InputValue);
}

/// In-memory store, suitable for hosts without their own backing state
/// and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryInputStore {
    values: HashMap<String, InputValue>,
}

impl MemoryInputStore {
    pub fn new() -> MemoryInputStore {
        MemoryInputStore::default()
    }
}

impl InputStore for MemoryInputStore {
    fn current_value(&self, key: &str) -> Option<InputValue> {
        self.values.get(key).cloned()
    }

    fn update(&mut self, key: &str, value: InputValue) {
        self.values.insert(key.to_string(), value);
    }
}
