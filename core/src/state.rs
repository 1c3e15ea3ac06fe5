//! Typed access to the host dashboard's entity state store.
//!
//! The host keeps one textual state object per entity. The tile only ever
//! reads the entry for its configured entity; a missing entry means the tile
//! renders nothing for that update.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;

/// Textual state reported when a sensor has dropped off the bus.
pub const STATE_UNAVAILABLE: &str = "unavailable";

/// Attributes carried alongside an entity's state.
///
/// The host attaches more keys than these; everything the tile does not
/// consume is ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StateAttributes {
    /// Human-readable entity name, if the host knows one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    /// Unit suffix for the displayed value (e.g. "ppm", "°C")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_of_measurement: Option<String>,
}

/// One entity's current state as exported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SensorState {
    /// The raw textual state ("412", "unavailable", ...)
    pub state: String,
    /// Display attributes
    #[serde(default)]
    pub attributes: StateAttributes,
}

impl SensorState {
    /// Create a state with the given text and no attributes.
    #[must_use]
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            attributes: StateAttributes::default(),
        }
    }

    /// Parse the textual state as a numeric reading.
    ///
    /// Returns `None` when the text is not a valid number ("unavailable",
    /// "unknown", free-form states). The resolver treats a missing reading
    /// as matching no bucket.
    #[must_use]
    pub fn reading(&self) -> Option<f64> {
        self.state.trim().parse::<f64>().ok()
    }

    /// Whether the sensor is currently unavailable.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        self.state == STATE_UNAVAILABLE
    }
}

/// Read access to the host's entity state store.
///
/// The tile never enumerates entities and never writes; one keyed lookup per
/// render is the whole interface.
pub trait StateStore {
    /// Get the current state for an entity, if the store has one.
    fn get(&self, entity_id: &str) -> Option<&SensorState>;
}

/// In-memory state store backed by a `HashMap`.
///
/// The host (or the tile binary) rebuilds it wholesale from each state
/// export; individual entries are never patched in place.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MemoryStateStore {
    #[serde(flatten)]
    states: HashMap<String, SensorState>,
}

impl MemoryStateStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entity's state.
    pub fn insert(&mut self, entity_id: impl Into<String>, state: SensorState) {
        self.states.insert(entity_id.into(), state);
    }

    /// Number of entities in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the store holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Parse a store from a host state export.
    ///
    /// The export is a JSON object keyed by entity id:
    ///
    /// ```json
    /// { "sensor.kitchen_co2": { "state": "412", "attributes": { "unit_of_measurement": "ppm" } } }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a parse error if the document is not valid JSON of this shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a store from a state export file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

impl StateStore for MemoryStateStore {
    fn get(&self, entity_id: &str) -> Option<&SensorState> {
        self.states.get(entity_id)
    }
}
