//! Tile model composition.
//!
//! [`TileModel`] is the one value the host renderer consumes: the resolved
//! icon color, its translucent background, and the display strings. Building
//! a model is a pure function of the configuration snapshot and the current
//! state store contents; nothing here renders or keeps state between calls.

use serde::Serialize;

use crate::config::TileConfig;
use crate::error::Result;
use crate::palette;
use crate::state::StateStore;

/// Border radius percent used when the configuration does not set one.
pub const DEFAULT_BORDER_RADIUS: u8 = 22;

/// Fixed badge background for unavailable sensors (the accent color).
pub const BADGE_BACKGROUND: &str = "#ff9800";

/// Icon shown in the unavailable badge.
pub const BADGE_ICON: &str = "mdi:help";

/// Badge overlaid on the tile icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// Badge icon name
    pub icon: String,
    /// Badge background hex color
    pub background_color: String,
}

impl Badge {
    /// The badge shown while a sensor is unavailable.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            icon: BADGE_ICON.to_owned(),
            background_color: BADGE_BACKGROUND.to_owned(),
        }
    }
}

/// Everything the host renderer needs to draw one tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileModel {
    /// Entity id the tile observes
    pub entity: String,
    /// Icon name, if configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Resolved icon hex color
    pub icon_color: String,
    /// Translucent background derived from the icon color
    pub background_color: String,
    /// Icon border radius as a CSS percentage string
    pub border_radius: String,
    /// Primary display line (the tile title)
    pub primary: String,
    /// Secondary display line (the raw state plus unit)
    pub secondary: String,
    /// Badge shown while the sensor is unavailable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
}

impl TileModel {
    /// Build the model for one render.
    ///
    /// Returns `Ok(None)` when the state store has no entry for the
    /// configured entity: the tile renders nothing in that case. An
    /// unparsable reading, a malformed color list or an unknown token all
    /// degrade to the palette fallback color; only an unparsable threshold
    /// string is an error, since no color decision can be made from it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TileError::Config`] if the configured thresholds do
    /// not parse as numbers.
    pub fn build(config: &TileConfig, store: &dyn StateStore) -> Result<Option<Self>> {
        let Some(state) = store.get(&config.entity) else {
            return Ok(None);
        };

        let scale = config.color_scale()?;
        let reading = state.reading().unwrap_or(f64::NAN);
        let icon_color = scale.hex_for(reading).to_owned();
        let background_color = palette::translucent(&icon_color);

        let primary = config
            .name
            .clone()
            .or_else(|| state.attributes.friendly_name.clone())
            .unwrap_or_else(|| config.entity.clone());

        let mut secondary = if state.state.is_empty() {
            config.entity.clone()
        } else {
            state.state.clone()
        };
        if let Some(unit) = &state.attributes.unit_of_measurement {
            secondary.push(' ');
            secondary.push_str(unit);
        }

        let border = config.border.unwrap_or(DEFAULT_BORDER_RADIUS);

        Ok(Some(Self {
            entity: config.entity.clone(),
            icon: config.icon.clone(),
            icon_color,
            background_color,
            border_radius: format!("{border}%"),
            primary,
            secondary,
            badge: state.is_unavailable().then(Badge::unavailable),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::FALLBACK_COLOR;
    use crate::state::{MemoryStateStore, SensorState, StateAttributes};

    fn co2_config() -> TileConfig {
        TileConfig::new("sensor.kitchen_co2")
            .with_icon("mdi:molecule-co2")
            .with_scale("600 1000 1500", "green yellow orange red")
    }

    fn store_with(state: SensorState) -> MemoryStateStore {
        let mut store = MemoryStateStore::new();
        store.insert("sensor.kitchen_co2", state);
        store
    }

    #[test]
    fn test_model_for_numeric_reading() {
        let store = store_with(SensorState {
            state: "412".to_owned(),
            attributes: StateAttributes {
                friendly_name: Some("Kitchen CO2".to_owned()),
                unit_of_measurement: Some("ppm".to_owned()),
            },
        });

        let model = TileModel::build(&co2_config(), &store).unwrap().unwrap();
        assert_eq!(model.icon_color, "#4caf50");
        assert_eq!(model.background_color, "#4caf504D");
        assert_eq!(model.border_radius, "22%");
        assert_eq!(model.primary, "Kitchen CO2");
        assert_eq!(model.secondary, "412 ppm");
        assert!(model.badge.is_none());
    }

    #[test]
    fn test_name_override_beats_friendly_name() {
        let store = store_with(SensorState {
            state: "412".to_owned(),
            attributes: StateAttributes {
                friendly_name: Some("Kitchen CO2".to_owned()),
                unit_of_measurement: None,
            },
        });
        let config = co2_config().with_name("CO2");

        let model = TileModel::build(&config, &store).unwrap().unwrap();
        assert_eq!(model.primary, "CO2");
    }

    #[test]
    fn test_entity_id_is_the_last_name_resort() {
        let store = store_with(SensorState::new("412"));
        let model = TileModel::build(&co2_config(), &store).unwrap().unwrap();
        assert_eq!(model.primary, "sensor.kitchen_co2");
        assert_eq!(model.secondary, "412");
    }

    #[test]
    fn test_unavailable_state_gets_badge_and_fallback() {
        let store = store_with(SensorState::new("unavailable"));
        let model = TileModel::build(&co2_config(), &store).unwrap().unwrap();

        assert_eq!(model.badge, Some(Badge::unavailable()));
        // "unavailable" has no numeric reading, so no bucket matches.
        assert_eq!(model.icon_color, FALLBACK_COLOR);
        assert_eq!(model.secondary, "unavailable");
    }

    #[test]
    fn test_missing_entity_builds_nothing() {
        let store = MemoryStateStore::new();
        assert!(TileModel::build(&co2_config(), &store).unwrap().is_none());
    }

    #[test]
    fn test_configured_border_radius() {
        let store = store_with(SensorState::new("412"));
        let config = co2_config().with_border(50);
        let model = TileModel::build(&config, &store).unwrap().unwrap();
        assert_eq!(model.border_radius, "50%");
    }

    #[test]
    fn test_bad_thresholds_are_an_error() {
        let store = store_with(SensorState::new("412"));
        let config = co2_config().with_scale("low high", "a b c");
        assert!(TileModel::build(&config, &store).is_err());
    }

    #[test]
    fn test_unknown_tokens_render_as_fallback() {
        let store = store_with(SensorState::new("2000"));
        let config = co2_config().with_scale("600 1000 1500", "green yellow orange crimson");
        let model = TileModel::build(&config, &store).unwrap().unwrap();
        assert_eq!(model.icon_color, FALLBACK_COLOR);
        assert_eq!(model.background_color, "#ffffff4D");
    }

    #[test]
    fn test_json_shape() {
        let store = store_with(SensorState::new("412"));
        let model = TileModel::build(&co2_config(), &store).unwrap().unwrap();

        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["icon"], "mdi:molecule-co2");
        assert_eq!(json["icon_color"], "#4caf50");
        // Absent badge is omitted entirely, not serialized as null.
        assert!(json.get("badge").is_none());
    }
}
