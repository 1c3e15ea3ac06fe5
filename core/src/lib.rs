//! # sensortile-rs-core
//!
//! Core library for sensortile-rs: a dashboard status tile that colors a
//! sensor icon by which configured interval the sensor's current reading
//! falls into.
//!
//! ## Features
//!
//! - **Threshold color scale** - linear-scan bucket assignment, fail-closed
//! - **Fixed color palette** - 26 named colors with a defined fallback
//! - **Tile model** - one serializable value per render for the host renderer
//! - **Configuration management** - RON-based config with snapshot semantics
//! - **Typed state access** - explicit store interface for host entity states
//! - **Host events** - callback registration for more-info and config changes
//!
//! ## Quick Start
//!
//! ```rust
//! use sensortile_rs_core::{MemoryStateStore, SensorState, TileConfig, TileModel};
//!
//! let config = TileConfig::new("sensor.kitchen_co2")
//!     .with_scale("600 1000 1500", "green yellow orange red");
//!
//! let mut store = MemoryStateStore::new();
//! store.insert("sensor.kitchen_co2", SensorState::new("412"));
//!
//! let model = TileModel::build(&config, &store).unwrap().unwrap();
//! assert_eq!(model.icon_color, "#4caf50");
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod palette;
pub mod scale;
pub mod state;
pub mod tile;

pub use config::TileConfig;
pub use error::{Result, TileError};
pub use events::{EventDispatcher, TileEvent};
pub use scale::ColorScale;
pub use state::{MemoryStateStore, SensorState, StateAttributes, StateStore};
pub use tile::{Badge, TileModel};
