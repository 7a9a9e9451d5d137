//! Component palette wiring.
//!
//! This module wraps the catalog under `config/device_tree_components.json`
//! so the editor can load a validated snapshot and resolve icons against its
//! own asset type. Types here mirror the catalog fields; callers use
//! `ComponentLoader` for resolved copies and lookups.

pub mod icons;
pub mod identity;
pub mod loader;
pub mod model;
pub mod validate;

pub use icons::IconTable;
pub use identity::{CategoryKey, ComponentType, Icon, IconName};
pub use loader::{ComponentLoader, component_types, find_component};
pub use model::{
    Category, ConnectionPoint, DeviceTreeComponentsConfig, DeviceTreeMeta, PaletteItem,
    ThemeColor,
};
pub use validate::{Direction, InvalidConfig, InvariantViolation, validate_categories};

pub use model::load_config_from_path;
