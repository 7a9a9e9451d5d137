//! Component palette catalog for a device-tree editor.
//!
//! The crate turns a declarative JSON catalog of hardware component
//! templates (SOCs, CPU cores, bus bridges, channels, sensors) into typed,
//! validated data the editor's palette can render. Public items here form
//! the contract the editor and the `dtpalette` binary depend on: catalog
//! types, the loader with icon resolution, and source selection.

pub mod palette;
pub mod schema;
pub mod source;

pub use palette::{
    Category, CategoryKey, ComponentLoader, ComponentType, ConnectionPoint,
    DeviceTreeComponentsConfig, DeviceTreeMeta, Icon, IconName, IconTable, InvalidConfig,
    InvariantViolation, PaletteItem, load_config_from_path,
};
pub use schema::components_schema;
pub use source::{COMPONENTS_ENV, ComponentSource};
