//! Deserializable representation of `config/device_tree_components.json`.
//!
//! The types mirror the catalog file so the loader and tests can reason about
//! palette entries without ad-hoc JSON handling. Every type is generic over
//! the icon representation: a freshly parsed catalog carries `IconName`, a
//! resolved catalog carries whatever handle the injected `IconTable` yields.

use crate::palette::identity::{CategoryKey, ComponentType, IconName};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Root of the palette catalog.
pub struct DeviceTreeComponentsConfig {
    pub categories: Vec<Category>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Named group of palette items sharing a color theme.
pub struct Category<I = IconName> {
    pub key: CategoryKey,
    pub label: String,
    pub icon: I,
    pub color: String,
    pub items: Vec<PaletteItem<I>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Component template the user can drag onto the canvas.
pub struct PaletteItem<I = IconName> {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub label: String,
    pub icon: I,
    pub category: CategoryKey,
    pub inputs: Vec<ConnectionPoint>,
    pub outputs: Vec<ConnectionPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub device_tree: DeviceTreeMeta,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Named bus, pin, or signal endpoint on a component.
pub struct ConnectionPoint {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
/// Device-tree properties carried through to the editor untouched.
pub struct DeviceTreeMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatible: Option<String>,
    #[serde(
        rename = "address-cells",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub address_cells: Option<u32>,
    #[serde(rename = "size-cells", default, skip_serializing_if = "Option::is_none")]
    pub size_cells: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg: Option<u64>,
}

/// Parsed `#RRGGBB` category color.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ThemeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl DeviceTreeComponentsConfig {
    /// Parse catalog JSON without any invariant checks.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: DeviceTreeComponentsConfig = serde_json::from_str(text)?;
        Ok(config)
    }

    /// Total number of items summed across all categories.
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

impl<I> Category<I> {
    /// Copy the category with every icon (its own and its items') mapped
    /// through `f`.
    pub fn map_icons<J, F>(&self, f: &mut F) -> Category<J>
    where
        F: FnMut(&I) -> J,
    {
        Category {
            key: self.key.clone(),
            label: self.label.clone(),
            icon: f(&self.icon),
            color: self.color.clone(),
            items: self.items.iter().map(|item| item.map_icon(f)).collect(),
        }
    }

    /// Theme color, if `color` is well formed.
    pub fn theme_color(&self) -> Option<ThemeColor> {
        ThemeColor::from_hex(&self.color).ok()
    }
}

impl<I> PaletteItem<I> {
    pub fn map_icon<J, F>(&self, f: &mut F) -> PaletteItem<J>
    where
        F: FnMut(&I) -> J,
    {
        PaletteItem {
            component_type: self.component_type.clone(),
            label: self.label.clone(),
            icon: f(&self.icon),
            category: self.category.clone(),
            inputs: self.inputs.clone(),
            outputs: self.outputs.clone(),
            description: self.description.clone(),
            device_tree: self.device_tree.clone(),
        }
    }

    /// Device-tree metadata, or `None` when the item declares none of it.
    pub fn metadata(&self) -> Option<&DeviceTreeMeta> {
        if self.device_tree.is_empty() {
            None
        } else {
            Some(&self.device_tree)
        }
    }
}

impl DeviceTreeMeta {
    pub fn is_empty(&self) -> bool {
        self.compatible.is_none()
            && self.address_cells.is_none()
            && self.size_cells.is_none()
            && self.reg.is_none()
    }
}

impl ThemeColor {
    /// Parse `#RRGGBB` (case-insensitive, leading `#` required).
    pub fn from_hex(value: &str) -> Result<Self> {
        let Some(hex) = value.strip_prefix('#') else {
            bail!("color '{value}' must start with '#'");
        };
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            bail!("color '{value}' must be six hex digits (#RRGGBB)");
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .with_context(|| format!("invalid channel in color '{value}'"))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Read and parse a catalog from disk without additional validation.
pub fn load_config_from_path(path: &Path) -> Result<DeviceTreeComponentsConfig> {
    let data = fs::read_to_string(path)?;
    DeviceTreeComponentsConfig::from_json_str(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::identity::Icon;
    use serde_json::json;

    fn sample_item() -> serde_json::Value {
        json!({
            "type": "i2c-mux",
            "label": "I2C multiplexer",
            "icon": "Link",
            "category": "i2c-bridge",
            "inputs": [{ "id": "i2c-bus", "name": "I2C bus" }],
            "outputs": [
                { "id": "ch0", "name": "Channel 0" },
                { "id": "ch1", "name": "Channel 1" }
            ],
            "compatible": "nxp,pca9546",
            "address-cells": 1,
            "size-cells": 0,
            "reg": 112
        })
    }

    #[test]
    fn item_parses_device_tree_fields_into_sub_record() {
        let item: PaletteItem = serde_json::from_value(sample_item()).unwrap();
        assert_eq!(item.component_type.as_str(), "i2c-mux");
        assert_eq!(item.icon, IconName::Known(Icon::Link));
        assert_eq!(item.outputs.len(), 2);
        assert_eq!(item.outputs[1].id, "ch1");
        assert!(item.description.is_none());

        let meta = item.metadata().expect("metadata present");
        assert_eq!(meta.compatible.as_deref(), Some("nxp,pca9546"));
        assert_eq!(meta.address_cells, Some(1));
        assert_eq!(meta.size_cells, Some(0));
        assert_eq!(meta.reg, Some(112));
    }

    #[test]
    fn item_without_device_tree_fields_has_no_metadata() {
        let item: PaletteItem = serde_json::from_value(json!({
            "type": "soc-cpu",
            "label": "CPU core",
            "icon": "Cpu",
            "category": "soc",
            "inputs": [],
            "outputs": [],
            "description": "core"
        }))
        .unwrap();
        assert!(item.metadata().is_none());
        assert_eq!(item.description.as_deref(), Some("core"));
    }

    #[test]
    fn item_serializes_with_catalog_field_names() {
        let item: PaletteItem = serde_json::from_value(sample_item()).unwrap();
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value.get("type").and_then(|v| v.as_str()), Some("i2c-mux"));
        assert_eq!(
            value.get("address-cells").and_then(|v| v.as_u64()),
            Some(1)
        );
        assert!(value.get("description").is_none());
        assert!(value.get("device_tree").is_none());
    }

    #[test]
    fn map_icon_preserves_everything_else() {
        let item: PaletteItem = serde_json::from_value(sample_item()).unwrap();
        let mapped = item.map_icon(&mut |name: &IconName| name.as_str().len());
        assert_eq!(mapped.icon, 4);
        assert_eq!(mapped.component_type, item.component_type);
        assert_eq!(mapped.inputs, item.inputs);
        assert_eq!(mapped.outputs, item.outputs);
        assert_eq!(mapped.device_tree, item.device_tree);
    }

    #[test]
    fn theme_color_parses_hex() {
        let color = ThemeColor::from_hex("#409eff").unwrap();
        assert_eq!((color.r, color.g, color.b), (0x40, 0x9e, 0xff));
        assert_eq!(color.to_string(), "#409eff");
        assert!(ThemeColor::from_hex("409eff").is_err());
        assert!(ThemeColor::from_hex("#40 9ef").is_err());
        assert!(ThemeColor::from_hex("#409ef").is_err());
    }

    #[test]
    fn item_count_sums_categories() {
        let config = DeviceTreeComponentsConfig::from_json_str(
            &json!({
                "categories": [
                    { "key": "a", "label": "A", "icon": "Cpu", "color": "#000000", "items": [] },
                    { "key": "b", "label": "B", "icon": "Cpu", "color": "#000000", "items": [sample_item(), sample_item()] }
                ]
            })
            .to_string(),
        )
        .unwrap();
        assert_eq!(config.item_count(), 2);
    }
}
