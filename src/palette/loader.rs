//! Validated palette snapshot plus the lookups the editor needs.
//!
//! A loader reads its source once at construction, runs the schema and the
//! invariant checks, and keeps the raw catalog. Every `load_components` call
//! hands out a fresh copy with icons resolved through the injected table.

use crate::palette::icons::IconTable;
use crate::palette::identity::{CategoryKey, ComponentType, Icon, IconName};
use crate::palette::model::{Category, DeviceTreeComponentsConfig, PaletteItem};
use crate::palette::validate::check_categories;
use crate::schema::validate_components_value;
use crate::source::ComponentSource;
use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

#[derive(Debug)]
pub struct ComponentLoader<H> {
    source: ComponentSource,
    icons: IconTable<H>,
    config: DeviceTreeComponentsConfig,
}

impl ComponentLoader<Icon> {
    /// Embedded catalog with the identity icon table.
    pub fn builtin() -> Result<Self> {
        Self::new(ComponentSource::Embedded, IconTable::builtin())
    }
}

impl<H: Clone> ComponentLoader<H> {
    /// Read and validate `source`.
    ///
    /// Fails on unreadable input, schema errors, or broken invariants
    /// (`InvalidConfig` is reachable through `downcast_ref`).
    pub fn new(source: ComponentSource, icons: IconTable<H>) -> Result<Self> {
        let config = read_validated(&source)?;
        Ok(Self {
            source,
            icons,
            config,
        })
    }

    /// Resolved copy of the catalog. The snapshot itself is never touched.
    pub fn load_components(&self) -> Vec<Category<H>> {
        let mut resolve = |name: &IconName| self.icons.resolve(name);
        self.config
            .categories
            .iter()
            .map(|category| category.map_icons(&mut resolve))
            .collect()
    }

    /// Re-read the source, then resolve as `load_components` does.
    ///
    /// A file source picks up edits made since the last load. On error the
    /// previous snapshot stays in place.
    pub fn reload_components(&mut self) -> Result<Vec<Category<H>>> {
        self.config = read_validated(&self.source)?;
        Ok(self.load_components())
    }

    /// First item with the given type, in category-then-item order.
    pub fn component_by_type(&self, component_type: &str) -> Option<PaletteItem<H>> {
        let item = find_component(&self.config.categories, component_type)?;
        Some(item.map_icon(&mut |name: &IconName| self.icons.resolve(name)))
    }

    /// Every item type in category-then-item order.
    pub fn all_component_types(&self) -> Vec<ComponentType> {
        component_types(&self.config.categories)
    }

    /// Raw categories (icon names unresolved).
    pub fn categories(&self) -> &[Category] {
        &self.config.categories
    }

    pub fn category(&self, key: &CategoryKey) -> Option<&Category> {
        self.config.categories.iter().find(|c| &c.key == key)
    }

    pub fn config(&self) -> &DeviceTreeComponentsConfig {
        &self.config
    }

    pub fn source(&self) -> &ComponentSource {
        &self.source
    }

    pub fn icons(&self) -> &IconTable<H> {
        &self.icons
    }
}

/// Scan `categories` for the first item whose type equals `component_type`.
pub fn find_component<'a, I>(
    categories: &'a [Category<I>],
    component_type: &str,
) -> Option<&'a PaletteItem<I>> {
    categories
        .iter()
        .flat_map(|category| category.items.iter())
        .find(|item| item.component_type.as_str() == component_type)
}

/// Collect item types in order; duplicates are kept.
pub fn component_types<I>(categories: &[Category<I>]) -> Vec<ComponentType> {
    categories
        .iter()
        .flat_map(|category| category.items.iter())
        .map(|item| item.component_type.clone())
        .collect()
}

fn read_validated(source: &ComponentSource) -> Result<DeviceTreeComponentsConfig> {
    let origin = source.to_string();
    let text = source.read()?;
    let value: Value =
        serde_json::from_str(&text).with_context(|| format!("parsing {origin}"))?;
    validate_components_value(&value, &origin)?;
    let config: DeviceTreeComponentsConfig =
        serde_json::from_value(value).with_context(|| format!("decoding {origin}"))?;
    check_categories(&config.categories, &origin)?;
    debug!(
        source = %origin,
        categories = config.categories.len(),
        components = config.item_count(),
        "loaded palette catalog"
    );
    Ok(config)
}
