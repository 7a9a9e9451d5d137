//! Icon name to icon handle resolution.
//!
//! The table is handed to the loader by the caller, so a UI can plug in its
//! own icon asset type while tests use plain strings or integers.

use crate::palette::identity::{Icon, IconName};
use tracing::warn;

/// One handle per known icon; `Icon::Cpu` doubles as the fallback.
#[derive(Clone, Debug, PartialEq)]
pub struct IconTable<H> {
    pub cpu: H,
    pub data_line: H,
    pub monitor: H,
    pub setting: H,
    pub link: H,
}

impl IconTable<Icon> {
    /// Maps every icon to itself; unknown names collapse to `Icon::Cpu`.
    pub fn builtin() -> Self {
        Self::from_fn(|icon| icon)
    }
}

impl<H: Clone> IconTable<H> {
    /// Build a table by asking `f` for the handle of each known icon.
    pub fn from_fn(mut f: impl FnMut(Icon) -> H) -> Self {
        Self {
            cpu: f(Icon::Cpu),
            data_line: f(Icon::DataLine),
            monitor: f(Icon::Monitor),
            setting: f(Icon::Setting),
            link: f(Icon::Link),
        }
    }

    pub fn handle(&self, icon: Icon) -> &H {
        match icon {
            Icon::Cpu => &self.cpu,
            Icon::DataLine => &self.data_line,
            Icon::Monitor => &self.monitor,
            Icon::Setting => &self.setting,
            Icon::Link => &self.link,
        }
    }

    /// Handle substituted for names the table does not know.
    pub fn fallback(&self) -> &H {
        &self.cpu
    }

    /// Resolve a catalog icon name. Never fails.
    pub fn resolve(&self, name: &IconName) -> H {
        match name {
            IconName::Known(icon) => self.handle(*icon).clone(),
            IconName::Other(unknown) => {
                warn!(icon = %unknown, "unknown icon name, using fallback");
                self.fallback().clone()
            }
        }
    }
}
