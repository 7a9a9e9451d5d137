use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Stable identifier of a palette item (e.g., `soc-main`).
///
/// The editor keys drag payloads and lookups by this value, so it must be
/// unique across the whole catalog.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentType(pub String);

/// Stable identifier of a palette category (e.g., `i2c-bridge`).
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKey(pub String);

impl ComponentType {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CategoryKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Icons the palette knows how to draw.
///
/// Adding a variant forces every `IconTable` to supply a handle for it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Icon {
    Cpu,
    DataLine,
    Monitor,
    Setting,
    Link,
}

/// Icon reference as written in a catalog file.
///
/// Known names parse into `Known`; anything else is kept verbatim in `Other`
/// so the loader can log it before substituting the fallback icon.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum IconName {
    Known(Icon),
    Other(String),
}

impl Icon {
    pub const ALL: [Icon; 5] = [
        Icon::Cpu,
        Icon::DataLine,
        Icon::Monitor,
        Icon::Setting,
        Icon::Link,
    ];

    /// Name used in catalog files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Cpu => "Cpu",
            Icon::DataLine => "DataLine",
            Icon::Monitor => "Monitor",
            Icon::Setting => "Setting",
            Icon::Link => "Link",
        }
    }

    /// Kebab-case asset identifier understood by the icon library.
    pub fn asset_name(&self) -> &'static str {
        match self {
            Icon::Cpu => "cpu",
            Icon::DataLine => "data-line",
            Icon::Monitor => "monitor",
            Icon::Setting => "setting",
            Icon::Link => "link",
        }
    }

    fn from_name(value: &str) -> Option<Self> {
        Icon::ALL.into_iter().find(|icon| icon.as_str() == value)
    }
}

impl IconName {
    pub fn as_str(&self) -> &str {
        match self {
            IconName::Known(icon) => icon.as_str(),
            IconName::Other(value) => value.as_str(),
        }
    }

    fn from_str(value: &str) -> Self {
        match Icon::from_name(value) {
            Some(icon) => IconName::Known(icon),
            None => IconName::Other(value.to_string()),
        }
    }
}

impl From<Icon> for IconName {
    fn from(icon: Icon) -> Self {
        IconName::Known(icon)
    }
}

impl Serialize for Icon {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for IconName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for IconName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_str(&value))
    }
}
