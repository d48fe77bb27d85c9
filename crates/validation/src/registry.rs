//! Read-only constant registries shared by validators and UI label lookup.

use serde::Serialize;

/// A frozen enumeration whose variants are identified by string keys.
pub trait ConstantRegistry: Copy + Eq + 'static {
    /// Registry name, e.g. `Payment.States`.
    const NAME: &'static str;
    /// Every variant in declaration order.
    const ALL: &'static [Self];
    /// Every key in declaration order; the allow-list used by validators.
    const KEYS: &'static [&'static str];

    /// Wire key of the variant.
    fn key(self) -> &'static str;

    /// Human description (Spanish) used as a UI label.
    fn description(self) -> &'static str;

    /// Look a variant up by key.
    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|value| value.key() == key)
    }

    /// Serializable view of the whole registry.
    fn snapshot() -> RegistrySnapshot {
        RegistrySnapshot {
            name: Self::NAME,
            entries: Self::ALL
                .iter()
                .map(|value| RegistryEntry {
                    key: value.key(),
                    description: value.description(),
                })
                .collect(),
        }
    }
}

/// One key/description pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryEntry {
    /// Wire key.
    pub key: &'static str,
    /// Human description.
    pub description: &'static str,
}

/// A registry rendered for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrySnapshot {
    /// Registry name.
    pub name: &'static str,
    /// Entries in declaration order.
    pub entries: Vec<RegistryEntry>,
}

impl RegistrySnapshot {
    /// Description for a key, if present.
    pub fn describe(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.description)
    }
}
