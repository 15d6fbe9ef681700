//! Whole-GUI snapshots and their persisted layout.
//!
//! A snapshot maps controller names to serialized values, in registration order:
//! ```json
//! { "speed": { "type": "Scalar", "value": 5.0, "isDieActive": true },
//!   "tint":  { "type": "Color", "value": { "r": 221, "g": 167, "b": 2, "a": 255 } } }
//! ```
//! The stored and exported form wraps it in an envelope keyed by the registry:
//! `{ "<registryKey>": <snapshot> }`.
use crate::codec::SerializedValue;
use crate::error::{GuiError, GuiResult};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// One controller's state inside a [Snapshot].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireEntry", into = "WireEntry")]
pub struct SnapshotEntry {
    pub value: SerializedValue,
    /// Randomizer indicator state, present for randomizable controllers.
    pub is_die_active: Option<bool>,
}

impl SnapshotEntry {
    pub fn new(value: SerializedValue) -> Self {
        Self {
            value,
            is_die_active: None,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct WireEntry {
    #[serde(rename = "type")]
    kind: String,
    value: serde_json::Value,
    #[serde(
        rename = "isDieActive",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    is_die_active: Option<bool>,
}

impl TryFrom<WireEntry> for SnapshotEntry {
    type Error = GuiError;

    fn try_from(wire: WireEntry) -> Result<Self, Self::Error> {
        let value = SerializedValue::from_json(serde_json::json!({
            "type": wire.kind,
            "value": wire.value,
        }))?;
        Ok(Self {
            value,
            is_die_active: wire.is_die_active,
        })
    }
}

impl From<SnapshotEntry> for WireEntry {
    fn from(entry: SnapshotEntry) -> Self {
        let (kind, value) = match serde_json::to_value(&entry.value) {
            Ok(serde_json::Value::Object(mut map)) => (
                map.remove("type")
                    .and_then(|t| t.as_str().map(str::to_string))
                    .unwrap_or_default(),
                map.remove("value").unwrap_or(serde_json::Value::Null),
            ),
            _ => (String::new(), serde_json::Value::Null),
        };
        Self {
            kind,
            value,
            is_die_active: entry.is_die_active,
        }
    }
}

/// An ordered mapping from controller name to [SnapshotEntry].
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Snapshot {
    entries: Vec<(String, SnapshotEntry)>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, replacing any earlier entry with the same name.
    pub fn insert(&mut self, name: impl Into<String>, entry: SnapshotEntry) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, e)) => *e = entry,
            None => self.entries.push((name, entry)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SnapshotEntry> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, e)| e)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SnapshotEntry)> {
        self.entries.iter().map(|(n, e)| (n.as_str(), e))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encodes the snapshot inside the `{ "<registryKey>": ... }` envelope.
    pub fn to_envelope(&self, registry_key: &str) -> GuiResult<String> {
        Ok(serde_json::to_string(&Envelope {
            key: registry_key,
            snapshot: self,
        })?)
    }

    pub fn to_envelope_pretty(&self, registry_key: &str) -> GuiResult<String> {
        Ok(serde_json::to_string_pretty(&Envelope {
            key: registry_key,
            snapshot: self,
        })?)
    }

    /// Decodes the snapshot stored under `registry_key` in an envelope.
    pub fn from_envelope(registry_key: &str, json: &str) -> GuiResult<Self> {
        let mut groups: HashMap<String, Snapshot> = serde_json::from_str(json)?;
        groups.remove(registry_key).ok_or_else(|| {
            GuiError::malformed(format!("no settings stored for '{}'", registry_key))
        })
    }
}

struct Envelope<'s> {
    key: &'s str,
    snapshot: &'s Snapshot,
}

impl<'s> Serialize for Envelope<'s> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, self.snapshot)?;
        map.end()
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, entry) in &self.entries {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SnapshotVisitor;

        impl<'de> Visitor<'de> for SnapshotVisitor {
            type Value = Snapshot;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of controller names to serialized values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Snapshot, A::Error> {
                let mut snapshot = Snapshot::new();
                while let Some((name, entry)) = access.next_entry::<String, SnapshotEntry>()? {
                    if snapshot.get(&name).is_some() {
                        return Err(serde::de::Error::custom(format!(
                            "controller '{}' appears twice",
                            name
                        )));
                    }
                    snapshot.entries.push((name, entry));
                }
                Ok(snapshot)
            }
        }

        deserializer.deserialize_map(SnapshotVisitor)
    }
}
