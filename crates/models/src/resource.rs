use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::fmt::Debug;
use strum::{AsRefStr, Display, EnumIter, EnumProperty, EnumString, IntoEnumIterator};

/// One form/table field of an entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// JSON key as exchanged with the server
    pub name: &'static str,
    /// Human readable column label
    pub label: &'static str,
    /// Whether a save must be refused while this field is blank
    pub required: bool,
}

impl Field {
    pub const fn required(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            required: false,
        }
    }
}

/// An entity kind exchanged with the `/v1` REST API
///
/// Entities are plain records: the server assigns `id`, the client never does.
pub trait Resource:
    Serialize + DeserializeOwned + Clone + Default + Debug + Send + Sync + 'static
{
    /// Plural path segment, as in `/v1/<COLLECTION>/`
    const COLLECTION: &'static str;

    /// Field schema used for presence checks and rendering
    const FIELDS: &'static [Field];

    /// Server-assigned identifier, absent on a new entity
    fn id(&self) -> Option<&str>;

    /// Names of required fields that are null or blank
    ///
    /// # Returns
    /// An empty vector when the entity may be sent to the server
    fn missing_fields(&self) -> Vec<&'static str> {
        let value = serde_json::to_value(self).unwrap_or(Value::Null);

        Self::FIELDS
            .iter()
            .filter(|field| field.required)
            .filter(|field| match value.get(field.name) {
                None | Some(Value::Null) => true,
                Some(Value::String(s)) => s.trim().is_empty(),
                Some(_) => false,
            })
            .map(|field| field.name)
            .collect()
    }
}

/// The entity kinds that have screens of their own
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr, EnumProperty,
)]
pub enum Kind {
    #[strum(serialize = "customers", props(singular = "customer"))]
    Customers,
    #[strum(serialize = "rooms", props(singular = "room"))]
    Rooms,
    #[strum(serialize = "bookings", props(singular = "booking"))]
    Bookings,
}

impl Kind {
    /// Plural path segment, e.g. `rooms`
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Singular name, e.g. `room`
    pub fn singular(&self) -> &'static str {
        self.get_str("singular").unwrap_or_default()
    }

    pub fn all() -> Vec<Kind> {
        Kind::iter().collect()
    }
}
