use crate::{
    numeric,
    resource::{Field, Resource},
};
use serde::{Deserialize, Serialize};

/// A bookable room
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Defaults to 0 on a new form
    #[serde(default, deserialize_with = "numeric::integer")]
    pub number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
}

impl Resource for Room {
    const COLLECTION: &'static str = "rooms";
    const FIELDS: &'static [Field] = &[
        Field::required("number", "Number"),
        Field::optional("floor", "Floor"),
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
