use crate::{
    numeric,
    resource::{Field, Resource},
};
use serde::{Deserialize, Serialize};

/// A room reservation held by a customer
///
/// Bookings are never deleted by the front end; cancelling clears `is_active`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "numeric::optional_integer")]
    pub room_number: Option<u32>,
    #[serde(rename = "customerID", default, deserialize_with = "numeric::text")]
    pub customer_id: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Default for Booking {
    fn default() -> Self {
        Self {
            id: None,
            room_number: None,
            customer_id: String::new(),
            is_active: default_active(),
        }
    }
}

impl Resource for Booking {
    const COLLECTION: &'static str = "bookings";
    const FIELDS: &'static [Field] = &[
        Field::required("room_number", "Room"),
        Field::required("customerID", "Customer"),
        Field::optional("is_active", "Active"),
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
