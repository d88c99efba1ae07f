use crate::{
    numeric,
    resource::{Field, Resource},
};
use serde::{Deserialize, Serialize};

/// A hotel guest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "numeric::text")]
    pub first_name: String,
    #[serde(default, deserialize_with = "numeric::text")]
    pub last_name: String,
    #[serde(default, deserialize_with = "numeric::text")]
    pub address: String,
    /// Stored as entered on the form, read back as a number
    #[serde(default, deserialize_with = "numeric::optional_integer")]
    pub phone_number: Option<u64>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl Resource for Customer {
    const COLLECTION: &'static str = "customers";
    const FIELDS: &'static [Field] = &[
        Field::required("first_name", "First name"),
        Field::required("last_name", "Last name"),
        Field::optional("address", "Address"),
        Field::optional("phone_number", "Phone"),
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
