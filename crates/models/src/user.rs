use crate::{
    numeric,
    resource::{Field, Resource},
};
use serde::{Deserialize, Serialize};

/// A staff account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "numeric::text")]
    pub username: String,
    #[serde(default, deserialize_with = "numeric::text")]
    pub first_name: String,
    #[serde(default, deserialize_with = "numeric::text")]
    pub last_name: String,
}

impl Resource for User {
    const COLLECTION: &'static str = "users";
    const FIELDS: &'static [Field] = &[
        Field::required("username", "Username"),
        Field::optional("first_name", "First name"),
        Field::optional("last_name", "Last name"),
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
