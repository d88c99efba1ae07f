use models::Page;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

/// Collection envelope: `count` is the size of the full collection, not of `results`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListResponse {
    #[schema(value_type = Vec<Object>)]
    pub results: Vec<Value>,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

/// Optional pagination; omit both to receive the whole collection
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl ListParams {
    pub fn page(&self) -> Option<Page> {
        if self.page.is_none() && self.per_page.is_none() {
            return None;
        }

        let defaults = Page::default();
        Some(Page {
            page: self.page.unwrap_or(defaults.page),
            per_page: self.per_page.unwrap_or(defaults.per_page),
        })
    }
}
