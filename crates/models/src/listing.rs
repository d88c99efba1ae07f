use serde::{Deserialize, Serialize};

/// A collection response: one page of entities plus the size of the full result set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing<E> {
    pub results: Vec<E>,
    pub count: u64,
}

impl<E> Default for Listing<E> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            count: 0,
        }
    }
}

/// Query parameters for a paginated list call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default = "default_page")]
    pub page: u64,

    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    20
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl Page {
    /// Index of the first entity on this page, saturating past the end
    pub fn offset(&self) -> usize {
        let offset = self.page.saturating_sub(1).saturating_mul(self.per_page);
        usize::try_from(offset).unwrap_or(usize::MAX)
    }

    /// Page size as a `take` bound
    pub fn limit(&self) -> usize {
        usize::try_from(self.per_page).unwrap_or(usize::MAX)
    }
}
