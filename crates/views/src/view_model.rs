use client::ClientError;
use models::{Listing, Resource};
use serde_json::Value;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Progress of a controller's most recent activation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// What a view shows in its error panel
#[derive(Debug, Clone, PartialEq)]
pub enum ViewError {
    /// The server's rejection payload, verbatim (list load and save failures)
    Payload(Value),
    /// The `message` field of the rejection payload (delete and cancel failures)
    Message(String),
    /// Required fields left blank; nothing was sent
    Missing(Vec<&'static str>),
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Payload(Value::String(s)) => write!(f, "{s}"),
            Self::Payload(value) => write!(f, "{value}"),
            Self::Message(message) => write!(f, "{message}"),
            Self::Missing(fields) => write!(f, "Missing required fields: {}", fields.join(", ")),
        }
    }
}

/// A collection plus the size of the full server-side result set
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewModel<E> {
    pub items: Vec<E>,
    pub count: u64,
    pub state: LoadState,
    pub error: Option<ViewError>,
}

impl<E> Default for ListViewModel<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            count: 0,
            state: LoadState::Idle,
            error: None,
        }
    }
}

impl<E> ListViewModel<E> {
    /// The freshly-activated state: empty and waiting
    pub fn loading() -> Self {
        Self {
            state: LoadState::Loading,
            ..Default::default()
        }
    }

    /// Writes a list result; on failure the collection is left empty and the error returned
    ///
    /// Whether the error reaches the error panel is the caller's decision.
    pub fn settle(&mut self, result: Result<Listing<E>, ClientError>) -> Option<ClientError> {
        match result {
            Ok(listing) => {
                self.items = listing.results;
                self.count = listing.count;
                self.state = LoadState::Loaded;
                None
            }
            Err(e) => {
                self.items.clear();
                self.count = 0;
                self.state = LoadState::Failed;
                Some(e)
            }
        }
    }
}

/// An entity being created or edited
#[derive(Debug, Clone, PartialEq)]
pub struct FormViewModel<E> {
    pub form: E,
    pub state: LoadState,
    pub error: Option<ViewError>,
}

impl<E: Resource> FormViewModel<E> {
    /// A blank form in create mode
    pub fn blank() -> Self {
        Self {
            form: E::default(),
            state: LoadState::Loaded,
            error: None,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.form.id().is_some()
    }
}

impl<E: Resource> Default for FormViewModel<E> {
    fn default() -> Self {
        Self {
            form: E::default(),
            state: LoadState::Idle,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Room;
    use reqwest::StatusCode;
    use serde_json::json;

    #[test]
    fn test_settle_success() {
        let mut view = ListViewModel::<Room>::loading();
        let listing = Listing {
            results: vec![Room {
                id: Some("r1".to_string()),
                number: 101,
                floor: None,
            }],
            count: 4,
        };

        assert!(view.settle(Ok(listing)).is_none());
        assert_eq!(view.state, LoadState::Loaded);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.count, 4);
    }

    #[test]
    fn test_settle_failure_clears_items() {
        let mut view = ListViewModel {
            items: vec![Room::default()],
            count: 1,
            state: LoadState::Loaded,
            error: None,
        };
        let err = ClientError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: json!({"message": "boom"}),
        };

        assert!(view.settle(Err(err)).is_some());
        assert_eq!(view.state, LoadState::Failed);
        assert!(view.items.is_empty());
        assert_eq!(view.count, 0);
    }

    #[test]
    fn test_blank_form_is_create_mode() {
        let view = FormViewModel::<Room>::blank();
        assert!(!view.is_edit());
        assert_eq!(view.form.number, 0);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ViewError::Missing(vec!["first_name", "last_name"]).to_string(),
            "Missing required fields: first_name, last_name"
        );
        assert_eq!(ViewError::Payload(json!("offline")).to_string(), "offline");
        assert_eq!(
            ViewError::Payload(json!({"message": "taken"})).to_string(),
            r#"{"message":"taken"}"#
        );
    }
}
