use models::Page;
use serde_json::{Map, Value};
use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};
use thiserror::Error;
use uuid::Uuid;

/// Collections served under `/v1`
pub const COLLECTIONS: [&str; 4] = ["customers", "rooms", "bookings", "users"];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("unknown collection '{0}'")]
    UnknownCollection(String),

    #[error("no entry '{id}' in {collection}")]
    NotFound { collection: String, id: String },

    #[error("request body must be a JSON object")]
    NotAnObject,
}

type Record = Map<String, Value>;

/// Schemaless in-memory storage, one insertion-ordered vector per collection
///
/// Cloning shares the underlying data.
#[derive(Debug, Clone, Default)]
pub struct Store {
    collections: Arc<RwLock<HashMap<String, Vec<Record>>>>,
}

fn known(collection: &str) -> Result<(), StoreError> {
    if COLLECTIONS.contains(&collection) {
        Ok(())
    } else {
        Err(StoreError::UnknownCollection(collection.to_string()))
    }
}

fn not_found(collection: &str, id: &str) -> StoreError {
    StoreError::NotFound {
        collection: collection.to_string(),
        id: id.to_string(),
    }
}

fn has_id(record: &Record, id: &str) -> bool {
    record.get("id").and_then(Value::as_str) == Some(id)
}

fn into_record(body: Value) -> Result<Record, StoreError> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::NotAnObject),
    }
}

impl Store {
    /// Returns the requested page (or everything) and the full collection size
    pub fn list(
        &self,
        collection: &str,
        page: Option<Page>,
    ) -> Result<(Vec<Value>, u64), StoreError> {
        known(collection)?;

        let collections = self.collections.read().unwrap_or_else(PoisonError::into_inner);
        let records = collections.get(collection).map(Vec::as_slice).unwrap_or_default();
        let count = records.len() as u64;

        let selected = match page {
            Some(page) => records
                .iter()
                .skip(page.offset())
                .take(page.limit())
                .cloned()
                .map(Value::Object)
                .collect(),
            None => records.iter().cloned().map(Value::Object).collect(),
        };

        Ok((selected, count))
    }

    pub fn get(&self, collection: &str, id: &str) -> Result<Value, StoreError> {
        known(collection)?;

        let collections = self.collections.read().unwrap_or_else(PoisonError::into_inner);
        collections
            .get(collection)
            .and_then(|records| records.iter().find(|r| has_id(r, id)))
            .cloned()
            .map(Value::Object)
            .ok_or_else(|| not_found(collection, id))
    }

    /// Stores `body` under a fresh UUID, ignoring any id it carries
    pub fn insert(&self, collection: &str, body: Value) -> Result<Value, StoreError> {
        known(collection)?;
        let mut record = into_record(body)?;
        record.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));

        let mut collections = self.collections.write().unwrap_or_else(PoisonError::into_inner);
        collections
            .entry(collection.to_string())
            .or_default()
            .push(record.clone());

        Ok(Value::Object(record))
    }

    /// Shallow-merges the fields of `body` into the stored record; `id` is never overwritten
    pub fn update(&self, collection: &str, id: &str, body: Value) -> Result<Value, StoreError> {
        known(collection)?;
        let changes = into_record(body)?;

        let mut collections = self.collections.write().unwrap_or_else(PoisonError::into_inner);
        let record = collections
            .get_mut(collection)
            .and_then(|records| records.iter_mut().find(|r| has_id(r, id)))
            .ok_or_else(|| not_found(collection, id))?;

        for (key, value) in changes {
            if key != "id" {
                record.insert(key, value);
            }
        }

        Ok(Value::Object(record.clone()))
    }

    pub fn remove(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        known(collection)?;

        let mut collections = self.collections.write().unwrap_or_else(PoisonError::into_inner);
        let records = collections
            .get_mut(collection)
            .ok_or_else(|| not_found(collection, id))?;

        let position = records
            .iter()
            .position(|r| has_id(r, id))
            .ok_or_else(|| not_found(collection, id))?;
        records.remove(position);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_assigns_fresh_id() {
        let store = Store::default();
        let room = store
            .insert("rooms", json!({"id": "client-made", "number": 101}))
            .unwrap();

        let id = room["id"].as_str().unwrap();
        assert_ne!(id, "client-made");
        assert!(Uuid::parse_str(id).is_ok());
        assert_eq!(store.get("rooms", id).unwrap(), room);
    }

    #[test]
    fn test_list_counts_full_collection() {
        let store = Store::default();
        for number in 1..=5 {
            store.insert("rooms", json!({"number": number})).unwrap();
        }

        let (page, count) = store
            .list("rooms", Some(Page { page: 2, per_page: 2 }))
            .unwrap();
        assert_eq!(count, 5);
        assert_eq!(page.len(), 2);
        assert_eq!(page[0]["number"], 3);

        let (all, count) = store.list("rooms", None).unwrap();
        assert_eq!((all.len(), count), (5, 5));

        let (past_end, count) = store
            .list(
                "rooms",
                Some(Page {
                    page: u64::MAX,
                    per_page: u64::MAX,
                }),
            )
            .unwrap();
        assert!(past_end.is_empty());
        assert_eq!(count, 5);
    }

    #[test]
    fn test_empty_and_unknown_collections() {
        let store = Store::default();
        assert_eq!(store.list("bookings", None).unwrap(), (vec![], 0));
        assert_eq!(
            store.list("invoices", None),
            Err(StoreError::UnknownCollection("invoices".to_string()))
        );
    }

    #[test]
    fn test_update_merges_fields() {
        let store = Store::default();
        let booking = store
            .insert(
                "bookings",
                json!({"room_number": 7, "customerID": "c1", "is_active": true}),
            )
            .unwrap();
        let id = booking["id"].as_str().unwrap();

        let updated = store
            .update("bookings", id, json!({"is_active": false, "id": "other"}))
            .unwrap();

        assert_eq!(updated["id"], id);
        assert_eq!(updated["is_active"], false);
        assert_eq!(updated["room_number"], 7);
    }

    #[test]
    fn test_remove() {
        let store = Store::default();
        let customer = store.insert("customers", json!({"first_name": "Ada"})).unwrap();
        let id = customer["id"].as_str().unwrap();

        store.remove("customers", id).unwrap();
        assert!(matches!(
            store.get("customers", id),
            Err(StoreError::NotFound { .. })
        ));
        assert!(matches!(
            store.remove("customers", id),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_rejects_non_objects() {
        let store = Store::default();
        assert_eq!(
            store.insert("rooms", json!([1, 2])),
            Err(StoreError::NotAnObject)
        );
    }
}
