use crate::error::ClientError;
use log::debug;
use models::{Listing, Page, Resource};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::{marker::PhantomData, sync::Arc};

/// Typed REST bindings for one entity kind
///
/// Every call is a single round trip with no retry, timeout or caching. Failures
/// are handed back untouched.
pub struct ResourceClient<E> {
    http: Client,
    base_url: Arc<str>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for ResourceClient<E> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: Arc::clone(&self.base_url),
            _entity: PhantomData,
        }
    }
}

impl<E: Resource> ResourceClient<E> {
    pub fn new(http: Client, base_url: impl Into<Arc<str>>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            _entity: PhantomData,
        }
    }

    /// `/v1/<collection>/`
    pub fn collection_url(&self) -> String {
        format!("{}/v1/{}/", self.base_url, E::COLLECTION)
    }

    /// `/v1/<collection>/<id>`
    pub fn item_url(&self, id: &str) -> String {
        format!("{}/v1/{}/{}", self.base_url, E::COLLECTION, id)
    }

    /// Fetches the whole collection
    pub async fn list(&self) -> Result<Listing<E>, ClientError> {
        let url = self.collection_url();
        debug!("GET {url}");

        parse(self.http.get(&url)).await
    }

    /// Fetches one page of the collection; `count` still covers the full set
    pub async fn list_page(&self, page: Page) -> Result<Listing<E>, ClientError> {
        let url = self.collection_url();
        debug!("GET {url} page={} per_page={}", page.page, page.per_page);

        parse(self.http.get(&url).query(&page)).await
    }

    pub async fn get(&self, id: &str) -> Result<E, ClientError> {
        let url = self.item_url(id);
        debug!("GET {url}");

        parse(self.http.get(&url)).await
    }

    /// Creates an entity and returns it with its server-assigned id
    pub async fn create(&self, entity: &E) -> Result<E, ClientError> {
        let url = self.collection_url();
        debug!("POST {url}");

        parse(self.http.post(&url).json(entity)).await
    }

    /// Replaces or patches an entity; `body` may carry any subset of fields
    pub async fn update<B>(&self, id: &str, body: &B) -> Result<E, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.item_url(id);
        debug!("PUT {url}");

        parse(self.http.put(&url).json(body)).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let url = self.item_url(id);
        debug!("DELETE {url}");

        send(self.http.delete(&url)).await.map(|_| ())
    }
}

/// Sends a request, turning any non-2xx response into [`ClientError::Status`]
async fn send(request: RequestBuilder) -> Result<Response, ClientError> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let bytes = response.bytes().await?;
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    debug!("{status}: {body}");
    Err(ClientError::Status { status, body })
}

async fn parse<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    Ok(send(request).await?.json().await?)
}
