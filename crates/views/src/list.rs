use crate::{
    generation::{Generation, Ticket},
    view_model::{ListViewModel, ViewError},
};
use client::{ClientError, ResourceClient};
use log::{debug, warn};
use models::{Listing, Page, Resource};
use std::future::Future;

/// Lists one entity kind: `Idle -> Loading -> {Loaded | Failed}`
pub struct ListController<E: Resource> {
    client: ResourceClient<E>,
    page: Option<Page>,
    generation: Generation,
    view: ListViewModel<E>,
}

impl<E: Resource> ListController<E> {
    pub fn new(client: ResourceClient<E>) -> Self {
        Self {
            client,
            page: None,
            generation: Generation::default(),
            view: ListViewModel::default(),
        }
    }

    /// Requests a single page instead of the whole collection
    pub fn with_page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }

    pub fn view(&self) -> &ListViewModel<E> {
        &self.view
    }

    pub fn into_view(self) -> ListViewModel<E> {
        self.view
    }

    /// Resets the view-model to `Loading` and supersedes any in-flight activation
    pub fn begin(&mut self) -> Ticket {
        self.view = ListViewModel::loading();
        self.generation.next()
    }

    /// The list request, detached from the controller so it can be awaited anywhere
    pub fn fetch(&self) -> impl Future<Output = Result<Listing<E>, ClientError>> + use<E> {
        let client = self.client.clone();
        let page = self.page;

        async move {
            match page {
                Some(page) => client.list_page(page).await,
                None => client.list().await,
            }
        }
    }

    /// Writes `result` if `ticket` is still the latest activation
    ///
    /// # Returns
    /// `false` when the result was stale and dropped
    pub fn apply(&mut self, ticket: Ticket, result: Result<Listing<E>, ClientError>) -> bool {
        if !self.generation.is_current(ticket) {
            debug!("Discarding stale {} listing", E::COLLECTION);
            return false;
        }

        self.view.error = self.view.settle(result).map(|e| {
            warn!("Failed to load {}: {e}", E::COLLECTION);
            ViewError::Payload(e.payload())
        });

        true
    }

    /// Runs a full activation: reset, fetch, apply
    pub async fn activate(&mut self) -> &ListViewModel<E> {
        let ticket = self.begin();
        let result = self.fetch().await;
        self.apply(ticket, result);

        &self.view
    }
}
