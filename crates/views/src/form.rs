use crate::{
    generation::{Generation, Ticket},
    navigation::{Navigator, Route, Screen},
    view_model::{FormViewModel, LoadState, ViewError},
};
use client::{ClientError, ResourceClient};
use log::{debug, info, warn};
use models::Booking;
use serde_json::json;
use std::future::Future;

/// Creates, edits and deletes one entity kind
///
/// Without an id the form starts blank (create mode); with one it is loaded
/// from the server (edit mode). Successful writes leave the form through the
/// [`Navigator`].
pub struct FormController<E: Screen> {
    client: ResourceClient<E>,
    generation: Generation,
    view: FormViewModel<E>,
}

impl<E: Screen> FormController<E> {
    pub fn new(client: ResourceClient<E>) -> Self {
        Self {
            client,
            generation: Generation::default(),
            view: FormViewModel::default(),
        }
    }

    /// The list view forms return to
    pub fn parent() -> Route {
        Route::List(E::KIND)
    }

    pub fn view(&self) -> &FormViewModel<E> {
        &self.view
    }

    /// The bound form fields
    pub fn form_mut(&mut self) -> &mut E {
        &mut self.view.form
    }

    /// Enters create mode for `None`, edit mode for `Some(id)`
    ///
    /// A failed edit load, including an unknown id, navigates back to the list
    /// without showing an error.
    pub async fn activate<N: Navigator>(&mut self, id: Option<&str>, nav: &mut N) {
        match id {
            None => {
                self.generation.next();
                self.view = FormViewModel::blank();
            }
            Some(id) => {
                let ticket = self.begin_edit();
                let result = self.fetch(id).await;
                self.apply(ticket, result, nav);
            }
        }
    }

    /// Resets the form to `Loading` and supersedes any in-flight load
    pub fn begin_edit(&mut self) -> Ticket {
        self.view = FormViewModel {
            state: LoadState::Loading,
            ..Default::default()
        };
        self.generation.next()
    }

    pub fn fetch(&self, id: &str) -> impl Future<Output = Result<E, ClientError>> + use<E> {
        let client = self.client.clone();
        let id = id.to_string();

        async move { client.get(&id).await }
    }

    /// Writes an edit load if `ticket` is still current
    ///
    /// # Returns
    /// `false` when the result was stale and dropped
    pub fn apply<N: Navigator>(
        &mut self,
        ticket: Ticket,
        result: Result<E, ClientError>,
        nav: &mut N,
    ) -> bool {
        if !self.generation.is_current(ticket) {
            debug!("Discarding stale {} form load", E::KIND.singular());
            return false;
        }

        match result {
            Ok(entity) => {
                self.view.form = entity;
                self.view.state = LoadState::Loaded;
            }
            Err(e) => {
                debug!("Leaving {} form: {e}", E::KIND.singular());
                self.view.state = LoadState::Failed;
                nav.go(Self::parent());
            }
        }

        true
    }

    /// Updates when the form carries an id, creates otherwise
    ///
    /// On failure the raw server payload is kept on the view and the form stays open.
    pub async fn save<N: Navigator>(&mut self, nav: &mut N) {
        let missing = self.view.form.missing_fields();
        if !missing.is_empty() {
            self.view.error = Some(ViewError::Missing(missing));
            return;
        }

        let result = match self.view.form.id() {
            Some(id) => self.client.update(id, &self.view.form).await,
            None => self.client.create(&self.view.form).await,
        };

        match result {
            Ok(saved) => {
                info!(
                    "Saved {} {}",
                    E::KIND.singular(),
                    saved.id().unwrap_or_default()
                );
                self.view.form = saved;
                self.view.error = None;
                nav.go(Self::parent());
            }
            Err(e) => {
                warn!("Failed to save {}: {e}", E::KIND.singular());
                self.view.error = Some(ViewError::Payload(e.payload()));
            }
        }
    }

    /// Deletes `id`, then reloads the whole page
    ///
    /// Failures surface only the payload's `message`, unlike [`Self::save`].
    pub async fn delete<N: Navigator>(&mut self, id: &str, nav: &mut N) {
        let result = self.client.delete(id).await;
        self.finish_destructive(id, result, nav);
    }

    fn finish_destructive<N: Navigator>(
        &mut self,
        id: &str,
        result: Result<(), ClientError>,
        nav: &mut N,
    ) {
        match result {
            Ok(()) => {
                info!("Removed {} {id}", E::KIND.singular());
                nav.reload();
            }
            Err(e) => {
                warn!("Failed to remove {} {id}: {e}", E::KIND.singular());
                self.view.error = Some(ViewError::Message(e.message()));
            }
        }
    }
}

impl FormController<Booking> {
    /// Marks a booking inactive instead of deleting it, then reloads the whole page
    pub async fn cancel<N: Navigator>(&mut self, id: &str, nav: &mut N) {
        let result = self.client.update(id, &json!({"is_active": false})).await;
        self.finish_destructive(id, result.map(|_| ()), nav);
    }
}
