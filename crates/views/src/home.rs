use crate::{
    generation::{Generation, Ticket},
    view_model::{ListViewModel, LoadState, ViewError},
};
use client::{Api, ClientError, ResourceClient};
use log::{debug, warn};
use models::{Booking, Customer, Kind, Listing, Room};
use std::future::Future;

/// Dashboard state: three list sections loaded together
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeViewModel {
    pub bookings: ListViewModel<Booking>,
    pub rooms: ListViewModel<Room>,
    pub customers: ListViewModel<Customer>,
    pub state: LoadState,
    /// Never set by a load; sections that failed are listed in `failed` instead
    pub error: Option<ViewError>,
    /// Sections whose load failed and were left empty
    pub failed: Vec<Kind>,
}

/// The settled results of one dashboard load
#[derive(Debug)]
pub struct HomeLoad {
    pub bookings: Result<Listing<Booking>, ClientError>,
    pub rooms: Result<Listing<Room>, ClientError>,
    pub customers: Result<Listing<Customer>, ClientError>,
}

/// Loads bookings, rooms and customers concurrently
///
/// The load settles once all three requests have finished. Sections that
/// succeeded are kept even if a sibling failed; failed sections stay empty and
/// the page-level `error` is not set.
pub struct HomeController {
    bookings: ResourceClient<Booking>,
    rooms: ResourceClient<Room>,
    customers: ResourceClient<Customer>,
    generation: Generation,
    view: HomeViewModel,
}

impl HomeController {
    pub fn new(api: &Api) -> Self {
        Self {
            bookings: api.bookings(),
            rooms: api.rooms(),
            customers: api.customers(),
            generation: Generation::default(),
            view: HomeViewModel::default(),
        }
    }

    pub fn view(&self) -> &HomeViewModel {
        &self.view
    }

    pub fn into_view(self) -> HomeViewModel {
        self.view
    }

    pub fn begin(&mut self) -> Ticket {
        self.view = HomeViewModel {
            bookings: ListViewModel::loading(),
            rooms: ListViewModel::loading(),
            customers: ListViewModel::loading(),
            state: LoadState::Loading,
            ..Default::default()
        };
        self.generation.next()
    }

    /// Issues the three list calls together and waits for all of them
    pub fn fetch(&self) -> impl Future<Output = HomeLoad> + use<> {
        let bookings = self.bookings.clone();
        let rooms = self.rooms.clone();
        let customers = self.customers.clone();

        async move {
            let (bookings, rooms, customers) =
                futures::join!(bookings.list(), rooms.list(), customers.list());

            HomeLoad {
                bookings,
                rooms,
                customers,
            }
        }
    }

    /// Writes a settled load if `ticket` is still current
    ///
    /// # Returns
    /// `false` when the load was stale and dropped
    pub fn apply(&mut self, ticket: Ticket, load: HomeLoad) -> bool {
        if !self.generation.is_current(ticket) {
            debug!("Discarding stale dashboard load");
            return false;
        }

        let view = &mut self.view;
        let failures = [
            (Kind::Bookings, view.bookings.settle(load.bookings)),
            (Kind::Rooms, view.rooms.settle(load.rooms)),
            (Kind::Customers, view.customers.settle(load.customers)),
        ];

        for (kind, failure) in failures {
            if let Some(e) = failure {
                warn!("Dashboard section {kind} failed to load and is shown empty: {e}");
                view.failed.push(kind);
            }
        }

        view.state = LoadState::Loaded;
        true
    }

    pub async fn activate(&mut self) -> &HomeViewModel {
        let ticket = self.begin();
        let load = self.fetch().await;
        self.apply(ticket, load);

        &self.view
    }
}
