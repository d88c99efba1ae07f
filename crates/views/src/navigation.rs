use models::{Booking, Customer, Kind, Resource, Room};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Where templates are served from
const PARTIALS: &str = "/static/partials";

/// A navigable view state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    List(Kind),
    Create(Kind),
    Update(Kind, String),
}

impl Route {
    /// Maps a URL path (optionally hash-prefixed) to a route; unmatched paths go home
    pub fn parse(path: &str) -> Route {
        let path = path.trim().trim_start_matches('#');
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let Some(kind) = segments.first().and_then(|s| Kind::from_str(s).ok()) else {
            return Route::Home;
        };

        match segments.as_slice() {
            [_] => Route::List(kind),
            [_, "create"] => Route::Create(kind),
            [_, id, "update"] => Route::Update(kind, id.to_string()),
            _ => Route::Home,
        }
    }

    /// One level up: forms return to their list, lists return home
    pub fn parent(&self) -> Route {
        match self {
            Route::Home | Route::List(_) => Route::Home,
            Route::Create(kind) | Route::Update(kind, _) => Route::List(*kind),
        }
    }

    pub fn kind(&self) -> Option<Kind> {
        match self {
            Route::Home => None,
            Route::List(kind) | Route::Create(kind) | Route::Update(kind, _) => Some(*kind),
        }
    }

    /// Template rendering this route
    pub fn template(&self) -> String {
        match self {
            Route::Home => format!("{PARTIALS}/home.html"),
            Route::List(kind) => format!("{PARTIALS}/{}.html", kind.as_str()),
            Route::Create(kind) | Route::Update(kind, _) => {
                format!("{PARTIALS}/forms/{}.html", kind.singular())
            }
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Route::Home => write!(f, "/"),
            Route::List(kind) => write!(f, "/{kind}"),
            Route::Create(kind) => write!(f, "/{kind}/create"),
            Route::Update(kind, id) => write!(f, "/{kind}/{id}/update"),
        }
    }
}

/// An entity kind with list and form screens
pub trait Screen: Resource {
    const KIND: Kind;
}

impl Screen for Customer {
    const KIND: Kind = Kind::Customers;
}

impl Screen for Room {
    const KIND: Kind = Kind::Rooms;
}

impl Screen for Booking {
    const KIND: Kind = Kind::Bookings;
}

/// The shell's side of a controller: moving between views
pub trait Navigator {
    /// Soft navigation to another view
    fn go(&mut self, route: Route);

    /// Discards all client-side state and loads the current view from scratch
    fn reload(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Go(Route),
    Reload,
}

/// A [`Navigator`] that records every transition
#[derive(Debug, Default)]
pub struct History {
    current: Route,
    transitions: Vec<Transition>,
}

impl History {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            transitions: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Drains the transitions recorded since the last call
    pub fn take_transitions(&mut self) -> Vec<Transition> {
        std::mem::take(&mut self.transitions)
    }
}

impl Navigator for History {
    fn go(&mut self, route: Route) {
        self.current = route.clone();
        self.transitions.push(Transition::Go(route));
    }

    fn reload(&mut self) {
        self.transitions.push(Transition::Reload);
    }
}
