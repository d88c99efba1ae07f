mod render;

use client::{Api, ClientConfig};
use log::info;
use models::{Booking, Customer, Kind, Room};
use render::{render_form, render_home, render_list};
use views::{
    FormController, History, HomeController, ListController, Navigator, Route, Screen,
    Transition,
};

/// Redirects followed before giving up, e.g. an unknown edit id falling back to its list
const MAX_HOPS: usize = 3;

/// Activates the list controller for `E` and renders its view-model
async fn show_list<E: Screen>(api: &Api) -> String {
    let mut controller = ListController::new(api.resource::<E>());
    render_list(E::COLLECTION, controller.activate().await)
}

/// Activates the form controller for `E` in create or edit mode and renders it
async fn show_form<E: Screen, N: Navigator>(api: &Api, id: Option<&str>, nav: &mut N) -> String {
    let mut controller = FormController::new(api.resource::<E>());
    controller.activate(id, nav).await;
    render_form(controller.view())
}

async fn show(api: &Api, route: &Route, nav: &mut History) -> String {
    let id = match route {
        Route::Update(_, id) => Some(id.as_str()),
        _ => None,
    };

    match route {
        Route::Home => {
            let mut controller = HomeController::new(api);
            render_home(controller.activate().await)
        }
        Route::List(Kind::Customers) => show_list::<Customer>(api).await,
        Route::List(Kind::Rooms) => show_list::<Room>(api).await,
        Route::List(Kind::Bookings) => show_list::<Booking>(api).await,
        Route::Create(kind) | Route::Update(kind, _) => match kind {
            Kind::Customers => show_form::<Customer, _>(api, id, nav).await,
            Kind::Rooms => show_form::<Room, _>(api, id, nav).await,
            Kind::Bookings => show_form::<Booking, _>(api, id, nav).await,
        },
    }
}

/// Renders the view at the given path, e.g. `hotels /rooms/r1/update`
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    let config = ClientConfig::from_env();
    info!("Using API at {}", config.base_url);

    let api = Api::new(&config);
    let mut history = History::new(Route::parse(&path));

    for _ in 0..MAX_HOPS {
        let route = history.current().clone();
        println!("{route}  [{}]", route.template());

        let output = show(&api, &route, &mut history).await;
        let transitions = history.take_transitions();
        if transitions.is_empty() {
            println!("{output}");
            return Ok(());
        }

        for transition in transitions {
            match transition {
                Transition::Go(next) => println!("-> {next}"),
                Transition::Reload => println!("-> reload"),
            }
        }
    }

    anyhow::bail!("too many redirects starting from {path}")
}
