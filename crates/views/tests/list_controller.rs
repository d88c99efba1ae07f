mod common;

use client::ResourceClient;
use common::TestServer;
use models::{Booking, Customer, Resource, Room, User};
use serde_json::json;
use views::{ListController, LoadState, ViewError};

async fn assert_loads_empty<E: Resource>(client: ResourceClient<E>) {
    let mut controller = ListController::new(client);
    let view = controller.activate().await;

    assert!(view.items.is_empty(), "{}", E::COLLECTION);
    assert_eq!(view.count, 0);
    assert_eq!(view.state, LoadState::Loaded);
    assert_eq!(view.error, None);
}

#[tokio::test]
async fn test_empty_collections_load() {
    let server = TestServer::start().await.unwrap();

    assert_loads_empty(server.api.customers()).await;
    assert_loads_empty(server.api.rooms()).await;
    assert_loads_empty(server.api.bookings()).await;
    assert_loads_empty::<User>(server.api.users()).await;

    server.stop().await;
}

#[tokio::test]
async fn test_loaded_items_and_count() {
    let server = TestServer::start().await.unwrap();
    let customers = server.api.customers();
    for name in ["Ada", "Grace", "Barbara"] {
        customers
            .create(&Customer {
                first_name: name.to_string(),
                last_name: "Test".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    let mut controller = ListController::new(customers);
    let view = controller.activate().await;

    assert_eq!(view.count, 3);
    let names: Vec<_> = view.items.iter().map(|c| c.first_name.as_str()).collect();
    assert_eq!(names, ["Ada", "Grace", "Barbara"]);

    server.stop().await;
}

#[tokio::test]
async fn test_unset_fields_do_not_fail_the_list() {
    let server = TestServer::start().await.unwrap();
    let store = server.store();
    store
        .insert(
            "customers",
            json!({"first_name": "Ada", "last_name": "Lovelace", "address": null}),
        )
        .unwrap();
    store
        .insert(
            "customers",
            json!({"first_name": "Alan", "last_name": null, "phone_number": 5551234.0}),
        )
        .unwrap();

    let mut controller = ListController::new(server.api.customers());
    let view = controller.activate().await;

    assert_eq!(view.state, LoadState::Loaded);
    assert_eq!(view.count, 2);
    assert_eq!(view.items[0].address, "");
    assert_eq!(view.items[1].phone_number, None);

    server.stop().await;
}

#[tokio::test]
async fn test_failed_load_shows_payload_and_no_items() {
    // Nothing listens on the discard port, so the request fails in transport
    let api = client::Api::new(&client::ClientConfig::new("http://127.0.0.1:9"));
    let mut controller = ListController::<Booking>::new(api.bookings());
    let view = controller.activate().await;

    assert_eq!(view.state, LoadState::Failed);
    assert!(view.items.is_empty());
    assert!(matches!(view.error, Some(ViewError::Payload(_))));
}

#[tokio::test]
async fn test_superseded_activation_is_discarded() {
    let server = TestServer::start().await.unwrap();
    let rooms = server.api.rooms();
    let mut controller = ListController::new(rooms.clone());

    let first = controller.begin();
    let first_result = controller.fetch().await;

    rooms
        .create(&Room {
            number: 7,
            ..Default::default()
        })
        .await
        .unwrap();

    let second = controller.begin();
    let second_result = controller.fetch().await;

    // The newer response lands first; the older one must not overwrite it
    assert!(controller.apply(second, second_result));
    assert!(!controller.apply(first, first_result));

    assert_eq!(controller.view().count, 1);
    assert_eq!(controller.view().items[0].number, 7);

    server.stop().await;
}
