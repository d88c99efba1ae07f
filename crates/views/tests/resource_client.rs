mod common;

use client::{ErrorKind, ResourceClient};
use common::TestServer;
use models::{Booking, Customer, Listing, Page, Resource, Room, User};
use serde_json::json;

async fn assert_create_then_list<E: Resource>(client: ResourceClient<E>, entity: E) {
    let before = client.list().await.unwrap();

    let created = client.create(&entity).await.unwrap();
    let id = created.id().expect("server assigns an id").to_string();

    let after = client.list().await.unwrap();
    assert_eq!(after.count, before.count + 1, "{}", E::COLLECTION);
    assert!(
        after.results.iter().any(|e| e.id() == Some(id.as_str())),
        "{} listing is missing {id}",
        E::COLLECTION
    );
}

#[tokio::test]
async fn test_create_then_list_for_every_kind() {
    let server = TestServer::start().await.unwrap();
    let api = &server.api;

    assert_create_then_list(
        api.customers(),
        Customer {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ..Default::default()
        },
    )
    .await;
    assert_create_then_list(
        api.rooms(),
        Room {
            number: 12,
            ..Default::default()
        },
    )
    .await;
    assert_create_then_list(
        api.bookings(),
        Booking {
            room_number: Some(12),
            customer_id: "c1".to_string(),
            ..Default::default()
        },
    )
    .await;
    assert_create_then_list(
        api.users(),
        User {
            username: "frontdesk".to_string(),
            ..Default::default()
        },
    )
    .await;

    server.stop().await;
}

#[tokio::test]
async fn test_room_scenario() {
    let server = TestServer::start().await.unwrap();
    let rooms = server.api.rooms();

    let created = rooms
        .create(&Room {
            number: 101,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.number, 101);

    let listing = rooms.list().await.unwrap();
    assert_eq!(
        listing,
        Listing {
            results: vec![created],
            count: 1
        }
    );

    server.stop().await;
}

#[tokio::test]
async fn test_get_update_delete() {
    let server = TestServer::start().await.unwrap();
    let customers = server.api.customers();

    let created = customers
        .create(&Customer {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            phone_number: Some(5550100),
            ..Default::default()
        })
        .await
        .unwrap();
    let id = created.id.clone().unwrap();

    assert_eq!(customers.get(&id).await.unwrap(), created);

    let updated = customers
        .update(&id, &json!({"address": "Arlington"}))
        .await
        .unwrap();
    assert_eq!(updated.address, "Arlington");
    assert_eq!(updated.first_name, "Grace");

    customers.delete(&id).await.unwrap();
    let err = customers.get(&id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.payload()["code"], "not_found");

    server.stop().await;
}

#[tokio::test]
async fn test_paged_listing_counts_everything() {
    let server = TestServer::start().await.unwrap();
    let rooms = server.api.rooms();
    for number in 1..=5 {
        rooms
            .create(&Room {
                number,
                ..Default::default()
            })
            .await
            .unwrap();
    }

    let page = rooms
        .list_page(Page {
            page: 3,
            per_page: 2,
        })
        .await
        .unwrap();
    assert_eq!(page.count, 5);
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].number, 5);

    server.stop().await;
}
