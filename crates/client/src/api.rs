use crate::{config::ClientConfig, resource::ResourceClient};
use models::{Booking, Customer, Resource, Room, User};
use reqwest::Client;
use std::sync::Arc;

/// Resource factory sharing one HTTP connection pool across entity kinds
#[derive(Clone)]
pub struct Api {
    http: Client,
    base_url: Arc<str>,
}

impl Api {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Uses a preconfigured [`Client`], e.g. one with a proxy or custom headers
    pub fn with_client(http: Client, config: &ClientConfig) -> Self {
        Self {
            http,
            base_url: Arc::from(config.base_url.as_str()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn resource<E: Resource>(&self) -> ResourceClient<E> {
        ResourceClient::new(self.http.clone(), Arc::clone(&self.base_url))
    }

    pub fn customers(&self) -> ResourceClient<Customer> {
        self.resource()
    }

    pub fn rooms(&self) -> ResourceClient<Room> {
        self.resource()
    }

    pub fn bookings(&self) -> ResourceClient<Booking> {
        self.resource()
    }

    pub fn users(&self) -> ResourceClient<User> {
        self.resource()
    }
}
