pub mod api;
pub mod config;
pub mod error;
pub mod resource;

pub use api::Api;
pub use config::ClientConfig;
pub use error::{ClientError, ErrorKind};
pub use resource::ResourceClient;
