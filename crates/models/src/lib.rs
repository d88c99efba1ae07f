pub mod booking;
pub mod customer;
pub mod listing;
pub mod numeric;
pub mod resource;
pub mod room;
pub mod user;

pub use booking::Booking;
pub use customer::Customer;
pub use listing::{Listing, Page};
pub use resource::{Field, Kind, Resource};
pub use room::Room;
pub use user::User;
