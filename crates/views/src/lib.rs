//! Controllers binding REST resources to view-models.
//!
//! A controller owns exactly one view-model. Activation resets it, issues the
//! resource calls and writes the results back; user actions go out through the
//! same resource client and end in a [`Navigator`] transition.

pub mod form;
pub mod generation;
pub mod home;
pub mod list;
pub mod navigation;
pub mod view_model;

pub use form::FormController;
pub use generation::{Generation, Ticket};
pub use home::{HomeController, HomeViewModel};
pub use list::ListController;
pub use navigation::{History, Navigator, Route, Screen, Transition};
pub use view_model::{FormViewModel, ListViewModel, LoadState, ViewError};
