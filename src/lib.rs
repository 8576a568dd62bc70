pub mod api;
pub mod cli;
pub mod crypto;
pub mod form;
pub mod tasks;

pub use api::{AdminApi, HttpAdminApi};
