pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod session;
pub mod store;
pub mod validation;

#[cfg(test)]
pub mod testing;

pub use domain::{Course, Review, User, UserReview};
pub use error::StoreError;
pub use session::Session;
pub use store::ReviewStore;
