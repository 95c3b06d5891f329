//! Park explorer HTTP API
//!
//! Accounts, likes, reviews and visit history are stored in PostgreSQL;
//! profile pictures and gallery media go to S3 through the `media` crate.

pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod password;
pub mod repositories;
pub mod routes;
pub mod state;

pub use routes::{create_app, create_router};
pub use state::AppState;
