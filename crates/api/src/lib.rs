//! Folio API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! serializer) so integration tests and the binaries can share them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod serializer;
pub mod state;
