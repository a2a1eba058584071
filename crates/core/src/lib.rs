//! Domain types and rules for the Folio portfolio backend.
//!
//! This crate has no I/O. The `db` crate enforces the rules defined here
//! at the store boundary and the `api` crate reads the admin metadata to
//! build its routes and list views.

pub mod admin;
pub mod error;
pub mod pagination;
pub mod project;
pub mod types;
