//! # Elastic Client
//!
//! This crate provides an asynchronous client for the Elasticsearch REST API.
//! It includes the client itself, its configuration, and the error type shared
//! by all operations.
//!
//! Each client method is a thin mapping onto one Elasticsearch endpoint:
//! index CRUD, document CRUD, URI and request-body search, stats, bulk, and
//! cat APIs. Responses decode to `serde_json::Value`; failures carry the HTTP
//! status code returned by the server.

pub mod client;
pub mod config;
pub mod errors;

mod params;

pub use client::Client;
pub use config::ClientConfig;
pub use errors::ClientError;
