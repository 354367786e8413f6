//! Error types for the Elasticsearch client.

mod client_error;

pub use client_error::ClientError;
