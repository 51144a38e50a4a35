//! Access to the raw dataset, either on disk or behind a URL.

pub mod client;

pub use client::{read_source, DataSource};
