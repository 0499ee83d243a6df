// src/fetch/mod.rs

pub mod client;
pub mod request;

pub use client::{build_client, fetch_lines, split_lines};
pub use request::{ExtractionRequest, EVENT_FIELD};
