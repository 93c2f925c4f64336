//! API access for the browser

pub mod client;

pub use client::*;
