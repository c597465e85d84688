//! todolist_client - CLI client for the todolist API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::TodolistClient;
pub use error::{ClientError, Result};
