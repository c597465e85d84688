//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of the repository trait
//! that stores all items in a HashMap wrapped in `Arc<RwLock<_>>`. This is
//! useful for testing and development scenarios where persistence is not
//! required.

mod repository;

pub use repository::InMemoryRepository;
