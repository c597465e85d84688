//! Core domain types and storage contracts for the todolist project.
//!
//! This crate is pure data and pure functions: the `TodoItem` type, its
//! request payloads and validation rules, the repository traits the server
//! implements, and the error taxonomy shared between server and client.
//! No I/O happens here.

pub mod serde;
pub mod storage;
pub mod todo;
