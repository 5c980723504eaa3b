//! Conversation session management.
//!
//! A `Session` owns the ordered transcript for one conversation and
//! mediates calls to the completion service.

mod chat;
mod manager;

#[cfg(test)]
mod tests;

pub use manager::Session;
