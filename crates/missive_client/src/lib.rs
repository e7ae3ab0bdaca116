//! Generation backend client for the Missive assistant library.
//!
//! One network round trip per call, a three-way error taxonomy, and a
//! single-slot cancellable handle for last-request-wins sessions.

mod client;
mod slot;

pub use client::AssistantClient;
pub use slot::GenerationSlot;
