//! Core data types for the Missive assistant library.
//!
//! This crate provides the immutable value types shared by the generation
//! client and the response codec, plus configuration and tracing setup.

mod citation;
mod config;
mod mode;
mod model;
mod observability;
mod request;
mod response;

pub use citation::Citation;
pub use config::{ClientConfig, anonymous_user_id};
pub use mode::GenerationMode;
pub use model::{GenerationModel, ImageModel};
pub use observability::init_tracing;
pub use request::{AskRequest, ImageRequest};
pub use response::{EncodedResult, ImageResult, TextResult, now_epoch};
