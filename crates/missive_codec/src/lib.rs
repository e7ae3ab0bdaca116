//! Wire URL codec for Missive generation results.
//!
//! Deterministic mapping between a generation result and a compact URL
//! suitable for attaching to an outgoing platform message, plus the card
//! assembly for the message itself.

mod card;
mod wire;

pub use card::MessageCard;
pub use wire::{PLACEHOLDER_IMAGE_URL, WIRE_BASE, decode, encode, encode_image, encode_text};
