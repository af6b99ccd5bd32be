//! Utility helpers shared by the card components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep formatting, URL policy and browser lookups out of the
//! components so they can be tested without a reactive runtime.

pub mod image_url;
pub mod locale;
pub mod price;
