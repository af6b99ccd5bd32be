//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render course previews from catalog records, reading shared
//! `CardConfig` from Leptos context.

pub mod course_card;
pub mod course_grid;
