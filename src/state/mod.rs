//! Per-card client-side state.
//!
//! DESIGN
//! ======
//! A card owns two independent load latches, one per image slot. They live in
//! `RwSignal`s created by the card itself, so a remount (new course identity)
//! starts them clear again.

pub mod image_fallback;
