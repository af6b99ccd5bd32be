//! # course-card
//!
//! Leptos components for previewing catalog courses: instructor avatar,
//! thumbnail, title and description, rating, and a locale-aware price, with
//! placeholder images when a remote image is untrusted or fails to load.
//!
//! Host applications provide a [`config::CardConfig`] through context and
//! render [`components::course_card::CourseCard`] or
//! [`components::course_grid::CourseGrid`].

pub mod components;
pub mod config;
pub mod state;
pub mod types;
pub mod util;

/// Install the browser panic hook and console logger at `level`.
///
/// Safe to call more than once; later logger installs are ignored.
#[cfg(feature = "hydrate")]
pub fn init_diagnostics(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_ok() {
        log::debug!("course-card diagnostics initialized");
    }
}

/// JS entry point for [`init_diagnostics`] at `info` level.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = initCourseCardDiagnostics)]
pub fn init_default_diagnostics() {
    init_diagnostics(log::Level::Info);
}
