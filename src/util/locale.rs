//! Runtime locale lookup.
//!
//! Reads `navigator.language` in the browser. During SSR and in tests there
//! is no navigator, so the server-side default is returned.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

/// Locale assumed when the runtime does not report one.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Read the user agent's preferred locale, falling back to
/// [`DEFAULT_LOCALE`].
pub fn read_locale() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.navigator().language())
            .filter(|lang| !lang.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOCALE.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        DEFAULT_LOCALE.to_owned()
    }
}
