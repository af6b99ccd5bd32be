//! Card configuration: locale, image URL policy, placeholder assets and
//! diagnostics.
//!
//! DESIGN
//! ======
//! Everything the card would otherwise read from ambient runtime state is
//! collected here and handed to components through Leptos context. The
//! browser build fills the locale from `navigator.language`; the server can
//! load the same settings from `COURSE_CARD_*` environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::{provide_context, use_context};

use crate::state::image_fallback::SlotPlaceholders;
use crate::util::image_url::{DEFAULT_MIN_URL_LEN, DEFAULT_TRUSTED_HOSTS, ImageUrlPolicy};
use crate::util::locale::{DEFAULT_LOCALE, read_locale};
use crate::util::price::Currency;

pub const AVATAR_INVALID_PLACEHOLDER: &str = "/assets/images/teacher.jpg";
pub const AVATAR_FAILED_PLACEHOLDER: &str = "/assets/images/placeholder-teacher.jpg";
pub const THUMBNAIL_PLACEHOLDER: &str = "/assets/images/placeholder-course.jpg";
pub const STAR_ICON: &str = "/assets/home/star.svg";
pub const DEFAULT_REVIEW_LABEL: &str = "200 Review rating";

const ENV_LOCALE: &str = "COURSE_CARD_LOCALE";
const ENV_TRUSTED_HOSTS: &str = "COURSE_CARD_TRUSTED_HOSTS";
const ENV_MIN_URL_LEN: &str = "COURSE_CARD_MIN_URL_LEN";
const ENV_TRACE_IMAGE_URLS: &str = "COURSE_CARD_TRACE_IMAGE_URLS";
const ENV_REVIEW_LABEL: &str = "COURSE_CARD_REVIEW_LABEL";

/// Errors raised while building a [`CardConfig`] or [`ImageUrlPolicy`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The trusted host allow-list is empty.
    #[error("at least one trusted image host is required")]
    NoTrustedHosts,

    /// A URL matcher failed to compile.
    #[error("image url pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),

    /// A configuration value could not be parsed.
    #[error("invalid value for {key}: {value:?}")]
    Parse { key: String, value: String },
}

/// Static fallback images used by the card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceholderAssets {
    pub avatar: SlotPlaceholders,
    pub thumbnail: SlotPlaceholders,
    pub star_icon: String,
}

impl Default for PlaceholderAssets {
    fn default() -> Self {
        Self {
            avatar: SlotPlaceholders {
                invalid: AVATAR_INVALID_PLACEHOLDER.to_owned(),
                failed: AVATAR_FAILED_PLACEHOLDER.to_owned(),
            },
            thumbnail: SlotPlaceholders::same(THUMBNAIL_PLACEHOLDER),
            star_icon: STAR_ICON.to_owned(),
        }
    }
}

/// Settings shared by every card rendered under one context.
#[derive(Clone, Debug, PartialEq)]
pub struct CardConfig {
    pub locale: String,
    pub currency: Currency,
    pub image_policy: ImageUrlPolicy,
    pub placeholders: PlaceholderAssets,
    /// Log the raw avatar and thumbnail URLs whenever a card renders.
    pub trace_image_urls: bool,
    /// Static label in the card footer; `None` hides it.
    pub review_label: Option<String>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self::for_locale(DEFAULT_LOCALE)
    }
}

impl CardConfig {
    /// Default settings with the currency derived from `locale`.
    pub fn for_locale(locale: impl Into<String>) -> Self {
        let locale = locale.into();
        Self {
            currency: Currency::from_locale(&locale),
            locale,
            image_policy: ImageUrlPolicy::default(),
            placeholders: PlaceholderAssets::default(),
            trace_image_urls: false,
            review_label: Some(DEFAULT_REVIEW_LABEL.to_owned()),
        }
    }

    /// Default settings for the user agent's locale.
    pub fn from_browser() -> Self {
        Self::for_locale(read_locale())
    }

    /// Build config from `COURSE_CARD_*` environment variables.
    ///
    /// # Errors
    ///
    /// See [`CardConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from a key lookup.
    ///
    /// Optional keys:
    /// - `COURSE_CARD_LOCALE`: default `en-US`
    /// - `COURSE_CARD_TRUSTED_HOSTS`: comma-separated, default `res.cloudinary.com`
    /// - `COURSE_CARD_MIN_URL_LEN`: default 20
    /// - `COURSE_CARD_TRACE_IMAGE_URLS`: `true`/`false`/`1`/`0`, default false
    /// - `COURSE_CARD_REVIEW_LABEL`: empty hides the label
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for unparseable numbers or booleans and
    /// [`ConfigError::NoTrustedHosts`] when the host list is blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let locale = non_blank(lookup(ENV_LOCALE)).unwrap_or_else(|| DEFAULT_LOCALE.to_owned());
        let mut config = Self::for_locale(locale);

        let min_len = match non_blank(lookup(ENV_MIN_URL_LEN)) {
            Some(raw) => raw.parse::<usize>().map_err(|_| parse_error(ENV_MIN_URL_LEN, &raw))?,
            None => DEFAULT_MIN_URL_LEN,
        };
        config.image_policy = match lookup(ENV_TRUSTED_HOSTS) {
            Some(raw) => ImageUrlPolicy::new(raw.split(','), min_len)?,
            None => ImageUrlPolicy::new(DEFAULT_TRUSTED_HOSTS.iter(), min_len)?,
        };

        if let Some(raw) = non_blank(lookup(ENV_TRACE_IMAGE_URLS)) {
            config.trace_image_urls = parse_bool(&raw).ok_or_else(|| parse_error(ENV_TRACE_IMAGE_URLS, &raw))?;
        }
        if let Some(raw) = lookup(ENV_REVIEW_LABEL) {
            config.review_label = non_blank(Some(raw));
        }

        Ok(config)
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_error(key: &str, value: &str) -> ConfigError {
    ConfigError::Parse {
        key: key.to_owned(),
        value: value.to_owned(),
    }
}

/// Make `config` available to every card below the current owner.
pub fn provide_card_config(config: CardConfig) {
    provide_context(config);
}

/// Config provided by an ancestor, or the defaults when none was provided.
pub fn use_card_config() -> CardConfig {
    use_context::<CardConfig>().unwrap_or_default()
}
