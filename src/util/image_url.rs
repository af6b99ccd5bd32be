//! Remote image URL validation and sanitization.
//!
//! Only images served from an allow-listed host are rendered directly; every
//! other URL is replaced by a placeholder. Validation fails closed: a policy
//! whose matchers could not be built rejects everything.

#[cfg(test)]
#[path = "image_url_test.rs"]
mod image_url_test;

use std::fmt::Write as _;

use regex::Regex;

use crate::config::ConfigError;

pub const DEFAULT_TRUSTED_HOSTS: &[&str] = &["res.cloudinary.com"];
pub const DEFAULT_MIN_URL_LEN: usize = 20;

/// A dot followed by an extension-like token, then a query or end of input.
const EXTENSION_PATTERN: &str = r"\.[a-zA-Z0-9]+(?:\?|$)";

/// Characters `encodeURI` leaves untouched besides ASCII alphanumerics.
const URI_SAFE_PUNCTUATION: &str = ";,/?:@&=+$-_.!~*'()#";

/// Allow-list driven image URL validator.
#[derive(Clone, Debug)]
pub struct ImageUrlPolicy {
    hosts: Vec<String>,
    min_len: usize,
    host_pattern: Option<Regex>,
    extension_pattern: Option<Regex>,
}

impl ImageUrlPolicy {
    /// Build a policy accepting `http(s)://` URLs that start with one of
    /// `hosts` and are longer than `min_len` UTF-16 code units.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoTrustedHosts`] when `hosts` is empty after
    /// trimming, or [`ConfigError::Pattern`] if a matcher fails to compile.
    pub fn new<I, S>(hosts: I, min_len: usize) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let hosts = hosts
            .into_iter()
            .map(|h| h.as_ref().trim().to_owned())
            .filter(|h| !h.is_empty())
            .collect::<Vec<_>>();
        if hosts.is_empty() {
            return Err(ConfigError::NoTrustedHosts);
        }

        let host_pattern = Regex::new(&host_pattern_source(&hosts))?;
        let extension_pattern = Regex::new(EXTENSION_PATTERN)?;
        Ok(Self {
            hosts,
            min_len,
            host_pattern: Some(host_pattern),
            extension_pattern: Some(extension_pattern),
        })
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Whether `raw` may be rendered as a remote image.
    ///
    /// The input is trimmed first. It must start with a trusted host prefix,
    /// carry an extension-like suffix before an optional query string, and be
    /// longer than the minimum length, counted in UTF-16 code units.
    pub fn is_valid(&self, raw: Option<&str>) -> bool {
        let Some(raw) = raw else {
            return false;
        };
        let (Some(host), Some(extension)) = (&self.host_pattern, &self.extension_pattern) else {
            return false;
        };

        let candidate = raw.trim();
        host.is_match(candidate)
            && extension.is_match(candidate)
            && candidate.encode_utf16().count() > self.min_len
    }
}

impl Default for ImageUrlPolicy {
    fn default() -> Self {
        let hosts = DEFAULT_TRUSTED_HOSTS
            .iter()
            .map(|h| (*h).to_owned())
            .collect::<Vec<_>>();
        Self {
            host_pattern: Regex::new(&host_pattern_source(&hosts)).ok(),
            extension_pattern: Regex::new(EXTENSION_PATTERN).ok(),
            hosts,
            min_len: DEFAULT_MIN_URL_LEN,
        }
    }
}

impl PartialEq for ImageUrlPolicy {
    fn eq(&self, other: &Self) -> bool {
        self.hosts == other.hosts && self.min_len == other.min_len
    }
}

fn host_pattern_source(hosts: &[String]) -> String {
    let alternatives = hosts
        .iter()
        .map(|h| regex::escape(h))
        .collect::<Vec<_>>()
        .join("|");
    format!("(?i)^https?://(?:{alternatives})")
}

/// Clean a URL for use as an attribute value.
///
/// Trims whitespace, drops trailing commas, then percent-encodes the way
/// `encodeURI` does. Absent input yields an empty string. A clean URL passes
/// through unchanged; an already percent-encoded one does not, since `%`
/// itself is encoded.
pub fn sanitize_url(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    encode_uri(raw.trim().trim_end_matches(','))
}

fn encode_uri(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() || URI_SAFE_PUNCTUATION.contains(ch) {
            out.push(ch);
            continue;
        }
        let mut buf = [0u8; 4];
        for byte in ch.encode_utf8(&mut buf).bytes() {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}
