#[cfg(test)]
#[path = "image_fallback_test.rs"]
mod image_fallback_test;

use crate::util::image_url::{ImageUrlPolicy, sanitize_url};

/// The two image slots on a course card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSlot {
    Avatar,
    Thumbnail,
}

impl ImageSlot {
    pub fn label(self) -> &'static str {
        match self {
            Self::Avatar => "avatar",
            Self::Thumbnail => "thumbnail",
        }
    }
}

/// One-shot "failed to load" flag for a single image slot.
///
/// Starts clear, trips on the first load error and stays tripped for the
/// life of the card instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadLatch {
    failed: bool,
}

impl LoadLatch {
    pub fn is_failed(self) -> bool {
        self.failed
    }

    /// Record a load failure. Returns `true` only on the transition.
    pub fn trip(&mut self) -> bool {
        let transitioned = !self.failed;
        self.failed = true;
        transitioned
    }
}

/// Placeholder paths for one slot, split by why the remote image is unusable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotPlaceholders {
    /// Shown when the URL is absent or rejected by the policy.
    pub invalid: String,
    /// Shown once the browser reported a load error.
    pub failed: String,
}

impl SlotPlaceholders {
    /// Use one path for both cases.
    pub fn same(path: &str) -> Self {
        Self {
            invalid: path.to_owned(),
            failed: path.to_owned(),
        }
    }
}

/// Resolved source candidates for one image slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSource {
    remote: Option<String>,
    placeholders: SlotPlaceholders,
}

impl ImageSource {
    /// Validate and sanitize `raw` once; the final `src` then depends only on
    /// the slot's latch.
    pub fn resolve(raw: Option<&str>, policy: &ImageUrlPolicy, placeholders: SlotPlaceholders) -> Self {
        let remote = policy
            .is_valid(raw)
            .then(|| sanitize_url(raw))
            .filter(|url| !url.is_empty());
        Self { remote, placeholders }
    }

    /// The sanitized remote URL, when the raw URL passed validation.
    pub fn remote(&self) -> Option<&str> {
        self.remote.as_deref()
    }

    /// The `src` attribute to render given the slot's latch.
    pub fn src(&self, latch: LoadLatch) -> String {
        if latch.is_failed() {
            return self.placeholders.failed.clone();
        }
        match &self.remote {
            Some(url) => url.clone(),
            None => self.placeholders.invalid.clone(),
        }
    }

    /// Whether `src` would currently point at the remote image.
    pub fn is_remote(&self, latch: LoadLatch) -> bool {
        !latch.is_failed() && self.remote.is_some()
    }
}
