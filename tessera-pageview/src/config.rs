//! Construction-time configuration for a paged scroll view.
//!
//! ## Usage
//!
//! Build a [`PageViewConfig`] with its setters and hand it to
//! [`PagedScrollController::try_with_config`](crate::PagedScrollController::try_with_config).

use derive_setters::Setters;
use thiserror::Error;

use crate::{
    animator::DEFAULT_GLIDE_DURATION, gesture::DEFAULT_CHILD_FOCUS_CANCEL_OFFSET,
    orientation::Orientation,
};

/// Errors reported when validating a [`PageViewConfig`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The custom scroll threshold must be strictly positive.
    #[error("scroll threshold must be positive, got {0}")]
    InvalidScrollThreshold(f32),
    /// At least one page has to be visible.
    #[error("pages shown must be at least 1")]
    ZeroPagesShown,
    /// Glides need a positive duration.
    #[error("glide duration must be positive, got {0}")]
    InvalidGlideDuration(f32),
    /// The child focus cancel distance can't be negative.
    #[error("child focus cancel offset must not be negative, got {0}")]
    NegativeFocusCancelOffset(f32),
}

/// Configuration arguments for a paged scroll view.
#[derive(Clone, Debug, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageViewConfig {
    /// Axis pages are arranged along.
    pub orientation: Orientation,
    /// Number of pages visible at once.
    pub pages_shown: usize,
    /// Release distance that commits to a neighbouring page.
    ///
    /// `None` uses half a page.
    #[setters(strip_option)]
    pub scroll_threshold: Option<f32>,
    /// Distance a child-initiated touch travels before the pager takes over.
    pub child_focus_cancel_offset: f32,
    /// Seconds an auto-scroll glide takes.
    pub glide_duration: f32,
}

impl Default for PageViewConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            pages_shown: 1,
            scroll_threshold: None,
            child_focus_cancel_offset: DEFAULT_CHILD_FOCUS_CANCEL_OFFSET,
            glide_duration: DEFAULT_GLIDE_DURATION,
        }
    }
}

impl PageViewConfig {
    /// Checks every field, reporting the first invalid one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pages_shown == 0 {
            return Err(ConfigError::ZeroPagesShown);
        }
        if let Some(threshold) = self.scroll_threshold
            && !is_positive(threshold)
        {
            return Err(ConfigError::InvalidScrollThreshold(threshold));
        }
        if !is_positive(self.glide_duration) {
            return Err(ConfigError::InvalidGlideDuration(self.glide_duration));
        }
        if self.child_focus_cancel_offset.is_nan() || self.child_focus_cancel_offset < 0.0 {
            return Err(ConfigError::NegativeFocusCancelOffset(
                self.child_focus_cancel_offset,
            ));
        }
        Ok(())
    }
}

/// `false` for zero, negatives and NaN.
pub(crate) fn is_positive(value: f32) -> bool {
    value > 0.0
}
