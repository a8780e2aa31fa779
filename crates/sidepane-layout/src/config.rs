//! Split-pane bound configuration.
//!
//! A [`SplitPaneConfig`] carries the caller-supplied constants for one split
//! layout: the right pane's starting width and the minimum widths reserved
//! for each side. Both console variants (the workspace split and the chat
//! window's own resize handle) are expressed as presets of this one type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Starting right pane width for the workspace split layout.
pub const DEFAULT_RIGHT_WIDTH: u32 = 400;

/// Minimum left pane width for the workspace split layout.
pub const DEFAULT_MIN_LEFT_WIDTH: u32 = 0;

/// Minimum right pane width for the workspace split layout.
pub const DEFAULT_MIN_RIGHT_WIDTH: u32 = 300;

/// Environment variable overriding [`SplitPaneConfig::default_right_width`].
pub const ENV_DEFAULT_RIGHT_WIDTH: &str = "SIDEPANE_DEFAULT_RIGHT_WIDTH";

/// Environment variable overriding [`SplitPaneConfig::min_left_width`].
pub const ENV_MIN_LEFT_WIDTH: &str = "SIDEPANE_MIN_LEFT_WIDTH";

/// Environment variable overriding [`SplitPaneConfig::min_right_width`].
pub const ENV_MIN_RIGHT_WIDTH: &str = "SIDEPANE_MIN_RIGHT_WIDTH";

/// Environment variable overriding [`SplitPaneConfig::max_right_width`].
///
/// `none` (case-insensitive) clears the cap.
pub const ENV_MAX_RIGHT_WIDTH: &str = "SIDEPANE_MAX_RIGHT_WIDTH";

/// Bound constants for one split layout, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitPaneConfig {
    /// Right pane width at mount time. Not validated against the bounds; it
    /// is clamped on the first resize.
    pub default_right_width: u32,
    /// Width always left to the main pane while resizing.
    pub min_left_width: u32,
    /// Floor for the right pane width. Wins over every other bound.
    pub min_right_width: u32,
    /// Optional absolute ceiling for the right pane width.
    #[serde(default)]
    pub max_right_width: Option<u32>,
}

impl SplitPaneConfig {
    #[must_use]
    pub const fn new(default_right_width: u32, min_left_width: u32, min_right_width: u32) -> Self {
        Self {
            default_right_width,
            min_left_width,
            min_right_width,
            max_right_width: None,
        }
    }

    /// Set an absolute ceiling for the right pane width.
    #[must_use]
    pub const fn with_max_right_width(mut self, max_right_width: u32) -> Self {
        self.max_right_width = Some(max_right_width);
        self
    }

    /// Workspace split layout: 400px side pane, no left reservation, 300px floor.
    #[must_use]
    pub const fn workspace() -> Self {
        Self::new(
            DEFAULT_RIGHT_WIDTH,
            DEFAULT_MIN_LEFT_WIDTH,
            DEFAULT_MIN_RIGHT_WIDTH,
        )
    }

    /// Home dashboard layout: narrow side pane and a 400px main pane reservation.
    #[must_use]
    pub const fn home() -> Self {
        Self::new(300, 400, 300)
    }

    /// Chat window resize handle: 400px to 1000px, measured from the window edge.
    #[must_use]
    pub const fn chat_window() -> Self {
        Self::new(400, 0, 400).with_max_right_width(1000)
    }

    /// Reject bound combinations that cannot describe any width range.
    pub fn validate(self) -> Result<(), SplitPaneConfigError> {
        match self.max_right_width {
            Some(0) => Err(SplitPaneConfigError::ZeroMaxRightWidth),
            Some(max) if max < self.min_right_width => {
                Err(SplitPaneConfigError::InvalidMaxRightWidth {
                    min_right_width: self.min_right_width,
                    max_right_width: max,
                })
            }
            _ => Ok(()),
        }
    }

    /// Validate and return `self`.
    pub fn validated(self) -> Result<Self, SplitPaneConfigError> {
        self.validate()?;
        Ok(self)
    }

    /// Width range the right pane may occupy inside a container.
    ///
    /// When the container is too narrow to honor both minimums the range
    /// collapses onto `min_right_width`, so the upper bound is never below
    /// the lower one.
    #[must_use]
    pub fn resize_bounds(self, container_width: u32) -> WidthBounds {
        let available = container_width.saturating_sub(self.min_left_width);
        let capped = match self.max_right_width {
            Some(cap) => available.min(cap),
            None => available,
        };
        WidthBounds {
            min: self.min_right_width,
            max: capped.max(self.min_right_width),
        }
    }

    /// Load config from environment variables over the workspace preset.
    ///
    /// Reads:
    /// - `SIDEPANE_DEFAULT_RIGHT_WIDTH`
    /// - `SIDEPANE_MIN_LEFT_WIDTH`
    /// - `SIDEPANE_MIN_RIGHT_WIDTH`
    /// - `SIDEPANE_MAX_RIGHT_WIDTH` (`none` clears the cap)
    ///
    /// Values that do not parse as pixel counts are ignored.
    pub fn from_env() -> Result<Self, SplitPaneConfigError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Load config using a custom environment lookup (for tests).
    pub fn from_env_with<F>(get_env: F) -> Result<Self, SplitPaneConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::workspace();

        if let Some(px) = env_px(&get_env, ENV_DEFAULT_RIGHT_WIDTH) {
            config.default_right_width = px;
        }
        if let Some(px) = env_px(&get_env, ENV_MIN_LEFT_WIDTH) {
            config.min_left_width = px;
        }
        if let Some(px) = env_px(&get_env, ENV_MIN_RIGHT_WIDTH) {
            config.min_right_width = px;
        }
        if let Some(value) = get_env(ENV_MAX_RIGHT_WIDTH) {
            let value = value.trim();
            if value.eq_ignore_ascii_case("none") {
                config.max_right_width = None;
            } else if let Ok(px) = value.parse::<u32>() {
                config.max_right_width = Some(px);
            }
        }

        config.validated()
    }
}

impl Default for SplitPaneConfig {
    fn default() -> Self {
        Self::workspace()
    }
}

fn env_px<F>(get_env: &F, key: &str) -> Option<u32>
where
    F: Fn(&str) -> Option<String>,
{
    get_env(key)?.trim().parse::<u32>().ok()
}

/// Inclusive right pane width range for one container measurement.
///
/// Always satisfies `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidthBounds {
    pub min: u32,
    pub max: u32,
}

impl WidthBounds {
    /// Clamp a requested width (possibly negative or oversized) into range.
    #[must_use]
    pub fn clamp(self, requested: i64) -> u32 {
        let clamped = requested.clamp(i64::from(self.min), i64::from(self.max));
        u32::try_from(clamped).unwrap_or(self.max)
    }

    #[must_use]
    pub const fn contains(self, width: u32) -> bool {
        self.min <= width && width <= self.max
    }

    /// True when the range has collapsed onto a single width.
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        self.min == self.max
    }
}

/// Configuration validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitPaneConfigError {
    InvalidMaxRightWidth {
        min_right_width: u32,
        max_right_width: u32,
    },
    ZeroMaxRightWidth,
}

impl fmt::Display for SplitPaneConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMaxRightWidth {
                min_right_width,
                max_right_width,
            } => write!(
                f,
                "max right width {max_right_width}px is below min right width {min_right_width}px"
            ),
            Self::ZeroMaxRightWidth => write!(f, "max right width must be non-zero"),
        }
    }
}

impl std::error::Error for SplitPaneConfigError {}
