//! Pane configuration.

use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::error::Result;

/// How long a freshly created scrollbar stays visible when nothing else happens.
pub const DEFAULT_INITIAL_DISPLAY: Duration = Duration::from_millis(3000);

/// Initial visibility of a freshly created scrollbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialDisplay {
    /// Stay hidden until the user interacts with the pane.
    Suppressed,
    /// Show at once; with auto-hide on, hide again after the delay.
    After(Duration),
}

impl Default for InitialDisplay {
    fn default() -> Self {
        Self::After(DEFAULT_INITIAL_DISPLAY)
    }
}

impl From<Duration> for InitialDisplay {
    fn from(delay: Duration) -> Self {
        Self::After(delay)
    }
}

impl InitialDisplay {
    /// Interpret a millisecond count. Zero and non-finite values mean the
    /// default delay, negative values fire immediately.
    pub fn from_millis(millis: f64) -> Self {
        let millis = millis.trunc();
        if !millis.is_finite() || millis == 0.0 {
            Self::default()
        } else {
            Self::After(Duration::from_millis(millis.max(0.0) as u64))
        }
    }

    /// Interpret a string the way integer prefix parsing does: leading
    /// whitespace, an optional sign, then digits. No digits means the default.
    pub fn from_text(text: &str) -> Self {
        let text = text.trim_start();
        let (negative, digits) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());

        match digits[..end].parse::<f64>() {
            Ok(value) if negative => Self::from_millis(-value),
            Ok(value) => Self::from_millis(value),
            Err(_) => Self::default(),
        }
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, Self::Suppressed)
    }
}

impl<'de> Deserialize<'de> for InitialDisplay {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Millis(f64),
            Text(String),
        }

        // `null` counts as any other non-false value
        Ok(match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Flag(false)) => Self::Suppressed,
            Some(Raw::Flag(true)) | None => Self::default(),
            Some(Raw::Millis(millis)) => Self::from_millis(millis),
            Some(Raw::Text(text)) => Self::from_text(&text),
        })
    }
}

/// Options read once when a pane is created.
///
/// Field names deserialize from the camelCase keys (`autoHide`,
/// `forceHorizontal`, `initialDisplay`, ...), so a host can keep them in JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Horizontal scrollbar enabled.
    pub x: bool,
    /// Vertical scrollbar enabled.
    pub y: bool,
    /// Enable the horizontal scrollbar even when `x` is false.
    pub force_horizontal: bool,
    /// Enable the vertical scrollbar even when `y` is false.
    pub force_vertical: bool,
    /// Hide scrollbars after inactivity.
    pub auto_hide: bool,
    /// Pixels kept free at both ends of the track.
    pub padding: f64,
    pub initial_display: InitialDisplay,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            x: true,
            y: true,
            force_horizontal: false,
            force_vertical: false,
            auto_hide: true,
            padding: 2.0,
            initial_display: InitialDisplay::default(),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON object. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn x(mut self, enabled: bool) -> Self {
        self.x = enabled;
        self
    }

    pub fn y(mut self, enabled: bool) -> Self {
        self.y = enabled;
        self
    }

    pub fn force_horizontal(mut self, force: bool) -> Self {
        self.force_horizontal = force;
        self
    }

    pub fn force_vertical(mut self, force: bool) -> Self {
        self.force_vertical = force;
        self
    }

    pub fn auto_hide(mut self, enabled: bool) -> Self {
        self.auto_hide = enabled;
        self
    }

    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn initial_display(mut self, display: impl Into<InitialDisplay>) -> Self {
        self.initial_display = display.into();
        self
    }

    /// Whether the pane manages a horizontal scrollbar.
    pub fn horizontal_enabled(&self) -> bool {
        self.x || self.force_horizontal
    }

    /// Whether the pane manages a vertical scrollbar.
    pub fn vertical_enabled(&self) -> bool {
        self.y || self.force_vertical
    }
}
