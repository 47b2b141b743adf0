//! Compositing settings and their label enums.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::StudioError;

/// Shortest per-image duration.
pub const MIN_DURATION_SECS: u32 = 1;
/// Longest per-image duration.
pub const MAX_DURATION_SECS: u32 = 10;

/// Closed set of lowercase labels with `ALL`, `as_str`, `FromStr` and `Display`.
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant ),+
        }

        impl $name {
            /// Every variant, in menu order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Lowercase label, as accepted by `FromStr`.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl FromStr for $name {
            type Err = StudioError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim().to_ascii_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| StudioError::validation(format!("unknown {} '{s}'", $kind)))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

label_enum! {
    /// Background treatment for every composited frame.
    Theme, "theme" {
        /// Hue-cycling gradient.
        #[default]
        Dynamic => "dynamic",
        /// Dark gradient with letterbox bars.
        Cinematic => "cinematic",
        /// Near-white gradient.
        Minimal => "minimal",
        /// Blue to green gradient.
        Sports => "sports",
        /// Brown to navy gradient.
        Elegant => "elegant",
    }
}

label_enum! {
    /// Entry/exit policy. `Wipe` and `Dissolve` draw exactly like `Fade`.
    Transition, "transition" {
        /// Opacity ramp only.
        #[default]
        Fade => "fade",
        /// Horizontal slide in and out.
        Slide => "slide",
        /// Scale in and out around the center.
        Zoom => "zoom",
        /// Drawn as `Fade`.
        Wipe => "wipe",
        /// Drawn as `Fade`.
        Dissolve => "dissolve",
    }
}

label_enum! {
    /// Output class label. The compositing surface does not depend on it.
    Resolution, "resolution" {
        /// 1920x1080.
        Hd1080 => "1080p",
        /// 3840x2160.
        #[default]
        Uhd4k => "4k",
        /// 7680x4320.
        Uhd8k => "8k",
    }
}

label_enum! {
    /// Soundtrack label; no audio is produced.
    MusicStyle, "music style" {
        /// `energetic` soundtrack label.
        #[default]
        Energetic => "energetic",
        /// `dramatic` soundtrack label.
        Dramatic => "dramatic",
        /// `ambient` soundtrack label.
        Ambient => "ambient",
        /// `epic` soundtrack label.
        Epic => "epic",
        /// `upbeat` soundtrack label.
        Upbeat => "upbeat",
    }
}

impl Transition {
    /// Uppercase label for the summary subtitle.
    pub fn label(self) -> String {
        self.as_str().to_ascii_uppercase()
    }
}

impl Resolution {
    /// Uppercase label for the summary subtitle.
    pub fn label(self) -> String {
        self.as_str().to_ascii_uppercase()
    }
}

/// User-chosen compositing settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSettings {
    /// Background treatment.
    pub theme: Theme,
    /// Entry and exit motion.
    pub transition: Transition,
    /// Seconds per image, kept within `1..=10`.
    #[serde(deserialize_with = "deserialize_duration")]
    pub duration: u32,
    /// Reported in the summary only.
    pub resolution: Resolution,
    /// Label only.
    pub music: MusicStyle,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dynamic,
            transition: Transition::Fade,
            duration: 3,
            resolution: Resolution::Uhd4k,
            music: MusicStyle::Energetic,
        }
    }
}

impl VideoSettings {
    /// Set the per-image duration from unchecked input, clamping it.
    pub fn with_duration(mut self, secs: i64) -> Self {
        self.duration = clamp_duration(secs);
        self
    }

    /// Informational only: `image_count * duration` seconds.
    pub fn estimated_duration_secs(&self, image_count: usize) -> u64 {
        image_count as u64 * u64::from(self.duration)
    }
}

/// Clamp `secs` into `MIN_DURATION_SECS..=MAX_DURATION_SECS`.
pub fn clamp_duration(secs: i64) -> u32 {
    secs.clamp(i64::from(MIN_DURATION_SECS), i64::from(MAX_DURATION_SECS)) as u32
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    i64::deserialize(deserializer).map(clamp_duration)
}

#[cfg(test)]
#[path = "../../tests/unit/video/settings.rs"]
mod tests;
