use std::fmt;
use std::str::FromStr;

use rand::RngExt;
use serde::{Deserialize, Serialize};

use crate::foundation::color::Rgba8;
use crate::foundation::error::StudioError;

/// Skin tone palette offered by the editor and the randomizer.
pub const SKIN_TONES: [Rgba8; 5] = [
    Rgba8::from_u24(0xFDD8B5),
    Rgba8::from_u24(0xD4A574),
    Rgba8::from_u24(0xB87F4E),
    Rgba8::from_u24(0x8D5524),
    Rgba8::from_u24(0x5C3317),
];

/// Hair color palette offered by the editor and the randomizer.
pub const HAIR_COLORS: [Rgba8; 5] = [
    Rgba8::from_u24(0x000000),
    Rgba8::from_u24(0x2C1810),
    Rgba8::from_u24(0x6F4E37),
    Rgba8::from_u24(0xB8860B),
    Rgba8::from_u24(0xFFD700),
];

/// Team names the randomizer picks from.
pub const TEAM_NAMES: [&str; 6] = ["UNITED", "CITY", "ROVERS", "ATHLETIC", "REAL", "FC"];

/// Longest team label, in characters.
pub const TEAM_NAME_MAX_CHARS: usize = 10;
/// Lowest shirt number.
pub const SHIRT_NUMBER_MIN: u8 = 1;
/// Highest shirt number.
pub const SHIRT_NUMBER_MAX: u8 = 99;

/// Clamp free-form editor input into the valid shirt number range.
pub fn clamp_shirt_number(n: i64) -> u8 {
    n.clamp(i64::from(SHIRT_NUMBER_MIN), i64::from(SHIRT_NUMBER_MAX)) as u8
}

fn unknown(kind: &str, value: &str) -> StudioError {
    StudioError::validation(format!("unknown {kind} '{value}'"))
}

/// Collected and randomized, but never alters the drawn figure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Default.
    #[default]
    Male,
    /// Alternative value.
    Female,
}

impl FromStr for Gender {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(unknown("gender", other)),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "male",
            Self::Female => "female",
        })
    }
}

/// Discrete hair shapes; `Bald` draws none.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairStyle {
    /// Half-disc cap.
    #[default]
    Short,
    /// Larger, higher half-disc cap.
    Medium,
    /// Tall half-ellipse cap.
    Long,
    /// No hair.
    Bald,
    /// Five small circles across the crown.
    Curly,
}

impl HairStyle {
    /// Every style, in editor order.
    pub const ALL: [Self; 5] = [
        Self::Short,
        Self::Medium,
        Self::Long,
        Self::Bald,
        Self::Curly,
    ];

    /// Lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
            Self::Bald => "bald",
            Self::Curly => "curly",
        }
    }
}

impl FromStr for HairStyle {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| unknown("hair style", &s))
    }
}

impl fmt::Display for HairStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Playing position shown on the badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Goalkeeper.
    GK,
    /// Defender.
    DF,
    /// Midfielder.
    MF,
    /// Forward.
    #[default]
    FW,
}

impl Position {
    /// Every position, in editor order.
    pub const ALL: [Self; 4] = [Self::GK, Self::DF, Self::MF, Self::FW];

    /// Two-letter badge code.
    pub fn code(self) -> &'static str {
        match self {
            Self::GK => "GK",
            Self::DF => "DF",
            Self::MF => "MF",
            Self::FW => "FW",
        }
    }
}

impl FromStr for Position {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|p| p.code() == s)
            .ok_or_else(|| unknown("position", &s))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Uppercase team label, at most [`TEAM_NAME_MAX_CHARS`] characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TeamName(String);

impl TeamName {
    /// Uppercase `raw` and keep its first characters.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(
            raw.as_ref()
                .to_uppercase()
                .chars()
                .take(TEAM_NAME_MAX_CHARS)
                .collect(),
        )
    }

    /// Normalized label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TeamName {
    fn default() -> Self {
        Self::new(TEAM_NAMES[0])
    }
}

impl From<String> for TeamName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<TeamName> for String {
    fn from(t: TeamName) -> Self {
        t.0
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the figure renderer needs. Every combination of values is drawable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerAttributes {
    /// Metadata only.
    pub gender: Gender,
    /// Head, forearm and leg color.
    pub skin_tone: Rgba8,
    /// Shape of the hair cap.
    pub hair_style: HairStyle,
    /// Ignored for [`HairStyle::Bald`].
    pub hair_color: Rgba8,
    /// Torso, sleeve, shorts, sock and badge text color.
    pub jersey_color: Rgba8,
    /// Badge header.
    pub team_name: TeamName,
    /// Badge position code.
    pub position: Position,
    /// Expected in `1..=99`; see [`clamp_shirt_number`].
    pub shirt_number: u8,
}

impl Default for PlayerAttributes {
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            skin_tone: SKIN_TONES[1],
            hair_style: HairStyle::Short,
            hair_color: HAIR_COLORS[1],
            jersey_color: Rgba8::from_u24(0x0066FF),
            team_name: TeamName::default(),
            position: Position::FW,
            shirt_number: 10,
        }
    }
}

impl PlayerAttributes {
    /// Draw every field uniformly from its domain; jersey color is any 24-bit RGB value.
    pub fn randomize<R: RngExt>(rng: &mut R) -> Self {
        Self {
            gender: if rng.random_bool(0.5) {
                Gender::Male
            } else {
                Gender::Female
            },
            skin_tone: SKIN_TONES[rng.random_range(0..SKIN_TONES.len())],
            hair_style: HairStyle::ALL[rng.random_range(0..HairStyle::ALL.len())],
            hair_color: HAIR_COLORS[rng.random_range(0..HAIR_COLORS.len())],
            jersey_color: Rgba8::from_u24(rng.random_range(0..0xFF_FFFFu32)),
            team_name: TeamName::new(TEAM_NAMES[rng.random_range(0..TEAM_NAMES.len())]),
            position: Position::ALL[rng.random_range(0..Position::ALL.len())],
            shirt_number: rng.random_range(SHIRT_NUMBER_MIN..=SHIRT_NUMBER_MAX),
        }
    }

    /// [`Self::randomize`] over the thread-local generator.
    pub fn random() -> Self {
        Self::randomize(&mut rand::rng())
    }

    /// Set the shirt number from unchecked input, clamping it.
    pub fn with_shirt_number(mut self, n: i64) -> Self {
        self.shirt_number = clamp_shirt_number(n);
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/attributes.rs"]
mod tests;
