use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} decks is not supported (choose 1, 2, 4, 6, or 8)")]
    UnsupportedDecks(u8),
    #[error("base unit must be a positive number, got {0}")]
    NonPositiveBaseUnit(f32),
    #[error("unable to read config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unable to open config: {0}")]
    Io(#[from] std::io::Error),
}

/// Shoe sizes the counter knows how to handle
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Copy, Clone)]
#[serde(try_from = "u8", into = "u8")]
pub enum NumDecks {
    One,
    Two,
    Four,
    Six,
    Eight,
}

impl NumDecks {
    pub const ALL: [NumDecks; 5] = [
        NumDecks::One,
        NumDecks::Two,
        NumDecks::Four,
        NumDecks::Six,
        NumDecks::Eight,
    ];

    pub fn count(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Four => 4,
            Self::Six => 6,
            Self::Eight => 8,
        }
    }
}

impl Default for NumDecks {
    fn default() -> Self {
        NumDecks::Six
    }
}

impl TryFrom<u8> for NumDecks {
    type Error = ConfigError;

    fn try_from(val: u8) -> Result<Self, Self::Error> {
        match val {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            6 => Ok(Self::Six),
            8 => Ok(Self::Eight),
            n => Err(ConfigError::UnsupportedDecks(n)),
        }
    }
}

impl From<NumDecks> for u8 {
    fn from(val: NumDecks) -> Self {
        val.count()
    }
}

impl fmt::Display for NumDecks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.count();
        write!(f, "{} deck{}", n, if n > 1 { "s" } else { "" })
    }
}

/// Operator settings. Changing these never touches the recorded count, only what is derived
/// from it.
#[derive(Serialize, Deserialize, PartialEq, Debug, Copy, Clone)]
#[serde(default)]
pub struct ShoeConfig {
    pub num_decks: NumDecks,
    pub base_unit: f32,
}

impl Default for ShoeConfig {
    fn default() -> Self {
        Self {
            num_decks: NumDecks::default(),
            base_unit: 1.0,
        }
    }
}

impl ShoeConfig {
    pub fn new(num_decks: u8, base_unit: f32) -> Result<Self, ConfigError> {
        Self {
            num_decks: NumDecks::try_from(num_decks)?,
            base_unit,
        }
        .validated()
    }

    /// Read a JSON config. Missing fields take their defaults.
    pub fn from_reader(r: impl Read) -> Result<Self, ConfigError> {
        let conf: Self = serde_json::from_reader(r)?;
        conf.validated()
    }

    pub fn validated(self) -> Result<Self, ConfigError> {
        check_base_unit(self.base_unit)?;
        Ok(self)
    }
}

pub(crate) fn check_base_unit(unit: f32) -> Result<f32, ConfigError> {
    if unit.is_finite() && unit > 0.0 {
        Ok(unit)
    } else {
        Err(ConfigError::NonPositiveBaseUnit(unit))
    }
}
