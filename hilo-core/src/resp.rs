use serde::{Deserialize, Serialize};
use std::fmt;

/// A recommended play
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Copy, Clone)]
pub enum Resp {
    Hit,
    Stand,
    Double,
    Split,
    /// Not enough information yet: no player cards or no dealer upcard
    Undetermined,
}

impl fmt::Display for Resp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => write!(f, "Hit"),
            Self::Stand => write!(f, "Stand"),
            Self::Double => write!(f, "Double"),
            Self::Split => write!(f, "Split"),
            Self::Undetermined => write!(f, "--"),
        }
    }
}
