//! Player marks.
//!
//! A `Mark` is both the player identity and the symbol it leaves on the
//! board. Parsing from text is the only fallible way to obtain one.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GameError;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Both marks, `X` first.
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Board symbol for this mark.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Mark {
    type Error = GameError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'X' => Ok(Mark::X),
            'O' => Ok(Mark::O),
            _ => Err(GameError::InvalidPlayer(c.to_string())),
        }
    }
}

impl FromStr for Mark {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Mark::try_from(c).map_err(|_| GameError::InvalidPlayer(s.to_string())),
            _ => Err(GameError::InvalidPlayer(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Mark::X), "X");
        assert_eq!(format!("{}", Mark::O), "O");
    }

    #[test]
    fn test_parse() {
        assert_eq!("X".parse::<Mark>(), Ok(Mark::X));
        assert_eq!("o".parse::<Mark>(), Ok(Mark::O));
        assert_eq!(" O ".parse::<Mark>(), Ok(Mark::O));
        assert_eq!(Mark::try_from('x'), Ok(Mark::X));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            "Z".parse::<Mark>(),
            Err(GameError::InvalidPlayer("Z".to_string()))
        );
        assert_eq!(
            "XO".parse::<Mark>(),
            Err(GameError::InvalidPlayer("XO".to_string()))
        );
        assert!("".parse::<Mark>().is_err());
        assert!(Mark::try_from('1').is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Mark::O).unwrap();
        let deserialized: Mark = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Mark::O);
    }
}
