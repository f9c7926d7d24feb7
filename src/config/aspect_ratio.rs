//! Supported image aspect ratios.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Aspect ratios accepted by the Gemini image-generation API.
///
/// The set is closed: the API rejects anything outside these five, so the
/// ratio is an enum rather than a free-form string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AspectRatio {
    /// 1:1, the default for avatars and stickers.
    #[default]
    Square,

    /// 16:9 landscape.
    Wide,

    /// 9:16 portrait.
    Tall,

    /// 4:3 landscape.
    Classic,

    /// 3:4 portrait.
    ClassicPortrait,
}

impl AspectRatio {
    /// Returns the ratio in the `"W:H"` form the API expects.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Wide => "16:9",
            Self::Tall => "9:16",
            Self::Classic => "4:3",
            Self::ClassicPortrait => "3:4",
        }
    }

    /// All supported ratios, in the order they are documented.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Square,
            Self::Wide,
            Self::Tall,
            Self::Classic,
            Self::ClassicPortrait,
        ]
    }
}

impl FromStr for AspectRatio {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1:1" => Ok(Self::Square),
            "16:9" => Ok(Self::Wide),
            "9:16" => Ok(Self::Tall),
            "4:3" => Ok(Self::Classic),
            "3:4" => Ok(Self::ClassicPortrait),
            other => Err(ConfigError::InvalidAspectRatio {
                value: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for AspectRatio {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AspectRatio> for String {
    fn from(ratio: AspectRatio) -> Self {
        ratio.as_str().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_square() {
        assert_eq!(AspectRatio::default(), AspectRatio::Square);
        assert_eq!(AspectRatio::default().as_str(), "1:1");
    }

    #[test]
    fn test_round_trip_all_variants() {
        for ratio in AspectRatio::all() {
            assert_eq!(ratio.as_str().parse::<AspectRatio>().unwrap(), ratio);
        }
    }

    #[test]
    fn test_rejects_unknown_ratio() {
        let err = "2:1".parse::<AspectRatio>().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidAspectRatio { value } if value == "2:1"
        ));
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(" 16:9 ".parse::<AspectRatio>().unwrap(), AspectRatio::Wide);
    }
}
