use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A proficiency percentage, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub const MAX: Self = Self(100);

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Level as a fraction of the full radius.
    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl TryFrom<u32> for SkillLevel {
    type Error = ConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .filter(|level| *level <= 100)
            .map(Self)
            .ok_or(ConfigError::LevelOutOfRange(value))
    }
}

impl From<SkillLevel> for u32 {
    fn from(level: SkillLevel) -> Self {
        Self::from(level.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            name: name.into(),
            level: SkillLevel::try_from(level)?,
        })
    }
}
