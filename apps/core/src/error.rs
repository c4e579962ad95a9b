use std::fmt;
use thiserror::Error;

/// Errors raised while loading the page configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse portfolio config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("hero text list is empty")]
    NoHeroTexts,
    #[error("skill list is empty")]
    NoSkills,
    #[error("skill at position {0} has a blank name")]
    BlankSkillName(usize),
    #[error("skill level {0} is outside 0..=100")]
    LevelOutOfRange(u32),
}

/// Contact form fields, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Form control name the field is read from.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contact form rejections. The first failing check wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing field: {0}")]
    MissingField(Field),
    #[error("invalid email")]
    InvalidEmail,
}

impl ValidationError {
    /// Text shown in the toast body for this rejection.
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::MissingField(_) => "Please fill in all fields",
            Self::InvalidEmail => "Please enter a valid email address",
        }
    }
}
