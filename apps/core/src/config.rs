use serde::Deserialize;

use crate::domain::Skill;
use crate::error::ConfigError;

const EMBEDDED: &str = include_str!("../portfolio.json");

/// Fixed delays, in milliseconds, used by the page's timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub text_cycle_ms: u32,
    pub radar_delay_ms: u32,
    pub toast_hide_ms: u32,
    pub ripple_lifetime_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            text_cycle_ms: 2000,
            radar_delay_ms: 200,
            toast_hide_ms: 5000,
            ripple_lifetime_ms: 600,
        }
    }
}

/// Page content and timing, loaded once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioConfig {
    pub hero_texts: Vec<String>,
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub timings: Timings,
}

impl PortfolioConfig {
    /// Loads the document compiled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED)
    }

    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.hero_texts.is_empty() {
            return Err(ConfigError::NoHeroTexts);
        }
        if self.skills.is_empty() {
            return Err(ConfigError::NoSkills);
        }
        if let Some(position) = self
            .skills
            .iter()
            .position(|skill| skill.name.trim().is_empty())
        {
            return Err(ConfigError::BlankSkillName(position));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_reference_page() -> Result<(), ConfigError> {
        let config = PortfolioConfig::embedded()?;

        assert_eq!(
            config.hero_texts,
            ["Cloud", "DevOps", "Docker", "Terraform"]
        );
        assert_eq!(config.skills.len(), 8);
        assert_eq!(config.skills[0].name, "HTML");
        assert_eq!(config.skills[0].level.value(), 95);
        assert_eq!(config.skills[7].name, "Docker");
        assert_eq!(config.timings, Timings::default());
        Ok(())
    }

    #[test]
    fn missing_timings_fall_back_to_defaults() -> Result<(), ConfigError> {
        let config = PortfolioConfig::from_json(
            r#"{"hero_texts":["Rust"],"skills":[{"name":"Rust","level":40}],
                "timings":{"toast_hide_ms":100}}"#,
        )?;

        assert_eq!(config.timings.toast_hide_ms, 100);
        assert_eq!(config.timings.text_cycle_ms, 2000);
        assert_eq!(config.timings.ripple_lifetime_ms, 600);
        Ok(())
    }

    #[test]
    fn rejects_empty_lists() {
        let no_texts =
            PortfolioConfig::from_json(r#"{"hero_texts":[],"skills":[{"name":"A","level":1}]}"#);
        assert!(matches!(no_texts, Err(ConfigError::NoHeroTexts)));

        let no_skills = PortfolioConfig::from_json(r#"{"hero_texts":["A"],"skills":[]}"#);
        assert!(matches!(no_skills, Err(ConfigError::NoSkills)));
    }

    #[test]
    fn rejects_blank_skill_names_and_bad_levels() {
        let blank = PortfolioConfig::from_json(
            r#"{"hero_texts":["A"],"skills":[{"name":"A","level":1},{"name":"  ","level":2}]}"#,
        );
        assert!(matches!(blank, Err(ConfigError::BlankSkillName(1))));

        let level =
            PortfolioConfig::from_json(r#"{"hero_texts":["A"],"skills":[{"name":"A","level":101}]}"#);
        assert!(matches!(level, Err(ConfigError::Parse(_))));
    }
}
