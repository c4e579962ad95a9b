// Browser-independent behavior for the portfolio page. The `portfolio_web`
// binary wires these pieces to the DOM; everything here runs natively in tests.
pub mod config;
pub mod contact;
pub mod domain;
pub mod error;
pub mod hover;
pub mod navbar;
pub mod page;
pub mod parallax;
pub mod radar;
pub mod reveal;
pub mod ripple;
pub mod schedule;
pub mod text_cycle;
pub mod toast;

pub use config::{PortfolioConfig, Timings};
pub use domain::{Skill, SkillLevel};
pub use error::{ConfigError, Field, ValidationError};
