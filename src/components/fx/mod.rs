//! Canvas visual effects for the portfolio page.
//!
//! - Ambient constellation background with hover bursts
//! - Text that dissolves into particles and regroups on click
//! - Skill radar chart with a particle highlight layer
//! - Particle notification for the resume download
//!
//! Simulation and drawing go through the [`surface::Surface`] trait, so every
//! effect runs against a recording surface in tests. The Leptos components own
//! the canvases, frame loops and DOM event wiring.
//!
//! # Example
//!
//! ```ignore
//! use portfolio_fx::components::fx::{ParticleBackground, RadarChart, SkillTable};
//!
//! view! {
//!     <ParticleBackground />
//!     <RadarChart skills=SkillTable::default() />
//! }
//! ```

mod component;
pub mod language;
pub mod particles;
pub mod radar;
pub mod resume;
pub mod ripple;
pub mod scheduler;
pub mod surface;
pub mod text_particles;
pub mod theme;
mod types;

pub use component::{
	BurstQueue, DissolvingText, FxCard, FxLink, LanguageToggle, NotificationQueue,
	NotificationRequest, ParticleBackground, RadarChart, ResumeButton, ResumeNotificationManager,
	ResumeNotificationOverlay, TextParticleManager,
};
pub use language::{Language, LanguageState};
pub use theme::Theme;
pub use types::{Skill, SkillTable};
