//! Leptos components wiring the effects to the page.

mod background;
mod interactive;
mod radar;
mod resume;
mod text;

pub use background::{BurstQueue, ParticleBackground};
pub use interactive::{FxCard, FxLink, LanguageToggle};
pub use radar::RadarChart;
pub use resume::{
	NotificationQueue, NotificationRequest, ResumeButton, ResumeNotificationManager,
	ResumeNotificationOverlay,
};
pub use text::{DissolvingText, TextParticleManager};
