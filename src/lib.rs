//! portfolio-fx: Canvas visual effects for a personal portfolio page.
//!
//! This crate provides WASM-based Leptos components for an ambient particle
//! background, hover ripples and bursts, dissolving titles, a skill radar
//! chart and a resume download notification.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::fx::{
	BurstQueue, DissolvingText, FxCard, FxLink, Language, LanguageState, LanguageToggle,
	NotificationQueue, ParticleBackground, RadarChart, ResumeButton, ResumeNotificationOverlay,
	Skill, SkillTable,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-fx: logging initialized");
}

/// Load the skill table from a script element with id="skill-data".
/// Expected format: JSON with { skills: [{ nameZh, nameEn, value }, ...] }
fn load_skill_data() -> Option<SkillTable> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("skill-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<SkillTable>(&json_text) {
		Ok(table) => {
			info!("portfolio-fx: loaded {} skills", table.skills.len());
			Some(table)
		}
		Err(e) => {
			warn!("portfolio-fx: failed to parse skill data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Provides the shared effect state and renders the portfolio sections.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	provide_context(LanguageState::new(Language::default()));
	provide_context(BurstQueue::new());
	provide_context(NotificationQueue::new());

	let skills = load_skill_data().unwrap_or_default();
	let skill_signal = Signal::derive(move || skills.clone());

	view! {
		<Html attr:lang="zh" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleBackground />
		<ResumeNotificationOverlay />

		<header class="site-header">
			<nav class="nav-links">
				<FxLink href="#about">"About"</FxLink>
				<FxLink href="#skills">"Skills"</FxLink>
				<FxLink href="#thinking">"Thinking"</FxLink>
			</nav>
			<LanguageToggle />
		</header>

		<main>
			<section id="about" class="hero">
				<h1>"Product Portfolio"</h1>
				<ResumeButton>"Download resume"</ResumeButton>
			</section>
			<section id="skills" class="skills">
				<RadarChart skills=skill_signal />
				<div class="tags">
					<FxCard class="tag">"AI"</FxCard>
					<FxCard class="tag">"Product"</FxCard>
					<FxCard class="tag">"Data"</FxCard>
				</div>
			</section>
			<section id="thinking" class="thinking">
				<DissolvingText text="Product thinking" />
				<DissolvingText text="Data-driven decisions" />
			</section>
		</main>
	}
}
