//! Page language state shared by the chart labels and the resume caption.

use leptos::prelude::*;

use super::types::Skill;

/// Display language of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
	/// Chinese, the page default.
	#[default]
	Zh,
	/// English.
	En,
}

impl Language {
	/// The other language.
	pub fn toggled(self) -> Self {
		match self {
			Language::Zh => Language::En,
			Language::En => Language::Zh,
		}
	}

	/// Short code shown on the toggle buttons.
	pub fn code(self) -> &'static str {
		match self {
			Language::Zh => "中",
			Language::En => "EN",
		}
	}

	/// Skill name in this language.
	pub fn label(self, skill: &Skill) -> &str {
		match self {
			Language::Zh => &skill.name_zh,
			Language::En => &skill.name_en,
		}
	}

	/// Caption shown after a resume download click.
	pub fn resume_caption(self) -> &'static str {
		match self {
			Language::Zh => "简历已发送至你的设备",
			Language::En => "Resume sent to your device",
		}
	}
}

/// Reactive language state, provided as context by the app shell.
///
/// Components read it untracked inside frame callbacks and subscribe to it with
/// an `Effect` when a change must trigger a redraw.
#[derive(Clone, Copy, Debug)]
pub struct LanguageState(pub RwSignal<Language>);

impl LanguageState {
	/// Fresh state starting at `initial`.
	pub fn new(initial: Language) -> Self {
		Self(RwSignal::new(initial))
	}

	/// Language state from context, or a fresh default one when none is provided.
	pub fn from_context() -> Self {
		use_context::<Self>().unwrap_or_else(|| Self::new(Language::default()))
	}

	/// Current language, tracked by the running effect.
	pub fn get(&self) -> Language {
		self.0.get()
	}

	/// Current language without subscribing.
	pub fn get_untracked(&self) -> Language {
		self.0.get_untracked()
	}

	/// Switch language, notifying subscribers.
	pub fn set(&self, language: Language) {
		self.0.set(language);
	}
}
