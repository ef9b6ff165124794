//! Hover effects and the language switch.

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use super::background::BurstQueue;
use crate::components::fx::language::{Language, LanguageState};
use crate::components::fx::ripple::{rect_center, spawn_ripple};
use crate::components::fx::theme::{RippleStyle, Theme};

fn event_host(ev: &MouseEvent) -> Option<Element> {
	ev.current_target()?.dyn_into::<Element>().ok()
}

/// Mouseenter handler: ripple at the pointer, ambient burst at the element
/// center.
pub(super) fn hover_fx(
	bursts: Option<BurstQueue>,
	ripple: RippleStyle,
) -> impl FnMut(MouseEvent) + 'static {
	move |ev: MouseEvent| {
		let Some(host) = event_host(&ev) else {
			return;
		};
		spawn_ripple(&host, ev.client_x() as f64, ev.client_y() as f64, &ripple);

		let rect = host.get_bounding_client_rect();
		if let Some(queue) = bursts {
			let (x, y) = rect_center((rect.left(), rect.top(), rect.width(), rect.height()));
			queue.push(x, y);
		}
	}
}

/// Link that ripples and bursts background particles on hover.
#[component]
pub fn FxLink(
	#[prop(into)] href: String,
	#[prop(optional, into)] class: Option<String>,
	children: Children,
) -> impl IntoView {
	let on_mouseenter = hover_fx(BurstQueue::from_context(), Theme::default().ripple);

	let class = format!("fx-link {}", class.unwrap_or_default());
	view! {
		<a href=href class=class on:mouseenter=on_mouseenter>
			{children()}
		</a>
	}
}

/// Block with the same hover effect as [`FxLink`], for cards, tags and
/// social icons.
#[component]
pub fn FxCard(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
	let on_mouseenter = hover_fx(BurstQueue::from_context(), Theme::default().ripple);

	let class = format!("fx-card {}", class.unwrap_or_default());
	view! {
		<div class=class on:mouseenter=on_mouseenter>
			{children()}
		</div>
	}
}

/// ZH/EN switch bound to the [`LanguageState`] context.
///
/// The current language is mirrored to the `en` class on `<body>` so static
/// bilingual markup can follow it from CSS.
#[component]
pub fn LanguageToggle() -> impl IntoView {
	let language = LanguageState::from_context();

	Effect::new(move |_| {
		let lang = language.get();
		let Some(body) = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.body())
		else {
			return;
		};
		let _ = body
			.class_list()
			.toggle_with_force("en", lang == Language::En);
		debug!("portfolio-fx: language -> {}", lang.code());
	});

	let button = move |lang: Language| {
		view! {
			<button
				class="lang-btn"
				class:active=move || language.get() == lang
				on:click=move |_| language.set(lang)
			>
				{lang.code()}
			</button>
		}
	};

	view! {
		<div class="lang-switch">
			{button(Language::Zh)}
			{button(Language::En)}
		</div>
	}
}
