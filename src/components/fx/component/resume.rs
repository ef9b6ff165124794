//! Resume download button and its confirmation overlay.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlElement, MouseEvent};

use super::background::BurstQueue;
use super::interactive::hover_fx;
use crate::components::fx::language::LanguageState;
use crate::components::fx::resume::ResumeNotification;
use crate::components::fx::ripple::spawn_ripple;
use crate::components::fx::scheduler::{self, FrameLoop};
use crate::components::fx::surface::CanvasSurface;
use crate::components::fx::theme::{NotificationStyle, Theme};

/// A caption plus burst to show at a viewport position.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationRequest {
	/// Viewport x, px.
	pub x: f64,
	/// Viewport y, px.
	pub y: f64,
	/// Caption text.
	pub text: String,
}

/// Pending notifications, drained by [`ResumeNotificationOverlay`].
#[derive(Clone, Copy, Debug)]
pub struct NotificationQueue(RwSignal<Vec<NotificationRequest>>);

impl NotificationQueue {
	/// An empty queue.
	pub fn new() -> Self {
		Self(RwSignal::new(Vec::new()))
	}

	/// Queue provided by the app shell, if any.
	pub fn from_context() -> Option<Self> {
		use_context::<Self>()
	}

	/// Request a notification at viewport point `(x, y)`.
	pub fn push(&self, x: f64, y: f64, text: impl Into<String>) {
		let request = NotificationRequest {
			x,
			y,
			text: text.into(),
		};
		self.0.update(|queue| queue.push(request));
	}

	/// Requests not yet played, without subscribing.
	pub fn pending(&self) -> Vec<NotificationRequest> {
		self.0.get_untracked()
	}

	fn drain(&self) -> Vec<NotificationRequest> {
		self.0.track();
		let mut pending = Vec::new();
		self.0
			.update_untracked(|queue| std::mem::swap(queue, &mut pending));
		pending
	}
}

impl Default for NotificationQueue {
	fn default() -> Self {
		Self::new()
	}
}

/// Fullscreen overlay canvas that plays resume notifications.
pub struct ResumeNotificationManager {
	surface: CanvasSurface,
	notification: Rc<RefCell<ResumeNotification>>,
	frame_loop: FrameLoop,
}

impl ResumeNotificationManager {
	/// Append a fixed, pointer-transparent canvas covering the viewport to `<body>`.
	pub fn init(style: &NotificationStyle) -> Option<Self> {
		let document = web_sys::window()?.document()?;
		let body = document.body()?;

		let canvas: HtmlCanvasElement = document.create_element("canvas").ok()?.dyn_into().ok()?;
		let css = HtmlElement::style(&canvas);
		let _ = css.set_property("position", "fixed");
		let _ = css.set_property("top", "0");
		let _ = css.set_property("left", "0");
		let _ = css.set_property("pointer-events", "none");
		let _ = css.set_property("z-index", "10000");

		let surface = CanvasSurface::new(canvas)?;
		let (w, h) = scheduler::viewport_size()?;
		surface.set_size(w, h);
		body.append_child(surface.canvas()).ok()?;

		let resized = surface.clone();
		scheduler::on_resize(move |nw, nh| resized.set_size(nw, nh));

		Some(Self {
			surface,
			notification: Rc::new(RefCell::new(ResumeNotification::new(
				style,
				scheduler::random_seed(),
			))),
			frame_loop: FrameLoop::new(),
		})
	}

	/// Show `text` above `(x, y)` with a particle burst.
	///
	/// Joins the running animation if one is already playing.
	pub fn show_notification(&self, x: f64, y: f64, text: &str) {
		self.notification.borrow_mut().show(x, y, text);
		if self.frame_loop.is_running() {
			return;
		}
		let (notification, mut surface) = (self.notification.clone(), self.surface.clone());
		self.frame_loop
			.start(move |_| notification.borrow_mut().frame(&mut surface));
	}
}

/// Hosts the [`ResumeNotificationManager`] and plays every request pushed
/// onto the [`NotificationQueue`] context.
#[component]
pub fn ResumeNotificationOverlay() -> impl IntoView {
	let manager: Rc<RefCell<Option<ResumeNotificationManager>>> = Rc::new(RefCell::new(None));
	let queue = NotificationQueue::from_context();

	Effect::new(move |_| {
		let Some(queue) = queue else {
			return;
		};
		let pending = queue.drain();

		let mut slot = manager.borrow_mut();
		if slot.is_none() {
			*slot = ResumeNotificationManager::init(&Theme::default().notification);
			if slot.is_none() {
				warn!("portfolio-fx: notification overlay unavailable");
			}
		}
		let Some(m) = slot.as_ref() else {
			return;
		};
		for request in pending {
			debug!("portfolio-fx: notification at ({}, {})", request.x, request.y);
			m.show_notification(request.x, request.y, &request.text);
		}
	});
}

/// Resume button. Clicking ripples, logs the download and confirms with a
/// notification at the viewport center; no file is fetched. Hovering bursts
/// background particles like [`FxLink`](super::FxLink).
#[component]
pub fn ResumeButton(children: Children) -> impl IntoView {
	let language = LanguageState::from_context();
	let notifications = NotificationQueue::from_context();
	let ripple = Theme::default().ripple;
	let on_mouseenter = hover_fx(BurstQueue::from_context(), ripple.clone());

	let on_click = move |ev: MouseEvent| {
		ev.prevent_default();
		if let Some(host) = ev
			.current_target()
			.and_then(|t| t.dyn_into::<web_sys::Element>().ok())
		{
			spawn_ripple(&host, ev.client_x() as f64, ev.client_y() as f64, &ripple);
		}
		info!("portfolio-fx: Resume download initiated");

		let (Some(queue), Some((w, h))) = (notifications, scheduler::viewport_size()) else {
			return;
		};
		queue.push(w / 2.0, h / 2.0, language.get_untracked().resume_caption());
	};

	view! {
		<button
			type="button"
			class="btn resume-btn"
			on:click=on_click
			on:mouseenter=on_mouseenter
		>
			{children()}
		</button>
	}
}
