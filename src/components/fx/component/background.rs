//! Full-viewport ambient particle background.

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use web_sys::HtmlCanvasElement;

use crate::components::fx::particles::ParticleSystem;
use crate::components::fx::scheduler::{self, FrameLoop};
use crate::components::fx::surface::CanvasSurface;
use crate::components::fx::theme::Theme;

/// Pending burst positions (viewport px), drained by [`ParticleBackground`].
#[derive(Clone, Copy, Debug)]
pub struct BurstQueue(RwSignal<Vec<(f64, f64)>>);

impl BurstQueue {
	/// An empty queue.
	pub fn new() -> Self {
		Self(RwSignal::new(Vec::new()))
	}

	/// Queue provided by the app shell, if any.
	pub fn from_context() -> Option<Self> {
		use_context::<Self>()
	}

	/// Request a burst centered on viewport point `(x, y)`.
	pub fn push(&self, x: f64, y: f64) {
		self.0.update(|queue| queue.push((x, y)));
	}

	/// Take every pending burst, subscribing the current effect to new ones.
	fn drain(&self) -> Vec<(f64, f64)> {
		self.0.track();
		let mut pending = Vec::new();
		self.0
			.update_untracked(|queue| std::mem::swap(queue, &mut pending));
		pending
	}
}

impl Default for BurstQueue {
	fn default() -> Self {
		Self::new()
	}
}

struct Background {
	surface: CanvasSurface,
	particles: ParticleSystem,
}

/// Fixed canvas behind the page running the constellation animation.
///
/// Bursts pushed onto the [`BurstQueue`] context are injected at the pushed
/// viewport position and removed by a timer once they expire.
#[component]
pub fn ParticleBackground() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let background: Rc<RefCell<Option<Background>>> = Rc::new(RefCell::new(None));
	let (background_init, loop_init) = (background.clone(), FrameLoop::new());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if background_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(surface) = CanvasSurface::new(canvas) else {
			warn!("portfolio-fx: no 2d context for the background canvas");
			return;
		};
		let Some((w, h)) = scheduler::viewport_size() else {
			return;
		};
		surface.set_size(w, h);

		let theme = Theme::default();
		let particles = ParticleSystem::new(&theme.ambient, w, h, scheduler::random_seed());
		info!(
			"portfolio-fx: background {}x{} with {} particles",
			w,
			h,
			particles.particles.len()
		);
		*background_init.borrow_mut() = Some(Background { surface, particles });

		let background_resize = background_init.clone();
		scheduler::on_resize(move |nw, nh| {
			if let Some(ref mut bg) = *background_resize.borrow_mut() {
				bg.surface.set_size(nw, nh);
				bg.particles.resize(nw, nh);
			}
		});

		let background_anim = background_init.clone();
		loop_init.start(move |_| {
			if let Some(ref mut bg) = *background_anim.borrow_mut() {
				let Background { surface, particles } = bg;
				particles.frame(surface);
			}
			ControlFlow::Continue(())
		});
	});

	let (background_bursts, bursts) = (background.clone(), BurstQueue::from_context());
	Effect::new(move |_| {
		let Some(queue) = bursts else {
			return;
		};
		let pending = queue.drain();
		if pending.is_empty() {
			return;
		}
		let mut slot = background_bursts.borrow_mut();
		let Some(bg) = slot.as_mut() else {
			return;
		};

		let now = scheduler::now_ms();
		let lifetime = bg.particles.burst_lifetime_ms();
		for &(x, y) in &pending {
			bg.particles.add_particle_effect(x, y, now);
		}
		debug!("portfolio-fx: {} background burst(s)", pending.len());

		let background_expire = background_bursts.clone();
		scheduler::after(lifetime.ceil() as i32, move || {
			if let Some(ref mut bg) = *background_expire.borrow_mut() {
				bg.particles.prune_expired(now + lifetime);
			}
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="particleCanvas"
			class="particle-canvas"
			style="position: fixed; inset: 0; z-index: -1; pointer-events: none;"
		/>
	}
}
