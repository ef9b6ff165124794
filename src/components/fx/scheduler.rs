//! Frame loop, timers and window hooks.
//!
//! Each effect owns a [`FrameLoop`]. The loop re-schedules itself through
//! `requestAnimationFrame` only while its tick returns `Continue` and nobody
//! has called [`FrameLoop::stop`], so idle effects register no callbacks.

use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Window;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A cancellable `requestAnimationFrame` loop.
#[derive(Clone, Default)]
pub struct FrameLoop {
	running: Rc<Cell<bool>>,
	/// Pending animation frame request.
	handle: Rc<Cell<Option<i32>>>,
	callback: FrameCallback,
}

impl FrameLoop {
	/// A stopped loop.
	pub fn new() -> Self {
		Self::default()
	}

	/// True between `start` and the final tick or `stop`.
	pub fn is_running(&self) -> bool {
		self.running.get()
	}

	/// Start calling `tick` once per frame with the frame timestamp (ms).
	///
	/// No-op while already running. The loop ends when `tick` breaks or
	/// [`stop`](Self::stop) is called.
	pub fn start(&self, mut tick: impl FnMut(f64) -> ControlFlow<()> + 'static) {
		if self.running.get() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		self.running.set(true);

		// weak: `callback` owns the closure
		let (running, handle, callback) = (
			self.running.clone(),
			self.handle.clone(),
			Rc::downgrade(&self.callback),
		);
		*self.callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
			handle.set(None);
			if !running.get() {
				return;
			}
			if tick(timestamp).is_break() {
				running.set(false);
				return;
			}
			// tick may have stopped the loop
			if !running.get() {
				return;
			}
			let Some(callback) = callback.upgrade() else {
				return;
			};
			if let Some(ref cb) = *callback.borrow() {
				handle.set(request_frame(cb));
			}
		}));

		if let Some(ref cb) = *self.callback.borrow() {
			self.handle.set(request_frame_on(&window, cb));
		}
	}

	/// Stop the loop and cancel any pending frame.
	pub fn stop(&self) {
		self.running.set(false);
		if let (Some(id), Some(window)) = (self.handle.take(), web_sys::window()) {
			let _ = window.cancel_animation_frame(id);
		}
	}
}

fn request_frame(cb: &Closure<dyn FnMut(f64)>) -> Option<i32> {
	web_sys::window().and_then(|w| request_frame_on(&w, cb))
}

fn request_frame_on(window: &Window, cb: &Closure<dyn FnMut(f64)>) -> Option<i32> {
	window.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

/// Run `f` once after `delay_ms`.
pub fn after(delay_ms: i32, f: impl FnOnce() + 'static) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let cb = Closure::once_into_js(f);
	let _ = window
		.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms);
}

/// Subscribe to window resizes with the new viewport size.
///
/// The listener stays registered for the page lifetime.
pub fn on_resize(mut f: impl FnMut(f64, f64) + 'static) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let cb = Closure::<dyn FnMut()>::new(move || {
		if let Some((w, h)) = viewport_size() {
			f(w, h);
		}
	});
	let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
	cb.forget();
}

/// Inner size of the browser window.
pub fn viewport_size() -> Option<(f64, f64)> {
	let window = web_sys::window()?;
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Wall-clock milliseconds used for burst expiry.
pub fn now_ms() -> f64 {
	js_sys::Date::now()
}

/// Fresh RNG seed per effect instance.
pub fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}
