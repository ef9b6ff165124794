//! Hover/click ripple on interactive elements.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::scheduler;
use super::theme::RippleStyle;

/// Placement of a ripple span inside its host element, in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
	/// Side length, px.
	pub size: f64,
	/// Offset from the host's left edge, px.
	pub left: f64,
	/// Offset from the host's top edge, px.
	pub top: f64,
}

impl Ripple {
	/// A square ripple as large as the host's longest side, centered on the pointer.
	pub fn new(rect: (f64, f64, f64, f64), client_x: f64, client_y: f64) -> Self {
		let (rect_left, rect_top, width, height) = rect;
		let size = width.max(height);
		Self {
			size,
			left: client_x - rect_left - size / 2.0,
			top: client_y - rect_top - size / 2.0,
		}
	}
}

/// Center of a `(left, top, width, height)` rect, where hover bursts start.
pub fn rect_center(rect: (f64, f64, f64, f64)) -> (f64, f64) {
	let (left, top, width, height) = rect;
	(left + width / 2.0, top + height / 2.0)
}

/// Append a ripple span to `host` and remove it after the style's duration.
pub fn spawn_ripple(host: &Element, client_x: f64, client_y: f64, style: &RippleStyle) {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return;
	};
	let rect = host.get_bounding_client_rect();
	let ripple = Ripple::new(
		(rect.left(), rect.top(), rect.width(), rect.height()),
		client_x,
		client_y,
	);

	let Some(span) = document
		.create_element("span")
		.ok()
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
	else {
		return;
	};
	let css = span.style();
	let _ = css.set_property("width", &format!("{}px", ripple.size));
	let _ = css.set_property("height", &format!("{}px", ripple.size));
	let _ = css.set_property("left", &format!("{}px", ripple.left));
	let _ = css.set_property("top", &format!("{}px", ripple.top));
	let _ = span.class_list().add_1(style.class);

	if host.append_child(&span).is_err() {
		return;
	}
	scheduler::after(style.duration_ms, move || span.remove());
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wide_host_uses_width_and_centers_on_pointer() {
		let ripple = Ripple::new((100.0, 50.0, 120.0, 40.0), 160.0, 70.0);
		assert_eq!(ripple.size, 120.0);
		assert_eq!(ripple.left, 0.0);
		assert_eq!(ripple.top, -40.0);
	}

	#[test]
	fn bursts_start_at_rect_center() {
		assert_eq!(rect_center((100.0, 50.0, 120.0, 40.0)), (160.0, 70.0));
		assert_eq!(rect_center((0.0, 0.0, 0.0, 0.0)), (0.0, 0.0));
	}

	#[test]
	fn tall_host_uses_height() {
		let ripple = Ripple::new((0.0, 0.0, 30.0, 90.0), 15.0, 45.0);
		assert_eq!(ripple, Ripple { size: 90.0, left: -30.0, top: 0.0 });
	}
}
