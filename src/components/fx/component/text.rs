//! Click-to-dissolve titles.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlElement};

use crate::components::fx::scheduler::{self, FrameLoop};
use crate::components::fx::surface::{CanvasSurface, Surface};
use crate::components::fx::text_particles::TextParticleField;
use crate::components::fx::theme::{TextParticleStyle, Theme};

/// Owns the overlay canvas and particles for one text element.
pub struct TextParticleManager {
	target: HtmlElement,
	surface: CanvasSurface,
	field: Rc<RefCell<TextParticleField>>,
	frame_loop: FrameLoop,
}

impl TextParticleManager {
	/// Sample `target`'s rendered text into particles.
	///
	/// Creates a pointer-transparent canvas over the element, inside its parent.
	/// Returns `None` when the element is detached or the canvas cannot be made.
	pub fn init(target: &HtmlElement, style: &TextParticleStyle) -> Option<Self> {
		let window = web_sys::window()?;
		let document = window.document()?;
		let parent = target.parent_element()?;

		// offsets must be measured against the parent the canvas is placed in
		if let Some(parent) = parent.dyn_ref::<HtmlElement>() {
			let _ = parent.style().set_property("position", "relative");
		}

		let canvas: HtmlCanvasElement = document.create_element("canvas").ok()?.dyn_into().ok()?;
		let css = HtmlElement::style(&canvas);
		let _ = css.set_property("position", "absolute");
		let _ = css.set_property("top", &format!("{}px", target.offset_top()));
		let _ = css.set_property("left", &format!("{}px", target.offset_left()));
		let _ = css.set_property("pointer-events", "none");
		let _ = css.set_property("z-index", "10");

		let mut surface = CanvasSurface::new(canvas)?;
		let rect = target.get_bounding_client_rect();
		surface.set_size(rect.width().ceil(), rect.height().ceil());

		let font = window
			.get_computed_style(target)
			.ok()
			.flatten()
			.and_then(|s| s.get_property_value("font").ok())
			.filter(|f| !f.is_empty())
			.unwrap_or_else(|| style.fallback_font.clone());
		let ctx = surface.context();
		ctx.set_font(&font);
		ctx.set_text_align("left");
		ctx.set_text_baseline("top");
		ctx.set_fill_style_str("#fff");
		let _ = ctx.fill_text(&target.text_content().unwrap_or_default(), 0.0, 0.0);

		let (w, h) = surface.size();
		let pixels = surface.read_pixels().unwrap_or_default();
		let mut rng = SmallRng::seed_from_u64(scheduler::random_seed());
		let field = TextParticleField::sample(&pixels, w as usize, h as usize, style, &mut rng);
		surface.clear();
		debug!(
			"portfolio-fx: sampled {} text particles from {}x{}",
			field.particles.len(),
			w,
			h
		);

		parent.append_child(surface.canvas()).ok()?;

		Some(Self {
			target: target.clone(),
			surface,
			field: Rc::new(RefCell::new(field)),
			frame_loop: FrameLoop::new(),
		})
	}

	/// The overlay canvas.
	pub fn canvas(&self) -> &HtmlCanvasElement {
		self.surface.canvas()
	}

	/// True while the dissolve is playing.
	pub fn is_animating(&self) -> bool {
		self.field.borrow().is_animating()
	}

	/// Hide the source text and run the dissolve. No-op while running.
	pub fn start_animation(&self) {
		if !self.field.borrow_mut().start() {
			return;
		}
		set_opacity(&self.target, "0");

		let (field, target, mut surface) =
			(self.field.clone(), self.target.clone(), self.surface.clone());
		self.frame_loop.start(move |_| {
			let flow = field.borrow_mut().frame(&mut surface);
			if flow.is_break() {
				set_opacity(&target, "1");
			}
			flow
		});
	}

	/// Stop any animation, restore the source text and remove the canvas.
	pub fn destroy(&self) {
		self.frame_loop.stop();
		self.field.borrow_mut().cancel();
		set_opacity(&self.target, "1");
		self.surface.canvas().remove();
	}
}

fn set_opacity(element: &HtmlElement, value: &str) {
	let _ = element.style().set_property("opacity", value);
}

/// A title that dissolves into particles and regroups when clicked.
///
/// The particles are re-sampled on window resize.
#[component]
pub fn DissolvingText(
	#[prop(into)] text: String,
	#[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
	let title_ref = NodeRef::<leptos::html::H3>::new();
	let manager: Rc<RefCell<Option<TextParticleManager>>> = Rc::new(RefCell::new(None));
	let manager_init = manager.clone();

	Effect::new(move |_| {
		let Some(title) = title_ref.get() else {
			return;
		};
		if manager_init.borrow().is_some() {
			return;
		}
		let Ok(title) = title.dyn_into::<HtmlElement>() else {
			return;
		};
		let style = Theme::default().text;
		*manager_init.borrow_mut() = TextParticleManager::init(&title, &style);

		let manager_resize = manager_init.clone();
		scheduler::on_resize(move |_, _| {
			let mut slot = manager_resize.borrow_mut();
			if let Some(old) = slot.take() {
				old.destroy();
			}
			*slot = TextParticleManager::init(&title, &style);
		});
	});

	let manager_click = manager.clone();
	let on_click = move |_| {
		if let Some(ref m) = *manager_click.borrow() {
			m.start_animation();
		}
	};

	let class = format!("thinking-title {}", class.unwrap_or_default());
	view! {
		<h3 node_ref=title_ref class=class on:click=on_click style="cursor: pointer;">
			{text}
		</h3>
	}
}
