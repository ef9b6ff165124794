//! Skill radar chart canvas with hover bursts.

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::components::fx::language::LanguageState;
use crate::components::fx::radar::RadarOverlay;
use crate::components::fx::scheduler::{self, FrameLoop};
use crate::components::fx::surface::CanvasSurface;
use crate::components::fx::theme::Theme;
use crate::components::fx::types::SkillTable;

struct RadarContext {
	surface: CanvasSurface,
	overlay: RadarOverlay,
}

/// Canvas size for the chart: the requested size, shrunk to fit the parent's
/// width with the aspect ratio kept.
fn fit_size(canvas: &HtmlCanvasElement, width: f64, height: f64) -> (f64, f64) {
	let available = canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(width);
	let w = width.min(available);
	(w, height * w / width)
}

/// Radar chart of the skill table.
///
/// Labels follow the [`LanguageState`] context. Moving the pointer within
/// hover range of a skill point bursts particles there.
#[component]
pub fn RadarChart(
	#[prop(into)] skills: Signal<SkillTable>,
	#[prop(default = 500.0)] width: f64,
	#[prop(default = 500.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let language = LanguageState::from_context();
	let context: Rc<RefCell<Option<RadarContext>>> = Rc::new(RefCell::new(None));
	let (context_init, loop_init) = (context.clone(), FrameLoop::new());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if context_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = fit_size(&canvas, width, height);
		let Some(mut surface) = CanvasSurface::new(canvas) else {
			warn!("portfolio-fx: no 2d context for the radar chart");
			return;
		};
		surface.set_size(w, h);

		let theme = Theme::default();
		let mut overlay = RadarOverlay::new(
			skills.get_untracked().skills,
			language.get_untracked(),
			&theme.radar,
			&theme.ambient,
			w,
			h,
			scheduler::random_seed(),
		);
		overlay.redraw(&mut surface);
		*context_init.borrow_mut() = Some(RadarContext { surface, overlay });

		let context_resize = context_init.clone();
		scheduler::on_resize(move |_, _| {
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				let (nw, nh) = fit_size(c.surface.canvas(), width, height);
				c.surface.set_size(nw, nh);
				c.overlay.resize(&mut c.surface);
			}
		});

		let context_anim = context_init.clone();
		loop_init.start(move |_| {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.overlay.frame(&mut c.surface);
			}
			ControlFlow::Continue(())
		});
	});

	let context_lang = context.clone();
	Effect::new(move |_| {
		let lang = language.get();
		if let Some(ref mut c) = *context_lang.borrow_mut() {
			if c.overlay.language() != lang {
				debug!("portfolio-fx: radar labels -> {:?}", lang);
				c.overlay.set_language(lang, &mut c.surface);
			}
		}
	});

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_mm.borrow_mut() {
			let now = scheduler::now_ms();
			if c.overlay.pointer_move(x, y, now) == 0 {
				return;
			}
			let lifetime = c.overlay.particles.burst_lifetime_ms();
			let context_expire = context_mm.clone();
			scheduler::after(lifetime.ceil() as i32, move || {
				if let Some(ref mut c) = *context_expire.borrow_mut() {
					c.overlay.particles.prune_expired(now + lifetime);
				}
			});
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			id="radarChart"
			class="radar-chart"
			on:mousemove=on_mousemove
			style="display: block; margin: 0 auto;"
		/>
	}
}

