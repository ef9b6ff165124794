//! Browser tests for the DOM-facing effects. Run with
//! `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]
// Test target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use std::ops::ControlFlow;
use std::rc::Rc;

use leptos::prelude::*;
use portfolio_fx::components::fx::scheduler::FrameLoop;
use portfolio_fx::components::fx::{NotificationQueue, ResumeButton, TextParticleManager, Theme};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

fn html(tag: &str) -> HtmlElement {
	document().create_element(tag).unwrap().dyn_into().unwrap()
}

#[wasm_bindgen_test]
fn text_overlay_sits_on_the_title() {
	let section = html("section");
	section.style().set_property("margin-top", "300px").unwrap();
	section.style().set_property("padding", "40px").unwrap();
	let title = html("h3");
	title.set_text_content(Some("Product thinking"));
	section.append_child(&title).unwrap();
	document().body().unwrap().append_child(&section).unwrap();

	let manager = TextParticleManager::init(&title, &Theme::default().text).unwrap();
	let canvas = manager.canvas();
	let css = HtmlElement::style(canvas);

	assert_eq!(canvas.parent_element().unwrap(), *section);
	assert_eq!(css.get_property_value("position").unwrap(), "absolute");
	assert_eq!(css.get_property_value("pointer-events").unwrap(), "none");
	assert!(title.offset_top() < 300);
	assert_eq!(
		css.get_property_value("top").unwrap(),
		format!("{}px", title.offset_top())
	);
	assert_eq!(
		css.get_property_value("left").unwrap(),
		format!("{}px", title.offset_left())
	);

	manager.start_animation();
	assert!(manager.is_animating());
	manager.destroy();
	assert!(!manager.is_animating());
	assert!(manager.canvas().parent_node().is_none());
	assert_eq!(title.style().get_property_value("opacity").unwrap(), "1");
	section.remove();
}

#[wasm_bindgen_test]
fn stopped_frame_loop_releases_its_tick() {
	let marker = Rc::new(());
	let frame_loop = FrameLoop::new();
	let held = marker.clone();
	frame_loop.start(move |_| {
		let _ = &held;
		ControlFlow::Continue(())
	});
	assert!(frame_loop.is_running());
	assert_eq!(Rc::strong_count(&marker), 2);

	frame_loop.stop();
	drop(frame_loop);
	assert_eq!(Rc::strong_count(&marker), 1);
}

#[wasm_bindgen_test]
fn resume_button_notifies_without_downloading() {
	let host = html("div");
	document().body().unwrap().append_child(&host).unwrap();
	let queue = NotificationQueue::new();
	let _mounted = leptos::mount::mount_to(host.clone(), move || {
		provide_context(queue);
		view! { <ResumeButton>"Resume"</ResumeButton> }
	});

	let button: HtmlElement = host
		.query_selector("button.resume-btn")
		.unwrap()
		.unwrap()
		.dyn_into()
		.unwrap();
	assert!(!button.has_attribute("download"));
	assert!(!button.has_attribute("href"));

	button.click();
	let pending = queue.pending();
	assert_eq!(pending.len(), 1);
	assert_eq!(pending[0].text, "简历已发送至你的设备");
	assert!(button.query_selector("span.ripple-effect").unwrap().is_some());
}
