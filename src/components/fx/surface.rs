//! Drawing surfaces.
//!
//! Effects draw through the [`Surface`] trait so the same frame logic runs on a
//! browser canvas and on the recording surface used in tests.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::theme::{Color, TextPaint};

/// A 2D raster drawing target.
///
/// `alpha` arguments are a global alpha applied on top of the color's own
/// alpha channel, matching canvas `globalAlpha` compositing.
pub trait Surface {
	/// Current size in pixels.
	fn size(&self) -> (f64, f64);

	/// Clear the whole surface to transparent.
	fn clear(&mut self);

	/// Fill a circle.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64);

	/// Outline a circle.
	fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, width: f64);

	/// Stroke a straight segment.
	fn stroke_line(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		color: Color,
		width: f64,
		alpha: f64,
	);

	/// Stroke a closed polygon.
	fn stroke_polygon(&mut self, points: &[(f64, f64)], color: Color, width: f64);

	/// Fill then stroke a closed polygon.
	fn fill_polygon(&mut self, points: &[(f64, f64)], fill: Color, stroke: Color, width: f64);

	/// Draw one line of text at `(x, y)`.
	fn fill_text(&mut self, text: &str, x: f64, y: f64, paint: &TextPaint, alpha: f64);
}

/// A [`Surface`] backed by an HTML canvas 2D context.
#[derive(Clone)]
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Wrap a canvas element. Returns `None` when no 2D context is available.
	pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;
		Some(Self { canvas, ctx })
	}

	/// The wrapped canvas element.
	pub fn canvas(&self) -> &HtmlCanvasElement {
		&self.canvas
	}

	/// The 2D context, for drawing outside the [`Surface`] calls.
	pub fn context(&self) -> &CanvasRenderingContext2d {
		&self.ctx
	}

	/// Resize the backing store. Clears the canvas.
	pub fn set_size(&self, width: f64, height: f64) {
		self.canvas.set_width(width.max(0.0) as u32);
		self.canvas.set_height(height.max(0.0) as u32);
	}

	/// Read back the RGBA pixel buffer of the whole canvas.
	pub fn read_pixels(&self) -> Option<Vec<u8>> {
		let (w, h) = self.size();
		if w < 1.0 || h < 1.0 {
			return None;
		}
		let image = self.ctx.get_image_data(0.0, 0.0, w, h).ok()?;
		Some(image.data().0)
	}

	fn trace_polygon(&self, points: &[(f64, f64)]) {
		self.ctx.begin_path();
		for (i, &(x, y)) in points.iter().enumerate() {
			if i == 0 {
				self.ctx.move_to(x, y);
			} else {
				self.ctx.line_to(x, y);
			}
		}
		self.ctx.close_path();
	}
}

impl Surface for CanvasSurface {
	fn size(&self) -> (f64, f64) {
		(self.canvas.width() as f64, self.canvas.height() as f64)
	}

	fn clear(&mut self) {
		let (w, h) = self.size();
		self.ctx.clear_rect(0.0, 0.0, w, h);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64) {
		self.ctx.save();
		self.ctx.set_global_alpha(alpha);
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.fill();
		self.ctx.restore();
	}

	fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, width: f64) {
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.stroke();
	}

	fn stroke_line(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		color: Color,
		width: f64,
		alpha: f64,
	) {
		self.ctx.save();
		self.ctx.set_global_alpha(alpha);
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.begin_path();
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.stroke();
		self.ctx.restore();
	}

	fn stroke_polygon(&mut self, points: &[(f64, f64)], color: Color, width: f64) {
		if points.is_empty() {
			return;
		}
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.trace_polygon(points);
		self.ctx.stroke();
	}

	fn fill_polygon(&mut self, points: &[(f64, f64)], fill: Color, stroke: Color, width: f64) {
		if points.is_empty() {
			return;
		}
		self.ctx.set_fill_style_str(&fill.to_css());
		self.ctx.set_stroke_style_str(&stroke.to_css());
		self.ctx.set_line_width(width);
		self.trace_polygon(points);
		self.ctx.fill();
		self.ctx.stroke();
	}

	fn fill_text(&mut self, text: &str, x: f64, y: f64, paint: &TextPaint, alpha: f64) {
		self.ctx.save();
		self.ctx.set_global_alpha(alpha);
		self.ctx.set_fill_style_str(&paint.color.to_css());
		self.ctx.set_font(&paint.font);
		self.ctx.set_text_align(paint.align.as_css());
		self.ctx.set_text_baseline(paint.baseline.as_css());
		if let Some((shadow, blur)) = paint.shadow {
			self.ctx.set_shadow_color(&shadow.to_css());
			self.ctx.set_shadow_blur(blur);
		}
		let _ = self.ctx.fill_text(text, x, y);
		self.ctx.restore();
	}
}

#[cfg(test)]
pub mod recording {
	//! In-memory surface that records every draw call.

	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	pub enum DrawCall {
		Clear,
		FillCircle { x: f64, y: f64, radius: f64, color: Color, alpha: f64 },
		StrokeCircle { x: f64, y: f64, radius: f64, color: Color, width: f64 },
		Line { from: (f64, f64), to: (f64, f64), color: Color, width: f64, alpha: f64 },
		StrokePolygon { points: Vec<(f64, f64)>, color: Color, width: f64 },
		FillPolygon { points: Vec<(f64, f64)>, fill: Color, stroke: Color, width: f64 },
		Text { text: String, x: f64, y: f64, paint: TextPaint, alpha: f64 },
	}

	pub struct RecordingSurface {
		pub width: f64,
		pub height: f64,
		pub calls: Vec<DrawCall>,
	}

	impl RecordingSurface {
		pub fn new(width: f64, height: f64) -> Self {
			Self { width, height, calls: Vec::new() }
		}

		pub fn take(&mut self) -> Vec<DrawCall> {
			std::mem::take(&mut self.calls)
		}

		pub fn circles(&self) -> usize {
			self.calls.iter().filter(|c| matches!(c, DrawCall::FillCircle { .. })).count()
		}

		pub fn lines(&self) -> impl Iterator<Item = &DrawCall> {
			self.calls.iter().filter(|c| matches!(c, DrawCall::Line { .. }))
		}

		pub fn texts(&self) -> impl Iterator<Item = &DrawCall> {
			self.calls.iter().filter(|c| matches!(c, DrawCall::Text { .. }))
		}
	}

	impl Surface for RecordingSurface {
		fn size(&self) -> (f64, f64) {
			(self.width, self.height)
		}

		fn clear(&mut self) {
			self.calls.push(DrawCall::Clear);
		}

		fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64) {
			self.calls.push(DrawCall::FillCircle { x, y, radius, color, alpha });
		}

		fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, width: f64) {
			self.calls.push(DrawCall::StrokeCircle { x, y, radius, color, width });
		}

		fn stroke_line(
			&mut self,
			from: (f64, f64),
			to: (f64, f64),
			color: Color,
			width: f64,
			alpha: f64,
		) {
			self.calls.push(DrawCall::Line { from, to, color, width, alpha });
		}

		fn stroke_polygon(&mut self, points: &[(f64, f64)], color: Color, width: f64) {
			self.calls.push(DrawCall::StrokePolygon { points: points.to_vec(), color, width });
		}

		fn fill_polygon(&mut self, points: &[(f64, f64)], fill: Color, stroke: Color, width: f64) {
			self.calls.push(DrawCall::FillPolygon {
				points: points.to_vec(),
				fill,
				stroke,
				width,
			});
		}

		fn fill_text(&mut self, text: &str, x: f64, y: f64, paint: &TextPaint, alpha: f64) {
			self.calls.push(DrawCall::Text {
				text: text.to_string(),
				x,
				y,
				paint: paint.clone(),
				alpha,
			});
		}
	}
}
