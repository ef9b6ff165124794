//! Skill radar chart and its particle highlight overlay.
//!
//! The chart is redrawn from scratch on every call and keeps no state of its
//! own. [`RadarOverlay`] pairs it with an ambient [`ParticleSystem`] and turns
//! pointer movement near a skill point into a highlight burst.

use std::f64::consts::{FRAC_PI_2, TAU};

use super::language::Language;
use super::particles::ParticleSystem;
use super::surface::Surface;
use super::theme::{AmbientStyle, RadarStyle};
use super::types::Skill;

/// Chart layout, returned so callers can hit-test skill points.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarGeometry {
	/// Chart center.
	pub center_x: f64,
	/// Chart center.
	pub center_y: f64,
	/// Outer ring radius, never negative.
	pub radius: f64,
	/// Angle between adjacent axes, radians.
	pub angle_step: f64,
	/// Value-scaled point of each skill, in table order.
	pub points: Vec<(f64, f64)>,
}

impl RadarGeometry {
	/// Lay out `skills` on a `width`×`height` surface.
	pub fn new(skills: &[Skill], width: f64, height: f64, style: &RadarStyle) -> Self {
		let angle_step = if skills.is_empty() {
			0.0
		} else {
			TAU / skills.len() as f64
		};
		let mut geometry = Self {
			center_x: width / 2.0,
			center_y: height / 2.0,
			radius: (width.min(height) / 2.0 - style.margin).max(0.0),
			angle_step,
			points: Vec::with_capacity(skills.len()),
		};
		geometry.points = skills
			.iter()
			.enumerate()
			.map(|(i, skill)| {
				let value = skill.value.clamp(0.0, style.max_value);
				geometry.polar(i, geometry.radius / style.max_value * value)
			})
			.collect();
		geometry
	}

	/// Angle of axis `i`; axis 0 points straight up.
	pub fn axis_angle(&self, i: usize) -> f64 {
		i as f64 * self.angle_step - FRAC_PI_2
	}

	/// Point at distance `r` from the center along axis `i`.
	pub fn polar(&self, i: usize, r: f64) -> (f64, f64) {
		let angle = self.axis_angle(i);
		(self.center_x + angle.cos() * r, self.center_y + angle.sin() * r)
	}

	/// Skill points within `radius` of `(x, y)`.
	pub fn points_near(&self, x: f64, y: f64, radius: f64) -> impl Iterator<Item = (f64, f64)> + '_ {
		self.points.iter().copied().filter(move |&(px, py)| {
			let (dx, dy) = (x - px, y - py);
			(dx * dx + dy * dy).sqrt() < radius
		})
	}
}

/// Draw the complete chart and return its geometry.
pub fn draw_radar_chart(
	surface: &mut impl Surface,
	skills: &[Skill],
	language: Language,
	style: &RadarStyle,
) -> RadarGeometry {
	let (width, height) = surface.size();
	let geometry = RadarGeometry::new(skills, width, height, style);
	let n = skills.len();

	surface.clear();
	if n == 0 {
		return geometry;
	}

	for ring in 1..=style.rings {
		let r = geometry.radius / style.rings as f64 * ring as f64;
		let ring_points: Vec<(f64, f64)> = (0..n).map(|i| geometry.polar(i, r)).collect();
		surface.stroke_polygon(&ring_points, style.grid_color, style.grid_width);
	}

	let center = (geometry.center_x, geometry.center_y);
	for (i, skill) in skills.iter().enumerate() {
		surface.stroke_line(
			center,
			geometry.polar(i, geometry.radius),
			style.grid_color,
			style.grid_width,
			1.0,
		);
		let (lx, ly) = geometry.polar(i, geometry.radius + style.label_offset);
		surface.fill_text(language.label(skill), lx, ly, &style.label, 1.0);
	}

	surface.fill_polygon(
		&geometry.points,
		style.area_fill,
		style.area_stroke,
		style.area_width,
	);

	for &(x, y) in &geometry.points {
		surface.fill_circle(x, y, style.dot_radius, style.label.color, 1.0);
		surface.stroke_circle(x, y, style.ring_radius, style.area_stroke, style.area_width);
	}

	geometry
}

/// Radar chart with an ambient particle layer and hover bursts.
pub struct RadarOverlay {
	skills: Vec<Skill>,
	language: Language,
	style: RadarStyle,
	geometry: RadarGeometry,
	/// Highlight layer drawn over the chart.
	pub particles: ParticleSystem,
}

impl RadarOverlay {
	/// Lay out the chart and seed its particle layer.
	pub fn new(
		skills: Vec<Skill>,
		language: Language,
		style: &RadarStyle,
		ambient: &AmbientStyle,
		width: f64,
		height: f64,
		seed: u64,
	) -> Self {
		Self {
			geometry: RadarGeometry::new(&skills, width, height, style),
			particles: ParticleSystem::new(ambient, width, height, seed),
			skills,
			language,
			style: style.clone(),
		}
	}

	/// Layout from the latest redraw.
	pub fn geometry(&self) -> &RadarGeometry {
		&self.geometry
	}

	/// Language of the drawn labels.
	pub fn language(&self) -> Language {
		self.language
	}

	/// Redraw the chart alone, refreshing the cached geometry.
	pub fn redraw(&mut self, surface: &mut impl Surface) {
		self.geometry = draw_radar_chart(surface, &self.skills, self.language, &self.style);
	}

	/// Relabel the axes and redraw.
	pub fn set_language(&mut self, language: Language, surface: &mut impl Surface) {
		self.language = language;
		self.redraw(surface);
	}

	/// Follow a surface resize: repopulate particles and redraw.
	pub fn resize(&mut self, surface: &mut impl Surface) {
		let (width, height) = surface.size();
		self.particles.resize(width, height);
		self.redraw(surface);
	}

	/// Skill points within hover range of the pointer.
	pub fn hit_test(&self, x: f64, y: f64) -> Vec<(f64, f64)> {
		self.geometry.points_near(x, y, self.style.hover_radius).collect()
	}

	/// Burst at every skill point near the pointer. Returns how many bursts fired.
	pub fn pointer_move(&mut self, x: f64, y: f64, now_ms: f64) -> usize {
		let hits = self.hit_test(x, y);
		for &(px, py) in &hits {
			self.particles.add_particle_effect(px, py, now_ms);
		}
		hits.len()
	}

	/// Chart plus one step of the particle layer.
	pub fn frame(&mut self, surface: &mut impl Surface) {
		self.redraw(surface);
		self.particles.update();
		self.particles.draw(surface);
		self.particles.connect(surface);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::fx::surface::recording::{DrawCall, RecordingSurface};
	use crate::components::fx::theme::Theme;
	use crate::components::fx::types::SkillTable;

	fn skills() -> Vec<Skill> {
		SkillTable::default().skills
	}

	fn close(a: (f64, f64), b: (f64, f64)) -> bool {
		(a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
	}

	#[test]
	fn value_eight_on_radius_150_sits_120_out() {
		let style = Theme::default().radar;
		let geometry = RadarGeometry::new(&skills(), 400.0, 400.0, &style);
		assert_eq!(geometry.radius, 150.0);
		// First axis points up.
		assert!(close(geometry.points[0], (200.0, 80.0)));

		let (x, y) = geometry.points[3];
		let r = ((x - 200.0).powi(2) + (y - 200.0).powi(2)).sqrt();
		assert!((r - 120.0).abs() < 1e-9);
		assert!((geometry.axis_angle(3) - (3.0 * TAU / 6.0 - FRAC_PI_2)).abs() < 1e-12);
	}

	#[test]
	fn render_is_pure() {
		let style = Theme::default().radar;
		let mut a = RecordingSurface::new(500.0, 400.0);
		let mut b = RecordingSurface::new(500.0, 400.0);
		let ga = draw_radar_chart(&mut a, &skills(), Language::En, &style);
		let gb = draw_radar_chart(&mut b, &skills(), Language::En, &style);
		assert_eq!(ga, gb);
		assert_eq!(a.calls, b.calls);

		// Redrawing on the same surface starts with a clear and repeats the same calls.
		let first = a.take();
		draw_radar_chart(&mut a, &skills(), Language::En, &style);
		assert_eq!(first, a.calls);
		assert_eq!(first[0], DrawCall::Clear);
	}

	#[test]
	fn draws_rings_spokes_labels_area_and_markers() {
		let style = Theme::default().radar;
		let mut surface = RecordingSurface::new(400.0, 400.0);
		draw_radar_chart(&mut surface, &skills(), Language::Zh, &style);

		let rings = surface
			.calls
			.iter()
			.filter(|c| matches!(c, DrawCall::StrokePolygon { points, .. } if points.len() == 6))
			.count();
		assert_eq!(rings, 10);
		assert_eq!(surface.lines().count(), 6);
		assert_eq!(surface.circles(), 6);
		let labels: Vec<String> = surface
			.texts()
			.map(|c| match c {
				DrawCall::Text { text, .. } => text.clone(),
				_ => unreachable!(),
			})
			.collect();
		assert_eq!(labels[0], "AI产品设计");
		assert_eq!(labels.len(), 6);
		assert!(
			surface
				.calls
				.iter()
				.any(|c| matches!(c, DrawCall::FillPolygon { points, .. } if points.len() == 6))
		);
	}

	#[test]
	fn language_switch_changes_only_labels() {
		let style = Theme::default().radar;
		let mut zh = RecordingSurface::new(400.0, 400.0);
		let mut en = RecordingSurface::new(400.0, 400.0);
		let gz = draw_radar_chart(&mut zh, &skills(), Language::Zh, &style);
		let ge = draw_radar_chart(&mut en, &skills(), Language::En, &style);
		assert_eq!(gz, ge);
		let en_labels: Vec<&DrawCall> = en.texts().collect();
		assert!(matches!(en_labels[1], DrawCall::Text { text, .. } if text == "Requirements Mining"));
	}

	#[test]
	fn small_surface_clamps_radius() {
		let style = Theme::default().radar;
		let geometry = RadarGeometry::new(&skills(), 60.0, 60.0, &style);
		assert_eq!(geometry.radius, 0.0);
		assert!(geometry.points.iter().all(|&p| close(p, (30.0, 30.0))));
	}

	#[test]
	fn empty_table_only_clears() {
		let style = Theme::default().radar;
		let mut surface = RecordingSurface::new(400.0, 400.0);
		let geometry = draw_radar_chart(&mut surface, &[], Language::Zh, &style);
		assert!(geometry.points.is_empty());
		assert_eq!(surface.calls, vec![DrawCall::Clear]);
	}

	#[test]
	fn pointer_near_point_bursts_there() {
		let theme = Theme::default();
		let mut overlay =
			RadarOverlay::new(skills(), Language::Zh, &theme.radar, &theme.ambient, 400.0, 400.0, 4);
		let ambient = overlay.particles.particles.len();
		assert_eq!(ambient, 10);

		assert_eq!(overlay.pointer_move(0.0, 0.0, 0.0), 0);
		assert_eq!(overlay.particles.particles.len(), ambient);

		assert_eq!(overlay.pointer_move(210.0, 90.0, 0.0), 1);
		assert_eq!(overlay.particles.particles.len(), ambient + 10);
		let burst = &overlay.particles.particles[ambient..];
		assert!(burst.iter().all(|p| close((p.x, p.y), (200.0, 80.0))));

		overlay.particles.prune_expired(2_000.0);
		assert_eq!(overlay.particles.particles.len(), ambient);
	}

	#[test]
	fn set_language_redraws_with_new_labels() {
		let theme = Theme::default();
		let mut overlay =
			RadarOverlay::new(skills(), Language::Zh, &theme.radar, &theme.ambient, 400.0, 400.0, 4);
		let mut surface = RecordingSurface::new(400.0, 400.0);
		overlay.set_language(Language::En, &mut surface);
		assert_eq!(overlay.language(), Language::En);
		assert!(matches!(surface.texts().next(), Some(DrawCall::Text { text, .. }) if text == "AI Product Design"));
	}

	#[test]
	fn resize_follows_surface() {
		let theme = Theme::default();
		let mut overlay =
			RadarOverlay::new(skills(), Language::Zh, &theme.radar, &theme.ambient, 400.0, 400.0, 4);
		let mut surface = RecordingSurface::new(600.0, 500.0);
		overlay.resize(&mut surface);
		assert_eq!(overlay.geometry().center_x, 300.0);
		assert_eq!(overlay.geometry().radius, 200.0);
		assert_eq!(overlay.particles.particles.len(), 20);
	}
}
