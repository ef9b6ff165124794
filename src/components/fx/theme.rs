//! Visual theme configuration for the portfolio effects.
//!
//! Every tuned constant lives here, grouped by the effect that reads it. Values
//! are picked by eye; none of them are physically meaningful.

use rand::Rng;

/// RGBA color with CSS output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque white.
	pub const WHITE: Color = Color::rgb(255, 255, 255);

	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS color string: hex when opaque, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// The two particle hues used across every effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hue {
	/// `#8a2be2`
	Violet,
	/// `#4169e1`
	RoyalBlue,
}

impl Hue {
	/// Pick either hue with equal probability.
	pub fn random(rng: &mut impl Rng) -> Self {
		if rng.gen_bool(0.5) { Hue::Violet } else { Hue::RoyalBlue }
	}

	/// The hue as an opaque color.
	pub const fn color(self) -> Color {
		match self {
			Hue::Violet => Color::rgb(138, 43, 226),
			Hue::RoyalBlue => Color::rgb(65, 105, 225),
		}
	}
}

/// Half-open `[min, max)` range sampled uniformly.
#[derive(Clone, Copy, Debug)]
pub struct Span {
	/// Inclusive lower bound.
	pub min: f64,
	/// Exclusive upper bound.
	pub max: f64,
}

impl Span {
	/// Range `[min, max)`.
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Symmetric range `[-half, half)`.
	pub const fn symmetric(half: f64) -> Self {
		Self { min: -half, max: half }
	}

	/// Uniform sample from the range.
	pub fn sample(self, rng: &mut impl Rng) -> f64 {
		self.min + rng.r#gen::<f64>() * (self.max - self.min)
	}

	/// True when `value` lies in `[min, max)`.
	pub fn contains(self, value: f64) -> bool {
		value >= self.min && value < self.max
	}
}

/// Canvas text paint: font, fill, alignment and optional glow.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPaint {
	/// CSS font shorthand, e.g. `"14px Segoe UI"`.
	pub font: String,
	/// Fill color.
	pub color: Color,
	/// Horizontal anchor.
	pub align: TextAlign,
	/// Vertical anchor.
	pub baseline: TextBaseline,
	/// Shadow color and blur radius.
	pub shadow: Option<(Color, f64)>,
}

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
	/// Start at `x`.
	Left,
	/// Centered on `x`.
	Center,
}

impl TextAlign {
	/// Canvas `textAlign` keyword.
	pub fn as_css(self) -> &'static str {
		match self {
			TextAlign::Left => "left",
			TextAlign::Center => "center",
		}
	}
}

/// Vertical text anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
	/// Top edge at `y`.
	Top,
	/// Centered on `y`.
	Middle,
}

impl TextBaseline {
	/// Canvas `textBaseline` keyword.
	pub fn as_css(self) -> &'static str {
		match self {
			TextBaseline::Top => "top",
			TextBaseline::Middle => "middle",
		}
	}
}

/// Burst injected into an ambient system on hover.
#[derive(Clone, Debug)]
pub struct BurstStyle {
	/// Particles per burst
	pub count: usize,
	/// Per-axis velocity range (px/frame)
	pub speed: Span,
	/// Radius range, px.
	pub size: Span,
	/// Delay before burst particles are removed
	pub lifetime_ms: f64,
}

/// Ambient "constellation" background.
#[derive(Clone, Debug)]
pub struct AmbientStyle {
	/// Surface area (px²) per particle; controls density.
	pub area_per_particle: f64,
	/// Radius range, px.
	pub size: Span,
	/// Per-axis velocity range, px per frame.
	pub speed: Span,
	/// Opacity range.
	pub alpha: Span,
	/// Particles closer than this are linked.
	pub link_distance: f64,
	/// Link stroke width, px.
	pub link_width: f64,
	/// Link stroke color before alpha.
	pub link_color: Color,
	/// Peak global alpha of a link at distance zero
	pub link_alpha: f64,
	/// Peak stroke alpha of a link at distance zero
	pub link_stroke_alpha: f64,
	/// Hover burst settings.
	pub burst: BurstStyle,
}

/// Text dissolve effect.
#[derive(Clone, Debug)]
pub struct TextParticleStyle {
	/// Pixel grid stride used when sampling glyphs.
	pub stride: usize,
	/// Samples with alpha strictly above this spawn a particle.
	pub alpha_threshold: u8,
	/// Particle fill.
	pub color: Color,
	/// Radius range, px.
	pub size: Span,
	/// Per-axis velocity while dispersing.
	pub speed: Span,
	/// Life range each particle draws its full life from.
	pub life: Span,
	/// Life lost per frame.
	pub decay: f64,
	/// Fraction of the remaining offset closed per reforming frame.
	pub ease: f64,
	/// Font used when the source element has no computed font.
	pub fallback_font: String,
}

/// Skill radar chart.
#[derive(Clone, Debug)]
pub struct RadarStyle {
	/// Concentric grid rings.
	pub rings: usize,
	/// Skill value at the outer ring.
	pub max_value: f64,
	/// Space kept between the chart radius and the surface edge.
	pub margin: f64,
	/// Label distance beyond the outer ring.
	pub label_offset: f64,
	/// Axis label paint.
	pub label: TextPaint,
	/// Ring and spoke color.
	pub grid_color: Color,
	/// Ring and spoke width, px.
	pub grid_width: f64,
	/// Value area fill.
	pub area_fill: Color,
	/// Value area outline and point rings.
	pub area_stroke: Color,
	/// Value area outline width, px.
	pub area_width: f64,
	/// Skill point dot radius, px.
	pub dot_radius: f64,
	/// Skill point ring radius, px.
	pub ring_radius: f64,
	/// Pointer distance that triggers a highlight burst.
	pub hover_radius: f64,
}

/// Resume download notification.
#[derive(Clone, Debug)]
pub struct NotificationStyle {
	/// Particles per notification burst.
	pub particle_count: usize,
	/// Per-axis launch velocity.
	pub speed: Span,
	/// Radius range, px.
	pub size: Span,
	/// Downward acceleration, px per frame².
	pub gravity: f64,
	/// Particle life range.
	pub life: Span,
	/// Particle life lost per frame.
	pub decay: f64,
	/// Caption life when shown.
	pub caption_life: f64,
	/// Caption fade per frame, assumes ~60fps.
	pub caption_decay: f64,
	/// Caption is drawn this far above the burst origin.
	pub caption_offset: f64,
	/// Caption paint.
	pub caption: TextPaint,
}

/// Hover ripple span.
#[derive(Clone, Debug)]
pub struct RippleStyle {
	/// CSS class on the ripple span.
	pub class: &'static str,
	/// Time before the span is removed.
	pub duration_ms: i32,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Preset name.
	pub name: &'static str,
	/// Constellation background.
	pub ambient: AmbientStyle,
	/// Text dissolve.
	pub text: TextParticleStyle,
	/// Radar chart.
	pub radar: RadarStyle,
	/// Resume notification.
	pub notification: NotificationStyle,
	/// Hover ripple.
	pub ripple: RippleStyle,
}

impl Theme {
	/// Violet/royal-blue night theme used by the portfolio (default)
	pub fn default_theme() -> Self {
		let violet = Hue::Violet.color();
		Self {
			name: "default",
			ambient: AmbientStyle {
				area_per_particle: 15_000.0,
				size: Span::new(0.5, 2.5),
				speed: Span::symmetric(0.25),
				alpha: Span::new(0.2, 0.7),
				link_distance: 100.0,
				link_width: 0.5,
				link_color: violet,
				link_alpha: 0.2,
				link_stroke_alpha: 0.3,
				burst: BurstStyle {
					count: 10,
					speed: Span::symmetric(1.5),
					size: Span::new(1.0, 4.0),
					lifetime_ms: 2000.0,
				},
			},
			text: TextParticleStyle {
				stride: 4,
				alpha_threshold: 128,
				color: violet,
				size: Span::new(1.0, 3.0),
				speed: Span::symmetric(2.0),
				life: Span::new(0.5, 1.0),
				decay: 0.02,
				ease: 0.1,
				fallback_font: "bold 24px Segoe UI".into(),
			},
			radar: RadarStyle {
				rings: 10,
				max_value: 10.0,
				margin: 50.0,
				label_offset: 20.0,
				label: TextPaint {
					font: "14px Segoe UI".into(),
					color: Color::WHITE,
					align: TextAlign::Center,
					baseline: TextBaseline::Middle,
					shadow: None,
				},
				grid_color: violet.with_alpha(0.3),
				grid_width: 1.0,
				area_fill: violet.with_alpha(0.5),
				area_stroke: violet,
				area_width: 2.0,
				dot_radius: 5.0,
				ring_radius: 7.0,
				hover_radius: 30.0,
			},
			notification: NotificationStyle {
				particle_count: 20,
				speed: Span::symmetric(2.5),
				size: Span::new(1.0, 4.0),
				gravity: 0.2,
				life: Span::new(1.0, 2.0),
				decay: 0.03,
				caption_life: 3.0,
				caption_decay: 0.016,
				caption_offset: 50.0,
				caption: TextPaint {
					font: "16px Segoe UI".into(),
					color: Color::WHITE,
					align: TextAlign::Center,
					baseline: TextBaseline::Middle,
					shadow: Some((violet.with_alpha(0.8), 10.0)),
				},
			},
			ripple: RippleStyle {
				class: "ripple-effect",
				duration_ms: 600,
			},
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	#[test]
	fn css_output_drops_alpha_when_opaque() {
		assert_eq!(Hue::Violet.color().to_css(), "#8a2be2");
		assert_eq!(Hue::RoyalBlue.color().to_css(), "#4169e1");
		assert_eq!(
			Hue::Violet.color().with_alpha(0.3).to_css(),
			"rgba(138, 43, 226, 0.3)"
		);
	}

	#[test]
	fn span_samples_stay_in_range() {
		let mut rng = SmallRng::seed_from_u64(7);
		let span = Span::new(0.5, 2.5);
		for _ in 0..1000 {
			assert!(span.contains(span.sample(&mut rng)));
		}
	}

	#[test]
	fn both_hues_are_picked() {
		let mut rng = SmallRng::seed_from_u64(11);
		let hues: Vec<Hue> = (0..64).map(|_| Hue::random(&mut rng)).collect();
		assert!(hues.contains(&Hue::Violet));
		assert!(hues.contains(&Hue::RoyalBlue));
	}
}
