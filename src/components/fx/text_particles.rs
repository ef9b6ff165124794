//! Text dissolve effect: glyph pixels become particles that scatter and regroup.

use std::ops::ControlFlow;

use rand::Rng;

use super::surface::Surface;
use super::theme::{Color, TextParticleStyle};

/// Lifecycle stage of a text particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	/// Resting on its anchor, not drawn.
	Idle,
	/// Drifting away while fading.
	Dispersing,
	/// Easing back to the anchor while fading.
	Reforming,
	/// Back on the anchor with no life left.
	Settled,
}

/// A particle anchored to one sampled glyph pixel.
#[derive(Clone, Debug)]
pub struct TextParticle {
	/// Current position, canvas px.
	pub x: f64,
	/// Position, px.
	pub y: f64,
	origin: (f64, f64),
	/// Drift per frame while dispersing.
	pub speed_x: f64,
	/// Drift per frame while dispersing.
	pub speed_y: f64,
	/// Fill color.
	pub color: Color,
	/// Radius in px.
	pub size: f64,
	phase: Phase,
	life: f64,
	max_life: f64,
}

impl TextParticle {
	/// A resting particle anchored at `(x, y)`.
	pub fn new(x: f64, y: f64, style: &TextParticleStyle, rng: &mut impl Rng) -> Self {
		let max_life = style.life.sample(rng);
		Self {
			x,
			y,
			origin: (x, y),
			speed_x: style.speed.sample(rng),
			speed_y: style.speed.sample(rng),
			color: style.color,
			size: style.size.sample(rng),
			phase: Phase::Idle,
			life: max_life,
			max_life,
		}
	}

	/// Sampled glyph pixel the particle regroups on.
	pub fn origin(&self) -> (f64, f64) {
		self.origin
	}

	/// Current lifecycle stage.
	pub fn phase(&self) -> Phase {
		self.phase
	}

	/// Remaining life.
	pub fn life(&self) -> f64 {
		self.life
	}

	/// Life at the start of each phase.
	pub fn max_life(&self) -> f64 {
		self.max_life
	}

	/// Opacity, always `life / max_life`.
	pub fn alpha(&self) -> f64 {
		self.life / self.max_life
	}

	/// Begin dispersing from the anchor at full life.
	pub fn start_explosion(&mut self) {
		(self.x, self.y) = self.origin;
		self.life = self.max_life;
		self.phase = Phase::Dispersing;
	}

	/// Return to rest on the anchor.
	pub fn reset(&mut self) {
		(self.x, self.y) = self.origin;
		self.life = self.max_life;
		self.phase = Phase::Idle;
	}

	/// One step: drift while dispersing, ease home while reforming.
	pub fn update(&mut self, decay: f64, ease: f64) {
		match self.phase {
			Phase::Idle | Phase::Settled => {}
			Phase::Dispersing => {
				self.x += self.speed_x;
				self.y += self.speed_y;
				self.life -= decay;
				if self.life <= 0.0 {
					self.phase = Phase::Reforming;
					self.life = self.max_life;
				}
			}
			Phase::Reforming => {
				self.x += (self.origin.0 - self.x) * ease;
				self.y += (self.origin.1 - self.y) * ease;
				self.life -= decay;
				if self.life <= 0.0 {
					self.phase = Phase::Settled;
					self.life = 0.0;
					(self.x, self.y) = self.origin;
				}
			}
		}
	}

	/// Fill a circle at the current position, faded by [`alpha`](Self::alpha).
	pub fn draw(&self, surface: &mut impl Surface) {
		surface.fill_circle(self.x, self.y, self.size, self.color, self.alpha());
	}
}

/// Particles sampled from rendered text, plus the animation flag.
pub struct TextParticleField {
	/// One particle per sampled pixel, in row-major sample order.
	pub particles: Vec<TextParticle>,
	decay: f64,
	ease: f64,
	animating: bool,
}

impl TextParticleField {
	/// Sample an RGBA buffer on the style's pixel grid.
	///
	/// Each sample whose alpha exceeds the threshold spawns one particle at that
	/// pixel. A buffer shorter than `width * height * 4` is read as far as it goes.
	pub fn sample(
		rgba: &[u8],
		width: usize,
		height: usize,
		style: &TextParticleStyle,
		rng: &mut impl Rng,
	) -> Self {
		let stride = style.stride.max(1);
		let mut particles = Vec::new();

		for y in (0..height).step_by(stride) {
			for x in (0..width).step_by(stride) {
				let alpha_index = (y * width + x) * 4 + 3;
				match rgba.get(alpha_index) {
					Some(&alpha) if alpha > style.alpha_threshold => {
						particles.push(TextParticle::new(x as f64, y as f64, style, rng));
					}
					_ => {}
				}
			}
		}

		Self {
			particles,
			decay: style.decay,
			ease: style.ease,
			animating: false,
		}
	}

	/// True between [`start`](Self::start) and the final settled frame.
	pub fn is_animating(&self) -> bool {
		self.animating
	}

	/// Start dispersing. Returns `false` when an animation is already running.
	pub fn start(&mut self) -> bool {
		if self.animating {
			return false;
		}
		self.animating = true;
		for p in &mut self.particles {
			p.start_explosion();
		}
		true
	}

	/// Stop immediately and put every particle back at rest.
	pub fn cancel(&mut self) {
		self.animating = false;
		for p in &mut self.particles {
			p.reset();
		}
	}

	/// Advance and draw one frame; breaks once every particle has settled.
	pub fn frame(&mut self, surface: &mut impl Surface) -> ControlFlow<()> {
		if !self.animating {
			return ControlFlow::Break(());
		}
		surface.clear();

		let mut all_settled = true;
		for p in &mut self.particles {
			p.update(self.decay, self.ease);
			p.draw(surface);
			all_settled &= p.phase() == Phase::Settled;
		}

		if all_settled {
			self.cancel();
			ControlFlow::Break(())
		} else {
			ControlFlow::Continue(())
		}
	}
}
