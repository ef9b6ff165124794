//! One-shot resume notification: a gravity burst with a fading caption.

use std::ops::ControlFlow;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::surface::Surface;
use super::theme::{Hue, NotificationStyle};

/// A falling burst particle.
#[derive(Clone, Debug)]
pub struct ResumeParticle {
	/// Position, px.
	pub x: f64,
	/// Position, px.
	pub y: f64,
	/// Velocity, px per frame.
	pub speed_x: f64,
	/// Velocity, px per frame. Gravity accumulates here.
	pub speed_y: f64,
	/// Radius, px.
	pub size: f64,
	/// Fill hue.
	pub hue: Hue,
	/// Added to `speed_y` every frame.
	pub gravity: f64,
	life: f64,
	max_life: f64,
}

impl ResumeParticle {
	/// A particle bursting from `(x, y)` with full life.
	pub fn new(x: f64, y: f64, style: &NotificationStyle, rng: &mut impl Rng) -> Self {
		let max_life = style.life.sample(rng);
		Self {
			x,
			y,
			speed_x: style.speed.sample(rng),
			speed_y: style.speed.sample(rng),
			size: style.size.sample(rng),
			hue: Hue::random(rng),
			gravity: style.gravity,
			life: max_life,
			max_life,
		}
	}

	/// Opacity, clamped at zero.
	pub fn alpha(&self) -> f64 {
		(self.life / self.max_life).max(0.0)
	}

	/// Apply gravity, move, then lose `decay` life.
	pub fn update(&mut self, decay: f64) {
		self.speed_y += self.gravity;
		self.x += self.speed_x;
		self.y += self.speed_y;
		self.life -= decay;
	}

	/// Fill a circle at the current position.
	pub fn draw(&self, surface: &mut impl Surface) {
		surface.fill_circle(self.x, self.y, self.size, self.hue.color(), self.alpha());
	}

	/// True once life is used up.
	pub fn is_dead(&self) -> bool {
		self.life <= 0.0
	}
}

/// Caption text and where its burst started.
#[derive(Clone, Debug, PartialEq)]
struct Caption {
	text: String,
	x: f64,
	y: f64,
}

/// Burst particles plus the fading caption.
pub struct ResumeNotification {
	/// Live burst particles.
	pub particles: Vec<ResumeParticle>,
	caption: Option<Caption>,
	life: f64,
	visible: bool,
	style: NotificationStyle,
	rng: SmallRng,
}

impl ResumeNotification {
	/// A hidden notification with its own seeded RNG.
	pub fn new(style: &NotificationStyle, seed: u64) -> Self {
		Self {
			particles: Vec::new(),
			caption: None,
			life: 0.0,
			visible: false,
			style: style.clone(),
			rng: SmallRng::seed_from_u64(seed),
		}
	}

	/// Caption life remaining.
	pub fn life(&self) -> f64 {
		self.life
	}

	/// True while the caption is still fading.
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	/// True while there is anything left to draw.
	pub fn is_active(&self) -> bool {
		self.visible || !self.particles.is_empty()
	}

	/// Show `text` above `(x, y)` and spawn a burst there.
	///
	/// Re-showing while active replaces the caption and adds to the burst.
	pub fn show(&mut self, x: f64, y: f64, text: &str) {
		self.visible = true;
		self.caption = Some(Caption {
			text: text.to_string(),
			x,
			y,
		});
		self.life = self.style.caption_life;

		for _ in 0..self.style.particle_count {
			let particle = ResumeParticle::new(x, y, &self.style, &mut self.rng);
			self.particles.push(particle);
		}
	}

	/// Advance and draw one frame; breaks once nothing is left to draw.
	pub fn frame(&mut self, surface: &mut impl Surface) -> ControlFlow<()> {
		if !self.is_active() {
			return ControlFlow::Break(());
		}
		surface.clear();

		let decay = self.style.decay;
		self.particles.retain_mut(|p| {
			p.update(decay);
			p.draw(surface);
			!p.is_dead()
		});

		match &self.caption {
			Some(caption) if self.life > 0.0 => {
				surface.fill_text(
					&caption.text,
					caption.x,
					caption.y - self.style.caption_offset,
					&self.style.caption,
					self.life / self.style.caption_life,
				);
				self.life -= self.style.caption_decay;
			}
			_ => self.visible = false,
		}

		if self.is_active() {
			ControlFlow::Continue(())
		} else {
			ControlFlow::Break(())
		}
	}
}
