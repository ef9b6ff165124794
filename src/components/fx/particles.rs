//! Ambient "constellation" particles with hover bursts.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::surface::Surface;
use super::theme::{AmbientStyle, Hue};

/// A single floating particle.
#[derive(Clone, Debug)]
pub struct Particle {
	/// Position, px.
	pub x: f64,
	/// Position, px.
	pub y: f64,
	/// Velocity, px per frame.
	pub speed_x: f64,
	/// Velocity, px per frame.
	pub speed_y: f64,
	/// Radius, px.
	pub size: f64,
	/// Fill hue.
	pub hue: Hue,
	/// Opacity in `[0, 1]`.
	pub alpha: f64,
	/// Burst particles are removed once the clock passes this (ms).
	pub expires_at: Option<f64>,
}

impl Particle {
	/// Bounce off the surface edges, then integrate one frame of motion.
	///
	/// The bounds check uses the pre-update position so a particle that left
	/// the surface last frame is turned around exactly once.
	pub fn update(&mut self, width: f64, height: f64) {
		if self.x < 0.0 || self.x > width {
			self.speed_x = -self.speed_x;
		}
		if self.y < 0.0 || self.y > height {
			self.speed_y = -self.speed_y;
		}
		self.x += self.speed_x;
		self.y += self.speed_y;
	}

	/// Fill a circle at the current position.
	pub fn draw(&self, surface: &mut impl Surface) {
		surface.fill_circle(self.x, self.y, self.size, self.hue.color(), self.alpha);
	}

	/// Euclidean distance between centers.
	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Manages ambient background particles.
pub struct ParticleSystem {
	/// Live particles, ambient and burst.
	pub particles: Vec<Particle>,
	style: AmbientStyle,
	width: f64,
	height: f64,
	rng: SmallRng,
}

impl ParticleSystem {
	/// Create a populated system for a `width`×`height` surface.
	pub fn new(style: &AmbientStyle, width: f64, height: f64, seed: u64) -> Self {
		let mut system = Self {
			particles: Vec::new(),
			style: style.clone(),
			width,
			height,
			rng: SmallRng::seed_from_u64(seed),
		};
		system.init();
		system
	}

	/// Number of ambient particles for a surface, one per `area_per_particle` px².
	pub fn target_count(style: &AmbientStyle, width: f64, height: f64) -> usize {
		(width.max(0.0) * height.max(0.0) / style.area_per_particle).floor() as usize
	}

	/// Populate the collection at uniform-random positions.
	pub fn init(&mut self) {
		let count = Self::target_count(&self.style, self.width, self.height);
		self.particles.reserve(count);

		for _ in 0..count {
			let x = self.rng.r#gen::<f64>() * self.width;
			let y = self.rng.r#gen::<f64>() * self.height;
			let particle = self.spawn(x, y);
			self.particles.push(particle);
		}
	}

	fn spawn(&mut self, x: f64, y: f64) -> Particle {
		let rng = &mut self.rng;
		Particle {
			x,
			y,
			size: self.style.size.sample(rng),
			speed_x: self.style.speed.sample(rng),
			speed_y: self.style.speed.sample(rng),
			hue: Hue::random(rng),
			alpha: self.style.alpha.sample(rng),
			expires_at: None,
		}
	}

	/// Simulation bounds `(width, height)`.
	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Update particle positions
	pub fn update(&mut self) {
		let (w, h) = (self.width, self.height);
		for p in &mut self.particles {
			p.update(w, h);
		}
	}

	/// Draw every particle, without links.
	pub fn draw(&self, surface: &mut impl Surface) {
		for p in &self.particles {
			p.draw(surface);
		}
	}

	/// Link every particle to each other particle closer than the link distance.
	///
	/// Pairs are visited in both directions, so a link is stroked twice.
	pub fn connect(&self, surface: &mut impl Surface) {
		let style = &self.style;
		for (i, a) in self.particles.iter().enumerate() {
			for (j, b) in self.particles.iter().enumerate() {
				if i == j {
					continue;
				}
				let distance = a.distance_to(b);
				if distance >= style.link_distance {
					continue;
				}
				let t = (style.link_distance - distance) / style.link_distance;
				surface.stroke_line(
					(a.x, a.y),
					(b.x, b.y),
					style.link_color.with_alpha(t * style.link_stroke_alpha),
					style.link_width,
					t * style.link_alpha,
				);
			}
		}
	}

	/// Advance and render one frame.
	pub fn frame(&mut self, surface: &mut impl Surface) {
		surface.clear();
		self.update();
		self.draw(surface);
		self.connect(surface);
	}

	/// Rebuild for new surface dimensions, keeping density constant.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.particles.clear();
		self.init();
	}

	/// Inject a burst of fast, large, opaque particles at a point.
	///
	/// Burst particles expire `lifetime_ms` after `now_ms`; call
	/// [`prune_expired`](Self::prune_expired) from a timer to remove them.
	pub fn add_particle_effect(&mut self, x: f64, y: f64, now_ms: f64) {
		let burst = self.style.burst.clone();
		for _ in 0..burst.count {
			let mut particle = self.spawn(x, y);
			particle.speed_x = burst.speed.sample(&mut self.rng);
			particle.speed_y = burst.speed.sample(&mut self.rng);
			particle.size = burst.size.sample(&mut self.rng);
			particle.alpha = 1.0;
			particle.expires_at = Some(now_ms + burst.lifetime_ms);
			self.particles.push(particle);
		}
	}

	/// Delay after which a burst added now may be pruned.
	pub fn burst_lifetime_ms(&self) -> f64 {
		self.style.burst.lifetime_ms
	}

	/// Remove burst particles whose expiry has passed. Returns how many were removed.
	pub fn prune_expired(&mut self, now_ms: f64) -> usize {
		let before = self.particles.len();
		self.particles
			.retain(|p| p.expires_at.is_none_or(|deadline| now_ms < deadline));
		before - self.particles.len()
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;
	use crate::components::fx::surface::recording::{DrawCall, RecordingSurface};
	use crate::components::fx::theme::Theme;

	fn style() -> AmbientStyle {
		Theme::default().ambient
	}

	fn particle(x: f64, y: f64, speed_x: f64, speed_y: f64) -> Particle {
		Particle {
			x,
			y,
			speed_x,
			speed_y,
			size: 1.0,
			hue: Hue::Violet,
			alpha: 0.5,
			expires_at: None,
		}
	}

	#[test]
	fn init_on_800_by_600_spawns_32() {
		let ps = ParticleSystem::new(&style(), 800.0, 600.0, 1);
		assert_eq!(ps.particles.len(), 32);
		for p in &ps.particles {
			assert!((0.0..=800.0).contains(&p.x));
			assert!((0.0..=600.0).contains(&p.y));
			assert!(p.expires_at.is_none());
		}
	}

	#[test]
	fn tiny_surface_has_no_particles() {
		let ps = ParticleSystem::new(&style(), 100.0, 100.0, 1);
		assert!(ps.particles.is_empty());
	}

	#[test]
	fn resize_rebuilds_at_new_density() {
		let mut ps = ParticleSystem::new(&style(), 800.0, 600.0, 3);
		ps.add_particle_effect(10.0, 10.0, 0.0);
		ps.resize(1920.0, 1080.0);
		assert_eq!(ps.particles.len(), 138);
		assert_eq!(ps.size(), (1920.0, 1080.0));
		assert!(ps.particles.iter().all(|p| p.x <= 1920.0 && p.y <= 1080.0));
	}

	#[test]
	fn burst_adds_ten_at_point_and_expires_after_two_seconds() {
		let mut ps = ParticleSystem::new(&style(), 800.0, 600.0, 5);
		let ambient: Vec<(f64, f64)> = ps.particles.iter().map(|p| (p.x, p.y)).collect();

		ps.add_particle_effect(120.0, 80.0, 1_000.0);
		assert_eq!(ps.particles.len(), 42);
		for p in &ps.particles[32..] {
			assert_eq!((p.x, p.y), (120.0, 80.0));
			assert_eq!(p.alpha, 1.0);
			assert!((1.0..4.0).contains(&p.size));
			assert!(p.speed_x.abs() <= 1.5 && p.speed_y.abs() <= 1.5);
		}

		assert_eq!(ps.prune_expired(2_999.0), 0);
		assert_eq!(ps.particles.len(), 42);

		assert_eq!(ps.prune_expired(3_000.0), 10);
		let remaining: Vec<(f64, f64)> = ps.particles.iter().map(|p| (p.x, p.y)).collect();
		assert_eq!(remaining, ambient);
	}

	#[test]
	fn overlapping_bursts_expire_independently() {
		let mut ps = ParticleSystem::new(&style(), 0.0, 0.0, 5);
		ps.add_particle_effect(1.0, 1.0, 0.0);
		ps.add_particle_effect(2.0, 2.0, 500.0);
		assert_eq!(ps.prune_expired(2_000.0), 10);
		assert!(ps.particles.iter().all(|p| (p.x, p.y) == (2.0, 2.0)));
		assert_eq!(ps.prune_expired(2_500.0), 10);
		assert!(ps.particles.is_empty());
	}

	#[test]
	fn connect_skips_self_and_distant_particles() {
		let mut ps = ParticleSystem::new(&style(), 0.0, 0.0, 1);
		ps.particles = vec![
			particle(0.0, 0.0, 0.0, 0.0),
			particle(10.0, 0.0, 0.0, 0.0),
			particle(500.0, 500.0, 0.0, 0.0),
		];
		let mut surface = RecordingSurface::new(800.0, 600.0);
		ps.connect(&mut surface);

		let lines: Vec<&DrawCall> = surface.lines().collect();
		assert_eq!(lines.len(), 2);
		for line in lines {
			let DrawCall::Line { from, to, color, width, .. } = line else {
				unreachable!()
			};
			assert_ne!(from, to);
			assert_eq!(*width, 0.5);
			assert_eq!((color.r, color.g, color.b), (138, 43, 226));
		}
	}

	#[test]
	fn link_alpha_scales_with_distance() {
		let mut ps = ParticleSystem::new(&style(), 0.0, 0.0, 1);
		ps.particles = vec![particle(0.0, 0.0, 0.0, 0.0), particle(30.0, 40.0, 0.0, 0.0)];
		let mut surface = RecordingSurface::new(800.0, 600.0);
		ps.connect(&mut surface);

		let lines: Vec<&DrawCall> = surface.lines().collect();
		assert_eq!(lines.len(), 2);
		for line in lines {
			let DrawCall::Line { color, alpha, .. } = line else {
				unreachable!()
			};
			assert!((alpha - 0.5 * 0.2).abs() < 1e-9);
			assert!((color.a - 0.5 * 0.3).abs() < 1e-9);
		}
	}

	#[test]
	fn particles_at_link_distance_are_not_linked() {
		let mut ps = ParticleSystem::new(&style(), 0.0, 0.0, 1);
		ps.particles = vec![particle(0.0, 0.0, 0.0, 0.0), particle(60.0, 80.0, 0.0, 0.0)];
		let mut surface = RecordingSurface::new(800.0, 600.0);
		ps.connect(&mut surface);
		assert_eq!(surface.lines().count(), 0);
	}

	#[test]
	fn frame_clears_then_draws_every_particle() {
		let mut ps = ParticleSystem::new(&style(), 800.0, 600.0, 9);
		let mut surface = RecordingSurface::new(800.0, 600.0);
		ps.frame(&mut surface);
		assert_eq!(surface.calls.first(), Some(&DrawCall::Clear));
		assert_eq!(surface.circles(), 32);
	}

	proptest! {
		#[test]
		fn update_flips_out_of_bounds_velocity_once(
			x in -50.0..850.0f64,
			y in -50.0..650.0f64,
			vx in -2.0..2.0f64,
			vy in -2.0..2.0f64,
		) {
			let (w, h) = (800.0, 600.0);
			let mut p = particle(x, y, vx, vy);
			p.update(w, h);

			let expected_vx = if !(0.0..=w).contains(&x) { -vx } else { vx };
			let expected_vy = if !(0.0..=h).contains(&y) { -vy } else { vy };
			prop_assert_eq!(p.speed_x, expected_vx);
			prop_assert_eq!(p.speed_y, expected_vy);
			prop_assert_eq!(p.x, x + expected_vx);
			prop_assert_eq!(p.y, y + expected_vy);
		}

		#[test]
		fn init_count_matches_area_rule(w in 0u32..2000, h in 0u32..1500, seed in any::<u64>()) {
			let (w, h) = (w as f64, h as f64);
			let ps = ParticleSystem::new(&style(), w, h, seed);
			prop_assert_eq!(ps.particles.len(), (w * h / 15_000.0).floor() as usize);
			for p in &ps.particles {
				prop_assert!(p.x >= 0.0 && p.x <= w);
				prop_assert!(p.y >= 0.0 && p.y <= h);
			}
		}
	}
}
