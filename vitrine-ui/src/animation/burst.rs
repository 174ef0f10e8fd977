// Vitrine STORY-004: Radial-burst particle field
//
// Fixed-size badge scene: every particle originates at the center, flies
// outward, fades with age, and respawns in place when its lifetime runs
// out. The result is a continuous sparkle rather than a one-shot burst.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

use super::engine::{AnimationEngine, SceneFrame, Shape};

/// The burst scene is a fixed square; it never resizes
pub const BURST_EXTENT: f32 = 200.0;

/// Default particle population for the burst field
pub const BURST_PARTICLE_COUNT: usize = 40;

/// Pairs closer than this (in scene units) get a connection line
const LINK_RANGE: f32 = 35.0;

/// Velocity multiplier while the scene is hovered
const HOVER_MULTIPLIER: f32 = 1.5;

/// Peak fill alpha of a freshly spawned dot
const DOT_ALPHA_SCALE: f32 = 0.8;

/// Link lines render at half the distance-derived opacity
const LINK_ALPHA_SCALE: f32 = 0.5;

/// Dot color (teal) and link color (magenta)
const BURST_DOT_COLOR: (u8, u8, u8) = (0, 255, 204);
const BURST_LINK_COLOR: (u8, u8, u8) = (255, 0, 255);

/// One burst particle; reused across lifetimes, never reallocated
#[derive(Debug, Clone, PartialEq)]
pub struct BurstParticle {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub radius: f32,
    pub life: f32,
    pub max_life: f32,
}

/// Radial-burst particle field over a fixed 200x200 scene
pub struct BurstField {
    particles: Vec<BurstParticle>,
    hovered: bool,
    rng: StdRng,
    fps: u32,
    count: usize,
}

impl BurstField {
    pub fn new() -> Self {
        let mut field = Self {
            particles: Vec::new(),
            hovered: false,
            rng: StdRng::from_entropy(),
            fps: 60,
            count: BURST_PARTICLE_COUNT,
        };
        field.populate();
        field
    }

    /// Reseed the field deterministically (repopulates the particle set)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.populate();
        self
    }

    /// Set custom FPS (for testing or performance tuning)
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Set a custom particle count (repopulates the particle set)
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self.populate();
        self
    }

    /// The origin every particle bursts from
    pub fn center() -> (f32, f32) {
        (BURST_EXTENT / 2.0, BURST_EXTENT / 2.0)
    }

    fn populate(&mut self) {
        self.particles.clear();
        for _ in 0..self.count {
            let particle = Self::spawn(&mut self.rng);
            self.particles.push(particle);
        }
    }

    /// A brand-new particle: center origin, random direction and speed,
    /// lifetime rolled once and kept for every later respawn
    fn spawn(rng: &mut StdRng) -> BurstParticle {
        let (cx, cy) = Self::center();
        let angle = rng.gen::<f32>() * TAU;
        let speed = rng.gen::<f32>() * 1.5 + 0.5;
        let max_life = rng.gen::<f32>() * 60.0 + 40.0;
        BurstParticle {
            x: cx,
            y: cy,
            dx: angle.cos() * speed,
            dy: angle.sin() * speed,
            radius: rng.gen::<f32>() * 1.5 + 1.0,
            life: max_life,
            max_life,
        }
    }

    /// Respawn an exhausted particle in place: back to the exact center
    /// with a fresh direction and speed; max_life is kept
    fn respawn(p: &mut BurstParticle, rng: &mut StdRng) {
        let (cx, cy) = Self::center();
        let angle = rng.gen::<f32>() * TAU;
        let speed = rng.gen::<f32>() * 1.5 + 0.5;
        p.x = cx;
        p.y = cy;
        p.dx = angle.cos() * speed;
        p.dy = angle.sin() * speed;
        p.life = p.max_life;
    }

    /// Advance every particle one tick
    pub fn step(&mut self) {
        let scale = if self.hovered { HOVER_MULTIPLIER } else { 1.0 };
        for p in &mut self.particles {
            p.x += p.dx * scale;
            p.y += p.dy * scale;
            p.life -= 1.0;
            if p.life <= 0.0 {
                Self::respawn(p, &mut self.rng);
            }
        }
    }

    /// Link opacity for a pair at `distance`, clamped to [0, 1]
    pub fn link_alpha(distance: f32) -> f32 {
        ((1.0 - distance / LINK_RANGE) * LINK_ALPHA_SCALE).clamp(0.0, 1.0)
    }

    /// Dot fill alpha: proportional to the remaining-lifetime fraction
    pub fn dot_alpha(p: &BurstParticle) -> f32 {
        (p.life / p.max_life * DOT_ALPHA_SCALE).clamp(0.0, 1.0)
    }

    fn links(&self) -> Vec<Shape> {
        let mut links = Vec::new();
        for a in 0..self.particles.len() {
            for b in (a + 1)..self.particles.len() {
                let dx = self.particles[a].x - self.particles[b].x;
                let dy = self.particles[a].y - self.particles[b].y;
                // Fixed pixel threshold, deliberately not scaled to the
                // scene (the badge never resizes)
                let distance = (dx * dx + dy * dy).sqrt();
                if distance < LINK_RANGE {
                    links.push(Shape::Link {
                        x1: self.particles[a].x,
                        y1: self.particles[a].y,
                        x2: self.particles[b].x,
                        y2: self.particles[b].y,
                        alpha: Self::link_alpha(distance),
                        color: BURST_LINK_COLOR,
                    });
                }
            }
        }
        links
    }

    /// Hover state of the parent container: speeds particles up 1.5x
    pub fn set_hover(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn particles(&self) -> &[BurstParticle] {
        &self.particles
    }
}

impl Default for BurstField {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationEngine for BurstField {
    fn next_frame(&mut self) -> Option<SceneFrame> {
        self.step();

        let mut shapes = self.links();
        shapes.extend(self.particles.iter().map(|p| Shape::Dot {
            x: p.x,
            y: p.y,
            radius: p.radius,
            alpha: Self::dot_alpha(p),
            color: BURST_DOT_COLOR,
        }));

        Some(SceneFrame::new(BURST_EXTENT, BURST_EXTENT, shapes))
    }

    fn target_fps(&self) -> u32 {
        self.fps
    }

    fn reset(&mut self) {
        self.populate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_particles_start_at_center() {
        let field = BurstField::new().with_seed(1);
        let (cx, cy) = BurstField::center();
        for p in field.particles() {
            assert_eq!((p.x, p.y), (cx, cy));
            assert_eq!(p.life, p.max_life);
            assert!((40.0..100.0).contains(&p.max_life));
        }
    }

    #[test]
    fn test_lifetime_stays_in_range() {
        let mut field = BurstField::new().with_seed(2);
        for _ in 0..1_000 {
            field.step();
            for p in field.particles() {
                assert!(p.life >= 0.0 && p.life <= p.max_life);
            }
        }
    }

    #[test]
    fn test_exhausted_particle_respawns_at_exact_center() {
        let mut field = BurstField::new().with_seed(3);
        let (cx, cy) = BurstField::center();

        // Drive one particle to the brink, then step once
        field.particles[0].life = 1.0;
        let old_velocity = (field.particles[0].dx, field.particles[0].dy);
        let max_life = field.particles[0].max_life;
        field.step();

        let p = &field.particles[0];
        assert_eq!(p.x, cx);
        assert_eq!(p.y, cy);
        assert_eq!(p.life, max_life);
        assert_eq!(p.max_life, max_life);
        // Fresh direction/speed were rolled (negated-equal would be a
        // cosmic coincidence with a fixed seed)
        assert_ne!((p.dx, p.dy), old_velocity);
    }

    #[test]
    fn test_hover_scales_displacement() {
        let mut plain = BurstField::new().with_seed(4);
        let mut hovered = BurstField::new().with_seed(4);
        hovered.set_hover(true);
        let (cx, cy) = BurstField::center();

        plain.step();
        hovered.step();

        for (p, h) in plain.particles().iter().zip(hovered.particles()) {
            assert!(((h.x - cx) - (p.x - cx) * 1.5).abs() < 1e-4);
            assert!(((h.y - cy) - (p.y - cy) * 1.5).abs() < 1e-4);
        }
    }

    #[test]
    fn test_link_alpha_monotone() {
        let mut last = f32::INFINITY;
        for step in 0..100 {
            let distance = step as f32 * 0.5;
            let alpha = BurstField::link_alpha(distance);
            assert!(alpha <= last);
            assert!((0.0..=1.0).contains(&alpha));
            last = alpha;
        }
    }

    #[test]
    fn test_dot_alpha_fades_with_age() {
        let mut field = BurstField::new().with_seed(5);
        let fresh = BurstField::dot_alpha(&field.particles()[0]);
        field.step();
        let aged = BurstField::dot_alpha(&field.particles()[0]);
        assert!(aged < fresh);
        assert!(fresh <= 0.8);
    }

    #[test]
    fn test_first_frame_links_everyone() {
        // All particles share the center before the first step; after one
        // tick they are still within link range of each other
        let mut field = BurstField::new().with_seed(6).with_count(5);
        let frame = field.next_frame().unwrap();
        let links = frame
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::Link { .. }))
            .count();
        assert_eq!(links, 5 * 4 / 2);
    }

    #[test]
    fn test_particle_set_is_reused() {
        let mut field = BurstField::new().with_seed(7);
        let max_lives: Vec<f32> = field.particles().iter().map(|p| p.max_life).collect();
        for _ in 0..500 {
            field.step();
        }
        // Respawns keep each particle's original max_life
        let after: Vec<f32> = field.particles().iter().map(|p| p.max_life).collect();
        assert_eq!(max_lives, after);
        assert_eq!(field.particles().len(), BURST_PARTICLE_COUNT);
    }

    #[test]
    fn test_seeded_fields_agree() {
        let mut a = BurstField::new().with_seed(42);
        let mut b = BurstField::new().with_seed(42);
        for _ in 0..200 {
            a.step();
            b.step();
        }
        assert_eq!(a.particles(), b.particles());
    }
}
