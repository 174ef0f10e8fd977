// Vitrine STORY-004: Drifting particle field
//
// Full-section backdrop: particles drift with small random velocities,
// reflect off the scene edges, and are joined by connection lines whose
// opacity falls off with squared distance. The whole set is rebuilt when
// the scene is resized.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::engine::{AnimationEngine, PointerState, SceneFrame, Shape};

/// Default particle population for the drifting field
pub const DRIFT_PARTICLE_COUNT: usize = 80;

/// Constant fill alpha for drifting dots
const DOT_ALPHA: f32 = 0.5;

/// Divisor for squared-distance falloff of link opacity
const LINK_FALLOFF: f32 = 20_000.0;

/// Backdrop accent color (teal)
const DRIFT_COLOR: (u8, u8, u8) = (0, 255, 204);

/// One drifting particle
#[derive(Debug, Clone, PartialEq)]
pub struct DriftParticle {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub radius: f32,
    pub color: (u8, u8, u8),
}

/// Drifting particle field sized to its containing section
pub struct DriftField {
    width: f32,
    height: f32,
    particles: Vec<DriftParticle>,
    pointer: PointerState,
    rng: StdRng,
    fps: u32,
    count: usize,
}

impl DriftField {
    /// Create a field covering `width` x `height` scene units, populated
    /// with the default particle count.
    pub fn new(width: f32, height: f32) -> Self {
        let mut field = Self {
            width,
            height,
            particles: Vec::new(),
            pointer: PointerState::default(),
            rng: StdRng::from_entropy(),
            fps: 60,
            count: DRIFT_PARTICLE_COUNT,
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

    /// Discard all particles and spawn a fresh set inside the current bounds
    fn populate(&mut self) {
        self.particles.clear();
        for _ in 0..self.count {
            let radius = self.rng.gen::<f32>() * 2.0 + 1.0;
            let x_span = (self.width - radius * 2.0).max(0.0);
            let y_span = (self.height - radius * 2.0).max(0.0);
            let x = self.rng.gen::<f32>() * x_span + radius;
            let y = self.rng.gen::<f32>() * y_span + radius;
            let dx = self.rng.gen::<f32>() * 0.4 - 0.2;
            let dy = self.rng.gen::<f32>() * 0.4 - 0.2;
            self.particles.push(DriftParticle {
                x: x.min(self.width),
                y: y.min(self.height),
                dx,
                dy,
                radius,
                color: DRIFT_COLOR,
            });
        }
    }

    /// Advance every particle one tick, reflecting at the scene edges.
    ///
    /// The velocity component is negated when the integration step would
    /// cross 0 or the extent on that axis; it is never clamped, so the
    /// position stays inside the bounds for any speed below half the
    /// extent.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            if p.x + p.dx > self.width || p.x + p.dx < 0.0 {
                p.dx = -p.dx;
            }
            if p.y + p.dy > self.height || p.y + p.dy < 0.0 {
                p.dy = -p.dy;
            }
            p.x += p.dx;
            p.y += p.dy;
        }
    }

    /// Link opacity for a pair at `squared_distance`, clamped to [0, 1]
    pub fn link_alpha(squared_distance: f32) -> f32 {
        (1.0 - squared_distance / LINK_FALLOFF).clamp(0.0, 1.0)
    }

    /// Squared-distance threshold under which a pair gets a link.
    ///
    /// Proportional to the scene size, so larger sections keep a similar
    /// visual density.
    pub fn link_threshold(&self) -> f32 {
        (self.width / 7.0) * (self.height / 7.0)
    }

    /// Connection lines for the current particle positions
    fn links(&self) -> Vec<Shape> {
        let threshold = self.link_threshold();
        let mut links = Vec::new();
        for a in 0..self.particles.len() {
            for b in (a + 1)..self.particles.len() {
                let dx = self.particles[a].x - self.particles[b].x;
                let dy = self.particles[a].y - self.particles[b].y;
                let d2 = dx * dx + dy * dy;
                if d2 < threshold {
                    links.push(Shape::Link {
                        x1: self.particles[a].x,
                        y1: self.particles[a].y,
                        x2: self.particles[b].x,
                        y2: self.particles[b].y,
                        alpha: Self::link_alpha(d2),
                        color: DRIFT_COLOR,
                    });
                }
            }
        }
        links
    }

    /// Resize the scene and rebuild the particle set from scratch.
    /// Old particle identities are not preserved.
    pub fn resize(&mut self, width: f32, height: f32) {
        log::debug!("drift field resized to {}x{}, repopulating", width, height);
        self.width = width;
        self.height = height;
        self.populate();
    }

    /// Record the scene-space pointer position (tracked, not consulted)
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer.set(x, y);
    }

    /// Forget the pointer position
    pub fn clear_pointer(&mut self) {
        self.pointer.clear();
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn particles(&self) -> &[DriftParticle] {
        &self.particles
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

impl AnimationEngine for DriftField {
    fn next_frame(&mut self) -> Option<SceneFrame> {
        self.step();

        // Links under dots, matching the original paint order
        let mut shapes = self.links();
        shapes.extend(self.particles.iter().map(|p| Shape::Dot {
            x: p.x,
            y: p.y,
            radius: p.radius,
            alpha: DOT_ALPHA,
            color: p.color,
        }));

        Some(SceneFrame::new(self.width, self.height, shapes))
    }

    fn target_fps(&self) -> u32 {
        self.fps
    }

    fn reset(&mut self) {
        self.populate();
    }
}
