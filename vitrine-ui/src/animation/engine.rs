// Vitrine STORY-004: AnimationEngine trait and core types
use std::time::{Duration, Instant};

/// A single drawable primitive, in scene-space coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled circle for one particle
    Dot {
        x: f32,
        y: f32,
        radius: f32,
        alpha: f32,
        color: (u8, u8, u8),
    },
    /// Connection line between two nearby particles
    Link {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        alpha: f32,
        color: (u8, u8, u8),
    },
}

/// Represents a single frame of animation as a scene-space draw list
#[derive(Debug, Clone)]
pub struct SceneFrame {
    /// Scene extents in scene units (not terminal cells)
    pub width: f32,
    pub height: f32,
    /// Shapes to paint, in order (links under dots)
    pub shapes: Vec<Shape>,
    /// Frame timestamp for FPS calculation
    pub timestamp: Instant,
}

impl SceneFrame {
    pub fn new(width: f32, height: f32, shapes: Vec<Shape>) -> Self {
        Self {
            width,
            height,
            shapes,
            timestamp: Instant::now(),
        }
    }
}

/// Pointer position in scene space.
///
/// Tracked with a configurable interaction radius; the fields only consult
/// presence/absence today, never the coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerState {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub radius: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            radius: 150.0,
        }
    }
}

impl PointerState {
    /// Record a pointer position
    pub fn set(&mut self, x: f32, y: f32) {
        self.x = Some(x);
        self.y = Some(y);
    }

    /// Forget the pointer (it left the scene)
    pub fn clear(&mut self) {
        self.x = None;
        self.y = None;
    }

    pub fn is_present(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }
}

/// Frame-based animation interface
pub trait AnimationEngine: Send {
    /// Generate the next frame of animation
    /// Returns None if animation is complete (for finite animations)
    fn next_frame(&mut self) -> Option<SceneFrame>;

    /// Get the target FPS for this animation
    fn target_fps(&self) -> u32;

    /// Get the frame duration based on target FPS
    fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps() as f64)
    }

    /// Reset animation to initial state
    fn reset(&mut self);

    /// Check if animation should degrade to lower FPS based on CPU usage
    /// Default implementation always returns target FPS
    fn adaptive_fps(&self, _cpu_usage_percent: f32) -> u32 {
        let target = self.target_fps();
        // Graceful degradation: drop to 30fps if CPU >80%
        if _cpu_usage_percent > 80.0 && target > 30 {
            30
        } else {
            target
        }
    }
}
