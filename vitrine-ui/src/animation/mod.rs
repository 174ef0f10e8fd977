// Vitrine STORY-004: Animation Engine
// Frame-based animation system for the portfolio backdrops

pub mod burst;
pub mod drift;
pub mod engine;
pub mod typing;

pub use burst::{BurstField, BurstParticle, BURST_EXTENT, BURST_PARTICLE_COUNT};
pub use drift::{DriftField, DriftParticle, DRIFT_PARTICLE_COUNT};
pub use engine::{AnimationEngine, PointerState, SceneFrame, Shape};
pub use typing::{Phase, TypingBanner};
