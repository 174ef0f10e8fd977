// Vitrine UI
//
// Animation engine and terminal renderer: the two particle backdrops, the
// typing banner, and the cell surface they all draw onto. Simulation state
// lives in per-field controller objects; nothing here touches the terminal
// directly except the ANSI serializer.

pub mod animation;
pub mod render;

pub use animation::{
    AnimationEngine, BurstField, DriftField, SceneFrame, Shape, TypingBanner,
};
pub use render::Surface;
