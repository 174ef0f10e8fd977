// Vitrine STORY-004: Terminal rendering
// Scene-space draw lists to ANSI character grids

pub mod surface;

pub use surface::{Cell, Surface};
