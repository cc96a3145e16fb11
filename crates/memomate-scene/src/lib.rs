//! Animation and terminal rendering for the memomate cityscape.
//!
//! The animator and appearance functions are pure: they map the elapsed
//! time, hover state and time of day onto transforms and colour tokens. The
//! painter projects the result onto a character grid and records where each
//! building landed so pointer positions can be mapped back to buildings.

pub mod animator;
mod appearance;
mod canvas;
mod chars;
mod color;
mod painter;
pub mod projection;
mod sky;

pub use animator::{AnimationFrame, AnimationState, Animator, BotState};
pub use appearance::{BuildingAppearance, SceneLighting};
pub use canvas::{Canvas, glyph_width, text_width};
pub use color::{fade, hsl_to_rgb};
pub use painter::{FrameInputs, HitRegion, PaintedCity, hit_test, paint_city};
pub use projection::{Camera, Projector, ScreenPoint};
