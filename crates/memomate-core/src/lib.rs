//! Core types for the memomate cityscape: the buildings, the hover/selection
//! state machine and the day/night cycle.

mod catalog;
mod entity;
mod interaction;
mod layout;
mod time_of_day;

pub use catalog::{BotSpec, Catalog};
pub use entity::{Entity, Rgb, Size3, Vec3};
pub use interaction::{InteractionState, PointerEvent};
pub use layout::LayoutMode;
pub use time_of_day::{DayNightCycle, TimeOfDay};

/// Errors raised while building the scene description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("duplicate entity id `{0}`")]
    DuplicateId(String),
    #[error("entity `{0}` must have a positive width, height and depth")]
    InvalidSize(String),
    #[error("invalid colour token `{0}`, expected #rrggbb")]
    InvalidColor(String),
}
