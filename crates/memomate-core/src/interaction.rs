//! Hover and selection tracking for the city buildings.
//!
//! Hover and selection are independent: a selection stays open while the
//! pointer wanders over other buildings. Transitions are pure, taking the
//! current state and an event and returning the next state.

use crate::catalog::Catalog;

/// Pointer input relevant to the buildings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerEvent {
    /// The pointer moved onto a building.
    Enter(String),
    /// The pointer moved off a building.
    Leave(String),
    /// A building was clicked.
    Click(String),
    /// The detail panel close control was used.
    Close,
    /// A click that landed on no building and outside the detail panel.
    BackgroundClick,
}

/// Which building is hovered and which one has its detail panel open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    hovered: Option<String>,
    selected: Option<String>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered() == Some(id)
    }

    /// Whether a detail panel is open.
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Apply a pointer event. Clicks on ids missing from `catalog` leave the
    /// selection untouched.
    pub fn apply(self, event: PointerEvent, catalog: &Catalog) -> Self {
        match event {
            PointerEvent::Enter(id) => {
                if self.is_hovered(&id) {
                    self
                } else {
                    Self {
                        hovered: Some(id),
                        ..self
                    }
                }
            }
            // A late leave from a building we already left must not clear the
            // newer hover.
            PointerEvent::Leave(id) if self.is_hovered(&id) => Self {
                hovered: None,
                ..self
            },
            PointerEvent::Leave(_) => self,
            PointerEvent::Click(id) if catalog.contains(&id) => Self {
                selected: Some(id),
                ..self
            },
            PointerEvent::Click(_) => self,
            PointerEvent::Close | PointerEvent::BackgroundClick => Self {
                selected: None,
                ..self
            },
        }
    }

    /// Translate "the pointer is now over `target`" into the enter/leave pair
    /// needed to get there from the current hover.
    pub fn hover_events(&self, target: Option<&str>) -> Vec<PointerEvent> {
        match (self.hovered(), target) {
            (Some(current), Some(next)) if current == next => Vec::new(),
            (Some(current), Some(next)) => vec![
                PointerEvent::Leave(current.to_string()),
                PointerEvent::Enter(next.to_string()),
            ],
            (Some(current), None) => vec![PointerEvent::Leave(current.to_string())],
            (None, Some(next)) => vec![PointerEvent::Enter(next.to_string())],
            (None, None) => Vec::new(),
        }
    }
}
