use bevy::prelude::*;

use crate::components::HandKind;

/// Pointer interaction state machine for the clock hands.
///
/// Only one interaction is ever in flight:
/// - `Idle`: no hand grabbed, pointer movement is ignored
/// - `Dragging`: a hand is grabbed; pointer movement drives the preview
///   line, release commits a value, leaving the window discards
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(HandKind),
}

impl DragState {
    /// The hand currently being dragged, if any.
    pub fn dragged_hand(&self) -> Option<HandKind> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(hand) => Some(*hand),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dragged_hand() {
        assert_eq!(DragState::Idle.dragged_hand(), None);
        assert_eq!(
            DragState::Dragging(HandKind::Minute).dragged_hand(),
            Some(HandKind::Minute)
        );
    }
}
