use bevy::prelude::*;

use crate::components::HandKind;

/// Event emitted when a hand drag is released over the face.
#[derive(Event, Debug)]
pub struct HandAdjusted {
    /// The hand that was dragged.
    pub hand: HandKind,
    /// The committed value: an hour (0-11) for the hour hand, a step on
    /// the 60-step dial for the minute and second hands.
    pub value: u32,
}
