use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum GestureIntent {
    /// Pointer pressed on the front card.
    Press { column: u16 },
    /// Pointer moved while pressed.
    Drag { column: u16 },
    /// Pointer released or the session was abandoned.
    End,
}

impl Intent for GestureIntent {}
