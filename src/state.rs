#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SliderPhase {
    Autoplaying, // Idle, timer armed
    Paused,      // Idle, timer disarmed (hover, hidden page)
    Dragging,    // A touch or drag gesture is in progress
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Control {
    Prev,
    Next,
}
