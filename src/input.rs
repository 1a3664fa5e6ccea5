//! Input boundary between the platform layer and the simulation
//!
//! Platform code (window, terminal, script) translates whatever it receives
//! into [`InputEvent`]s; the simulation never sees raw keycodes or pointer
//! hardware. Events are polled once per frame and applied before the
//! fixed-step catch-up loop runs, so a tuning change is visible to every
//! tick of that frame but can never tear mid-tick.

use glam::Vec2;

/// Logical tuning keys, already mapped from physical bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuneKey {
    /// Increase proportional gain
    KpUp,
    /// Decrease proportional gain (floored at 0)
    KpDown,
    /// Increase integral gain
    KiUp,
    /// Decrease integral gain (floored at 0)
    KiDown,
    /// Increase derivative gain
    KdUp,
    /// Decrease derivative gain (floored at 0)
    KdDown,
    /// Clear controller memory without touching the gains
    Reset,
}

/// A discrete input event crossing into the control loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Stop the loop and shut down
    Quit,
    /// Pointer press at a canvas position; the y component becomes the target
    PointerDown(Vec2),
    /// Gain tuning / controller reset
    Key(TuneKey),
}

/// Source of input events, polled once per frame
pub trait InputSource {
    /// Append this frame's pending events to `events`
    fn poll(&mut self, events: &mut Vec<InputEvent>);
}

/// Scripted input for the headless demo and for tests
///
/// Cues are (frame index, event) pairs; each `poll` call advances one frame
/// and delivers every cue that has come due.
pub struct ScriptedInput {
    cues: Vec<(u64, InputEvent)>,
    frame: u64,
}

impl ScriptedInput {
    pub fn new(mut cues: Vec<(u64, InputEvent)>) -> Self {
        cues.sort_by_key(|(frame, _)| *frame);
        Self { cues, frame: 0 }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, events: &mut Vec<InputEvent>) {
        while matches!(self.cues.first(), Some((due, _)) if *due <= self.frame) {
            let (_, event) = self.cues.remove(0);
            events.push(event);
        }
        self.frame += 1;
    }
}
