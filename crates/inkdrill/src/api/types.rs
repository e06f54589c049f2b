use bytemuck::{Pod, Zeroable};

use crate::session::state::Verdict;

/// Something the host should react to, emitted by the drill during a call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrillEvent {
    /// A new word is up (word list index).
    WordPresented { index: usize },
    /// The word at `index` should be spoken.
    Speak { index: usize },
    /// The drawing surface was emptied; the host should clear its canvas.
    SurfaceCleared,
    /// The word was shown or hidden.
    Revealed { revealed: bool },
    /// A writing check finished.
    Scored { accuracy: u8, verdict: Verdict },
    /// The word at `index` was recorded as a success or an error.
    Marked { index: usize, success: bool },
}

/// Wire event kinds. Must stay in sync with the host's event decoder.
pub mod kind {
    pub const WORD_PRESENTED: f32 = 1.0;
    pub const SPEAK: f32 = 2.0;
    pub const SURFACE_CLEARED: f32 = 3.0;
    pub const REVEALED: f32 = 4.0;
    pub const SCORED: f32 = 5.0;
    pub const MARKED: f32 = 6.0;
}

/// A drill event flattened for the host.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct WireEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl WireEvent {
    pub const FLOATS: usize = 4;
}

fn flag(b: bool) -> f32 {
    if b {
        1.0
    } else {
        0.0
    }
}

impl From<DrillEvent> for WireEvent {
    fn from(event: DrillEvent) -> Self {
        let (kind, a, b, c) = match event {
            DrillEvent::WordPresented { index } => (kind::WORD_PRESENTED, index as f32, 0.0, 0.0),
            DrillEvent::Speak { index } => (kind::SPEAK, index as f32, 0.0, 0.0),
            DrillEvent::SurfaceCleared => (kind::SURFACE_CLEARED, 0.0, 0.0, 0.0),
            DrillEvent::Revealed { revealed } => (kind::REVEALED, flag(revealed), 0.0, 0.0),
            DrillEvent::Scored { accuracy, verdict } => {
                let (pass, advance) = match verdict {
                    Verdict::Pass { auto_advance } => (true, auto_advance),
                    Verdict::Retry => (false, false),
                };
                (kind::SCORED, accuracy as f32, flag(pass), flag(advance))
            }
            DrillEvent::Marked { index, success } => (kind::MARKED, index as f32, flag(success), 0.0),
        };
        WireEvent { kind, a, b, c }
    }
}
