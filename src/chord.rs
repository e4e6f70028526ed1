/// Per-frame snapshot of the two keys making up the toggle chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChordSample {
    pub backtick_down: bool,
    pub ctrl_down: bool,
}

/// Edge detector for the CTRL+backtick toggle chord.
///
/// Fires exactly once when backtick transitions from released to pressed
/// while either control key is held; holding the chord across frames does
/// not re-fire until backtick is released and pressed again.
#[derive(Debug, Default)]
pub struct ChordState {
    backtick_was_down: bool,
}

impl ChordState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's key state; returns `true` on a chord edge.
    pub fn fired(&mut self, sample: ChordSample) -> bool {
        let edge = sample.backtick_down && !self.backtick_was_down;
        self.backtick_was_down = sample.backtick_down;
        edge && sample.ctrl_down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(backtick: bool, ctrl: bool) -> ChordSample {
        ChordSample {
            backtick_down: backtick,
            ctrl_down: ctrl,
        }
    }

    #[test]
    fn fires_once_per_press() {
        let mut chord = ChordState::new();
        assert!(chord.fired(sample(true, true)));
        // held across subsequent frames
        assert!(!chord.fired(sample(true, true)));
        assert!(!chord.fired(sample(true, true)));
        // release, press again
        assert!(!chord.fired(sample(false, true)));
        assert!(chord.fired(sample(true, true)));
    }

    #[test]
    fn backtick_without_ctrl_does_not_fire() {
        let mut chord = ChordState::new();
        assert!(!chord.fired(sample(true, false)));
        // ctrl arriving later with backtick still held is not an edge
        assert!(!chord.fired(sample(true, true)));
    }
}
