use boxhop_kernel::FrameInput;

/// A high-level action any input backend can produce.
///
/// The frontends map their own key codes to these; the simulation never
/// sees raw events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Reset,
}

/// Accumulated input between frames.
///
/// Move actions are level-triggered and follow press/release. Jump and reset
/// latch on press and stay queued until the frame loop consumes them, so a
/// tap between two frames is never lost and a hold never re-fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    move_left: bool,
    move_right: bool,
    jump_queued: bool,
    reset_queued: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one action edge from the windowing layer.
    pub fn apply(&mut self, action: Action, pressed: bool) {
        match action {
            Action::MoveLeft => self.move_left = pressed,
            Action::MoveRight => self.move_right = pressed,
            Action::Jump => {
                if pressed {
                    self.jump_queued = true;
                }
            }
            Action::Reset => {
                if pressed {
                    self.reset_queued = true;
                }
            }
        }
    }

    /// Snapshot the flags for one frame batch, consuming the jump edge.
    pub fn take_frame(&mut self) -> FrameInput {
        let jump = self.jump_queued;
        self.jump_queued = false;
        FrameInput {
            move_left: self.move_left,
            move_right: self.move_right,
            jump,
        }
    }

    /// Consume a queued reset request.
    pub fn take_reset(&mut self) -> bool {
        std::mem::take(&mut self.reset_queued)
    }
}
