//! Pointer drag tracking.

/// Offset of the pointer from the surface origin at press time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub anchor_offset: (i32, i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
    /// The surface is gone; every pointer event is ignored until `reset`.
    Terminated,
}

/// What the owner must do to the native surface after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragAction {
    /// Take exclusive pointer capture.
    Capture,
    /// Move the surface origin (no re-render).
    MoveTo(i32, i32),
    /// Give pointer capture back.
    Release,
}

#[derive(Debug, Default)]
pub struct DragTracker {
    state: DragState,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Capture must be held exactly while dragging.
    pub fn is_capturing(&self) -> bool {
        self.is_dragging()
    }

    pub fn pointer_down(
        &mut self,
        screen_pt: (i32, i32),
        origin: (i32, i32),
        draggable: bool,
    ) -> Option<DragAction> {
        if self.state != DragState::Idle || !draggable {
            return None;
        }
        self.state = DragState::Dragging(DragSession {
            anchor_offset: (screen_pt.0 - origin.0, screen_pt.1 - origin.1),
        });
        Some(DragAction::Capture)
    }

    pub fn pointer_move(&mut self, screen_pt: (i32, i32)) -> Option<DragAction> {
        match self.state {
            DragState::Dragging(DragSession {
                anchor_offset: (dx, dy),
            }) => Some(DragAction::MoveTo(screen_pt.0 - dx, screen_pt.1 - dy)),
            _ => None,
        }
    }

    pub fn pointer_up(&mut self) -> Option<DragAction> {
        if !self.is_dragging() {
            return None;
        }
        self.state = DragState::Idle;
        Some(DragAction::Release)
    }

    /// The OS took capture away (another window grabbed it, alt-tab, ...).
    /// Nothing to release.
    pub fn capture_lost(&mut self) {
        if self.is_dragging() {
            self.state = DragState::Idle;
        }
    }

    pub fn surface_destroyed(&mut self) -> Option<DragAction> {
        let was_dragging = self.is_dragging();
        self.state = DragState::Terminated;
        was_dragging.then_some(DragAction::Release)
    }

    /// Back to `Idle` for a freshly created surface.
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }
}
