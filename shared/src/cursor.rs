//! Pointer idle tracking for fullscreen presenting.
//!
//! Every pointer move shows the cursor and supersedes any pending hide; only
//! the most recent ticket may hide it.

/// Handle for one scheduled hide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTicket {
    pub id: u64,
    pub after_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorIdle {
    idle_ms: u32,
    generation: u64,
    pending: Option<u64>,
    visible: bool,
}

impl CursorIdle {
    pub fn new(idle_ms: u32) -> Self {
        Self {
            idle_ms,
            generation: 0,
            pending: None,
            visible: true,
        }
    }

    /// Show the cursor; in fullscreen also schedule a hide.
    ///
    /// Any ticket handed out earlier becomes stale.
    pub fn on_pointer_move(&mut self, fullscreen: bool) -> Option<HideTicket> {
        self.visible = true;
        self.generation += 1;
        if fullscreen {
            self.pending = Some(self.generation);
            Some(HideTicket {
                id: self.generation,
                after_ms: self.idle_ms,
            })
        } else {
            self.pending = None;
            None
        }
    }

    /// Timer fired. Returns true if the cursor should now be hidden.
    pub fn on_timer(&mut self, ticket: HideTicket) -> bool {
        if self.pending != Some(ticket.id) {
            return false;
        }
        self.pending = None;
        self.visible = false;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn has_pending_hide(&self) -> bool {
        self.pending.is_some()
    }
}
