//! Booking sheet loading model.
//!
//! Opening the sheet starts a simulated progress bar while a third-party widget loads.
//! The widget load itself happens outside this crate; the embedder asks for a
//! [`LoadTicket`] once the sheet content is mounted and reports back with
//! [`BookingSheet::finish`]. Time is passed in explicitly as milliseconds.

/// Timing knobs for the booking sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingTimings {
    /// Progress step interval.
    pub tick_ms: u64,
    /// Progress added per tick, percent.
    pub step_pct: u8,
    /// Simulated progress never passes this before the load settles.
    pub cap_pct: u8,
    /// Delay before the widget is injected, giving the sheet time to mount.
    pub inject_delay_ms: u64,
    /// Hard upper bound on the loading state.
    pub timeout_ms: u64,
    /// How long the "book a table" button shows its busy state after a click.
    pub button_busy_ms: u64,
}

impl Default for BookingTimings {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            step_pct: 10,
            cap_pct: 90,
            inject_delay_ms: 200,
            timeout_ms: 5000,
            button_busy_ms: 500,
        }
    }
}

/// How a load attempt ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadEnd {
    Loaded,
    Failed,
    TimedOut,
}

/// Outcome reported by the embedder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

/// Authorization for exactly one widget load, valid for the open it was issued in.
#[derive(Debug, PartialEq, Eq)]
pub struct LoadTicket {
    open_id: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Closed,
    Loading,
    Settled(LoadEnd),
}

#[derive(Clone, Debug)]
pub struct BookingSheet {
    timings: BookingTimings,
    phase: Phase,
    open_id: u64,
    opened_at_ms: u64,
    progress: u8,
    ticket_issued: bool,
}

impl BookingSheet {
    pub fn new(timings: BookingTimings) -> Self {
        Self {
            timings,
            phase: Phase::Closed,
            open_id: 0,
            opened_at_ms: 0,
            progress: 0,
            ticket_issued: false,
        }
    }

    /// Open the sheet. Returns `false` (and does nothing) if it is already open.
    pub fn open(&mut self, now_ms: u64) -> bool {
        if self.is_open() {
            return false;
        }
        self.open_id += 1;
        self.opened_at_ms = now_ms;
        self.progress = 0;
        self.ticket_issued = false;
        self.phase = Phase::Loading;
        tracing::debug!(open_id = self.open_id, "booking sheet opened");
        true
    }

    /// Close the sheet and drop any in-flight load. Idempotent.
    pub fn close(&mut self) {
        if self.phase != Phase::Closed {
            tracing::debug!(open_id = self.open_id, "booking sheet closed");
        }
        self.phase = Phase::Closed;
        self.progress = 0;
        self.ticket_issued = false;
    }

    /// Advance simulated progress and the timeout to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) {
        if self.phase != Phase::Loading {
            return;
        }
        let elapsed = now_ms.saturating_sub(self.opened_at_ms);
        if elapsed >= self.timings.timeout_ms {
            tracing::debug!(elapsed, "booking widget load timed out");
            self.settle(LoadEnd::TimedOut);
            return;
        }
        let steps = elapsed / self.timings.tick_ms.max(1);
        let simulated = steps.saturating_mul(u64::from(self.timings.step_pct));
        let cap = u64::from(self.timings.cap_pct.min(100));
        self.progress = simulated.min(cap) as u8;
    }

    /// Hand out the single load ticket for this open once the inject delay has passed.
    pub fn take_load_ticket(&mut self, now_ms: u64) -> Option<LoadTicket> {
        if self.phase != Phase::Loading || self.ticket_issued {
            return None;
        }
        if now_ms.saturating_sub(self.opened_at_ms) < self.timings.inject_delay_ms {
            return None;
        }
        self.ticket_issued = true;
        Some(LoadTicket {
            open_id: self.open_id,
        })
    }

    /// Report the result of a load. Stale tickets (from an earlier open) are ignored.
    pub fn finish(&mut self, ticket: LoadTicket, outcome: LoadOutcome) -> bool {
        if ticket.open_id != self.open_id || self.phase != Phase::Loading {
            tracing::trace!(ticket = ticket.open_id, "ignoring stale booking load result");
            return false;
        }
        let end = match outcome {
            LoadOutcome::Loaded => LoadEnd::Loaded,
            LoadOutcome::Failed => {
                tracing::warn!("failed to load booking widget");
                LoadEnd::Failed
            }
        };
        self.settle(end);
        true
    }

    fn settle(&mut self, end: LoadEnd) {
        self.phase = Phase::Settled(end);
        self.progress = 100;
    }

    pub fn is_open(&self) -> bool {
        self.phase != Phase::Closed
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn outcome(&self) -> Option<LoadEnd> {
        match self.phase {
            Phase::Settled(end) => Some(end),
            _ => None,
        }
    }

    /// Progress bar value, percent.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Page scrolling is locked while the sheet is open.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    pub fn button_busy(&self, now_ms: u64) -> bool {
        self.is_open() && now_ms.saturating_sub(self.opened_at_ms) < self.timings.button_busy_ms
    }
}

impl Default for BookingSheet {
    fn default() -> Self {
        Self::new(BookingTimings::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/booking.rs"]
mod tests;
