// schedule.rs - Frame loop and resize debounce bookkeeping
//
// The host (browser or test) only books and cancels callbacks. Which
// callback is live, and whether a frame or resize runs, is decided here.

use std::cell::Cell;

/// One-shot delayed callbacks carrying a token back to `Debounce::fire`.
pub trait Timer {
    /// Book a callback in `delay_ms`. None if the host refused.
    fn set(&self, delay_ms: i32, token: u32) -> Option<i32>;
    fn clear(&self, id: i32);
}

/// Single-slot debounce: each signal drops the pending run and books a
/// new one, so a burst of signals ends in one run.
pub struct Debounce<T: Timer> {
    timer: T,
    delay_ms: i32,
    next_token: Cell<u32>,
    // (token, host id)
    pending: Cell<Option<(u32, i32)>>,
}

impl<T: Timer> Debounce<T> {
    pub fn new(timer: T, delay_ms: i32) -> Self {
        Self { timer, delay_ms, next_token: Cell::new(0), pending: Cell::new(None) }
    }

    /// Restart the quiet period
    pub fn signal(&self) {
        self.cancel();
        let token = self.next_token.get().wrapping_add(1);
        self.next_token.set(token);
        match self.timer.set(self.delay_ms, token) {
            Some(id) => self.pending.set(Some((token, id))),
            None => log::warn!("debounce timer not scheduled"),
        }
    }

    /// A booked callback came due. True only for the live one; the
    /// caller runs its action then.
    pub fn fire(&self, token: u32) -> bool {
        match self.pending.get() {
            Some((live, _)) if live == token => {
                self.pending.set(None);
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&self) {
        if let Some((_, id)) = self.pending.take() {
            self.timer.clear(id);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}

impl<T: Timer> Drop for Debounce<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Display-refresh callbacks, e.g. requestAnimationFrame.
pub trait FrameHost {
    fn request(&self) -> Option<i32>;
    fn cancel(&self, id: i32);
}

/// Self-rebooking frame loop with an off switch. Once stopped it never
/// runs another frame, even if the host delivers one already in flight.
pub struct FrameSchedule<H: FrameHost> {
    host: H,
    pending: Cell<Option<i32>>,
    stopped: Cell<bool>,
}

impl<H: FrameHost> FrameSchedule<H> {
    pub fn new(host: H) -> Self {
        Self { host, pending: Cell::new(None), stopped: Cell::new(false) }
    }

    /// Book the first frame
    pub fn start(&self) -> bool {
        if self.stopped.get() { return false; }
        self.pending.set(self.host.request());
        self.pending.get().is_some()
    }

    /// The host delivered a frame. Runs it and books the next one.
    pub fn on_frame(&self, frame: impl FnOnce()) -> bool {
        self.pending.set(None);
        if self.stopped.get() { return false; }

        frame();

        // frame() may have stopped us
        if !self.stopped.get() {
            self.pending.set(self.host.request());
            if self.pending.get().is_none() {
                log::warn!("frame loop halted: next frame not booked");
            }
        }
        true
    }

    pub fn stop(&self) {
        self.stopped.set(true);
        if let Some(id) = self.pending.take() {
            self.host.cancel(id);
        }
    }

    pub fn is_running(&self) -> bool {
        !self.stopped.get() && self.pending.get().is_some()
    }
}

impl<H: FrameHost> Drop for FrameSchedule<H> {
    fn drop(&mut self) {
        self.stop();
    }
}
