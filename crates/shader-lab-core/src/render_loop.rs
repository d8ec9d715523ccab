//! Render loop driver.
//!
//! A two-state machine (Running / Paused, plus terminal Stopped) on top of a
//! one-shot frame scheduler such as `requestAnimationFrame`. At most one
//! frame request is outstanding at any time.

use crate::config::MILLIS_PER_SECOND;

/// One-shot frame scheduling, e.g. `requestAnimationFrame`.
pub trait FrameScheduler {
    /// Identifier of an outstanding request.
    type Handle: Copy;

    /// Ask for one callback on the next frame.
    fn request_frame(&mut self) -> Self::Handle;
    /// Withdraw an outstanding request.
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Loop state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// A frame is scheduled; each tick draws and schedules the next.
    Running,
    /// No frame is scheduled.
    Paused,
    /// Torn down; the loop never schedules again.
    Stopped,
}

/// Scheduler timestamp converted to shader time.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct FrameTime {
    seconds: f64,
}

impl FrameTime {
    /// From a monotonic timestamp in milliseconds.
    pub fn from_millis(millis: f64) -> Self {
        Self {
            seconds: millis / MILLIS_PER_SECOND,
        }
    }

    /// Seconds as the `u_time` uniform expects them.
    pub fn seconds(&self) -> f32 {
        self.seconds as f32
    }
}

/// Frame loop bound to a scheduler.
pub struct RenderLoop<S: FrameScheduler> {
    scheduler: S,
    state: LoopState,
    pending: Option<S::Handle>,
    frames: u64,
}

impl<S: FrameScheduler> RenderLoop<S> {
    /// Create a paused loop.
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            state: LoopState::Paused,
            pending: None,
            frames: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// True while frames are being scheduled.
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Frames drawn so far.
    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }

    /// True if a frame request is outstanding.
    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    /// The underlying scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Paused -> Running: schedule exactly one frame. No-op otherwise.
    pub fn resume(&mut self) {
        if self.state != LoopState::Paused {
            return;
        }
        self.state = LoopState::Running;
        if self.pending.is_none() {
            self.pending = Some(self.scheduler.request_frame());
        }
        log::debug!("render loop resumed");
    }

    /// Alias of [`resume`](Self::resume) for the initial start.
    pub fn start(&mut self) {
        self.resume();
    }

    /// Running -> Paused: cancel the outstanding frame. No-op otherwise.
    pub fn pause(&mut self) {
        if self.state != LoopState::Running {
            return;
        }
        self.cancel_pending();
        self.state = LoopState::Paused;
        log::debug!("render loop paused after {} frames", self.frames);
    }

    /// Pause or resume to match `playing`.
    pub fn set_playing(&mut self, playing: bool) {
        if playing {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Handle a fired frame callback.
    ///
    /// When running, `draw` is invoked and the next frame is requested.
    /// Returns whether anything was drawn.
    pub fn tick(&mut self, draw: impl FnOnce()) -> bool {
        self.pending = None;
        if self.state != LoopState::Running {
            return false;
        }

        draw();
        self.frames += 1;
        self.pending = Some(self.scheduler.request_frame());
        true
    }

    /// Enter the terminal state, cancelling any outstanding frame.
    pub fn stop(&mut self) {
        if self.state == LoopState::Stopped {
            return;
        }
        self.cancel_pending();
        self.state = LoopState::Stopped;
        log::debug!("render loop stopped");
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}

impl<S: FrameScheduler> Drop for RenderLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingScheduler {
        next: u32,
        requested: u32,
        cancelled: Vec<u32>,
    }

    impl FrameScheduler for CountingScheduler {
        type Handle = u32;

        fn request_frame(&mut self) -> u32 {
            self.next += 1;
            self.requested += 1;
            self.next
        }

        fn cancel_frame(&mut self, handle: u32) {
            self.cancelled.push(handle);
        }
    }

    #[test]
    fn test_starts_paused_without_requests() {
        let lp = RenderLoop::new(CountingScheduler::default());
        assert_eq!(lp.state(), LoopState::Paused);
        assert_eq!(lp.scheduler().requested, 0);
    }

    #[test]
    fn test_pause_cancels_pending_frame() {
        let mut lp = RenderLoop::new(CountingScheduler::default());
        lp.start();
        lp.pause();
        assert_eq!(lp.scheduler().cancelled, vec![1]);
        assert!(!lp.tick(|| panic!("paused loop must not draw")));
    }

    #[test]
    fn test_resume_schedules_exactly_one_frame() {
        let mut lp = RenderLoop::new(CountingScheduler::default());
        lp.start();
        lp.pause();
        lp.resume();
        lp.resume();
        assert_eq!(lp.scheduler().requested, 2);
        assert!(lp.has_pending_frame());
    }

    #[test]
    fn test_tick_draws_and_reschedules() {
        let mut lp = RenderLoop::new(CountingScheduler::default());
        lp.start();
        let mut draws = 0;
        for _ in 0..3 {
            assert!(lp.tick(|| draws += 1));
        }
        assert_eq!(draws, 3);
        assert_eq!(lp.frames_drawn(), 3);
        assert_eq!(lp.scheduler().requested, 4);
    }

    #[test]
    fn test_stop_is_terminal() {
        let mut lp = RenderLoop::new(CountingScheduler::default());
        lp.start();
        lp.stop();
        lp.resume();
        assert_eq!(lp.state(), LoopState::Stopped);
        assert_eq!(lp.scheduler().cancelled.len(), 1);
        assert!(!lp.has_pending_frame());
    }

    #[test]
    fn test_frame_time_in_seconds() {
        assert_eq!(FrameTime::from_millis(1500.0).seconds(), 1.5);
    }
}
