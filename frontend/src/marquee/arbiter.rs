/// What the user is doing to the strip right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArbiterState {
    Idle,
    /// Pointer over the strip with pause-on-hover enabled.
    Hovering,
    Dragging,
    WheelCoasting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Auto,
    Dragging,
    WheelCoasting,
}

/// Identifies one armed resume timer. Firing a stale ticket does nothing,
/// so a timer that outlives a newer interaction cannot restart auto-scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResumeTicket(u64);

/// Bookkeeping for one burst of user input, from the first event until
/// the resume timer fires.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionSession {
    pub started_at: f64,
    pub last_input_at: f64,
}

/// Decides whether auto-scroll may run and collects the translations
/// requested by drag and wheel input until the next frame consumes them.
#[derive(Clone, Debug)]
pub struct InteractionArbiter {
    mode: Mode,
    hovered: bool,
    pause_on_hover: bool,
    pending_resume: Option<ResumeTicket>,
    generation: u64,
    session: Option<InteractionSession>,
    pending_delta: f64,
}

impl InteractionArbiter {
    pub fn new(pause_on_hover: bool) -> Self {
        Self {
            mode: Mode::Auto,
            hovered: false,
            pause_on_hover,
            pending_resume: None,
            generation: 0,
            session: None,
            pending_delta: 0.0,
        }
    }

    pub fn set_pause_on_hover(&mut self, pause_on_hover: bool) {
        self.pause_on_hover = pause_on_hover;
    }

    pub fn state(&self) -> ArbiterState {
        match self.mode {
            Mode::Dragging => ArbiterState::Dragging,
            Mode::WheelCoasting => ArbiterState::WheelCoasting,
            Mode::Auto if self.hovered && self.pause_on_hover => ArbiterState::Hovering,
            Mode::Auto => ArbiterState::Idle,
        }
    }

    pub fn session(&self) -> Option<InteractionSession> {
        self.session
    }

    pub fn is_dragging(&self) -> bool {
        self.mode == Mode::Dragging
    }

    /// True while the user holds the strip or a resume timer is armed.
    pub fn suppresses_auto_scroll(&self) -> bool {
        self.mode != Mode::Auto || self.pending_resume.is_some()
    }

    /// Velocity the blender should chase given the configured auto-scroll
    /// velocity.
    pub fn target_velocity(&self, auto_velocity: f64) -> f64 {
        if self.suppresses_auto_scroll() || (self.hovered && self.pause_on_hover) {
            0.0
        } else {
            auto_velocity
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn begin_drag(&mut self, now: f64) {
        self.pending_resume = None;
        self.mode = Mode::Dragging;
        self.touch_session(now);
    }

    /// Queues a drag translation. Ignored unless a drag is in progress.
    pub fn drag_by(&mut self, delta: f64, now: f64) {
        if self.mode != Mode::Dragging {
            return;
        }
        self.queue(delta);
        self.touch_session(now);
    }

    /// Ends a drag and arms the resume timer. `None` if no drag was active.
    pub fn end_drag(&mut self, now: f64) -> Option<ResumeTicket> {
        if self.mode != Mode::Dragging {
            return None;
        }
        self.mode = Mode::Auto;
        self.touch_session(now);
        Some(self.arm())
    }

    /// Queues a wheel translation. Ignored while dragging.
    pub fn wheel(&mut self, delta: f64, now: f64) -> Option<ResumeTicket> {
        if self.mode == Mode::Dragging {
            return None;
        }
        self.queue(delta);
        self.touch_session(now);
        self.mode = Mode::WheelCoasting;
        Some(self.arm())
    }

    /// Called when a resume timer fires. Returns whether auto-scroll was
    /// actually released.
    pub fn resume(&mut self, ticket: ResumeTicket) -> bool {
        if self.pending_resume != Some(ticket) {
            return false;
        }
        self.pending_resume = None;
        if self.mode == Mode::WheelCoasting {
            self.mode = Mode::Auto;
        }
        self.session = None;
        true
    }

    /// Drains translations requested since the last frame.
    pub fn take_pending_delta(&mut self) -> f64 {
        std::mem::take(&mut self.pending_delta)
    }

    fn queue(&mut self, delta: f64) {
        if delta.is_finite() {
            self.pending_delta += delta;
        }
    }

    fn arm(&mut self) -> ResumeTicket {
        self.generation += 1;
        let ticket = ResumeTicket(self.generation);
        self.pending_resume = Some(ticket);
        ticket
    }

    fn touch_session(&mut self, now: f64) {
        match self.session.as_mut() {
            Some(session) => session.last_input_at = now,
            None => {
                self.session = Some(InteractionSession {
                    started_at: now,
                    last_input_at: now,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_cycle() {
        let mut arbiter = InteractionArbiter::new(true);
        assert_eq!(arbiter.state(), ArbiterState::Idle);

        arbiter.begin_drag(0.0);
        assert_eq!(arbiter.state(), ArbiterState::Dragging);
        assert_eq!(arbiter.target_velocity(50.0), 0.0);

        let ticket = arbiter.end_drag(200.0).unwrap();
        assert_eq!(arbiter.state(), ArbiterState::Idle);
        // still quiet until the timer fires
        assert_eq!(arbiter.target_velocity(50.0), 0.0);

        assert!(arbiter.resume(ticket));
        assert_eq!(arbiter.target_velocity(50.0), 50.0);
        assert!(arbiter.session().is_none());
    }

    #[test]
    fn wheel_enters_coasting_until_resume() {
        let mut arbiter = InteractionArbiter::new(false);
        let ticket = arbiter.wheel(120.0, 10.0).unwrap();
        assert_eq!(arbiter.state(), ArbiterState::WheelCoasting);
        assert_eq!(arbiter.take_pending_delta(), 120.0);
        assert_eq!(arbiter.take_pending_delta(), 0.0);
        assert!(arbiter.resume(ticket));
        assert_eq!(arbiter.state(), ArbiterState::Idle);
    }

    #[test]
    fn new_input_invalidates_older_timer() {
        let mut arbiter = InteractionArbiter::new(false);
        let first = arbiter.wheel(10.0, 0.0).unwrap();
        let second = arbiter.wheel(10.0, 300.0).unwrap();
        assert!(!arbiter.resume(first));
        assert_eq!(arbiter.state(), ArbiterState::WheelCoasting);
        assert!(arbiter.resume(second));
        assert!(!arbiter.resume(second));
    }

    #[test]
    fn drag_start_cancels_pending_resume() {
        let mut arbiter = InteractionArbiter::new(false);
        let ticket = arbiter.wheel(10.0, 0.0).unwrap();
        arbiter.begin_drag(100.0);
        assert!(!arbiter.resume(ticket));
        assert_eq!(arbiter.state(), ArbiterState::Dragging);
    }

    #[test]
    fn wheel_during_drag_is_ignored() {
        let mut arbiter = InteractionArbiter::new(false);
        arbiter.begin_drag(0.0);
        assert_eq!(arbiter.wheel(40.0, 5.0), None);
        assert_eq!(arbiter.state(), ArbiterState::Dragging);
        assert_eq!(arbiter.take_pending_delta(), 0.0);
    }

    #[test]
    fn hover_pauses_without_blocking_input() {
        let mut arbiter = InteractionArbiter::new(true);
        arbiter.set_hovered(true);
        assert_eq!(arbiter.state(), ArbiterState::Hovering);
        assert_eq!(arbiter.target_velocity(50.0), 0.0);
        assert!(!arbiter.suppresses_auto_scroll());

        arbiter.begin_drag(0.0);
        arbiter.drag_by(-15.0, 16.0);
        assert_eq!(arbiter.take_pending_delta(), -15.0);
    }

    #[test]
    fn hover_ignored_when_pause_disabled() {
        let mut arbiter = InteractionArbiter::new(false);
        arbiter.set_hovered(true);
        assert_eq!(arbiter.state(), ArbiterState::Idle);
        assert_eq!(arbiter.target_velocity(50.0), 50.0);
    }

    #[test]
    fn session_tracks_first_and_last_input() {
        let mut arbiter = InteractionArbiter::new(false);
        arbiter.begin_drag(100.0);
        arbiter.drag_by(3.0, 150.0);
        arbiter.end_drag(180.0);
        let session = arbiter.session().unwrap();
        assert_eq!(session.started_at, 100.0);
        assert_eq!(session.last_input_at, 180.0);
    }

    #[test]
    fn stray_drag_events_are_ignored() {
        let mut arbiter = InteractionArbiter::new(false);
        arbiter.drag_by(30.0, 0.0);
        assert_eq!(arbiter.take_pending_delta(), 0.0);
        assert_eq!(arbiter.end_drag(0.0), None);
    }
}
