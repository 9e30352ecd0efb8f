use super::arbiter::{ArbiterState, InteractionArbiter, ResumeTicket};
use super::measure::{self, Measurement};
use super::offset::OffsetTracker;
use super::velocity::{clamp_frame_dt, VelocityBlender};
use super::{MarqueeConfig, MIN_COPIES};

/// Owns the scroll state of one strip and advances it once per frame.
///
/// Input handlers only talk to the arbiter (through the `on_*` methods);
/// offset and velocity change exclusively inside [`MarqueeEngine::frame`],
/// in the order blend, advance, emit.
#[derive(Clone, Debug)]
pub struct MarqueeEngine {
    config: MarqueeConfig,
    measurement: Option<Measurement>,
    offset: OffsetTracker,
    blender: VelocityBlender,
    arbiter: InteractionArbiter,
    reduced_motion: bool,
    resumed_from_interaction: bool,
}

impl MarqueeEngine {
    pub fn new(config: MarqueeConfig) -> Self {
        let arbiter = InteractionArbiter::new(config.pause_on_hover);
        Self {
            config,
            measurement: None,
            offset: OffsetTracker::new(),
            blender: VelocityBlender::new(),
            arbiter,
            reduced_motion: false,
            resumed_from_interaction: false,
        }
    }

    pub fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: MarqueeConfig) {
        self.arbiter.set_pause_on_hover(config.pause_on_hover);
        self.config = config;
    }

    /// Feeds a fresh layout pass. Safe to call any number of times; identical
    /// inputs always produce the identical measurement.
    pub fn remeasure(&mut self, container_width: f64, sequence_width: f64) -> Option<Measurement> {
        let measurement = measure::measure(container_width, sequence_width)?;
        self.offset.set_width(measurement.sequence_width);
        self.measurement = Some(measurement);
        Some(measurement)
    }

    pub fn measurement(&self) -> Option<Measurement> {
        self.measurement
    }

    pub fn copy_count(&self) -> usize {
        self.measurement.map_or(MIN_COPIES, |m| m.copy_count)
    }

    /// The frame loop does nothing until a positive sequence width is known.
    pub fn is_active(&self) -> bool {
        self.measurement.is_some()
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    pub fn offset(&self) -> f64 {
        self.offset.offset()
    }

    pub fn velocity(&self) -> f64 {
        self.blender.current()
    }

    pub fn state(&self) -> ArbiterState {
        self.arbiter.state()
    }

    pub fn arbiter(&self) -> &InteractionArbiter {
        &self.arbiter
    }

    pub fn on_hover(&mut self, hovered: bool) {
        self.arbiter.set_hovered(hovered);
    }

    pub fn on_drag_start(&mut self, now: f64) {
        if self.config.draggable && self.is_active() {
            self.arbiter.begin_drag(now);
        }
    }

    /// `dx` is the pointer movement in pixels; dragging right pulls content
    /// right, which shrinks the offset.
    pub fn on_drag_move(&mut self, dx: f64, now: f64) {
        self.arbiter.drag_by(-dx, now);
    }

    pub fn on_drag_end(&mut self, now: f64) -> Option<ResumeTicket> {
        self.arbiter.end_drag(now)
    }

    /// Wheel and trackpad input. Horizontal delta wins when present.
    pub fn on_wheel(&mut self, delta_x: f64, delta_y: f64, now: f64) -> Option<ResumeTicket> {
        if !self.is_active() {
            return None;
        }
        let delta = if delta_x != 0.0 { delta_x } else { delta_y };
        self.arbiter.wheel(delta, now)
    }

    pub fn on_resume(&mut self, ticket: ResumeTicket) -> bool {
        self.arbiter.resume(ticket)
    }

    /// Advances one display frame of `dt_ms` milliseconds and returns the
    /// translation to write to the track, or `None` while not yet measured.
    pub fn frame(&mut self, dt_ms: f64) -> Option<f64> {
        if !self.is_active() {
            self.arbiter.take_pending_delta();
            return None;
        }

        let requested = self.arbiter.take_pending_delta();
        if self.reduced_motion {
            return Some(0.0);
        }

        let dt = clamp_frame_dt(dt_ms / 1000.0);

        if self.arbiter.suppresses_auto_scroll() {
            self.blender.halt();
            self.resumed_from_interaction = true;
        } else {
            let target = self.arbiter.target_velocity(self.config.target_velocity());
            let catch_up = std::mem::take(&mut self.resumed_from_interaction);
            self.blender.blend(target, dt, catch_up);
        }

        self.offset.advance(requested + self.blender.current() * dt);
        Some(self.offset.translate_x())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marquee::{Direction, SMOOTH_TAU};

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn engine(speed: f64) -> MarqueeEngine {
        let mut engine = MarqueeEngine::new(MarqueeConfig {
            speed,
            direction: Direction::Left,
            pause_on_hover: true,
            draggable: true,
        });
        engine.remeasure(2500.0, 1000.0);
        engine
    }

    #[test]
    fn idle_until_measured() {
        let mut engine = MarqueeEngine::new(MarqueeConfig::default());
        assert_eq!(engine.frame(FRAME_MS), None);
        assert_eq!(engine.on_wheel(50.0, 0.0, 0.0), None);
        assert_eq!(engine.remeasure(800.0, 0.0), None);
        assert_eq!(engine.frame(FRAME_MS), None);
        assert_eq!(engine.copy_count(), MIN_COPIES);

        engine.remeasure(2500.0, 1000.0);
        assert!(engine.frame(FRAME_MS).is_some());
        assert_eq!(engine.copy_count(), 5);
    }

    #[test]
    fn remeasure_converges() {
        let mut engine = engine(50.0);
        let first = engine.remeasure(1920.0, 733.4);
        let second = engine.remeasure(1920.0, 733.4);
        assert_eq!(first, second);
        assert_eq!(engine.copy_count(), first.unwrap().copy_count);
    }

    #[test]
    fn sequence_shrink_rewraps_offset() {
        let mut engine = engine(50.0);
        engine.on_wheel(900.0, 0.0, 0.0);
        engine.frame(FRAME_MS);
        assert_eq!(engine.offset(), 900.0);

        let m = engine.remeasure(2500.0, 600.0).unwrap();
        assert_eq!(m.copy_count, 7);
        assert_eq!(engine.copy_count(), 7);
        assert_eq!(engine.offset(), 300.0);
    }

    #[test]
    fn reaches_cruise_speed_after_two_seconds() {
        let mut engine = engine(50.0);
        for _ in 0..120 {
            engine.frame(FRAME_MS);
        }
        assert!((engine.velocity() - 50.0).abs() / 50.0 < 0.01);
        assert!(engine.offset() > 0.0);
    }

    #[test]
    fn wheel_moves_by_exact_delta() {
        let mut engine = engine(50.0);
        let ticket = engine.on_wheel(120.0, 10.0, 0.0);
        assert!(ticket.is_some());
        assert_eq!(engine.state(), ArbiterState::WheelCoasting);
        engine.frame(FRAME_MS);
        assert_eq!(engine.offset(), 120.0);
    }

    #[test]
    fn vertical_wheel_used_when_no_horizontal() {
        let mut engine = engine(50.0);
        engine.on_wheel(0.0, -30.0, 0.0);
        engine.frame(FRAME_MS);
        assert_eq!(engine.offset(), 970.0);
    }

    #[test]
    fn dragging_only_moves_by_drag_delta() {
        let mut engine = engine(50.0);
        for _ in 0..30 {
            engine.frame(FRAME_MS);
        }
        engine.on_drag_start(0.0);
        engine.frame(FRAME_MS);
        let held = engine.offset();
        for _ in 0..20 {
            engine.frame(FRAME_MS);
            assert_eq!(engine.offset(), held);
        }
        engine.on_drag_move(25.0, 10.0);
        engine.frame(FRAME_MS);
        let expected = crate::marquee::offset::wrap(held - 25.0, 1000.0);
        assert_eq!(engine.offset(), expected);
        assert_eq!(engine.velocity(), 0.0);
    }

    #[test]
    fn wheel_while_dragging_leaves_offset_alone() {
        let mut engine = engine(50.0);
        engine.on_drag_start(0.0);
        engine.frame(FRAME_MS);
        let held = engine.offset();
        assert_eq!(engine.on_wheel(120.0, 0.0, 5.0), None);
        engine.frame(FRAME_MS);
        assert_eq!(engine.offset(), held);
        assert_eq!(engine.state(), ArbiterState::Dragging);
    }

    #[test]
    fn resume_after_drag_catches_up_faster() {
        let mut engine = engine(80.0);
        engine.on_drag_start(0.0);
        engine.frame(FRAME_MS);
        let ticket = engine.on_drag_end(100.0).unwrap();
        engine.frame(FRAME_MS);
        assert_eq!(engine.velocity(), 0.0);
        assert!(engine.on_resume(ticket));

        engine.frame(SMOOTH_TAU / 2.0 * 1000.0);

        let mut steady = VelocityBlender::new();
        steady.blend(80.0, SMOOTH_TAU / 2.0, false);
        assert!((80.0 - engine.velocity()).abs() < (80.0 - steady.current()).abs());
    }

    #[test]
    fn catch_up_applies_to_one_frame_only() {
        let mut engine = engine(80.0);
        let ticket = engine.on_wheel(5.0, 0.0, 0.0).unwrap();
        engine.frame(FRAME_MS);
        engine.on_resume(ticket);
        engine.frame(FRAME_MS);
        let after_first = engine.velocity();
        engine.frame(FRAME_MS);
        let gain = engine.velocity() - after_first;

        let mut steady = VelocityBlender::new();
        steady.blend(80.0, FRAME_MS / 1000.0, true);
        steady.blend(80.0, FRAME_MS / 1000.0, false);
        assert!((gain - (steady.current() - after_first)).abs() < 1e-9);
    }

    #[test]
    fn reduced_motion_freezes_offset() {
        let mut engine = engine(50.0);
        for _ in 0..10 {
            engine.frame(FRAME_MS);
        }
        let frozen = engine.offset();
        engine.set_reduced_motion(true);
        engine.on_wheel(300.0, 0.0, 0.0);
        engine.on_drag_start(0.0);
        engine.on_drag_move(40.0, 1.0);
        for _ in 0..200 {
            assert_eq!(engine.frame(FRAME_MS), Some(0.0));
            assert_eq!(engine.offset(), frozen);
        }
    }

    #[test]
    fn hover_eases_to_a_stop() {
        let mut engine = engine(50.0);
        for _ in 0..120 {
            engine.frame(FRAME_MS);
        }
        engine.on_hover(true);
        engine.frame(FRAME_MS);
        assert!(engine.velocity() > 0.0);
        for _ in 0..240 {
            engine.frame(FRAME_MS);
        }
        assert!(engine.velocity() < 0.01);
    }

    #[test]
    fn drag_disabled_ignores_pointer() {
        let mut engine = MarqueeEngine::new(MarqueeConfig {
            draggable: false,
            ..MarqueeConfig::default()
        });
        engine.remeasure(1000.0, 500.0);
        engine.on_drag_start(0.0);
        assert_eq!(engine.state(), ArbiterState::Idle);
        engine.on_drag_move(100.0, 1.0);
        assert_eq!(engine.on_drag_end(2.0), None);
    }

    #[test]
    fn long_gap_does_not_jump() {
        let mut engine = engine(50.0);
        for _ in 0..120 {
            engine.frame(FRAME_MS);
        }
        let before = engine.offset();
        engine.frame(30_000.0);
        let moved = crate::marquee::offset::wrap(engine.offset() - before, 1000.0);
        assert!(moved <= 50.0 * 0.1 + 1e-6);
    }

    #[test]
    fn offset_stays_wrapped_under_mixed_input() {
        let mut engine = engine(120.0);
        let mut now = 0.0;
        for step in 0..500 {
            now += FRAME_MS;
            match step % 7 {
                0 => {
                    engine.on_wheel(-733.0, 0.0, now);
                }
                2 => engine.on_drag_start(now),
                3 => engine.on_drag_move(1234.5, now),
                4 => {
                    engine.on_drag_end(now);
                }
                _ => {}
            }
            engine.frame(FRAME_MS);
            assert!(engine.offset() >= 0.0 && engine.offset() < 1000.0);
        }
    }
}
