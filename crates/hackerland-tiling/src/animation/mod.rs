//! Window animation: exponential or spring interpolation of six channels
//! per window, with pop-in for new windows and a shrink-and-fade hide.

mod channel;
mod window;

pub use channel::{Channel, GEOMETRY_EPSILON, UNIT_EPSILON};
pub use window::{AnimatedWindow, WindowFrame};

use hackerland_config::schema::{AnimationConfig, Interpolation};

/// Longest single spring integration step, in seconds.
const SPRING_SUBSTEP: f64 = 1.0 / 120.0;

/// Upper bound on integration steps per tick for extreme spring constants.
const MAX_SPRING_SUBSTEPS: usize = 1024;

/// Integration constants shared by every window.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationEngine {
    pub interpolation: Interpolation,
    pub speed: f64,
    pub spring_tension: f64,
    pub spring_friction: f64,
    /// Longest step the spring integrator will take, in seconds.
    pub max_dt: f64,
}

impl AnimationEngine {
    pub fn from_config(config: &AnimationConfig) -> Self {
        Self {
            interpolation: config.interpolation,
            speed: config.speed.clamp(f64::MIN_POSITIVE, 1.0),
            spring_tension: config.spring_tension,
            spring_friction: config.spring_friction,
            max_dt: config.max_dt,
        }
    }

    /// Clamp a measured frame delta. A stalled thread must not launch
    /// springs across the screen.
    pub fn clamp_dt(&self, dt: f64) -> f64 {
        if dt.is_nan() {
            return 0.0;
        }
        dt.clamp(0.0, self.max_dt)
    }

    /// Step length that keeps semi-implicit Euler stable for the current
    /// tension and friction.
    fn spring_substep(&self) -> f64 {
        SPRING_SUBSTEP
            .min(0.5 / self.spring_tension.sqrt())
            .min(0.5 / self.spring_friction)
    }

    pub fn step_channel(&self, channel: &mut Channel, dt: f64, epsilon: f64) {
        match self.interpolation {
            Interpolation::Exponential => channel.step_exponential(self.speed, epsilon),
            Interpolation::Spring => {
                // Large frame deltas are integrated in short slices; one
                // explicit step of 0.1s already amplifies the default spring.
                let dt = self.clamp_dt(dt);
                let substeps = ((dt / self.spring_substep()).ceil() as usize)
                    .clamp(1, MAX_SPRING_SUBSTEPS);
                let h = dt / substeps as f64;
                for _ in 0..substeps {
                    channel.step_spring(self.spring_tension, self.spring_friction, h, epsilon);
                    if channel.is_settled() {
                        break;
                    }
                }
            }
        }
    }
}

impl Default for AnimationEngine {
    fn default() -> Self {
        Self::from_config(&AnimationConfig::default())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use hackerland_common::Rect;

    fn exponential() -> AnimationEngine {
        AnimationEngine {
            interpolation: Interpolation::Exponential,
            ..AnimationEngine::default()
        }
    }

    fn run_until_settled(window: &mut AnimatedWindow, engine: &AnimationEngine) -> usize {
        for tick in 1..=5000 {
            window.step(engine, 0.008);
            if window.is_settled() {
                return tick;
            }
        }
        panic!("window did not settle");
    }

    #[test]
    fn pop_in_seed() {
        let target = Rect::new(100.0, 100.0, 400.0, 200.0);
        let window = AnimatedWindow::pop_in(target);
        assert_eq!(window.current_rect(), Rect::new(140.0, 120.0, 320.0, 160.0));
        assert_eq!(window.scale.current, 0.5);
        assert_eq!(window.opacity.current, 0.0);
        assert_eq!(window.target_rect(), target);
        assert_eq!(window.opacity.target, 1.0);
    }

    #[test]
    fn pop_in_first_frame_is_invisible() {
        let mut window = AnimatedWindow::pop_in(Rect::new(0.0, 0.0, 100.0, 100.0));
        let frame = window.take_frame().unwrap();
        assert!(!frame.visible);
        assert_eq!(frame.opacity, 0.0);
    }

    #[test]
    fn exponential_reaches_target_exactly() {
        let engine = exponential();
        let target = Rect::new(10.0, 20.0, 800.0, 600.0);
        let mut window = AnimatedWindow::pop_in(target);
        run_until_settled(&mut window, &engine);
        assert_eq!(window.current_rect(), target);
        assert_eq!(window.opacity.current, 1.0);
        assert_eq!(window.scale.current, 1.0);
    }

    #[test]
    fn spring_reaches_target_exactly() {
        let engine = AnimationEngine::default();
        let target = Rect::new(10.0, 20.0, 800.0, 600.0);
        let mut window = AnimatedWindow::pop_in(target);
        run_until_settled(&mut window, &engine);
        assert_eq!(window.current_rect(), target);
    }

    #[test]
    fn hide_targets_center_point() {
        let mut window = AnimatedWindow::pop_in(Rect::new(0.0, 0.0, 100.0, 100.0));
        run_until_settled(&mut window, &exponential());
        window.hide();
        assert_eq!(window.target_rect(), Rect::new(50.0, 50.0, 0.0, 0.0));
        assert_eq!(window.opacity.target, 0.0);
        assert_eq!(window.scale.target, 0.5);

        // A second hide while shrinking keeps the original point.
        window.step(&exponential(), 0.008);
        window.hide();
        assert_eq!(window.target_rect(), Rect::new(50.0, 50.0, 0.0, 0.0));
    }

    #[test]
    fn hidden_frames_clamp_size_and_turn_invisible() {
        let engine = exponential();
        let mut window = AnimatedWindow::pop_in(Rect::new(0.0, 0.0, 100.0, 100.0));
        run_until_settled(&mut window, &engine);
        window.hide();
        run_until_settled(&mut window, &engine);
        let frame = window.frame();
        assert_eq!(frame.rect.width, 1.0);
        assert_eq!(frame.rect.height, 1.0);
        assert!(!frame.visible);
    }

    #[test]
    fn unchanged_frames_are_suppressed() {
        let engine = exponential();
        let mut window = AnimatedWindow::pop_in(Rect::new(0.0, 0.0, 100.0, 100.0));
        run_until_settled(&mut window, &engine);
        assert!(window.take_frame().is_some());
        assert!(window.take_frame().is_none());
        window.step(&engine, 0.008);
        assert!(window.take_frame().is_none());
    }

    #[test]
    fn forgotten_frame_is_handed_out_again() {
        let engine = exponential();
        let mut window = AnimatedWindow::pop_in(Rect::new(0.0, 0.0, 100.0, 100.0));
        run_until_settled(&mut window, &engine);
        let sent = window.take_frame().unwrap();
        assert!(window.take_frame().is_none());

        window.forget_applied();
        assert_eq!(window.take_frame(), Some(sent));
        assert!(window.take_frame().is_none());
    }

    #[test]
    fn retarget_produces_new_frames() {
        let engine = exponential();
        let mut window = AnimatedWindow::pop_in(Rect::new(0.0, 0.0, 100.0, 100.0));
        run_until_settled(&mut window, &engine);
        window.take_frame();

        window.set_target(Rect::new(300.0, 0.0, 100.0, 100.0));
        window.step(&engine, 0.008);
        let frame = window.take_frame().unwrap();
        assert!(frame.rect.x > 0.0 && frame.rect.x < 300.0);
    }

    #[test]
    fn dt_is_clamped() {
        let engine = AnimationEngine::default();
        assert_eq!(engine.clamp_dt(5.0), 0.1);
        assert_eq!(engine.clamp_dt(-1.0), 0.0);
        assert_eq!(engine.clamp_dt(f64::NAN), 0.0);
        assert_eq!(engine.clamp_dt(0.008), 0.008);
    }

    #[test]
    fn long_stall_does_not_explode_spring() {
        let engine = AnimationEngine::default();
        let mut window = AnimatedWindow::pop_in(Rect::new(0.0, 0.0, 100.0, 100.0));
        window.set_target(Rect::new(1000.0, 0.0, 100.0, 100.0));
        window.step(&engine, 30.0);
        assert!(window.x.current.is_finite());
        assert!(window.x.current < 2000.0);
    }

    fn settles_at_frame_delta(engine: &AnimationEngine, dt: f64) -> Rect {
        let target = Rect::new(1000.0, 500.0, 400.0, 300.0);
        let mut window = AnimatedWindow::pop_in(Rect::new(0.0, 0.0, 100.0, 100.0));
        window.set_target(target);
        for _ in 0..200 {
            window.step(engine, dt);
            assert!(window.x.current.is_finite(), "diverged at dt {dt}");
            assert!(window.x.current.abs() < 5000.0, "overshot at dt {dt}");
            if window.is_settled() {
                return window.current_rect();
            }
        }
        panic!("spring did not settle at dt {dt}");
    }

    #[test]
    fn spring_settles_at_slowest_tick_rate() {
        // 100ms ticks deliver dt == max_dt on every step.
        let engine = AnimationEngine::default();
        let settled = settles_at_frame_delta(&engine, 0.1);
        assert_eq!(settled, Rect::new(1000.0, 500.0, 400.0, 300.0));
    }

    #[test]
    fn spring_settles_with_largest_max_dt() {
        let engine = AnimationEngine {
            max_dt: 1.0,
            ..AnimationEngine::default()
        };
        let settled = settles_at_frame_delta(&engine, 1.0);
        assert_eq!(settled, Rect::new(1000.0, 500.0, 400.0, 300.0));
    }

    #[test]
    fn stiff_spring_stays_bounded() {
        let engine = AnimationEngine {
            spring_tension: 20_000.0,
            spring_friction: 300.0,
            ..AnimationEngine::default()
        };
        let settled = settles_at_frame_delta(&engine, 0.1);
        assert_eq!(settled, Rect::new(1000.0, 500.0, 400.0, 300.0));
    }
}
