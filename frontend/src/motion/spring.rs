/// Mass-spring-damper constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    /// 1.0 is critical damping; above it the spring never overshoots.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

// Integration substep and the longest frame gap we integrate across.
const SUBSTEP: f64 = 1.0 / 120.0;
const MAX_FRAME: f64 = 0.064;
const REST_DELTA: f64 = 0.01;
const REST_SPEED: f64 = 0.05;

/// One-dimensional spring chasing a target value.
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        let config = SpringConfig {
            stiffness: config.stiffness.max(0.0),
            damping: config.damping.max(0.0),
            mass: config.mass.max(0.0),
        };
        Self {
            config,
            position: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn is_settled(&self) -> bool {
        (self.position - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Integrate `dt` seconds and return the new position. Gaps longer than
    /// a few frames are truncated so a backgrounded tab does not teleport
    /// the value.
    ///
    /// Each substep is backward Euler, solved for the new velocity:
    /// `v' = (m v - h k d) / (m + h c + h² k)`. The denominator only grows
    /// with stiffness and damping, so the step stays stable for any
    /// non-negative constants, including a massless first-order lag.
    pub fn advance(&mut self, dt: f64) -> f64 {
        let mut remaining = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME) } else { 0.0 };
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP);
            let displacement = self.position - self.target;
            let denominator = mass + h * damping + h * h * stiffness;
            if !(denominator > 0.0) {
                // No force and no inertia: nothing resists the target.
                self.position = self.target;
                self.velocity = 0.0;
                break;
            }
            self.velocity = (mass * self.velocity - h * stiffness * displacement) / denominator;
            self.position += self.velocity * h;
            remaining -= h;
        }
        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CURSOR_SPRING;

    fn run(spring: &mut Spring, seconds: f64) -> Vec<f64> {
        let frames = (seconds / 0.016).round() as usize;
        (0..frames).map(|_| spring.advance(0.016)).collect()
    }

    #[test]
    fn cursor_spring_is_about_critical() {
        let ratio = CURSOR_SPRING.damping_ratio();
        assert!((0.95..1.1).contains(&ratio), "ratio {}", ratio);
    }

    #[test]
    fn settles_on_target() {
        let mut spring = Spring::new(CURSOR_SPRING, 0.0);
        spring.set_target(400.0);
        run(&mut spring, 1.0);
        assert!(spring.is_settled());
        assert_eq!(spring.position(), 400.0);
    }

    #[test]
    fn trails_then_catches_up_without_overshoot() {
        let mut spring = Spring::new(CURSOR_SPRING, 0.0);
        spring.set_target(100.0);
        let path = run(&mut spring, 0.5);
        assert!(path[0] > 0.0 && path[0] < 50.0, "first frame {}", path[0]);
        assert!(path.iter().all(|&x| x <= 100.5));
        assert!(path.windows(2).all(|w| w[1] >= w[0] - 1e-2));
        assert!((path[path.len() - 1] - 100.0).abs() < 0.5);
    }

    #[test]
    fn long_frame_gap_is_truncated() {
        let mut stalled = Spring::new(CURSOR_SPRING, 0.0);
        stalled.set_target(100.0);
        let after_gap = stalled.advance(10.0);

        let mut reference = Spring::new(CURSOR_SPRING, 0.0);
        reference.set_target(100.0);
        let after_max = reference.advance(MAX_FRAME);

        assert_eq!(after_gap, after_max);
        assert!(after_gap < 100.0);
    }

    #[test]
    fn retargeting_mid_flight_reverses() {
        let mut spring = Spring::new(CURSOR_SPRING, 0.0);
        spring.set_target(200.0);
        run(&mut spring, 0.1);
        let midway = spring.position();
        spring.set_target(0.0);
        run(&mut spring, 1.0);
        assert!(midway > 0.0);
        assert_eq!(spring.position(), 0.0);
    }

    #[test]
    fn ignores_non_finite_input() {
        let mut spring = Spring::new(CURSOR_SPRING, 5.0);
        spring.set_target(f64::NAN);
        assert_eq!(spring.target(), 5.0);
        assert_eq!(spring.advance(f64::INFINITY), 5.0);
    }

    fn settles_within(config: SpringConfig, seconds: f64) {
        let mut spring = Spring::new(config, 0.0);
        spring.set_target(100.0);
        let path = run(&mut spring, seconds);
        assert!(path.iter().all(|x| x.is_finite()), "{:?} diverged", config);
        assert!(spring.is_settled(), "{:?} ended at {}", config, spring.position());
        assert_eq!(spring.position(), 100.0);
    }

    #[test]
    fn massless_spring_settles_as_a_lag() {
        settles_within(
            SpringConfig {
                mass: 0.0,
                ..CURSOR_SPRING
            },
            1.5,
        );
    }

    #[test]
    fn light_overdamped_spring_settles() {
        let config = SpringConfig {
            stiffness: 300.0,
            damping: 25.0,
            mass: 0.1,
        };
        assert!(config.damping_ratio() > 2.0);
        settles_within(config, 1.5);
    }

    #[test]
    fn stiff_spring_settles() {
        settles_within(
            SpringConfig {
                stiffness: 5000.0,
                damping: 100.0,
                mass: 1.0,
            },
            1.5,
        );
    }

    #[test]
    fn forceless_spring_jumps_to_target() {
        let config = SpringConfig {
            stiffness: 0.0,
            damping: 0.0,
            mass: 0.0,
        };
        let mut spring = Spring::new(config, 0.0);
        spring.set_target(42.0);
        assert_eq!(spring.advance(0.016), 42.0);
        assert!(spring.is_settled());
    }
}
