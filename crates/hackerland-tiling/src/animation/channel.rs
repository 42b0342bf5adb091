//! One independently interpolated scalar.

/// Snap distance for position and size channels, in pixels.
pub const GEOMETRY_EPSILON: f64 = 1.0;
/// Snap distance for scale and opacity, which live in `[0, 1]`.
pub const UNIT_EPSILON: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channel {
    pub current: f64,
    pub target: f64,
    /// Units per second. Always zero under exponential interpolation.
    pub velocity: f64,
}

impl Channel {
    /// A channel at rest on `value`.
    pub fn at(value: f64) -> Self {
        Self {
            current: value,
            target: value,
            velocity: 0.0,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target && self.velocity == 0.0
    }

    pub fn snap(&mut self) {
        self.current = self.target;
        self.velocity = 0.0;
    }

    /// Cover `speed` of the remaining distance. Never overshoots; snaps once
    /// within `epsilon`.
    pub fn step_exponential(&mut self, speed: f64, epsilon: f64) {
        self.velocity = 0.0;
        self.current += (self.target - self.current) * speed;
        if (self.target - self.current).abs() < epsilon {
            self.current = self.target;
        }
    }

    /// Semi-implicit Euler step of a damped spring pulling toward `target`.
    /// Snaps once both displacement and velocity are within `epsilon`.
    pub fn step_spring(&mut self, tension: f64, friction: f64, dt: f64, epsilon: f64) {
        let displacement = self.current - self.target;
        let acceleration = -tension * displacement - friction * self.velocity;
        self.velocity += acceleration * dt;
        self.current += self.velocity * dt;

        if (self.current - self.target).abs() < epsilon && self.velocity.abs() < epsilon {
            self.snap();
        }
    }
}
