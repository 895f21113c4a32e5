//! Damped spring used to smooth the scroll progress bar.

pub const STEP_SECS: f64 = 1.0 / 60.0;
const REST_DELTA: f64 = 0.001;
const REST_SPEED: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub position: f64,
    pub velocity: f64,
    stiffness: f64,
    damping: f64,
    mass: f64,
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// Semi-implicit Euler step toward `target`.
    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        let force = -self.stiffness * (self.position - target) - self.damping * self.velocity;
        self.velocity += force / self.mass * dt;
        self.position += self.velocity * dt;
        self.position
    }

    /// Advances by `elapsed` seconds in fixed steps. Snaps onto the target once
    /// it is close enough and slow enough, so callers can stop scheduling frames.
    pub fn advance(&mut self, target: f64, elapsed: f64) -> f64 {
        let steps = (elapsed / STEP_SECS).round().clamp(1.0, 10.0) as usize;
        for _ in 0..steps {
            self.step(target, STEP_SECS);
        }
        if self.is_settled(target) {
            self.position = target;
            self.velocity = 0.0;
        }
        self.position
    }

    pub fn is_settled(&self, target: f64) -> bool {
        (self.position - target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }
}

/// Vertical scroll position as a fraction of the scrollable range.
pub fn scroll_ratio(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, target: f64, frames: usize) -> Vec<f64> {
        (0..frames).map(|_| spring.advance(target, STEP_SECS)).collect()
    }

    #[test]
    fn ratio_zero_stays_at_zero() {
        let mut s = Spring::new(100.0, 30.0);
        let trace = run(&mut s, 0.0, 60);
        assert!(trace.iter().all(|p| *p == 0.0));
    }

    #[test]
    fn ratio_one_converges_to_one() {
        let mut s = Spring::new(100.0, 30.0);
        let trace = run(&mut s, 1.0, 600);
        assert_eq!(*trace.last().unwrap(), 1.0);
        assert!(s.is_settled(1.0));
    }

    #[test]
    fn intermediate_target_is_monotonic_without_overshoot() {
        let mut s = Spring::new(100.0, 30.0);
        let trace = run(&mut s, 0.37, 600);
        assert!(trace.windows(2).all(|w| w[0] <= w[1]));
        assert!(trace.iter().all(|p| *p <= 0.37));
        assert_eq!(*trace.last().unwrap(), 0.37);
    }

    #[test]
    fn scrolling_back_up_converges_down() {
        let mut s = Spring::new(100.0, 30.0);
        run(&mut s, 1.0, 600);
        let trace = run(&mut s, 0.0, 600);
        assert!(trace.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(*trace.last().unwrap(), 0.0);
    }

    #[test]
    fn under_damped_spring_still_converges() {
        let mut s = Spring::new(300.0, 5.0);
        let trace = run(&mut s, 1.0, 2000);
        assert!(trace.iter().any(|p| *p > 1.0));
        assert_eq!(*trace.last().unwrap(), 1.0);
    }

    #[test]
    fn scroll_ratio_bounds() {
        assert_eq!(scroll_ratio(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_ratio(2000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_ratio(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_ratio(5000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_ratio(10.0, 800.0, 1000.0), 0.0);
    }
}
