//! Dual-buffer edge tracking.
//!
//! [`EdgeTracker`] keeps the value sampled on the current tick next to the one
//! sampled on the tick before it. Every predicate in this crate ("just
//! pressed", "just released", "currently down", "moved") is a comparison of
//! those two buffers.
//!
//! The tracker is generic over its payload; the predicate set depends on the
//! payload type:
//!
//! | payload | predicates | gate |
//! |---|---|---|
//! | `bool` | `check`, `pressed`, `released` | none |
//! | `f32` | `value`, `delta`, `has_moved`, `check`, `pressed`, `released` | threshold |
//! | [`Vec2`] | `value`, `delta`, `has_moved`, `check`/`pressed`/`released` per [`Direction`] | deadzone |
//! | [`Point`] | `delta`, `has_moved` | none |
//!
//! # Threading the gate
//! Scalar and stick predicates gate *both* buffers with the argument they are
//! given. Passing a different threshold or deadzone on consecutive ticks makes
//! the edge predicates compare values gated differently; that is a caller
//! error and is not detected.
//!
//! # Example
//! ```
//! use edgepoll::EdgeTracker;
//!
//! let mut trigger = EdgeTracker::<f32>::new();
//! trigger.update(0.3);
//! assert!(trigger.pressed(0.2));
//! assert!(!trigger.check(0.5));
//! ```

use crate::channel::{Point, Sample, Vec2, Which, SCALAR_EPSILON, VECTOR_EPSILON};

/// `(previous, current)` pair for one channel.
///
/// Both buffers start at the payload's zero value, so every edge predicate is
/// `false` until the first [`update`](Self::update).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeTracker<T> {
    previous: T,
    current: T,
}

impl<T: Sample> EdgeTracker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift `current` into `previous` and store `raw` as the new current value.
    ///
    /// Call exactly once per tick. Skipping a tick keeps the last values; they
    /// do not decay.
    #[inline]
    pub fn update(&mut self, raw: T) {
        self.previous = self.current;
        self.current = raw.ingest();
    }

    #[inline]
    pub fn current(&self) -> T {
        self.current
    }

    #[inline]
    pub fn previous(&self) -> T {
        self.previous
    }

    #[inline]
    pub fn get(&self, which: Which) -> T {
        match which {
            Which::Current => self.current,
            Which::Previous => self.previous,
        }
    }

    /// Raw inequality of the two buffers, ignoring any gate.
    #[inline]
    pub fn changed(&self) -> bool {
        self.current != self.previous
    }

    /// Zero both buffers.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// --- buttons -------------------------------------------------------------

impl EdgeTracker<bool> {
    /// Down on this tick.
    #[inline]
    pub fn check(&self) -> bool {
        self.current
    }

    /// Down on this tick, up on the previous one.
    #[inline]
    pub fn pressed(&self) -> bool {
        self.current && !self.previous
    }

    /// Up on this tick, down on the previous one.
    #[inline]
    pub fn released(&self) -> bool {
        !self.current && self.previous
    }
}

// --- scalar axes ---------------------------------------------------------

impl EdgeTracker<f32> {
    /// The selected buffer if it is at or above `threshold`, else `0.0`.
    ///
    /// Every other scalar predicate is computed on this gated value.
    #[inline]
    pub fn value(&self, which: Which, threshold: f32) -> f32 {
        let v = self.get(which);
        if v >= threshold {
            v
        } else {
            0.0
        }
    }

    /// Gated `current - previous`.
    #[inline]
    pub fn delta(&self, threshold: f32) -> f32 {
        self.value(Which::Current, threshold) - self.value(Which::Previous, threshold)
    }

    /// The gated value increased. A decrease is not movement.
    #[inline]
    pub fn has_moved(&self, threshold: f32) -> bool {
        self.delta(threshold) > SCALAR_EPSILON
    }

    #[inline]
    pub fn check(&self, threshold: f32) -> bool {
        self.value(Which::Current, threshold) > SCALAR_EPSILON
    }

    /// Past the threshold now; the gated previous value was below epsilon.
    #[inline]
    pub fn pressed(&self, threshold: f32) -> bool {
        self.check(threshold) && self.value(Which::Previous, threshold) < SCALAR_EPSILON
    }

    /// Not past the threshold now; the gated previous value exceeded epsilon.
    #[inline]
    pub fn released(&self, threshold: f32) -> bool {
        !self.check(threshold) && self.value(Which::Previous, threshold) > SCALAR_EPSILON
    }
}

// --- sticks --------------------------------------------------------------

/// Cardinal direction of a stick in channel space (up = +y, right = +x).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Whether `v` points this way by more than epsilon on the relevant axis.
    #[inline]
    pub fn is_active(self, v: Vec2) -> bool {
        match self {
            Direction::Up => v.y > VECTOR_EPSILON,
            Direction::Down => v.y < -VECTOR_EPSILON,
            Direction::Right => v.x > VECTOR_EPSILON,
            Direction::Left => v.x < -VECTOR_EPSILON,
        }
    }
}

impl EdgeTracker<Vec2> {
    /// The selected buffer if `|v|² >= deadzone²`, else [`Vec2::ZERO`].
    #[inline]
    pub fn value(&self, which: Which, deadzone: f64) -> Vec2 {
        let v = self.get(which);
        if v.length_squared() >= deadzone * deadzone {
            v
        } else {
            Vec2::ZERO
        }
    }

    /// Gated `current - previous`.
    #[inline]
    pub fn delta(&self, deadzone: f64) -> Vec2 {
        self.value(Which::Current, deadzone) - self.value(Which::Previous, deadzone)
    }

    /// The gated value changed in any direction.
    #[inline]
    pub fn has_moved(&self, deadzone: f64) -> bool {
        self.delta(deadzone) != Vec2::ZERO
    }

    #[inline]
    pub fn check(&self, direction: Direction, deadzone: f64) -> bool {
        direction.is_active(self.value(Which::Current, deadzone))
    }

    /// Pointing `direction` now; the gated previous value was neutral or on
    /// the opposite side.
    #[inline]
    pub fn pressed(&self, direction: Direction, deadzone: f64) -> bool {
        self.check(direction, deadzone)
            && !direction.is_active(self.value(Which::Previous, deadzone))
    }

    /// Not pointing `direction` now; the gated previous value was.
    #[inline]
    pub fn released(&self, direction: Direction, deadzone: f64) -> bool {
        !self.check(direction, deadzone)
            && direction.is_active(self.value(Which::Previous, deadzone))
    }
}

// --- pointer -------------------------------------------------------------

impl EdgeTracker<Point> {
    /// `current - previous` in screen units.
    #[inline]
    pub fn delta(&self) -> Vec2 {
        Vec2::new(
            self.current.x - self.previous.x,
            self.current.y - self.previous.y,
        )
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.changed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed<T: Sample>(tracker: &mut EdgeTracker<T>, values: &[T]) {
        for &v in values {
            tracker.update(v);
        }
    }

    #[test]
    fn button_round_trip() {
        let mut b = EdgeTracker::<bool>::new();
        let mut pressed = Vec::new();
        let mut released = Vec::new();
        let mut check = Vec::new();
        for v in [false, true, true, false] {
            b.update(v);
            pressed.push(b.pressed());
            released.push(b.released());
            check.push(b.check());
        }
        assert_eq!(pressed, [false, true, false, false]);
        assert_eq!(released, [false, false, false, true]);
        assert_eq!(check, [false, true, true, false]);
    }

    #[test]
    fn button_before_first_update() {
        let b = EdgeTracker::<bool>::new();
        assert!(!b.check());
        assert!(!b.pressed());
        assert!(!b.released());
    }

    #[test]
    fn button_predicates_hold_without_update() {
        let mut b = EdgeTracker::<bool>::new();
        b.update(true);
        assert!(b.pressed());
        // No tick: the edge is still reported.
        assert!(b.pressed());
        assert!(!b.previous());
        assert!(b.current());
    }

    #[test]
    fn scalar_threshold_gates_value() {
        let mut t = EdgeTracker::<f32>::new();
        t.update(0.5);
        assert!(!t.check(0.6));
        assert!(t.check(0.4));
        assert_eq!(t.value(Which::Current, 0.6), 0.0);
        assert_eq!(t.value(Which::Current, 0.5), 0.5);
    }

    #[test]
    fn scalar_zero_threshold_counts_any_positive_value() {
        let mut t = EdgeTracker::<f32>::new();
        t.update(0.01);
        assert!(t.check(0.0));
        assert!(t.pressed(0.0));
        t.update(-0.5);
        assert!(!t.check(0.0));
        assert!(t.released(0.0));
    }

    #[test]
    fn scalar_pressed_uses_gated_previous() {
        let mut t = EdgeTracker::<f32>::new();
        // Raw previous is non-zero but below the threshold, so it gates to 0.
        feed(&mut t, &[0.2, 0.8]);
        assert!(t.pressed(0.5));
        assert!(!t.pressed(0.1));
    }

    #[test]
    fn scalar_release_edge() {
        let mut t = EdgeTracker::<f32>::new();
        feed(&mut t, &[0.9, 0.3]);
        assert!(t.released(0.5));
        assert!(!t.released(0.2));
        assert!(!t.pressed(0.5));
    }

    #[test]
    fn scalar_has_moved_is_directional() {
        let mut t = EdgeTracker::<f32>::new();
        feed(&mut t, &[0.2, 0.6]);
        assert!(t.has_moved(0.0));
        assert!((t.delta(0.0) - 0.4).abs() < 1e-6);
        t.update(0.1);
        assert!(t.delta(0.0) < 0.0);
        assert!(!t.has_moved(0.0));
    }

    #[test]
    fn scalar_out_of_range_values_pass_through() {
        let mut t = EdgeTracker::<f32>::new();
        t.update(3.5);
        assert_eq!(t.value(Which::Current, 0.0), 3.5);
        assert!(t.check(1.0));
    }

    #[test]
    fn stick_write_flips_y() {
        let mut s = EdgeTracker::<Vec2>::new();
        s.update(Vec2::new(0.0, 1.0));
        assert_eq!(s.current(), Vec2::new(0.0, -1.0));
        assert!(s.check(Direction::Down, 0.0));
        assert!(!s.check(Direction::Up, 0.0));
    }

    #[test]
    fn stick_deadzone_uses_magnitude() {
        let mut s = EdgeTracker::<Vec2>::new();
        s.update(Vec2::new(0.05, 0.05));
        assert_eq!(s.value(Which::Current, 0.2), Vec2::ZERO);
        assert_eq!(s.value(Which::Current, 0.01), Vec2::new(0.05, -0.05));
        // Exactly on the boundary counts as outside the deadzone.
        s.update(Vec2::new(0.0, 0.5));
        assert_eq!(s.value(Which::Current, 0.5), Vec2::new(0.0, -0.5));
    }

    #[test]
    fn stick_directions_are_symmetric() {
        let cases = [
            (Vec2::new(0.0, -1.0), Direction::Up),
            (Vec2::new(0.0, 1.0), Direction::Down),
            (Vec2::new(-1.0, 0.0), Direction::Left),
            (Vec2::new(1.0, 0.0), Direction::Right),
        ];
        for (raw, dir) in cases {
            let mut s = EdgeTracker::<Vec2>::new();
            s.update(raw);
            assert!(s.check(dir, 0.2), "{dir:?}");
            assert!(s.pressed(dir, 0.2), "{dir:?}");
            assert!(!s.check(dir.opposite(), 0.2), "{dir:?}");
            s.update(Vec2::ZERO);
            assert!(s.released(dir, 0.2), "{dir:?}");
            assert!(!s.pressed(dir.opposite(), 0.2), "{dir:?}");
        }
    }

    #[test]
    fn stick_flip_across_center_presses_opposite() {
        let mut s = EdgeTracker::<Vec2>::new();
        feed(&mut s, &[Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0)]);
        assert!(s.pressed(Direction::Right, 0.1));
        assert!(s.released(Direction::Left, 0.1));
    }

    #[test]
    fn stick_held_direction_is_not_pressed_again() {
        let mut s = EdgeTracker::<Vec2>::new();
        feed(&mut s, &[Vec2::new(0.0, -0.9), Vec2::new(0.3, -0.7)]);
        assert!(s.check(Direction::Up, 0.2));
        assert!(!s.pressed(Direction::Up, 0.2));
        assert!(s.pressed(Direction::Right, 0.2));
    }

    #[test]
    fn stick_movement_inside_deadzone_is_ignored() {
        let mut s = EdgeTracker::<Vec2>::new();
        feed(&mut s, &[Vec2::new(0.01, 0.0), Vec2::new(0.05, 0.02)]);
        assert!(!s.has_moved(0.1));
        assert!(s.has_moved(0.0));
        assert_eq!(s.delta(0.1), Vec2::ZERO);
    }

    #[test]
    fn pointer_delta_keeps_screen_orientation() {
        let mut p = EdgeTracker::<Point>::new();
        feed(&mut p, &[Point::new(10.0, 10.0), Point::new(15.0, 4.0)]);
        assert_eq!(p.current(), Point::new(15.0, 4.0));
        assert_eq!(p.delta(), Vec2::new(5.0, -6.0));
        assert!(p.has_moved());
        p.update(Point::new(15.0, 4.0));
        assert!(!p.has_moved());
    }

    #[test]
    fn changed_ignores_gates() {
        let mut t = EdgeTracker::<f32>::new();
        t.update(0.05);
        assert!(t.changed());
        // Both samples sit under the threshold, so the gated view is still.
        assert_eq!(t.delta(0.1), 0.0);
        t.update(0.05);
        assert!(!t.changed());
    }

    #[test]
    fn scalar_epsilon_tie_is_not_active() {
        let mut t = EdgeTracker::<f32>::new();

        t.update(SCALAR_EPSILON);
        assert!(!t.check(0.0));
        assert!(!t.pressed(0.0));
        assert!(!t.released(0.0));

        // The previous value sits exactly on epsilon: not "below", so no press
        // edge even though check turns on.
        t.update(0.5);
        assert!(t.check(0.0));
        assert!(!t.pressed(0.0));
        assert!(!t.released(0.0));

        t.update(SCALAR_EPSILON);
        assert!(!t.check(0.0));
        assert!(t.released(0.0));

        // Leaving the tie towards zero is not a release either.
        t.update(0.0);
        assert!(!t.released(0.0));
        assert!(!t.pressed(0.0));
    }

    #[test]
    fn stick_epsilon_tie_is_neutral() {
        for dir in Direction::ALL {
            let (tie, full) = match dir {
                Direction::Up => (Vec2::new(0.0, VECTOR_EPSILON), Vec2::new(0.0, 0.5)),
                Direction::Down => (Vec2::new(0.0, -VECTOR_EPSILON), Vec2::new(0.0, -0.5)),
                Direction::Right => (Vec2::new(VECTOR_EPSILON, 0.0), Vec2::new(0.5, 0.0)),
                Direction::Left => (Vec2::new(-VECTOR_EPSILON, 0.0), Vec2::new(-0.5, 0.0)),
            };
            // Samples are written in raw space (down = +y).
            let raw = |v: Vec2| Vec2::new(v.x, -v.y);

            let mut s = EdgeTracker::<Vec2>::new();
            s.update(raw(tie));
            assert_eq!(s.current(), tie);
            for d in Direction::ALL {
                assert!(!s.check(d, 0.0), "{dir:?} tie active as {d:?}");
                assert!(!s.pressed(d, 0.0));
            }

            // A tie counts as neutral, so moving out of it presses.
            s.update(raw(full));
            assert!(s.pressed(dir, 0.0), "{dir:?}");

            s.update(raw(tie));
            assert!(s.released(dir, 0.0), "{dir:?}");

            s.update(Vec2::ZERO);
            assert!(!s.released(dir, 0.0), "{dir:?}");
        }
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut b = EdgeTracker::<bool>::new();
        feed(&mut b, &[true, true]);
        b.reset();
        assert_eq!(b, EdgeTracker::new());
    }
}
