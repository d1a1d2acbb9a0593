//! Properties every edge tracker must hold regardless of input history.

use edgepoll::{Direction, EdgeTracker, Vec2, Which};
use proptest::collection::vec;
use proptest::prelude::*;
use rstest::rstest;

proptest! {
    #[test]
    fn button_never_pressed_and_released(values in vec(any::<bool>(), 0..64)) {
        let mut b = EdgeTracker::<bool>::new();
        prop_assert!(!(b.pressed() && b.released()));
        for v in values {
            b.update(v);
            prop_assert!(!(b.pressed() && b.released()));
            prop_assert_eq!(b.check(), v);
        }
    }

    #[test]
    fn repeated_button_sample_has_no_edge(values in vec(any::<bool>(), 1..64)) {
        let mut b = EdgeTracker::<bool>::new();
        for v in values {
            b.update(v);
            b.update(v);
            prop_assert!(!b.pressed());
            prop_assert!(!b.released());
        }
    }

    #[test]
    fn scalar_never_pressed_and_released(
        values in vec(-2.0f32..2.0, 0..64),
        threshold in 0.0f32..1.0,
    ) {
        let mut t = EdgeTracker::<f32>::new();
        for v in values {
            t.update(v);
            prop_assert!(!(t.pressed(threshold) && t.released(threshold)));
        }
    }

    #[test]
    fn repeated_scalar_sample_has_no_edge(
        values in vec(0.0f32..1.0, 1..32),
        threshold in 0.0f32..1.0,
    ) {
        let mut t = EdgeTracker::<f32>::new();
        for v in values {
            t.update(v);
            t.update(v);
            prop_assert!(!t.pressed(threshold));
            prop_assert!(!t.released(threshold));
            prop_assert!(!t.has_moved(threshold));
        }
    }

    #[test]
    fn stick_never_pressed_and_released(
        values in vec((-1.0f64..1.0, -1.0f64..1.0), 0..64),
        deadzone in 0.0f64..0.5,
    ) {
        let mut s = EdgeTracker::<Vec2>::new();
        for raw in values {
            s.update(raw.into());
            for dir in Direction::ALL {
                prop_assert!(!(s.pressed(dir, deadzone) && s.released(dir, deadzone)));
                // Opposite directions cannot both be active.
                prop_assert!(!(s.check(dir, deadzone) && s.check(dir.opposite(), deadzone)));
            }
        }
    }

    #[test]
    fn stick_write_always_flips_y(x in -1.0f64..1.0, y in -1.0f64..1.0) {
        let mut s = EdgeTracker::<Vec2>::new();
        s.update(Vec2::new(x, y));
        prop_assert_eq!(s.current(), Vec2::new(x, -y));
    }
}

#[rstest]
#[case(0.6, false)]
#[case(0.5, true)]
#[case(0.4, true)]
#[case(0.0, true)]
fn threshold_gates_check(#[case] threshold: f32, #[case] expected: bool) {
    let mut t = EdgeTracker::<f32>::new();
    t.update(0.5);
    assert_eq!(t.check(threshold), expected);
    assert_eq!(t.pressed(threshold), expected);
}

#[rstest]
#[case(0.2, Vec2::ZERO)]
#[case(0.01, Vec2::new(0.05, -0.05))]
#[case(0.0, Vec2::new(0.05, -0.05))]
fn deadzone_gates_value(#[case] deadzone: f64, #[case] expected: Vec2) {
    let mut s = EdgeTracker::<Vec2>::new();
    s.update(Vec2::new(0.05, 0.05));
    assert_eq!(s.value(Which::Current, deadzone), expected);
}

#[rstest]
#[case(Direction::Up, (0.0, -0.8))]
#[case(Direction::Down, (0.0, 0.8))]
#[case(Direction::Left, (-0.8, 0.0))]
#[case(Direction::Right, (0.8, 0.0))]
fn direction_edge_sequence(#[case] dir: Direction, #[case] raw: (f64, f64)) {
    let mut s = EdgeTracker::<Vec2>::new();
    let mut pressed = Vec::new();
    let mut released = Vec::new();
    for sample in [Vec2::ZERO, raw.into(), raw.into(), Vec2::ZERO] {
        s.update(sample);
        pressed.push(s.pressed(dir, 0.25));
        released.push(s.released(dir, 0.25));
    }
    assert_eq!(pressed, [false, true, false, false]);
    assert_eq!(released, [false, false, false, true]);
}
