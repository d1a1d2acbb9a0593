use std::time::Duration;

use edgepoll::backends::virtual_input::VirtualSource;
use edgepoll::{logging, Direction, GamepadButton, InputConfig, InputManager, Key, Motor};

fn main() {
    let config = InputConfig {
        gamepad_count: 1,
        ..Default::default()
    };
    logging::init_from_config(&config);

    let mut input = InputManager::from_config(&config, edgepoll::NullSink)
        .expect("one gamepad slot")
        .with_sink(|pad: usize, req: edgepoll::VibrationRequest| {
            println!("(rumble) pad {pad}: {req:?}");
        });
    let mut source = VirtualSource::named("virtual:demo");
    let frame = Duration::from_millis(16);

    // A short script: (tick, action)
    for tick in 0..8 {
        match tick {
            1 => {
                source.connect(0);
                source.press_key(Key::Space);
            }
            2 => {
                source.press_button(0, GamepadButton::A);
                source.set_left_stick(0, 0.0, -0.9);
            }
            3 => {
                source.release_key(Key::Space);
                source.set_right_trigger(0, 0.8);
                input
                    .vibrate_left_motor(0, 1.0, Duration::from_millis(40))
                    .expect("slot 0 exists");
            }
            5 => {
                source.release_button(0, GamepadButton::A);
                source.set_left_stick(0, 0.0, 0.0);
                source.set_right_trigger(0, 0.0);
            }
            _ => {}
        }

        let t = input.update(&mut source, frame);
        let kb = input.keyboard();
        let pad = input.gamepad(0).expect("slot 0 exists");

        let mut edges = Vec::new();
        if kb.pressed(Key::Space) {
            edges.push("Space pressed".to_string());
        }
        if kb.released(Key::Space) {
            edges.push("Space released".to_string());
        }
        if pad.just_connected() {
            edges.push("pad connected".to_string());
        }
        if pad.pressed(GamepadButton::A) {
            edges.push("A pressed".to_string());
        }
        if pad.released(GamepadButton::A) {
            edges.push("A released".to_string());
        }
        for dir in Direction::ALL {
            if pad.left_stick().pressed(dir, 0.25) {
                edges.push(format!("stick {dir:?} pressed"));
            }
            if pad.left_stick().released(dir, 0.25) {
                edges.push(format!("stick {dir:?} released"));
            }
        }
        if pad.right_trigger().pressed(0.5) {
            edges.push("RT pressed".to_string());
        }
        if pad.right_trigger().released(0.5) {
            edges.push("RT released".to_string());
        }

        println!(
            "tick {:>2}: rumble={:.1} {}",
            t.index,
            pad.vibration().strength(Motor::Left),
            edges.join(", ")
        );
    }
}
