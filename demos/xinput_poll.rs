#[cfg(all(windows, feature = "xinput"))]
fn main() {
    use std::time::{Duration, Instant};

    use edgepoll::backends::windows::{XInputRumble, XInputSource};
    use edgepoll::{logging, Direction, GamepadButton, InputConfig, InputManager};

    let config = InputConfig {
        keyboard: false,
        mouse: false,
        ..Default::default()
    };
    logging::init_from_config(&config);

    let mut input = InputManager::from_config(&config, XInputRumble).expect("valid config");
    let mut source = XInputSource::new();
    let mut last = Instant::now();

    loop {
        let now = Instant::now();
        input.update(&mut source, now - last);
        last = now;

        for pad in input.gamepads().iter() {
            for &button in GamepadButton::ALL.iter() {
                if pad.pressed(button) {
                    println!("pad {}: {button:?} pressed", pad.index());
                }
                if pad.released(button) {
                    println!("pad {}: {button:?} released", pad.index());
                }
            }
            for dir in Direction::ALL {
                if pad.left_stick().pressed(dir, 0.3) {
                    println!("pad {}: left stick {dir:?}", pad.index());
                }
            }
            if pad.right_trigger().pressed(0.5) {
                println!("pad {}: RT", pad.index());
            }
        }

        // Rumble on A, for a quick actuator check.
        let hits: Vec<usize> = input
            .gamepads()
            .iter()
            .filter(|pad| pad.pressed(GamepadButton::A))
            .map(|pad| pad.index())
            .collect();
        for index in hits {
            let _ = input.vibrate(index, 0.6, 0.6, Duration::from_millis(150));
        }

        // Sleep a touch to avoid pegging the CPU in the demo
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[cfg(not(all(windows, feature = "xinput")))]
fn main() {
    eprintln!("xinput_poll needs Windows and the `xinput` feature");
}
