//! Cube Clock entry point
//!
//! Native: runs the clock headless against the local wall clock and a
//! simulated tilt sensor, printing the face once a second.
//!
//! Usage: `cube-clock [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;
    use std::time::Instant;

    use cube_clock::ClockSettings;
    use cube_clock::CubeClock;
    use cube_clock::platform::native::{SystemClock, TiltSimulator};
    use cube_clock::platform::{Accelerometer, ClockSource, Scheduler, Trigger};
    use cube_clock::renderer::{TextCanvas, draw_snapshot};
    use cube_clock::sim::Rect;
    use cube_clock::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};

    env_logger::init();
    log::info!("Cube Clock (native) starting...");

    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = ClockSettings::load_or_default(settings_path.as_deref());
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Clock initialized with seed: {}", seed);

    let window = Rect::from_size(WINDOW_WIDTH, WINDOW_HEIGHT);
    let mut clock = CubeClock::new(window, &settings, seed);
    let mut wall = SystemClock;
    let mut tilt = TiltSimulator::default();
    let mut canvas = TextCanvas::new(window, 4.0, 8.0);
    let mut scheduler = Scheduler::new(clock.step_period());

    let start = Instant::now();
    loop {
        let now = start.elapsed();
        for trigger in scheduler.poll(now) {
            match trigger {
                Trigger::SecondTick => {
                    let time = wall.now();
                    let tick = clock.on_second_tick(time);
                    if tick.hour_encoded {
                        log::info!("Hour {} encoded", clock.clock_state().hour);
                    }

                    canvas.clear();
                    draw_snapshot(&mut canvas, &clock.snapshot());
                    println!(
                        "{:02}:{:02}:{:02}\n{}",
                        time.hour, time.minute, time.second, canvas
                    );
                }
                Trigger::PhysicsStep => {
                    let accel = tilt.sample_or_zero();
                    clock.physics_step(accel);
                }
            }
        }
        std::thread::sleep(scheduler.until_next(start.elapsed()));
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is `platform::web::start`, this is just to satisfy the compiler
}
