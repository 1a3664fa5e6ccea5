//! PID Hover entry point (headless demo loop)
//!
//! Drives the control loop against a scripted input source and an ASCII
//! render sink: poll input, apply events, run fixed-step catch-up, present,
//! sleep. Build with `--features viz` and run `pid-hover-viz` for the
//! windowed interactive version.

use std::thread;
use std::time::{Duration, Instant};

use glam::Vec2;

use pid_hover::input::{InputEvent, InputSource, ScriptedInput, TuneKey};
use pid_hover::render::{AsciiSink, FrameSnapshot, RenderSink};
use pid_hover::sim::{FixedStep, SimState};

/// Terminal canvas size (character cells)
const TERM_COLS: usize = 80;
const TERM_ROWS: usize = 36;
/// Frame pacing: bounded sleep capping the loop near 30 fps
const FRAME_PACE: Duration = Duration::from_millis(33);

/// Demo script: retarget twice, add some integral gain, then quit
fn demo_script() -> ScriptedInput {
    ScriptedInput::new(vec![
        (60, InputEvent::PointerDown(Vec2::new(400.0, 200.0))),
        (150, InputEvent::Key(TuneKey::KiUp)),
        (151, InputEvent::Key(TuneKey::KiUp)),
        (240, InputEvent::PointerDown(Vec2::new(400.0, 620.0))),
        (330, InputEvent::Key(TuneKey::Reset)),
        (420, InputEvent::Quit),
    ])
}

fn main() {
    env_logger::init();
    log::info!("PID Hover starting (headless demo)");

    let mut state = SimState::new();
    let mut driver = FixedStep::new();
    let mut source = demo_script();
    let mut sink = AsciiSink::stdout(TERM_COLS, TERM_ROWS);

    let mut events = Vec::new();
    let mut last = Instant::now();

    'frames: loop {
        let now = Instant::now();
        let frame_dt = now.duration_since(last).as_secs_f32();
        last = now;

        // Input first: mutations land before any tick of this frame
        events.clear();
        source.poll(&mut events);
        for event in &events {
            if matches!(event, InputEvent::Quit) {
                break 'frames;
            }
            state.apply(event);
        }

        driver.advance(&mut state, frame_dt);

        if let Err(err) = sink.present(&FrameSnapshot::capture(&state)) {
            log::error!("render sink failed: {err}");
            std::process::exit(1);
        }

        thread::sleep(FRAME_PACE);
    }

    if let Ok(json) = serde_json::to_string(&state) {
        log::debug!("final state: {json}");
    }
    log::info!("quit after {} ticks", state.time_ticks);
}
