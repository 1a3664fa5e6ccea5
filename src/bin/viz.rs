//! Windowed interactive simulator (requires the `viz` feature)
//!
//! Click to move the target line, arrow keys tune Kp, left/right tune Ki,
//! PageUp/PageDown tune Kd, `R` resets the controller, Escape quits.

use eframe::egui;
use glam::Vec2;

use pid_hover::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use pid_hover::input::{InputEvent, TuneKey};
use pid_hover::render::FrameSnapshot;
use pid_hover::sim::{FixedStep, SimState};

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([CANVAS_WIDTH, CANVAS_HEIGHT])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "PID Control Simulator",
        options,
        Box::new(|_| Ok(Box::new(VizApp::new()))),
    )
}

struct VizApp {
    state: SimState,
    driver: FixedStep,
}

impl VizApp {
    fn new() -> Self {
        Self {
            state: SimState::new(),
            driver: FixedStep::new(),
        }
    }

    /// Translate this frame's egui input into boundary events
    fn collect_events(&self, i: &egui::InputState) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if i.pointer.primary_pressed() {
            if let Some(pos) = i.pointer.interact_pos() {
                events.push(InputEvent::PointerDown(Vec2::new(pos.x, pos.y)));
            }
        }

        let bindings = [
            (egui::Key::ArrowUp, TuneKey::KpUp),
            (egui::Key::ArrowDown, TuneKey::KpDown),
            (egui::Key::ArrowRight, TuneKey::KiUp),
            (egui::Key::ArrowLeft, TuneKey::KiDown),
            (egui::Key::PageUp, TuneKey::KdUp),
            (egui::Key::PageDown, TuneKey::KdDown),
            (egui::Key::R, TuneKey::Reset),
        ];
        for (key, tune) in bindings {
            if i.key_pressed(key) {
                events.push(InputEvent::Key(tune));
            }
        }

        if i.key_pressed(egui::Key::Escape) {
            events.push(InputEvent::Quit);
        }

        events
    }
}

impl eframe::App for VizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (events, frame_dt) = ctx.input(|i| (self.collect_events(i), i.stable_dt));

        for event in &events {
            if matches!(event, InputEvent::Quit) {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
            self.state.apply(event);
        }

        self.driver.advance(&mut self.state, frame_dt);
        let snap = FrameSnapshot::capture(&self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let painter = ui.painter();

                painter.rect_filled(
                    ctx.screen_rect(),
                    egui::CornerRadius::ZERO,
                    egui::Color32::from_rgb(240, 240, 240),
                );

                painter.hline(
                    0.0..=CANVAS_WIDTH,
                    snap.target_y as f32,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(0, 200, 0)),
                );

                painter.rect_filled(
                    egui::Rect::from_min_size(
                        egui::pos2(snap.ball.x as f32, snap.ball.y as f32),
                        egui::vec2(snap.ball.w as f32, snap.ball.h as f32),
                    ),
                    egui::CornerRadius::ZERO,
                    egui::Color32::from_rgb(200, 0, 0),
                );

                painter.text(
                    egui::pos2(10.0, 10.0),
                    egui::Align2::LEFT_TOP,
                    snap.hud.join("\n"),
                    egui::FontId::monospace(18.0),
                    egui::Color32::BLACK,
                );
            });

        // Animate continuously, not only on input
        ctx.request_repaint();
    }
}
