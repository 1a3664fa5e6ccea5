//! Frame snapshots and render sinks
//!
//! The simulation never draws. Once per frame the app projects `SimState`
//! into a [`FrameSnapshot`] — one filled rectangle, one horizontal target
//! line, and a block of diagnostic text — and hands it to whatever
//! [`RenderSink`] the platform provides. Sinks know nothing about physics.

use std::io::{self, Write};

use glam::Vec2;

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::sim::{CanvasRect, SimState};

/// Everything a sink needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    /// The ball, quantized to canvas pixels
    pub ball: CanvasRect,
    /// Canvas row of the horizontal setpoint line
    pub target_y: i32,
    /// Diagnostic text, one line per entry
    pub hud: Vec<String>,
}

impl FrameSnapshot {
    /// Project the simulation state into drawable form
    pub fn capture(state: &SimState) -> Self {
        Self {
            ball: state.ball.rect,
            target_y: state.target as i32,
            hud: vec![
                "Controls:".to_string(),
                "Mouse Click - Set Target".to_string(),
                format!("Up/Down - Kp: {:.1}", state.pid.kp),
                format!("Left/Right - Ki: {:.1}", state.pid.ki),
                format!("PgUp/PgDn - Kd: {:.1}", state.pid.kd),
                "R - Reset PID".to_string(),
            ],
        }
    }
}

/// Destination for rendered frames
pub trait RenderSink {
    /// Present one frame; errors are surfaced so the loop can abort
    fn present(&mut self, frame: &FrameSnapshot) -> io::Result<()>;
}

/// Character-cell sink for terminals
///
/// Maps the pixel canvas onto a fixed character grid: `#` for the ball,
/// `-` for the target line, HUD text overlaid top-left.
pub struct AsciiSink<W: Write> {
    cols: usize,
    rows: usize,
    out: W,
}

impl AsciiSink<io::Stdout> {
    pub fn stdout(cols: usize, rows: usize) -> Self {
        Self::with_writer(cols, rows, io::stdout())
    }
}

impl<W: Write> AsciiSink<W> {
    pub fn with_writer(cols: usize, rows: usize, out: W) -> Self {
        Self { cols, rows, out }
    }

    /// Rasterize one frame into a newline-separated character grid
    pub fn rasterize(&self, frame: &FrameSnapshot) -> String {
        let scale = Vec2::new(
            self.cols as f32 / CANVAS_WIDTH,
            self.rows as f32 / CANVAS_HEIGHT,
        );
        let mut cells = vec![vec![b' '; self.cols]; self.rows];

        let clamp_row = |row: i32| (row.max(0) as usize).min(self.rows - 1);

        // Target line spans the full width
        let target_row = clamp_row((frame.target_y as f32 * scale.y) as i32);
        cells[target_row].fill(b'-');

        // Ball rectangle
        let x0 = ((frame.ball.x as f32 * scale.x) as usize).min(self.cols - 1);
        let x1 = (((frame.ball.x + frame.ball.w as i32) as f32 * scale.x) as usize)
            .clamp(x0 + 1, self.cols);
        let y0 = clamp_row((frame.ball.y as f32 * scale.y) as i32);
        let y1 = (((frame.ball.y + frame.ball.h as i32) as f32 * scale.y) as usize)
            .clamp(y0 + 1, self.rows);
        for row in &mut cells[y0..y1] {
            row[x0..x1].fill(b'#');
        }

        // HUD overlay, top-left
        for (row, line) in cells.iter_mut().zip(&frame.hud) {
            for (cell, ch) in row.iter_mut().zip(line.bytes()) {
                *cell = ch;
            }
        }

        let mut grid = String::with_capacity(self.rows * (self.cols + 1));
        for row in &cells {
            grid.push_str(&String::from_utf8_lossy(row));
            grid.push('\n');
        }
        grid
    }
}

impl<W: Write> RenderSink for AsciiSink<W> {
    fn present(&mut self, frame: &FrameSnapshot) -> io::Result<()> {
        let grid = self.rasterize(frame);
        writeln!(self.out, "{grid}")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BALL_SIZE, DEFAULT_KP};

    #[test]
    fn test_snapshot_geometry() {
        let mut state = SimState::new();
        state.target = 123.7;
        let snap = FrameSnapshot::capture(&state);
        assert_eq!(snap.target_y, 123);
        assert_eq!(snap.ball.w, BALL_SIZE as u32);
        assert_eq!(snap.ball.y, state.ball.pos as i32);
    }

    #[test]
    fn test_snapshot_hud_shows_gains() {
        let state = SimState::new();
        let snap = FrameSnapshot::capture(&state);
        assert!(snap.hud.iter().any(|l| l.contains(&format!("Kp: {DEFAULT_KP:.1}"))));
        assert!(snap.hud.iter().any(|l| l.contains("Ki: 0.0")));
    }

    #[test]
    fn test_rasterize_places_ball_and_line() {
        let state = SimState::new();
        let snap = FrameSnapshot::capture(&state);
        let sink = AsciiSink::with_writer(40, 20, Vec::new());
        let grid = sink.rasterize(&snap);

        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 20);
        // Ball starts mid-canvas, target line too; mid row holds one of them
        assert!(grid.contains('#'));
        assert!(grid.contains('-'));
        // HUD overlays the first rows
        assert!(lines[0].starts_with("Controls:"));
    }

    #[test]
    fn test_rasterize_clamps_out_of_range_target() {
        let mut state = SimState::new();
        state.target = 10_000.0;
        let snap = FrameSnapshot::capture(&state);
        let sink = AsciiSink::with_writer(40, 20, Vec::new());
        // Must not panic; line lands on the last row
        let grid = sink.rasterize(&snap);
        let last = grid.lines().last().unwrap_or_default();
        assert!(last.contains('-'));
    }

    #[test]
    fn test_present_writes_frame() {
        let state = SimState::new();
        let snap = FrameSnapshot::capture(&state);
        let mut sink = AsciiSink::with_writer(40, 20, Vec::new());
        sink.present(&snap).unwrap();
        assert!(!sink.out.is_empty());
    }
}
