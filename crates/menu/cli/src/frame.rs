//! Frame pacing for the cooperative render loop.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::{Terminal, backend::Backend};

/// Caps the render loop at a target frame rate.
///
/// `render` draws one frame and then sleeps out the remainder of the frame
/// budget; it is the only place the screen loop ever blocks.
#[derive(Clone, Debug)]
pub struct FrameClock {
    frame_budget: Duration,
    last_frame: Option<Instant>,
}

impl FrameClock {
    pub fn new(frames_per_second: u32) -> Self {
        let fps = frames_per_second.max(1);
        Self {
            frame_budget: Duration::from_secs(1) / fps,
            last_frame: None,
        }
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Draw one frame through the terminal, then block until the frame
    /// budget since the previous frame has elapsed.
    pub fn render<B, F>(&mut self, terminal: &mut Terminal<B>, draw: F) -> Result<()>
    where
        B: Backend,
        F: FnOnce(&mut ratatui::Frame),
    {
        terminal.draw(draw)?;

        if let Some(last) = self.last_frame {
            let elapsed = last.elapsed();
            if elapsed < self.frame_budget {
                thread::sleep(self.frame_budget - elapsed);
            }
        }
        self.last_frame = Some(Instant::now());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[test]
    fn render_enforces_the_frame_budget() {
        let backend = TestBackend::new(10, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut clock = FrameClock::new(50); // 20ms budget

        let start = Instant::now();
        for _ in 0..3 {
            clock.render(&mut terminal, |_| {}).unwrap();
        }

        // Two inter-frame gaps must have been paced.
        assert!(start.elapsed() >= Duration::from_millis(40));
    }

    #[test]
    fn zero_fps_is_clamped() {
        let clock = FrameClock::new(0);
        assert_eq!(clock.frame_budget(), Duration::from_secs(1));
    }
}
