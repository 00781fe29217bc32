//! One-line ASCII renderer.

use std::io::{self, Write};

use qs_client::{ClientView, ExitDirection, Mood};
use qs_core::Viewport;
use qs_driver::Renderer;

/// Draws the queue as a single lane of characters, one per client.
///
/// | Glyph | Meaning                          |
/// |-------|----------------------------------|
/// | `o`   | calm, waiting                    |
/// | `~`   | neutral, waiting                 |
/// | `!`   | agitated, waiting                |
/// | `^`   | leaving upward                   |
/// | `v`   | leaving downward                 |
///
/// Lines identical to the previous one are skipped, so animation frames that
/// don't cross a column boundary print nothing.
pub struct TextRenderer<W: Write> {
    out:        W,
    viewport:   Viewport,
    columns:    usize,
    last_line:  String,
    last_error: Option<io::Error>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, viewport: Viewport, columns: usize) -> Self {
        Self {
            out,
            viewport,
            columns: columns.max(1),
            last_line: String::new(),
            last_error: None,
        }
    }

    /// Take the first write error (if any), since `render` can't return one.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    fn column(&self, x: i32) -> Option<usize> {
        if x < 0 || x > self.viewport.width {
            return None;
        }
        let col = x as usize * self.columns / (self.viewport.width as usize + 1);
        Some(col.min(self.columns - 1))
    }

    fn glyph(view: &ClientView) -> char {
        match (view.exit, view.mood) {
            (Some(ExitDirection::Up), _) => '^',
            (Some(ExitDirection::Down), _) => 'v',
            (None, Mood::Calm) => 'o',
            (None, Mood::Neutral) => '~',
            (None, Mood::Agitated) => '!',
        }
    }

    fn compose(&self, clients: &[ClientView]) -> String {
        let mut lane = vec![' '; self.columns];
        for view in clients {
            if let Some(col) = self.column(view.position.x) {
                lane[col] = Self::glyph(view);
            }
        }
        let labels: Vec<String> = clients
            .iter()
            .filter(|v| !v.is_exiting())
            .map(|v| format!("{}:{}", v.id, v.patience))
            .collect();
        format!("|{}| {}", lane.into_iter().collect::<String>(), labels.join(" "))
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, clients: &[ClientView]) {
        let line = self.compose(clients);
        if line == self.last_line {
            return;
        }
        if let Err(e) = writeln!(self.out, "{line}") {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
        self.last_line = line;
    }
}

#[cfg(test)]
mod tests {
    use qs_core::{ClientId, Point};

    use super::*;

    fn view(id: u32, x: i32, y: i32, patience: i32, exit: Option<ExitDirection>) -> ClientView {
        ClientView {
            id: ClientId(id),
            position: Point::new(x, y),
            patience,
            mood: Mood::from_patience(patience),
            exit,
        }
    }

    const UP: Option<ExitDirection> = Some(ExitDirection::Up);
    const DOWN: Option<ExitDirection> = Some(ExitDirection::Down);

    fn renderer() -> TextRenderer<Vec<u8>> {
        TextRenderer::new(Vec::new(), Viewport::new(900, 400), 10)
    }

    fn output(r: TextRenderer<Vec<u8>>) -> String {
        String::from_utf8(r.out).unwrap()
    }

    #[test]
    fn glyphs_by_mood_and_exit() {
        let mut r = renderer();
        r.render(&[
            view(1, 0, 200, 9, None),
            view(2, 100, 200, 3, None),
            view(3, 200, 200, 1, None),
            view(4, 300, 150, 9, UP),
            view(5, 400, 250, 0, DOWN),
        ]);
        assert_eq!(output(r), "|o~!^v     | C1:9 C2:3 C3:1\n");
    }

    #[test]
    fn exit_glyph_follows_direction_on_centre_line() {
        let mut r = renderer();
        r.render(&[view(1, 0, 200, 9, UP), view(2, 100, 200, 0, DOWN)]);
        assert_eq!(output(r), "|^v        | \n");
    }

    #[test]
    fn off_screen_clients_are_not_drawn() {
        let mut r = renderer();
        r.render(&[view(1, 950, 200, 9, DOWN), view(2, 900, 200, 9, None)]);
        assert_eq!(output(r), "|         o| C2:9\n");
    }

    #[test]
    fn repeated_frames_print_once() {
        let mut r = renderer();
        let frame = [view(1, 50, 200, 9, None)];
        r.render(&frame);
        r.render(&frame);
        r.render(&[]);
        assert_eq!(output(r), "|o         | C1:9\n|          | \n");
    }
}
