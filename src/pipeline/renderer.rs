//! Line renderer for fullscreen mode.
//!
//! Compares the new frame with the previous one row by row and only repaints
//! rows that changed. Output is queued and flushed once per frame. Rows are
//! cut at the terminal width so the terminal never wraps them onto rows the
//! diff thinks are untouched.
//!
//! # Algorithm
//!
//! 0. Without a previous frame: clear the whole screen
//! 1. For each row of the new frame:
//!    - If the previous frame has an identical row: skip
//!    - Otherwise: move to the row, clear it, write its spans up to the width
//! 2. Clear rows the previous frame had beyond the new frame's end
//! 3. Flush (single write)
//! 4. Store the frame for the next comparison

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use super::view::{Frame, Line};
use crate::types::{Attr, Rgba, Style};

/// Row-diffing renderer writing to `W` (stdout in the app).
pub struct LineRenderer<W: Write> {
    out: W,
    width: u16,
    previous: Option<Frame>,
}

impl<W: Write> LineRenderer<W> {
    /// Renderer for a terminal `width` columns wide.
    pub fn new(out: W, width: u16) -> Self {
        Self {
            out,
            width,
            previous: None,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Track a terminal resize. A new width invalidates the previous frame.
    pub fn set_width(&mut self, width: u16) {
        if self.width != width {
            self.width = width;
            self.invalidate();
        }
    }

    /// Render a frame, repainting only changed rows.
    ///
    /// Returns the number of rows written.
    pub fn render(&mut self, frame: &Frame) -> io::Result<usize> {
        let mut written = 0;
        if self.previous.is_none() {
            queue!(self.out, Clear(ClearType::All))?;
        }

        for (y, line) in frame.lines.iter().enumerate() {
            let unchanged = self
                .previous
                .as_ref()
                .and_then(|prev| prev.lines.get(y))
                .is_some_and(|prev_line| prev_line == line);
            if unchanged {
                continue;
            }
            self.write_line(y as u16, line)?;
            written += 1;
        }

        // Rows left over from a taller previous frame.
        let previous_len = self.previous.as_ref().map_or(0, |p| p.lines.len());
        for y in frame.lines.len()..previous_len {
            queue!(self.out, MoveTo(0, y as u16), Clear(ClearType::CurrentLine))?;
        }

        self.out.flush()?;
        self.previous = Some(frame.clone());
        Ok(written)
    }

    /// Forget the previous frame; next render repaints everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Enter fullscreen mode (alternate screen buffer).
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        execute!(self.out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        self.invalidate();
        Ok(())
    }

    /// Exit fullscreen mode.
    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        execute!(
            self.out,
            SetAttribute(Attribute::Reset),
            ResetColor,
            Show,
            LeaveAlternateScreen
        )
    }

    fn write_line(&mut self, y: u16, line: &Line) -> io::Result<()> {
        queue!(self.out, MoveTo(0, y), Clear(ClearType::CurrentLine))?;
        for span in &line.clipped(self.width).spans {
            apply_style(&mut self.out, span.style)?;
            queue!(self.out, Print(&span.text))?;
            queue!(self.out, SetAttribute(Attribute::Reset), ResetColor)?;
        }
        Ok(())
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Consume the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn apply_style<W: Write>(out: &mut W, style: Style) -> io::Result<()> {
    if let Some(fg) = to_color(style.fg) {
        queue!(out, SetForegroundColor(fg))?;
    }
    if let Some(bg) = to_color(style.bg) {
        queue!(out, SetBackgroundColor(bg))?;
    }
    for (flag, attribute) in [
        (Attr::BOLD, Attribute::Bold),
        (Attr::DIM, Attribute::Dim),
        (Attr::ITALIC, Attribute::Italic),
        (Attr::UNDERLINE, Attribute::Underlined),
        (Attr::INVERSE, Attribute::Reverse),
    ] {
        if style.attrs.contains(flag) {
            queue!(out, SetAttribute(attribute))?;
        }
    }
    Ok(())
}

/// Terminal default maps to "leave it alone".
fn to_color(color: Rgba) -> Option<Color> {
    if color.is_terminal_default() {
        return None;
    }
    Some(Color::Rgb {
        r: color.r.clamp(0, 255) as u8,
        g: color.g.clamp(0, 255) as u8,
        b: color.b.clamp(0, 255) as u8,
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::view::Span;

    fn line(text: &str) -> Line {
        Line {
            spans: vec![Span {
                text: text.to_string(),
                style: Style::plain(),
                target: None,
            }],
        }
    }

    fn frame(rows: &[&str]) -> Frame {
        Frame {
            lines: rows.iter().map(|r| line(r)).collect(),
        }
    }

    #[test]
    fn test_first_render_writes_every_row() {
        let mut renderer = LineRenderer::new(Vec::new(), 80);
        assert!(!renderer.has_previous());
        assert_eq!(renderer.render(&frame(&["a", "b", "c"])).unwrap(), 3);
        assert!(renderer.has_previous());
    }

    #[test]
    fn test_unchanged_rows_skipped() {
        let mut renderer = LineRenderer::new(Vec::new(), 80);
        renderer.render(&frame(&["a", "b", "c"])).unwrap();
        assert_eq!(renderer.render(&frame(&["a", "B", "c"])).unwrap(), 1);
        assert_eq!(renderer.render(&frame(&["a", "B", "c"])).unwrap(), 0);
    }

    #[test]
    fn test_invalidate_forces_full_repaint() {
        let mut renderer = LineRenderer::new(Vec::new(), 80);
        renderer.render(&frame(&["a", "b"])).unwrap();
        renderer.invalidate();
        assert_eq!(renderer.render(&frame(&["a", "b"])).unwrap(), 2);
    }

    #[test]
    fn test_output_contains_text() {
        let mut renderer = LineRenderer::new(Vec::new(), 80);
        renderer.render(&frame(&["Cart (3)"])).unwrap();
        let bytes = renderer.into_inner();
        let output = String::from_utf8_lossy(&bytes);
        assert!(output.contains("Cart (3)"));
    }

    #[test]
    fn test_rows_cut_at_width() {
        let mut renderer = LineRenderer::new(Vec::new(), 10);
        let long = "x".repeat(120);
        renderer.render(&frame(&[long.as_str(), "short"])).unwrap();
        let bytes = renderer.into_inner();
        let output = String::from_utf8_lossy(&bytes);
        assert!(output.contains(&"x".repeat(10)));
        assert!(!output.contains(&"x".repeat(11)));
        assert!(output.contains("short"));
    }

    #[test]
    fn test_new_width_repaints_everything() {
        let mut renderer = LineRenderer::new(Vec::new(), 80);
        renderer.render(&frame(&["a", "b"])).unwrap();

        renderer.set_width(80);
        assert!(renderer.has_previous());

        renderer.set_width(40);
        assert_eq!(renderer.width(), 40);
        assert!(!renderer.has_previous());
        assert_eq!(renderer.render(&frame(&["a", "b"])).unwrap(), 2);
    }

    #[test]
    fn test_to_color() {
        assert_eq!(to_color(Rgba::TERMINAL_DEFAULT), None);
        assert_eq!(to_color(Rgba::RED), Some(Color::Rgb { r: 255, g: 0, b: 0 }));
    }
}
