use std::io::Write;

use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::queue;
use crossterm::style::{Color, Print, SetBackgroundColor};
use crossterm::terminal::{Clear, ClearType};

use crate::consts::*;
use crate::session::BrightnessRange;

/// Columns of the gauge that are highlighted for `current`, rounded half up.
///
/// `width` includes the two border columns.
pub fn fill_width(range: BrightnessRange, current: i64, width: u16) -> usize {
    let inner = i128::from(width.max(MIN_GAUGE_WIDTH) - 2);
    let span = i128::from(range.span());
    let offset = i128::from(range.clamp(current) - range.min());
    ((2 * offset * inner + span) / (2 * span)) as usize
}

/// The six line brightness display, redrawn in place.
#[derive(Clone, Copy, Debug)]
pub struct Gauge {
    width: u16,
}

impl Gauge {
    /// Widths below the frame minimum are raised to it.
    pub fn new(width: u16) -> Self {
        Self {
            width: width.max(MIN_GAUGE_WIDTH),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Blank lines to print once so the first redraw has rows to move up into.
    pub fn reserve(&self) -> Vec<u8> {
        vec![b'\n'; usize::from(FRAME_HEIGHT)]
    }

    /// Render a frame that overwrites the previous one.
    pub fn render(
        &self,
        out: &mut impl Write,
        range: BrightnessRange,
        initial: i64,
        current: i64,
    ) -> std::io::Result<()> {
        let inner = usize::from(self.width - 2);
        let fill = fill_width(range, current, self.width);
        let border = "─".repeat(inner);

        queue!(out, MoveToColumn(0), MoveUp(FRAME_HEIGHT))?;
        queue!(
            out,
            Clear(ClearType::CurrentLine),
            Print(format!("┌{border}┐\n"))
        )?;
        queue!(
            out,
            Clear(ClearType::CurrentLine),
            Print("│"),
            SetBackgroundColor(Color::Grey),
            Print(" ".repeat(fill)),
            SetBackgroundColor(Color::Reset),
            Print(" ".repeat(inner - fill)),
            Print("│\n")
        )?;
        queue!(
            out,
            Clear(ClearType::CurrentLine),
            Print(format!("└{border}┘\n"))
        )?;
        for (label, value) in [
            ("Maximum", range.max()),
            ("Initial", initial),
            ("Current", current),
        ] {
            queue!(
                out,
                Clear(ClearType::CurrentLine),
                Print(format!("{label} brightness: {value}\n"))
            )?;
        }
        Ok(())
    }

    pub fn frame(
        &self,
        range: BrightnessRange,
        initial: i64,
        current: i64,
    ) -> std::io::Result<Vec<u8>> {
        let mut frame = Vec::new();
        self.render(&mut frame, range, initial, current)?;
        Ok(frame)
    }
}
