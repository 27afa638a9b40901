// presenter.rs - Frame output for the terminal driver

use std::io::{self, Write};

use lifegame::{Glyphs, Grid};

/// Where generations are shown.
pub trait Presenter {
    /// Shows one generation, returning the number of lines it took up.
    fn present(&mut self, generation: u64, grid: &Grid) -> io::Result<usize>;

    /// Moves back up over the last `lines` lines so the next frame overwrites them.
    fn rewind(&mut self, lines: usize) -> io::Result<()>;

    /// Final line once the run is over.
    fn finish(&mut self, message: &str) -> io::Result<()>;
}

/// Writes frames as text, optionally redrawing in place with ANSI cursor-up.
pub struct TerminalPresenter<W: Write> {
    out: W,
    glyphs: Glyphs,
    redraw: bool,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, glyphs: Glyphs, redraw: bool) -> Self {
        Self { out, glyphs, redraw }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn present(&mut self, generation: u64, grid: &Grid) -> io::Result<usize> {
        writeln!(self.out, "step {generation}")?;
        writeln!(self.out, "{}", grid.render(&self.glyphs))?;
        self.out.flush()?;
        Ok(grid.height() + 1)
    }

    fn rewind(&mut self, lines: usize) -> io::Result<()> {
        if self.redraw && lines > 0 {
            write!(self.out, "\x1b[{lines}A")?;
        }
        Ok(())
    }

    fn finish(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_is_header_plus_rows() {
        let grid = Grid::parse("#.\n.#", '#').unwrap();
        let mut presenter = TerminalPresenter::new(Vec::new(), Glyphs::SQUARES, true);
        assert_eq!(presenter.present(3, &grid).unwrap(), 3);
        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(text, "step 3\n■□\n□■\n");
    }

    #[test]
    fn rewind_moves_the_cursor_up() {
        let mut presenter = TerminalPresenter::new(Vec::new(), Glyphs::SQUARES, true);
        presenter.rewind(4).unwrap();
        assert_eq!(presenter.into_inner(), b"\x1b[4A");
    }

    #[test]
    fn rewind_is_a_no_op_without_redraw() {
        let mut presenter = TerminalPresenter::new(Vec::new(), Glyphs::SQUARES, false);
        presenter.rewind(4).unwrap();
        presenter.finish("Finish.").unwrap();
        assert_eq!(presenter.into_inner(), b"Finish.\n");
    }
}
