use std::io::{self, Write};

use crate::simulation::Region;

/// Consumer of per-generation board snapshots.
///
/// The simulation never reads anything back from a renderer. An `Err` is
/// logged by the caller and the run carries on.
pub trait Renderer {
    fn render(&mut self, generation: u64, snapshot: &Region) -> io::Result<()>;
}

/// Discards every snapshot (headless runs and tests)
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _generation: u64, _snapshot: &Region) -> io::Result<()> {
        Ok(())
    }
}

/// Writes each snapshot as text, one line per x, followed by a blank line
pub struct AsciiRenderer<W: Write> {
    out: W,
}

impl AsciiRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for AsciiRenderer<W> {
    fn render(&mut self, generation: u64, snapshot: &Region) -> io::Result<()> {
        writeln!(self.out, "generation {}", generation)?;
        write!(self.out, "{}", snapshot)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_output() {
        let region = Region::from_rows(&[[1u8, 0, 0], [0, 1, 1]]).unwrap();
        let mut renderer = AsciiRenderer::new(Vec::new());
        renderer.render(3, &region).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, "generation 3\n#..\n.##\n\n");
    }

    #[test]
    fn test_null_renderer_accepts_anything() {
        let mut renderer = NullRenderer;
        assert!(renderer.render(0, &Region::default()).is_ok());
    }
}
