use std::io::{BufWriter, Write};

use crate::error::ViewError;
use crate::manifest::ManifestBlock;
use crate::traits::Sink;

/// Streams manifest blocks to any [`Write`] (stdout, a file, a `Vec<u8>`).
///
/// Output is buffered; each block is written in one `write_all` so a
/// directory's lines stay together. Call [`Sink::finish`] (the engine does)
/// to flush.
pub struct WriteSink<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> WriteSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: BufWriter::new(out),
        }
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W, ViewError> {
        self.out
            .into_inner()
            .map_err(|e| ViewError::Output(e.into_error()))
    }
}

impl<W: Write> Sink for WriteSink<W> {
    fn emit(&mut self, block: &ManifestBlock) -> Result<(), ViewError> {
        block.write_to(&mut self.out).map_err(ViewError::Output)
    }

    fn finish(&mut self) -> Result<(), ViewError> {
        self.out.flush().map_err(ViewError::Output)
    }
}

/// Collects lines in memory. Handy for tests and for callers that post-process.
impl Sink for Vec<String> {
    fn emit(&mut self, block: &ManifestBlock) -> Result<(), ViewError> {
        self.extend(block.lines().map(str::to_owned));
        Ok(())
    }
}
