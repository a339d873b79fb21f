//! Progress rendering for the CLI
//!
//! Subscribes to erase engine events and renders the classic marker
//! stream: one `w` per megabyte written, wrapped after 64 markers per
//! line followed by the percentage of the file still to go, and an
//! `s` line when the durable flush starts.

use eraser_core::EraseEvent;
use std::io::Write;

/// Markers printed per line before wrapping
const MARKERS_PER_LINE: usize = 64;

/// Renders engine events to a writer (stdout in production)
pub struct ProgressRenderer<W: Write> {
    out: W,
    columns: usize,
}

impl<W: Write> ProgressRenderer<W> {
    /// Create a renderer writing to `out`
    pub fn new(out: W) -> Self {
        Self { out, columns: 0 }
    }

    /// Render one engine event. Output errors are ignored; progress is
    /// purely observational and must never fail the erase.
    pub fn handle(&mut self, event: &EraseEvent) {
        match event {
            EraseEvent::PassStarted {
                pattern,
                total_bytes,
                block_size,
            } => {
                self.columns = 0;
                let _ = writeln!(
                    self.out,
                    "Wipe size={} blocksize={} data={}",
                    total_bytes, block_size, pattern
                );
            }
            EraseEvent::Progress(p) => {
                let _ = write!(self.out, "w");
                self.columns += 1;
                if self.columns >= MARKERS_PER_LINE {
                    let _ = writeln!(self.out, " ({}% left)", p.percent_remaining());
                    self.columns = 0;
                }
                let _ = self.out.flush();
            }
            EraseEvent::SyncStarted => {
                if self.columns > 0 {
                    let _ = writeln!(self.out);
                    self.columns = 0;
                }
                let _ = writeln!(self.out, "s");
            }
        }
    }
}
