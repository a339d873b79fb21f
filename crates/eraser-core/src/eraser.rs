//! The erase engine
//!
//! One `erase` call overwrites a whole file in place with a single
//! fill pattern, then forces the data to stable storage. The engine
//! handles:
//! - Pre-write validation (existence, nonzero size)
//! - Pattern-buffer preparation (once per pass)
//! - The chunked, strictly sequential write loop
//! - Best-effort durable flush with timing and throughput accounting
//! - Progress events at defined points (pass start, per megabyte, sync)

use crate::config::EraseConfig;
use crate::error::{Error, Result};
use crate::pattern::Pattern;
use crate::units::{human_size, human_throughput};
use std::fs::OpenOptions;
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;
use std::time::{Duration, Instant};

/// Bytes written between two `Progress` events (1 MiB)
pub const PROGRESS_INTERVAL: u64 = 0x0010_0000;

/// Progress snapshot carried by [`EraseEvent::Progress`]
#[derive(Debug, Clone)]
pub struct EraseProgress {
    /// Bytes written so far in this pass
    pub bytes_written: u64,

    /// Bytes still to write in this pass
    pub bytes_remaining: u64,

    /// Total file size in bytes
    pub total_bytes: u64,
}

impl EraseProgress {
    /// Percentage of the file remaining to be written (integer division)
    pub fn percent_remaining(&self) -> u64 {
        self.bytes_remaining * 100 / self.total_bytes
    }
}

/// Event emitted by the engine at defined points of one pass.
///
/// The engine never performs presentation-layer I/O itself; callers
/// subscribe via [`Eraser::on_progress`] and render however they like.
#[derive(Debug, Clone)]
pub enum EraseEvent {
    /// A pattern pass is about to start writing
    PassStarted {
        /// Fill pattern for this pass
        pattern: Pattern,
        /// Total file size in bytes
        total_bytes: u64,
        /// Block size used for each write call
        block_size: usize,
    },

    /// Another megabyte-equivalent of data has been written
    Progress(EraseProgress),

    /// The write loop is done; the durable flush is starting
    SyncStarted,
}

/// Progress callback type
pub type ProgressCallback = Box<dyn FnMut(&EraseEvent) + Send>;

/// Result of one successful pattern pass
#[derive(Debug, Clone)]
pub struct EraseOutcome {
    /// Total bytes overwritten (the file size)
    pub bytes_written: u64,

    /// Total elapsed time including the sync, floored at 1 ms
    pub elapsed: Duration,

    /// Time spent in the durable flush, floored at 1 ms
    pub sync_elapsed: Duration,

    /// Achieved throughput in bytes per second, computed against a
    /// 1-second elapsed-time floor (sub-second passes report as if
    /// they took one full second)
    pub throughput_bps: f64,

    /// Whether the durable flush succeeded. A failed flush is
    /// best-effort and never fails the pass.
    pub synced: bool,
}

impl EraseOutcome {
    /// Format the overwritten size for display, e.g. `"(10 MB)"`
    pub fn size_display(&self) -> Option<String> {
        human_size(self.bytes_written)
    }

    /// Format the achieved throughput for display, e.g. `"10 MiB/s"`
    pub fn throughput_display(&self) -> Option<String> {
        human_throughput(self.throughput_bps)
    }
}

/// Erase engine for in-place file overwriting.
///
/// The write buffer is allocated once per engine instance and refilled
/// at the start of each pattern pass, so an instance can be reused for
/// any number of sequential erase calls. Instances are not meant to be
/// shared across concurrent operations; use one engine per in-flight
/// erase.
pub struct Eraser {
    config: EraseConfig,
    buf: Vec<u8>,
    progress_callback: Option<ProgressCallback>,
}

impl Eraser {
    /// Create a new engine with default configuration
    pub fn new() -> Self {
        Self::with_config(EraseConfig::default())
    }

    /// Create a new engine with custom configuration
    pub fn with_config(config: EraseConfig) -> Self {
        let buf = vec![0u8; config.block_size];
        Self {
            config,
            buf,
            progress_callback: None,
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &EraseConfig {
        &self.config
    }

    /// Set a progress callback invoked at pass start, per megabyte
    /// written, and when the durable flush starts
    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&EraseEvent) + Send + 'static,
    {
        self.progress_callback = Some(Box::new(callback));
        self
    }

    /// Overwrite the whole file at `path` with `pattern`, then flush.
    ///
    /// The file's length is preserved exactly: every byte in
    /// `[0, size)` is overwritten once, the final chunk truncated to
    /// the remainder when the size is not a multiple of the block
    /// size. On failure the file may be left partially overwritten;
    /// the handle is released on every exit path.
    pub fn erase(&mut self, path: &Path, pattern: Pattern) -> Result<EraseOutcome> {
        if !path.exists() {
            return Err(Error::NotFound(path.display().to_string()));
        }
        let size = std::fs::metadata(path)?.len();
        if size == 0 {
            return Err(Error::InvalidSize {
                path: path.display().to_string(),
                size,
            });
        }

        pattern.fill(&mut self.buf);
        self.emit(&EraseEvent::PassStarted {
            pattern,
            total_bytes: size,
            block_size: self.config.block_size,
        });
        tracing::debug!(
            path = %path.display(),
            size,
            block_size = self.config.block_size,
            %pattern,
            "starting erase pass"
        );

        let mut file = OpenOptions::new().read(true).write(true).open(path)?;

        let begin = Instant::now();
        let loop_result = self.write_loop(&mut file, size);
        let end_unsync = Instant::now();

        // Durable flush is attempted even when the write loop failed,
        // and its own failure never replaces the loop outcome.
        self.emit(&EraseEvent::SyncStarted);
        let synced = match file.sync_all() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "sync failed");
                false
            }
        };
        let end_sync = Instant::now();
        drop(file);

        loop_result?;

        let elapsed_ms = end_sync.duration_since(begin).as_millis().max(1) as u64;
        let sync_ms = end_sync.duration_since(end_unsync).as_millis().max(1) as u64;
        let elapsed_secs = elapsed_ms as f64 / 1000.0;
        let throughput_bps = size as f64 / elapsed_secs.max(1.0);

        Ok(EraseOutcome {
            bytes_written: size,
            elapsed: Duration::from_millis(elapsed_ms),
            sync_elapsed: Duration::from_millis(sync_ms),
            throughput_bps,
            synced,
        })
    }

    /// Run the configured pattern code sequence against `path`, one
    /// full validate/fill/write/sync cycle per code.
    ///
    /// Each code is resolved at fill time, so an unrecognized code
    /// fails its own pass; passes already completed stay applied and
    /// later passes never run.
    pub fn erase_sequence(&mut self, path: &Path) -> Result<Vec<EraseOutcome>> {
        let codes: Vec<char> = self.config.patterns.chars().collect();
        let mut outcomes = Vec::with_capacity(codes.len());
        for code in codes {
            let pattern = Pattern::from_code(code)?;
            outcomes.push(self.erase(path, pattern)?);
        }
        Ok(outcomes)
    }

    fn write_loop(&mut self, file: &mut std::fs::File, size: u64) -> Result<()> {
        file.seek(SeekFrom::Start(0))?;
        let block_size = self.buf.len() as u64;
        let mut remaining = size;
        let mut since_report = 0u64;

        while remaining > 0 {
            let len = block_size.min(remaining) as usize;
            file.write_all(&self.buf[..len])?;
            remaining -= len as u64;
            since_report += len as u64;

            if since_report >= PROGRESS_INTERVAL {
                since_report = 0;
                if let Some(cb) = self.progress_callback.as_mut() {
                    cb(&EraseEvent::Progress(EraseProgress {
                        bytes_written: size - remaining,
                        bytes_remaining: remaining,
                        total_bytes: size,
                    }));
                }
            }
        }
        Ok(())
    }

    fn emit(&mut self, event: &EraseEvent) {
        if let Some(cb) = self.progress_callback.as_mut() {
            cb(event);
        }
    }
}

impl Default for Eraser {
    fn default() -> Self {
        Self::new()
    }
}
