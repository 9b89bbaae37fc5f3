use crate::cipher::{transform_block, Direction};
use crate::error::{Result, ShiftcryptError};
use crate::progress::{ProgressSession, ProgressSink};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Nominal chunk size for streaming reads. Only the final chunk of a file
/// is smaller.
pub const DEFAULT_CHUNK_SIZE: usize = 4092;

/// Shared handle requesting cooperative cancellation of a processing run.
///
/// Clones share one flag. The stream loop checks it once per chunk, so a
/// cancelled run stops between chunks, leaving a truncated output file and
/// returning an error rather than claiming success.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Check for cancellation and return an error if requested
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(ShiftcryptError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Tuning for one processing run
#[derive(Debug, Clone)]
pub struct StreamOptions {
    /// Nominal chunk size in bytes
    pub chunk_size: usize,
    /// Cancellation handle checked between chunks
    pub cancel: CancelFlag,
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            cancel: CancelFlag::new(),
        }
    }
}

/// Stream `input_path` through the keyed byte shift into `output_path`.
///
/// The input size is taken up front; the loop reads at most
/// `min(chunk_size, remaining)` bytes per iteration, so the final chunk is
/// sized exactly and the loop ends when the processed count equals the
/// total. The key-phase cursor carries across chunks, making the output
/// independent of the chunk size. Progress reports go to `sink` under the
/// session's throttle policy.
///
/// The output file is created (or truncated) only after the input opens
/// successfully. Both handles close on every exit path. Returns the number
/// of bytes processed.
pub fn process_file(
    input_path: &Path,
    output_path: &Path,
    key: &[u8],
    direction: Direction,
    options: &StreamOptions,
    sink: &mut dyn ProgressSink,
) -> Result<u64> {
    if key.is_empty() {
        return Err(ShiftcryptError::EmptyKey);
    }
    if options.chunk_size == 0 {
        return Err(ShiftcryptError::InvalidChunkSize(options.chunk_size));
    }

    let input = File::open(input_path).map_err(|source| ShiftcryptError::OpenInput {
        path: input_path.to_path_buf(),
        source,
    })?;
    let total = input.metadata()?.len();
    let mut reader = BufReader::new(input);

    let output = File::create(output_path).map_err(|source| ShiftcryptError::OpenOutput {
        path: output_path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(output);

    let mut session = ProgressSession::new(total);
    let mut phase = 0;
    let mut buffer = vec![0u8; options.chunk_size];

    while !session.is_done() {
        options.cancel.check()?;

        // Never request past the known end of the input; the final chunk
        // shrinks to exactly the remaining byte count
        let want = (options.chunk_size as u64).min(session.remaining()) as usize;
        let read = reader.read(&mut buffer[..want])?;
        if read == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!(
                    "input ended after {} of {} bytes",
                    session.processed(),
                    total
                ),
            )
            .into());
        }

        let chunk = &mut buffer[..read];
        phase = transform_block(chunk, key, phase, direction);
        writer.write_all(chunk)?;

        let sample = chunk[0];
        if let Some(report) = session.advance(read as u64, sample) {
            sink.report(&report);
        }
    }

    writer.flush()?;
    Ok(session.processed())
}
