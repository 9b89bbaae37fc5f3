use crate::cipher::Direction;
use crate::error::Result;
use crate::progress::ConsoleSink;
use crate::stream::{process_file, StreamOptions, DEFAULT_CHUNK_SIZE};
use std::path::Path;

/// Options for the encrypt command
#[derive(Debug, Clone)]
pub struct EncryptOptions {
    pub key: String,
    pub chunk_size: usize,
}

impl Default for EncryptOptions {
    fn default() -> Self {
        Self {
            key: String::new(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Encrypt a file, streaming progress to the console.
/// Returns the number of bytes processed.
pub fn encrypt_file(input_path: &Path, output_path: &Path, options: &EncryptOptions) -> Result<u64> {
    let stream_options = StreamOptions {
        chunk_size: options.chunk_size,
        ..Default::default()
    };

    process_file(
        input_path,
        output_path,
        options.key.as_bytes(),
        Direction::Encrypt,
        &stream_options,
        &mut ConsoleSink,
    )
}
