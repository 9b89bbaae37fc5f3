//! Shiftcrypt - Streaming Reversible Byte-Shift File Encryption
//!
//! A small cipher tool that streams a file through a byte-wise shift keyed
//! by a repeating secret. Each data byte is shifted by one key byte, with
//! the key cycled for as long as the data runs:
//!
//! ```text
//! C[n] = (O[n] + K[n mod key_len]) mod 256    encrypt
//! O[n] = (C[n] - K[n mod key_len]) mod 256    decrypt
//! ```
//!
//! Files are processed in fixed-size chunks (the last chunk shrinks to fit)
//! with the key-phase cursor carried across chunk boundaries, so the output
//! never depends on the chunking granularity. A progress line with an ASCII
//! bar and elapsed seconds is rewritten in place, throttled to emit only
//! when the percentage or the elapsed second count changes.
//!
//! This is **not** a secure cipher: there is no diffusion and no
//! authentication, and a known plaintext reveals the key directly. It
//! preserves the exact reversible arithmetic of the classic repeating-key
//! shift, nothing more.
//!
//! ## Example
//!
//! ```no_run
//! use shiftcrypt::cli::{encrypt_file, decrypt_file, EncryptOptions, DecryptOptions};
//! use std::path::Path;
//!
//! // Encrypt a file
//! let encrypt_opts = EncryptOptions {
//!     key: "my_secret".into(),
//!     ..Default::default()
//! };
//! encrypt_file(
//!     Path::new("input.txt"),
//!     Path::new("output.enc"),
//!     &encrypt_opts,
//! ).unwrap();
//!
//! // Decrypt it again
//! let decrypt_opts = DecryptOptions {
//!     key: "my_secret".into(),
//!     ..Default::default()
//! };
//! decrypt_file(
//!     Path::new("output.enc"),
//!     Path::new("recovered.txt"),
//!     &decrypt_opts,
//! ).unwrap();
//! ```

pub mod cipher;
pub mod cli;
pub mod error;
pub mod progress;
pub mod stream;

pub use cipher::{transform_block, Direction};
pub use error::{Result, ShiftcryptError};
pub use stream::{process_file, CancelFlag, StreamOptions, DEFAULT_CHUNK_SIZE};
