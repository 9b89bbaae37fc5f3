use clap::{Parser, Subcommand};
use shiftcrypt::cli::{decrypt_file, encrypt_file, DecryptOptions, EncryptOptions};
use shiftcrypt::{Result, ShiftcryptError, DEFAULT_CHUNK_SIZE};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("SHIFTCRYPT_VERSION");
const BUILD: &str = env!("SHIFTCRYPT_BUILD");
const PROFILE: &str = env!("SHIFTCRYPT_PROFILE");
const GIT_HASH: &str = env!("SHIFTCRYPT_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH)
    })
}

#[derive(Parser)]
#[command(name = "shiftcrypt")]
#[command(author, about = "Streaming reversible byte-shift file encryption", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file
    #[command(alias = "c")]
    Encrypt {
        /// Input file to encrypt
        input: PathBuf,

        /// Output file for the encrypted bytes
        output: PathBuf,

        /// Encryption key (prompted for when omitted)
        #[arg(long)]
        key: Option<String>,

        /// Nominal chunk size in bytes for streaming reads
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,
    },

    /// Decrypt a file
    #[command(alias = "d")]
    Decrypt {
        /// Input file to decrypt
        input: PathBuf,

        /// Output file for the recovered bytes
        output: PathBuf,

        /// Decryption key (prompted for when omitted)
        #[arg(long)]
        key: Option<String>,

        /// Nominal chunk size in bytes for streaming reads
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,
    },
}

/// Take the key from the flag or prompt for one line
fn resolve_key(key: Option<String>) -> Result<String> {
    let key = match key {
        Some(key) => key,
        None => rpassword::prompt_password("Type a crypt key: ")?,
    };
    if key.is_empty() {
        return Err(ShiftcryptError::EmptyKey);
    }
    Ok(key)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("shiftcrypt {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt {
            input,
            output,
            key,
            chunk_size,
        } => resolve_key(key).and_then(|key| {
            println!("Encrypting ({})...", input.display());
            let options = EncryptOptions { key, chunk_size };
            match encrypt_file(&input, &output, &options) {
                Ok(processed) => {
                    println!();
                    println!("{} bytes processed", processed);
                    println!("Saved to {}", output.display());
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }),

        Commands::Decrypt {
            input,
            output,
            key,
            chunk_size,
        } => resolve_key(key).and_then(|key| {
            println!("Decrypting ({})...", input.display());
            let options = DecryptOptions { key, chunk_size };
            match decrypt_file(&input, &output, &options) {
                Ok(processed) => {
                    println!();
                    println!("{} bytes processed", processed);
                    println!("Saved to {}", output.display());
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
