use clap::{Parser, Subcommand};

mod enc;
mod selftest;

/// Magma command-line tool for cipher operations and self-tests.
#[derive(Parser)]
#[command(name = "magma")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the known-answer self-tests and report per-mode results.
    Selftest,
    /// Symmetric file encryption/decryption.
    Enc {
        /// Cipher mode (magma-ecb, magma-ctr).
        #[arg(short, long, default_value = "magma-ctr")]
        mode: String,
        /// Decrypt mode.
        #[arg(short, long)]
        decrypt: bool,
        /// Hex-encoded 32-byte key.
        #[arg(short, long)]
        key: String,
        /// Hex-encoded 4-byte IV (magma-ctr only).
        #[arg(long)]
        iv: Option<String>,
        /// Input file.
        #[arg(short, long)]
        input: String,
        /// Output file.
        #[arg(short, long)]
        output: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Selftest => selftest::run(),
        Commands::Enc {
            mode,
            decrypt,
            key,
            iv,
            input,
            output,
        } => enc::run(mode, *decrypt, key, iv.as_deref(), input, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
