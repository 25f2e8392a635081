use clap::Parser;
use hppw_decrypt::consts::USAGE;
use hppw_decrypt::{decode_file_with, DecodeOptions, TextMode};
use log::{debug, LevelFilter};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "hpqpswdd",
    about = "Decrypts passwords encrypted by the Hewlett-Packard password encryption utility.",
    disable_help_subcommand = true
)]
struct Args {
    /// Replace malformed UTF-16 in the decrypted password with U+FFFD instead of failing.
    #[arg(long)]
    lossy: bool,

    /// Accept payloads larger than the vendor tool's 1 KiB buffer.
    #[arg(long)]
    no_buffer_limit: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// File containing the encrypted password.
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    let Some(input) = args.input.as_ref() else {
        println!("{USAGE}");
        return;
    };

    let text_mode = if args.lossy {
        TextMode::Lossy
    } else {
        TextMode::Strict
    };
    let options = DecodeOptions::new()
        .with_text_mode(text_mode)
        .with_buffer_ceiling(!args.no_buffer_limit);
    debug!("decoding {} with {options:?}", input.display());

    match decode_file_with(input, &options) {
        Ok(password) => println!("{password}"),
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}
