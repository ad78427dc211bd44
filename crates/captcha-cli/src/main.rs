//! captcha CLI - generate CAPTCHA images from the command line

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use captcha_cli::commands;
use captcha_cli::commands::generate::GenerateArgs;
use captcha_cli::logging;

/// captcha - randomized CAPTCHA image generator
#[derive(Parser)]
#[command(name = "captcha")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a CAPTCHA image and print its solution
    Generate {
        /// Image width in pixels
        #[arg(long, default_value_t = 150)]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value_t = 50)]
        height: u32,

        /// Draw a single-digit addition instead of random text
        #[arg(long)]
        math: bool,

        /// Output container
        #[arg(short, long, default_value = "png", value_parser = ["png", "jpeg", "jpg", "gif"])]
        format: String,

        /// JPEG quality (1-100)
        #[arg(short, long)]
        quality: Option<u8>,

        /// Options JSON file
        #[arg(short, long)]
        config: Option<String>,

        /// TrueType/OpenType font to draw with
        #[arg(long)]
        font: Option<String>,

        /// Seed for reproducible output (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Output image path (default: captcha.<ext>)
        #[arg(short, long)]
        out: Option<String>,

        /// Print one machine-readable JSON line instead of colored text
        #[arg(long)]
        json: bool,
    },

    /// Check that a font file can be loaded
    FontCheck {
        /// Path to the font file
        path: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            width,
            height,
            math,
            format,
            quality,
            config,
            font,
            seed,
            out,
            json,
        } => commands::generate::run(&GenerateArgs {
            width,
            height,
            math,
            format: &format,
            quality,
            config: config.as_deref(),
            font: font.as_deref(),
            seed,
            out: out.as_deref(),
            json,
        }),
        Commands::FontCheck { path, json } => commands::font_check::run(&path, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
