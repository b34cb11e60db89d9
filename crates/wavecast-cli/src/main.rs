//! Wavecast CLI - render tones, noise, and toy room echoes as WAV files.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

use commands::render::Encoding;

/// Wavecast - acoustic toys with byte-exact WAV output
#[derive(Parser)]
#[command(name = "wavecast")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a sine tone
    Tone {
        /// Output WAV path
        #[arg(short, long, default_value = "tone.wav")]
        out: PathBuf,

        /// Tone frequency in Hz
        #[arg(long, default_value_t = 440.0)]
        freq: f64,

        /// Duration in seconds
        #[arg(long, default_value_t = 1.0)]
        duration: f64,

        /// Sample rate in Hz
        #[arg(long, default_value_t = 44100)]
        rate: u32,

        /// Number of channels
        #[arg(long, default_value_t = 1)]
        channels: u16,

        /// Linear gain applied to the rendered signal
        #[arg(long, default_value_t = 0.8)]
        gain: f64,

        /// Sample encoding
        #[arg(long, value_enum, default_value = "pcm16")]
        encoding: Encoding,

        /// Output a machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render seeded white noise
    Noise {
        /// Output WAV path
        #[arg(short, long, default_value = "noise.wav")]
        out: PathBuf,

        /// Seed for the noise generator
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Duration in seconds
        #[arg(long, default_value_t = 1.0)]
        duration: f64,

        /// Sample rate in Hz
        #[arg(long, default_value_t = 44100)]
        rate: u32,

        /// Linear gain applied to the rendered signal
        #[arg(long, default_value_t = 0.5)]
        gain: f64,

        /// Sample encoding
        #[arg(long, value_enum, default_value = "pcm16")]
        encoding: Encoding,

        /// Output a machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render a toy ray-traced room echo impulse response
    Echo {
        /// Output WAV path
        #[arg(short, long, default_value = "echo.wav")]
        out: PathBuf,

        /// Seed for the scatter directions
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Number of rays scattered from the source
        #[arg(long, default_value_t = 256)]
        rays: u32,

        /// Wall bounces traced per ray
        #[arg(long, default_value_t = 4)]
        bounces: u32,

        /// Room width in meters
        #[arg(long, default_value_t = 8.0)]
        width: f64,

        /// Room height in meters
        #[arg(long, default_value_t = 5.0)]
        height: f64,

        /// Source position as "x,y" in meters
        #[arg(long, default_value = "2,2.5")]
        source: String,

        /// Listener position as "x,y" in meters
        #[arg(long, default_value = "6,2.5")]
        listener: String,

        /// Impulse response length in seconds
        #[arg(long, default_value_t = 0.5)]
        duration: f64,

        /// Sample rate in Hz
        #[arg(long, default_value_t = 44100)]
        rate: u32,

        /// Sample encoding
        #[arg(long, value_enum, default_value = "pcm16")]
        encoding: Encoding,

        /// Output a machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tone {
            out,
            freq,
            duration,
            rate,
            channels,
            gain,
            encoding,
            json,
        } => commands::tone::run(&out, freq, duration, rate, channels, gain, encoding, json),
        Commands::Noise {
            out,
            seed,
            duration,
            rate,
            gain,
            encoding,
            json,
        } => commands::noise::run(&out, seed, duration, rate, gain, encoding, json),
        Commands::Echo {
            out,
            seed,
            rays,
            bounces,
            width,
            height,
            source,
            listener,
            duration,
            rate,
            encoding,
            json,
        } => commands::echo::run(commands::echo::EchoArgs {
            out,
            seed,
            rays,
            bounces,
            width,
            height,
            source,
            listener,
            duration,
            rate,
            encoding,
            json,
        }),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::from(2)
        }
    }
}
