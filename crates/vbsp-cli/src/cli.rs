//! Command-line arguments.
//!
//! Arguments can also come from environment variables:
//! - `VBSP_LOG` for the log level
//! - `VBSP_FILE` for the map path of every subcommand

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::Level;
use vbsp_formats::LumpId;

/// Inspect the header and lumps of Valve BSP map files.
#[derive(Debug, Parser)]
#[command(
    name = "vbsp",
    about = "Inspect the header and lump directory of Valve BSP map files",
    version
)]
pub struct Cli {
    /// Set the logging level
    #[arg(
        short,
        long,
        value_enum,
        global = true,
        env = "VBSP_LOG",
        default_value = "warn"
    )]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

/// Log verbosity
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Everything, including per-lump reads
    Trace,
    /// File opens and header summaries
    Debug,
    /// Informational messages
    Info,
    /// Warnings only
    Warn,
    /// Errors only
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

/// Output format for `info`
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Text,
    /// JSON document
    Json,
}

/// Subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode the header and list the lump directory
    Info {
        /// Map file
        #[arg(env = "VBSP_FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Include empty lumps
        #[arg(short, long)]
        all: bool,
    },

    /// Read one directory entry without decoding the rest of the header
    Entry {
        /// Map file
        #[arg(env = "VBSP_FILE")]
        file: PathBuf,

        /// Lump index (0-63) or name such as `pakfile`
        lump: LumpId,
    },

    /// Write a lump's raw payload bytes
    Extract {
        /// Map file
        #[arg(env = "VBSP_FILE")]
        file: PathBuf,

        /// Lump index (0-63) or name such as `entities`
        lump: LumpId,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
