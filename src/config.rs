use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Falling-block puzzle in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "blockfall", version, about)]
pub struct Args {
    /// Seed for the piece sequence; random when omitted.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// How long to wait for input each frame, in milliseconds.
    #[arg(
        long,
        default_value_t = 16,
        value_name = "MS",
        value_parser = clap::value_parser!(u64).range(1..=1000)
    )]
    pub frame_ms: u64,

    /// Write logs to this file. Nothing is logged without it.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value_t = LevelFilter::Info, value_name = "LEVEL")]
    pub log_level: LevelFilter,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["blockfall"]).unwrap();
        assert_eq!(args.seed, None);
        assert_eq!(args.frame_ms, 16);
        assert_eq!(args.log_file, None);
        assert_eq!(args.log_level, LevelFilter::Info);
    }

    #[test]
    fn explicit_values() {
        let args = Args::try_parse_from([
            "blockfall",
            "--seed",
            "42",
            "--frame-ms",
            "33",
            "--log-file",
            "game.log",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.frame_ms, 33);
        assert_eq!(args.log_file, Some(PathBuf::from("game.log")));
        assert_eq!(args.log_level, LevelFilter::Debug);
    }

    #[test]
    fn frame_ms_out_of_range_is_rejected() {
        assert!(Args::try_parse_from(["blockfall", "--frame-ms", "0"]).is_err());
        assert!(Args::try_parse_from(["blockfall", "--frame-ms", "5000"]).is_err());
    }
}
