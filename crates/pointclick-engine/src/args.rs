//! Command-line parser.

use std::path::PathBuf;

use crate::config::CONFIG_FILE;

/// Replays a recorded input session through the inventory screen.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub(crate) struct EngineArgs {
    /// Write the default configuration to CONFIG and exit.
    #[arg(long)]
    pub write_config: bool,

    /// Engine configuration file. Data paths inside it are resolved
    /// relative to its directory.
    #[arg(value_name = "CONFIG", default_value = CONFIG_FILE)]
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::Parser as _;

    fn parse(args: &[&str]) -> Result<EngineArgs, clap::Error> {
        EngineArgs::try_parse_from(std::iter::once("pointclick").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults_to_config_file() {
        let args = parse(&[]).expect("Failed to parse");
        assert!(!args.write_config);
        assert_eq!(args.config, PathBuf::from(CONFIG_FILE));
    }

    #[test]
    fn test_write_config_with_path() {
        let args = parse(&["--write-config", "out/engine.toml"]).expect("Failed to parse");
        assert!(args.write_config);
        assert_eq!(args.config, PathBuf::from("out/engine.toml"));

        let args = parse(&["game/pointclick.toml"]).expect("Failed to parse");
        assert!(!args.write_config);
        assert_eq!(args.config, PathBuf::from("game/pointclick.toml"));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = parse(&["--verbose"]).expect_err("unknown flag should fail");
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        let err = parse(&["--help"]).expect_err("help exits early");
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory as _;
        EngineArgs::command().debug_assert();
    }
}
