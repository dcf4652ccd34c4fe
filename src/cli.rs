use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[clap(bin_name = env!("CARGO_PKG_NAME"), version = env!("CARGO_PKG_VERSION"), about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Cli {
    /// Path to the configuration file
    #[clap(name = "config")]
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_is_required() {
        assert!(Cli::try_parse_from(["month-calendar"]).is_err());

        let cli = Cli::try_parse_from(["month-calendar", "calendar.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("calendar.toml"));
    }
}
