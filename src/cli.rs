//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Parser, Debug, Default)]
#[command(
    name = "visionbi",
    version,
    about = "VisionBI terminal client",
    long_about = "Terminal client for the VisionBI assistant.\n\n\
                  Motion follows the reduced-motion preference: --reduce-motion, \
                  VISIONBI_REDUCE_MOTION, UI_ENABLE_ANIMATIONS=false or NO_MOTION."
)]
pub struct Cli {
    /// Config file (default: <config dir>/visionbi/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Force reduced motion regardless of the environment.
    #[arg(long = "reduce-motion")]
    pub reduce_motion: bool,

    /// Development mode: trace panel and fault injection keys.
    #[arg(long)]
    pub dev: bool,

    /// Write logs to this file.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "visionbi=trace").
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Config file to load.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Flags override the loaded file. Absent flags leave it untouched.
    pub fn apply(&self, config: &mut Config) {
        if self.reduce_motion {
            config.motion.reduce_motion = Some(true);
        }
        if self.dev {
            config.ui.dev_mode = Some(true);
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "visionbi",
            "--reduce-motion",
            "--dev",
            "--log-level",
            "debug",
            "--log-file",
            "/tmp/v.log",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.motion.reduce_motion, Some(true));
        assert_eq!(config.ui.dev_mode, Some(true));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/v.log")));
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["visionbi"]);
        let mut config = Config::default();
        config.motion.reduce_motion = Some(false);
        cli.apply(&mut config);
        assert_eq!(config.motion.reduce_motion, Some(false));
        assert_eq!(config.ui.dev_mode, None);
    }
}
