//! Output verbosity.

use std::str::FromStr;

use crate::config::schema::OutputMode as ConfiguredOutputMode;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also show per-unit details.
    Verbose,
    /// Show diagnostics and status.
    #[default]
    Normal,
    /// Show diagnostics only.
    Quiet,
    /// Show nothing except errors and machine-readable output.
    Silent,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            "silent" => Ok(Self::Silent),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl From<ConfiguredOutputMode> for OutputMode {
    fn from(config_mode: ConfiguredOutputMode) -> Self {
        match config_mode {
            ConfiguredOutputMode::Normal => Self::Normal,
            ConfiguredOutputMode::Verbose => Self::Verbose,
            ConfiguredOutputMode::Quiet => Self::Quiet,
            ConfiguredOutputMode::Silent => Self::Silent,
        }
    }
}

impl OutputMode {
    /// Check if this mode shows per-unit details.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows diagnostics.
    pub fn shows_diagnostics(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_from_str() {
        assert_eq!("verbose".parse::<OutputMode>(), Ok(OutputMode::Verbose));
        assert_eq!("QUIET".parse::<OutputMode>(), Ok(OutputMode::Quiet));
        assert!("invalid".parse::<OutputMode>().is_err());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }

    #[test]
    fn only_verbose_shows_details() {
        assert!(OutputMode::Verbose.shows_details());
        assert!(!OutputMode::Normal.shows_details());
        assert!(!OutputMode::Quiet.shows_details());
        assert!(!OutputMode::Silent.shows_details());
    }

    #[test]
    fn quiet_hides_status_but_keeps_diagnostics() {
        assert!(!OutputMode::Quiet.shows_status());
        assert!(OutputMode::Quiet.shows_diagnostics());
    }

    #[test]
    fn silent_hides_everything() {
        assert!(!OutputMode::Silent.shows_status());
        assert!(!OutputMode::Silent.shows_diagnostics());
    }

    #[test]
    fn from_config_modes() {
        assert_eq!(OutputMode::from(ConfiguredOutputMode::Normal), OutputMode::Normal);
        assert_eq!(OutputMode::from(ConfiguredOutputMode::Verbose), OutputMode::Verbose);
        assert_eq!(OutputMode::from(ConfiguredOutputMode::Quiet), OutputMode::Quiet);
        assert_eq!(OutputMode::from(ConfiguredOutputMode::Silent), OutputMode::Silent);
    }
}
