use std::fmt;

use clap::{builder::PossibleValue, ArgMatches, ValueEnum};

/// LogLevel
///
/// Minimum level of messages written to stderr.  `None` silences logging.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error = 0,
    Warn,
    Info,
    Debug,
    Trace,
    None,
}

const LEVEL_STR: [&str; 6] = ["error", "warn", "info", "debug", "trace", "none"];

impl ValueEnum for LogLevel {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Error,
            Self::Warn,
            Self::Info,
            Self::Debug,
            Self::Trace,
            Self::None,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(LEVEL_STR[self.level()]))
    }
}

impl LogLevel {
    fn level(&self) -> usize {
        *self as usize
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Verbosity as understood by stderrlog (0 = errors only)
    pub fn verbosity(&self) -> usize {
        if self.is_none() {
            0
        } else {
            self.level()
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", LEVEL_STR[self.level()])
    }
}

/// Initialize logging from command line arguments
pub fn init_log(m: &ArgMatches) -> anyhow::Result<()> {
    let level = m
        .get_one::<LogLevel>("loglevel")
        .copied()
        .unwrap_or(LogLevel::Info);

    stderrlog::new()
        .quiet(level.is_none())
        .verbosity(level.verbosity())
        .init()
        .map_err(|e| anyhow!("Could not initialize logging: {}", e))?;
    debug!("Log level set to {}", level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(LogLevel::Error, 0, false)]
    #[case(LogLevel::Info, 2, false)]
    #[case(LogLevel::Trace, 4, false)]
    #[case(LogLevel::None, 0, true)]
    fn test_verbosity(#[case] l: LogLevel, #[case] v: usize, #[case] quiet: bool) {
        assert_eq!(l.verbosity(), v);
        assert_eq!(l.is_none(), quiet);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(LogLevel::from_str("Debug", true).unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::None.to_string(), "none");
        assert!(LogLevel::from_str("verbose", true).is_err());
    }
}
