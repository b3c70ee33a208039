//! Logger setup for the `drift` binary and tests.
//!
//! The library only talks to the `log` facade; installing a backend is left
//! to the caller.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Default level when `RUST_LOG` is unset.
#[must_use]
pub const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes the global logger.
///
/// When `verbose` is `true`, phase transitions and target generation are
/// printed at debug level. Otherwise only info level and above are shown.
/// `RUST_LOG` overrides both.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_level(verbose).to_string());
    let mut builder = Builder::from_env(env);

    // `try_init` only fails if a logger was already set. Ignore that case so
    // tests can call `init` multiple times without panicking.
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serial_test::serial;

    #[rstest]
    #[case::quiet(false, LevelFilter::Info)]
    #[case::verbose(true, LevelFilter::Debug)]
    fn verbosity_picks_the_default_level(#[case] verbose: bool, #[case] expected: LevelFilter) {
        assert_eq!(default_level(verbose), expected);
    }

    #[test]
    #[serial]
    fn init_is_idempotent() {
        init(false);
        init(true);
        log::info!("logger installed");
    }
}
