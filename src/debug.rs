#![allow(unused_imports)]

//! Feature-gated logging macros, following the same shape as the donor
//! crate's `debug`/`trace` features: `debug` enables error-level logging at
//! collision/failure points, `trace` (which implies `debug`) additionally
//! enables trace-level logging at lookup and registration fast-path
//! decisions. Neither feature is enabled by default, so the `log` crate
//! costs nothing unless a caller opts in.

pub(crate) mod macros {
    /// Format and log message at TRACE level, but only if feature `trace` is enabled
    #[allow(unused_macros)]
    macro_rules! log_trace {
        ($fmt: expr) => {
            #[cfg(feature = "trace")]
            {
                log::trace!($fmt);
            }
        };
        ($fmt: expr, $( $args:expr ),*) => {
            #[cfg(feature = "trace")]
            {
                log::trace!($fmt, $($args),*);
            }
        };
    }

    /// Format and log message at ERROR level, but only if feature `debug` is enabled
    #[allow(unused_macros)]
    macro_rules! log_error {
        ($fmt: expr) => {
            #[cfg(feature = "debug")]
            {
                log::error!($fmt);
            }
        };
        ($fmt: expr, $( $args:expr ),*) => {
            #[cfg(feature = "debug")]
            {
                log::error!($fmt, $($args),*);
            }
        };
    }

    // re-exports for crate
    pub(crate) use {log_error, log_trace};
}

pub(crate) use macros::*;

#[cfg(all(feature = "debug", test))]
mod tests {
    use serial_test::serial;

    fn init() {
        use simplelog::{Config, LevelFilter, TermLogger, TerminalMode};
        let _ = TermLogger::init(
            LevelFilter::Trace,
            Config::default(),
            TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        );
    }

    #[test]
    #[serial]
    fn debug_register_logs_on_collision() {
        init();
        crate::shutdown();
        crate::register(Some("1.2.3.4.99"), Some("dbgTestSn"), None).expect("first register");
        let err = crate::register(Some("1.2.3.4.100"), Some("dbgTestSn"), None)
            .expect_err("collision should fail");
        assert_eq!(err, crate::OidRegistryError::AlreadyExists);
        crate::shutdown();
    }
}
