//! Diagnostic output
//!
//! Diagnostics are a best-effort side channel: with the `defmt` feature
//! they go to the defmt logger, without it they compile away entirely.
//! Control flow never depends on them.

/// Emit an informational diagnostic line
#[macro_export]
macro_rules! diag {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::info!($($arg)*);
    }};
}

/// Emit a warning diagnostic line
#[macro_export]
macro_rules! diag_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::warn!($($arg)*);
    }};
}
