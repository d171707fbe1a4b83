//! Logging macros usable from target and host code.
//!
//! - `rp2040` feature: forwards to `defmt`, carried over RTT by `defmt-rtt`
//! - host tests: prints to stdout
//! - anything else: compiles to nothing
//!
//! Format strings must be valid for both `defmt` and `core::fmt`, so use
//! `{:?}` for crate types.

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2040")]
        ::defmt::info!($($arg)*);
        #[cfg(all(not(feature = "rp2040"), test))]
        println!("[INFO] {}", format!($($arg)*));
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2040")]
        ::defmt::debug!($($arg)*);
        #[cfg(all(not(feature = "rp2040"), test))]
        println!("[DEBUG] {}", format!($($arg)*));
    }};
}

/// Log trace message
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2040")]
        ::defmt::trace!($($arg)*);
        #[cfg(all(not(feature = "rp2040"), test))]
        println!("[TRACE] {}", format!($($arg)*));
    }};
}
