//! Console logging
//!
//! On wasm32 messages go straight to the browser console through `web_sys`.
//! Native builds (tests, tools) route through the `log` facade so the host
//! decides where they end up.

#[cfg(target_arch = "wasm32")]
pub fn info(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn info(msg: &str) {
    log::info!("{}", msg);
}

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(msg: &str) {
    log::warn!("{}", msg);
}

/// `console_log!("fmt", args..)`
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::utils::console::info(&format!($($arg)*))
    };
}

/// `console_warn!("fmt", args..)`
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::utils::console::warn(&format!($($arg)*))
    };
}
