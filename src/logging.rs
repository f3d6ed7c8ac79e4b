// src/logging.rs

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the global logger. Subsequent calls are ignored.
///
/// Natively the filter comes from `RUST_LOG` and defaults to `info` with the
/// wgpu backend held at `warn`; on wasm32 records go to the browser console
/// at `Warn` and above.
pub fn init_logging() {
    INIT.call_once(|| {
        cfg_if::cfg_if! {
            if #[cfg(target_arch = "wasm32")] {
                std::panic::set_hook(Box::new(console_error_panic_hook::hook));
                // Err only if a logger is already installed
                let _ = console_log::init_with_level(log::Level::Warn);
            } else {
                let mut builder = env_logger::Builder::new();
                match std::env::var("RUST_LOG") {
                    Ok(filter) => {
                        builder.parse_filters(&filter);
                    }
                    Err(_) => {
                        builder
                            .filter_level(log::LevelFilter::Info)
                            .filter_module("wgpu_core", log::LevelFilter::Warn)
                            .filter_module("wgpu_hal", log::LevelFilter::Warn);
                    }
                }
                let _ = builder.try_init();
            }
        }

        log::debug!("logging initialized");
    });
}
