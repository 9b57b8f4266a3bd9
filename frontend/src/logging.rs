use log::Level;

/// Most verbose level sent to the browser console.
pub fn max_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

pub fn init() {
    console_error_panic_hook::set_once();

    // a second init keeps the first logger
    if let Err(err) = console_log::init_with_level(max_level()) {
        log::debug!("console logger already set: {}", err);
    }
}
