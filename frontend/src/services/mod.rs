pub mod config_loader;
pub mod fullscreen;
pub mod logging;

pub use config_loader::load_config;
pub use fullscreen::BrowserFullscreen;
pub use logging::Logger;
