// Library surface for the binary, headless tests and reuse.
pub mod animation;
pub mod app_dirs;
pub mod appearance;
pub mod config;
pub mod debounce;
pub mod logging;
pub mod messages;
pub mod pad;
pub mod runtime;
pub mod scheduler;
pub mod settings;
pub mod state;
pub mod surface;
pub mod ui;
pub mod util;
