pub mod args;
pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use args::CliArgs;
pub use config::{load_config, resolve_config, ResolvedConfig};
pub use run::run_app;
pub use wiring::build_page_view;
