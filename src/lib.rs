pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod stats;
pub mod storage;
pub mod tree;
pub mod ui;
pub mod state;

pub use app::router;
pub use state::AppState;
pub use storage::{Storage, load_days, load_theme, resolve_data_dir};
