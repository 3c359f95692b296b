pub mod catalog;
pub mod config;
pub mod errors;
pub mod intent;
pub mod llm_client;
pub mod recommend;
pub mod routes;
pub mod state;
pub mod suggest;
pub mod toolkit;

pub use config::Config;
pub use routes::build_router;
pub use state::AppState;
