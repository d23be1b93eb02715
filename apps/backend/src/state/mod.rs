pub mod app_state;
pub mod scorebook;

pub use app_state::AppState;
pub use scorebook::Scorebook;
