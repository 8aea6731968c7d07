pub mod dispatch;
pub mod state;
pub mod status;

pub use state::AppState;
