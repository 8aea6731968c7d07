pub mod flow;
pub mod view;

pub use flow::{run_quick_setup, run_wizard};
