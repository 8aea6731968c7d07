pub mod locale;
pub mod store;

pub use locale::Locale;
pub use store::Session;
