pub mod dashboard;
pub mod premium;
pub mod profile;
pub mod tafseer;
