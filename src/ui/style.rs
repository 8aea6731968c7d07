use console::style;
use std::fmt::Display;

/// Green bold — success checkmarks, confirmations
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// White bold — page titles, section headers
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim — taglines, secondary text, timestamps
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Cyan bold — bullets, step markers, assistant label
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Green — confirmed values, selected locale, paths
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Yellow — Arabic verse text and warnings
pub fn arabic<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Magenta — citation references
pub fn citation<D: Display>(text: D) -> String {
    style(text).magenta().to_string()
}
