use crate::session::{Locale, Session};
use anyhow::{Context, Result};
use dialoguer::Select;
use tracing::info;

use super::view::{print_summary, print_welcome_banner};

/// Interactive onboarding: the one-time locale pick preceding main app
/// access. Selection is one-shot with no undo.
pub fn run_wizard(session: &mut Session) -> Result<Locale> {
    print_welcome_banner();

    let items: Vec<String> = Locale::ALL
        .iter()
        .map(|locale| format!("{} — {}", locale.english_name(), locale.native_name()))
        .collect();

    let index = Select::new()
        .with_prompt(t!("onboard.prompt").to_string())
        .items(&items)
        .default(0)
        .interact()
        .context("locale selection aborted")?;

    let locale = Locale::ALL[index];
    complete(session, locale.code())
}

/// Non-interactive path: `iqra onboard --locale ur`.
pub fn run_quick_setup(session: &mut Session, code: &str) -> Result<Locale> {
    print_welcome_banner();
    complete(session, code)
}

fn complete(session: &mut Session, code: &str) -> Result<Locale> {
    let locale = session.select_locale(code)?;
    rust_i18n::set_locale(locale.code());
    info!(locale = locale.code(), "onboarding finished");
    print_summary(locale);
    Ok(locale)
}
