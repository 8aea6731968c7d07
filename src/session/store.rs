use super::locale::Locale;
use crate::error::SessionError;
use serde::Serialize;
use tracing::debug;

/// Per-run user session: tracks whether the one-time onboarding flow (locale
/// selection) has completed, and which locale was chosen.
///
/// Created at process start with onboarding incomplete; never persisted across
/// runs. All mutation happens on the single UI thread, so there is no interior
/// locking here.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    onboarding_complete: bool,
    locale: Locale,
}

impl Session {
    pub fn new() -> Self {
        Self {
            onboarding_complete: false,
            locale: Locale::default(),
        }
    }

    /// Complete onboarding by selecting a locale.
    ///
    /// Unknown codes fail with `SessionError::UnknownLocale` and leave the
    /// session untouched. Selection is one-shot in the UI flow but the store
    /// itself stays idempotent: re-selecting simply overwrites the locale.
    pub fn select_locale(&mut self, code: &str) -> Result<Locale, SessionError> {
        let locale = Locale::parse(code)?;
        self.locale = locale;
        self.onboarding_complete = true;
        debug!(locale = locale.code(), "onboarding complete");
        Ok(locale)
    }

    pub fn is_onboarded(&self) -> bool {
        self.onboarding_complete
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_unonboarded_with_english() {
        let session = Session::new();
        assert!(!session.is_onboarded());
        assert_eq!(session.locale(), Locale::En);
    }

    #[test]
    fn select_locale_sets_locale_and_completes_onboarding() {
        let mut session = Session::new();
        let locale = session.select_locale("ur").unwrap();

        assert_eq!(locale, Locale::Ur);
        assert_eq!(session.locale(), Locale::Ur);
        assert!(session.is_onboarded());
    }

    #[test]
    fn select_locale_rejects_unknown_code_and_leaves_session_unchanged() {
        let mut session = Session::new();
        let err = session.select_locale("xx").unwrap_err();

        assert_eq!(err, SessionError::UnknownLocale("xx".into()));
        assert!(!session.is_onboarded());
        assert_eq!(session.locale(), Locale::En);
    }

    #[test]
    fn reselecting_overwrites_locale() {
        let mut session = Session::new();
        session.select_locale("ar").unwrap();
        session.select_locale("en").unwrap();

        assert_eq!(session.locale(), Locale::En);
        assert!(session.is_onboarded());
    }
}
