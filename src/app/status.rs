use super::state::AppState;
use crate::ui::style;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub onboarded: bool,
    pub locale: String,
    pub active_page: String,
    pub chat_messages: usize,
    pub reply_pending: bool,
    pub voice_listening: bool,
}

pub fn report(state: &AppState) -> StatusReport {
    StatusReport {
        onboarded: state.session.is_onboarded(),
        locale: state.session.locale().code().to_string(),
        active_page: state.active().to_string(),
        chat_messages: state.chat.log().len(),
        reply_pending: state.chat.is_pending(),
        voice_listening: state.voice.is_listening(),
    }
}

pub fn render_status(state: &AppState) -> String {
    let report = report(state);
    let mut out = String::new();
    out.push_str(&format!("  {}\n", style::header("Iqra AI — status")));
    out.push_str(&format!(
        "  {} onboarded:     {}\n",
        style::accent("›"),
        if report.onboarded {
            style::success("yes")
        } else {
            style::dim("no")
        }
    ));
    out.push_str(&format!(
        "  {} locale:        {}\n",
        style::accent("›"),
        style::value(&report.locale)
    ));
    out.push_str(&format!(
        "  {} active page:   {}\n",
        style::accent("›"),
        report.active_page
    ));
    out.push_str(&format!(
        "  {} chat messages: {} (reply pending: {})\n",
        style::accent("›"),
        report.chat_messages,
        report.reply_pending
    ));
    out.push_str(&format!(
        "  {} voice:         {}\n",
        style::accent("›"),
        if report.voice_listening {
            "listening"
        } else {
            "idle"
        }
    ));
    out
}

pub fn render_status_json(state: &AppState) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&report(state))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_reflects_state() {
        let mut state = AppState::new();
        state.complete_onboarding("ur").unwrap();
        state.navigate("chat");
        state.chat.submit_user_message("question").unwrap();

        let report = report(&state);
        assert!(report.onboarded);
        assert_eq!(report.locale, "ur");
        assert_eq!(report.active_page, "chat");
        assert!(report.reply_pending);
    }

    #[test]
    fn json_status_is_valid_json() {
        let state = AppState::new();
        let json = render_status_json(&state).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["onboarded"], false);
    }
}
