use iqra::assistant::{run_turn, SimulatedEngine};
use iqra::router::{self, PathKey};
use iqra::session::Locale;
use iqra::voice::SimulatedTranscriber;
use iqra::AppState;

#[test]
fn onboarding_gates_navigation() {
    let mut state = AppState::new();

    // Everything is home before locale selection.
    assert_eq!(state.navigate("premium").key, PathKey::Home);

    let locale = state.complete_onboarding("ur").unwrap();
    assert_eq!(locale, Locale::Ur);
    assert!(state.session.is_onboarded());

    assert_eq!(state.navigate("premium").key, PathKey::Premium);
    assert_eq!(state.navigate("nonsense").key, PathKey::Home);
}

#[test]
fn router_covers_the_whole_menu() {
    for page in router::PAGES {
        assert_eq!(
            router::resolve(&format!("/{}", page.key)).unwrap().key,
            page.key
        );
    }
    assert!(router::resolve("/checkout").is_err());
}

#[tokio::test]
async fn voice_round_flows_into_the_shared_conversation() {
    let mut state = AppState::new();
    state.complete_onboarding("en").unwrap();
    state.navigate("voice");

    let transcriber = SimulatedTranscriber::instant();
    let transcription = state.voice.listen(&transcriber).await.unwrap().to_string();
    assert!(transcription.contains("Ayat al-Kursi"));

    let engine = SimulatedEngine::instant();
    let reply = run_turn(&mut state.chat, &engine, &transcription)
        .await
        .unwrap();
    assert!(reply.body.contains("Ayat al-Kursi"));
    assert!(reply.audio_ref.is_some());
}

#[tokio::test]
async fn navigating_away_mid_reply_prevents_stale_writes() {
    let mut state = AppState::new();
    state.complete_onboarding("en").unwrap();
    state.navigate("chat");

    state.chat.submit_user_message("a question").unwrap();
    assert!(state.chat.is_pending());

    // User leaves the page while the simulated backend is still "thinking".
    state.navigate("profile");
    assert!(!state.chat.is_pending());

    // A late resolution from the abandoned round must not land.
    assert!(state
        .chat
        .resolve_pending_reply(iqra::conversation::ReplyDraft::text("stale reply"))
        .is_err());
}
