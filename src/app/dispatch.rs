use super::state::AppState;
use super::status;
use crate::assistant::{run_turn, ReplyEngine, SimulatedEngine};
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::content::{dashboard, premium, profile, tafseer};
use crate::conversation::Message;
use crate::router::{self, PageDescriptor, PathKey};
use crate::ui::style;
use crate::voice::{SimulatedTranscriber, Transcriber};
use anyhow::Result;
use tracing::{info, warn};

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let mut state = AppState::new();

    match cli.command {
        Commands::Onboard {
            interactive,
            locale,
        } => {
            if interactive {
                crate::onboard::run_wizard(&mut state.session)?;
            } else {
                let code = locale.unwrap_or_else(|| config.default_locale.code().to_string());
                crate::onboard::run_quick_setup(&mut state.session, &code)?;
            }
            Ok(())
        }

        Commands::Ask { message, instant } => {
            bootstrap(&mut state, &config)?;
            let page = state.navigate("chat");
            print_page_header(page);

            let engine: Box<dyn ReplyEngine> = if instant {
                Box::new(SimulatedEngine::instant())
            } else {
                Box::new(config.reply_engine())
            };
            run_chat_turn(&mut state, engine.as_ref(), &message).await
        }

        Commands::Voice { instant } => {
            bootstrap(&mut state, &config)?;
            let page = state.navigate("voice");
            print_page_header(page);

            let transcriber: Box<dyn Transcriber> = if instant {
                Box::new(SimulatedTranscriber::instant())
            } else {
                Box::new(config.transcriber())
            };
            println!("  {}", style::dim(t!("voice.listening")));
            let transcription = state.voice.listen(transcriber.as_ref()).await?.to_string();
            println!(
                "  {} {}",
                style::accent(t!("voice.you_said")),
                transcription
            );
            println!();

            let engine: Box<dyn ReplyEngine> = if instant {
                Box::new(SimulatedEngine::instant())
            } else {
                Box::new(config.reply_engine())
            };
            run_chat_turn(&mut state, engine.as_ref(), &transcription).await?;

            println!();
            println!("  {}", style::header(t!("voice.tips_title")));
            for tip in dashboard::VOICE_TIPS {
                println!("  {} {}", style::accent("•"), style::dim(tip));
            }
            Ok(())
        }

        Commands::Open { page } => {
            bootstrap(&mut state, &config)?;
            if let Err(error) = router::resolve(&page) {
                warn!(%error, "falling back to home");
                println!("  {}", style::dim(format!("{error} — showing home")));
            }
            let descriptor = state.navigate(&page);
            render_page(descriptor);
            Ok(())
        }

        Commands::Tafseer { surah, search } => {
            bootstrap(&mut state, &config)?;
            let page = state.navigate("tafseer");
            print_page_header(page);

            if let Some(number) = surah {
                match tafseer::surah(number) {
                    Some(surah) => print_surah(surah),
                    None => println!(
                        "  {}",
                        style::dim(format!("No surah number {number} in the index yet"))
                    ),
                }
            } else {
                let query = search.as_deref().unwrap_or("");
                for surah in tafseer::search_surahs(query) {
                    print_surah(surah);
                }
            }
            Ok(())
        }

        Commands::Status { json } => {
            if json {
                println!("{}", status::render_status_json(&state)?);
            } else {
                print!("{}", status::render_status(&state));
            }
            Ok(())
        }
    }
}

/// Silent quick onboarding with the configured default locale, so one-shot
/// commands work without running the wizard first.
fn bootstrap(state: &mut AppState, config: &Config) -> Result<()> {
    let locale = state.complete_onboarding(config.default_locale.code())?;
    info!(locale = locale.code(), "session bootstrapped");
    Ok(())
}

async fn run_chat_turn(
    state: &mut AppState,
    engine: &dyn ReplyEngine,
    message: &str,
) -> Result<()> {
    println!("  {} {}", style::header(t!("chat.you")), message);
    println!("  {}", style::dim(t!("chat.typing")));

    let reply = run_turn(&mut state.chat, engine, message).await?;
    print_assistant_message(reply);
    Ok(())
}

fn print_assistant_message(message: &Message) {
    println!(
        "  {} {}",
        style::accent(t!("chat.assistant")),
        message.body
    );
    if !message.citation_refs.is_empty() {
        println!(
            "    {} {}",
            style::dim(t!("chat.references")),
            style::citation(message.citation_refs.join(", "))
        );
    }
    if message.audio_ref.is_some() {
        println!("    {}", style::dim(t!("chat.play_audio")));
    }
    println!(
        "    {}",
        style::dim(message.created_at.format("%H:%M").to_string())
    );
}

fn print_page_header(page: PageDescriptor) {
    println!();
    println!("  {}", style::header(page.title));
    println!("  {}", style::dim(page.tagline));
    println!();
}

fn render_page(page: PageDescriptor) {
    print_page_header(page);
    match page.key {
        PathKey::Home => {
            println!("  {}", style::arabic(t!("home.greeting")));
            println!();
            println!("  {}", style::header(t!("home.quick_actions")));
            for action in dashboard::QUICK_ACTIONS {
                println!(
                    "  {} {:12} {} ({})",
                    style::accent("›"),
                    action.title,
                    style::dim(action.description),
                    style::value(format!("iqra open {}", action.path))
                );
            }
            println!();
            println!("  {}", style::header(t!("home.explore")));
            for category in dashboard::CATEGORIES {
                println!(
                    "  {} {:12} {}",
                    style::accent("›"),
                    category.name,
                    style::dim(category.count)
                );
            }
        }
        PathKey::Chat => {
            println!("  {}", style::dim(t!("chat.hint")));
        }
        PathKey::Voice => {
            println!("  {}", style::dim(t!("voice.hint")));
            println!();
            println!("  {}", style::header(t!("voice.tips_title")));
            for tip in dashboard::VOICE_TIPS {
                println!("  {} {}", style::accent("•"), style::dim(tip));
            }
        }
        PathKey::Tafseer => {
            let verse = tafseer::featured_verse();
            println!("  {}", style::arabic(verse.arabic));
            println!("  {}", style::dim(verse.transliteration));
            println!("  {}", verse.translation);
            println!("  {}", style::citation(verse.reference));
            println!();
            for surah in &tafseer::SURAHS {
                print_surah(surah);
            }
        }
        PathKey::Profile => {
            println!("  {}", style::header(profile::USER_NAME));
            println!();
            for stat in profile::STATS {
                println!(
                    "  {} {:16} {}",
                    style::accent("›"),
                    stat.label,
                    style::value(stat.value)
                );
            }
            println!();
            println!("  {}", style::header(t!("profile.recent_activity")));
            for activity in profile::RECENT_ACTIVITY {
                println!(
                    "  {} {} {}",
                    style::accent("›"),
                    activity.title,
                    style::dim(activity.time)
                );
            }
            println!();
            println!("  {}", style::header(t!("profile.recommended")));
            for rec in profile::RECOMMENDATIONS {
                println!(
                    "  {} {} — {} ({}%)",
                    style::accent("›"),
                    rec.title,
                    style::dim(rec.description),
                    rec.progress
                );
            }
        }
        PathKey::Premium => {
            for plan in &premium::PLANS {
                let marker = if plan.is_popular {
                    style::success("★")
                } else {
                    style::dim("·")
                };
                println!(
                    "  {} {} {} / {}",
                    marker,
                    style::header(plan.name),
                    style::value(plan.price),
                    plan.period
                );
                println!("    {}", style::dim(plan.description));
                for feature in plan.features {
                    println!("    {} {}", style::accent("✓"), feature);
                }
                println!("    [{}]", plan.button_text);
                println!();
            }
            println!("  {}", style::header(t!("premium.compare")));
            for row in premium::FEATURE_MATRIX {
                println!(
                    "  {} {:20} free: {:24} premium: {}",
                    style::accent("›"),
                    row.name,
                    row.free.unwrap_or("—"),
                    style::value(row.premium.unwrap_or("—"))
                );
            }
            println!();
            println!("  {}", style::dim(premium::checkout(&premium::PLANS[1])));
        }
    }
    println!();
}

fn print_surah(surah: &tafseer::Surah) {
    println!(
        "  {} {:>3}. {:12} {} — {} ({} verses)",
        style::accent("›"),
        surah.number,
        surah.name,
        style::arabic(surah.arabic),
        style::dim(surah.meaning),
        surah.verses
    );
}
