// Vitrine STORY-008: Chat REPL
//
// The terminal counterpart of the site's chat widget: type the banner in,
// print the greeting, then loop question -> reply. Replies run through the
// markup renderer; bridge failures arrive as ordinary transcript entries.

use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

use vitrine_assist::{BackendConfig, ChatSession, GeminiBackend, GenerationBackend};
use vitrine_ui::animation::{Phase, TypingBanner};
use vitrine_utils::{markup, Profile, Speaker};

const RESET: &str = "\x1b[0m";

#[derive(Debug, Args)]
pub struct ChatArgs {
    /// Profile JSON overriding the built-in portfolio data
    #[clap(long)]
    profile: Option<PathBuf>,

    /// Model identifier passed to the generation API
    #[clap(long)]
    model: Option<String>,

    /// Skip the typing-banner intro
    #[clap(long)]
    no_banner: bool,
}

pub async fn run(args: ChatArgs) -> Result<()> {
    let profile =
        Profile::load(args.profile.as_deref()).context("could not load the profile resource")?;

    let mut config = BackendConfig::default();
    if let Some(model) = args.model {
        config = config.with_model(model);
    }

    let backend =
        GeminiBackend::new(config).map(|b| Box::new(b) as Box<dyn GenerationBackend>);
    let mut session = ChatSession::new(profile, backend);

    if !args.no_banner {
        play_intro(session.profile()).await?;
    }

    render_new(&mut session);

    loop {
        let line: String = dialoguer::Input::new()
            .with_prompt("❯ you")
            .allow_empty(true)
            .interact_text()
            .context("could not read from the terminal")?;

        let line = line.trim().to_string();
        if line == "/quit" || line == "/exit" {
            break;
        }

        session.ask(&line).await;
        render_new(&mut session);
    }

    Ok(())
}

/// Type the first role in and leave it standing, then hand over to the
/// prompt. One pass through the Typing phase only.
async fn play_intro(profile: &Profile) -> Result<()> {
    let mut banner = TypingBanner::new(profile.roles.clone());
    let mut out = io::stdout();

    writeln!(out, "\n  {}", profile.owner)?;
    loop {
        tokio::time::sleep(banner.delay()).await;
        banner.tick();
        write!(out, "\r\x1b[2K  {}▌", banner.current())?;
        out.flush()?;
        if banner.phase() == Phase::Pausing {
            break;
        }
    }
    writeln!(out, "\n")?;
    Ok(())
}

/// Print transcript entries added since the last call. User entries are
/// skipped: the visitor just typed them.
fn render_new(session: &mut ChatSession) {
    let mut rendered = Vec::new();
    for entry in session.transcript_mut().drain_new() {
        if entry.speaker == Speaker::User {
            continue;
        }
        rendered.push(format!(
            "{}{}{}\n{}",
            entry.speaker.color_code(),
            entry.glyph_line_prefix(),
            RESET,
            markup::to_ansi(&markup::parse(&entry.body)),
        ));
    }

    for block in rendered {
        println!("{}", block);
    }
}
