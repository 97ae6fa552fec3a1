//! Implements InputPort. Inquire-based chat loop with a session transcript.
//!
//! The transcript lives here, not in the router: each submission is routed first,
//! then recorded as a (User, Assistant) pair and rendered.

use crate::adapters::ui::{banner, progress};
use crate::domain::{ChatEntry, ChatTranscript, DomainError, Speaker};
use crate::ports::InputPort;
use crate::usecases::ResponseRouter;
use async_trait::async_trait;
use crossterm::ExecutableCommand;
use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use inquire::error::InquireError;
use inquire::ui::{Color as UiColor, RenderConfig, StyleSheet, Styled};
use inquire::Text;
use std::io::{Write, stdout};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// What the user asked for on one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(String),
    Clear,
    History,
    Quit,
    /// Blank submission; ignored.
    Empty,
}

/// Map raw prompt input to a command. Anything that is not a known slash command is a message.
pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "/clear" => Command::Clear,
        "/history" => Command::History,
        "/quit" | "/exit" => Command::Quit,
        _ => Command::Send(input.to_string()),
    }
}

/// Inquire styling: hospital prompt prefix, grey placeholder, teal answers.
pub fn theme() -> RenderConfig<'static> {
    let mut config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("🏥").with_fg(UiColor::LightCyan))
        .with_answered_prompt_prefix(Styled::new("👤").with_fg(UiColor::LightCyan))
        .with_answer(StyleSheet::new().with_fg(UiColor::LightCyan));
    config.placeholder = StyleSheet::new().with_fg(UiColor::DarkGrey);
    config
}

/// Install `theme()` for every subsequent inquire prompt.
pub fn apply_theme() {
    inquire::set_global_render_config(theme());
}

fn speaker_icon(speaker: Speaker) -> &'static str {
    match speaker {
        Speaker::User => "👤",
        Speaker::Assistant => "🏥",
    }
}

fn speaker_color(speaker: Speaker) -> Color {
    match speaker {
        Speaker::User => Color::Rgb {
            r: 0x3b,
            g: 0x82,
            b: 0xf6,
        },
        Speaker::Assistant => Color::Rgb {
            r: 0x14,
            g: 0xb8,
            b: 0xa6,
        },
    }
}

/// Header line plus message body, e.g. "🏥 Assistant [14:03]:\n...".
pub fn format_entry(entry: &ChatEntry) -> String {
    format!(
        "{} {} [{}]:\n{}",
        speaker_icon(entry.speaker),
        entry.speaker,
        entry.sent_at.format("%H:%M"),
        entry.message
    )
}

fn render_entry(entry: &ChatEntry) {
    let mut out = stdout();
    let _ = out.execute(SetForegroundColor(speaker_color(entry.speaker)));
    let _ = out.execute(Print(format_entry(entry).replace('\n', "\r\n")));
    let _ = out.execute(ResetColor);
    let _ = out.execute(Print("\r\n\r\n"));
    let _ = out.flush();
}

fn clear_screen() {
    let mut out = stdout();
    let _ = out.execute(Clear(ClearType::All));
    let _ = out.execute(MoveTo(0, 0));
    let _ = out.flush();
}

/// TUI adapter. Inquire prompt, crossterm rendering.
pub struct TuiChat {
    router: Arc<ResponseRouter>,
    transcript: Mutex<ChatTranscript>,
}

impl TuiChat {
    pub fn new(router: Arc<ResponseRouter>) -> Self {
        Self {
            router,
            transcript: Mutex::new(ChatTranscript::new()),
        }
    }

    /// Route one message and record the exchange. Returns the reply.
    pub async fn submit(&self, message: &str) -> String {
        let reply = self.router.route(message).await;
        self.transcript
            .lock()
            .await
            .push_exchange(message, reply.clone());
        reply
    }

    /// Drop the session history.
    pub async fn clear(&self) {
        self.transcript.lock().await.clear();
    }

    /// Copy of the current session history.
    pub async fn transcript(&self) -> ChatTranscript {
        self.transcript.lock().await.clone()
    }

    /// Prompt once. `None` means the user cancelled (Esc / Ctrl-C).
    fn read_input() -> Result<Option<String>, DomainError> {
        match Text::new("Type your message here:")
            .with_placeholder("How can I help you today?")
            .prompt()
        {
            Ok(text) => Ok(Some(text)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(DomainError::Ui(e.to_string())),
        }
    }

    async fn render_history(&self) {
        let transcript = self.transcript.lock().await;
        if transcript.is_empty() {
            let _ = stdout().execute(Print("(no messages yet)\r\n\r\n"));
            return;
        }
        for entry in transcript.entries() {
            render_entry(entry);
        }
    }
}

#[async_trait]
impl InputPort for TuiChat {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let Some(input) = Self::read_input()? else {
                break;
            };

            match parse_command(&input) {
                Command::Empty => continue,
                Command::Quit => break,
                Command::Clear => {
                    self.clear().await;
                    clear_screen();
                    banner::print_welcome();
                }
                Command::History => self.render_history().await,
                Command::Send(message) => {
                    let spinner = progress::thinking_spinner();
                    self.submit(&message).await;
                    spinner.finish_and_clear();

                    let transcript = self.transcript.lock().await;
                    let entries = transcript.entries();
                    // Last two entries are the exchange just recorded.
                    for entry in &entries[entries.len().saturating_sub(2)..] {
                        render_entry(entry);
                    }
                }
            }
        }

        debug!("chat session ended");
        let _ = stdout().execute(Print("Take care! 👋\r\n"));
        Ok(())
    }
}
