//! Terminal session runner.
//!
//! One UI task `select!`s over terminal input, the reply channel, and the
//! spinner tick. Backend requests run on spawned tasks and report back over
//! an unbounded channel, so the rendering loop never blocks on the network.

pub mod session;
pub mod style;
pub mod types;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::client::ChatClient;
use crate::config::ChatlineConfig;
use crate::config::constants::ui;

use self::session::Session;
use self::types::SessionEvent;

type ChatTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Run the interactive chat session until the user exits.
pub async fn run(config: ChatlineConfig) -> Result<()> {
    let client = ChatClient::new(&config.backend.base_url)?;
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = drive(&mut terminal, &config, client).await;
    if let Err(err) = restore_terminal(&mut terminal) {
        tracing::error!(error = %err, "failed to restore terminal");
    }
    result
}

async fn drive(terminal: &mut ChatTerminal, config: &ChatlineConfig, client: ChatClient) -> Result<()> {
    let mut session = Session::new(&config.ui.welcome_message, config.ui.quick_actions.clone());
    // Each dispatched request delivers exactly one completion here; that is
    // what guarantees the input surface re-enables on every path.
    let (reply_tx, mut reply_rx) = mpsc::unbounded_channel::<Option<String>>();
    let mut input_events = EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_millis(ui::TICK_INTERVAL_MS));

    loop {
        terminal
            .draw(|frame| session.render(frame))
            .context("failed to draw session")?;

        tokio::select! {
            maybe_event = input_events.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        if let Some(session_event) = session.handle_event(event) {
                            match session_event {
                                SessionEvent::Submit(text) => {
                                    dispatch_request(&client, &reply_tx, text);
                                }
                                SessionEvent::Exit => break,
                            }
                        }
                    }
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, "terminal event stream error");
                    }
                    None => break,
                }
            }
            Some(reply) = reply_rx.recv() => {
                session.finish_request(reply);
            }
            _ = tick.tick() => {
                session.tick();
            }
        }
    }

    Ok(())
}

/// Spawn the single backend request for one submission. No retry, no
/// timeout; `send_message` resolves every failure itself, and the channel
/// send is the unconditional completion step.
fn dispatch_request(client: &ChatClient, reply_tx: &UnboundedSender<Option<String>>, text: String) {
    let client = client.clone();
    let reply_tx = reply_tx.clone();
    tokio::spawn(async move {
        let reply = client.send_message(&text).await;
        let _ = reply_tx.send(reply);
    });
}

fn setup_terminal() -> Result<ChatTerminal> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("failed to initialize terminal")
}

fn restore_terminal(terminal: &mut ChatTerminal) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to restore cursor")
}

/// Restore the terminal before the default panic output runs so a crash
/// never leaves the terminal in raw mode.
fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}
