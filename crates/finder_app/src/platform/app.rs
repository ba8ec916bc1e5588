use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::thread;

use anyhow::Context;
use clap::Parser;
use finder_core::{parse_input, update, AppState, Msg};
use finder_engine::Engine;
use finder_logging::{finder_info, finder_warn};
use tokio::sync::mpsc;

use super::config::{self, Cli};
use super::effects::EffectRunner;
use super::logging;
use super::ui::render;

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.log, cli.verbose, &cli.log_file);

    let config = config::resolve(&cli)?;
    finder_info!(
        "Starting session executor={:?} reviews_dir={:?} max_results={}",
        config.executor.program,
        config.reviews_dir,
        config.max_results
    );
    let engine = Engine::from_config(config).context("building the TMDB client")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting the async runtime")?;
    runtime.block_on(async {
        let mut terminal = StdinTerminal::spawn();
        let mut stdout = io::stdout();
        run_session(&engine, &mut terminal, &mut stdout).await
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    /// Ctrl-C or end of input.
    Interrupted,
}

/// Source of user input and of interrupt requests.
#[async_trait::async_trait]
pub trait Terminal: Send {
    async fn read_line(&mut self) -> InputEvent;

    /// Resolves when the user asks to abort whatever is running.
    async fn interrupted(&mut self);
}

/// Reads stdin on a dedicated thread so a pending read can race Ctrl-C.
pub struct StdinTerminal {
    lines: mpsc::UnboundedReceiver<String>,
}

impl StdinTerminal {
    pub fn spawn() -> Self {
        Self::with_reader(|| io::stdin().lock())
    }

    /// Runs `open` on the reader thread and forwards every line it yields.
    fn with_reader<R, F>(open: F) -> Self
    where
        R: BufRead,
        F: FnOnce() -> R + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        thread::spawn(move || forward_lines(open(), &tx));
        Self { lines: rx }
    }
}

/// Sends one string per input line until end of input or a read error.
/// Bytes that are not UTF-8 are replaced, so a garbled line still reaches the
/// parser instead of closing the session.
fn forward_lines<R: BufRead>(mut reader: R, tx: &mpsc::UnboundedSender<String>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(strip_line_ending(&buf)).into_owned();
                if tx.send(line).is_err() {
                    break;
                }
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => {
                finder_warn!("stdin read failed: {}", err);
                break;
            }
        }
    }
}

fn strip_line_ending(buf: &[u8]) -> &[u8] {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[async_trait::async_trait]
impl Terminal for StdinTerminal {
    async fn read_line(&mut self) -> InputEvent {
        tokio::select! {
            line = self.lines.recv() => match line {
                Some(line) => InputEvent::Line(line),
                None => InputEvent::Interrupted,
            },
            Ok(()) = tokio::signal::ctrl_c() => InputEvent::Interrupted,
        }
    }

    async fn interrupted(&mut self) {
        if tokio::signal::ctrl_c().await.is_err() {
            // No signal handler; never interrupt.
            std::future::pending::<()>().await;
        }
    }
}

/// Drives one interactive session until the state machine terminates.
pub async fn run_session<T>(
    engine: &Engine,
    terminal: &mut T,
    out: &mut dyn Write,
) -> anyhow::Result<()>
where
    T: Terminal + ?Sized,
{
    let runner = EffectRunner::new(engine);
    let mut state = AppState::new();
    let mut inbox: VecDeque<Msg> = VecDeque::new();

    out.write_all(render::render_banner().as_bytes())?;

    loop {
        while let Some(msg) = inbox.pop_front() {
            let (next, effects) = update(state, msg);
            state = next;
            for effect in effects {
                let outcome = tokio::select! {
                    biased;
                    outcome = runner.run(effect, out) => outcome?,
                    _ = terminal.interrupted() => Some(Msg::Interrupted),
                };
                if let Some(follow_up) = outcome {
                    let interrupted = matches!(follow_up, Msg::Interrupted);
                    inbox.push_back(follow_up);
                    if interrupted {
                        break;
                    }
                }
            }
        }

        if state.is_terminated() {
            finder_info!("Session finished");
            break;
        }

        let Some(prompt) = state.prompt() else {
            anyhow::bail!("session stalled in {:?} with nothing in flight", state.session());
        };
        if state.consume_dirty() {
            out.write_all(render::render_view(&state.view()).as_bytes())?;
        }
        out.write_all(render::render_prompt(&prompt).as_bytes())?;
        out.flush()?;

        match terminal.read_line().await {
            InputEvent::Interrupted => inbox.push_back(Msg::Interrupted),
            InputEvent::Line(line) => match parse_input(&prompt, &line) {
                Ok(msg) => inbox.push_back(msg),
                Err(err) => out.write_all(render::render_input_error(&err).as_bytes())?,
            },
        }
    }

    out.flush()?;
    Ok(())
}
