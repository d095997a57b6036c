mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::Instant;

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use display::Viewport;
use doodle_jump::assets::SpriteSet;
use doodle_jump::compute::{init_state, tick};
use doodle_jump::config::{Cli, GameConfig};
use doodle_jump::entities::GameStatus;
use doodle_jump::game_loop::LoopState;
use doodle_jump::input::{InputEvent, Key, KeyTracker};
use doodle_jump::Result;

/// Context shared by every round: config, sprites and the RNG.  A restart
/// only rebuilds the `GameState`.
struct Session {
    config: GameConfig,
    sprites: SpriteSet,
    rng: StdRng,
}

// ── Input translation ─────────────────────────────────────────────────────────

fn translate(ev: Event) -> Option<InputEvent> {
    let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
        return None;
    };
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputEvent::Quit);
    }
    let key = match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Key::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Key::Right,
        KeyCode::Char(' ') | KeyCode::Enter => Key::Start,
        KeyCode::Char('r') | KeyCode::Char('R') => Key::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Key::Quit,
        _ => return None,
    };
    match kind {
        KeyEventKind::Press | KeyEventKind::Repeat => Some(InputEvent::KeyDown(key)),
        KeyEventKind::Release => Some(InputEvent::KeyUp(key)),
    }
}

/// Block until an event moves `current` to another screen.
fn wait_for_choice(rx: &mpsc::Receiver<Event>, current: LoopState) -> LoopState {
    loop {
        let Ok(ev) = rx.recv() else {
            // Input thread is gone; nothing can ever arrive again.
            return LoopState::Terminated;
        };
        if let Some(input) = translate(ev) {
            let next = current.on_event(input);
            if next != current {
                return next;
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run one fresh session until the player falls or quits.  Returns the
/// next screen.
fn play<W: Write>(
    out: &mut W,
    session: &mut Session,
    rx: &mpsc::Receiver<Event>,
) -> Result<LoopState> {
    let mut state = init_state(&session.config, &mut session.rng);
    let mut keys = KeyTracker::new();
    let frame_time = session.config.tick_duration();

    info!(platforms = state.platforms.len(), "session started");

    loop {
        let frame_start = Instant::now();
        let frame = state.frame + 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Some(input) = translate(ev) else { continue };
            if LoopState::Playing.on_event(input) == LoopState::Terminated {
                return Ok(LoopState::Terminated);
            }
            keys.record(input, frame);
        }

        state = tick(&state, keys.steering(frame), &session.config, &mut session.rng);

        display::render(out, Viewport::current()?, &state, &session.config, &session.sprites)?;

        if state.status == GameStatus::GameOver {
            info!(score = state.player.score, frames = state.frame, "game over");
            return Ok(LoopState::Playing.on_session_over());
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

fn run<W: Write>(out: &mut W, session: &mut Session, rx: &mpsc::Receiver<Event>) -> Result<()> {
    let mut screen = LoopState::Menu;

    loop {
        screen = match screen {
            LoopState::Menu => {
                display::render_menu(out, Viewport::current()?, &session.sprites)?;
                wait_for_choice(rx, screen)
            }
            LoopState::Playing => play(out, session, rx)?,
            LoopState::GameOver => {
                // The last frame of the session already shows the overlay.
                let choice = wait_for_choice(rx, screen);
                if choice == LoopState::Playing {
                    info!("restarting");
                }
                choice
            }
            LoopState::Terminated => break,
        };
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Restores the terminal once raw mode is on, whichever way `start` exits.
struct TerminalGuard {
    keyboard_enhanced: bool,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_screen(&mut stdout(), self.keyboard_enhanced);
        let _ = terminal::disable_raw_mode();
    }
}

fn restore_screen<W: Write>(out: &mut W, keyboard_enhanced: bool) {
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn start() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = GameConfig::from_cli(&cli)?;
    let sprites = SpriteSet::load(cli.sprites.as_deref())?;
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session { config, sprites, rng };

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    let mut guard = TerminalGuard { keyboard_enhanced: false };
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release events so held arrows stop the moment they're let go.
    guard.keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    if !guard.keyboard_enhanced {
        warn!("terminal has no key-release events, falling back to key-repeat timing");
    }

    // Blocking reads happen on their own thread so the tick never waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = run(&mut out, &mut session, &rx);
    drop(out);
    drop(guard);

    result
}

fn main() -> ExitCode {
    match start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "fatal");
            eprintln!("doodle_jump: {e}");
            ExitCode::FAILURE
        }
    }
}
