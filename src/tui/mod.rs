// TUI module - Terminal User Interface
//
// Terminal setup and teardown, the event loop (keyboard, mouse, timer
// ticks) and layered input dispatch into the app state.

pub mod app;
pub mod clipboard;
pub mod components;
pub mod hints;
pub mod layout;
pub mod modal;
pub mod selector;
pub mod traits;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, Mode};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use selector::SelectorAction;
use std::io;
use std::time::{Duration, Instant};
use traits::Interactive;

/// Frame tick; hint timers resolve at this granularity
const TICK: Duration = Duration::from_millis(100);

/// Run the TUI until the user quits.
///
/// `initial_sentence` pre-fills the editor and submits it straight away.
pub async fn run_tui(
    config: Config,
    log_buffer: LogBuffer,
    initial_sentence: Option<String>,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    if config.mouse {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, log_buffer);
    if let Some(sentence) = initial_sentence {
        app.editor.set_text(&sentence);
        app.submit();
    }

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore the terminal even when the loop failed
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    if config.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)
            .context("Failed to disable mouse capture")?;
    }
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop: redraw, then wait for input or the next tick
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(TICK);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick(Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Global → Mode-specific → Component
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: Global keys
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 3: Mode-specific
    match app.mode {
        Mode::Typing => handle_typing_keys(app, key_event),
        Mode::Categorizing => handle_categorizing_keys(app, key_event),
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
    }

    true
}

/// Keys that work the same in both modes
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('n') if ctrl => {
            app.new_session();
            true
        }
        KeyCode::F(1) => {
            app.modal = Some(Modal::help());
            true
        }
        _ => false,
    }
}

fn handle_typing_keys(app: &mut App, key_event: KeyEvent) {
    if app.editor.handle_key(key_event).was_handled() {
        if app.editor.take_typed() {
            app.text_typed(Instant::now());
        }
        return;
    }

    match key_event.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

fn handle_categorizing_keys(app: &mut App, key_event: KeyEvent) {
    // Enter never re-tokenizes here; with the selector open it picks an option
    match app.selector.handle_key(key_event.code) {
        SelectorAction::Choose { term, category } => {
            app.apply_category(term, category);
            return;
        }
        SelectorAction::None | SelectorAction::Close => return,
        SelectorAction::Ignored => {}
    }

    match key_event.code {
        KeyCode::Left | KeyCode::Char('h') => app.step_term(false),
        KeyCode::Right | KeyCode::Char('l') => app.step_term(true),
        KeyCode::Char(' ') => app.click_active(),
        KeyCode::Enter => app.submit(),
        KeyCode::Char('?') => app.modal = Some(Modal::help()),
        KeyCode::Char('y') => copy_annotated(app),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn copy_annotated(app: &mut App) {
    let Some(text) = app.annotated_text() else {
        return;
    };
    match clipboard::copy_to_clipboard(&text) {
        Ok(()) => app.show_toast("✓ Zkopírováno"),
        Err(e) => {
            tracing::warn!("Clipboard copy failed: {:#}", e);
            app.show_toast("✗ Kopírování selhalo");
        }
    }
}

/// Handle mouse input: hover follows movement, left click locks or chooses
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if app.modal.is_some() {
        return;
    }
    match mouse_event.kind {
        MouseEventKind::Moved => app.mouse_moved(mouse_event.column, mouse_event.row),
        MouseEventKind::Down(MouseButton::Left) => {
            app.mouse_clicked(mouse_event.column, mouse_event.row)
        }
        _ => {}
    }
}
