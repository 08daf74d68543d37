use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use super::views;
use crate::domain::models::Action;
use crate::domain::models::EditorField;
use crate::domain::models::Event;
use crate::domain::models::NavTarget;
use crate::domain::models::TextArea;
use crate::domain::models::View;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::LocalStorage;
use crate::domain::services::NoteStore;
use crate::domain::services::SummaryPolicy;
use crate::domain::services::ViewController;

fn handle_navigation(app_state: &mut AppState<'_>, input: &Input) -> bool {
    let target = match input {
        Input {
            key: Key::Char('l'),
            ctrl: true,
            ..
        } => NavTarget::Notes,
        Input {
            key: Key::Char('n'),
            ctrl: true,
            ..
        } => NavTarget::Write,
        Input {
            key: Key::Char('b'),
            ctrl: true,
            ..
        } => NavTarget::Brainstorm,
        _ => return false,
    };

    app_state.navigate(target);
    return true;
}

async fn handle_list_input(app_state: &mut AppState<'_>, input: Input) -> Result<()> {
    if app_state.controller.pending_delete().is_some() {
        match input.key {
            Key::Char('y') | Key::Char('Y') => {
                app_state.resolve_delete(true).await?;
            }
            Key::Char('n') | Key::Char('N') | Key::Esc => {
                app_state.resolve_delete(false).await?;
            }
            _ => {}
        }
        return Ok(());
    }

    if app_state.searching {
        match input.key {
            Key::Enter | Key::Esc => {
                app_state.searching = false;
            }
            _ => {
                app_state.search_input.input(input);
                let query = TextArea::text(&app_state.search_input);
                app_state.set_search(&query);
            }
        }
        return Ok(());
    }

    match input.key {
        Key::Up | Key::Char('k') => app_state.cursor_up(),
        Key::Down | Key::Char('j') => app_state.cursor_down(),
        Key::Enter => {
            app_state.read_selected();
        }
        Key::Char('e') => {
            let id = app_state.cursor_note_id();
            app_state.edit(id.as_deref());
        }
        Key::Char('d') => {
            app_state.request_delete_selected();
        }
        Key::Char('/') => app_state.searching = true,
        _ => {}
    }

    return Ok(());
}

fn handle_read_input(app_state: &mut AppState<'_>, input: Input) {
    match input.key {
        Key::Up | Key::Char('k') => app_state.reader_scroll.up(),
        Key::Down | Key::Char('j') => app_state.reader_scroll.down(),
        Key::PageUp => app_state.reader_scroll.up_page(),
        Key::PageDown => app_state.reader_scroll.down_page(),
        Key::Char('e') => {
            let id = app_state
                .controller
                .current_note()
                .map(|note| return note.id.to_string());
            app_state.edit(id.as_deref());
        }
        Key::Esc | Key::Backspace => app_state.navigate(NavTarget::Notes),
        _ => {}
    }
}

fn handle_edit_input(
    app_state: &mut AppState<'_>,
    input: Input,
    tx: &mpsc::UnboundedSender<Action>,
) -> Result<()> {
    match input {
        Input {
            key: Key::Char('s'),
            ctrl: true,
            ..
        } => {
            app_state.save(tx)?;
        }
        Input {
            key: Key::Char('p'),
            ctrl: true,
            ..
        } => {
            app_state.polish(tx)?;
        }
        Input { key: Key::Esc, .. } => app_state.cancel_edit(),
        Input { key: Key::Tab, .. } => app_state.form.focus_next(),
        Input {
            key: Key::Enter, ..
        } if app_state.form.focus() != EditorField::Content => app_state.form.focus_next(),
        input => app_state.form.input(input),
    }

    return Ok(());
}

fn handle_brainstorm_input(
    app_state: &mut AppState<'_>,
    input: Input,
    tx: &mpsc::UnboundedSender<Action>,
) -> Result<()> {
    match input.key {
        Key::Up => app_state.chat_scroll.up(),
        Key::Down => app_state.chat_scroll.down(),
        Key::PageUp => app_state.chat_scroll.up_page(),
        Key::PageDown => app_state.chat_scroll.down_page(),
        Key::Esc => app_state.navigate(NavTarget::Notes),
        Key::Enter => {
            app_state.send_chat(tx)?;
        }
        _ if app_state.brainstorm.is_waiting() => {}
        _ => {
            app_state.chat_input.input(input);
        }
    }

    return Ok(());
}

async fn handle_input(
    app_state: &mut AppState<'_>,
    input: Input,
    tx: &mpsc::UnboundedSender<Action>,
) -> Result<()> {
    if handle_navigation(app_state, &input) {
        return Ok(());
    }

    match app_state.view() {
        View::List => handle_list_input(app_state, input).await?,
        View::Read => handle_read_input(app_state, input),
        View::Edit => handle_edit_input(app_state, input, tx)?,
        View::Brainstorm => handle_brainstorm_input(app_state, input, tx)?,
    }

    return Ok(());
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState<'_>,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);

    loop {
        terminal.draw(|frame| {
            views::render(frame, app_state);
        })?;

        match events.next().await? {
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardInput(input) => {
                handle_input(app_state, input, &tx).await?;
            }
            Event::UIResize() | Event::UITick() => {}
            event => {
                app_state.handle_event(event).await?;
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let store = NoteStore::load(LocalStorage::default()).await?;
    let mut app_state = AppState::new(ViewController::new(store), SummaryPolicy::from_config());

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let res = start_loop(&mut terminal, &mut app_state, tx, rx).await;

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    return res;
}
