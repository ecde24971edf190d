// TUI event loop and terminal management
use crate::app::Effect;
use crate::collaborators::{open_url, MailtoShareSheet, SystemClipboard};
use crate::{App, InputMode};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tinysteps_core::share::{share_or_copy, ShareSheet};
use tinysteps_core::ViewMode;
use tracing::{info, warn};

pub fn run_tui(mut app: App, mouse_enabled: bool) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let sheet = MailtoShareSheet;
    let clipboard = SystemClipboard;
    info!("TUI started");

    // Main loop
    loop {
        terminal.draw(|f| crate::ui::render(f, &mut app))?;

        let effect = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(&mut app, key.code),
            Event::Mouse(mouse) if mouse_enabled => {
                match mouse.kind {
                    MouseEventKind::ScrollDown => handle_key(&mut app, KeyCode::Down),
                    MouseEventKind::ScrollUp => handle_key(&mut app, KeyCode::Up),
                    _ => None,
                }
            }
            _ => None,
        };

        match effect {
            Some(Effect::OpenUrl(url)) => {
                if let Err(e) = open_url(&url) {
                    warn!("Failed to open {}: {}", url, e);
                    app.error_message = Some(format!("Failed to open browser: {}", e));
                }
            }
            Some(Effect::Share(payload)) => {
                let outcome = share_or_copy(Some(&sheet as &dyn ShareSheet), &clipboard, &payload);
                info!(?outcome, "Shared {}", payload.url);
                if let Some(notice) = outcome.notice() {
                    app.set_status(notice);
                }
            }
            None => {}
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    Ok(())
}

/// Apply one key press to the app, returning any side effect to run
pub fn handle_key(app: &mut App, code: KeyCode) -> Option<Effect> {
    // Popups swallow keys until dismissed
    if app.show_philosophy {
        if matches!(code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('p')) {
            app.toggle_philosophy();
        }
        return None;
    }
    if app.show_help {
        if matches!(code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.toggle_help();
        }
        return None;
    }

    match app.input_mode {
        InputMode::Searching => {
            match code {
                KeyCode::Enter | KeyCode::Esc => app.enter_normal_mode(),
                KeyCode::Char(c) => app.push_search_char(c),
                KeyCode::Backspace => app.pop_search_char(),
                _ => {}
            }
            None
        }
        InputMode::AgePicker => {
            match code {
                KeyCode::Char('j') | KeyCode::Down => app.age_picker_next(),
                KeyCode::Char('k') | KeyCode::Up => app.age_picker_previous(),
                KeyCode::Enter => app.confirm_age_picker(),
                KeyCode::Esc | KeyCode::Char('a') => app.enter_normal_mode(),
                _ => {}
            }
            None
        }
        InputMode::Menu => {
            match code {
                KeyCode::Char('j') | KeyCode::Down => app.menu_next(),
                KeyCode::Char('k') | KeyCode::Up => app.menu_previous(),
                KeyCode::Enter => app.confirm_menu(),
                KeyCode::Esc | KeyCode::Char('m') => app.enter_normal_mode(),
                _ => {}
            }
            None
        }
        InputMode::Normal => handle_normal_key(app, code),
    }
}

fn handle_normal_key(app: &mut App, code: KeyCode) -> Option<Effect> {
    app.clear_messages();

    // Keys that work on every screen
    match code {
        KeyCode::Char('q') => {
            app.quit();
            return None;
        }
        KeyCode::Char('?') => {
            app.toggle_help();
            return None;
        }
        KeyCode::Char('p') => {
            app.toggle_philosophy();
            return None;
        }
        KeyCode::Char('m') => {
            app.open_menu();
            return None;
        }
        KeyCode::Char('s') => {
            app.switch_to(ViewMode::ShoppingList);
            return None;
        }
        KeyCode::Char('B') => {
            app.switch_to(ViewMode::BundleBrowsing);
            return None;
        }
        KeyCode::Char('i') => {
            app.switch_to(ViewMode::ScienceInfo);
            return None;
        }
        _ => {}
    }

    match app.mode() {
        ViewMode::Listing => match code {
            KeyCode::Char('/') => app.enter_search_mode(),
            KeyCode::Char('a') => app.open_age_picker(),
            KeyCode::Char('j') | KeyCode::Down => app.next_result(),
            KeyCode::Char('k') | KeyCode::Up => app.previous_result(),
            KeyCode::Enter => app.open_highlighted(),
            KeyCode::Esc => app.clear_search(),
            _ => {}
        },
        ViewMode::Detail => match code {
            KeyCode::Char('j') | KeyCode::Down => app.scroll_detail_down(),
            KeyCode::Char('k') | KeyCode::Up => app.scroll_detail_up(),
            KeyCode::Char('n') => app.open_next_activity(),
            KeyCode::Char('o') => return app.buy_url().map(Effect::OpenUrl),
            KeyCode::Char('y') => return app.share_payload().map(Effect::Share),
            KeyCode::Esc | KeyCode::Backspace => app.go_back(),
            _ => {}
        },
        ViewMode::ShoppingList => match code {
            KeyCode::Char('j') | KeyCode::Down => app.next_shopping_item(),
            KeyCode::Char('k') | KeyCode::Up => app.previous_shopping_item(),
            KeyCode::Char('c') => app.toggle_classic_only(),
            KeyCode::Right | KeyCode::Char('l') => app.cycle_age(true),
            KeyCode::Left | KeyCode::Char('h') => app.cycle_age(false),
            KeyCode::Enter | KeyCode::Char('o') => return app.selected_shopping_url().map(Effect::OpenUrl),
            KeyCode::Esc | KeyCode::Backspace => app.go_back(),
            _ => {}
        },
        ViewMode::BundleBrowsing => match code {
            KeyCode::Char('j') | KeyCode::Down => app.next_bundle_row(),
            KeyCode::Char('k') | KeyCode::Up => app.previous_bundle_row(),
            KeyCode::Right | KeyCode::Char('l') => app.cycle_bundle_age(true),
            KeyCode::Left | KeyCode::Char('h') => app.cycle_bundle_age(false),
            KeyCode::Char('x') => app.clear_bundle_filter(),
            KeyCode::Enter => app.activate_bundle_row(),
            KeyCode::Esc | KeyCode::Backspace => app.go_back(),
            _ => {}
        },
        ViewMode::ScienceInfo => match code {
            KeyCode::Char('j') | KeyCode::Down => app.scroll_science_down(),
            KeyCode::Char('k') | KeyCode::Up => app.scroll_science_up(),
            // "Explore Activities"
            KeyCode::Enter | KeyCode::Esc | KeyCode::Backspace => app.go_back(),
            _ => {}
        },
    }

    None
}
