//! Ordinate - a terminal-based linear regression visualizer.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ordinate::app::App;
use ordinate::file_dialog::DialogMode;
use ordinate::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "ordinate")]
#[command(about = "A terminal-based linear regression visualizer", long_about = None)]
struct Args {
    /// Path to a JSON data file to load, or a directory to browse
    file: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .append(false)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Ordinate");
    }

    // Validate path if provided
    if let Some(ref path) = args.file {
        if !path.exists() {
            eprintln!("Error: Path not found: {}", path.display());
            std::process::exit(1);
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(args.file);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Ordinate exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut pending_g = false; // For 'gg' vim binding

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Cell edit mode - handle separately
                if app.grid.is_editing() {
                    match key.code {
                        KeyCode::Enter => app.commit_edit(),
                        KeyCode::Esc => app.grid.cancel_edit(),
                        KeyCode::Backspace => app.grid.input_pop(),
                        KeyCode::Char(c) => app.grid.input_push(c),
                        _ => {}
                    }
                    continue;
                }

                // Help overlay
                if app.help_visible {
                    match key.code {
                        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                            app.help_visible = false;
                        }
                        _ => {}
                    }
                    continue;
                }

                // File dialog mode
                if app.file_dialog.visible {
                    match app.file_dialog.mode {
                        DialogMode::Open => match (key.modifiers, key.code) {
                            (KeyModifiers::NONE, KeyCode::Esc) => app.file_dialog.close(),

                            (KeyModifiers::NONE, KeyCode::Up)
                            | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                                app.file_dialog.cursor_up();
                            }
                            (KeyModifiers::NONE, KeyCode::Down)
                            | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                                app.file_dialog.cursor_down();
                            }

                            (KeyModifiers::NONE, KeyCode::Enter)
                            | (KeyModifiers::NONE, KeyCode::Char('l'))
                            | (KeyModifiers::NONE, KeyCode::Right) => {
                                app.dialog_confirm();
                            }

                            (KeyModifiers::NONE, KeyCode::Char('h'))
                            | (KeyModifiers::NONE, KeyCode::Left) => {
                                app.file_dialog.go_to_parent();
                            }

                            (KeyModifiers::NONE, KeyCode::Char('.')) => {
                                app.file_dialog.toggle_hidden();
                            }

                            _ => {}
                        },
                        DialogMode::Save => match key.code {
                            KeyCode::Esc => app.file_dialog.close(),
                            KeyCode::Enter => app.dialog_confirm(),
                            KeyCode::Up => app.file_dialog.cursor_up(),
                            KeyCode::Down => app.file_dialog.cursor_down(),
                            KeyCode::Right => app.file_dialog.descend_selected(),
                            KeyCode::Left => app.file_dialog.go_to_parent(),
                            KeyCode::Backspace => app.file_dialog.name_pop(),
                            KeyCode::Char(c) => app.file_dialog.name_push(c),
                            _ => {}
                        },
                    }
                    continue;
                }

                // Settings overlay
                if app.settings.visible {
                    match (key.modifiers, key.code) {
                        (KeyModifiers::NONE, KeyCode::Esc)
                        | (KeyModifiers::NONE, KeyCode::Char('c')) => {
                            app.settings.close();
                        }
                        (KeyModifiers::NONE, KeyCode::Down)
                        | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                            app.settings.select_next();
                        }
                        (KeyModifiers::NONE, KeyCode::Up)
                        | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                            app.settings.select_prev();
                        }
                        (KeyModifiers::NONE, KeyCode::Right)
                        | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                            app.adjust_setting_up();
                        }
                        (KeyModifiers::NONE, KeyCode::Left)
                        | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                            app.adjust_setting_down();
                        }
                        _ => {}
                    }
                    continue;
                }

                // Normal mode
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                    // Navigation
                    (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                        app.grid.cursor_up();
                    }
                    (KeyModifiers::NONE, KeyCode::Down)
                    | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                        app.grid.cursor_down();
                    }
                    (KeyModifiers::NONE, KeyCode::Left)
                    | (KeyModifiers::NONE, KeyCode::Char('h'))
                    | (KeyModifiers::NONE, KeyCode::Right)
                    | (KeyModifiers::NONE, KeyCode::Char('l'))
                    | (KeyModifiers::NONE, KeyCode::Tab) => {
                        app.grid.toggle_column();
                    }

                    // Vim navigation
                    (KeyModifiers::NONE, KeyCode::Char('g')) => {
                        if pending_g {
                            app.grid.goto_first();
                            pending_g = false;
                        } else {
                            pending_g = true;
                        }
                    }
                    (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
                        app.grid.goto_last();
                    }

                    // Cell editing
                    (KeyModifiers::NONE, KeyCode::Enter)
                    | (KeyModifiers::NONE, KeyCode::Char('i')) => {
                        app.grid.begin_edit(&app.table);
                    }

                    // Clearing
                    (KeyModifiers::NONE, KeyCode::Delete)
                    | (KeyModifiers::NONE, KeyCode::Backspace)
                    | (KeyModifiers::NONE, KeyCode::Char('x')) => {
                        app.clear_cell();
                    }
                    (KeyModifiers::SHIFT, KeyCode::Char('D')) => {
                        app.clear_row();
                    }

                    // Clipboard
                    (KeyModifiers::NONE, KeyCode::Char('y')) => {
                        app.yank();
                    }
                    (KeyModifiers::NONE, KeyCode::Char('p')) => {
                        app.paste();
                    }

                    // Files
                    (KeyModifiers::NONE, KeyCode::Char('o')) => {
                        app.open_dialog(DialogMode::Open);
                    }
                    (KeyModifiers::NONE, KeyCode::Char('s')) => {
                        app.open_dialog(DialogMode::Save);
                    }

                    // Features
                    (KeyModifiers::NONE, KeyCode::Char('c')) => {
                        app.toggle_settings();
                    }
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    }
                    (KeyModifiers::NONE, KeyCode::Char('?'))
                    | (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                        app.toggle_help();
                    }

                    // A number starts a fresh edit of the current cell
                    (KeyModifiers::NONE, KeyCode::Char(c))
                        if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' =>
                    {
                        app.grid.begin_edit_with(c);
                    }

                    // Escape - close overlays
                    (KeyModifiers::NONE, KeyCode::Esc) => {
                        app.close_overlay();
                    }

                    _ => {
                        pending_g = false;
                    }
                }
            }
        }
    }
}
