//! Application state and logic.

use std::path::{Path, PathBuf};

use crate::chart::ChartState;
use crate::clipboard;
use crate::data::{self, DataTable};
use crate::file_dialog::{DialogMode, FileDialogState};
use crate::grid::GridState;
use crate::settings::{ChartStyle, SettingsState};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Path of the most recently loaded or saved file.
    pub file_path: Option<PathBuf>,
    /// The editable point table.
    pub table: DataTable,
    /// Grid cursor and edit state.
    pub grid: GridState,
    /// Computed chart snapshot.
    pub chart: ChartState,
    /// Chart appearance settings.
    pub style: ChartStyle,
    /// Settings overlay state.
    pub settings: SettingsState,
    /// File dialog state.
    pub file_dialog: FileDialogState,
    /// Help overlay visibility.
    pub help_visible: bool,
    /// Status message.
    pub status: String,
    /// Error message, shown in place of the status until the next action.
    pub error_message: Option<String>,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create a new application instance.
    ///
    /// A file argument is loaded immediately; a directory argument opens
    /// the file dialog there instead.
    pub fn new(file_path: Option<PathBuf>) -> Self {
        let mut app = Self {
            file_path: None,
            table: DataTable::new(),
            grid: GridState::new(),
            chart: ChartState::default(),
            style: ChartStyle::default(),
            settings: SettingsState::default(),
            file_dialog: FileDialogState::new(),
            help_visible: false,
            status: "Ready".to_string(),
            error_message: None,
            theme: Theme::GruvboxDark,
        };

        match file_path {
            Some(path) if path.is_dir() => {
                app.file_dialog.open(DialogMode::Open, path, None);
            }
            Some(path) => app.load_from(path),
            None => {}
        }

        app
    }

    /// Recompute the fit and axis frame from the current table.
    pub fn refresh_chart(&mut self) {
        self.chart
            .refresh(self.table.valid_points(), self.style.padding);
    }

    /// Apply the grid's edit buffer and update the chart.
    pub fn commit_edit(&mut self) {
        self.grid.commit_edit(&mut self.table);
        self.error_message = None;
        self.refresh_chart();
    }

    /// Clear the cell under the cursor.
    pub fn clear_cell(&mut self) {
        self.table.clear_cell(self.grid.row, self.grid.col);
        self.refresh_chart();
    }

    /// Clear the row under the cursor.
    pub fn clear_row(&mut self) {
        self.table.clear_row(self.grid.row);
        self.refresh_chart();
        self.set_status(format!("Row {} cleared", self.grid.row + 1));
    }

    /// Copy all non-empty rows to the clipboard as TSV.
    pub fn yank(&mut self) {
        let text = self.grid.yank_tsv(&self.table);
        let rows = text.lines().count();
        match clipboard::copy_to_clipboard(&text) {
            Ok(()) => self.set_status(format!("Copied {} rows", rows)),
            Err(e) => self.set_error(format!("Copy failed: {}", e)),
        }
    }

    /// Paste clipboard rows into the grid starting at the cursor.
    pub fn paste(&mut self) {
        match clipboard::read_from_clipboard() {
            Ok(text) => {
                let rows = self.grid.paste_tsv(&mut self.table, &text);
                self.refresh_chart();
                self.set_status(format!("Pasted {} rows", rows));
            }
            Err(e) => self.set_error(format!("Paste failed: {}", e)),
        }
    }

    /// Open the file dialog for loading or saving.
    pub fn open_dialog(&mut self, mode: DialogMode) {
        let start_dir = self
            .file_path
            .as_ref()
            .and_then(|p| p.parent())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

        let file_name = self
            .file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string());

        self.file_dialog.open(mode, start_dir, file_name.as_deref());
    }

    /// Act on Enter in the file dialog.
    ///
    /// Opening descends into directories and loads a selected file;
    /// saving writes to the dialog's current directory and name.
    pub fn dialog_confirm(&mut self) {
        match self.file_dialog.mode {
            DialogMode::Open => {
                if let Some(path) = self.file_dialog.select_current() {
                    self.file_dialog.close();
                    self.load_from(path);
                }
            }
            DialogMode::Save => {
                let path = self.file_dialog.save_path();
                self.file_dialog.close();
                self.save_to(path);
            }
        }
    }

    /// Load a data file, replacing the table on success.
    pub fn load_from(&mut self, path: PathBuf) {
        match data::load_points(&path) {
            Ok(points) => {
                self.table.replace_all(&points);
                self.refresh_chart();
                self.set_status(format!("{} loaded", display_name(&path)));
                self.file_path = Some(path);
                tracing::info!("File loaded successfully");
            }
            Err(e) => {
                self.set_error(e.to_string());
                tracing::error!("Error loading file: {}", e);
            }
        }
    }

    /// Save the table to a data file.
    pub fn save_to(&mut self, path: PathBuf) {
        match data::save_table(&path, &self.table) {
            Ok(()) => {
                self.set_status(format!("Saved {}", display_name(&path)));
                self.file_path = Some(path);
                tracing::info!("File saved successfully");
            }
            Err(e) => {
                self.set_error(e.to_string());
                tracing::error!("Error saving file: {}", e);
            }
        }
    }

    /// Toggle the settings overlay.
    pub fn toggle_settings(&mut self) {
        if self.settings.visible {
            self.settings.close();
        } else {
            self.settings.open();
        }
    }

    /// Increase the selected setting and update the chart.
    pub fn adjust_setting_up(&mut self) {
        self.settings.adjust_up(&mut self.style);
        self.refresh_chart();
    }

    /// Decrease the selected setting and update the chart.
    pub fn adjust_setting_down(&mut self) {
        self.settings.adjust_down(&mut self.style);
        self.refresh_chart();
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.set_status(format!("Theme: {}", self.theme.name()));
    }

    /// Close any open overlays.
    pub fn close_overlay(&mut self) {
        self.settings.close();
        self.file_dialog.close();
        self.help_visible = false;
    }

    fn set_status(&mut self, msg: String) {
        self.status = msg;
        self.error_message = None;
    }

    fn set_error(&mut self, msg: String) {
        self.error_message = Some(msg);
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Column;

    #[test]
    fn committing_an_edit_updates_the_chart() {
        let mut app = App::new(None);
        assert!(app.chart.frame.is_none());

        app.grid.begin_edit_with('2');
        app.commit_edit();
        app.grid.toggle_column();
        app.grid.begin_edit_with('3');
        app.commit_edit();

        assert_eq!(app.table.valid_points(), vec![(2.0, 3.0)]);
        assert!(app.chart.frame.is_some());
        assert!(app.chart.fit.is_none());
    }

    #[test]
    fn failed_load_keeps_the_table_and_reports() {
        let mut app = App::new(None);
        app.table.set_cell(0, Column::X, Some(1.0));
        app.table.set_cell(0, Column::Y, Some(2.0));
        app.refresh_chart();

        app.load_from(PathBuf::from("/nonexistent/points.json"));

        assert!(app.error_message.is_some());
        assert_eq!(app.table.valid_points(), vec![(1.0, 2.0)]);
        assert!(app.file_path.is_none());
    }

    #[test]
    fn save_then_load_restores_the_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.json");

        let mut app = App::new(None);
        app.table.set_cell(3, Column::X, Some(1.5));
        app.table.set_cell(3, Column::Y, Some(2.5));
        app.save_to(path.clone());
        assert!(app.error_message.is_none());
        assert_eq!(app.file_path.as_deref(), Some(path.as_path()));

        let mut other = App::new(None);
        other.load_from(path);
        assert_eq!(other.table.valid_points(), vec![(1.5, 2.5)]);
        assert_eq!(other.table.cell(3, Column::X), Some(1.5));
        assert!(other.chart.frame.is_some());
    }

    #[test]
    fn save_dialog_preselects_the_loaded_file_name() {
        let mut app = App::new(None);
        app.file_path = Some(PathBuf::from("/data/run-1.json"));
        app.open_dialog(DialogMode::Save);
        assert!(app.file_dialog.visible);
        assert_eq!(app.file_dialog.mode, DialogMode::Save);
        assert_eq!(app.file_dialog.name_input, "run-1.json");
    }

    #[test]
    fn starting_with_a_directory_opens_the_dialog() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(Some(dir.path().to_path_buf()));
        assert!(app.file_dialog.visible);
        assert_eq!(app.file_dialog.mode, DialogMode::Open);
    }
}
