//! File dialog feature - choosing where to load and save data files.
//!
//! This module contains state management and business logic for browsing
//! the file system. The same dialog serves two flows: picking an existing
//! JSON file to open, and picking a directory plus file name to save to.

pub mod ui;

use std::fs;
use std::path::PathBuf;

/// Extension of listed and written data files.
const DATA_EXTENSION: &str = "json";
/// Preselected file name when saving for the first time.
const DEFAULT_FILE_NAME: &str = "data.json";

/// What the dialog is choosing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    /// Pick an existing file to load.
    Open,
    /// Pick a directory and file name to write.
    Save,
}

impl DialogMode {
    /// Dialog title text.
    pub fn title(self) -> &'static str {
        match self {
            DialogMode::Open => "Open Data File",
            DialogMode::Save => "Save Data File",
        }
    }
}

/// File dialog entry.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Full path to the file or directory.
    pub path: PathBuf,
    /// Display name (basename of path).
    pub name: String,
    /// Is this entry a directory.
    pub is_dir: bool,
}

/// File dialog state.
#[derive(Debug)]
pub struct FileDialogState {
    /// Is the dialog visible.
    pub visible: bool,
    /// Current dialog flow.
    pub mode: DialogMode,
    /// Current directory being browsed.
    pub current_dir: PathBuf,
    /// Entries in the current directory.
    pub entries: Vec<FileEntry>,
    /// Cursor position.
    pub cursor: usize,
    /// Scroll offset.
    pub scroll: usize,
    /// Show hidden dot-prefixed entries.
    pub show_hidden: bool,
    /// File name being edited, save mode only.
    pub name_input: String,
}

impl FileDialogState {
    /// Create a new, closed dialog state.
    pub fn new() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            visible: false,
            mode: DialogMode::Open,
            current_dir,
            entries: Vec::new(),
            cursor: 0,
            scroll: 0,
            show_hidden: false,
            name_input: String::new(),
        }
    }

    /// Open the dialog in the given mode and directory.
    ///
    /// For saving, `file_name` preselects the name to write; the default
    /// is used when there is none.
    pub fn open(&mut self, mode: DialogMode, start_dir: PathBuf, file_name: Option<&str>) {
        self.visible = true;
        self.mode = mode;
        self.current_dir = start_dir;
        self.name_input = file_name.unwrap_or(DEFAULT_FILE_NAME).to_string();
        self.load_directory();
    }

    /// Close the dialog.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Load directory contents.
    ///
    /// Directories are always listed; files only when they carry the data
    /// extension. An unreadable directory just lists its parent entry.
    pub fn load_directory(&mut self) {
        self.entries.clear();

        // Add parent directory entry if not at root
        if let Some(parent) = self.current_dir.parent() {
            self.entries.push(FileEntry {
                path: parent.to_path_buf(),
                name: "..".to_string(),
                is_dir: true,
            });
        }

        if let Ok(dir_entries) = fs::read_dir(&self.current_dir) {
            for entry in dir_entries.flatten() {
                let path = entry.path();
                let name = path
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string();

                // Skip hidden files if not showing them
                if !self.show_hidden && name.starts_with('.') {
                    continue;
                }

                let is_dir = path.is_dir();
                if !is_dir && !has_data_extension(&name) {
                    continue;
                }

                self.entries.push(FileEntry { path, name, is_dir });
            }
        }

        // Sort: parent entry, then directories, then files, alphabetically
        self.entries.sort_by(|a, b| {
            if a.name == ".." {
                std::cmp::Ordering::Less
            } else if b.name == ".." {
                std::cmp::Ordering::Greater
            } else {
                match (a.is_dir, b.is_dir) {
                    (true, false) => std::cmp::Ordering::Less,
                    (false, true) => std::cmp::Ordering::Greater,
                    _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
                }
            }
        });

        // Reset cursor
        self.cursor = 0;
        self.scroll = 0;
    }

    /// Move cursor up.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor down.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
    }

    /// Get the currently selected entry.
    pub fn current_entry(&self) -> Option<&FileEntry> {
        self.entries.get(self.cursor)
    }

    /// Navigate into the selected directory or return the selected file.
    pub fn select_current(&mut self) -> Option<PathBuf> {
        let entry = self.current_entry()?.clone();

        if entry.is_dir {
            self.current_dir = entry.path;
            self.load_directory();
            None
        } else {
            Some(entry.path)
        }
    }

    /// Navigate into the selected entry when it is a directory.
    pub fn descend_selected(&mut self) {
        if let Some(entry) = self.current_entry() {
            if entry.is_dir {
                self.current_dir = entry.path.clone();
                self.load_directory();
            }
        }
    }

    /// Navigate to parent directory.
    pub fn go_to_parent(&mut self) {
        if let Some(parent) = self.current_dir.parent() {
            self.current_dir = parent.to_path_buf();
            self.load_directory();
        }
    }

    /// Toggle show hidden files.
    pub fn toggle_hidden(&mut self) {
        self.show_hidden = !self.show_hidden;
        self.load_directory();
    }

    /// Append a character to the save file name.
    pub fn name_push(&mut self, c: char) {
        self.name_input.push(c);
    }

    /// Remove the last character of the save file name.
    pub fn name_pop(&mut self) {
        self.name_input.pop();
    }

    /// The full path a save would write to.
    ///
    /// The data extension is appended when missing, and an empty name
    /// falls back to the default.
    pub fn save_path(&self) -> PathBuf {
        let name = self.name_input.trim();
        let name = if name.is_empty() {
            DEFAULT_FILE_NAME.to_string()
        } else {
            with_data_extension(name)
        };
        self.current_dir.join(name)
    }

    /// Adjust scroll to keep cursor visible.
    pub fn adjust_scroll(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        }

        if self.cursor >= self.scroll + viewport_height {
            self.scroll = self.cursor.saturating_sub(viewport_height - 1);
        }
    }
}

impl Default for FileDialogState {
    fn default() -> Self {
        Self::new()
    }
}

fn has_data_extension(name: &str) -> bool {
    name.rsplit('.')
        .next()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DATA_EXTENSION))
        && name.len() > DATA_EXTENSION.len()
}

fn with_data_extension(name: &str) -> String {
    if has_data_extension(name) {
        name.to_string()
    } else {
        format!("{}.{}", name, DATA_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialog_at(dir: PathBuf) -> FileDialogState {
        let mut state = FileDialogState::new();
        state.open(DialogMode::Open, dir, None);
        state
    }

    #[test]
    fn listing_filters_files_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("points.json"), "[]").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let state = dialog_at(dir.path().to_path_buf());
        let names: Vec<_> = state.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["..", "sub", "points.json"]);
    }

    #[test]
    fn hidden_entries_follow_the_toggle() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".secret.json"), "[]").unwrap();

        let mut state = dialog_at(dir.path().to_path_buf());
        assert!(state.entries.iter().all(|e| e.name != ".secret.json"));

        state.toggle_hidden();
        assert!(state.entries.iter().any(|e| e.name == ".secret.json"));
    }

    #[test]
    fn selecting_a_directory_descends_into_it() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("a.json"), "[]").unwrap();

        let mut state = dialog_at(dir.path().to_path_buf());
        state.cursor = 1; // the "sub" entry, after ".."
        assert_eq!(state.select_current(), None);
        assert!(state.current_dir.ends_with("sub"));
        assert!(state.entries.iter().any(|e| e.name == "a.json"));
    }

    #[test]
    fn selecting_a_file_returns_its_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("points.json"), "[]").unwrap();

        let mut state = dialog_at(dir.path().to_path_buf());
        state.cursor = state
            .entries
            .iter()
            .position(|e| e.name == "points.json")
            .unwrap();
        let picked = state.select_current().unwrap();
        assert!(picked.ends_with("points.json"));
    }

    #[test]
    fn save_path_appends_the_extension() {
        let mut state = FileDialogState::new();
        state.open(DialogMode::Save, PathBuf::from("/tmp"), None);

        state.name_input = "run-3".to_string();
        assert_eq!(state.save_path(), PathBuf::from("/tmp/run-3.json"));

        state.name_input = "run-3.JSON".to_string();
        assert_eq!(state.save_path(), PathBuf::from("/tmp/run-3.JSON"));
    }

    #[test]
    fn save_path_falls_back_to_default_name() {
        let mut state = FileDialogState::new();
        state.open(DialogMode::Save, PathBuf::from("/tmp"), None);
        state.name_input.clear();
        assert_eq!(state.save_path(), PathBuf::from("/tmp/data.json"));
    }

    #[test]
    fn open_preselects_the_given_file_name() {
        let mut state = FileDialogState::new();
        state.open(DialogMode::Save, PathBuf::from("/tmp"), Some("points.json"));
        assert_eq!(state.name_input, "points.json");

        state.open(DialogMode::Save, PathBuf::from("/tmp"), None);
        assert_eq!(state.name_input, "data.json");
    }
}
