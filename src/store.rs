// Task store backed by a single JSON file

use crate::error::{Error, Result};
use crate::models::{Status, Task, now_timestamp};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Persistent task store whose sole durable representation is one JSON file
/// holding an array of task objects.
///
/// The store keeps no state in memory between calls: every operation reads
/// the backing file, mutates the task list in memory, and rewrites the file
/// before returning. Each call is therefore independently durable, and a
/// failed operation leaves the file untouched.
///
/// There is no cross-process locking. Concurrent invocations against the
/// same backing file race and the last writer wins; this is a documented
/// limitation of the single-user CLI, not something the store defends
/// against.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Default backing file name, created in the working directory.
    pub const DEFAULT_PATH: &'static str = "tasks.json";

    /// Create a store over the given backing file path.
    ///
    /// The file is not touched here; it is created by the first mutating
    /// operation.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Read the full task list from the backing file.
    ///
    /// A missing, unreadable, or syntactically invalid file is treated as an
    /// empty store rather than an error; the tool stays usable and the next
    /// successful mutation rewrites the file. Read problems other than
    /// "absent" are logged at warn level.
    pub fn load(&self) -> Vec<Task> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(path = ?self.path, error = ?e, "Failed to read backing file, treating as empty store");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Task>>(&contents) {
            Ok(tasks) => {
                debug!(path = ?self.path, count = tasks.len(), "Loaded tasks");
                tasks
            }
            Err(e) => {
                warn!(path = ?self.path, error = ?e, "Backing file is not a valid task array, treating as empty store");
                Vec::new()
            }
        }
    }

    /// Rewrite the backing file with the given task list, pretty-printed.
    ///
    /// The write goes through a temp file in the same directory followed by
    /// a rename, so a failed save never leaves a torn file visible to
    /// subsequent reads.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)
            .map_err(|e| self.storage_err(io::Error::other(e)))?;

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.storage_err(e))?;
        tmp.write_all(json.as_bytes())
            .and_then(|()| tmp.write_all(b"\n"))
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| self.storage_err(e))?;
        tmp.persist(&self.path)
            .map_err(|e| self.storage_err(e.error))?;

        debug!(path = ?self.path, count = tasks.len(), "Saved tasks");
        Ok(())
    }

    // ========================================================================
    // Mutations and queries
    // ========================================================================

    /// Add a new task with the given description.
    ///
    /// Surrounding whitespace is trimmed; an empty or whitespace-only
    /// description is rejected. The new task gets the next id (one past the
    /// highest existing id, 1 for an empty store), status todo, and equal
    /// creation and update timestamps.
    pub fn add(&self, description: &str) -> Result<Task> {
        let description = description.trim();
        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        let mut tasks = self.load();
        let timestamp = now_timestamp();
        let task = Task {
            id: Self::next_id(&tasks),
            description: description.to_string(),
            status: Status::Todo,
            created_at: timestamp.clone(),
            updated_at: timestamp,
        };

        tasks.push(task.clone());
        self.save(&tasks)?;
        Ok(task)
    }

    /// List tasks in creation order, optionally restricted to one status.
    ///
    /// The filter string is validated here, not at the CLI: anything other
    /// than `todo`, `in-progress`, or `done` is an error.
    pub fn list(&self, status_filter: Option<&str>) -> Result<Vec<Task>> {
        let mut tasks = self.load();
        if let Some(raw) = status_filter {
            let status: Status = raw.parse()?;
            tasks.retain(|t| t.status == status);
        }
        Ok(tasks)
    }

    /// Replace the description of the task with the given id.
    ///
    /// Status and creation timestamp are untouched; `updated_at` is
    /// refreshed.
    pub fn update(&self, id: u64, new_description: &str) -> Result<Task> {
        let new_description = new_description.trim();
        if new_description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        let mut tasks = self.load();
        let task = Self::find_mut(&mut tasks, id)?;
        task.description = new_description.to_string();
        task.updated_at = now_timestamp();
        let updated = task.clone();

        self.save(&tasks)?;
        Ok(updated)
    }

    /// Remove the task with the given id, returning it.
    ///
    /// The order of the remaining tasks is unchanged, and the removed id is
    /// never handed out again unless it was the highest in the store.
    pub fn delete(&self, id: u64) -> Result<Task> {
        let mut tasks = self.load();
        let pos = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        let removed = tasks.remove(pos);

        self.save(&tasks)?;
        Ok(removed)
    }

    /// Set the status of the task with the given id to in-progress.
    pub fn mark_in_progress(&self, id: u64) -> Result<Task> {
        self.set_status(id, Status::InProgress)
    }

    /// Set the status of the task with the given id to done.
    pub fn mark_done(&self, id: u64) -> Result<Task> {
        self.set_status(id, Status::Done)
    }

    /// Shared status transition. Any status may move to any other; marking a
    /// task with its current status again is a no-op apart from the
    /// `updated_at` refresh.
    fn set_status(&self, id: u64, status: Status) -> Result<Task> {
        let mut tasks = self.load();
        let task = Self::find_mut(&mut tasks, id)?;
        task.status = status;
        task.updated_at = now_timestamp();
        let updated = task.clone();

        self.save(&tasks)?;
        Ok(updated)
    }

    // Linear scan; a personal task list is small enough that an index would
    // be overhead.
    fn find_mut(tasks: &mut [Task], id: u64) -> Result<&mut Task> {
        tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::TaskNotFound(id))
    }

    fn next_id(tasks: &[Task]) -> u64 {
        tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
    }

    fn storage_err(&self, source: io::Error) -> Error {
        Error::Storage {
            path: self.path.clone(),
            source,
        }
    }
}
