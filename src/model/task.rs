use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Glyph shown for a finished task
pub const CHECKED: char = '☑';
/// Glyph shown for an open task
pub const UNCHECKED: char = '☐';

/// The checkbox glyph for a done flag
pub fn checkbox_char(done: bool) -> char {
    if done { CHECKED } else { UNCHECKED }
}

/// A nested task, owned by its parent `Task`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTask {
    pub name: String,
    pub done: bool,
}

impl SubTask {
    pub fn new(name: impl Into<String>, done: bool) -> Self {
        SubTask {
            name: name.into(),
            done,
        }
    }
}

/// A main task (no parent) with its subtasks in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub done: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtasks: Vec<SubTask>,
}

impl Task {
    /// Create a task with no subtasks
    pub fn new(name: impl Into<String>, done: bool) -> Self {
        Task {
            name: name.into(),
            done,
            subtasks: Vec::new(),
        }
    }

    /// Builder-style subtask attachment, mostly for fixtures
    pub fn with_subtask(mut self, name: impl Into<String>, done: bool) -> Self {
        self.subtasks.push(SubTask::new(name, done));
        self
    }
}

/// Tasks partitioned by category key.
///
/// Every key the bucket was created with is always present, in creation
/// order, possibly with an empty list. Keys outside that set are never added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryBucket {
    lists: IndexMap<String, Vec<Task>>,
}

impl CategoryBucket {
    /// A bucket with an empty list for each key
    pub fn empty<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CategoryBucket {
            lists: keys.into_iter().map(|k| (k.into(), Vec::new())).collect(),
        }
    }

    /// Append a task to a category. Returns false (and drops the task) when
    /// the category is not one of the bucket's keys.
    pub fn push(&mut self, key: &str, task: Task) -> bool {
        match self.lists.get_mut(key) {
            Some(list) => {
                list.push(task);
                true
            }
            None => false,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.lists.contains_key(key)
    }

    /// Tasks for a category; unknown keys read as empty
    pub fn tasks(&self, key: &str) -> &[Task] {
        self.lists.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Categories in creation order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Task])> {
        self.lists.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }

    /// Number of main tasks across all categories
    pub fn total(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
