use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::model::config::Category;
use crate::model::task::{CategoryBucket, SubTask, Task};

/// One row of the published sheet. Missing columns read as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SheetRow {
    category: String,
    task: String,
    parent: String,
    done: String,
}

impl SheetRow {
    fn is_done(&self) -> bool {
        self.done.eq_ignore_ascii_case("TRUE")
    }
}

/// Parse a `category,task,parent,done` CSV export into per-category tasks.
///
/// Rows with an empty `parent` are main tasks; rows with a `parent` become
/// subtasks of the main task with that exact name. Rows without a task
/// name, subtasks whose parent doesn't exist, and main tasks in categories
/// outside `categories` are dropped. Source order is kept throughout.
pub fn parse_sheet(source: &str, categories: &[Category]) -> Result<CategoryBucket, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source.as_bytes());
    let rows = reader
        .deserialize::<SheetRow>()
        .collect::<Result<Vec<_>, _>>()?;

    // Main tasks live in an arena; `by_name` points at the last one seen
    // with a given name.
    let mut arena: Vec<(String, Task)> = Vec::new();
    let mut by_name: HashMap<&str, usize> = HashMap::new();
    for row in rows.iter().filter(|r| !r.task.is_empty() && r.parent.is_empty()) {
        by_name.insert(row.task.as_str(), arena.len());
        arena.push((
            row.category.to_lowercase(),
            Task::new(row.task.clone(), row.is_done()),
        ));
    }

    for row in rows.iter().filter(|r| !r.task.is_empty() && !r.parent.is_empty()) {
        match by_name.get(row.parent.as_str()) {
            Some(&idx) => arena[idx]
                .1
                .subtasks
                .push(SubTask::new(row.task.clone(), row.is_done())),
            None => debug!(task = %row.task, parent = %row.parent, "dropping subtask with unknown parent"),
        }
    }

    let mut bucket = CategoryBucket::empty(categories.iter().map(|c| c.key.as_str()));
    for (category, task) in arena {
        if !bucket.contains_key(&category) {
            debug!(task = %task.name, category = %category, "dropping task in unknown category");
            continue;
        }
        bucket.push(&category, task);
    }
    Ok(bucket)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn categories() -> Vec<Category> {
        vec![
            Category::new("work", "Work"),
            Category::new("home", "Home"),
        ]
    }

    fn names(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_main_tasks_by_category() {
        let source = "\
category,task,parent,done
work,Write report,,FALSE
home,Dishes,,TRUE
work,Review PR,,true
";
        let bucket = parse_sheet(source, &categories()).unwrap();
        assert_eq!(names(bucket.tasks("work")), vec!["Write report", "Review PR"]);
        assert_eq!(names(bucket.tasks("home")), vec!["Dishes"]);
        assert!(!bucket.tasks("work")[0].done);
        assert!(bucket.tasks("work")[1].done);
        assert!(bucket.tasks("home")[0].done);
    }

    #[test]
    fn test_subtasks_attach_to_parent() {
        let source = "\
category,task,parent,done
work,Ship release,,FALSE
,Tag version,Ship release,TRUE
work,Other,,FALSE
,Write notes,Ship release,FALSE
";
        let bucket = parse_sheet(source, &categories()).unwrap();
        let work = bucket.tasks("work");
        assert_eq!(names(work), vec!["Ship release", "Other"]);
        assert_eq!(
            work[0].subtasks,
            vec![
                SubTask::new("Tag version", true),
                SubTask::new("Write notes", false),
            ]
        );
        assert!(work[1].subtasks.is_empty());
    }

    #[test]
    fn test_subtask_before_parent_row_still_attaches() {
        let source = "\
category,task,parent,done
,Early child,Parent,FALSE
home,Parent,,FALSE
";
        let bucket = parse_sheet(source, &categories()).unwrap();
        assert_eq!(bucket.tasks("home")[0].subtasks.len(), 1);
    }

    #[test]
    fn test_orphan_subtask_is_dropped() {
        let source = "\
category,task,parent,done
work,Real,,FALSE
work,Orphan,Missing,FALSE
";
        let bucket = parse_sheet(source, &categories()).unwrap();
        assert_eq!(bucket.total(), 1);
        assert!(bucket.tasks("work")[0].subtasks.is_empty());
    }

    #[test]
    fn test_empty_task_names_skipped() {
        let source = "\
category,task,parent,done
work,,,TRUE
work,   ,,TRUE
work,Kept,,FALSE
work,,Kept,TRUE
";
        let bucket = parse_sheet(source, &categories()).unwrap();
        assert_eq!(names(bucket.tasks("work")), vec!["Kept"]);
        assert!(bucket.tasks("work")[0].subtasks.is_empty());
    }

    #[test]
    fn test_unknown_category_dropped_but_keys_present() {
        let source = "\
category,task,parent,done
garden,Plant tulips,,FALSE
";
        let bucket = parse_sheet(source, &categories()).unwrap();
        assert_eq!(bucket.total(), 0);
        assert_eq!(bucket.keys().collect::<Vec<_>>(), vec!["work", "home"]);
    }

    #[test]
    fn test_category_and_done_are_normalized() {
        let source = "\
category , task , parent , done
  WORK  ,  Padded  ,  ,  True
Home,Caps,,yes
";
        let bucket = parse_sheet(source, &categories()).unwrap();
        assert_eq!(bucket.tasks("work"), &[Task::new("Padded", true)]);
        assert_eq!(bucket.tasks("home"), &[Task::new("Caps", false)]);
    }

    #[test]
    fn test_missing_columns_default_to_empty() {
        let source = "\
category,task
work,No done column
";
        let bucket = parse_sheet(source, &categories()).unwrap();
        assert_eq!(bucket.tasks("work"), &[Task::new("No done column", false)]);
    }

    #[test]
    fn test_ragged_rows_and_quoted_fields() {
        let source = "\
category,task,parent,done
work,\"Call Bob, then Alice\",,TRUE
work,Short row
";
        let bucket = parse_sheet(source, &categories()).unwrap();
        assert_eq!(
            bucket.tasks("work"),
            &[
                Task::new("Call Bob, then Alice", true),
                Task::new("Short row", false),
            ]
        );
    }

    #[test]
    fn test_duplicate_main_names_attach_to_last() {
        let source = "\
category,task,parent,done
work,Standup,,FALSE
home,Standup,,FALSE
,Notes,Standup,FALSE
";
        let bucket = parse_sheet(source, &categories()).unwrap();
        assert!(bucket.tasks("work")[0].subtasks.is_empty());
        assert_eq!(bucket.tasks("home")[0].subtasks, vec![SubTask::new("Notes", false)]);
    }

    #[test]
    fn test_subtask_of_hidden_category_parent_is_hidden_too() {
        let source = "\
category,task,parent,done
garden,Hidden,,FALSE
,Child,Hidden,FALSE
";
        let bucket = parse_sheet(source, &categories()).unwrap();
        assert!(bucket.is_empty());
    }

    #[test]
    fn test_header_only() {
        let bucket = parse_sheet("category,task,parent,done\n", &categories()).unwrap();
        assert!(bucket.is_empty());
        assert_eq!(bucket.keys().count(), 2);
    }
}
