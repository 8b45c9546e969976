use std::collections::HashMap;

use serde::Deserialize;

use crate::model::config::Category;
use crate::model::task::{CategoryBucket, Task};

#[derive(Debug, Deserialize)]
struct Entry {
    task: String,
    #[serde(default)]
    done: Option<bool>,
}

/// Parse a JSON object of `category -> [{task, done}]`.
///
/// Categories missing from the document read as empty; categories not in
/// `categories` are ignored. No subtasks.
pub fn parse_structured(
    source: &str,
    categories: &[Category],
) -> Result<CategoryBucket, serde_json::Error> {
    let mut raw: HashMap<String, Vec<Entry>> = serde_json::from_str(source)?;
    let mut bucket = CategoryBucket::empty(categories.iter().map(|c| c.key.as_str()));
    for category in categories {
        for entry in raw.remove(&category.key).unwrap_or_default() {
            bucket.push(&category.key, Task::new(entry.task, entry.done.unwrap_or(false)));
        }
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

    #[test]
    fn test_structured_source() {
        let source = r#"{
            "work": [{"task": "Deploy", "done": true}, {"task": "Plan", "done": false}],
            "home": [{"task": "Laundry"}]
        }"#;
        let bucket = parse_structured(source, &categories()).unwrap();
        assert_eq!(
            bucket.tasks("work"),
            &[Task::new("Deploy", true), Task::new("Plan", false)]
        );
        assert_eq!(bucket.tasks("home"), &[Task::new("Laundry", false)]);
    }

    #[test]
    fn test_null_done_reads_as_not_done() {
        let source = r#"{
            "work": [{"task": "Deploy", "done": null}, {"task": "Ship", "done": true}],
            "home": [{"task": "Laundry"}]
        }"#;
        let bucket = parse_structured(source, &categories()).unwrap();
        assert_eq!(
            bucket.tasks("work"),
            &[Task::new("Deploy", false), Task::new("Ship", true)]
        );
        assert_eq!(bucket.tasks("home"), &[Task::new("Laundry", false)]);
    }

    #[test]
    fn test_missing_and_unknown_categories() {
        let source = r#"{"garden": [{"task": "Weed", "done": false}]}"#;
        let bucket = parse_structured(source, &categories()).unwrap();
        assert!(bucket.is_empty());
        assert_eq!(bucket.keys().collect::<Vec<_>>(), vec!["work", "home"]);
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(parse_structured("[1, 2, 3]", &categories()).is_err());
        assert!(parse_structured(r#"{"work": [{"done": true}]}"#, &categories()).is_err());
        assert!(parse_structured("not json", &categories()).is_err());
    }
}
