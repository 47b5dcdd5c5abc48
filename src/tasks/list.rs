use chrono::{Local, NaiveDate};

use crate::model::{Status, Task, TaskDraft};

/// Error type for task operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("Title is required")]
    TitleRequired,
}

/// The authoritative task collection for the session. Insertion order is
/// display order; identifiers are unique and never reused while the
/// process lives.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    /// Highest id number ever assigned (ids of deleted tasks stay burned)
    last_id: u32,
}

impl TaskList {
    pub fn new() -> Self {
        TaskList::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Create a task from the draft. The title must be non-empty after
    /// trimming; status is forced to open and the record is appended to
    /// the end of the collection. Returns the assigned id.
    pub fn create(&mut self, draft: &TaskDraft) -> Result<String, TaskError> {
        if draft.title.trim().is_empty() {
            return Err(TaskError::TitleRequired);
        }

        let id = self.next_id();
        let mut task = Task::new(id.clone(), draft.title.clone(), today());
        task.description = draft.description.clone();
        task.due = draft.due_for_storage();
        task.priority = draft.priority;

        self.tasks.push(task);
        tracing::debug!(id = %id, "task created");
        Ok(id)
    }

    /// Replace the target record's mutable fields with the draft's values,
    /// preserving id, status, and date stamps. A vanished target is a
    /// silent no-op; returns whether anything was updated.
    pub fn update(&mut self, target: &str, draft: &TaskDraft) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == target) {
            Some(task) => {
                task.title = draft.title.clone();
                task.description = draft.description.clone();
                task.due = draft.due_for_storage();
                task.priority = draft.priority;
                tracing::debug!(id = %target, "task updated");
                true
            }
            None => false,
        }
    }

    /// Flip open ↔ complete by id, maintaining the completed-on stamp.
    /// Unknown ids are a no-op.
    pub fn toggle_complete(&mut self, id: &str) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.status = task.status.toggled();
            task.completed_on = match task.status {
                Status::Complete => Some(today()),
                Status::Open => None,
            };
            tracing::debug!(id = %id, status = task.status.label(), "task toggled");
        }
    }

    /// Remove by id, unconditionally. Unknown ids are a no-op, so the
    /// operation is idempotent.
    pub fn delete(&mut self, id: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            tracing::debug!(id = %id, "task deleted");
        }
    }

    fn next_id(&mut self) -> String {
        self.last_id += 1;
        format!("T-{:03}", self.last_id)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DraftMode, Priority};

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            ..TaskDraft::create()
        }
    }

    #[test]
    fn create_appends_open_tasks_with_unique_ids() {
        let mut list = TaskList::new();
        for title in ["one", "two", "three"] {
            list.create(&draft(title)).unwrap();
        }
        assert_eq!(list.len(), 3);

        let mut seen = Vec::new();
        for task in list.tasks() {
            assert_eq!(task.status, Status::Open);
            assert!(!seen.contains(&task.id));
            seen.push(task.id.clone());
        }
        assert_eq!(
            list.tasks().iter().map(|t| t.title.as_str()).collect::<Vec<_>>(),
            vec!["one", "two", "three"]
        );
    }

    #[test]
    fn create_rejects_empty_and_whitespace_titles() {
        let mut list = TaskList::new();
        assert!(matches!(
            list.create(&draft("")),
            Err(TaskError::TitleRequired)
        ));
        assert!(matches!(
            list.create(&draft("   ")),
            Err(TaskError::TitleRequired)
        ));
        assert!(list.is_empty());
    }

    #[test]
    fn ids_of_deleted_tasks_are_not_reused() {
        let mut list = TaskList::new();
        let first = list.create(&draft("one")).unwrap();
        list.delete(&first);
        let second = list.create(&draft("two")).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn toggle_twice_restores_the_original_state() {
        let mut list = TaskList::new();
        let id = list.create(&draft("task")).unwrap();

        list.toggle_complete(&id);
        assert_eq!(list.get(&id).unwrap().status, Status::Complete);
        assert!(list.get(&id).unwrap().completed_on.is_some());

        list.toggle_complete(&id);
        assert_eq!(list.get(&id).unwrap().status, Status::Open);
        assert!(list.get(&id).unwrap().completed_on.is_none());
    }

    #[test]
    fn toggle_of_an_unknown_id_is_a_no_op() {
        let mut list = TaskList::new();
        list.create(&draft("task")).unwrap();
        list.toggle_complete("T-999");
        assert_eq!(list.tasks()[0].status, Status::Open);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut list = TaskList::new();
        let id = list.create(&draft("task")).unwrap();
        list.create(&draft("other")).unwrap();

        list.delete(&id);
        let after_first: Vec<String> = list.tasks().iter().map(|t| t.id.clone()).collect();
        list.delete(&id);
        let after_second: Vec<String> = list.tasks().iter().map(|t| t.id.clone()).collect();

        assert_eq!(after_first, after_second);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn update_replaces_fields_but_not_identity_or_status() {
        let mut list = TaskList::new();
        let id = list.create(&draft("Buy milk")).unwrap();
        list.toggle_complete(&id);

        let mut changes = draft("Buy bread");
        changes.description = "from the bakery".into();
        changes.due = "2025-12-01".into();
        changes.priority = Priority::High;
        changes.mode = DraftMode::Edit { target: id.clone() };

        assert!(list.update(&id, &changes));
        assert_eq!(list.len(), 1);

        let task = list.get(&id).unwrap();
        assert_eq!(task.id, id);
        assert_eq!(task.title, "Buy bread");
        assert_eq!(task.description, "from the bakery");
        assert_eq!(task.due.as_deref(), Some("2025-12-01"));
        assert_eq!(task.priority, Priority::High);
        // Status and stamps survive the edit
        assert_eq!(task.status, Status::Complete);
        assert!(task.completed_on.is_some());
    }

    #[test]
    fn update_of_a_vanished_target_is_a_no_op() {
        let mut list = TaskList::new();
        let id = list.create(&draft("task")).unwrap();
        list.delete(&id);

        assert!(!list.update(&id, &draft("ghost")));
        assert!(list.is_empty());
    }
}
