use crate::model::task::{Priority, Task};

/// What submitting the form does: append a fresh record, or replace the
/// fields of an existing one. Making the target explicit here (rather than
/// a nullable "editing id" next to the draft) keeps the two modes exhaustive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftMode {
    Create,
    Edit { target: String },
}

/// The transient working buffer behind the add/edit form. Exists only while
/// the form is open; never a source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    /// Due date text as typed (empty = none)
    pub due: String,
    pub priority: Priority,
    pub mode: DraftMode,
}

impl TaskDraft {
    /// An empty draft for creating a new task
    pub fn create() -> Self {
        TaskDraft {
            title: String::new(),
            description: String::new(),
            due: String::new(),
            priority: Priority::default(),
            mode: DraftMode::Create,
        }
    }

    /// A draft seeded from an existing record's current field values
    pub fn edit(task: &Task) -> Self {
        TaskDraft {
            title: task.title.clone(),
            description: task.description.clone(),
            due: task.due.clone().unwrap_or_default(),
            priority: task.priority,
            mode: DraftMode::Edit {
                target: task.id.clone(),
            },
        }
    }

    /// The due field normalized for storage: empty/whitespace becomes None
    pub fn due_for_storage(&self) -> Option<String> {
        let due = self.due.trim();
        if due.is_empty() {
            None
        } else {
            Some(self.due.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn edit_draft_mirrors_the_target_record() {
        let mut task = Task::new(
            "T-007".into(),
            "Walk dog".into(),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        );
        task.description = "around the block".into();
        task.due = Some("2025-06-02".into());
        task.priority = Priority::High;

        let draft = TaskDraft::edit(&task);
        assert_eq!(draft.title, "Walk dog");
        assert_eq!(draft.description, "around the block");
        assert_eq!(draft.due, "2025-06-02");
        assert_eq!(draft.priority, Priority::High);
        assert_eq!(
            draft.mode,
            DraftMode::Edit {
                target: "T-007".into()
            }
        );
    }

    #[test]
    fn blank_due_text_stores_as_none() {
        let mut draft = TaskDraft::create();
        assert_eq!(draft.due_for_storage(), None);
        draft.due = "   ".into();
        assert_eq!(draft.due_for_storage(), None);
        draft.due = "2025-12-31".into();
        assert_eq!(draft.due_for_storage(), Some("2025-12-31".into()));
    }
}
