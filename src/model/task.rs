use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// Task completion state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Open,
    Complete,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::Complete => "complete",
        }
    }

    /// The other state (toggle-complete flips between the two)
    pub fn toggled(self) -> Status {
        match self {
            Status::Open => Status::Complete,
            Status::Complete => Status::Open,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Task priority. The form never accepts free text for this: the field is
/// a three-value selector, so out-of-set values are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
        }
    }

    /// Next value for the form selector (wraps around)
    pub fn next(self) -> Priority {
        match self {
            Priority::Low => Priority::Normal,
            Priority::Normal => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    /// Previous value for the form selector (wraps around)
    pub fn prev(self) -> Priority {
        match self {
            Priority::Low => Priority::High,
            Priority::Normal => Priority::Low,
            Priority::High => Priority::Normal,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "normal" => Ok(Priority::Normal),
            "high" => Ok(Priority::High),
            _ => Err(()),
        }
    }
}

/// A single to-do item. The identifier is assigned at creation and never
/// changes; the collection holds tasks in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    /// Optional free text (empty = absent)
    pub description: String,
    /// Due date as entered. Deliberately unvalidated; see [`Task::due_date`].
    pub due: Option<String>,
    pub status: Status,
    pub priority: Priority,
    /// Date the task was created
    pub created: NaiveDate,
    /// Date the task was last marked complete (cleared on reopen)
    pub completed_on: Option<NaiveDate>,
}

impl Task {
    pub fn new(id: String, title: String, created: NaiveDate) -> Self {
        Task {
            id,
            title,
            description: String::new(),
            due: None,
            status: Status::Open,
            priority: Priority::Normal,
            created,
            completed_on: None,
        }
    }

    /// Best-effort parse of the due field as `YYYY-MM-DD`. Only used for
    /// display (overdue highlighting); the stored text is authoritative.
    pub fn due_date(&self) -> Option<NaiveDate> {
        let due = self.due.as_deref()?;
        NaiveDate::parse_from_str(due.trim(), "%Y-%m-%d").ok()
    }

    /// An open task whose parsed due date is in the past
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == Status::Open && self.due_date().is_some_and(|d| d < today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn status_toggle_is_an_involution() {
        assert_eq!(Status::Open.toggled(), Status::Complete);
        assert_eq!(Status::Open.toggled().toggled(), Status::Open);
        assert_eq!(Status::Complete.toggled().toggled(), Status::Complete);
    }

    #[test]
    fn priority_parse_is_case_insensitive_and_rejects_out_of_set() {
        assert_eq!("HIGH".parse::<Priority>(), Ok(Priority::High));
        assert_eq!(" low ".parse::<Priority>(), Ok(Priority::Low));
        assert_eq!("normal".parse::<Priority>(), Ok(Priority::Normal));
        assert!("urgent".parse::<Priority>().is_err());
        assert!("".parse::<Priority>().is_err());
    }

    #[test]
    fn priority_selector_cycles_through_all_values() {
        let mut p = Priority::Low;
        p = p.next();
        assert_eq!(p, Priority::Normal);
        p = p.next();
        assert_eq!(p, Priority::High);
        p = p.next();
        assert_eq!(p, Priority::Low);
        assert_eq!(Priority::Low.prev(), Priority::High);
    }

    #[test]
    fn due_date_parses_only_iso_dates() {
        let mut task = Task::new("T-001".into(), "x".into(), date("2025-06-01"));
        assert_eq!(task.due_date(), None);

        task.due = Some("2025-07-15".into());
        assert_eq!(task.due_date(), Some(date("2025-07-15")));

        task.due = Some("next tuesday".into());
        assert_eq!(task.due_date(), None);
    }

    #[test]
    fn overdue_only_applies_to_open_tasks() {
        let today = date("2025-06-10");
        let mut task = Task::new("T-001".into(), "x".into(), today);
        task.due = Some("2025-06-01".into());
        assert!(task.is_overdue(today));

        task.status = Status::Complete;
        assert!(!task.is_overdue(today));

        task.status = Status::Open;
        task.due = Some("garbage".into());
        assert!(!task.is_overdue(today));
    }
}
