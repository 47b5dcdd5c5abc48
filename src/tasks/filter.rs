use crate::model::{Status, Task};

/// Constraint restricting the displayed view to tasks of a given status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Open,
    Complete,
}

impl StatusFilter {
    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Open => "Open",
            StatusFilter::Complete => "Complete",
        }
    }

    /// Next filter in the cycle all → open → complete → all
    pub fn cycled(self) -> StatusFilter {
        match self {
            StatusFilter::All => StatusFilter::Open,
            StatusFilter::Open => StatusFilter::Complete,
            StatusFilter::Complete => StatusFilter::All,
        }
    }

    pub fn admits(self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Open => status == Status::Open,
            StatusFilter::Complete => status == Status::Complete,
        }
    }
}

/// Derive the displayed sequence from the authoritative collection.
///
/// A pure function of its three inputs: keep tasks admitted by the status
/// filter, then tasks whose title contains the search string as a
/// case-insensitive substring (a whitespace-only search matches
/// everything). Collection order is preserved; the result is never a
/// source of truth.
pub fn visible_tasks<'a>(tasks: &'a [Task], filter: StatusFilter, search: &str) -> Vec<&'a Task> {
    let needle = search.trim().to_lowercase();
    tasks
        .iter()
        .filter(|t| filter.admits(t.status))
        .filter(|t| needle.is_empty() || t.title.to_lowercase().contains(&needle))
        .collect()
}
