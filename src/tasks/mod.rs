pub mod filter;
pub mod list;

pub use filter::{visible_tasks, StatusFilter};
pub use list::{TaskError, TaskList};
