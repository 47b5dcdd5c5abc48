pub mod picker;

pub use picker::{FileDialogPicker, MediaPicker, Permission, Selection};
