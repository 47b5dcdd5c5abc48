use std::path::{Path, PathBuf};

use rfd::FileDialog;

/// Outcome of asking for media-library access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Outcome of the pick dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Cancelled,
    Picked(PathBuf),
}

/// The media picker boundary. Permission and selection are separate calls
/// so a denial can be reported without ever opening the dialog.
pub trait MediaPicker {
    fn request_permission(&self) -> Permission;
    fn pick_image(&self) -> Selection;
}

/// Native file dialog filtered to image files
#[derive(Debug, Default)]
pub struct FileDialogPicker;

impl MediaPicker for FileDialogPicker {
    fn request_permission(&self) -> Permission {
        // Desktop file dialogs carry no permission model of their own;
        // access is granted unless the environment has no display to show
        // a dialog on.
        if std::env::var_os("DISPLAY").is_none()
            && std::env::var_os("WAYLAND_DISPLAY").is_none()
            && !cfg!(any(target_os = "macos", target_os = "windows"))
        {
            return Permission::Denied;
        }
        Permission::Granted
    }

    fn pick_image(&self) -> Selection {
        let picked = FileDialog::new()
            .set_title("Choose an avatar")
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
            .pick_file();
        match picked {
            Some(path) => {
                tracing::debug!(path = %path.display(), "avatar picked");
                Selection::Picked(path)
            }
            None => Selection::Cancelled,
        }
    }
}

/// Pixel dimensions of an image, read from its header only. None when the
/// file is missing or not a readable image.
pub fn image_dimensions(path: &Path) -> Option<(u32, u32)> {
    image::image_dimensions(path).ok()
}
