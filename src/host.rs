use std::path::PathBuf;

use crate::pixel::Pixel;

/// Blocking dialogs provided by the UI host.
///
/// `None` means the user cancelled; the editor then leaves its state untouched.
pub trait HostDialogs {
    fn pick_color(&mut self, current: Pixel) -> Option<Pixel>;
    fn pick_project_path(&mut self) -> Option<PathBuf>;
}

/// A host without dialogs; every request behaves like a cancel.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDialogs;

impl HostDialogs for NoDialogs {
    fn pick_color(&mut self, _current: Pixel) -> Option<Pixel> {
        None
    }

    fn pick_project_path(&mut self) -> Option<PathBuf> {
        None
    }
}
