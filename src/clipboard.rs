//! System clipboard delivery

use crate::error::TreeError;

/// Copy `text` to the system clipboard.
///
/// On X11 the contents are only guaranteed to stay available while the
/// process is alive.
pub fn copy_to_clipboard(text: &str) -> Result<(), TreeError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
