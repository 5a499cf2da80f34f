/// UI module
///
/// One submodule per visual component of the editor screen:
/// - Header with back navigation (header.rs)
/// - Editor surface banner (background.rs)
/// - Selected-image preview (selected_image.rs)
/// - Replacement-image tool controls (tools.rs)
/// - Discard confirmation dialog (confirm_modal.rs)
/// - The screen that composes them and owns the session (editor.rs)

pub mod background;
pub mod confirm_modal;
pub mod editor;
pub mod header;
pub mod selected_image;
pub mod tools;
