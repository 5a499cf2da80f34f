/// Edit session state machine
///
/// One `EditSession` exists per mounted editor screen. It tracks the image
/// being displayed and gates navigation away from the screen behind a
/// discard confirmation: the first exit attempt is deferred, carried as the
/// payload of the `ConfirmingExit` phase, and replayed exactly once if the
/// user confirms the discard.
///
/// The pending exit action lives inside the phase variant, so the dialog is
/// visible exactly when a deferred action exists. There is no separate flag
/// to fall out of sync.
use std::path::{Path, PathBuf};

/// Outcome of routing an exit attempt through the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interception<A> {
    /// The attempt was deferred; the confirmation dialog should be shown.
    Deferred,
    /// The session is no longer guarding; the host should perform the
    /// transition right away.
    PassThrough(A),
}

/// The two phases of a session's exit-confirmation flow.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase<A> {
    /// Normal editing; no exit attempt is pending.
    Editing,
    /// An exit attempt was deferred and awaits the user's decision.
    ConfirmingExit { pending: A },
}

/// State for one active editing screen instance.
///
/// Generic over the action type `A` so the state machine stays independent
/// of the host that dispatches the deferred transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession<A> {
    /// The image the screen was opened with; immutable for the session.
    original_image: PathBuf,
    /// The last successfully acquired replacement, if any.
    selected_image: Option<PathBuf>,
    /// Current phase of the exit-confirmation flow.
    phase: Phase<A>,
    /// Whether exit attempts are still being deferred. Cleared when a
    /// discard is confirmed so the replayed transition is not re-captured.
    intercepting: bool,
}

impl<A> EditSession<A> {
    /// Create a session for the given image. Interception starts enabled.
    pub fn new(original_image: PathBuf) -> Self {
        Self {
            original_image,
            selected_image: None,
            phase: Phase::Editing,
            intercepting: true,
        }
    }

    /// The image the screen was opened with.
    pub fn original_image(&self) -> &Path {
        &self.original_image
    }

    /// The replacement image, if one was successfully acquired.
    pub fn selected_image(&self) -> Option<&Path> {
        self.selected_image.as_deref()
    }

    /// The image the screen should display right now: the replacement when
    /// one exists, the original otherwise.
    pub fn displayed_image(&self) -> &Path {
        self.selected_image.as_deref().unwrap_or(&self.original_image)
    }

    /// Whether the discard confirmation dialog should be shown.
    pub fn confirm_dialog_visible(&self) -> bool {
        matches!(self.phase, Phase::ConfirmingExit { .. })
    }

    /// The deferred exit action, present exactly while the dialog is shown.
    pub fn pending_exit(&self) -> Option<&A> {
        match &self.phase {
            Phase::ConfirmingExit { pending } => Some(pending),
            Phase::Editing => None,
        }
    }

    /// Record a successfully acquired replacement image.
    ///
    /// Leaves the exit-confirmation flow untouched.
    pub fn replace_image(&mut self, path: PathBuf) {
        self.selected_image = Some(path);
    }

    /// Route a navigation-away attempt through the session.
    ///
    /// While the session is guarding, the attempt is deferred and stored for
    /// a later replay; a second attempt before the dialog is resolved
    /// overwrites the first, so at most one action is pending. After a
    /// confirmed discard the attempt passes straight through.
    pub fn intercept_exit(&mut self, action: A) -> Interception<A> {
        if !self.intercepting {
            return Interception::PassThrough(action);
        }

        self.phase = Phase::ConfirmingExit { pending: action };
        Interception::Deferred
    }

    /// The user chose to keep editing: hide the dialog and drop the pending
    /// action without replaying it.
    pub fn cancel_exit(&mut self) {
        self.phase = Phase::Editing;
    }

    /// The user confirmed the discard.
    ///
    /// Disables interception and hides the dialog before handing the
    /// deferred action back, so the caller dispatches it against a session
    /// that no longer guards and no longer shows the dialog. Returns `None`
    /// if no exit was pending.
    pub fn confirm_exit(&mut self) -> Option<A> {
        match std::mem::replace(&mut self.phase, Phase::Editing) {
            Phase::ConfirmingExit { pending } => {
                self.intercepting = false;
                Some(pending)
            }
            Phase::Editing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> EditSession<&'static str> {
        EditSession::new(PathBuf::from("file://a.jpg"))
    }

    /// The dialog must be visible exactly when an action is pending.
    fn invariant_holds(session: &EditSession<&str>) -> bool {
        session.confirm_dialog_visible() == session.pending_exit().is_some()
    }

    #[test]
    fn test_new_session_displays_original() {
        let session = session();

        assert_eq!(session.displayed_image(), Path::new("file://a.jpg"));
        assert_eq!(session.selected_image(), None);
        assert!(!session.confirm_dialog_visible());
        assert!(invariant_holds(&session));
    }

    #[test]
    fn test_replacement_updates_displayed_image() {
        let mut session = session();

        session.replace_image(PathBuf::from("/tmp/crops/b.jpg"));

        assert_eq!(session.displayed_image(), Path::new("/tmp/crops/b.jpg"));
        assert_eq!(session.original_image(), Path::new("file://a.jpg"));
        assert!(!session.confirm_dialog_visible());
    }

    #[test]
    fn test_selected_image_tracks_latest_success() {
        let mut session = session();

        session.replace_image(PathBuf::from("/tmp/one.jpg"));
        session.replace_image(PathBuf::from("/tmp/two.jpg"));

        assert_eq!(session.selected_image(), Some(Path::new("/tmp/two.jpg")));
    }

    #[test]
    fn test_exit_attempt_is_deferred_and_shows_dialog() {
        let mut session = session();

        let outcome = session.intercept_exit("back");

        assert_eq!(outcome, Interception::Deferred);
        assert!(session.confirm_dialog_visible());
        assert_eq!(session.pending_exit(), Some(&"back"));
        assert!(invariant_holds(&session));
        // The displayed image is untouched by the interception.
        assert_eq!(session.displayed_image(), Path::new("file://a.jpg"));
    }

    #[test]
    fn test_cancel_returns_to_editing_without_replay() {
        let mut session = session();
        session.replace_image(PathBuf::from("/tmp/crops/b.jpg"));
        session.intercept_exit("back");

        session.cancel_exit();

        assert!(!session.confirm_dialog_visible());
        assert_eq!(session.pending_exit(), None);
        assert!(invariant_holds(&session));
        // The session keeps its current replacement.
        assert_eq!(session.selected_image(), Some(Path::new("/tmp/crops/b.jpg")));
        // And still guards the next attempt.
        assert_eq!(session.intercept_exit("back"), Interception::Deferred);
    }

    #[test]
    fn test_confirm_hands_back_the_action_exactly_once() {
        let mut session = session();
        session.intercept_exit("back");

        assert_eq!(session.confirm_exit(), Some("back"));
        assert!(!session.confirm_dialog_visible());
        assert!(invariant_holds(&session));

        // A second confirmation has nothing left to replay.
        assert_eq!(session.confirm_exit(), None);
    }

    #[test]
    fn test_exits_pass_through_after_a_confirmed_discard() {
        let mut session = session();
        session.intercept_exit("back");
        session.confirm_exit();

        // The replayed transition (and any later attempt) is not re-captured.
        assert_eq!(session.intercept_exit("back"), Interception::PassThrough("back"));
        assert!(!session.confirm_dialog_visible());
        assert!(invariant_holds(&session));
    }

    #[test]
    fn test_second_attempt_overwrites_the_pending_action() {
        let mut session = session();

        session.intercept_exit("first");
        session.intercept_exit("second");

        assert_eq!(session.pending_exit(), Some(&"second"));
        assert_eq!(session.confirm_exit(), Some("second"));
    }

    #[test]
    fn test_confirm_without_pending_exit_is_a_no_op() {
        let mut session = session();

        assert_eq!(session.confirm_exit(), None);
        // Interception stays enabled; nothing was discarded.
        assert_eq!(session.intercept_exit("back"), Interception::Deferred);
    }
}
