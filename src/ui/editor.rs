/// The editor screen
///
/// Composes the header, the editor surface banner, the selected-image
/// preview, and the tool controls, and owns the edit session that gates
/// navigation away from the screen behind a discard confirmation.
///
/// The screen follows a "state down, messages up" shape: `update` mutates
/// the session and hands side effects back to the application as [`Event`]s,
/// so the whole exit-confirmation flow is testable without a renderer.
use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::{column, container};
use iced::{window, Element, Length};

use crate::diagnostics::DiagnosticSink;
use crate::picker::{AcquireError, AcquisitionKind};
use crate::state::session::{EditSession, Interception};
use crate::ui::{background, confirm_modal::ConfirmModal, header, selected_image, tools};

const DISCARD_TITLE: &str = "Are you sure?";
const DISCARD_MESSAGE: &str = "Leaving now will discard all your changes to this image.";

/// A deferred navigation transition, replayable exactly once on discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitAction {
    /// Return to the launch screen.
    BackToLaunch,
    /// Close the window that requested it.
    CloseWindow(window::Id),
}

/// Messages handled by the editor screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// The header's back button was pressed.
    BackPressed,
    /// The host asked to close the window while this screen is mounted.
    CloseRequested(window::Id),
    /// The user wants to pick a replacement image from disk.
    SelectAnother,
    /// The user wants to capture a replacement image with the camera.
    CaptureAnother,
    /// An acquisition flow resolved.
    Acquired(AcquisitionKind, Result<PathBuf, AcquireError>),
    /// "Cancel" was pressed in the discard dialog.
    CancelExit,
    /// "Discard" was pressed in the discard dialog.
    ConfirmExit,
}

/// Side effects the parent application must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Run the device-selection flow and report back with `Acquired`.
    PickFromDevice,
    /// Run the camera-capture flow and report back with `Acquired`.
    CaptureFromCamera,
    /// Perform this exit transition now. The dialog is already hidden and
    /// interception is already disabled when this event is emitted.
    Exit(ExitAction),
}

pub struct EditorScreen {
    session: EditSession<ExitAction>,
    sink: Arc<dyn DiagnosticSink>,
}

impl EditorScreen {
    /// Mount the screen for the given image.
    pub fn new(original_image: PathBuf, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            session: EditSession::new(original_image),
            sink,
        }
    }

    /// Update the session and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::BackPressed => self.route_exit(ExitAction::BackToLaunch),
            Message::CloseRequested(id) => self.route_exit(ExitAction::CloseWindow(id)),
            Message::SelectAnother => Event::PickFromDevice,
            Message::CaptureAnother => Event::CaptureFromCamera,
            Message::Acquired(_, Ok(path)) => {
                self.session.replace_image(path);
                Event::None
            }
            Message::Acquired(kind, Err(error)) => {
                // Recovered locally: the session and the dialog are untouched.
                self.sink.acquisition_failed(kind, &error);
                Event::None
            }
            Message::CancelExit => {
                self.session.cancel_exit();
                Event::None
            }
            Message::ConfirmExit => match self.session.confirm_exit() {
                Some(action) => Event::Exit(action),
                None => Event::None,
            },
        }
    }

    fn route_exit(&mut self, action: ExitAction) -> Event {
        match self.session.intercept_exit(action) {
            Interception::Deferred => Event::None,
            Interception::PassThrough(action) => Event::Exit(action),
        }
    }

    /// Build the screen, with the discard dialog stacked on top when an
    /// exit attempt is pending.
    pub fn view(&self) -> Element<Message> {
        let base = column![
            header::view("Image Editor", Message::BackPressed),
            background::view(),
            container(selected_image::view(self.session.displayed_image()))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
            tools::view(Message::SelectAnother, Message::CaptureAnother),
        ]
        .spacing(15)
        .padding(15);

        ConfirmModal::new(DISCARD_TITLE, DISCARD_MESSAGE)
            .visible(self.session.confirm_dialog_visible())
            .on_cancel(Message::CancelExit)
            .on_discard(Message::ConfirmExit)
            .view(base.into())
    }
}
