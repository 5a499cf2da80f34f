use iced::widget::{button, column, container, text, Column};
use iced::{window, Alignment, Element, Length, Subscription, Task, Theme};
use std::path::PathBuf;
use std::sync::Arc;

mod config;
mod diagnostics;
mod picker;
mod state;
mod ui;

use config::Config;
use diagnostics::{DiagnosticSink, TracingSink};
use picker::AcquisitionKind;
use ui::editor::{self, EditorScreen, ExitAction};

/// Command line options.
#[derive(Debug, Clone)]
struct Flags {
    /// Image to open directly in the editor.
    image: Option<PathBuf>,
    /// Override for the configured camera capture command.
    capture_command: Option<String>,
}

impl Flags {
    fn from_env() -> Self {
        let mut args = pico_args::Arguments::from_env();
        let capture_command = args.opt_value_from_str("--capture-cmd").unwrap_or(None);
        let image = args.finish().into_iter().next().map(PathBuf::from);

        Flags {
            image,
            capture_command,
        }
    }
}

/// Which screen is currently mounted.
enum Screen {
    /// Entry screen with the "Open Image" action. Unguarded: close requests
    /// pass straight through.
    Launch,
    /// The editor session, which gates navigation away behind a discard
    /// confirmation. Dropped together with the screen, so its interception
    /// can never outlive it.
    Editor(EditorScreen),
}

/// Main application state
struct ImageEditor {
    screen: Screen,
    config: Config,
    sink: Arc<dyn DiagnosticSink>,
    /// Status message shown on the launch screen
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked "Open Image" on the launch screen
    OpenImage,
    /// The launch-screen picker resolved
    ImageOpened(Option<PathBuf>),
    /// The host asked to close the window
    CloseRequested(window::Id),
    /// Editor screen messages
    Editor(editor::Message),
}

impl ImageEditor {
    /// Create a new instance of the application
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut config = Config::load();
        if let Some(command) = flags.capture_command {
            config.capture_command = Some(command);
        }

        let sink: Arc<dyn DiagnosticSink> = Arc::new(TracingSink);

        let screen = match flags.image {
            Some(path) => {
                tracing::info!(image = %path.display(), "opening editor");
                Screen::Editor(EditorScreen::new(path, Arc::clone(&sink)))
            }
            None => Screen::Launch,
        };

        (
            ImageEditor {
                screen,
                config,
                sink,
                status: "Open an image to start editing.".to_string(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenImage => {
                self.status = "Choosing an image...".to_string();
                Task::perform(pick_image_to_open(), Message::ImageOpened)
            }
            Message::ImageOpened(Some(path)) => {
                tracing::info!(image = %path.display(), "opening editor");
                self.screen = Screen::Editor(EditorScreen::new(path, Arc::clone(&self.sink)));
                Task::none()
            }
            Message::ImageOpened(None) => {
                self.status = "No image selected.".to_string();
                Task::none()
            }
            Message::CloseRequested(id) => {
                let event = match &mut self.screen {
                    Screen::Editor(screen) => {
                        screen.update(editor::Message::CloseRequested(id))
                    }
                    Screen::Launch => return window::close(id),
                };
                self.apply_editor_event(event)
            }
            Message::Editor(message) => {
                let event = match &mut self.screen {
                    Screen::Editor(screen) => screen.update(message),
                    // A stale editor message after the screen was unmounted.
                    Screen::Launch => editor::Event::None,
                };
                self.apply_editor_event(event)
            }
        }
    }

    /// Perform the side effects an editor screen asked for.
    fn apply_editor_event(&mut self, event: editor::Event) -> Task<Message> {
        match event {
            editor::Event::None => Task::none(),
            editor::Event::PickFromDevice => Task::perform(
                picker::select_and_crop_from_device(picker::crop::crop_cache_dir()),
                |result| Message::Editor(editor::Message::Acquired(AcquisitionKind::Device, result)),
            ),
            editor::Event::CaptureFromCamera => {
                let command = self.config.capture_command.clone();
                Task::perform(
                    picker::select_and_crop_from_camera(command, picker::crop::crop_cache_dir()),
                    |result| {
                        Message::Editor(editor::Message::Acquired(AcquisitionKind::Camera, result))
                    },
                )
            }
            // The dialog is already hidden by the time the screen emits an
            // exit; dispatch the deferred transition exactly once.
            editor::Event::Exit(ExitAction::BackToLaunch) => {
                self.screen = Screen::Launch;
                self.status = "Changes discarded.".to_string();
                Task::none()
            }
            editor::Event::Exit(ExitAction::CloseWindow(id)) => window::close(id),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match &self.screen {
            Screen::Launch => self.view_launch(),
            Screen::Editor(screen) => screen.view().map(Message::Editor),
        }
    }

    fn view_launch(&self) -> Element<Message> {
        let content: Column<Message> = column![
            text("Image Editor").size(48),
            button("Open Image").on_press(Message::OpenImage).padding(10),
            text(&self.status).size(16),
        ]
        .spacing(20)
        .padding(40)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Close requests must reach `update` so the editor can defer them;
    /// the runtime's default close-on-request is disabled in `main`.
    fn subscription(&self) -> Subscription<Message> {
        window::close_requests().map(Message::CloseRequested)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    init_tracing();
    let flags = Flags::from_env();

    iced::application("Image Editor", ImageEditor::update, ImageEditor::view)
        .subscription(ImageEditor::subscription)
        .theme(ImageEditor::theme)
        .window(window::Settings {
            exit_on_close_request: false,
            ..window::Settings::default()
        })
        .centered()
        .run_with(move || ImageEditor::new(flags))
}

/// Structured logging; filter via RUST_LOG, defaulting to info for this crate.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("image_editor=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Launch-screen picker: choose which image to edit.
async fn pick_image_to_open() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Open Image")
        .add_filter("Images", picker::IMAGE_EXTENSIONS)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}
