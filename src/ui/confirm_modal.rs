/// Discard confirmation dialog
///
/// A stateless modal prompt: visibility, texts, and the messages produced by
/// its two buttons are all supplied by the caller, and the component never
/// changes its own visibility. A button without a message is inert.
use iced::widget::{button, center, column, container, opaque, row, stack, text};
use iced::{Element, Theme};

pub struct ConfirmModal<'a, Message> {
    visible: bool,
    title: &'a str,
    message: &'a str,
    on_cancel: Option<Message>,
    on_discard: Option<Message>,
}

impl<'a, Message: Clone + 'a> ConfirmModal<'a, Message> {
    /// Create a hidden dialog with the given texts.
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self {
            visible: false,
            title,
            message,
            on_cancel: None,
            on_discard: None,
        }
    }

    /// Control whether the dialog is shown. Defaults to hidden.
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Message produced when "Cancel" is pressed.
    pub fn on_cancel(mut self, message: Message) -> Self {
        self.on_cancel = Some(message);
        self
    }

    /// Message produced when "Discard" is pressed.
    pub fn on_discard(mut self, message: Message) -> Self {
        self.on_discard = Some(message);
        self
    }

    /// Wrap `base` with the dialog overlay.
    ///
    /// When hidden, `base` is returned untouched and keeps receiving input.
    /// When visible, a dimmed backdrop sits on top of `base` and swallows
    /// every event that is not aimed at the dialog card.
    pub fn view(self, base: Element<'a, Message>) -> Element<'a, Message> {
        if !self.visible {
            return base;
        }

        let mut cancel = button(text("Cancel")).style(button::secondary).padding(10);
        if let Some(message) = self.on_cancel {
            cancel = cancel.on_press(message);
        }

        let mut discard = button(text("Discard")).style(button::danger).padding(10);
        if let Some(message) = self.on_discard {
            discard = discard.on_press(message);
        }

        let card = container(
            column![
                text(self.title).size(18),
                text(self.message),
                row![cancel, discard].spacing(15),
            ]
            .spacing(10),
        )
        .width(340)
        .padding(15)
        .style(container::rounded_box);

        stack![base, opaque(center(opaque(card)).style(backdrop))].into()
    }
}

fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(
            iced::Color {
                a: 0.5,
                ..iced::Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    }
}
