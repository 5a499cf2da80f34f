/// Editor header: back navigation plus the screen title.
use iced::widget::{button, row, text};
use iced::{Alignment, Element};

pub fn view<'a, Message: Clone + 'a>(title: &'a str, on_back: Message) -> Element<'a, Message> {
    row![
        button(text("Back")).style(button::secondary).on_press(on_back),
        text(title).size(24),
    ]
    .spacing(15)
    .align_y(Alignment::Center)
    .into()
}
