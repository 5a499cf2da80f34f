/// Editor tool controls: the two ways to acquire a replacement image.
use iced::widget::{button, row};
use iced::Element;

pub fn view<'a, Message: Clone + 'a>(
    on_select: Message,
    on_capture: Message,
) -> Element<'a, Message> {
    row![
        button("Select another").on_press(on_select).padding(10),
        button("Capture another")
            .style(button::secondary)
            .on_press(on_capture)
            .padding(10),
    ]
    .spacing(15)
    .into()
}
