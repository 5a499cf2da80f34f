/// Editor surface banner shown between the header and the preview.
use iced::widget::{container, text};
use iced::{border, Element, Length, Theme};

pub fn view<'a, Message: 'a>() -> Element<'a, Message> {
    container(text("Replace the image below, then go back when you are done.").size(14))
        .width(Length::Fill)
        .padding(10)
        .style(surface)
        .into()
}

fn surface(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: border::rounded(7),
        ..container::Style::default()
    }
}
