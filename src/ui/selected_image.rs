/// Preview of the image the session currently displays.
use std::path::Path;

use iced::widget::image::{Handle, Image};
use iced::{ContentFit, Element, Length};

pub fn view<'a, Message: 'a>(path: &Path) -> Element<'a, Message> {
    Image::new(Handle::from_path(path))
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Contain)
        .into()
}
