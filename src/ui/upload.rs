/// Upload pane
///
/// Preview of the current selection, the Select/Change Image buttons that
/// open the native file picker, the Analyze Image trigger, and the inline
/// error banner.

use iced::widget::{button, column, container, image, text};
use iced::{Alignment, Element, Length};

use crate::state::session::Session;
use crate::Message;

/// Build the picker half of the screen from the current session
pub fn upload_pane(session: &Session) -> Element<'_, Message> {
    let picker: Element<Message> = match session.image() {
        Some(selected) => column![
            image(selected.preview.clone()).height(Length::Fixed(400.0)),
            text(&selected.file_name).size(14),
            button("Change Image").on_press(Message::PickImage).padding(10),
        ]
        .spacing(10)
        .align_x(Alignment::Center)
        .into(),
        None => column![
            text("Click to upload an image").size(20),
            text("PNG, JPG, GIF up to 10MB").size(14),
            button("Select Image").on_press(Message::PickImage).padding(10),
        ]
        .spacing(10)
        .align_x(Alignment::Center)
        .into(),
    };

    let mut content = column![picker].spacing(20).align_x(Alignment::Center);

    // The analyze trigger appears once a file is selected and stays
    // disabled while a request is in flight
    if session.image().is_some() {
        let label = if session.is_loading() {
            "Analyzing..."
        } else {
            "Analyze Image"
        };

        content = content.push(
            button(text(label).size(18))
                .on_press_maybe(session.can_analyze().then_some(Message::Analyze))
                .padding(12),
        );
    }

    if let Some(message) = session.error_message() {
        content = content.push(text(message).style(text::danger));
    }

    container(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(20)
        .into()
}
