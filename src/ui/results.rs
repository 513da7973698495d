/// Results pane
///
/// The tab bar over the analysis result, the active tab's content, and its
/// copy button with the transient "copied" acknowledgment.

use iced::widget::{button, column, container, row, text};
use iced::{Element, Font, Length};

use crate::state::data::AnalysisResult;
use crate::state::presenter::{render_content, Presenter, Tab};
use crate::Message;

/// Build the tabbed result view
pub fn results_pane<'a>(
    result: &'a AnalysisResult,
    presenter: &'a Presenter,
) -> Element<'a, Message> {
    let mut tab_bar = row![].spacing(5);

    for tab in Tab::ALL {
        // The detailed tab is only offered when the result carries one
        if !tab.is_available(result) {
            continue;
        }

        let tab_button = button(text(tab.label()).size(14))
            .on_press(Message::TabSelected(tab))
            .padding(8);

        let tab_button = if presenter.active_tab() == tab {
            tab_button.style(button::primary)
        } else {
            tab_button.style(button::secondary)
        };

        tab_bar = tab_bar.push(tab_button);
    }

    let active = presenter.active_tab();
    let body = render_content(active, result).unwrap_or_default();

    let content = if active == Tab::Json {
        text(body).size(14).font(Font::MONOSPACE)
    } else {
        text(body).size(15)
    };

    let copy_button = if presenter.is_copied(active) {
        button(text("✓ Copied!").size(14))
            .style(button::success)
            .on_press(Message::CopyPressed(active))
            .padding(8)
    } else {
        button(text(active.copy_label()).size(14))
            .on_press(Message::CopyPressed(active))
            .padding(8)
    };

    let panel = column![
        text(active.title()).size(18),
        content,
        copy_button,
    ]
    .spacing(12);

    column![tab_bar, container(panel).padding(15)]
        .spacing(15)
        .width(Length::Fill)
        .into()
}
