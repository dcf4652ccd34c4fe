use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Border};

use crate::calendar::store::Notice;

use super::Message;

pub fn view(notices: &[Notice]) -> iced::Element<Message> {
    column(notices.iter().enumerate().map(|(idx, notice)| {
        container(
            row![
                text(notice.to_string()),
                horizontal_space(),
                button(text("Dismiss")).on_press(Message::DismissNotice(idx)),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        )
        .padding(8)
        .style(match notice.is_error() {
            true => style_error,
            false => style_info,
        })
        .into()
    }))
    .spacing(8)
    .into()
}

fn style_error(theme: &iced::Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.danger.weak.color.into()),
        text_color: Some(palette.danger.weak.text),
        border: Border::default().rounded(6),
        ..Default::default()
    }
}

fn style_info(theme: &iced::Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.secondary.weak.color.into()),
        text_color: Some(palette.secondary.weak.text),
        border: Border::default().rounded(6),
        ..Default::default()
    }
}
