use iced::widget::{button, column, container, horizontal_space, row, scrollable, text, Column};
use iced::{Alignment, Length};
use iced_font_awesome::fa_icon_solid;

use crate::calendar::{Event, Selection};

use super::month::type_color;
use super::Message;

pub fn view(selection: &Selection) -> iced::Element<Message> {
    let Some(date) = selection.date() else {
        return container(text("Select a date to see details").style(style_muted))
            .center_x(Length::Fill)
            .padding(16)
            .into();
    };
    let events = selection.events();

    let entries: iced::Element<Message> = if events.is_empty() {
        text("No events").style(style_muted).into()
    } else {
        Column::from_iter(events.iter().map(view_event)).spacing(12).into()
    };

    column![
        text("Schedule Details").size(20),
        text(date.long_format()).size(16),
        scrollable(entries).height(Length::Fill),
    ]
    .spacing(8)
    .height(360)
    .into()
}

fn view_event(event: &Event) -> iced::Element<Message> {
    let color = type_color(event.kind);

    let header = row![
        container(text(event.kind.label()).size(12))
            .padding([2, 8])
            .style(move |_| style_badge(color)),
        horizontal_space(),
        button(fa_icon_solid("trash").size(14.0))
            .on_press(Message::Delete(event.id.clone()))
            .padding(4),
    ]
    .align_y(Alignment::Center);

    let details = [
        event.location.clone(),
        event.contact_name.clone(),
        event.contact_line(),
    ];

    column![header, text(&event.title).size(18)]
        .extend(
            details
                .into_iter()
                .flatten()
                .map(|line| text(line).size(14).style(style_muted).into()),
        )
        .spacing(4)
        .into()
}

fn style_badge(color: iced::Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(color.scale_alpha(0.25))),
        text_color: Some(color),
        border: iced::border::rounded(8),
        ..Default::default()
    }
}

fn style_muted(theme: &iced::Theme) -> text::Style {
    let palette = theme.palette();

    text::Style {
        color: Some(palette.text.scale_alpha(0.6)),
    }
}
