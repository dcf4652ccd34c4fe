use iced::widget::{button, column, container, row, text, Column, Row};
use iced::{Alignment, Border, Color, Font, Length};
use iced_font_awesome::fa_icon_solid;

use super::Message;
use crate::calendar::{CalendarState, Event, EventType, GridCell, MonthAnchor, WEEKDAY_LABELS};

pub fn view(state: &CalendarState) -> iced::Element<Message> {
    // a pending load must not look like an empty month
    if state.store().is_loading() {
        return container(text("Loading events…").size(20))
            .center_x(Length::Fill)
            .height(320)
            .align_y(Alignment::Center)
            .into();
    }

    let grid = state.grid();
    let selection = state.selection();

    let days = Row::from_iter(WEEKDAY_LABELS.into_iter().map(view_day));

    let rows = grid.rows().map(|cells| {
        Row::from_iter(cells.iter().map(|cell| {
            view_cell(*cell, state.events_on(cell.date), selection.is_selected(cell.date))
        }))
        .spacing(2)
        .into()
    });

    column![days].extend(rows).spacing(2).into()
}

pub fn view_controls<'a>(anchor: MonthAnchor) -> iced::Element<'a, Message> {
    row![
        button(fa_icon_solid("caret-left").size(28.0))
            .style(style_month_button)
            .on_press(Message::ShiftMonth(-1)),
        text(anchor.label())
            .center()
            .width(Length::Fill)
            .size(24.0)
            .font(Font {
                weight: iced::font::Weight::Bold,
                ..Font::default()
            })
            .wrapping(text::Wrapping::None),
        button(fa_icon_solid("caret-right").size(28.0))
            .style(style_month_button)
            .on_press(Message::ShiftMonth(1)),
        button(fa_icon_solid("rotate-right").size(20.0))
            .style(style_month_button)
            .on_press(Message::Reload),
    ]
    .spacing(8)
    .height(44)
    .align_y(Alignment::Center)
    .into()
}

pub fn view_legend<'a>() -> iced::Element<'a, Message> {
    Row::from_iter(EventType::ALL.into_iter().map(|kind| {
        row![
            fa_icon_solid("circle").color(type_color(kind)).size(10.0),
            text(kind.label()).size(14),
        ]
        .spacing(4)
        .align_y(Alignment::Center)
        .into()
    }))
    .spacing(16)
    .into()
}

pub fn type_color(kind: EventType) -> Color {
    match kind {
        EventType::Schedule => Color::from_rgb8(0x8e, 0x6c, 0xef),
        EventType::Event => Color::from_rgb8(0xf2, 0x8c, 0x28),
        EventType::Meeting => Color::from_rgb8(0x36, 0x8b, 0xd6),
        EventType::Setup => Color::from_rgb8(0x3a, 0xa6, 0x5b),
        EventType::Unknown => Color::from_rgb8(0x99, 0x99, 0x99),
    }
}

fn view_cell(cell: GridCell, events: &[Event], selected: bool) -> iced::Element<Message> {
    let day = text(cell.date.day().to_string())
        .size(14)
        .style(match cell.in_current_month {
            true => style_text_on_month,
            false => style_text_off_month,
        });

    let pills = Column::from_iter(events.iter().map(view_pill)).spacing(2);

    button(column![day, pills].spacing(4))
        .width(Length::Fill)
        .height(96)
        .padding(4)
        .style(match (cell.is_today, selected) {
            (_, true) => style_selected,
            (true, _) => style_today,
            _ => style_normal,
        })
        .on_press(Message::SelectDate(cell.date))
        .into()
}

fn view_pill(event: &Event) -> iced::Element<Message> {
    row![
        fa_icon_solid("circle").color(type_color(event.kind)).size(8.0),
        text(&event.title).size(12).wrapping(text::Wrapping::None),
    ]
    .spacing(4)
    .align_y(Alignment::Center)
    .into()
}

fn view_day<'a>(label: &'static str) -> iced::Element<'a, Message> {
    text(label)
        .size(16.0)
        .font(Font {
            weight: iced::font::Weight::Semibold,
            ..Font::default()
        })
        .center()
        .width(Length::Fill)
        .into()
}

fn style_month_button(theme: &iced::Theme, _: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    button::Style {
        text_color: palette.primary.strong.text,
        background: Some(palette.primary.strong.color.into()),
        border: Border::default().rounded(3),
        ..Default::default()
    }
}

fn style_text_on_month(theme: &iced::Theme) -> text::Style {
    let palette = theme.extended_palette();

    text::Style {
        color: palette.secondary.base.text.into(),
    }
}

fn style_text_off_month(theme: &iced::Theme) -> text::Style {
    let palette = theme.extended_palette();

    text::Style {
        color: palette.secondary.strong.color.into(),
    }
}

fn style_normal(theme: &iced::Theme, _: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    button::Style {
        background: None,
        text_color: palette.background.base.text,
        border: Border {
            width: 1.0,
            color: palette.background.strong.color,
            ..Border::default()
        },
        ..Default::default()
    }
}

fn style_selected(theme: &iced::Theme, _: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    button::Style {
        background: Some(palette.primary.strong.color.into()),
        text_color: palette.primary.strong.text,
        border: Border {
            width: 1.0,
            color: palette.background.strong.color,
            ..Border::default()
        },
        ..Default::default()
    }
}

fn style_today(theme: &iced::Theme, _: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    button::Style {
        background: Some(palette.primary.weak.color.into()),
        text_color: palette.primary.weak.text,
        border: Border {
            width: 1.0,
            color: palette.background.strong.color,
            ..Border::default()
        },
        ..Default::default()
    }
}
