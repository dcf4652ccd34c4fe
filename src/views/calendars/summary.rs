use iced::widget::{column, container, text, Row};
use iced::{Border, Length};

use crate::calendar::TypeCounts;

use super::Message;

pub fn view<'a>(counts: TypeCounts) -> iced::Element<'a, Message> {
    let chips = counts.chips().into_iter().map(|(label, count)| {
        container(column![text(count.to_string()).size(22), text(label).size(14)].spacing(2))
            .padding([8, 16])
            .style(style_chip)
            .into()
    });

    Row::from_iter(chips).spacing(12).width(Length::Fill).into()
}

fn style_chip(theme: &iced::Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border::default().rounded(12),
        ..Default::default()
    }
}
