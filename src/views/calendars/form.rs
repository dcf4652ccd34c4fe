use iced::widget::{button, column, pick_list, row, text, text_input};
use iced::Length;

use crate::calendar::{CalendarDate, EventType, NewEvent};

use super::Message;

/// Entered values survive a rejected create so the user can retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub title: String,
    pub date: String,
    pub kind: EventType,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            title: String::new(),
            date: String::new(),
            kind: EventType::Event,
        }
    }
}

impl Form {
    pub fn to_new_event(&self) -> Option<NewEvent> {
        let title = self.title.trim();

        if title.is_empty() || self.kind == EventType::Unknown {
            return None;
        }

        Some(NewEvent {
            title: title.to_string(),
            date: self.date.trim().parse::<CalendarDate>().ok()?,
            kind: self.kind,
        })
    }

    pub fn view(&self) -> iced::Element<Message> {
        let submit = self.to_new_event().map(|_| Message::Submit);

        column![
            text("New Agenda").size(20),
            text_input("Title", &self.title)
                .on_input(Message::TitleChanged)
                .on_submit(Message::Submit)
                .padding(8),
            row![
                text_input("YYYY-MM-DD", &self.date)
                    .on_input(Message::DateChanged)
                    .padding(8)
                    .width(Length::Fill),
                pick_list(EventType::ALL, Some(self.kind), Message::KindSelected)
                    .padding(8),
            ]
            .spacing(8),
            button(text("+ Add event"))
                .on_press_maybe(submit)
                .padding(8),
        ]
        .spacing(8)
        .into()
    }
}
