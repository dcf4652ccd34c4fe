use std::sync::Arc;

use crate::calendar::api::Client;
use crate::calendar::MonthAnchor;
use crate::config;
use crate::views;

pub struct App {
    calendar: views::Calendar,
}

#[derive(Debug, Clone)]
pub enum Message {
    Calendar(views::calendars::Message),
}

impl App {
    pub fn new(api: config::Api, anchor: MonthAnchor) -> (Self, iced::Task<Message>) {
        log::info!("Using event api at {}, opening {}", api.url, anchor.label());

        let client = Client::new(api.url);
        let (calendar, task) = views::Calendar::new(Arc::new(client), anchor);

        (Self { calendar }, task.map(Message::Calendar))
    }

    pub fn subscription(&self) -> iced::Subscription<Message> {
        self.calendar.subscription().map(Message::Calendar)
    }

    pub fn update(&mut self, message: Message) -> iced::Task<Message> {
        match message {
            Message::Calendar(calendar_message) => self
                .calendar
                .update(calendar_message)
                .map(Message::Calendar),
        }
    }

    pub fn view(&self) -> iced::Element<Message> {
        self.calendar.view().map(Message::Calendar)
    }
}
