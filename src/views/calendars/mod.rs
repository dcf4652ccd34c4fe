use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::NaiveDateTime;
use iced::widget::{column, row};
use iced::Length;

use crate::calendar::api::{self, EventsApi};
use crate::calendar::store::Notice;
use crate::calendar::{CalendarDate, CalendarState, Event, EventType, MonthAnchor};

mod day;
mod form;
mod month;
mod notice;
mod summary;

use form::Form;

pub struct Calendar {
    state: CalendarState,
    /// Bumped on every (re)mount; responses from older sessions are dropped
    session: u64,
    form: Form,
    notices: Vec<Notice>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Reload,
    Loaded(u64, Result<Vec<Event>, api::Error>),
    NextDay(Instant),
    ShiftMonth(i32),
    SelectDate(CalendarDate),
    TitleChanged(String),
    DateChanged(String),
    KindSelected(EventType),
    Submit,
    Created(u64, Result<Event, api::Error>),
    Delete(String),
    Deleted(u64, String, Result<(), api::Error>),
    DismissNotice(usize),
}

impl Calendar {
    pub fn new(api: Arc<dyn EventsApi>, anchor: MonthAnchor) -> (Self, iced::Task<Message>) {
        let mut calendar = Self {
            state: CalendarState::new(api, anchor, CalendarDate::today()),
            session: 0,
            form: Form::default(),
            notices: Vec::new(),
        };

        let task = calendar.update(Message::Reload);

        (calendar, task)
    }

    pub fn subscription(&self) -> iced::Subscription<Message> {
        iced::time::every(until_next_day(chrono::Local::now().naive_local())).map(Message::NextDay)
    }

    pub fn view(&self) -> iced::Element<Message> {
        column![
            summary::view(self.state.store().counts()),
            month::view_controls(self.state.anchor()),
            row![
                column![month::view(&self.state), month::view_legend()]
                    .spacing(16)
                    .width(Length::FillPortion(3)),
                column![day::view(self.state.selection()), self.form.view()]
                    .spacing(16)
                    .width(Length::FillPortion(2)),
            ]
            .spacing(16),
            notice::view(&self.notices),
        ]
        .padding(16)
        .spacing(16)
        .into()
    }

    pub fn update(&mut self, message: Message) -> iced::Task<Message> {
        match message {
            Message::Reload => {
                self.session += 1;
                self.state.reset();
                self.notices.clear();

                return self.load();
            }
            Message::Loaded(session, result) => {
                if self.is_stale(session) {
                    return iced::Task::none();
                }

                self.state.apply_load(result);
            }
            Message::NextDay(_) => {
                self.state.set_today(CalendarDate::today());
            }
            Message::ShiftMonth(months) => {
                self.state.shift_month(months);
            }
            Message::SelectDate(date) => {
                self.state.select(date);

                if self.form.date.trim().is_empty() {
                    self.form.date = date.to_string();
                }
            }
            Message::TitleChanged(title) => self.form.title = title,
            Message::DateChanged(date) => self.form.date = date,
            Message::KindSelected(kind) => self.form.kind = kind,
            Message::Submit => {
                // repeated submits are sent as they come
                if let Some(new) = self.form.to_new_event() {
                    let session = self.session;

                    return iced::Task::perform(self.state.store().request_create(new), move |result| {
                        Message::Created(session, result)
                    });
                }
            }
            Message::Created(session, result) => {
                if self.is_stale(session) {
                    return iced::Task::none();
                }

                match self.state.apply_create(result) {
                    Ok(_) => self.form.title.clear(),
                    Err(notice) => self.notices.push(notice),
                }
            }
            Message::Delete(id) => {
                let session = self.session;

                return iced::Task::perform(self.state.store().request_delete(id.clone()), move |result| {
                    Message::Deleted(session, id.clone(), result)
                });
            }
            Message::Deleted(session, id, result) => {
                if self.is_stale(session) {
                    return iced::Task::none();
                }

                if let Err(notice) = self.state.apply_delete(&id, result) {
                    self.notices.push(notice);
                }
            }
            Message::DismissNotice(idx) => {
                if idx < self.notices.len() {
                    self.notices.remove(idx);
                }
            }
        };

        iced::Task::none()
    }

    fn load(&mut self) -> iced::Task<Message> {
        self.state.begin_load();

        let session = self.session;

        iced::Task::perform(self.state.store().request_list(), move |result| {
            Message::Loaded(session, result)
        })
    }

    fn is_stale(&self, session: u64) -> bool {
        if session == self.session {
            return false;
        }

        log::warn!("Discarding response of session {session}, current is {}", self.session);

        true
    }
}

fn until_next_day(date: NaiveDateTime) -> Duration {
    let secs = date
        .date()
        .succ_opt()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map_or(86_400, |next_day| (next_day - date).num_seconds());

    Duration::from_secs(secs.max(0) as u64 + 30)
}
