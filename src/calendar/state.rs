use std::sync::Arc;

use super::api::{self, EventsApi};
use super::store::{EventStore, Notice};
use super::{
  CalendarDate, Event, EventsByDate, MonthAnchor, MonthGrid, MonthNavigator, Selection,
  SelectionController,
};

/// Single owner of the calendar's state.
///
/// Every change goes through one of the methods below, after which the
/// index and the selection are re-derived from the store's collection.
#[derive(Debug)]
pub struct CalendarState {
  store: EventStore,
  navigator: MonthNavigator,
  selection: SelectionController,
  index: EventsByDate,
  indexed_revision: u64,
  today: CalendarDate,
}

impl CalendarState {
  pub fn new(api: Arc<dyn EventsApi>, anchor: MonthAnchor, today: CalendarDate) -> Self {
    let store = EventStore::new(api);
    let indexed_revision = store.revision();

    Self {
      store,
      navigator: MonthNavigator::new(anchor),
      selection: SelectionController::default(),
      index: EventsByDate::default(),
      indexed_revision,
      today,
    }
  }

  pub const fn store(&self) -> &EventStore {
    &self.store
  }

  pub const fn selection(&self) -> &Selection {
    self.selection.selection()
  }

  pub const fn anchor(&self) -> MonthAnchor {
    self.navigator.anchor()
  }

  pub fn set_today(&mut self, today: CalendarDate) {
    self.today = today;
  }

  /// Grid for the current anchor, with "today" fixed for the whole pass.
  pub fn grid(&self) -> MonthGrid {
    MonthGrid::new(self.anchor(), self.today)
  }

  pub fn events_on(&self, date: CalendarDate) -> &[Event] {
    self.index.get(&date.to_string())
  }

  pub fn shift_month(&mut self, months: i32) -> MonthAnchor {
    let anchor = self.navigator.shift(months);
    let grid = self.grid();
    log::debug!("Showing {} ({} to {})", anchor.label(), grid.start(), grid.end());

    anchor
  }

  pub fn select(&mut self, date: CalendarDate) {
    self.selection.select(date, &self.index);
  }

  /// Forget the collection and the selection, ready for a fresh load.
  pub fn reset(&mut self) {
    self.store.reset();
    self.selection.clear();
    self.refresh();
  }

  pub fn begin_load(&mut self) {
    self.store.begin_load();
  }

  pub fn apply_load(&mut self, result: Result<Vec<Event>, api::Error>) {
    self.store.apply_load(result);
    self.refresh();
  }

  /// # Errors
  /// See [`EventStore::apply_create`].
  pub fn apply_create(&mut self, result: Result<Event, api::Error>) -> Result<Event, Notice> {
    let created = self.store.apply_create(result).cloned();
    self.refresh();

    created
  }

  /// # Errors
  /// See [`EventStore::apply_delete`].
  pub fn apply_delete(&mut self, id: &str, result: Result<(), api::Error>) -> Result<(), Notice> {
    let deleted = self.store.apply_delete(id, result);
    self.refresh();

    deleted
  }

  /// Rebuild the derived views if the collection changed since the last pass.
  fn refresh(&mut self) {
    if self.indexed_revision == self.store.revision() {
      return;
    }

    self.index = EventsByDate::build(self.store.events());
    self.indexed_revision = self.store.revision();
    self.selection.reconcile(&self.index);

    log::debug!(
      "Indexed {} events on {} days",
      self.store.events().len(),
      self.index.len_dates()
    );
  }
}
