use std::fmt::{Display, Formatter};
use std::future::Future;
use std::sync::Arc;

use super::api::{self, ErrorKind, EventsApi};
use super::{Event, NewEvent, TypeCounts};

/// Something the user has to be told about after a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
  CreateRejected(String),
  DeleteNotFound(String),
  DeleteFailed(String),
}

impl Notice {
  /// Informational notices describe an already satisfied request.
  pub const fn is_error(&self) -> bool {
    !matches!(self, Self::DeleteNotFound(_))
  }
}

impl Display for Notice {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::CreateRejected(reason) => write!(f, "Could not create the event: {reason}"),
      Self::DeleteNotFound(_) => f.write_str("The event was already deleted"),
      Self::DeleteFailed(reason) => write!(f, "Could not delete the event: {reason}"),
    }
  }
}

/// A confirmed create or delete that a pending list response predates.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Change {
  Created(Event),
  Deleted(String),
}

/// Owner of the client-side event collection.
///
/// Only successful backend responses change the collection; every change
/// bumps [`EventStore::revision`] so derived views know to rebuild.
#[derive(Debug)]
pub struct EventStore {
  api: Arc<dyn EventsApi>,
  events: Vec<Event>,
  loading: bool,
  /// Replayed over the list response once it arrives
  pending: Vec<Change>,
  revision: u64,
}

impl EventStore {
  pub fn new(api: Arc<dyn EventsApi>) -> Self {
    Self {
      api,
      events: Vec::new(),
      loading: false,
      pending: Vec::new(),
      revision: 0,
    }
  }

  pub fn events(&self) -> &[Event] {
    &self.events
  }

  pub const fn is_loading(&self) -> bool {
    self.loading
  }

  pub const fn revision(&self) -> u64 {
    self.revision
  }

  pub fn counts(&self) -> TypeCounts {
    TypeCounts::count(&self.events)
  }

  /// Drop everything and wait for a fresh load.
  pub fn reset(&mut self) {
    self.events.clear();
    self.loading = false;
    self.pending.clear();
    self.bump();
  }

  pub fn begin_load(&mut self) {
    self.loading = true;
    self.pending.clear();
  }

  /// Replaces the collection with the listed events, then replays the
  /// creates and deletes confirmed while the list request was in flight.
  pub fn apply_load(&mut self, result: Result<Vec<Event>, api::Error>) {
    self.loading = false;
    let pending = std::mem::take(&mut self.pending);

    match result {
      Ok(events) => {
        log::info!("Loaded {} events", events.len());

        self.events = events;

        for change in pending {
          match change {
            Change::Created(event) => {
              if self.events.iter().all(|known| known.id != event.id) {
                self.events.push(event);
              }
            }
            Change::Deleted(id) => self.events.retain(|event| event.id != id),
          }
        }

        self.bump();
      }
      Err(e) => {
        log::error!("Failed to load events: {e:?}");
      }
    }
  }

  /// Appends the backend's record verbatim on success.
  ///
  /// # Errors
  /// Returns a [`Notice::CreateRejected`] and leaves the collection alone
  /// when the backend did not accept the event.
  pub fn apply_create(&mut self, result: Result<Event, api::Error>) -> Result<&Event, Notice> {
    match result {
      Ok(event) => {
        log::info!("Created event {} on {}", event.id, event.date);

        if self.loading {
          self.pending.push(Change::Created(event.clone()));
        }

        let idx = self.events.len();
        self.events.push(event);
        self.bump();

        Ok(&self.events[idx])
      }
      Err(e) => {
        log::error!("Failed to create event: {e:?}");

        Err(Notice::CreateRejected(e.message))
      }
    }
  }

  /// Removes the event with `id` if the backend deleted it.
  ///
  /// # Errors
  /// Returns [`Notice::DeleteNotFound`] when the id was already gone and
  /// [`Notice::DeleteFailed`] otherwise; the collection is unchanged in
  /// both cases.
  pub fn apply_delete(&mut self, id: &str, result: Result<(), api::Error>) -> Result<(), Notice> {
    match result {
      Ok(()) => {
        log::info!("Deleted event {id}");

        if self.loading {
          self.pending.push(Change::Deleted(id.to_string()));
        }

        let before = self.events.len();
        self.events.retain(|event| event.id != id);

        if self.events.len() != before {
          self.bump();
        }

        Ok(())
      }
      Err(e) if e.kind == ErrorKind::NotFound => {
        log::warn!("Event {id} was already deleted");

        Err(Notice::DeleteNotFound(id.to_string()))
      }
      Err(e) => {
        log::error!("Failed to delete event {id}: {e:?}");

        Err(Notice::DeleteFailed(e.message))
      }
    }
  }

  // The requests below only talk to the backend. Their results come back
  // through the matching `apply_*` call, so a response can be dropped when
  // the view that asked for it is gone.

  pub fn request_list(&self) -> impl Future<Output = Result<Vec<Event>, api::Error>> + Send + 'static {
    let api = Arc::clone(&self.api);

    async move { api.list() }
  }

  pub fn request_create(
    &self,
    event: NewEvent,
  ) -> impl Future<Output = Result<Event, api::Error>> + Send + 'static {
    let api = Arc::clone(&self.api);

    async move { api.create(&event) }
  }

  pub fn request_delete(&self, id: String) -> impl Future<Output = Result<(), api::Error>> + Send + 'static {
    let api = Arc::clone(&self.api);

    async move { api.delete(&id) }
  }

  fn bump(&mut self) {
    self.revision = self.revision.wrapping_add(1);
  }
}
