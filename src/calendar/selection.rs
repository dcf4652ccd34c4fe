use super::{CalendarDate, Event, EventsByDate};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Selection {
  #[default]
  Unselected,
  Selected {
    date: CalendarDate,
    events: Vec<Event>,
  },
}

impl Selection {
  pub const fn date(&self) -> Option<CalendarDate> {
    match self {
      Self::Unselected => None,
      Self::Selected { date, .. } => Some(*date),
    }
  }

  pub fn events(&self) -> &[Event] {
    match self {
      Self::Unselected => &[],
      Self::Selected { events, .. } => events,
    }
  }

  pub fn is_selected(&self, date: CalendarDate) -> bool {
    self.date() == Some(date)
  }
}

/// Tracks the opened day and keeps its event list in step with the
/// collection. Month navigation never touches it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionController {
  selection: Selection,
}

impl SelectionController {
  pub const fn selection(&self) -> &Selection {
    &self.selection
  }

  pub fn select(&mut self, date: CalendarDate, index: &EventsByDate) {
    log::debug!("Selected {date}");

    self.selection = Selection::Selected {
      date,
      events: index.get(&date.to_string()).to_vec(),
    };
  }

  /// Re-derive the selected day's events from a freshly built index.
  ///
  /// A day that lost all its events stays selected with an empty list.
  pub fn reconcile(&mut self, index: &EventsByDate) {
    if let Selection::Selected { date, events } = &mut self.selection {
      let fresh = index.get(&date.to_string());

      if events.as_slice() != fresh {
        *events = fresh.to_vec();
      }
    }
  }

  pub fn clear(&mut self) {
    self.selection = Selection::Unselected;
  }
}
