use std::collections::BTreeMap;

use super::Event;

/// Events grouped by their exact `date` string.
///
/// Derived from an event collection and never edited in place; build a new
/// one whenever the collection changes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventsByDate {
  by_date: BTreeMap<String, Vec<Event>>,
}

impl EventsByDate {
  pub fn build<'a>(events: impl IntoIterator<Item = &'a Event>) -> Self {
    let mut by_date: BTreeMap<String, Vec<Event>> = BTreeMap::new();

    for event in events {
      by_date
        .entry(event.date.clone())
        .or_default()
        .push(event.clone());
    }

    Self { by_date }
  }

  /// Events on `date` in collection order. Empty when there are none.
  pub fn get(&self, date: &str) -> &[Event] {
    self.by_date.get(date).map_or(&[], Vec::as_slice)
  }

  pub fn len_dates(&self) -> usize {
    self.by_date.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::calendar::event::make_event;
  use crate::calendar::EventType;

  #[test]
  fn test_groups_by_date_in_input_order() {
    let events = vec![
      make_event("a", "2029-05-02", EventType::Schedule),
      make_event("b", "2029-05-15", EventType::Event),
      make_event("c", "2029-05-02", EventType::Meeting),
      make_event("d", "2029-05-15", EventType::Setup),
      make_event("e", "2029-05-02", EventType::Event),
    ];

    let index = EventsByDate::build(&events);

    let ids = |date: &str| index.get(date).iter().map(|e| e.id.as_str()).collect::<Vec<_>>();

    assert_eq!(ids("2029-05-02"), ["a", "c", "e"]);
    assert_eq!(ids("2029-05-15"), ["b", "d"]);
    assert_eq!(index.len_dates(), 2);
  }

  #[test]
  fn test_every_event_listed_once_under_its_own_date() {
    let events = vec![
      make_event("a", "2029-05-02", EventType::Schedule),
      make_event("b", "2029-05-03", EventType::Event),
      make_event("c", "2029-05-02", EventType::Meeting),
    ];

    let index = EventsByDate::build(&events);

    for event in &events {
      let listed = index.get(&event.date);

      assert_eq!(listed.iter().filter(|e| e.id == event.id).count(), 1);
      assert!(listed.iter().all(|e| e.date == event.date));
    }

    let total: usize = ["2029-05-02", "2029-05-03"].iter().map(|date| index.get(date).len()).sum();
    assert_eq!(total, events.len());
    assert_eq!(index.len_dates(), 2);
  }

  #[test]
  fn test_missing_date_is_empty() {
    let index = EventsByDate::build(&[make_event("a", "2029-05-02", EventType::Event)]);

    assert!(index.get("2029-05-03").is_empty());
    assert_eq!(index.len_dates(), 1);
    assert_eq!(EventsByDate::default().len_dates(), 0);
  }

  #[test]
  fn test_keys_are_verbatim() {
    let index = EventsByDate::build(&[make_event("a", "2029-5-2", EventType::Event)]);

    assert!(index.get("2029-05-02").is_empty());
    assert_eq!(index.get("2029-5-2").len(), 1);
  }
}
