use std::fmt::{Display, Formatter};

use super::CalendarDate;

/// An event as returned by the backend.
///
/// `date` is kept verbatim; lookups compare it as a string and never
/// re-derive it from a parsed value.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
  #[serde(deserialize_with = "deserialize_id")]
  pub id: String,
  pub title: String,
  pub date: String,
  #[serde(rename = "type", default, deserialize_with = "deserialize_kind")]
  pub kind: EventType,
  #[serde(default)]
  pub location: Option<String>,
  #[serde(default)]
  pub contact_name: Option<String>,
  #[serde(default)]
  pub contact_email: Option<String>,
  #[serde(default)]
  pub contact_phone: Option<String>,
}

impl Event {
  pub fn contact_line(&self) -> Option<String> {
    let parts: Vec<&str> = [self.contact_phone.as_deref(), self.contact_email.as_deref()]
      .into_iter()
      .flatten()
      .filter(|part| !part.is_empty())
      .collect();

    if parts.is_empty() {
      None
    } else {
      Some(parts.join(" • "))
    }
  }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
  Schedule,
  Event,
  Meeting,
  Setup,
  #[default]
  #[serde(other)]
  Unknown,
}

impl EventType {
  /// Types a user can pick when creating an event.
  pub const ALL: [Self; 4] = [Self::Schedule, Self::Event, Self::Meeting, Self::Setup];

  pub const fn label(&self) -> &'static str {
    match self {
      Self::Schedule => "Schedule",
      Self::Event => "Event",
      Self::Meeting => "Meeting",
      Self::Setup => "Setup",
      Self::Unknown => "Other",
    }
  }
}

impl Display for EventType {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.label())
  }
}

/// Body of a create request. The backend assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NewEvent {
  pub title: String,
  pub date: CalendarDate,
  #[serde(rename = "type")]
  pub kind: EventType,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TypeCounts {
  pub all: usize,
  pub schedule: usize,
  pub event: usize,
  pub meeting: usize,
  pub setup: usize,
}

impl TypeCounts {
  pub fn count<'a>(events: impl IntoIterator<Item = &'a Event>) -> Self {
    events.into_iter().fold(Self::default(), |mut counts, event| {
      counts.all += 1;

      match event.kind {
        EventType::Schedule => counts.schedule += 1,
        EventType::Event => counts.event += 1,
        EventType::Meeting => counts.meeting += 1,
        EventType::Setup => counts.setup += 1,
        EventType::Unknown => {}
      }

      counts
    })
  }

  pub fn chips(&self) -> [(&'static str, usize); 4] {
    [
      ("All Schedules", self.all),
      ("Event", self.event),
      ("Meeting", self.meeting),
      ("Setup and Rehearsal", self.setup),
    ]
  }
}

// Backends hand out ids as strings or integers; both stay opaque.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: serde::Deserializer<'de>,
{
  #[derive(serde::Deserialize)]
  #[serde(untagged)]
  enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
  }

  Ok(match serde::Deserialize::deserialize(deserializer)? {
    RawId::Text(id) => id,
    RawId::Signed(id) => id.to_string(),
    RawId::Unsigned(id) => id.to_string(),
  })
}

// Anything that is not a known type name (null, numbers, objects) reads as
// `Unknown` instead of failing the whole list.
fn deserialize_kind<'de, D>(deserializer: D) -> Result<EventType, D::Error>
where
  D: serde::Deserializer<'de>,
{
  #[derive(serde::Deserialize)]
  #[serde(untagged)]
  enum RawKind {
    Known(EventType),
    Other(serde::de::IgnoredAny),
  }

  Ok(match serde::Deserialize::deserialize(deserializer)? {
    RawKind::Known(kind) => kind,
    RawKind::Other(_) => EventType::Unknown,
  })
}

#[cfg(test)]
pub(crate) fn make_event(id: &str, date: &str, kind: EventType) -> Event {
  Event {
    id: id.to_string(),
    title: format!("Event {id}"),
    date: date.to_string(),
    kind,
    location: None,
    contact_name: None,
    contact_email: None,
    contact_phone: None,
  }
}
