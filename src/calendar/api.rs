use std::fmt::Debug;

use ureq::Agent;
use url::Url;

use super::{Event, NewEvent};

const EVENTS_PATH: &str = "api/events";

/// The backend's event resource.
pub trait EventsApi: Debug + Send + Sync {
  /// `GET /api/events`
  ///
  /// # Errors
  /// Returns an error if the request fails or the body is not a list of events.
  fn list(&self) -> Result<Vec<Event>, Error>;

  /// `POST /api/events`, answering with the stored event.
  ///
  /// # Errors
  /// Returns an error if the backend rejects the event or the response
  /// can not be decoded.
  fn create(&self, event: &NewEvent) -> Result<Event, Error>;

  /// `DELETE /api/events/{id}`
  ///
  /// # Errors
  /// Returns [`ErrorKind::NotFound`] for an unknown id, another kind for
  /// every other failure.
  fn delete(&self, id: &str) -> Result<(), Error>;
}

#[derive(Debug, Clone)]
pub struct Client {
  agent: Agent,
  base_url: Url,
}

impl Client {
  pub fn new(base_url: Url) -> Self {
    Self {
      agent: Agent::new(),
      base_url,
    }
  }

  fn events_url(&self) -> Result<Url, Error> {
    Ok(self.base_url.join(EVENTS_PATH)?)
  }

  fn event_url(&self, id: &str) -> Result<Url, Error> {
    let mut url = self.events_url()?;

    url
      .path_segments_mut()
      .map_err(|()| Error {
        kind: ErrorKind::Parsing,
        message: format!("{} can not be a base url", self.base_url),
      })?
      .push(id);

    Ok(url)
  }
}

impl EventsApi for Client {
  fn list(&self) -> Result<Vec<Event>, Error> {
    let url = self.events_url()?;

    let events = self.agent
      .get(url.as_str())
      .set("Accept", "application/json")
      .call()?
      .into_json()?;

    Ok(events)
  }

  fn create(&self, event: &NewEvent) -> Result<Event, Error> {
    let url = self.events_url()?;

    let created = self.agent
      .post(url.as_str())
      .set("Accept", "application/json")
      .send_json(event)?
      .into_json()?;

    Ok(created)
  }

  fn delete(&self, id: &str) -> Result<(), Error> {
    let url = self.event_url(id)?;

    let response = self.agent
      .delete(url.as_str())
      .call()?;

    match response.status() {
      204 => Ok(()),
      status => Err(Error {
        kind: ErrorKind::Status(status),
        message: format!("Unexpected status {status} deleting event {id}"),
      }),
    }
  }
}

/// Errors that may occur while talking to the event backend.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Error {
  pub kind: ErrorKind,
  pub message: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
  /// Connection or transport failure, no response.
  Http,
  /// The backend answered with a status other than the expected one.
  Status(u16),
  NotFound,
  Parsing,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.message)
  }
}

impl std::error::Error for Error {}

impl From<ureq::Error> for Error {
  fn from(e: ureq::Error) -> Self {
    match e {
      ureq::Error::Status(404, response) => Self {
        kind: ErrorKind::NotFound,
        message: format!("{} not found", response.get_url()),
      },
      ureq::Error::Status(status, response) => Self {
        kind: ErrorKind::Status(status),
        message: format!("{} answered with status {status}", response.get_url()),
      },
      ureq::Error::Transport(transport) => Self {
        kind: ErrorKind::Http,
        message: transport.to_string(),
      },
    }
  }
}

impl From<std::io::Error> for Error {
  fn from(e: std::io::Error) -> Self {
    Self {
      kind: ErrorKind::Parsing,
      message: e.to_string(),
    }
  }
}

impl From<url::ParseError> for Error {
  fn from(e: url::ParseError) -> Self {
    Self {
      kind: ErrorKind::Parsing,
      message: e.to_string(),
    }
  }
}
