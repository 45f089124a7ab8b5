//! Seat template documents
//!
//! A template is an arbitrary JSON object carrying a `seats` array. Only
//! `assignee.login`, `last_activity_at`, and `last_activity_editor` are
//! interpreted; every other field is carried through untouched.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::SeatsError;
use crate::domain::types::{EditorId, Login};

pub const SEATS_FIELD: &str = "seats";
pub const LAST_ACTIVITY_AT_FIELD: &str = "last_activity_at";
pub const LAST_ACTIVITY_EDITOR_FIELD: &str = "last_activity_editor";

/// A validated seat template, also used as the output snapshot shape
///
/// Cloning produces a fully independent document, so snapshots handed to a
/// caller never alias generator state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct SeatTemplate {
    document: Map<String, Value>,
    seats: Vec<Value>,
}

/// Output of one seat generation call
pub type SeatsSnapshot = SeatTemplate;

impl SeatTemplate {
    /// Validate the document shape; fails when `seats` is absent or not an array
    pub fn from_value(value: Value) -> Result<Self, SeatsError> {
        let Value::Object(mut document) = value else {
            return Err(SeatsError::MissingSeats);
        };
        let seats = match document.remove(SEATS_FIELD) {
            Some(Value::Array(seats)) => seats,
            _ => return Err(SeatsError::MissingSeats),
        };
        if let Some(index) = seats.iter().position(|seat| !seat.is_object()) {
            return Err(SeatsError::MalformedSeat { index });
        }
        Ok(Self { document, seats })
    }

    pub fn seats(&self) -> &[Value] {
        &self.seats
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Login of every seat, in seat order
    pub fn logins(&self) -> Result<Vec<Login>, SeatsError> {
        self.seats
            .iter()
            .enumerate()
            .map(|(index, seat)| {
                let raw = seat
                    .pointer("/assignee/login")
                    .and_then(Value::as_str)
                    .ok_or(SeatsError::MissingLogin { index })?;
                Login::try_new(raw.to_string()).map_err(|_| SeatsError::InvalidLogin {
                    index,
                    login: raw.to_string(),
                })
            })
            .collect()
    }

    /// Raw `last_activity_at` of the seat at `index`, when present and non-null
    pub fn last_activity_at(&self, index: usize) -> Option<&Value> {
        self.seats
            .get(index)
            .and_then(|seat| seat.get(LAST_ACTIVITY_AT_FIELD))
            .filter(|value| !value.is_null())
    }

    /// `last_activity_at` parsed as a timestamp, for inspecting generated output
    pub fn last_activity_timestamp(&self, index: usize) -> Option<DateTime<Utc>> {
        self.last_activity_at(index)
            .and_then(Value::as_str)
            .and_then(|raw| parse_timestamp(raw).ok())
    }

    pub fn last_activity_editor(&self, index: usize) -> Option<&str> {
        self.seats
            .get(index)
            .and_then(|seat| seat.get(LAST_ACTIVITY_EDITOR_FIELD))
            .and_then(Value::as_str)
    }

    /// Overwrite the activity fields of the seat at `index`
    pub(crate) fn record_activity(&mut self, index: usize, at: DateTime<Utc>, editor: &EditorId) {
        if let Some(fields) = self.seats.get_mut(index).and_then(Value::as_object_mut) {
            fields.insert(
                LAST_ACTIVITY_AT_FIELD.to_string(),
                Value::String(format_timestamp(at)),
            );
            fields.insert(
                LAST_ACTIVITY_EDITOR_FIELD.to_string(),
                Value::String(editor.to_string()),
            );
        }
    }

    pub fn into_value(self) -> Value {
        Value::from(self)
    }
}

impl TryFrom<Value> for SeatTemplate {
    type Error = SeatsError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<SeatTemplate> for Value {
    fn from(template: SeatTemplate) -> Self {
        let mut document = template.document;
        document.insert(SEATS_FIELD.to_string(), Value::Array(template.seats));
        Value::Object(document)
    }
}

/// Parse an RFC 3339 timestamp with any offset into UTC
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw).map(|parsed| parsed.with_timezone(&Utc))
}

/// RFC 3339 in UTC with millisecond precision, e.g. `2024-03-01T04:00:00.000Z`
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
