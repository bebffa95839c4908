//! Identifier parsing at the wire edge
//!
//! Ids travel as strings in every message. They are parsed here, before any
//! storage call, so a malformed id always surfaces as `INVALID_ARGUMENT`.

use tonic::Status;
use uuid::Uuid;

use crate::error::ToTonicResult;

/// Parse a required UUID field; `field` names it in the error message.
pub fn parse_uuid(field: &str, raw: &str) -> Result<Uuid, Status> {
  let raw = raw.trim();
  if raw.is_empty() {
    return Err(Status::invalid_argument(format!("{field} is required")));
  }
  Uuid::parse_str(raw)
    .map_err(|e| format!("{field} is not a valid UUID: {e}"))
    .to_tonic()
}

/// Absent and blank values both mean "not given".
pub fn parse_opt_uuid(field: &str, raw: Option<&str>) -> Result<Option<Uuid>, Status> {
  match raw.map(str::trim) {
    None | Some("") => Ok(None),
    Some(value) => parse_uuid(field, value).map(Some),
  }
}

pub fn parse_uuids<S: AsRef<str>>(field: &str, raw: &[S]) -> Result<Vec<Uuid>, Status> {
  raw.iter().map(|value| parse_uuid(field, value.as_ref())).collect()
}
