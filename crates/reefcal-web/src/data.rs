use std::fmt;

use reefcal_core::EventRecord;
use wasm_bindgen::JsValue;

/// Host-page element the calendar
/// owns while rendering.
pub const MOUNT_ELEMENT_ID: &str =
  "calendar-container";

/// Global the host page populates
/// before this module runs.
pub const EVENTS_GLOBAL: &str =
  "REEFCAL_EVENTS";

#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
  Missing,
  Undecodable(String)
}

impl fmt::Display for LoadError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    match self {
      | LoadError::Missing => {
        write!(
          f,
          "window.{EVENTS_GLOBAL} is \
           not set"
        )
      }
      | LoadError::Undecodable(
        cause
      ) => {
        write!(
          f,
          "window.{EVENTS_GLOBAL} \
           did not decode: {cause}"
        )
      }
    }
  }
}

/// Reads the pre-populated event
/// list from the page global. The
/// records arrive untouched; the
/// core pipeline handles any
/// malformed field values.
pub fn load_events()
-> Result<Vec<EventRecord>, LoadError>
{
  let Some(window) = web_sys::window()
  else {
    return Err(LoadError::Missing);
  };

  let raw = js_sys::Reflect::get(
    window.as_ref(),
    &JsValue::from_str(EVENTS_GLOBAL)
  )
  .map_err(|_| LoadError::Missing)?;

  if raw.is_undefined()
    || raw.is_null()
  {
    return Err(LoadError::Missing);
  }

  serde_wasm_bindgen::from_value(raw)
    .map_err(|error| {
      LoadError::Undecodable(
        error.to_string()
      )
    })
}
