use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::event::EventRecord;

/// Upper bound on rendered month
/// tabs; older buckets are dropped.
pub const MAX_TABS: usize = 8;

/// `YYYY-MM` grouping and ordering
/// key taken from an event's start
/// date. The zero-padded fixed-width
/// form makes string ordering equal
/// to chronological ordering.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
pub struct MonthKey(String);

impl MonthKey {
  /// Derives the key from a start
  /// date by taking its first seven
  /// characters. No calendar
  /// validation happens here; a
  /// short or garbage date yields a
  /// garbage key that still groups
  /// deterministically.
  pub fn from_start_date(
    raw: &str
  ) -> Self {
    Self(raw.chars().take(7).collect())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Element id shared by a tab
  /// link's fragment href and its
  /// content section.
  pub fn tab_id(&self) -> String {
    format!(
      "tab-{}",
      self.0.replace('-', "")
    )
  }
}

impl fmt::Display for MonthKey {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Buckets active events by start
/// month, keeping input order inside
/// each bucket. Inactive records are
/// skipped outright.
pub fn group_by_month(
  events: &[EventRecord]
) -> BTreeMap<MonthKey, Vec<EventRecord>>
{
  let mut buckets: BTreeMap<
    MonthKey,
    Vec<EventRecord>,
  > = BTreeMap::new();

  for event in events {
    if !event.active {
      continue;
    }

    buckets
      .entry(MonthKey::from_start_date(
        &event.date_start
      ))
      .or_default()
      .push(event.clone());
  }

  debug!(
    input = events.len(),
    buckets = buckets.len(),
    "grouped events by start month"
  );

  buckets
}

/// Month keys to render: most recent
/// first, capped at [`MAX_TABS`].
pub fn ordered_keys(
  buckets: &BTreeMap<
    MonthKey,
    Vec<EventRecord>,
  >
) -> Vec<MonthKey> {
  buckets
    .keys()
    .rev()
    .take(MAX_TABS)
    .cloned()
    .collect()
}
