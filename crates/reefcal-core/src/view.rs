use chrono::NaiveDate;
use tracing::debug;

use crate::datetime::{
  date_range_display,
  is_past
};
use crate::event::EventRecord;
use crate::group::{
  MonthKey,
  group_by_month,
  ordered_keys
};
use crate::label::month_label;

/// Selector half of a tab: what the
/// clickable month link shows.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct TabSelector {
  pub key:   MonthKey,
  pub label: String,
  pub is_initially_active: bool
}

/// Content half of a tab,
/// index-aligned with its selector.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct TabContent {
  pub key:   MonthKey,
  pub cards: Vec<EventCard>,
  pub is_initially_visible: bool
}

/// Everything a rendered event card
/// needs, precomputed so display
/// adapters stay logic-free.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct EventCard {
  pub title: String,
  pub image: String,
  pub date_range_display: String,
  pub is_past: bool,
  pub action_link: Option<String>
}

/// Headless render output. `Empty`
/// stands for the "no scheduled
/// events" notice; `Tabs` carries
/// the index-aligned selector and
/// panel lists.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum CalendarView {
  Empty,
  Tabs {
    selectors: Vec<TabSelector>,
    panels:    Vec<TabContent>
  }
}

/// The whole pipeline as a pure
/// function: group active events by
/// start month, order the most
/// recent months first, cap the tab
/// count and derive the display
/// descriptors. `today` is injected
/// so the past/future split is
/// deterministic under test.
pub fn build_calendar(
  events: &[EventRecord],
  today: NaiveDate
) -> CalendarView {
  let buckets = group_by_month(events);
  let keys = ordered_keys(&buckets);

  if keys.is_empty() {
    debug!(
      "no visible buckets; rendering \
       empty notice"
    );
    return CalendarView::Empty;
  }

  let mut selectors =
    Vec::with_capacity(keys.len());
  let mut panels =
    Vec::with_capacity(keys.len());

  for (index, key) in
    keys.iter().enumerate()
  {
    let first = index == 0;

    selectors.push(TabSelector {
      key:   key.clone(),
      label: month_label(key),
      is_initially_active: first
    });

    let cards = buckets
      .get(key)
      .map(|bucket| {
        bucket
          .iter()
          .map(|event| {
            event_card(event, today)
          })
          .collect()
      })
      .unwrap_or_default();

    panels.push(TabContent {
      key: key.clone(),
      cards,
      is_initially_visible: first
    });
  }

  debug!(
    tabs = selectors.len(),
    first = %keys[0],
    "built calendar view"
  );

  CalendarView::Tabs {
    selectors,
    panels
  }
}

fn event_card(
  event: &EventRecord,
  today: NaiveDate
) -> EventCard {
  EventCard {
    title: event.title.clone(),
    image: event.image.clone(),
    date_range_display:
      date_range_display(
        &event.date_start,
        &event.date_end
      ),
    is_past: is_past(
      &event.date_end,
      today
    ),
    action_link: event
      .document_url
      .clone()
  }
}
