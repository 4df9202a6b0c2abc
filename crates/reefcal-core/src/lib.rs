pub mod datetime;
pub mod event;
pub mod group;
pub mod label;
pub mod view;

pub use event::EventRecord;
pub use group::{
  MAX_TABS,
  MonthKey
};
pub use view::{
  CalendarView,
  EventCard,
  TabContent,
  TabSelector,
  build_calendar
};
