use chrono::NaiveDate;
use reefcal_core::{
  CalendarView,
  EventRecord,
  build_calendar
};
use yew::{
  Html,
  Properties,
  function_component,
  html
};

use crate::components::{
  CalendarTabs,
  EmptyNotice,
  LoadErrorNotice
};

#[derive(Properties, PartialEq)]
pub struct AppProps {
  /// `None` means the dataset was
  /// missing or undecodable, which
  /// renders the load-error notice
  /// rather than the empty state.
  pub events:
    Option<Vec<EventRecord>>,
  pub today:  NaiveDate
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
  let Some(events) =
    props.events.as_ref()
  else {
    return html! {
        <LoadErrorNotice />
    };
  };

  match build_calendar(
    events,
    props.today
  ) {
    | CalendarView::Empty => html! {
        <EmptyNotice />
    },
    | CalendarView::Tabs {
      selectors,
      panels
    } => html! {
        <CalendarTabs
            selectors={selectors}
            panels={panels}
        />
    }
  }
}
