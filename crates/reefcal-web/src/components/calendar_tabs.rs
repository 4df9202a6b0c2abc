use reefcal_core::{
  MonthKey,
  TabContent,
  TabSelector
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html,
  use_state
};

use super::{
  TabLink,
  TabPanel
};

#[derive(Properties, PartialEq)]
pub struct CalendarTabsProps {
  pub selectors: Vec<TabSelector>,
  pub panels:    Vec<TabContent>
}

/// Tab group with the selection
/// behavior attached: exactly one
/// panel visible at a time, its
/// selector marked active. A fresh
/// render starts from the selector
/// the pipeline marked initially
/// active; a stored selection that
/// no longer exists after a data
/// change falls back the same way.
#[function_component(CalendarTabs)]
pub fn calendar_tabs(
  props: &CalendarTabsProps
) -> Html {
  let selected =
    use_state(|| None::<MonthKey>);

  let current = (*selected)
    .clone()
    .filter(|key| {
      props
        .selectors
        .iter()
        .any(|s| &s.key == key)
    })
    .or_else(|| {
      props
        .selectors
        .iter()
        .find(|s| s.is_initially_active)
        .map(|s| s.key.clone())
    });

  html! {
      <div class="tabs-content">
          <div class="wrapper">
              <ul class="tabs clearfix" data-tabgroup="calendar-tab-group">
                  {
                      for props.selectors.iter().map(|selector| {
                          let key = selector.key.clone();
                          let is_selected = current.as_ref() == Some(&key);
                          let on_select = {
                              let selected = selected.clone();
                              Callback::from(move |event: MouseEvent| {
                                  event.prevent_default();
                                  selected.set(Some(key.clone()));
                              })
                          };
                          html! {
                              <TabLink
                                  selector={selector.clone()}
                                  is_selected={is_selected}
                                  on_select={on_select}
                              />
                          }
                      })
                  }
              </ul>
              <section id="calendar-tab-group" class="tabgroup">
                  {
                      for props.panels.iter().map(|panel| {
                          let is_visible = current.as_ref() == Some(&panel.key);
                          html! {
                              <TabPanel
                                  panel={panel.clone()}
                                  is_visible={is_visible}
                              />
                          }
                      })
                  }
              </section>
          </div>
      </div>
  }
}
