use reefcal_core::TabContent;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

use super::EventCardItem;

#[derive(Properties, PartialEq)]
pub struct TabPanelProps {
  pub panel:      TabContent,
  pub is_visible: bool
}

#[function_component(TabPanel)]
pub fn tab_panel(
  props: &TabPanelProps
) -> Html {
  let style = if props.is_visible {
    "display: block;"
  } else {
    "display: none;"
  };

  html! {
      <div id={props.panel.key.tab_id()} style={style}>
          <ul>
              {
                  for props.panel.cards.iter().map(|card| html! {
                      <EventCardItem card={card.clone()} />
                  })
              }
          </ul>
      </div>
  }
}
