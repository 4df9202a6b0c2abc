use reefcal_core::{
  EventCard,
  label
};
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct EventCardItemProps {
  pub card: EventCard
}

#[function_component(EventCardItem)]
pub fn event_card_item(
  props: &EventCardItemProps
) -> Html {
  let item_class =
    if props.card.is_past {
      "item past-event"
    } else {
      "item"
    };

  html! {
      <li>
          <div class={item_class}>
              <img
                  src={props.card.image.clone()}
                  alt={props.card.title.clone()}
              />
              <div class="text-content">
                  <h4>{ props.card.title.clone() }</h4>
                  <span>{ props.card.date_range_display.clone() }</span>
                  {
                      if let Some(url) = props.card.action_link.clone() {
                          html! {
                              <div class="accent-button button">
                                  <a target="_blank" href={url}>
                                      { label::ACTION_LINK_LABEL }
                                  </a>
                              </div>
                          }
                      } else {
                          html! {}
                      }
                  }
              </div>
          </div>
      </li>
  }
}
