use reefcal_core::label;
use yew::{
  Html,
  function_component,
  html
};

#[function_component(EmptyNotice)]
pub fn empty_notice() -> Html {
  html! {
      <p style="text-align: center; padding: 20px;">
          { label::NO_EVENTS_NOTICE }
      </p>
  }
}
