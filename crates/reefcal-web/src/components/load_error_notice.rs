use reefcal_core::label;
use yew::{
  Html,
  function_component,
  html
};

/// Shown when the page global with
/// the dataset is absent or does not
/// decode. Distinct from the empty
/// state on purpose.
#[function_component(LoadErrorNotice)]
pub fn load_error_notice() -> Html {
  html! {
      <p style="text-align: center; padding: 20px; color: red;">
          { label::LOAD_ERROR_NOTICE }
      </p>
  }
}
