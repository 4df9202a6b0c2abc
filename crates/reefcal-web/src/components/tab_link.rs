use reefcal_core::TabSelector;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TabLinkProps {
  pub selector:    TabSelector,
  pub is_selected: bool,
  pub on_select:   Callback<MouseEvent>
}

/// Month selector anchor. The
/// fragment href mirrors the panel
/// id, but activation is handled in
/// the click callback, which
/// suppresses the default
/// navigation.
#[function_component(TabLink)]
pub fn tab_link(
  props: &TabLinkProps
) -> Html {
  let href = format!(
    "#{}",
    props.selector.key.tab_id()
  );

  html! {
      <li>
          <a
              href={href}
              class={classes!(props.is_selected.then_some("active"))}
              onclick={props.on_select.clone()}
          >
              { props.selector.label.clone() }
          </a>
      </li>
  }
}
