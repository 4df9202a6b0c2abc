mod app;
mod components;
mod data;

use chrono::Local;

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "starting reefcal frontend"
  );

  let Some(mount) = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document.get_element_by_id(
        data::MOUNT_ELEMENT_ID
      )
    })
  else {
    tracing::error!(
      element = data::MOUNT_ELEMENT_ID,
      "calendar mount element \
       missing; skipping render"
    );
    return;
  };

  let events = match data::load_events()
  {
    | Ok(events) => Some(events),
    | Err(error) => {
      tracing::error!(
        %error,
        "failed loading the event \
         dataset"
      );
      None
    }
  };

  let today =
    Local::now().date_naive();

  yew::Renderer::<app::App>::with_root_and_props(
    mount,
    app::AppProps { events, today }
  )
  .render();
}
