use leptos::prelude::*;

mod components;

pub use components::base_field::{BaseField, FormContextProvider};
pub use components::root_field::RootField;

use components::demo_form::DemoForm;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="Page">
            <h1 class="PageTitle">"Schema Form Fields"</h1>
            <DemoForm/>
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // Ignore failure: a logger may already be installed by the host page
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
