use leptos::prelude::*;

use ducktees_ui::App;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);

    mount_to_body(|| view! { <App /> });
}
