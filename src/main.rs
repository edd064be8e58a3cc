#[cfg(target_arch = "wasm32")]
use gobarber_web::{app::App, app_lib::logging};
#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    logging::init(2);
    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
