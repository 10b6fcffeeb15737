mod app;
mod bridge;
mod nav;

mod components {
    pub mod inquiry_form;
}

mod pages {
    pub mod detail;
    pub mod home;
    pub mod listings;
}

use leptos::*;

fn main() {
    mount_to_body(|| view! { <app::App/> });
}
