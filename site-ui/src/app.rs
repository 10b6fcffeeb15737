use crate::nav;
use crate::pages::detail::DetailPage;
use crate::pages::home::HomePage;
use crate::pages::listings::ListingsPage;
use leptos::*;
use listing_core::config::SiteConfig;

/// Root component. One bundle serves the three static shell pages; the
/// mounted page is picked off the current path.
#[component]
pub fn App() -> impl IntoView {
    provide_context(SiteConfig::default());

    let path = nav::pathname();
    if path.contains("property-details") {
        view! { <DetailPage/> }.into_view()
    } else if path.contains("properties") {
        view! { <ListingsPage/> }.into_view()
    } else {
        view! { <HomePage/> }.into_view()
    }
}
