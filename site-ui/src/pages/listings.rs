use crate::bridge;
use crate::nav;
use leptos::*;
use listing_core::config::SiteConfig;
use listing_core::filters::ListingFilters;
use listing_core::format::price_label;
use listing_core::listing::Listing;
use listing_core::media::resolve_image_url;
use listing_core::query::detail_href;
use wasm_bindgen_futures::spawn_local;

/// Values offered by the two filter controls. URL parameters are matched
/// against these, case-insensitively.
const KIND_OPTIONS: [&str; 3] = ["all", "sale", "rent"];
const CATEGORY_OPTIONS: [&str; 5] = ["all", "Villa", "Apartment", "Townhouse", "Penthouse"];

#[derive(Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Loading,
    Ready,
    Failed,
}

/// Listings page: one feed fetch per view, two filter dimensions kept in
/// sync with the address bar, and a card grid re-rendered on every change.
#[component]
pub fn ListingsPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let feed = create_rw_signal(Vec::<Listing>::new());
    let load_state = create_rw_signal(LoadState::Loading);
    let filters = create_rw_signal(ListingFilters::default());

    {
        let config = config.clone();
        spawn_local(async move {
            match bridge::fetch_listings(&config).await {
                Ok(data) => {
                    filters.set(ListingFilters::from_params(
                        nav::query_param("type").as_deref(),
                        nav::query_param("category").as_deref(),
                        &KIND_OPTIONS,
                        &CATEGORY_OPTIONS,
                    ));
                    feed.set(data);
                    load_state.set(LoadState::Ready);
                }
                Err(err) => {
                    logging::error!("failed to load listings: {err}");
                    load_state.set(LoadState::Failed);
                }
            }
        });
    }

    let image_base = store_value(config.image_base_url.clone());
    let visible = move || {
        filters.with(|f| feed.with(|feed| f.apply(feed).into_iter().cloned().collect::<Vec<_>>()))
    };
    let sync_url = move || {
        filters.with_untracked(|f| nav::replace_query(&f.to_search()));
    };

    let on_kind = move |ev: ev::Event| {
        filters.update(|f| f.kind = event_target_value(&ev));
        sync_url();
    };
    let on_category = move |ev: ev::Event| {
        filters.update(|f| f.category = event_target_value(&ev));
        sync_url();
    };
    let on_reset = move |_| {
        filters.update(|f| f.reset());
        nav::replace_query("");
    };

    view! {
      <section class="listings">
        <div class="filter-bar">
          <select
            id="filter-type"
            prop:value=move || filters.with(|f| f.kind.clone())
            on:change=on_kind
          >
            {KIND_OPTIONS
                .iter()
                .map(|o| view! { <option value=*o>{kind_label(o)}</option> })
                .collect_view()}
          </select>
          <select
            id="filter-category"
            prop:value=move || filters.with(|f| f.category.clone())
            on:change=on_category
          >
            {CATEGORY_OPTIONS
                .iter()
                .map(|o| view! { <option value=*o>{category_label(o)}</option> })
                .collect_view()}
          </select>
          <button id="reset-filters" on:click=on_reset>"Reset"</button>
        </div>

        <div class="gallery" id="property-list">
          {move || match load_state.get() {
              LoadState::Loading => view! { <p class="loading">"Loading properties..."</p> }.into_view(),
              LoadState::Failed => view! {
                <p class="load-error">
                  "Error loading properties. Please ensure you are running this on a web server."
                </p>
              }
              .into_view(),
              LoadState::Ready => {
                  let cards = visible();
                  if cards.is_empty() {
                      view! {
                        <p class="no-results">"No properties found matching your criteria."</p>
                      }
                      .into_view()
                  } else {
                      cards
                          .into_iter()
                          .map(|l| listing_card(l, filters, image_base))
                          .collect_view()
                  }
              }
          }}
        </div>
      </section>
    }
}

fn listing_card(
    listing: Listing,
    filters: RwSignal<ListingFilters>,
    image_base: StoredValue<String>,
) -> impl IntoView {
    // The href re-derives the current search so the detail page's back link
    // restores whatever the filters are at click time.
    let href = {
        let listing = listing.clone();
        move || filters.with(|f| detail_href(&listing, &f.to_search()))
    };
    let img = listing
        .cover_image()
        .map(|path| image_base.with_value(|base| resolve_image_url(base, &path)))
        .unwrap_or_default();
    let price = price_label(&listing.currency, listing.price);
    let beds = listing.beds;
    let baths = listing.baths;

    view! {
      <a class="gallery-item" href=href>
        <div class="image-container">
          <img class="gallery-img-real" src=img alt=listing.title.clone()/>
          <span class="badge">{listing.kind.clone()}</span>
        </div>
        <div class="gallery-info">
          <h4>{listing.title.clone()}</h4>
          <p class="card-location">{listing.location.clone()}</p>
          <div class="card-price">{price}</div>
          <div class="property-features">
            <Show when={move || beds > 0} fallback=|| ()>
              <span>{beds} " Beds"</span>
            </Show>
            <Show when={move || baths > 0} fallback=|| ()>
              <span>{baths} " Baths"</span>
            </Show>
            <span>{listing.area_sqm} " m²"</span>
          </div>
        </div>
      </a>
    }
}

fn kind_label(option: &str) -> &'static str {
    match option {
        "sale" => "For Sale",
        "rent" => "For Rent",
        _ => "All Types",
    }
}

fn category_label(option: &str) -> String {
    if option == "all" {
        "All Categories".to_string()
    } else {
        option.to_string()
    }
}
