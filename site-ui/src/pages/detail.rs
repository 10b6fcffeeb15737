use crate::bridge;
use crate::components::inquiry_form::InquiryForm;
use crate::nav;
use leptos::*;
use listing_core::carousel::Carousel;
use listing_core::config::SiteConfig;
use listing_core::format::price_label;
use listing_core::listing::{find_listing, Listing};
use listing_core::media::resolve_image_url;
use listing_core::query::back_href;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq)]
enum DetailState {
    Loading,
    Ready(Listing),
    NotFound,
    Failed,
}

/// Property detail page: resolves one listing by `id` (exact) with a
/// derived-slug fallback, then binds its fields, the image carousel, and
/// the contact modal.
#[component]
pub fn DetailPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let state = create_rw_signal(DetailState::Loading);

    let id_param = nav::query_param("id");
    let slug_param = nav::query_param("slug");
    let ref_param = nav::query_param("ref");

    if id_param.is_none() && slug_param.is_none() {
        state.set(DetailState::NotFound);
    } else {
        let config = config.clone();
        spawn_local(async move {
            match bridge::fetch_listings(&config).await {
                Ok(feed) => {
                    match find_listing(&feed, id_param.as_deref(), slug_param.as_deref()) {
                        Some(listing) => state.set(DetailState::Ready(listing.clone())),
                        None => state.set(DetailState::NotFound),
                    }
                }
                Err(err) => {
                    logging::error!("failed to load property: {err}");
                    state.set(DetailState::Failed);
                }
            }
        });
    }

    let back = ref_param
        .as_deref()
        .map(back_href)
        .unwrap_or_else(|| "properties.html".to_string());

    view! {
      <a class="back-link" href=back>"Back to Properties"</a>
      {move || match state.get() {
          DetailState::Loading => view! {
            <p id="loading-state">"Loading property..."</p>
          }
          .into_view(),
          DetailState::Failed => view! {
            <p class="load-error">"Error loading property. Please try again."</p>
          }
          .into_view(),
          DetailState::NotFound => view! {
            <p class="not-found">
              "Property not found. " <a href="properties.html">"Return to listings"</a> "."
            </p>
          }
          .into_view(),
          DetailState::Ready(listing) => view! { <PropertyContent listing/> }.into_view(),
      }}
    }
}

#[component]
fn PropertyContent(listing: Listing) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let images: Vec<String> = listing
        .gallery()
        .iter()
        .map(|path| resolve_image_url(&config.image_base_url, path))
        .collect();
    let agent = listing.agent_contact();
    let price = price_label(&listing.currency, listing.price);
    let status = listing.status_label();
    let description = listing.description_text().to_string();
    let beds = listing.beds;
    let baths = listing.baths;
    let amenities = listing.amenities.clone();

    let modal_open = create_rw_signal(false);

    view! {
      <article class="property" id="property-content">
        <ImageCarousel images/>

        <header class="property-header">
          <span class="status-badge" id="prop-status">{status}</span>
          <h1 id="prop-title">{listing.title.clone()}</h1>
          <p id="prop-location">{listing.location.clone()}</p>
          <div id="prop-price">{price}</div>
        </header>

        <ul class="property-stats">
          <Show when={move || beds > 0} fallback=|| ()>
            <li id="prop-beds">{beds} " Beds"</li>
          </Show>
          <Show when={move || baths > 0} fallback=|| ()>
            <li id="prop-baths">{baths} " Baths"</li>
          </Show>
          <li id="prop-area">{listing.area_sqm} " m²"</li>
          <li id="prop-category">{listing.category.clone()}</li>
        </ul>

        <p id="prop-long-desc">{description}</p>

        <Show when={let any = !amenities.is_empty(); move || any} fallback=|| ()>
          <ul class="amenities" id="prop-amenities-list">
            {amenities
                .iter()
                .map(|a| view! { <li>{a.clone()}</li> })
                .collect_view()}
          </ul>
        </Show>

        <AgentCard name=agent.name phone=agent.phone/>

        <button id="open-contact-modal" on:click=move |_| modal_open.set(true)>
          "Contact Agent"
        </button>

        <ContactModal
          open=modal_open
          prop_id=listing.id.clone()
          prop_title=listing.title.clone()
        />
      </article>
    }
}

#[component]
fn ImageCarousel(images: Vec<String>) -> impl IntoView {
    let carousel = create_rw_signal(Carousel::new(images.len()));
    let dot_count = images.len();

    view! {
      <div class="carousel">
        <div
          class="carousel-slides"
          id="carousel-slides"
          style=move || format!("transform: translateX(-{}%)", carousel.get().offset_percent())
        >
          {images
              .iter()
              .map(|src| view! { <div class="slide"><img src=src.clone()/></div> })
              .collect_view()}
        </div>
        <Show when=move || carousel.with(|c| c.has_controls()) fallback=|| ()>
          <button
            class="carousel-btn prev"
            id="prev-btn"
            on:click=move |_| carousel.update(|c| c.prev())
          >
            "\u{2039}"
          </button>
          <button
            class="carousel-btn next"
            id="next-btn"
            on:click=move |_| carousel.update(|c| c.next())
          >
            "\u{203a}"
          </button>
        </Show>
        <div class="carousel-dots" id="carousel-dots">
          {(0..dot_count)
              .map(|i| {
                  view! {
                    <span
                      class=move || {
                          if carousel.with(|c| c.current()) == i { "dot active" } else { "dot" }
                      }
                      on:click=move |_| carousel.update(|c| c.go_to(i))
                    ></span>
                  }
              })
              .collect_view()}
        </div>
      </div>
    }
}

#[component]
fn AgentCard(name: String, phone: Option<String>) -> impl IntoView {
    // Revealing the number is a one-way transition for this page view.
    let revealed = create_rw_signal(false);

    let href = phone
        .as_deref()
        .map(|p| format!("tel:{p}"))
        .unwrap_or_else(|| "#".to_string());
    let reveal_text = phone.clone().unwrap_or_default();
    let has_phone = phone.is_some();

    let on_call = move |ev: ev::MouseEvent| {
        // Small viewports hand off to the OS dialer via the default tel:
        // navigation; larger ones reveal the number inline instead.
        if has_phone && !nav::is_mobile_viewport() {
            ev.prevent_default();
            revealed.set(true);
        }
    };

    view! {
      <div class="agent-card">
        <span id="agent-name">{name}</span>
        <a
          id="agent-call"
          href=href
          class=move || if revealed.get() { "call-btn revealed" } else { "call-btn" }
          on:click=on_call
        >
          {move || {
              if revealed.get() { reveal_text.clone() } else { "Call Agent".to_string() }
          }}
        </a>
      </div>
    }
}

#[component]
fn ContactModal(open: RwSignal<bool>, prop_id: String, prop_title: String) -> impl IntoView {
    // Close the modal a beat after a successful submission so the success
    // banner is seen first.
    let on_success = Callback::new(move |_| {
        set_timeout(move || open.set(false), Duration::from_secs(3));
    });

    let backdrop_close = move |ev: ev::MouseEvent| {
        // Only a click on the backdrop itself closes; clicks inside the
        // dialog reach here with a different target.
        if ev.target() == ev.current_target() {
            open.set(false);
        }
    };

    let title = prop_title.clone();
    view! {
      <Show when=move || open.get() fallback=|| ()>
        <div class="modal" id="contact-modal" on:click=backdrop_close>
          <div class="modal-content">
            <button class="close-modal" id="close-modal" on:click=move |_| open.set(false)>
              "\u{00d7}"
            </button>
            <h3 id="modal-prop-title">{title.clone()}</h3>
            <InquiryForm
              prop_id=prop_id.clone()
              prop_title=prop_title.clone()
              hide_after=Duration::from_secs(3)
              on_success=on_success
            />
          </div>
        </div>
      </Show>
    }
}
