use crate::bridge;
use crate::components::inquiry_form::InquiryForm;
use leptos::*;
use listing_core::config::SiteConfig;
use listing_core::inquiry::{GENERAL_INQUIRY_ID, GENERAL_INQUIRY_TITLE};
use listing_core::listing::{featured, Listing};
use listing_core::media::resolve_image_url;
use listing_core::query::detail_href;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;

/// Homepage: featured-property highlights plus the general inquiry form.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let listings = create_rw_signal(Vec::<Listing>::new());
    let load_failed = create_rw_signal(false);

    {
        let config = config.clone();
        spawn_local(async move {
            match bridge::fetch_listings(&config).await {
                Ok(feed) => listings.set(feed),
                Err(err) => {
                    logging::error!("failed to load featured properties: {err}");
                    load_failed.set(true);
                }
            }
        });
    }

    let image_base = store_value(config.image_base_url.clone());
    let highlights = move || {
        listings.with(|feed| featured(feed).into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
      <section class="featured" id="featured">
        <h2>"Featured Properties"</h2>
        <Show when=move || load_failed.get() fallback=|| ()>
          <p class="load-error">"Error loading properties."</p>
        </Show>
        <div class="gallery" id="featured-properties">
          <For
            each=highlights
            key=|l| l.id.clone()
            children=move |l| {
              let href = detail_href(&l, "");
              let img = l
                  .cover_image()
                  .map(|path| image_base.with_value(|base| resolve_image_url(base, &path)))
                  .unwrap_or_default();
              view! {
                <a class="gallery-item" href=href>
                  <img class="gallery-img-real" src=img alt=l.title.clone()/>
                  <div class="gallery-info">
                    <h4>{l.title.clone()}</h4>
                    <p>{l.location.clone()}</p>
                  </div>
                </a>
              }
            }
          />
        </div>
      </section>

      <section class="contact" id="contact">
        <h2>"Get In Touch"</h2>
        <InquiryForm
          prop_id=GENERAL_INQUIRY_ID.to_string()
          prop_title=GENERAL_INQUIRY_TITLE.to_string()
          hide_after=Duration::from_secs(5)
        />
      </section>
    }
}
