use crate::bridge;
use leptos::*;
use listing_core::config::SiteConfig;
use listing_core::inquiry::{FormPhase, LeadPayload};
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;

/// Shared inquiry form used by the homepage and the detail-page modal.
///
/// While the POST is in flight every field and the submit control are
/// disabled. Success clears the fields, fires `on_success`, and hides the
/// status banner after `hide_after`; failure keeps the typed contents so a
/// resubmission needs no retyping.
#[component]
pub fn InquiryForm(
    #[prop(into)] prop_id: MaybeSignal<String>,
    #[prop(into)] prop_title: MaybeSignal<String>,
    hide_after: Duration,
    #[prop(optional, into)] on_success: Option<Callback<()>>,
) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let phase = create_rw_signal(FormPhase::Idle);
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let message = create_rw_signal(String::new());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked().is_busy() {
            return;
        }

        let payload = LeadPayload {
            prop_id: prop_id.get_untracked(),
            prop_title: prop_title.get_untracked(),
            name: name.get_untracked(),
            email: email.get_untracked(),
            contact_number: phone.get_untracked(),
            message: message.get_untracked(),
        };

        phase.set(FormPhase::Sending);
        let config = config.clone();
        spawn_local(async move {
            match bridge::submit_lead(&config, &payload).await {
                Ok(()) => {
                    phase.set(FormPhase::Sent);
                    name.set(String::new());
                    email.set(String::new());
                    phone.set(String::new());
                    message.set(String::new());
                    if let Some(cb) = on_success {
                        cb.call(());
                    }
                    set_timeout(
                        move || {
                            if phase.get_untracked() == FormPhase::Sent {
                                phase.set(FormPhase::Idle);
                            }
                        },
                        hide_after,
                    );
                }
                Err(err) => {
                    logging::error!("lead submission failed: {err}");
                    phase.set(FormPhase::Failed);
                }
            }
        });
    };

    let busy = move || phase.get().is_busy();

    view! {
      <form class="inquiry-form" on:submit=submit>
        <input
          type="text"
          placeholder="Your Name"
          required
          prop:value=move || name.get()
          prop:disabled=busy
          on:input=move |ev| name.set(event_target_value(&ev))
        />
        <input
          type="email"
          placeholder="Your Email"
          required
          prop:value=move || email.get()
          prop:disabled=busy
          on:input=move |ev| email.set(event_target_value(&ev))
        />
        <input
          type="tel"
          placeholder="Contact Number"
          required
          prop:value=move || phone.get()
          prop:disabled=busy
          on:input=move |ev| phone.set(event_target_value(&ev))
        />
        <textarea
          placeholder="Your Message"
          required
          prop:value=move || message.get()
          prop:disabled=busy
          on:input=move |ev| message.set(event_target_value(&ev))
        ></textarea>
        <button type="submit" prop:disabled=busy>"Send Message"</button>
        <Show when=move || phase.get().banner_visible() fallback=|| ()>
          <div class=move || format!("form-status-msg {}", status_class(phase.get()))>
            {move || status_text(phase.get())}
          </div>
        </Show>
      </form>
    }
}

fn status_class(phase: FormPhase) -> &'static str {
    match phase {
        FormPhase::Idle => "",
        FormPhase::Sending => "loading",
        FormPhase::Sent => "success",
        FormPhase::Failed => "error",
    }
}

fn status_text(phase: FormPhase) -> &'static str {
    match phase {
        FormPhase::Idle => "",
        FormPhase::Sending => "Sending your message...",
        FormPhase::Sent => "Message sent successfully! We will contact you soon.",
        FormPhase::Failed => "Error sending message. Please try again.",
    }
}
