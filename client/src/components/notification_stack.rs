//! Stacked toast notifications in the top-right corner.

use leptos::prelude::*;

use crate::util::notify::use_notifier;

#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifier = use_notifier();
    let items = move || notifier.state().get().items;

    view! {
        <div class="notification-stack" aria-live="polite">
            <For each=items key=|n| (n.id, n.generation, n.leaving) let:item>
                {
                    let id = item.id;
                    view! {
                        <div class=item.class_name() role="status">
                            <div class="notification-content">
                                <span class="notification-icon">{item.kind.icon()}</span>
                                <span class="notification-message">{item.message.clone()}</span>
                                <button
                                    class="notification-close"
                                    aria-label="Dismiss"
                                    on:click=move |_| notifier.dismiss(id)
                                >
                                    "×"
                                </button>
                            </div>
                        </div>
                    }
                }
            </For>
        </div>
    }
}
