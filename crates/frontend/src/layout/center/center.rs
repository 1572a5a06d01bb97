use crate::routes::RouterConfig;
use leptos::prelude::*;

/// Empty container; its children are replaced wholesale by the router.
#[component]
pub fn ContentArea() -> impl IntoView {
    let config = use_context::<RouterConfig>().unwrap_or_default();

    view! {
        <main data-zone="center" class="flex-1 overflow-auto px-8 pb-8">
            <div id=config.content_container_id></div>
        </main>
    }
}
