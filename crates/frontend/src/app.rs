use crate::layout::center::ContentArea;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::routes::RouterConfig;
use leptos::prelude::*;

/// Static page shell. The router owns everything inside the content area.
#[component]
pub fn App(config: RouterConfig) -> impl IntoView {
    // Sidebar and header read DOM hooks from the same config the router uses.
    provide_context(config);

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <ContentArea /> }.into_any()
        />
    }
}
