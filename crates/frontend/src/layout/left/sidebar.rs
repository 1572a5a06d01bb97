//! Sidebar with one navigation link per clinic page.
//!
//! Links only carry `href` and `data-page`; which one looks active is
//! decided by the router on every navigation.

use crate::routes::RouterConfig;
use crate::shared::icons::icon;
use contracts::enums::clinic_page::ClinicPage;
use leptos::prelude::*;

/// Value of the `data-page` marker, e.g. `pacientes` for `/pacientes`.
pub fn page_marker(page: ClinicPage) -> &'static str {
    page.path().trim_start_matches('/')
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let config = use_context::<RouterConfig>().unwrap_or_default();
    // Links start muted; the first dispatch marks the active one.
    let link_class = format!(
        "nav-link flex items-center gap-3 px-4 py-2 rounded-lg transition-colors {}",
        config.muted_classes.join(" ")
    );

    view! {
        <nav class="app-sidebar__content flex flex-col gap-1 px-4">
            {ClinicPage::all().into_iter().map(|page| {
                view! {
                    <a href=page.path() data-page=page_marker(page) class=link_class.clone()>
                        {icon(page.icon())}
                        <span>{page.title()}</span>
                    </a>
                }
            }).collect_view()}
        </nav>
    }
}
