//! TopHeader component - breadcrumb and user badge.

use crate::routes::RouterConfig;
use crate::shared::icons::icon;
use contracts::shared::navigation::DEFAULT_PAGE;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let config = use_context::<RouterConfig>().unwrap_or_default();

    view! {
        <header class="top-header flex items-center justify-between px-8 py-6">
            <div class="top-header__brand flex items-center gap-2 text-sm text-text-muted">
                <span>"Painel"</span>
                {icon("chevron-right")}
                <span id=config.breadcrumb_id class="font-medium text-text-main">
                    {DEFAULT_PAGE.title()}
                </span>
            </div>

            <div class="top-header__actions flex items-center gap-4">
                <button class="top-header__icon-btn p-2 rounded-full hover:bg-surface" title="Notificações">
                    {icon("bell")}
                </button>
                <div class="top-header__user flex items-center gap-2 text-sm text-text-main">
                    {icon("user")}
                    <span>"Admin"</span>
                </div>
            </div>
        </header>
    }
}
