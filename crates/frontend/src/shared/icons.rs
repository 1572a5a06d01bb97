use leptos::prelude::*;

/// Feather icon placeholder, turned into an inline SVG by `feather.replace()`.
pub fn icon(name: &'static str) -> AnyView {
    view! { <i data-feather=name class="w-5 h-5"></i> }.into_any()
}
