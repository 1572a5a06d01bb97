use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    view! {
        <aside data-zone="left" class="left w-64 flex flex-col border-r border-gray-100 bg-background">
            <div class="px-6 py-8 text-xl font-bold text-text-main">"Clínica"</div>
            {children()}
        </aside>
    }
}
