pub mod center;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Page shell the router renders into.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |  Sidebar  |          TopHeader            |
/// |   (Left)  +-------------------------------+
/// |           |     Content (Center)          |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout flex h-screen bg-background">
            <left::Left>
                {left()}
            </left::Left>

            <div class="app-main flex-1 flex flex-col overflow-hidden">
                <TopHeader />
                {center()}
            </div>
        </div>
    }
}
