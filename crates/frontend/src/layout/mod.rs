pub mod header;
pub mod nav;
pub mod sidebar;

use header::Header;
use leptos::prelude::*;
use sidebar::Sidebar;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |           |           Header             |
/// |  Sidebar  +------------------------------+
/// |           |           Content            |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell<C>(content: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <Sidebar />
            <div class="app-main">
                <Header />
                <main class="app-content">
                    {content}
                </main>
            </div>
        </div>
    }
}
