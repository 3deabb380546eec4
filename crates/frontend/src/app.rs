use crate::dashboards::overview::ui::OverviewDashboard;
use crate::domain::bookings::ui::list::BookingsList;
use crate::domain::payments::ui::list::PaymentsList;
use crate::domain::requests::ui::list::RequestsList;
use crate::domain::reviews::ui::list::ReviewsList;
use crate::domain::users::ui::list::UsersList;
use crate::layout::nav::{AdminPage, NavState};
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Navigation state is shared via context with the sidebar and header.
    let nav = NavState::new();
    provide_context(nav);

    view! {
        <Shell content=move || {
            match nav.current.get() {
                AdminPage::Dashboard => view! { <OverviewDashboard /> }.into_any(),
                AdminPage::Users => view! { <UsersList /> }.into_any(),
                AdminPage::Bookings => view! { <BookingsList /> }.into_any(),
                AdminPage::Requests => view! { <RequestsList /> }.into_any(),
                AdminPage::Payments => view! { <PaymentsList /> }.into_any(),
                AdminPage::Reviews => view! { <ReviewsList /> }.into_any(),
            }
        } />
    }
}
