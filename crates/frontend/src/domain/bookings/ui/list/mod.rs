pub mod state;

use self::state::{create_state, unique_statuses, visible};
use crate::domain::bookings::api;
use crate::shared::components::{EmptyState, StatusBadge};
use crate::shared::format::{format_date, format_vnd};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::booking::{booking_status_label, Booking, BookingStatus};
use contracts::domain::payment::payment_status_label;

#[component]
pub fn BookingsList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (selected, set_selected) = signal::<Option<Booking>>(None);

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::fetch_bookings().await {
                Ok(items) => {
                    state.update(|s| {
                        s.items = items;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("bookings fetch failed: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_items();
        }
    });

    let search_query = RwSignal::new(String::new());
    let status_filter = RwSignal::new(crate::shared::list_utils::ALL.to_string());
    Effect::new(move || {
        let v = search_query.get();
        untrack(move || state.update(|s| s.search_query = v));
    });
    Effect::new(move || {
        let v = status_filter.get();
        untrack(move || state.update(|s| s.status_filter = v));
    });

    let visible_items = Signal::derive(move || {
        state.with(|s| visible(&s.items, &s.search_query, &s.status_filter))
    });
    let statuses = Signal::derive(move || state.with(|s| unique_statuses(&s.items)));

    view! {
        <div class="page page--bookings">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Quản lý Booking"</h1>
                    <span class="page__subtitle">
                        {move || format!("Tổng cộng {} booking", visible_items.get().len())}
                    </span>
                </div>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_items()
                    disabled=Signal::derive(move || loading.get())
                >
                    {move || if loading.get() { "Đang tải..." } else { "Làm mới" }}
                </Button>
            </div>

            <div class="filter-bar">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div style="flex: 1; max-width: 360px;">
                        <Input
                            value=search_query
                            placeholder="Tìm kiếm theo mã booking, concept, tỉnh thành..."
                        />
                    </div>
                    <Select value=status_filter>
                        <option value="all">"Tất cả"</option>
                        <For
                            each=move || statuses.get()
                            key=|s| s.clone()
                            children=move |s: String| {
                                let value = s.clone();
                                let label = booking_status_label(&s);
                                view! { <option value=value>{label}</option> }
                            }
                        />
                    </Select>
                </Flex>
            </div>

            {move || {
                error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })
            }}

            <Show
                when=move || !visible_items.get().is_empty() || loading.get()
                fallback=move || view! {
                    <EmptyState
                        icon_name="calendar".to_string()
                        message="Không tìm thấy booking nào".to_string()
                        hint="Thử thay đổi bộ lọc hoặc từ khóa tìm kiếm".to_string()
                    />
                }
            >
                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Mã Booking"</TableHeaderCell>
                                <TableHeaderCell>"Concept"</TableHeaderCell>
                                <TableHeaderCell>"Loại chụp"</TableHeaderCell>
                                <TableHeaderCell>"Ngày chụp"</TableHeaderCell>
                                <TableHeaderCell>"Địa điểm"</TableHeaderCell>
                                <TableHeaderCell>"Tổng tiền"</TableHeaderCell>
                                <TableHeaderCell>"Trạng thái"</TableHeaderCell>
                                <TableHeaderCell>"Thanh toán"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible_items.get()
                                key=|b| b.booking_id
                                children=move |b: Booking| {
                                    let tone = BookingStatus::parse(&b.status).tone();
                                    let status_text = booking_status_label(&b.status);
                                    let payment_text = b
                                        .payment_status
                                        .as_deref()
                                        .map(payment_status_label)
                                        .unwrap_or_else(|| "\u{2014}".to_string());
                                    let location = b.display_location().to_string();
                                    let detail = b.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span class="table__code">{format!("#{}", b.booking_code)}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{b.concept.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{b.shooting_type.clone()}</TableCell>
                                            <TableCell>{format_date(&b.booking_date)}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span class="table__with-icon">
                                                        {icon("map-pin")}
                                                        {location}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>{format_vnd(b.total_price)}</TableCell>
                                            <TableCell>
                                                <StatusBadge tone=Signal::derive(move || tone)>
                                                    {status_text}
                                                </StatusBadge>
                                            </TableCell>
                                            <TableCell>{payment_text}</TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| set_selected.set(Some(detail.clone()))
                                                >
                                                    {icon("eye")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </Show>

            <Show when=move || loading.get()>
                <div class="page__loading"><Spinner /></div>
            </Show>

            {move || {
                selected.get().map(|b| {
                    let tone = BookingStatus::parse(&b.status).tone();
                    let status_text = booking_status_label(&b.status);
                    let location = match b.custom_location.as_deref() {
                        Some(loc) if !loc.trim().is_empty() => {
                            format!("{} ({})", loc, b.province)
                        }
                        _ => b.province.clone(),
                    };
                    view! {
                        <div class="modal-overlay" on:click=move |_| set_selected.set(None)>
                            <div class="modal" on:click=|ev| ev.stop_propagation()>
                                <div class="modal-header">
                                    <h2 class="modal-title">"Chi tiết booking"</h2>
                                    <button
                                        class="button button--icon modal__close"
                                        on:click=move |_| set_selected.set(None)
                                    >
                                        {icon("x")}
                                    </button>
                                </div>
                                <div class="modal-body">
                                    <div class="detail-grid">
                                        <div class="detail-field">
                                            <span class="detail-field__label">"Mã Booking"</span>
                                            <span class="detail-field__value">{format!("#{}", b.booking_code)}</span>
                                        </div>
                                        <div class="detail-field">
                                            <span class="detail-field__label">"Trạng thái"</span>
                                            <StatusBadge tone=Signal::derive(move || tone)>
                                                {status_text}
                                            </StatusBadge>
                                        </div>
                                        <div class="detail-field">
                                            <span class="detail-field__label">"Concept"</span>
                                            <span class="detail-field__value">{b.concept.clone()}</span>
                                        </div>
                                        <div class="detail-field">
                                            <span class="detail-field__label">"Loại chụp"</span>
                                            <span class="detail-field__value">{b.shooting_type.clone()}</span>
                                        </div>
                                        <div class="detail-field">
                                            <span class="detail-field__label">"Số lượng"</span>
                                            <span class="detail-field__value">{format!("{} người", b.quantity)}</span>
                                        </div>
                                        <div class="detail-field">
                                            <span class="detail-field__label">"Ngày chụp"</span>
                                            <span class="detail-field__value">{format_date(&b.booking_date)}</span>
                                        </div>
                                        <div class="detail-field">
                                            <span class="detail-field__label">"Ngày tạo"</span>
                                            <span class="detail-field__value">{format_date(&b.created_at)}</span>
                                        </div>
                                        <div class="detail-field">
                                            <span class="detail-field__label">"Địa điểm"</span>
                                            <span class="detail-field__value">{location}</span>
                                        </div>
                                        <div class="detail-field">
                                            <span class="detail-field__label">"Tổng tiền"</span>
                                            <span class="detail-field__value detail-field__value--accent">
                                                {format_vnd(b.total_price)}
                                            </span>
                                        </div>
                                        {b.discount_code.clone().map(|code| view! {
                                            <div class="detail-field">
                                                <span class="detail-field__label">"Mã giảm giá"</span>
                                                <span class="detail-field__value">{code}</span>
                                            </div>
                                        })}
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}
