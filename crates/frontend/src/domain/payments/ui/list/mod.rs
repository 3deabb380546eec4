pub mod state;

use self::state::{
    create_state, paid_percentage, paid_total, unique_statuses, unique_types, visible,
};
use crate::domain::payments::api;
use crate::shared::components::{EmptyState, StatCard, StatusBadge};
use crate::shared::format::{format_datetime_secs, format_vnd};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::payment::{
    payment_status_label, payment_type_label, Payment, PaymentStatus, PaymentType,
};

#[component]
pub fn PaymentsList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (selected, set_selected) = signal::<Option<Payment>>(None);

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::fetch_payments().await {
                Ok(resp) => {
                    state.update(|s| {
                        s.items = resp.payments;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("payments fetch failed: {}", e);
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
    let type_filter = RwSignal::new(crate::shared::list_utils::ALL.to_string());
    Effect::new(move || {
        let v = search_query.get();
        untrack(move || state.update(|s| s.search_query = v));
    });
    Effect::new(move || {
        let v = status_filter.get();
        untrack(move || state.update(|s| s.status_filter = v));
    });
    Effect::new(move || {
        let v = type_filter.get();
        untrack(move || state.update(|s| s.type_filter = v));
    });

    let visible_items = Signal::derive(move || {
        state.with(|s| visible(&s.items, &s.search_query, &s.status_filter, &s.type_filter))
    });
    let statuses = Signal::derive(move || state.with(|s| unique_statuses(&s.items)));
    let types = Signal::derive(move || state.with(|s| unique_types(&s.items)));

    // Stat cards are derived from the visible subset, not the raw list.
    let total_count = Signal::derive(move || Some(visible_items.get().len().to_string()));
    let paid_sum = Signal::derive(move || Some(format_vnd(paid_total(&visible_items.get()))));
    let paid_share = Signal::derive(move || {
        let items = visible_items.get();
        let paid = items
            .iter()
            .filter(|p| PaymentStatus::parse(&p.status) == PaymentStatus::Paid)
            .count();
        Some(paid.to_string())
    });
    let paid_share_subtitle = Signal::derive(move || {
        Some(format!(
            "Tỷ lệ thành công {}%",
            paid_percentage(&visible_items.get())
        ))
    });

    view! {
        <div class="page page--payments">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Quản lý thanh toán"</h1>
                    <span class="page__subtitle">
                        {move || format!("Tổng cộng {} giao dịch", visible_items.get().len())}
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

            <div class="stat-grid">
                <StatCard
                    label="Tổng giao dịch".to_string()
                    icon_name="credit-card".to_string()
                    value=total_count
                    subtitle=Signal::derive(|| Some("Tất cả giao dịch".to_string()))
                />
                <StatCard
                    label="Đã thanh toán".to_string()
                    icon_name="dollar".to_string()
                    value=paid_sum
                    subtitle=Signal::derive(|| Some("Tổng số tiền đã thu".to_string()))
                />
                <StatCard
                    label="Giao dịch thành công".to_string()
                    icon_name="trending-up".to_string()
                    value=paid_share
                    subtitle=paid_share_subtitle
                />
            </div>

            <div class="filter-bar">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div style="flex: 1; max-width: 360px;">
                        <Input
                            value=search_query
                            placeholder="Tìm theo mã booking, mã đơn, mã giao dịch..."
                        />
                    </div>
                    <Select value=status_filter>
                        <option value="all">"Tất cả trạng thái"</option>
                        <For
                            each=move || statuses.get()
                            key=|s| s.clone()
                            children=move |s: String| {
                                let value = s.clone();
                                let label = payment_status_label(&s);
                                view! { <option value=value>{label}</option> }
                            }
                        />
                    </Select>
                    <Select value=type_filter>
                        <option value="all">"Tất cả loại"</option>
                        <For
                            each=move || types.get()
                            key=|t| t.clone()
                            children=move |t: String| {
                                let value = t.clone();
                                let label = payment_type_label(&t);
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
                        icon_name="credit-card".to_string()
                        message="Không tìm thấy giao dịch nào".to_string()
                        hint="Thử thay đổi bộ lọc hoặc từ khóa tìm kiếm".to_string()
                    />
                }
            >
                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Mã Booking"</TableHeaderCell>
                                <TableHeaderCell>"Mã đơn hàng"</TableHeaderCell>
                                <TableHeaderCell>"Số tiền"</TableHeaderCell>
                                <TableHeaderCell>"Loại"</TableHeaderCell>
                                <TableHeaderCell>"Trạng thái"</TableHeaderCell>
                                <TableHeaderCell>"Ngày thanh toán"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible_items.get()
                                key=|p| p.payment_id.clone()
                                children=move |p: Payment| {
                                    let status_tone = PaymentStatus::parse(&p.status).tone();
                                    let status_text = payment_status_label(&p.status);
                                    let type_tone = PaymentType::parse(&p.payment_type).tone();
                                    let type_text = payment_type_label(&p.payment_type);
                                    let detail = p.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span class="table__code">{format!("#{}", p.booking_code)}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{p.order_code.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{format_vnd(p.amount)}</TableCell>
                                            <TableCell>
                                                <StatusBadge tone=Signal::derive(move || type_tone)>
                                                    {type_text}
                                                </StatusBadge>
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge tone=Signal::derive(move || status_tone)>
                                                    {status_text}
                                                </StatusBadge>
                                            </TableCell>
                                            <TableCell>{format_datetime_secs(&p.paid_at)}</TableCell>
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
                selected.get().map(|p| {
                    let status_tone = PaymentStatus::parse(&p.status).tone();
                    let status_text = payment_status_label(&p.status);
                    let type_tone = PaymentType::parse(&p.payment_type).tone();
                    let type_text = payment_type_label(&p.payment_type);
                    view! {
                        <div class="modal-overlay" on:click=move |_| set_selected.set(None)>
                            <div class="modal" on:click=|ev| ev.stop_propagation()>
                                <div class="modal-header">
                                    <h2 class="modal-title">"Chi tiết thanh toán"</h2>
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
                                            <span class="detail-field__label">"Mã giao dịch"</span>
                                            <span class="detail-field__value">{p.payment_id.clone()}</span>
                                        </div>
                                        <div class="detail-field">
                                            <span class="detail-field__label">"Mã Booking"</span>
                                            <span class="detail-field__value">{format!("#{}", p.booking_code)}</span>
                                        </div>
                                        <div class="detail-field">
                                            <span class="detail-field__label">"Mã đơn hàng"</span>
                                            <span class="detail-field__value">{p.order_code.clone()}</span>
                                        </div>
                                        <div class="detail-field">
                                            <span class="detail-field__label">"Số tiền"</span>
                                            <span class="detail-field__value detail-field__value--accent">
                                                {format_vnd(p.amount)}
                                            </span>
                                        </div>
                                        <div class="detail-field">
                                            <span class="detail-field__label">"Loại thanh toán"</span>
                                            <StatusBadge tone=Signal::derive(move || type_tone)>
                                                {type_text}
                                            </StatusBadge>
                                        </div>
                                        <div class="detail-field">
                                            <span class="detail-field__label">"Trạng thái"</span>
                                            <StatusBadge tone=Signal::derive(move || status_tone)>
                                                {status_text}
                                            </StatusBadge>
                                        </div>
                                        <div class="detail-field">
                                            <span class="detail-field__label">"Thời gian"</span>
                                            <span class="detail-field__value">
                                                {format_datetime_secs(&p.paid_at)}
                                            </span>
                                        </div>
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
