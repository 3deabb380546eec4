pub mod state;

use self::state::{create_state, unique_statuses, visible};
use crate::domain::requests::api;
use crate::shared::components::{EmptyState, StatusBadge};
use crate::shared::format::{format_date, format_vnd};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::request::{request_status_label, Offer, PhotoRequest, RequestStatus};

#[component]
pub fn RequestsList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (selected, set_selected) = signal::<Option<PhotoRequest>>(None);

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::fetch_requests().await {
                Ok(items) => {
                    state.update(|s| {
                        s.items = items;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("requests fetch failed: {}", e);
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
        <div class="page page--requests">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Yêu cầu chụp ảnh"</h1>
                    <span class="page__subtitle">
                        {move || format!("Tổng cộng {} yêu cầu", visible_items.get().len())}
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
                            placeholder="Tìm kiếm theo mã yêu cầu, concept, tỉnh thành..."
                        />
                    </div>
                    <Select value=status_filter>
                        <option value="all">"Tất cả"</option>
                        <For
                            each=move || statuses.get()
                            key=|s| s.clone()
                            children=move |s: String| {
                                let value = s.clone();
                                let label = request_status_label(&s);
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
                        icon_name="camera".to_string()
                        message="Không tìm thấy yêu cầu nào".to_string()
                        hint="Thử thay đổi bộ lọc hoặc từ khóa tìm kiếm".to_string()
                    />
                }
            >
                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Mã yêu cầu"</TableHeaderCell>
                                <TableHeaderCell>"Concept"</TableHeaderCell>
                                <TableHeaderCell>"Ngày chụp"</TableHeaderCell>
                                <TableHeaderCell>"Địa điểm"</TableHeaderCell>
                                <TableHeaderCell>"Ngân sách"</TableHeaderCell>
                                <TableHeaderCell>"Đề nghị"</TableHeaderCell>
                                <TableHeaderCell>"Trạng thái"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible_items.get()
                                key=|r| r.request_id
                                children=move |r: PhotoRequest| {
                                    let tone = RequestStatus::parse(&r.status).tone();
                                    let status_text = request_status_label(&r.status);
                                    let location = r.display_location().to_string();
                                    let offer_count = r.offers.len();
                                    let detail = r.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span class="table__code">{format!("#{}", r.request_code)}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{r.concept.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{format_date(&r.request_date)}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span class="table__with-icon">
                                                        {icon("map-pin")}
                                                        {location}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>{format_vnd(r.estimated_budget)}</TableCell>
                                            <TableCell>{format!("{} đề nghị", offer_count)}</TableCell>
                                            <TableCell>
                                                <StatusBadge tone=Signal::derive(move || tone)>
                                                    {status_text}
                                                </StatusBadge>
                                            </TableCell>
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
                selected.get().map(|r| {
                    let tone = RequestStatus::parse(&r.status).tone();
                    let status_text = request_status_label(&r.status);
                    let location = r.display_location().to_string();
                    let offers = r.offers.clone();
                    view! {
                        <div class="modal-overlay" on:click=move |_| set_selected.set(None)>
                            <div class="modal" on:click=|ev| ev.stop_propagation()>
                                <div class="modal-header">
                                    <h2 class="modal-title">"Chi tiết yêu cầu"</h2>
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
                                            <span class="detail-field__label">"Mã yêu cầu"</span>
                                            <span class="detail-field__value">{format!("#{}", r.request_code)}</span>
                                        </div>
                                        <div class="detail-field">
                                            <span class="detail-field__label">"Trạng thái"</span>
                                            <StatusBadge tone=Signal::derive(move || tone)>
                                                {status_text}
                                            </StatusBadge>
                                        </div>
                                        <div class="detail-field">
                                            <span class="detail-field__label">"Concept"</span>
                                            <span class="detail-field__value">{r.concept.clone()}</span>
                                        </div>
                                        <div class="detail-field">
                                            <span class="detail-field__label">"Ngày chụp"</span>
                                            <span class="detail-field__value">{format_date(&r.request_date)}</span>
                                        </div>
                                        <div class="detail-field">
                                            <span class="detail-field__label">"Địa điểm"</span>
                                            <span class="detail-field__value">{location}</span>
                                        </div>
                                        <div class="detail-field">
                                            <span class="detail-field__label">"Ngân sách dự kiến"</span>
                                            <span class="detail-field__value detail-field__value--accent">
                                                {format_vnd(r.estimated_budget)}
                                            </span>
                                        </div>
                                    </div>

                                    <h3 class="modal__section-title">
                                        {format!("Đề nghị ({})", offers.len())}
                                    </h3>
                                    <Show
                                        when={
                                            let has_offers = !offers.is_empty();
                                            move || has_offers
                                        }
                                        fallback=|| view! {
                                            <p class="modal__empty">"Chưa có đề nghị nào"</p>
                                        }
                                    >
                                        <div class="offer-list">
                                            <For
                                                each={
                                                    let offers = offers.clone();
                                                    move || offers.clone()
                                                }
                                                key=|o| o.offer_id
                                                children=move |o: Offer| {
                                                    let offer_tone =
                                                        RequestStatus::parse(&o.status).tone();
                                                    let offer_status =
                                                        request_status_label(&o.status);
                                                    view! {
                                                        <div class="offer-list__item">
                                                            <div class="offer-list__row">
                                                                <span class="offer-list__price">
                                                                    {format_vnd(o.custom_price)}
                                                                </span>
                                                                <StatusBadge tone=Signal::derive(move || offer_tone)>
                                                                    {offer_status}
                                                                </StatusBadge>
                                                            </div>
                                                            <p class="offer-list__message">{o.message.clone()}</p>
                                                        </div>
                                                    }
                                                }
                                            />
                                        </div>
                                    </Show>
                                </div>
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}
