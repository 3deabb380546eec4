pub mod state;

use self::state::{average_rating, create_state, five_star_count, visible};
use crate::domain::reviews::api;
use crate::shared::components::{EmptyState, StatCard, StatusBadge};
use crate::shared::format::format_datetime;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::review::{rating_tone, Review};

#[component]
pub fn ReviewsList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    // review selected for deletion; Some(id) shows the confirm dialog
    let (pending_delete, set_pending_delete) = signal::<Option<i64>>(None);
    let (deleting, set_deleting) = signal(false);

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::fetch_reviews().await {
                Ok(resp) => {
                    state.update(|s| {
                        s.items = resp.reviews;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("reviews fetch failed: {}", e);
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

    let confirm_delete = move || {
        let Some(review_id) = pending_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            set_deleting.set(true);
            match api::delete_review(review_id).await {
                Ok(()) => {
                    // Drop locally only after the backend confirmed, then
                    // refetch so the total stays in sync.
                    state.update(|s| s.items.retain(|r| r.review_id != review_id));
                    set_pending_delete.set(None);
                    load_items();
                }
                Err(e) => {
                    log::error!("review delete failed: {}", e);
                    set_error.set(Some(e));
                    set_pending_delete.set(None);
                }
            }
            set_deleting.set(false);
        });
    };

    let search_query = RwSignal::new(String::new());
    let rating_filter = RwSignal::new(crate::shared::list_utils::ALL.to_string());
    Effect::new(move || {
        let v = search_query.get();
        untrack(move || state.update(|s| s.search_query = v));
    });
    Effect::new(move || {
        let v = rating_filter.get();
        untrack(move || state.update(|s| s.rating_filter = v));
    });

    let visible_items = Signal::derive(move || {
        state.with(|s| visible(&s.items, &s.search_query, &s.rating_filter))
    });

    let total_count = Signal::derive(move || Some(visible_items.get().len().to_string()));
    let avg_value = Signal::derive(move || {
        Some(format!("{:.1}", average_rating(&visible_items.get())))
    });
    let five_stars = Signal::derive(move || {
        Some(five_star_count(&visible_items.get()).to_string())
    });

    view! {
        <div class="page page--reviews">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Quản lý đánh giá"</h1>
                    <span class="page__subtitle">
                        {move || format!("Tổng cộng {} đánh giá", visible_items.get().len())}
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
                    label="Tổng đánh giá".to_string()
                    icon_name="message".to_string()
                    value=total_count
                    subtitle=Signal::derive(|| Some("Tất cả đánh giá".to_string()))
                />
                <StatCard
                    label="Đánh giá trung bình".to_string()
                    icon_name="star".to_string()
                    value=avg_value
                />
                <StatCard
                    label="Đánh giá 5 sao".to_string()
                    icon_name="trending-up".to_string()
                    value=five_stars
                />
            </div>

            <div class="filter-bar">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div style="flex: 1; max-width: 360px;">
                        <Input
                            value=search_query
                            placeholder="Tìm theo tên khách hàng hoặc nội dung..."
                        />
                    </div>
                    <Select value=rating_filter>
                        <option value="all">"Tất cả sao"</option>
                        <option value="5">"5 sao"</option>
                        <option value="4">"4 sao"</option>
                        <option value="3">"3 sao"</option>
                        <option value="2">"2 sao"</option>
                        <option value="1">"1 sao"</option>
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
                        icon_name="star".to_string()
                        message="Không tìm thấy đánh giá nào".to_string()
                        hint="Thử thay đổi bộ lọc hoặc từ khóa tìm kiếm".to_string()
                    />
                }
            >
                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Khách hàng"</TableHeaderCell>
                                <TableHeaderCell>"Số sao"</TableHeaderCell>
                                <TableHeaderCell>"Nội dung"</TableHeaderCell>
                                <TableHeaderCell>"Ngày tạo"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible_items.get()
                                key=|r| r.review_id
                                children=move |r: Review| {
                                    let tone = rating_tone(r.rating);
                                    let name = r.display_name().to_string();
                                    let review_id = r.review_id;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge tone=Signal::derive(move || tone)>
                                                    {format!("{} sao", r.rating)}
                                                </StatusBadge>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{r.comment.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{format_datetime(&r.created_at)}</TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| set_pending_delete.set(Some(review_id))
                                                >
                                                    {icon("trash")}
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

            <Show when=move || pending_delete.get().is_some()>
                <div class="modal-overlay" on:click=move |_| set_pending_delete.set(None)>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <div class="modal-header">
                            <h2 class="modal-title">"Xác nhận xóa đánh giá"</h2>
                        </div>
                        <div class="modal-body">
                            <p>"Bạn có chắc chắn muốn xóa đánh giá này không? Hành động này không thể hoàn tác."</p>
                        </div>
                        <div class="modal-footer">
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| set_pending_delete.set(None)
                                disabled=Signal::derive(move || deleting.get())
                            >
                                "Hủy"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| confirm_delete()
                                disabled=Signal::derive(move || deleting.get())
                            >
                                {move || if deleting.get() { "Đang xóa..." } else { "Xóa đánh giá" }}
                            </Button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
