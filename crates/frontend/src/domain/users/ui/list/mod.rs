pub mod state;

use self::state::{active_count, create_state, role_count, visible};
use crate::domain::users::api;
use crate::shared::components::{EmptyState, StatCard, StatusBadge};
use crate::shared::format::format_date;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::user::{user_role_label, AdminUser, UserRole};
use contracts::shared::status::StatusTone;

const PAGE_SIZE: u32 = 100;

#[component]
pub fn UsersList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    // user whose status toggle is in flight; its button is disabled
    let (toggling, set_toggling) = signal::<Option<i64>>(None);

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            let role = state.with_untracked(|s| s.role_filter.clone());
            match api::fetch_users(1, PAGE_SIZE, &role).await {
                Ok(resp) => {
                    state.update(|s| {
                        s.items = resp.users;
                        s.total = resp.total;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("users fetch failed: {}", e);
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

    let toggle_status = move |user_id: i64, new_status: bool| {
        spawn_local(async move {
            set_toggling.set(Some(user_id));
            match api::update_user_status(user_id, new_status).await {
                Ok(()) => {
                    // Reflect locally only after the backend accepted it.
                    state.update(|s| {
                        if let Some(u) = s.items.iter_mut().find(|u| u.user_id == user_id) {
                            u.is_active = new_status;
                        }
                    });
                }
                Err(e) => {
                    log::error!("user status update failed: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_toggling.set(None);
        });
    };

    let search_query = RwSignal::new(String::new());
    let role_filter = RwSignal::new(crate::shared::list_utils::ALL.to_string());
    Effect::new(move || {
        let v = search_query.get();
        untrack(move || state.update(|s| s.search_query = v));
    });
    // A role change requires a new server query, unlike the search box.
    Effect::new(move || {
        let v = role_filter.get();
        untrack(move || {
            let changed = state.with_untracked(|s| s.role_filter != v);
            if changed {
                state.update(|s| s.role_filter = v);
                load_items();
            }
        });
    });

    let visible_items = Signal::derive(move || {
        state.with(|s| visible(&s.items, &s.search_query, &s.role_filter))
    });

    let total_users = Signal::derive(move || Some(state.with(|s| s.total.to_string())));
    let active_users = Signal::derive(move || {
        Some(state.with(|s| active_count(&s.items).to_string()))
    });
    let customers = Signal::derive(move || {
        Some(state.with(|s| role_count(&s.items, UserRole::Customer).to_string()))
    });
    let photographers = Signal::derive(move || {
        Some(state.with(|s| role_count(&s.items, UserRole::Photographer).to_string()))
    });

    view! {
        <div class="page page--users">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Quản lý người dùng"</h1>
                    <span class="page__subtitle">
                        {move || format!("Tổng cộng {} người dùng", visible_items.get().len())}
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
                    label="Tổng người dùng".to_string()
                    icon_name="users".to_string()
                    value=total_users
                />
                <StatCard
                    label="Đang hoạt động".to_string()
                    icon_name="trending-up".to_string()
                    value=active_users
                />
                <StatCard
                    label="Khách hàng".to_string()
                    icon_name="users".to_string()
                    value=customers
                />
                <StatCard
                    label="Nhiếp ảnh gia".to_string()
                    icon_name="camera".to_string()
                    value=photographers
                />
            </div>

            <div class="filter-bar">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div style="flex: 1; max-width: 360px;">
                        <Input
                            value=search_query
                            placeholder="Tìm theo tên, email, số điện thoại..."
                        />
                    </div>
                    <Select value=role_filter>
                        <option value="all">"Tất cả"</option>
                        <option value="customer">"Khách hàng"</option>
                        <option value="photographer">"Nhiếp ảnh gia"</option>
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
                        icon_name="users".to_string()
                        message="Không tìm thấy người dùng nào".to_string()
                        hint="Thử thay đổi bộ lọc hoặc từ khóa tìm kiếm".to_string()
                    />
                }
            >
                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Họ tên"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Số điện thoại"</TableHeaderCell>
                                <TableHeaderCell>"Vai trò"</TableHeaderCell>
                                <TableHeaderCell>"Tỉnh thành"</TableHeaderCell>
                                <TableHeaderCell>"Ngày tạo"</TableHeaderCell>
                                <TableHeaderCell>"Trạng thái"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible_items.get()
                                key=|u| u.user_id
                                children=move |u: AdminUser| {
                                    let role_tone = UserRole::parse(&u.role).tone();
                                    let role_text = user_role_label(&u.role);
                                    let province = u.province.clone().unwrap_or_default();
                                    let user_id = u.user_id;
                                    let is_active = u.is_active;
                                    let row_busy = Signal::derive(move || {
                                        toggling.get() == Some(user_id)
                                    });
                                    let active_tone = if is_active {
                                        StatusTone::Success
                                    } else {
                                        StatusTone::Danger
                                    };
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{u.full_name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{u.email.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{u.phone_number.clone()}</TableCell>
                                            <TableCell>
                                                <StatusBadge tone=Signal::derive(move || role_tone)>
                                                    {role_text}
                                                </StatusBadge>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{province}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{format_date(&u.created_at)}</TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <StatusBadge tone=Signal::derive(move || active_tone)>
                                                        {if is_active { "Hoạt động" } else { "Đã khóa" }}
                                                    </StatusBadge>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| toggle_status(user_id, !is_active)
                                                        disabled=row_busy
                                                    >
                                                        {if is_active { "Khóa" } else { "Mở khóa" }}
                                                    </Button>
                                                </Flex>
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
        </div>
    }
}
