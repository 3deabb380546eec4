use crate::dashboards::overview::api;
use crate::shared::components::StatCard;
use crate::shared::format::format_vnd;
use crate::shared::stats::growth_rate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::dashboards::overview::{MonthlyComparison, RevenuePoint, Timeframe};
use contracts::domain::booking::BookingDistribution;
use contracts::domain::request::RequestDistribution;

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let (comparison, set_comparison) = signal::<Option<MonthlyComparison>>(None);
    let (distribution, set_distribution) = signal::<Option<BookingDistribution>>(None);
    let (request_distribution, set_request_distribution) =
        signal::<Option<RequestDistribution>>(None);
    let (revenue, set_revenue) = signal::<Vec<RevenuePoint>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let timeframe = RwSignal::new(Timeframe::Month.as_param().to_string());
    // Quick timeframe switches can leave slow responses in flight; each
    // fetch gets a generation number and stale ones are dropped.
    let revenue_generation = StoredValue::new(0u64);

    let load_overview = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::fetch_monthly_comparison().await {
                Ok(c) => set_comparison.set(Some(c)),
                Err(e) => {
                    log::error!("monthly comparison fetch failed: {}", e);
                    set_error.set(Some(e));
                }
            }
            match api::fetch_booking_distribution().await {
                Ok(d) => set_distribution.set(Some(d)),
                Err(e) => {
                    log::error!("booking distribution fetch failed: {}", e);
                }
            }
            match api::fetch_request_distribution().await {
                Ok(d) => set_request_distribution.set(Some(d)),
                Err(e) => {
                    log::error!("request distribution fetch failed: {}", e);
                }
            }
            set_loading.set(false);
        });
    };

    let load_revenue = move |tf: Timeframe| {
        let generation = revenue_generation.get_value() + 1;
        revenue_generation.set_value(generation);
        spawn_local(async move {
            match api::fetch_revenue(tf).await {
                Ok(resp) => {
                    if revenue_generation.get_value() == generation {
                        set_revenue.set(resp.revenue_data);
                    }
                }
                Err(e) => {
                    log::error!("revenue fetch failed: {}", e);
                    if revenue_generation.get_value() == generation {
                        set_revenue.set(Vec::new());
                    }
                }
            }
        });
    };

    let mounted = StoredValue::new(false);
    Effect::new(move |_| {
        if !mounted.get_value() {
            mounted.set_value(true);
            load_overview();
        }
    });

    Effect::new(move || {
        let tf = Timeframe::parse(&timeframe.get());
        load_revenue(tf);
    });

    let card = move |pick: fn(&MonthlyComparison) -> (f64, f64), money: bool| {
        Signal::derive(move || {
            comparison.get().map(|c| {
                let (current, _) = pick(&c);
                if money {
                    format_vnd(current)
                } else {
                    format!("{}", current as i64)
                }
            })
        })
    };
    let growth = move |pick: fn(&MonthlyComparison) -> (f64, f64)| {
        Signal::derive(move || {
            comparison.get().map(|c| {
                let (current, previous) = pick(&c);
                growth_rate(current, previous)
            })
        })
    };

    fn users(c: &MonthlyComparison) -> (f64, f64) {
        (c.current_month.total_users, c.previous_month.total_users)
    }
    fn photographers(c: &MonthlyComparison) -> (f64, f64) {
        (
            c.current_month.total_photographers,
            c.previous_month.total_photographers,
        )
    }
    fn bookings(c: &MonthlyComparison) -> (f64, f64) {
        (
            c.current_month.total_bookings,
            c.previous_month.total_bookings,
        )
    }
    fn revenue_totals(c: &MonthlyComparison) -> (f64, f64) {
        (c.current_month.total_revenue, c.previous_month.total_revenue)
    }

    let distribution_view = move || {
        distribution.get().map(|d| {
            view! {
                <div class="dashboard__distribution">
                    <h2 class="dashboard__section-title">"Phân bố trạng thái booking"</h2>
                    <div class="distribution-grid">
                        <div class="distribution-item distribution-item--warning">
                            <span class="distribution-item__label">"Chờ xác nhận"</span>
                            <span class="distribution-item__value">{d.pending}</span>
                        </div>
                        <div class="distribution-item distribution-item--success">
                            <span class="distribution-item__label">"Đã xác nhận"</span>
                            <span class="distribution-item__value">{d.confirm}</span>
                        </div>
                        <div class="distribution-item distribution-item--success">
                            <span class="distribution-item__label">"Đã nhận"</span>
                            <span class="distribution-item__value">{d.accepted}</span>
                        </div>
                        <div class="distribution-item distribution-item--info">
                            <span class="distribution-item__label">"Hoàn thành"</span>
                            <span class="distribution-item__value">{d.completed}</span>
                        </div>
                        <div class="distribution-item distribution-item--error">
                            <span class="distribution-item__label">"Đã hủy"</span>
                            <span class="distribution-item__value">{d.cancelled}</span>
                        </div>
                    </div>
                </div>
            }
        })
    };

    let request_distribution_view = move || {
        request_distribution.get().map(|d| {
            view! {
                <div class="dashboard__distribution">
                    <h2 class="dashboard__section-title">"Phân bố trạng thái yêu cầu"</h2>
                    <div class="distribution-grid">
                        <div class="distribution-item distribution-item--warning">
                            <span class="distribution-item__label">"Chờ phản hồi"</span>
                            <span class="distribution-item__value">{d.open}</span>
                        </div>
                        <div class="distribution-item distribution-item--success">
                            <span class="distribution-item__label">"Đã ghép đôi"</span>
                            <span class="distribution-item__value">{d.matched}</span>
                        </div>
                    </div>
                </div>
            }
        })
    };

    view! {
        <div class="page page--dashboard">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Tổng quan hệ thống"</h1>
                    <span class="page__subtitle">"So sánh với tháng trước"</span>
                </div>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_overview()
                    disabled=Signal::derive(move || loading.get())
                >
                    {move || if loading.get() { "Đang tải..." } else { "Làm mới" }}
                </Button>
            </div>

            {move || {
                error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })
            }}

            <div class="stat-grid">
                <StatCard
                    label="Tổng người dùng".to_string()
                    icon_name="users".to_string()
                    value=card(users, false)
                    change_percent=growth(users)
                />
                <StatCard
                    label="Nhiếp ảnh gia".to_string()
                    icon_name="camera".to_string()
                    value=card(photographers, false)
                    change_percent=growth(photographers)
                />
                <StatCard
                    label="Lịch đặt".to_string()
                    icon_name="calendar".to_string()
                    value=card(bookings, false)
                    change_percent=growth(bookings)
                />
                <StatCard
                    label="Doanh thu".to_string()
                    icon_name="dollar".to_string()
                    value=card(revenue_totals, true)
                    change_percent=growth(revenue_totals)
                />
            </div>

            <div class="dashboard__revenue">
                <div class="dashboard__section-header">
                    <h2 class="dashboard__section-title">"Doanh thu"</h2>
                    <Select value=timeframe>
                        <option value="week">{Timeframe::Week.label()}</option>
                        <option value="month">{Timeframe::Month.label()}</option>
                        <option value="year">{Timeframe::Year.label()}</option>
                    </Select>
                </div>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Kỳ"</TableHeaderCell>
                            <TableHeaderCell>"Doanh thu"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || revenue.get()
                            key=|p| p.name.clone()
                            children=move |p: RevenuePoint| {
                                view! {
                                    <TableRow>
                                        <TableCell>{p.name.clone()}</TableCell>
                                        <TableCell>{format_vnd(p.revenue)}</TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>

            {distribution_view}
            {request_distribution_view}

            <Show when=move || loading.get()>
                <div class="page__loading"><Spinner /></div>
            </Show>
        </div>
    }
}
