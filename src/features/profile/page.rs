//! Profile Page
//!
//! Promoter header, statistics, hosted events, and customer agreements.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, IntoElement, ParentElement, Render, SharedString,
    Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::Button;
use crate::domain::promoter::PromoterProfile;
use crate::features::profile::controller::ProfileController;
use crate::theme::colors::CepColors;
use crate::utils::format::format_number;

/// Profile page component
pub struct ProfilePage {
    entities: AppEntities,
    controller: ProfileController,
}

impl ProfilePage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = ProfileController::new(entities.clone());

        cx.observe(&entities.profile, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
        }
    }

    fn render_header(&self, profile: &PromoterProfile, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .w_full()
            .p_5()
            .bg(CepColors::surface())
            .border_b_1()
            .border_color(CepColors::border())
            .flex()
            .flex_col()
            .items_center()
            .gap_1()
            // Avatar placeholder
            .child(
                div()
                    .size(px(80.0))
                    .rounded_full()
                    .bg(CepColors::grid_surface())
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_size(px(28.0))
                    .text_color(CepColors::accent())
                    .child(profile.name.chars().next().unwrap_or('?').to_string()),
            )
            .child(
                div()
                    .text_size(px(22.0))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(CepColors::text_primary())
                    .child(profile.name.clone()),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(CepColors::accent())
                    .child(profile.business_name.clone()),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(CepColors::text_secondary())
                    .mt_1()
                    .child(profile.bio.clone()),
            )
            // Promoter actions
            .child(
                div()
                    .mt_3()
                    .flex()
                    .flex_row()
                    .gap_2()
                    .child(Button::primary("edit-profile", "Edit Business Profile").on_click(
                        cx.listener(|this, _event: &ClickEvent, _window, cx| {
                            this.controller.edit_profile(cx);
                        }),
                    ))
                    .child(Button::accent("view-analytics", "View Analytics").on_click(
                        cx.listener(|this, _event: &ClickEvent, _window, cx| {
                            this.controller.view_analytics(cx);
                        }),
                    )),
            )
    }

    fn render_stat_row(&self, label: &'static str, value: String) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .gap_2()
            .mb_2()
            .child(
                div()
                    .size(px(6.0))
                    .rounded_full()
                    .bg(CepColors::accent()),
            )
            .child(
                div()
                    .text_size(px(15.0))
                    .text_color(CepColors::text_primary())
                    .child(format!("{label}: {value}")),
            )
    }

    fn section(&self, title: &'static str) -> gpui::Div {
        div()
            .w_full()
            .mt_3()
            .p_4()
            .bg(CepColors::surface())
            .border_b_1()
            .border_color(CepColors::border())
            .flex()
            .flex_col()
            .child(
                div()
                    .text_size(px(17.0))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(CepColors::text_primary())
                    .mb_2()
                    .child(title),
            )
    }
}

impl Render for ProfilePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Extract data first to avoid borrow conflicts
        let profile = self.entities.profile.read(cx).profile.clone();
        let stats = profile.stats.clone();

        div()
            .size_full()
            .flex()
            .flex_col()
            .child(
                div()
                    .id("profile-scroll")
                    .flex_1()
                    .overflow_y_scroll()
                    .flex()
                    .flex_col()
                    .child(self.render_header(&profile, cx))
                    // Statistics
                    .child(
                        self.section("Statistics & Analytics")
                            .child(self.render_stat_row(
                                "Total Subscribers",
                                format_number(i64::from(stats.total_subscribers)),
                            ))
                            .child(self.render_stat_row(
                                "Events Hosted",
                                format_number(i64::from(stats.events_hosted)),
                            ))
                            .child(self.render_stat_row(
                                "Average Attendance",
                                format_number(i64::from(stats.average_attendance)),
                            ))
                            .child(self.render_stat_row("Total Revenue", stats.total_revenue.clone())),
                    )
                    // Hosted events
                    .child(
                        self.section("Your Events").children(profile.events.iter().map(
                            |event| {
                                div()
                                    .w_full()
                                    .py_2()
                                    .border_b_1()
                                    .border_color(CepColors::border())
                                    .flex()
                                    .items_center()
                                    .justify_between()
                                    .child(
                                        div()
                                            .text_size(px(15.0))
                                            .text_color(CepColors::text_primary())
                                            .child(event.title.clone()),
                                    )
                                    .child(
                                        div()
                                            .text_size(px(12.0))
                                            .text_color(CepColors::text_secondary())
                                            .child(event.date.clone()),
                                    )
                            },
                        )),
                    )
                    // Customer agreements
                    .child(
                        self.section("Customer Agreements").children(
                            profile
                                .agreements
                                .iter()
                                .map(|agreement| {
                                    let title = agreement.title.clone();
                                    div()
                                        .id(SharedString::from(format!(
                                            "agreement-{}",
                                            agreement.id
                                        )))
                                        .w_full()
                                        .py_2()
                                        .border_b_1()
                                        .border_color(CepColors::border())
                                        .flex()
                                        .items_center()
                                        .justify_between()
                                        .cursor_pointer()
                                        .hover(|s| s.bg(gpui::rgba(0xffffff08)))
                                        .on_click(cx.listener(
                                            move |this, _event: &ClickEvent, _window, cx| {
                                                this.controller.upload_agreement(&title, cx);
                                            },
                                        ))
                                        .child(
                                            div()
                                                .text_size(px(15.0))
                                                .text_color(CepColors::text_primary())
                                                .child(agreement.title.clone()),
                                        )
                                        .child(
                                            div()
                                                .text_color(CepColors::text_primary())
                                                .child("→"),
                                        )
                                })
                                .collect::<Vec<_>>(),
                        ),
                    )
                    // Log out + debug toggle
                    .child(
                        div()
                            .w_full()
                            .p_5()
                            .flex()
                            .flex_col()
                            .items_center()
                            .gap_2()
                            .child(Button::danger("log-out", "Log Out").on_click(cx.listener(
                                |this, _event: &ClickEvent, _window, cx| {
                                    this.controller.log_out(cx);
                                },
                            )))
                            .child(Button::ghost("toggle-logs", "Toggle Debug Logs").on_click(
                                cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                    this.controller.toggle_log_panel(cx);
                                }),
                            )),
                    ),
            )
    }
}
