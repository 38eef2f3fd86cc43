//! Subscriptions Page
//!
//! Cards for each subscribed promoter: rewards, upcoming events, promotions.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, IntoElement, ParentElement, Render, SharedString,
    Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::domain::subscription::Subscription;
use crate::features::subscriptions::controller::SubscriptionsController;
use crate::theme::colors::CepColors;

/// Subscriptions page component
pub struct SubscriptionsPage {
    entities: AppEntities,
    controller: SubscriptionsController,
}

impl SubscriptionsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = SubscriptionsController::new(entities.clone());

        cx.observe(&entities.subscriptions, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
        }
    }

    fn section_title(&self, label: &'static str) -> impl IntoElement {
        div()
            .text_size(px(15.0))
            .font_weight(gpui::FontWeight::BOLD)
            .text_color(CepColors::text_primary())
            .mb_1()
            .child(label)
    }

    fn render_card(&self, sub: &Subscription, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let price_color = if sub.is_pro {
            CepColors::accent()
        } else {
            CepColors::text_secondary()
        };

        let mut card = div()
            .w_full()
            .p_4()
            .mb_3()
            .bg(CepColors::surface())
            .rounded_lg()
            .shadow_md()
            .flex()
            .flex_col()
            // Header
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .justify_between()
                    .pb_2()
                    .mb_2()
                    .border_b_1()
                    .border_color(CepColors::border())
                    .child(
                        div()
                            .text_size(px(18.0))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(CepColors::text_primary())
                            .child(sub.name.clone()),
                    )
                    .child(
                        div()
                            .text_sm()
                            .font_weight(if sub.is_pro {
                                gpui::FontWeight::BOLD
                            } else {
                                gpui::FontWeight::NORMAL
                            })
                            .text_color(price_color)
                            .child(sub.price.clone()),
                    ),
            );

        // Rewards, paid tiers only
        if let Some(rewards) = sub.rewards {
            card = card.child(
                div()
                    .mt_2()
                    .flex()
                    .flex_col()
                    .child(self.section_title("My Rewards"))
                    .child(
                        div()
                            .text_sm()
                            .text_color(CepColors::accent())
                            .child(format!("Current Points: {}", rewards.current_points)),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(CepColors::accent())
                            .child(format!("Redeemed Points: {}", rewards.redeemed_points)),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(CepColors::text_secondary())
                            .child(format!(
                                "Total Drinks Bought: {}",
                                rewards.total_drinks_bought
                            )),
                    ),
            );
        }

        // Upcoming events
        card = card.child(
            div()
                .mt_3()
                .flex()
                .flex_col()
                .child(self.section_title("Upcoming Events"))
                .children(sub.events.iter().map(|event| {
                    div()
                        .text_sm()
                        .text_color(CepColors::text_secondary())
                        .child(format!("- {} on {}", event.title, event.date))
                })),
        );

        // Promotions
        card.child(
            div()
                .mt_3()
                .flex()
                .flex_col()
                .child(self.section_title("Exclusive Promotions"))
                .children(
                    sub.promotions
                        .iter()
                        .map(|promo| {
                            let title = promo.title.clone();
                            div()
                                .id(SharedString::from(format!("promo-{}", promo.id)))
                                .mb_2()
                                .flex()
                                .flex_col()
                                .cursor_pointer()
                                .hover(|s| s.bg(gpui::rgba(0xffffff08)))
                                .on_click(cx.listener(
                                    move |this, _event: &ClickEvent, _window, cx| {
                                        this.controller.redeem_promotion(&title, cx);
                                    },
                                ))
                                .child(
                                    div()
                                        .text_sm()
                                        .text_color(CepColors::text_secondary())
                                        .child(promo.title.clone()),
                                )
                                .when_some(promo.description.clone(), |el, description| {
                                    el.child(
                                        div()
                                            .text_size(px(12.0))
                                            .text_color(CepColors::text_muted())
                                            .italic()
                                            .child(description),
                                    )
                                })
                        })
                        .collect::<Vec<_>>(),
                ),
        )
    }
}

impl Render for SubscriptionsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Extract data first to avoid borrow conflicts
        let (subscriptions, loading) = {
            let state = self.entities.subscriptions.read(cx);
            (state.subscriptions.clone(), state.loading)
        };

        div()
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .gap_3()
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_size(px(22.0))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(CepColors::text_primary())
                            .child("My Subscriptions"),
                    )
                    .child(
                        div()
                            .id("subs-refresh")
                            .px_2()
                            .py_1()
                            .rounded_md()
                            .text_sm()
                            .text_color(CepColors::text_muted())
                            .cursor_pointer()
                            .hover(|s| s.bg(gpui::rgba(0xffffff11)))
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.refresh(cx);
                            }))
                            .child("Refresh"),
                    ),
            )
            .child(
                div()
                    .id("subs-list")
                    .flex_1()
                    .overflow_y_scroll()
                    .when(loading, |el| {
                        el.child(
                            div()
                                .text_sm()
                                .text_color(CepColors::text_muted())
                                .child("Loading..."),
                        )
                    })
                    .children(
                        subscriptions
                            .iter()
                            .map(|sub| self.render_card(sub, cx))
                            .collect::<Vec<_>>(),
                    ),
            )
    }
}
