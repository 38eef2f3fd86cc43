//! Events Page
//!
//! Card feed of upcoming events with the filter panel modal.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, IntoElement, ParentElement, Render, SharedString,
    Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::modal::Modal;
use crate::components::primitives::button::Button;
use crate::components::primitives::chip::Chip;
use crate::domain::listing::Listing;
use crate::features::events::controller::EventsController;
use crate::state::filter_state::{FilterAxis, FilterCriteria};
use crate::theme::colors::CepColors;

/// Events page component
pub struct EventsPage {
    entities: AppEntities,
    controller: EventsController,
}

impl EventsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = EventsController::new(entities.clone());

        // Observe feed state
        cx.observe(&entities.listings, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
        }
    }

    fn render_card(&self, listing: &Listing) -> impl IntoElement {
        div()
            .w_full()
            .p_4()
            .mb_3()
            .bg(CepColors::surface())
            .rounded_lg()
            .shadow_md()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_size(px(17.0))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(CepColors::text_primary())
                    .child(listing.title.clone()),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(CepColors::text_secondary())
                    .child(format!("Organized by: {}", listing.organizer)),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(CepColors::text_secondary())
                    .child(format!("Location: {}", listing.area)),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(CepColors::text_secondary())
                    .child(format!("Time: {}", listing.date)),
            )
    }

    fn render_filter_panel(
        &self,
        pending: FilterCriteria,
        active_axis: FilterAxis,
        options: Vec<String>,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let pending_value = pending.get(active_axis).map(str::to_string);

        Modal::new("Filter Events")
            .on_close({
                let entities = self.entities.clone();
                move |cx| {
                    entities.listings.update(cx, |state, cx| {
                        state.filter.cancel();
                        cx.notify();
                    });
                }
            })
            // Axis selector
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap_2()
                    .children(FilterAxis::all().iter().map(|axis| {
                        let axis = *axis;
                        Chip::new(
                            SharedString::from(format!("axis-{:?}", axis)),
                            axis.label(),
                        )
                        .selected(axis == active_axis)
                        .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                            this.controller.select_axis(axis, cx);
                        }))
                    })),
            )
            // Options for the active axis
            .child(
                div()
                    .flex()
                    .flex_row()
                    .flex_wrap()
                    .gap_2()
                    .children(options.into_iter().map(|value| {
                        let selected = pending_value.as_deref() == Some(value.as_str());
                        let chip_value = value.clone();
                        Chip::new(SharedString::from(format!("opt-{value}")), value)
                            .selected(selected)
                            .on_click(cx.listener(
                                move |this, _event: &ClickEvent, _window, cx| {
                                    this.controller
                                        .choose_option(active_axis, &chip_value, cx);
                                },
                            ))
                    })),
            )
            .footer(
                Button::ghost("filter-clear", "Clear").on_click(cx.listener(
                    |this, _event: &ClickEvent, _window, cx| {
                        this.controller.clear_filter(cx);
                    },
                )),
            )
            .footer(
                Button::secondary("filter-cancel", "Cancel").on_click(cx.listener(
                    |this, _event: &ClickEvent, _window, cx| {
                        this.controller.cancel_filter(cx);
                    },
                )),
            )
            .footer(
                Button::primary("filter-apply", "Apply").on_click(cx.listener(
                    |this, _event: &ClickEvent, _window, cx| {
                        this.controller.apply_filter(cx);
                    },
                )),
            )
    }
}

impl Render for EventsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Extract data first to avoid borrow conflicts
        let (visible, filter_active, panel, loading) = {
            let state = self.entities.listings.read(cx);
            let visible: Vec<Listing> = state.visible_listings().into_iter().cloned().collect();
            let filter_active = !state.filter.committed.is_empty();
            let panel = state.filter.is_open.then(|| {
                (
                    state.filter.pending.clone(),
                    state.filter.active_axis,
                    state.options_for(state.filter.active_axis),
                )
            });
            (visible, filter_active, panel, state.loading)
        };

        let filter_label = if filter_active { "Filtered" } else { "Filter" };

        div()
            .size_full()
            .relative()
            .flex()
            .flex_col()
            .p_4()
            .gap_3()
            // Header
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
                            .child("Upcoming Events"),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                Button::secondary("filter-btn", filter_label).on_click(
                                    cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                        this.controller.open_filter(cx);
                                    }),
                                ),
                            )
                            .child(Button::ghost("refresh-btn", "Refresh").on_click(
                                cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                    this.controller.refresh(cx);
                                }),
                            )),
                    ),
            )
            // Card feed
            .child(
                div()
                    .id("events-feed")
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
                    .when(!loading && visible.is_empty(), |el| {
                        el.child(
                            div()
                                .text_sm()
                                .text_color(CepColors::text_muted())
                                .child("No events match the current filter"),
                        )
                    })
                    .children(visible.iter().map(|listing| self.render_card(listing))),
            )
            // Filter panel modal
            .when_some(panel, |el, (pending, active_axis, options)| {
                el.child(self.render_filter_panel(pending, active_axis, options, cx))
            })
    }
}
