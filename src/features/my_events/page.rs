//! My Events Page
//!
//! Two-column grid of the promoter's own listings plus the add-event modal.

use gpui::{
    div, prelude::*, px, App, ClickEvent, Context, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::modal::Modal;
use crate::components::primitives::button::Button;
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::domain::listing::{Listing, ListingDraft};
use crate::features::my_events::controller::MyEventsController;
use crate::theme::colors::CepColors;

/// Small rounded action pill used on the event cards
fn edit_share_pill(
    id: SharedString,
    label: &'static str,
    handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> impl IntoElement {
    div()
        .id(id)
        .px_2()
        .py_1()
        .rounded_full()
        .bg(CepColors::grid_button())
        .text_size(px(11.0))
        .text_color(CepColors::text_primary())
        .cursor_pointer()
        .hover(|s| s.bg(gpui::rgba(0x31405cff)))
        .on_click(handler)
        .child(label)
}

/// My Events page component
pub struct MyEventsPage {
    entities: AppEntities,
    controller: MyEventsController,
    title_input: Entity<TextInput>,
    area_input: Entity<TextInput>,
    category_input: Entity<TextInput>,
    date_input: Entity<TextInput>,
}

impl MyEventsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = MyEventsController::new(entities.clone());

        let title_input = text_input("draft-title", "", "Event title", cx);
        let area_input = text_input("draft-area", "", "Area (e.g. Sahali)", cx);
        let category_input = text_input("draft-category", "", "Category (e.g. Games)", cx);
        let date_input = text_input("draft-date", "", "Date (e.g. Oct 2, 8 PM)", cx);

        // Observe own-events state
        cx.observe(&entities.my_events, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
            title_input,
            area_input,
            category_input,
            date_input,
        }
    }

    /// Collect the form fields into a draft
    fn current_draft(&self, cx: &Context<Self>) -> ListingDraft {
        ListingDraft {
            title: self.title_input.read(cx).value().to_string(),
            area: self.area_input.read(cx).value().to_string(),
            category: self.category_input.read(cx).value().to_string(),
            date: self.date_input.read(cx).value().to_string(),
        }
    }

    fn reset_form(&self, cx: &mut Context<Self>) {
        for input in [
            &self.title_input,
            &self.area_input,
            &self.category_input,
            &self.date_input,
        ] {
            input.update(cx, |input, cx| {
                input.set_value("");
                cx.notify();
            });
        }
    }

    fn render_card(&self, listing: &Listing, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let id = listing.id.clone();
        let title = listing.title.clone();

        div()
            .w(px(170.0))
            .p_3()
            .bg(CepColors::grid_card())
            .rounded_xl()
            .shadow_lg()
            .flex()
            .flex_col()
            .gap_1()
            // Image placeholder
            .child(
                div()
                    .w_full()
                    .h(px(90.0))
                    .rounded_lg()
                    .bg(CepColors::grid_surface())
                    .mb_2(),
            )
            .child(
                div()
                    .text_size(px(15.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(CepColors::text_primary())
                    .child(listing.title.clone()),
            )
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(CepColors::text_secondary())
                    .child(listing.area.clone()),
            )
            // Category kept in data, not rendered on the card
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(CepColors::text_secondary())
                    .child(listing.date.clone()),
            )
            // Action row
            .child(
                div()
                    .mt_3()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child({
                                let title = title.clone();
                                edit_share_pill(
                                    SharedString::from(format!("edit-{}", listing.id)),
                                    "Edit",
                                    cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                                        this.controller.edit(&title, cx);
                                    }),
                                )
                            })
                            .child({
                                let title = title.clone();
                                edit_share_pill(
                                    SharedString::from(format!("share-{}", listing.id)),
                                    "Share",
                                    cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                                        this.controller.share(&title, cx);
                                    }),
                                )
                            }),
                    )
                    .child(
                        div()
                            .id(SharedString::from(format!("delete-{}", listing.id)))
                            .size(px(24.0))
                            .rounded_full()
                            .bg(CepColors::delete())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_size(px(12.0))
                            .text_color(gpui::rgba(0xffffffff))
                            .cursor_pointer()
                            .hover(|s| s.bg(gpui::rgba(0xc94848ff)))
                            .on_click(cx.listener(
                                move |this, _event: &ClickEvent, _window, cx| {
                                    this.controller.delete(&id, cx);
                                },
                            ))
                            .child("🗑"),
                    ),
            )
    }

    fn render_add_modal(&self, cx: &mut Context<Self>) -> impl IntoElement {
        Modal::new("Create Event")
            .on_close({
                let entities = self.entities.clone();
                move |cx| {
                    entities.my_events.update(cx, |state, cx| {
                        state.cancel_add();
                        cx.notify();
                    });
                }
            })
            .child(self.title_input.clone())
            .child(self.area_input.clone())
            .child(self.category_input.clone())
            .child(self.date_input.clone())
            .footer(
                Button::secondary("add-cancel", "Cancel").on_click(cx.listener(
                    |this, _event: &ClickEvent, _window, cx| {
                        this.controller.cancel_add(cx);
                    },
                )),
            )
            .footer(
                Button::primary("add-submit", "Add Event").on_click(cx.listener(
                    |this, _event: &ClickEvent, _window, cx| {
                        let draft = this.current_draft(cx);
                        this.controller.submit(draft, cx);
                    },
                )),
            )
    }
}

impl Render for MyEventsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Extract data first to avoid borrow conflicts
        let (events, adding) = {
            let state = self.entities.my_events.read(cx);
            (state.events.clone(), state.adding)
        };

        div()
            .size_full()
            .relative()
            .flex()
            .flex_col()
            .p_4()
            .gap_3()
            .bg(CepColors::grid_bg())
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
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(CepColors::text_primary())
                            .child("My Events"),
                    )
                    .child(
                        Button::secondary("add-event-btn", "+ Create Event").on_click(
                            cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.reset_form(cx);
                                this.controller.open_add(cx);
                            }),
                        ),
                    ),
            )
            // Grid
            .child(
                div()
                    .id("my-events-grid")
                    .flex_1()
                    .overflow_y_scroll()
                    .flex()
                    .flex_row()
                    .flex_wrap()
                    .gap_4()
                    .children(
                        events
                            .iter()
                            .map(|listing| self.render_card(listing, cx))
                            .collect::<Vec<_>>(),
                    ),
            )
            // Add-event modal
            .when(adding, |el| el.child(self.render_add_modal(cx)))
    }
}
