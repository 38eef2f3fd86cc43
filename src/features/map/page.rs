//! Map Page
//!
//! Renders the visible region as a flat panel with projected venue pins.
//! Real map tiles are out of scope for the prototype.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, IntoElement, ParentElement, Render, SharedString,
    Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::domain::venue::VenuePin;
use crate::features::map::controller::MapController;
use crate::features::map::projection::project;
use crate::theme::colors::CepColors;
use crate::utils::format::truncate;

// Fixed panel size for the prototype; pins are projected into this box
const PANEL_WIDTH: f32 = 380.0;
const PANEL_HEIGHT: f32 = 560.0;

/// Map page component
pub struct MapPage {
    entities: AppEntities,
    controller: MapController,
}

impl MapPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = MapController::new(entities.clone());

        cx.observe(&entities.map, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
        }
    }

    fn render_pin(&self, pin: &VenuePin, x: f32, y: f32, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let (latitude, longitude) = (pin.latitude, pin.longitude);

        div()
            .absolute()
            .left(px(x - 8.0))
            .top(px(y - 8.0))
            .flex()
            .flex_col()
            .items_center()
            .child(
                div()
                    .id(SharedString::from(format!("pin-{}", pin.id)))
                    .size(px(16.0))
                    .rounded_full()
                    .bg(CepColors::accent())
                    .border_2()
                    .border_color(gpui::rgba(0xffffffcc))
                    .cursor_pointer()
                    .hover(|s| s.bg(CepColors::accent_teal()))
                    .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                        this.controller.center_on(latitude, longitude, cx);
                    })),
            )
            .child(
                div()
                    .mt_1()
                    .px_1()
                    .rounded_sm()
                    .bg(gpui::rgba(0x121212cc))
                    .text_size(px(11.0))
                    .text_color(CepColors::text_primary())
                    .child(truncate(&pin.title, 18)),
            )
    }
}

impl Render for MapPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Extract data first to avoid borrow conflicts
        let (region, pins) = {
            let state = self.entities.map.read(cx);
            (state.region, state.pins.clone())
        };

        let projected: Vec<(VenuePin, f32, f32)> = pins
            .into_iter()
            .filter_map(|pin| {
                project(&region, pin.latitude, pin.longitude, PANEL_WIDTH, PANEL_HEIGHT)
                    .map(|(x, y)| (pin, x, y))
            })
            .collect();

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
                            .child("Event Map"),
                    )
                    .child(
                        div()
                            .id("map-reset")
                            .px_2()
                            .py_1()
                            .rounded_md()
                            .text_sm()
                            .text_color(CepColors::text_muted())
                            .cursor_pointer()
                            .hover(|s| s.bg(gpui::rgba(0xffffff11)))
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.reset_region(cx);
                            }))
                            .child("Reset"),
                    ),
            )
            // Map panel
            .child(
                div()
                    .relative()
                    .w(px(PANEL_WIDTH))
                    .h(px(PANEL_HEIGHT))
                    .rounded_lg()
                    .bg(CepColors::surface())
                    .border_1()
                    .border_color(CepColors::border())
                    .overflow_hidden()
                    .children(
                        projected
                            .iter()
                            .map(|(pin, x, y)| self.render_pin(pin, *x, *y, cx))
                            .collect::<Vec<_>>(),
                    ),
            )
            // Region readout
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(CepColors::text_muted())
                    .child(format!(
                        "Center: {:.4}, {:.4}",
                        region.latitude, region.longitude
                    )),
            )
    }
}
