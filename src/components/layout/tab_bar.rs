//! Tab Bar Component
//!
//! Fixed bottom tab strip mirroring the mobile prototype's navigator.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::theme::colors::CepColors;

/// Bottom tab bar component
pub struct TabBar {
    entities: AppEntities,
}

impl TabBar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe tab changes
        cx.observe(&entities.tabs, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_tab(&self, page: ActivePage, active_page: ActivePage) -> impl IntoElement {
        let is_active = page == active_page;
        let entities = self.entities.clone();

        let tint = if is_active {
            CepColors::accent()
        } else {
            CepColors::tab_inactive()
        };

        div()
            .id(SharedString::from(format!("tab-{:?}", page)))
            .flex_1()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_1()
            .py_2()
            .cursor_pointer()
            .hover(|s| s.bg(gpui::rgba(0xbb86fc11)))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.tabs.update(cx, |tabs, cx| {
                    tabs.set_active_page(page);
                    cx.notify();
                });
            })
            .child(
                div()
                    .text_color(tint)
                    .text_size(px(18.0))
                    .child(page.icon()),
            )
            .child(
                div()
                    .text_color(tint)
                    .text_size(px(11.0))
                    .child(page.title()),
            )
    }
}

impl Render for TabBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.tabs.read(cx).active_page;

        div()
            .h(px(56.0))
            .w_full()
            .bg(CepColors::tab_bar_bg())
            .border_t_1()
            .border_color(CepColors::border())
            .flex()
            .flex_row()
            .children(
                ActivePage::all()
                    .iter()
                    .map(|page| self.render_tab(*page, active_page)),
            )
    }
}
