//! Modal Component
//!
//! A modal dialog with an optional footer row for actions.

use gpui::{
    div, prelude::*, px, App, ClickEvent, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::CepColors;

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    children: Vec<gpui::AnyElement>,
    footer: Vec<gpui::AnyElement>,
    on_close: Option<Box<dyn Fn(&mut App) + 'static>>,
}

impl Modal {
    /// Create a new modal
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
            footer: Vec::new(),
            on_close: None,
        }
    }

    /// Add a child element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Add a footer action element
    pub fn footer(mut self, action: impl IntoElement) -> Self {
        self.footer.push(action.into_any_element());
        self
    }

    /// Set the close handler
    pub fn on_close(mut self, handler: impl Fn(&mut App) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let on_close = self.on_close;
        let has_footer = !self.footer.is_empty();

        // Backdrop
        div()
            .absolute()
            .inset_0()
            .bg(gpui::rgba(0x000000aa))
            .flex()
            .items_center()
            .justify_center()
            .child(
                // Modal container
                div()
                    .bg(CepColors::surface())
                    .rounded_lg()
                    .shadow_lg()
                    .min_w(px(320.0))
                    .max_w(px(400.0))
                    .flex()
                    .flex_col()
                    // Header
                    .child(
                        div()
                            .px_5()
                            .py_3()
                            .border_b_1()
                            .border_color(CepColors::border())
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_size(px(16.0))
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .text_color(CepColors::text_primary())
                                    .child(self.title),
                            )
                            .child(
                                div()
                                    .id("modal-close")
                                    .size(px(24.0))
                                    .rounded_sm()
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .text_color(CepColors::text_muted())
                                    .text_size(px(16.0))
                                    .cursor_pointer()
                                    .hover(|s| s.bg(gpui::rgba(0xffffff11)))
                                    .when_some(on_close, |el, handler| {
                                        el.on_click(move |_event: &ClickEvent, _window, cx| {
                                            handler(cx);
                                        })
                                    })
                                    .child("×"),
                            ),
                    )
                    // Content
                    .child(
                        div()
                            .px_5()
                            .py_4()
                            .flex()
                            .flex_col()
                            .gap_4()
                            .children(self.children),
                    )
                    // Footer actions
                    .when(has_footer, |el| {
                        el.child(
                            div()
                                .px_5()
                                .py_3()
                                .border_t_1()
                                .border_color(CepColors::border())
                                .flex()
                                .items_center()
                                .justify_end()
                                .gap_2()
                                .children(self.footer),
                        )
                    }),
            )
    }
}
