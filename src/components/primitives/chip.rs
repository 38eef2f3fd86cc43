//! Chip Component
//!
//! Selectable pill used for filter options and axis tabs.

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::CepColors;

/// A selectable chip
#[derive(IntoElement)]
pub struct Chip {
    id: ElementId,
    label: SharedString,
    selected: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Chip {
    /// Create a new chip
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            selected: false,
            on_click: None,
        }
    }

    /// Set the selected state
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Chip {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, border_color) = if self.selected {
            (
                CepColors::accent(),
                CepColors::text_on_accent(),
                CepColors::accent(),
            )
        } else {
            (
                gpui::rgba(0x00000000),
                CepColors::text_secondary(),
                CepColors::input_border(),
            )
        };

        let mut element = div()
            .id(self.id)
            .px_3()
            .py_1()
            .bg(bg_color)
            .border_1()
            .border_color(border_color)
            .rounded_full()
            .text_color(text_color)
            .text_size(px(13.0))
            .cursor_pointer()
            .child(self.label);

        if !self.selected {
            element = element.hover(|s| s.bg(gpui::rgba(0xbb86fc22)));
        }

        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}
