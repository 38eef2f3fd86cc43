//! Log Panel Component
//!
//! Displays application logs above the tab bar. The desktop stand-in for the
//! prototype's console logging.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::state::log_state::LogEntry;
use crate::theme::colors::CepColors;
use crate::utils::format::format_time;

/// Log panel component
pub struct LogPanel {
    entities: AppEntities,
}

impl LogPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe log changes
        cx.observe(&entities.logs, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_log_entry(&self, entry: &LogEntry) -> impl IntoElement {
        let time = format_time(&entry.timestamp);
        let level_color = entry.level.color();
        let level_label = entry.level.label();

        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .py_px()
            .child(
                div()
                    .text_color(CepColors::text_muted())
                    .text_size(px(11.0))
                    .min_w(px(60.0))
                    .child(time),
            )
            .child(
                div()
                    .text_color(level_color)
                    .text_size(px(11.0))
                    .min_w(px(45.0))
                    .child(level_label),
            )
            .child(
                div()
                    .text_color(CepColors::text_primary())
                    .text_size(px(12.0))
                    .flex_1()
                    .child(entry.message.clone()),
            )
    }
}

impl Render for LogPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Extract data first to avoid borrow conflicts
        let (entries, count) = {
            let logs = self.entities.logs.read(cx);
            let entries: Vec<LogEntry> = logs.entries().iter().rev().take(50).cloned().collect();
            (entries, logs.len())
        };

        let entities = self.entities.clone();

        div()
            .h(px(140.0))
            .w_full()
            .bg(CepColors::log_panel_bg())
            .border_t_1()
            .border_color(CepColors::border())
            .flex()
            .flex_col()
            // Header
            .child(
                div()
                    .h(px(28.0))
                    .w_full()
                    .px_3()
                    .flex()
                    .items_center()
                    .justify_between()
                    .border_b_1()
                    .border_color(gpui::rgba(0xffffff22))
                    .child(
                        div()
                            .text_color(CepColors::text_secondary())
                            .text_size(px(12.0))
                            .child(format!("Logs ({})", count)),
                    )
                    .child(
                        div()
                            .id("clear-logs")
                            .px_2()
                            .py_1()
                            .rounded_sm()
                            .text_color(CepColors::text_muted())
                            .text_size(px(11.0))
                            .cursor_pointer()
                            .hover(|s| s.bg(gpui::rgba(0xffffff22)))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                entities.logs.update(cx, |logs, cx| {
                                    logs.clear();
                                    cx.notify();
                                });
                            })
                            .child("Clear"),
                    ),
            )
            // Entries, newest first
            .child(
                div()
                    .id("log-entries")
                    .flex_1()
                    .overflow_y_scroll()
                    .px_3()
                    .py_1()
                    .children(entries.iter().map(|entry| self.render_log_entry(entry))),
            )
    }
}
