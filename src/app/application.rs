//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::sync::Arc;

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::domain::config::AppConfig;
use crate::eventing::app_event::AppEvent;
use crate::services::catalog::SampleCatalog;
use crate::services::service_hub::ServiceHub;
use crate::utils::config_store;

actions!(cep, [Quit]);

/// Run the CEP GUI application
pub fn run_app() {
    Application::new().run(|cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Load local preferences
        let config = match config_store::load_config::<AppConfig>("config.json") {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {e}");
                AppConfig::default()
            }
        };

        // Initialize global entities
        let entities = AppEntities::init(cx);
        entities.map.update(cx, |map, _| {
            map.region = config.map_region;
        });
        entities.logs.update(cx, |logs, _| {
            logs.visible = config.show_log_panel;
        });
        cx.set_global(entities.clone());

        // Create event channel for service -> UI communication
        let (event_tx, event_rx) = flume::unbounded::<AppEvent>();

        // Initialize service hub over the sample catalog
        let service_hub = ServiceHub::new(Arc::new(SampleCatalog), event_tx.clone());
        service_hub.load_catalog();
        cx.set_global(service_hub);

        // Create main window
        let bounds = Bounds::centered(None, gpui::size(px(420.0), px(860.0)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Campus Event Platform")),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        if let Err(e) = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), event_rx, cx))
        }) {
            tracing::error!("Failed to open main window: {e:?}");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
