//! ServiceHub - Unified Service Management
//!
//! Owns the catalog source and runs all simulated background work on a
//! dedicated thread, reporting results to the UI through the event channel.

use std::sync::Arc;

use gpui::Global;
use parking_lot::RwLock;

use crate::domain::listing::{Listing, ListingDraft};
use crate::eventing::app_event::AppEvent;
use crate::services::catalog::CatalogSource;

/// Commands that can be sent to services
#[derive(Debug, Clone)]
pub enum ServiceCommand {
    /// Load every data set from the catalog
    LoadCatalog,
    /// Reload the events feed only
    RefreshListings,
    /// Publish a new listing from the add-event form
    SubmitListing(ListingDraft),
    /// Remove one of the promoter's listings
    DeleteListing(String),
    /// Placeholder upload of a customer agreement form
    UploadAgreement(String),
}

/// ServiceHub manages the catalog and background command handling
pub struct ServiceHub {
    /// Channel to send events to UI
    event_tx: flume::Sender<AppEvent>,
    /// Channel to send commands to services
    command_tx: flume::Sender<ServiceCommand>,
}

impl Global for ServiceHub {}

impl ServiceHub {
    /// Create a new service hub over the given catalog
    pub fn new(catalog: Arc<dyn CatalogSource>, event_tx: flume::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = flume::unbounded::<ServiceCommand>();

        let hub = Self {
            event_tx: event_tx.clone(),
            command_tx,
        };

        // Start command handler in background
        Self::start_command_handler(command_rx, catalog, event_tx);

        // Send initial log
        let _ = hub.event_tx.send(AppEvent::info("ServiceHub initialized"));

        hub
    }

    /// Start the command handler task
    fn start_command_handler(
        command_rx: flume::Receiver<ServiceCommand>,
        catalog: Arc<dyn CatalogSource>,
        event_tx: flume::Sender<AppEvent>,
    ) {
        std::thread::spawn(move || {
            let rt = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    tracing::error!("Failed to create Tokio runtime: {e}");
                    return;
                }
            };

            // Working copy of the promoter's listings so submit/delete
            // round-trip through the event pump
            let my_events = RwLock::new(catalog.my_events());

            rt.block_on(async move {
                while let Ok(cmd) = command_rx.recv_async().await {
                    match cmd {
                        ServiceCommand::LoadCatalog => {
                            let _ = event_tx.send(AppEvent::info("Loading catalog..."));

                            // Simulated fetch latency
                            tokio::time::sleep(tokio::time::Duration::from_millis(300)).await;

                            let _ = event_tx.send(AppEvent::ListingsLoaded {
                                listings: catalog.listings(),
                            });
                            let _ = event_tx.send(AppEvent::MyEventsUpdated {
                                events: my_events.read().clone(),
                            });
                            let _ = event_tx.send(AppEvent::SubscriptionsLoaded {
                                subscriptions: catalog.subscriptions(),
                            });
                            let _ = event_tx.send(AppEvent::ProfileLoaded {
                                profile: catalog.promoter_profile(),
                            });
                            let _ = event_tx.send(AppEvent::VenuesLoaded {
                                pins: catalog.venues(),
                            });

                            let _ = event_tx.send(AppEvent::info("Catalog loaded"));
                        }
                        ServiceCommand::RefreshListings => {
                            let _ = event_tx.send(AppEvent::info("Refreshing events feed..."));

                            tokio::time::sleep(tokio::time::Duration::from_millis(200)).await;

                            let _ = event_tx.send(AppEvent::ListingsLoaded {
                                listings: catalog.listings(),
                            });
                            let _ = event_tx.send(AppEvent::info("Events feed refreshed"));
                        }
                        ServiceCommand::SubmitListing(draft) => {
                            let _ = event_tx
                                .send(AppEvent::info(format!("Adding event: {}", draft.title)));

                            // No backend: publish into the working copy only
                            let listing = Listing::new(
                                uuid::Uuid::new_v4().to_string(),
                                draft.title,
                                catalog.promoter_profile().business_name,
                                draft.area,
                                draft.category,
                                draft.date,
                            );
                            my_events.write().push(listing);

                            let _ = event_tx.send(AppEvent::MyEventsUpdated {
                                events: my_events.read().clone(),
                            });
                        }
                        ServiceCommand::DeleteListing(id) => {
                            let mut events = my_events.write();
                            let before = events.len();
                            events.retain(|l| l.id != id);

                            if events.len() < before {
                                let _ = event_tx
                                    .send(AppEvent::info(format!("Deleted event {id}")));
                            } else {
                                let _ = event_tx
                                    .send(AppEvent::warn(format!("No event with id {id}")));
                            }
                            let updated = events.clone();
                            drop(events);

                            let _ = event_tx.send(AppEvent::MyEventsUpdated { events: updated });
                        }
                        ServiceCommand::UploadAgreement(title) => {
                            let _ = event_tx.send(AppEvent::info(format!(
                                "Uploading customer agreement form: {title}..."
                            )));

                            tokio::time::sleep(tokio::time::Duration::from_millis(200)).await;

                            let _ = event_tx
                                .send(AppEvent::info(format!("Agreement '{title}' uploaded")));
                        }
                    }
                }
            });
        });
    }

    /// Send a command to the services
    pub fn send(&self, cmd: ServiceCommand) {
        let _ = self.command_tx.send(cmd);
    }

    /// Load all data sets
    pub fn load_catalog(&self) {
        self.send(ServiceCommand::LoadCatalog);
    }

    /// Reload the events feed
    pub fn refresh_listings(&self) {
        self.send(ServiceCommand::RefreshListings);
    }

    /// Publish a new listing
    pub fn submit_listing(&self, draft: ListingDraft) {
        self.send(ServiceCommand::SubmitListing(draft));
    }

    /// Delete one of the promoter's listings
    pub fn delete_listing(&self, id: impl Into<String>) {
        self.send(ServiceCommand::DeleteListing(id.into()));
    }

    /// Upload a customer agreement (placeholder)
    pub fn upload_agreement(&self, title: impl Into<String>) {
        self.send(ServiceCommand::UploadAgreement(title.into()));
    }

    /// Send a log event
    pub fn log(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }
}
