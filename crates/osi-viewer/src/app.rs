//! The owning application object.
//!
//! All mutable view state lives inside one [`ViewerApp`] constructed once at
//! startup, with an explicit lifecycle: [`ViewerApp::new`] wires the
//! components together, [`ViewerApp::run`] drives the dispatch loop until a
//! `Shutdown` event arrives, and teardown stops the animation driver.
//! Sub-components receive exactly the capabilities they need at
//! construction time — there are no ambient globals.
//!
//! # Dispatch loop
//!
//! `run` consumes [`ViewerEvent`]s from a single `mpsc` channel:
//!
//! ```text
//! AnimationDriver ──Tick──────────┐
//! ui_bridge commands ─Pointer*────┼──> run() ── mutates marker/tooltip,
//! Ctrl-C handler ──Shutdown───────┘            routes clicks to the notebook
//! ```
//!
//! Because this loop is the only writer, the marker, hover state, and tab
//! selection need no synchronization of their own; the bridge's snapshot
//! mutexes exist purely so concurrent frontend reads see consistent values.

use std::collections::HashMap;
use std::sync::Arc;

use osi_core::{DiagramError, DiagramLayout, LayerRegistry, OsiLayer};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::application::animate_marker::{AnimationDriver, MarkerAnimator};
use crate::application::interact::{InteractionUseCase, PageHandle, TabHost};
use crate::application::ViewerEvent;
use crate::infrastructure::assets::{collect_layer_art, LayerArtLoader};
use crate::infrastructure::notebook::{Notebook, PageContent};
use crate::infrastructure::storage::config::ViewerConfig;
use crate::infrastructure::ui_bridge::ViewerAppState;

/// Capacity of the dispatch channel; pointer moves arrive in bursts.
const EVENT_CHANNEL_CAPACITY: usize = 128;

/// The application: one window's worth of state and behavior.
pub struct ViewerApp {
    config: ViewerConfig,
    events_tx: mpsc::Sender<ViewerEvent>,
    events_rx: mpsc::Receiver<ViewerEvent>,
    layout: Arc<DiagramLayout>,
    notebook: Arc<Notebook>,
    state: Arc<ViewerAppState>,
    animator: MarkerAnimator,
    interaction: InteractionUseCase,
}

impl ViewerApp {
    /// Builds the whole application: registry, notebook pages (with each
    /// layer's optional illustration), diagram layout, and use cases.
    ///
    /// Illustrations that fail to load are skipped; the layer's page is
    /// built text-only.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::EmptyLayout`] only if the registry were
    /// empty — it never is, but the layout API keeps the contract explicit.
    pub async fn new(
        config: ViewerConfig,
        art_loader: &dyn LayerArtLoader,
    ) -> Result<Self, DiagramError> {
        let registry = LayerRegistry::new();
        let layout = Arc::new(DiagramLayout::build(
            registry.entries(),
            config.diagram.to_diagram_config(),
        )?);

        let notebook = Arc::new(Notebook::new());

        // One text page per layer, in canonical order; the page table is the
        // explicit per-region context used by click dispatch.
        let mut art_by_layer = collect_layer_art(art_loader, config.assets.max_size());
        let mut pages: HashMap<OsiLayer, PageHandle> = HashMap::new();
        for entry in registry.entries() {
            let art = art_by_layer.remove(&entry.layer);
            if art.is_none() {
                debug!(layer = %entry.layer, "building text-only page");
            }
            let handle = notebook
                .add_page(
                    entry.layer.name(),
                    PageContent::Text {
                        layer: entry.layer,
                        body_text: entry.body_text,
                        art,
                    },
                )
                .await;
            pages.insert(entry.layer, handle);
        }
        notebook.add_page("Visualization", PageContent::Visualization).await;

        let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

        let animator = MarkerAnimator::new(Arc::clone(&layout));
        let interaction = InteractionUseCase::new(
            Arc::clone(&layout),
            Arc::clone(&notebook) as Arc<dyn TabHost>,
            pages,
        );
        let state = ViewerAppState::new(
            events_tx.clone(),
            Arc::clone(&layout),
            Arc::clone(&notebook),
            animator.frame(),
        );

        Ok(Self {
            config,
            events_tx,
            events_rx,
            layout,
            notebook,
            state,
            animator,
            interaction,
        })
    }

    /// A sender into the dispatch channel (for the Ctrl-C handler and tests).
    pub fn events(&self) -> mpsc::Sender<ViewerEvent> {
        self.events_tx.clone()
    }

    /// The shared state consumed by the bridge commands.
    pub fn state(&self) -> Arc<ViewerAppState> {
        Arc::clone(&self.state)
    }

    /// The tab notebook.
    pub fn notebook(&self) -> Arc<Notebook> {
        Arc::clone(&self.notebook)
    }

    /// The diagram geometry.
    pub fn layout(&self) -> Arc<DiagramLayout> {
        Arc::clone(&self.layout)
    }

    /// The loaded configuration.
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Runs the dispatch loop until a `Shutdown` event arrives or every
    /// sender is gone.  Starts the animation on entry and stops it on exit.
    pub async fn run(mut self) {
        let mut driver = AnimationDriver::start(
            self.config.diagram.tick_interval(),
            self.events_tx.clone(),
        );

        let pages = self.notebook.page_count().await;
        info!(
            title = %self.config.viewer.window_title,
            width = self.config.viewer.window_width,
            height = self.config.viewer.window_height,
            pages = pages,
            "viewer ready; animation running"
        );

        while let Some(event) = self.events_rx.recv().await {
            match event {
                ViewerEvent::Tick => {
                    let frame = self.animator.tick();
                    self.state.set_marker(frame, self.animator.tick_count()).await;
                }
                ViewerEvent::PointerMoved(p) => {
                    let tooltip = self.interaction.pointer_moved(p);
                    self.state.set_tooltip(tooltip).await;
                }
                ViewerEvent::PointerLeft => {
                    let tooltip = self.interaction.pointer_left();
                    self.state.set_tooltip(tooltip).await;
                }
                ViewerEvent::Clicked(p) => {
                    self.interaction.click(p).await;
                }
                ViewerEvent::Shutdown => {
                    info!("shutdown requested");
                    break;
                }
            }
        }

        driver.stop();
        info!("viewer stopped");
    }
}
