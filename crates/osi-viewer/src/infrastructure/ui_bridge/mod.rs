//! Command bridge for the viewer frontend.
//!
//! Exposes view state (the diagram scene, the selected tab) to the desktop
//! frontend and forwards its pointer events into the dispatch loop.  Follows
//! Clean Architecture: only this module is allowed to reference both the
//! Application layer and the Presentation (webview) layer.
//!
//! # How the bridge works (for beginners)
//!
//! The frontend runs in a WebView and talks to the Rust backend through a
//! small command RPC surface:
//!
//! ```text
//! Frontend (TypeScript)        command IPC          Rust backend
//! ─────────────────────────────────────────────────────────────
//! invoke("get_scene")          ──────────────>      get_scene()
//!                              <──────────────      SceneDto
//! invoke("pointer_moved", xy)  ──────────────>      pointer_moved()
//!                                                    └─> ViewerEvent channel
//! ```
//!
//! Reads (`get_scene`, `get_status`) return snapshots; writes (the pointer
//! commands) do not mutate state here at all — they enqueue a
//! [`ViewerEvent`] for the dispatch loop, which is the only place view state
//! changes.  That keeps every mutation on one task regardless of how many
//! concurrent command invocations the frontend fires.
//!
//! # DTOs (Data Transfer Objects)
//!
//! The runtime state uses Tokio async `Mutex`es and domain types that are
//! not directly serializable.  The DTO structs are plain serializable
//! snapshots that are safe to send across the IPC boundary; the TypeScript
//! interfaces must mirror their fields exactly.
//!
//! # `CommandResult<T>`
//!
//! All commands return `CommandResult<T>` — a unified envelope:
//! ```json
//! { "success": true,  "data": {...}, "error": null  }
//! { "success": false, "data": null,  "error": "..."  }
//! ```
//! so the frontend uses a single error-handling pattern for every command.

use std::sync::Arc;

use osi_core::{DiagramLayout, MarkerFrame, Point};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, Mutex};

use crate::application::interact::TooltipState;
use crate::application::ViewerEvent;
use crate::infrastructure::notebook::Notebook;

// ── Shared application state ──────────────────────────────────────────────────

/// Runtime state shared between the dispatch loop and the bridge commands.
///
/// The dispatch loop is the only writer of `marker`, `tooltip`, and
/// `tick_count`; commands only read them (each lock held just long enough
/// to copy the value out).
pub struct ViewerAppState {
    /// Sender into the dispatch loop's event channel.
    events: mpsc::Sender<ViewerEvent>,
    /// The static diagram geometry the scene is rendered from.
    layout: Arc<DiagramLayout>,
    /// The tab notebook (selected-tab snapshots for `get_status`).
    notebook: Arc<Notebook>,
    /// Latest marker frame published by the dispatch loop.
    marker: Mutex<MarkerFrame>,
    /// Latest tooltip state published by the dispatch loop.
    tooltip: Mutex<TooltipState>,
    /// Ticks applied since startup.
    tick_count: Mutex<u64>,
}

impl ViewerAppState {
    /// Creates the shared state with the marker in its initial frame.
    pub fn new(
        events: mpsc::Sender<ViewerEvent>,
        layout: Arc<DiagramLayout>,
        notebook: Arc<Notebook>,
        initial_marker: MarkerFrame,
    ) -> Arc<Self> {
        Arc::new(Self {
            events,
            layout,
            notebook,
            marker: Mutex::new(initial_marker),
            tooltip: Mutex::new(TooltipState::Hidden),
            tick_count: Mutex::new(0),
        })
    }

    /// Publishes a new marker frame.  Called by the dispatch loop per tick.
    pub async fn set_marker(&self, frame: MarkerFrame, tick_count: u64) {
        {
            let mut guard = self.marker.lock().await;
            *guard = frame;
        }
        {
            let mut guard = self.tick_count.lock().await;
            *guard = tick_count;
        }
    }

    /// Publishes a new tooltip state.  Called by the dispatch loop on
    /// pointer events.
    pub async fn set_tooltip(&self, tooltip: TooltipState) {
        let mut guard = self.tooltip.lock().await;
        *guard = tooltip;
    }

    /// The diagram geometry.
    pub fn layout(&self) -> &Arc<DiagramLayout> {
        &self.layout
    }
}

// ── DTOs ──────────────────────────────────────────────────────────────────────

/// One layer box, ready to draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionDto {
    /// Display name of the layer, e.g. `"Data Link"`.
    pub layer: String,
    /// The label drawn centered in the box, e.g. `"Data Link Layer"`.
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One downward arrow between adjacent boxes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorDto {
    pub x: f64,
    pub y_start: f64,
    pub y_end: f64,
}

/// The marker disc.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerDto {
    /// Index of the region the marker is at.
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// The hover tooltip.
///
/// When `visible` is `false`, `text` is empty — hiding leaves no residual
/// content for the frontend to flash on the next show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TooltipDto {
    pub visible: bool,
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Full snapshot of the visualization page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDto {
    pub regions: Vec<RegionDto>,
    pub connectors: Vec<ConnectorDto>,
    pub marker: MarkerDto,
    pub tooltip: TooltipDto,
}

/// Status snapshot for the window chrome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusDto {
    /// Label of the currently selected tab, if any page exists.
    pub selected_tab: Option<String>,
    /// All tab labels in order.
    pub tab_labels: Vec<String>,
    /// Ticks applied since startup.
    pub tick_count: u64,
}

/// Unified response wrapper for bridge commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResult<T: Serialize> {
    /// `true` if the command completed successfully; `false` on error.
    pub success: bool,
    /// The command's return value, present only when `success` is `true`.
    pub data: Option<T>,
    /// A human-readable error message, present only when `success` is `false`.
    pub error: Option<String>,
}

impl<T: Serialize> CommandResult<T> {
    /// Constructs a successful result containing `data`.
    pub fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    /// Constructs an error result containing the given message.
    pub fn err(msg: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(msg.into()) }
    }
}

impl From<TooltipState> for TooltipDto {
    fn from(state: TooltipState) -> Self {
        match state {
            TooltipState::Hidden => Self {
                visible: false,
                text: String::new(),
                x: 0.0,
                y: 0.0,
            },
            TooltipState::Shown { text, position } => Self {
                visible: true,
                text: text.to_string(),
                x: position.x,
                y: position.y,
            },
        }
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

/// Returns the current visualization scene.
///
/// Called by the frontend on every animation/pointer update it is notified
/// of; geometry is static, so only the marker and tooltip actually change
/// between calls.
pub async fn get_scene(state: Arc<ViewerAppState>) -> CommandResult<SceneDto> {
    let marker = *state.marker.lock().await;
    let tooltip = *state.tooltip.lock().await;

    let regions = state
        .layout
        .regions()
        .iter()
        .map(|r| RegionDto {
            layer: r.layer.name().to_string(),
            label: r.label.clone(),
            x: r.bounds.x,
            y: r.bounds.y,
            width: r.bounds.width,
            height: r.bounds.height,
        })
        .collect();

    let connectors = state
        .layout
        .connectors()
        .iter()
        .map(|c| ConnectorDto {
            x: c.x,
            y_start: c.y_start,
            y_end: c.y_end,
        })
        .collect();

    CommandResult::ok(SceneDto {
        regions,
        connectors,
        marker: MarkerDto {
            index: marker.index,
            x: marker.position.x,
            y: marker.position.y,
            radius: state.layout.config().marker_radius,
        },
        tooltip: tooltip.into(),
    })
}

/// Returns the current tab and tick status.
pub async fn get_status(state: Arc<ViewerAppState>) -> CommandResult<StatusDto> {
    let selected_tab = state.notebook.selected_label().await;
    let tab_labels = state.notebook.labels().await;
    let tick_count = *state.tick_count.lock().await;

    CommandResult::ok(StatusDto {
        selected_tab,
        tab_labels,
        tick_count,
    })
}

/// Forwards a pointer move on the visualization canvas.
pub async fn pointer_moved(state: Arc<ViewerAppState>, x: f64, y: f64) -> CommandResult<()> {
    forward(&state, ViewerEvent::PointerMoved(Point::new(x, y))).await
}

/// Forwards the pointer leaving the visualization canvas.
pub async fn pointer_left(state: Arc<ViewerAppState>) -> CommandResult<()> {
    forward(&state, ViewerEvent::PointerLeft).await
}

/// Forwards a click on the visualization canvas.
pub async fn pointer_clicked(state: Arc<ViewerAppState>, x: f64, y: f64) -> CommandResult<()> {
    forward(&state, ViewerEvent::Clicked(Point::new(x, y))).await
}

/// Requests application shutdown (window close button).
pub async fn request_shutdown(state: Arc<ViewerAppState>) -> CommandResult<()> {
    forward(&state, ViewerEvent::Shutdown).await
}

async fn forward(state: &ViewerAppState, event: ViewerEvent) -> CommandResult<()> {
    match state.events.send(event).await {
        Ok(()) => CommandResult::ok(()),
        Err(_) => CommandResult::err("viewer dispatch loop is not running"),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use osi_core::{DiagramConfig, LayerRegistry, PacketMarker};

    fn make_state() -> (Arc<ViewerAppState>, mpsc::Receiver<ViewerEvent>) {
        let registry = LayerRegistry::new();
        let layout = Arc::new(
            DiagramLayout::build(registry.entries(), DiagramConfig::default()).expect("build"),
        );
        let marker = PacketMarker::new(&layout);
        let (tx, rx) = mpsc::channel(16);
        let state = ViewerAppState::new(tx, layout, Arc::new(Notebook::new()), marker.frame());
        (state, rx)
    }

    #[tokio::test]
    async fn test_get_scene_returns_seven_regions_and_six_connectors() {
        // Arrange
        let (state, _rx) = make_state();

        // Act
        let result = get_scene(state).await;

        // Assert
        assert!(result.success);
        let scene = result.data.unwrap();
        assert_eq!(scene.regions.len(), 7);
        assert_eq!(scene.connectors.len(), 6);
        assert_eq!(scene.regions[0].layer, "Physical");
        assert_eq!(scene.regions[6].label, "Application Layer");
    }

    #[tokio::test]
    async fn test_get_scene_initial_marker_sits_at_first_region() {
        // Arrange
        let (state, _rx) = make_state();

        // Act
        let scene = get_scene(Arc::clone(&state)).await.data.unwrap();

        // Assert – region 0, on the center line, reference radius.
        assert_eq!(scene.marker.index, 0);
        assert_eq!(scene.marker.x, 450.0);
        assert_eq!(scene.marker.y, 80.0);
        assert_eq!(scene.marker.radius, 15.0);
        assert!(!scene.tooltip.visible);
        assert!(scene.tooltip.text.is_empty());
    }

    #[tokio::test]
    async fn test_set_marker_is_reflected_in_next_scene() {
        // Arrange
        let (state, _rx) = make_state();
        let frame = MarkerFrame {
            index: 3,
            position: state.layout().marker_anchor(3),
        };

        // Act
        state.set_marker(frame, 3).await;
        let scene = get_scene(Arc::clone(&state)).await.data.unwrap();

        // Assert
        assert_eq!(scene.marker.index, 3);
        assert_eq!(scene.marker.y, state.layout().marker_anchor(3).y);
    }

    #[tokio::test]
    async fn test_set_tooltip_is_reflected_in_next_scene() {
        // Arrange
        let (state, _rx) = make_state();
        state
            .set_tooltip(TooltipState::Shown {
                text: "Routes packets via IP.",
                position: Point::new(470.0, 260.0),
            })
            .await;

        // Act
        let scene = get_scene(Arc::clone(&state)).await.data.unwrap();

        // Assert
        assert!(scene.tooltip.visible);
        assert_eq!(scene.tooltip.text, "Routes packets via IP.");
        assert_eq!((scene.tooltip.x, scene.tooltip.y), (470.0, 260.0));
    }

    #[tokio::test]
    async fn test_pointer_commands_enqueue_dispatch_events() {
        // Arrange
        let (state, mut rx) = make_state();

        // Act
        assert!(pointer_moved(Arc::clone(&state), 450.0, 80.0).await.success);
        assert!(pointer_clicked(Arc::clone(&state), 450.0, 80.0).await.success);
        assert!(pointer_left(Arc::clone(&state)).await.success);

        // Assert – events arrive in order.
        assert_eq!(
            rx.recv().await,
            Some(ViewerEvent::PointerMoved(Point::new(450.0, 80.0)))
        );
        assert_eq!(
            rx.recv().await,
            Some(ViewerEvent::Clicked(Point::new(450.0, 80.0)))
        );
        assert_eq!(rx.recv().await, Some(ViewerEvent::PointerLeft));
    }

    #[tokio::test]
    async fn test_request_shutdown_enqueues_shutdown_event() {
        // Arrange
        let (state, mut rx) = make_state();

        // Act
        assert!(request_shutdown(Arc::clone(&state)).await.success);

        // Assert
        assert_eq!(rx.recv().await, Some(ViewerEvent::Shutdown));
    }

    #[tokio::test]
    async fn test_pointer_command_fails_when_dispatch_loop_is_gone() {
        // Arrange
        let (state, rx) = make_state();
        drop(rx);

        // Act
        let result = pointer_moved(state, 1.0, 1.0).await;

        // Assert
        assert!(!result.success);
        assert!(result.error.is_some());
    }

    #[test]
    fn test_command_result_ok_sets_success_true() {
        let r: CommandResult<u32> = CommandResult::ok(7);
        assert!(r.success);
        assert_eq!(r.data.unwrap(), 7);
        assert!(r.error.is_none());
    }

    #[test]
    fn test_command_result_err_sets_success_false() {
        let r: CommandResult<u32> = CommandResult::err("oops");
        assert!(!r.success);
        assert!(r.data.is_none());
        assert_eq!(r.error.unwrap(), "oops");
    }
}
