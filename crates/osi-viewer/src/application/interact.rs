//! InteractionUseCase: hover and click dispatch for the diagram view.
//!
//! This use case sits at the application layer and depends only on the
//! domain layout and the [`TabHost`] trait; the notebook implementation is
//! injected at construction time, making the use case fully unit-testable.
//!
//! # Explicit per-region context
//!
//! Events are resolved through explicit state: the hit-tested region plus a
//! layer-to-page table built up front.  There are no per-region closures and
//! nothing is captured from a construction loop.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use osi_core::{DiagramLayout, OsiLayer, Point};
use tracing::debug;
use uuid::Uuid;

/// Opaque identity of one page in the tab host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageHandle(Uuid);

impl PageHandle {
    /// Mints a fresh handle.  Handles are never reused within a process.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Port to the tabbed content host.
///
/// The infrastructure notebook implements this; tests use a recording mock.
#[async_trait]
pub trait TabHost: Send + Sync {
    /// Brings the page with the given handle to the front.
    ///
    /// Returns `false` (not an error) if no such page exists.
    async fn reveal_page(&self, handle: PageHandle) -> bool;
}

/// Visibility and content of the hover tooltip.
///
/// `Hidden` carries no text: hiding the tooltip leaves no residual state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TooltipState {
    /// Not shown.
    #[default]
    Hidden,
    /// Shown near the pointer.
    Shown {
        /// The hovered region's tooltip text.
        text: &'static str,
        /// Top-left corner: pointer position plus the configured offset.
        position: Point,
    },
}

impl TooltipState {
    /// `true` while the tooltip is on screen.
    pub fn is_visible(&self) -> bool {
        matches!(self, TooltipState::Shown { .. })
    }
}

/// The Interaction use case.
///
/// Receives pointer events from the dispatch loop, maintains the hover /
/// tooltip state, and routes clicks to the tab host.
pub struct InteractionUseCase {
    layout: Arc<DiagramLayout>,
    tab_host: Arc<dyn TabHost>,
    /// Per-region context: which page each layer's click reveals.
    pages: HashMap<OsiLayer, PageHandle>,
    hovered: Option<OsiLayer>,
    tooltip: TooltipState,
}

impl InteractionUseCase {
    /// Creates the use case.
    ///
    /// `pages` maps each layer to the handle of its text page; a layer
    /// missing from the map simply makes clicks on its region no-ops.
    pub fn new(
        layout: Arc<DiagramLayout>,
        tab_host: Arc<dyn TabHost>,
        pages: HashMap<OsiLayer, PageHandle>,
    ) -> Self {
        Self {
            layout,
            tab_host,
            pages,
            hovered: None,
            tooltip: TooltipState::Hidden,
        }
    }

    /// The layer currently under the pointer, if any.
    pub fn hovered(&self) -> Option<OsiLayer> {
        self.hovered
    }

    /// The current tooltip state.
    pub fn tooltip(&self) -> TooltipState {
        self.tooltip
    }

    /// Handles a pointer move.
    ///
    /// Entering a region shows its tooltip at `pointer + offset`; moving
    /// within a region follows the pointer; moving onto the background (or
    /// another region) hides or replaces the tooltip accordingly.
    pub fn pointer_moved(&mut self, pointer: Point) -> TooltipState {
        match self.layout.hit_test(pointer) {
            Some(region) => {
                if self.hovered != Some(region.layer) {
                    debug!(layer = %region.layer, "hover enter");
                    self.hovered = Some(region.layer);
                }
                let (dx, dy) = self.layout.config().tooltip_offset;
                self.tooltip = TooltipState::Shown {
                    text: region.tooltip_text,
                    position: Point::new(pointer.x + dx, pointer.y + dy),
                };
            }
            None => self.clear_hover(),
        }
        self.tooltip
    }

    /// Handles the pointer leaving the canvas.  No-op if nothing was hovered.
    pub fn pointer_left(&mut self) -> TooltipState {
        self.clear_hover();
        self.tooltip
    }

    /// Handles a click.
    ///
    /// If a region is under the pointer and a page is registered for its
    /// layer, asks the tab host to reveal that page.  Clicks on the
    /// background, or on a layer with no registered page, are no-ops.
    ///
    /// Returns `true` if a page was revealed.
    pub async fn click(&self, pointer: Point) -> bool {
        let Some(region) = self.layout.hit_test(pointer) else {
            return false;
        };

        match self.pages.get(&region.layer) {
            Some(&handle) => {
                let revealed = self.tab_host.reveal_page(handle).await;
                if !revealed {
                    debug!(layer = %region.layer, "tab host has no page for handle");
                }
                revealed
            }
            None => {
                debug!(layer = %region.layer, "no page registered for layer");
                false
            }
        }
    }

    fn clear_hover(&mut self) {
        if self.hovered.take().is_some() {
            debug!("hover leave");
        }
        self.tooltip = TooltipState::Hidden;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
