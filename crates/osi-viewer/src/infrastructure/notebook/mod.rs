//! The tabbed content host.
//!
//! The window body is a notebook of pages: one text page per OSI layer,
//! each holding that layer's description and optional illustration, plus
//! the "Visualization" page holding the animated diagram.  Pages are
//! addressed by opaque [`PageHandle`]s minted at registration time.
//!
//! The notebook implements the application layer's [`TabHost`] port, which
//! is how a click on a diagram region reveals the matching text page.
//! Revealing an unknown handle is a defined no-op (`false`), not an error.
//!
//! State lives behind a `tokio::sync::Mutex` because both the dispatch loop
//! (click routing) and the UI bridge commands (status snapshots, tab clicks
//! from the frontend) reach it from async contexts.

use async_trait::async_trait;
use osi_core::OsiLayer;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::interact::{PageHandle, TabHost};
use crate::infrastructure::assets::ImageAsset;

/// What one page displays.
#[derive(Debug, Clone)]
pub enum PageContent {
    /// A layer's description page.
    Text {
        layer: OsiLayer,
        body_text: &'static str,
        /// The layer's illustration, when one was found.
        art: Option<ImageAsset>,
    },
    /// The animated diagram page.
    Visualization,
}

/// One registered page.
#[derive(Debug, Clone)]
pub struct Page {
    pub handle: PageHandle,
    /// The tab label, e.g. `"Transport"` or `"Visualization"`.
    pub label: String,
    pub content: PageContent,
}

#[derive(Default)]
struct NotebookState {
    pages: Vec<Page>,
    selected: Option<PageHandle>,
}

/// The tab notebook: an ordered page list plus the current selection.
#[derive(Default)]
pub struct Notebook {
    state: Mutex<NotebookState>,
}

impl Notebook {
    /// Creates an empty notebook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a page and returns its handle.
    ///
    /// The first page added becomes the initial selection.
    pub async fn add_page(&self, label: impl Into<String>, content: PageContent) -> PageHandle {
        let handle = PageHandle::new();
        let mut state = self.state.lock().await;
        state.pages.push(Page {
            handle,
            label: label.into(),
            content,
        });
        if state.selected.is_none() {
            state.selected = Some(handle);
        }
        handle
    }

    /// The handle of the currently selected page, if any page exists.
    pub async fn selected(&self) -> Option<PageHandle> {
        self.state.lock().await.selected
    }

    /// The label of the currently selected page.
    pub async fn selected_label(&self) -> Option<String> {
        let state = self.state.lock().await;
        let selected = state.selected?;
        state
            .pages
            .iter()
            .find(|p| p.handle == selected)
            .map(|p| p.label.clone())
    }

    /// All tab labels in page order.
    pub async fn labels(&self) -> Vec<String> {
        self.state
            .lock()
            .await
            .pages
            .iter()
            .map(|p| p.label.clone())
            .collect()
    }

    /// Number of pages.
    pub async fn page_count(&self) -> usize {
        self.state.lock().await.pages.len()
    }

    /// A clone of the page with the given handle, if registered.
    pub async fn page(&self, handle: PageHandle) -> Option<Page> {
        self.state
            .lock()
            .await
            .pages
            .iter()
            .find(|p| p.handle == handle)
            .cloned()
    }
}

#[async_trait]
impl TabHost for Notebook {
    /// Selects the page with the given handle.
    ///
    /// Returns `false` and leaves the selection unchanged if the handle is
    /// unknown.
    async fn reveal_page(&self, handle: PageHandle) -> bool {
        let mut state = self.state.lock().await;
        if state.pages.iter().any(|p| p.handle == handle) {
            state.selected = Some(handle);
            true
        } else {
            debug!("reveal_page called with unknown handle");
            false
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    async fn notebook_with_two_pages() -> (Notebook, PageHandle, PageHandle) {
        let notebook = Notebook::new();
        let first = notebook
            .add_page(
                "Physical",
                PageContent::Text {
                    layer: OsiLayer::Physical,
                    body_text: "bits",
                    art: None,
                },
            )
            .await;
        let second = notebook.add_page("Visualization", PageContent::Visualization).await;
        (notebook, first, second)
    }

    #[tokio::test]
    async fn test_first_added_page_is_selected_initially() {
        // Arrange / Act
        let (notebook, first, _) = notebook_with_two_pages().await;

        // Assert
        assert_eq!(notebook.selected().await, Some(first));
        assert_eq!(notebook.selected_label().await.as_deref(), Some("Physical"));
    }

    #[tokio::test]
    async fn test_reveal_page_switches_selection() {
        // Arrange
        let (notebook, _, second) = notebook_with_two_pages().await;

        // Act
        let revealed = notebook.reveal_page(second).await;

        // Assert
        assert!(revealed);
        assert_eq!(notebook.selected().await, Some(second));
    }

    #[tokio::test]
    async fn test_reveal_page_with_unknown_handle_is_a_no_op() {
        // Arrange
        let (notebook, first, _) = notebook_with_two_pages().await;

        // Act
        let revealed = notebook.reveal_page(PageHandle::new()).await;

        // Assert – selection unchanged.
        assert!(!revealed);
        assert_eq!(notebook.selected().await, Some(first));
    }

    #[tokio::test]
    async fn test_labels_preserve_insertion_order() {
        let (notebook, _, _) = notebook_with_two_pages().await;
        assert_eq!(notebook.labels().await, vec!["Physical", "Visualization"]);
    }

    #[tokio::test]
    async fn test_empty_notebook_has_no_selection() {
        let notebook = Notebook::new();
        assert_eq!(notebook.selected().await, None);
        assert_eq!(notebook.page_count().await, 0);
    }

    #[tokio::test]
    async fn test_page_returns_registered_content() {
        // Arrange
        let (notebook, first, _) = notebook_with_two_pages().await;

        // Act
        let page = notebook.page(first).await.expect("page");

        // Assert
        assert_eq!(page.label, "Physical");
        assert!(matches!(
            page.content,
            PageContent::Text { layer: OsiLayer::Physical, .. }
        ));
    }
}
