//! Layer illustration loading.
//!
//! Each layer may ship an optional PNG illustration shown at the top of its
//! text page.  Files are looked up by a fixed naming scheme — the lowercased
//! layer name with spaces replaced by underscores plus `.png` (so the Data
//! Link layer reads `data_link.png`) — inside a configured asset directory
//! that defaults to the process working directory.
//!
//! A missing, unreadable, or non-PNG file is the normal "no illustration"
//! case: it is logged and the layer's page is built text-only.  Nothing in
//! this module is ever fatal.
//!
//! # Why no image decoding?
//!
//! The frontend webview decodes and paints the PNG itself, so the Rust side
//! only needs to (a) hand over the raw bytes and (b) tell the frontend how
//! large to display them.  For that it reads the image's pixel size straight
//! out of the PNG IHDR chunk — fixed offsets defined by the PNG spec — and
//! computes a display size that fits the configured bounding box without
//! ever scaling up.

use std::collections::HashMap;
use std::path::PathBuf;

use osi_core::OsiLayer;
use thiserror::Error;
use tracing::{debug, warn};

/// File extension of layer illustrations.
const ASSET_EXTENSION: &str = "png";

/// The eight-byte PNG file signature.
const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Signature (8) + IHDR chunk length (4) + chunk type (4) + width (4) +
/// height (4): the minimum prefix needed to measure a PNG.
const PNG_HEADER_LEN: usize = 24;

/// Error type for asset loading operations.
///
/// Only ever logged — the public [`LayerArtLoader::load`] surface maps every
/// failure to `None`.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The file could not be read.
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a valid PNG.
    #[error("{path} is not a valid PNG file")]
    NotPng { path: PathBuf },
}

/// Bounding box an illustration must fit within, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxSize {
    pub width: u32,
    pub height: u32,
}

impl Default for MaxSize {
    /// The reference thumbnail box: 300×300.
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
        }
    }
}

/// A loaded, measured layer illustration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    /// Where the file was found.
    pub path: PathBuf,
    /// Source pixel width from the IHDR chunk.
    pub width: u32,
    /// Source pixel height from the IHDR chunk.
    pub height: u32,
    /// Width to display at — scaled down to fit the bounding box, never up.
    pub display_width: u32,
    /// Height to display at.
    pub display_height: u32,
    /// The raw PNG bytes, handed to the frontend for decoding.
    pub bytes: Vec<u8>,
}

/// Port for loading layer illustrations.
///
/// The filesystem implementation is [`FsArtLoader`]; tests use
/// [`MockArtLoader`].
pub trait LayerArtLoader: Send + Sync {
    /// Returns the illustration for `layer`, fitted to `max_size`, or `None`
    /// if the layer has none.  Never fails: every underlying error is the
    /// "no illustration" case.
    fn load(&self, layer: OsiLayer, max_size: MaxSize) -> Option<ImageAsset>;
}

/// Loads the illustrations for all seven layers.
///
/// Layers without an illustration are simply absent from the map; the
/// caller builds text-only pages for them.
pub fn collect_layer_art(
    loader: &dyn LayerArtLoader,
    max_size: MaxSize,
) -> HashMap<OsiLayer, ImageAsset> {
    OsiLayer::ALL
        .iter()
        .filter_map(|&layer| loader.load(layer, max_size).map(|asset| (layer, asset)))
        .collect()
}

/// Scales `(width, height)` down to fit within `max`, preserving aspect
/// ratio.  An image already inside the box is returned unchanged — this
/// function never scales up.
pub fn fit_within(width: u32, height: u32, max: MaxSize) -> (u32, u32) {
    if width <= max.width && height <= max.height {
        return (width, height);
    }

    let scale = f64::min(
        max.width as f64 / width as f64,
        max.height as f64 / height as f64,
    );
    let w = ((width as f64 * scale) as u32).max(1);
    let h = ((height as f64 * scale) as u32).max(1);
    (w, h)
}

/// Reads the pixel dimensions out of a PNG byte buffer.
///
/// Checks the file signature and the IHDR chunk type, then reads the
/// big-endian width and height at their fixed offsets.  Returns `None` for
/// anything that is not a plausible PNG (including zero dimensions).
fn png_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    if bytes.len() < PNG_HEADER_LEN || bytes[..8] != PNG_SIGNATURE {
        return None;
    }
    // IHDR must be the first chunk; its type tag sits at bytes 12..16.
    if &bytes[12..16] != b"IHDR" {
        return None;
    }
    let width = u32::from_be_bytes(bytes[16..20].try_into().expect("4 bytes"));
    let height = u32::from_be_bytes(bytes[20..24].try_into().expect("4 bytes"));
    if width == 0 || height == 0 {
        return None;
    }
    Some((width, height))
}

// ── Filesystem implementation ─────────────────────────────────────────────────

/// Loads illustrations from a directory on disk.
pub struct FsArtLoader {
    asset_dir: PathBuf,
}

impl FsArtLoader {
    /// Creates a loader rooted at `asset_dir`.
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
        }
    }

    /// The path the given layer's illustration is expected at.
    pub fn asset_path(&self, layer: OsiLayer) -> PathBuf {
        self.asset_dir
            .join(format!("{}.{}", layer.asset_stem(), ASSET_EXTENSION))
    }

    fn try_load(&self, layer: OsiLayer, max_size: MaxSize) -> Result<ImageAsset, AssetError> {
        let path = self.asset_path(layer);
        let bytes = std::fs::read(&path).map_err(|source| AssetError::Io {
            path: path.clone(),
            source,
        })?;

        let (width, height) =
            png_dimensions(&bytes).ok_or_else(|| AssetError::NotPng { path: path.clone() })?;
        let (display_width, display_height) = fit_within(width, height, max_size);

        Ok(ImageAsset {
            path,
            width,
            height,
            display_width,
            display_height,
            bytes,
        })
    }
}

impl LayerArtLoader for FsArtLoader {
    fn load(&self, layer: OsiLayer, max_size: MaxSize) -> Option<ImageAsset> {
        match self.try_load(layer, max_size) {
            Ok(asset) => {
                debug!(
                    layer = %layer,
                    path = %asset.path.display(),
                    width = asset.display_width,
                    height = asset.display_height,
                    "loaded layer illustration"
                );
                Some(asset)
            }
            // A file that simply isn't there is the expected case for most
            // installs; only log louder when a file exists but is unusable.
            Err(AssetError::Io { ref source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                debug!(layer = %layer, "no illustration found");
                None
            }
            Err(e) => {
                warn!(layer = %layer, error = %e, "failed to load layer illustration");
                None
            }
        }
    }
}

// ── Mock implementation (always compiled for tests) ───────────────────────────

/// A mock art loader that serves a fixed set of pre-built assets.
///
/// Used in unit tests and headless runs.  Does not touch the filesystem —
/// the asset map is provided at construction time.
#[derive(Default)]
pub struct MockArtLoader {
    /// The fixed assets this loader will serve, keyed by layer.
    pub assets: HashMap<OsiLayer, ImageAsset>,
}

impl MockArtLoader {
    /// A loader with no assets at all — every layer is text-only.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds a synthetic `width`×`height` asset for `layer`.
    pub fn with_asset(mut self, layer: OsiLayer, width: u32, height: u32) -> Self {
        self.assets.insert(
            layer,
            ImageAsset {
                path: PathBuf::from(format!("{}.png", layer.asset_stem())),
                width,
                height,
                display_width: width,
                display_height: height,
                bytes: Vec::new(),
            },
        );
        self
    }
}

impl LayerArtLoader for MockArtLoader {
    /// Serves the assets provided at construction time, re-fitting them to
    /// the requested bounding box.
    fn load(&self, layer: OsiLayer, max_size: MaxSize) -> Option<ImageAsset> {
        self.assets.get(&layer).map(|asset| {
            let (display_width, display_height) = fit_within(asset.width, asset.height, max_size);
            ImageAsset {
                display_width,
                display_height,
                ..asset.clone()
            }
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
