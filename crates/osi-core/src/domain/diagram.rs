//! Diagram geometry for the layer-stack visualization.
//!
//! The visualization page draws the seven layers as a vertical stack of
//! labelled rectangles with a downward connector in each gap, plus a moving
//! marker.  This module computes *where* everything is; it never draws.
//! The frontend renders the [`DiagramLayout`] this module produces, and the
//! interaction code asks it which region (if any) contains the pointer.
//!
//! All coordinates are in canvas pixels with the origin at the top-left and
//! the y axis growing downward.
//!
//! # Geometry
//!
//! Region `i` (0-based, top to bottom) occupies
//!
//! ```text
//! x: origin_x .. origin_x + region_width
//! y: origin_y + i * (region_height + region_gap)
//!    .. y + region_height
//! ```
//!
//! so its vertical center is `origin_y + i * (region_height + region_gap)
//! + region_height / 2`, and centers are evenly spaced by
//! `region_height + region_gap`.

use thiserror::Error;

use super::registry::{LayerEntry, OsiLayer};

/// Errors that can occur when building the diagram layout.
#[derive(Debug, Error, PartialEq)]
pub enum DiagramError {
    /// The entry list was empty, leaving the geometry undefined.
    #[error("diagram layout requires at least one layer entry")]
    EmptyLayout,
}

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle on the canvas.
///
/// `x` and `y` are the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Returns the rightmost x coordinate.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Returns the bottommost y coordinate.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Returns the y coordinate of the rectangle's center line.
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Returns `true` if the point lies inside the rectangle.
    ///
    /// Edges count as inside, matching the hit area of a drawn shape.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

/// Fixed geometry constants for the diagram.
///
/// The defaults reproduce the reference rendering: a 700-pixel-wide stack of
/// 60-pixel-tall boxes separated by 20-pixel gaps, starting at (100, 50).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramConfig {
    /// Width of every region rectangle.
    pub region_width: f64,
    /// Height of every region rectangle.
    pub region_height: f64,
    /// Vertical gap between adjacent regions.
    pub region_gap: f64,
    /// X coordinate of every region's left edge.
    pub origin_x: f64,
    /// Y coordinate of the first region's top edge.
    pub origin_y: f64,
    /// Radius of the marker disc.
    pub marker_radius: f64,
    /// Offset from the pointer position to the tooltip's top-left corner.
    pub tooltip_offset: (f64, f64),
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            region_width: 700.0,
            region_height: 60.0,
            region_gap: 20.0,
            origin_x: 100.0,
            origin_y: 50.0,
            marker_radius: 15.0,
            tooltip_offset: (20.0, 20.0),
        }
    }
}

impl DiagramConfig {
    /// X coordinate of the stack's vertical center line.
    ///
    /// The marker travels along this line and the connectors are drawn on it.
    pub fn horizontal_center(&self) -> f64 {
        self.origin_x + self.region_width / 2.0
    }
}

/// The drawn rectangle + label representing one layer in the diagram.
///
/// A diagram-only projection of a [`LayerEntry`]; created by
/// [`DiagramLayout::build`] and destroyed with the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerRegion {
    /// The layer this region represents.
    pub layer: OsiLayer,
    /// Position in the stack, 0 = topmost.
    pub index: usize,
    /// The region's rectangle on the canvas.
    pub bounds: Rect,
    /// The label drawn centered in the rectangle, e.g. `"Transport Layer"`.
    pub label: String,
    /// The tooltip text shown while the pointer hovers this region.
    pub tooltip_text: &'static str,
}

impl LayerRegion {
    /// The y coordinate of this region's center line — where the marker
    /// sits while "at" this layer.
    pub fn vertical_center(&self) -> f64 {
        self.bounds.center_y()
    }
}

/// A downward directional indicator drawn in the gap between two adjacent
/// regions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    /// X coordinate (the stack's horizontal center).
    pub x: f64,
    /// Top of the connector line (bottom edge of the upper region).
    pub y_start: f64,
    /// Bottom of the connector line (top edge of the lower region); the
    /// arrowhead is drawn here.
    pub y_end: f64,
}

/// The computed geometry of the whole diagram.
#[derive(Debug, Clone)]
pub struct DiagramLayout {
    config: DiagramConfig,
    regions: Vec<LayerRegion>,
    connectors: Vec<Connector>,
}

impl DiagramLayout {
    /// Lays out one region per entry, top-to-bottom in the given order,
    /// with a connector in each inter-region gap (none after the last).
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::EmptyLayout`] if `entries` is empty — the
    /// geometry would be undefined.  Callers pass the registry's canonical
    /// seven entries.
    pub fn build(entries: &[LayerEntry], config: DiagramConfig) -> Result<Self, DiagramError> {
        if entries.is_empty() {
            return Err(DiagramError::EmptyLayout);
        }

        let step = config.region_height + config.region_gap;
        let center_x = config.horizontal_center();

        let regions: Vec<LayerRegion> = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| LayerRegion {
                layer: entry.layer,
                index: i,
                bounds: Rect {
                    x: config.origin_x,
                    y: config.origin_y + i as f64 * step,
                    width: config.region_width,
                    height: config.region_height,
                },
                label: format!("{} Layer", entry.layer.name()),
                tooltip_text: entry.tooltip_text,
            })
            .collect();

        let connectors: Vec<Connector> = regions
            .windows(2)
            .map(|pair| Connector {
                x: center_x,
                y_start: pair[0].bounds.bottom(),
                y_end: pair[1].bounds.y,
            })
            .collect();

        Ok(Self {
            config,
            regions,
            connectors,
        })
    }

    /// The geometry constants this layout was built with.
    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// The regions, topmost first.
    pub fn regions(&self) -> &[LayerRegion] {
        &self.regions
    }

    /// The connectors, topmost gap first.  Always `regions().len() - 1` long.
    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    /// Number of regions in the stack.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Returns the region whose rectangle contains `point`, if any.
    ///
    /// Regions never overlap, so the first match is the only match.
    pub fn hit_test(&self, point: Point) -> Option<&LayerRegion> {
        self.regions.iter().find(|r| r.bounds.contains(point))
    }

    /// Returns the region representing `layer`, if present in this layout.
    pub fn region_for(&self, layer: OsiLayer) -> Option<&LayerRegion> {
        self.regions.iter().find(|r| r.layer == layer)
    }

    /// The marker's resting point while at region `index`: the region's
    /// vertical center on the stack's horizontal center line.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; the marker state machine
    /// guarantees its index is always valid.
    pub fn marker_anchor(&self, index: usize) -> Point {
        Point::new(
            self.config.horizontal_center(),
            self.regions[index].vertical_center(),
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registry::LayerRegistry;

    fn canonical_layout() -> DiagramLayout {
        let registry = LayerRegistry::new();
        DiagramLayout::build(registry.entries(), DiagramConfig::default()).expect("build")
    }

    // ── Rect helpers ──────────────────────────────────────────────────────────

    #[test]
    fn test_rect_contains_interior_and_edge_points() {
        // Arrange
        let rect = Rect { x: 100.0, y: 50.0, width: 700.0, height: 60.0 };

        // Assert
        assert!(rect.contains(Point::new(450.0, 80.0)), "interior");
        assert!(rect.contains(Point::new(100.0, 50.0)), "top-left corner");
        assert!(rect.contains(Point::new(800.0, 110.0)), "bottom-right corner");
        assert!(!rect.contains(Point::new(99.0, 80.0)), "left of rect");
        assert!(!rect.contains(Point::new(450.0, 111.0)), "below rect");
    }

    #[test]
    fn test_rect_center_y_is_midpoint() {
        let rect = Rect { x: 0.0, y: 50.0, width: 10.0, height: 60.0 };
        assert_eq!(rect.center_y(), 80.0);
    }

    // ── build ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_build_with_canonical_entries_produces_seven_regions_six_connectors() {
        // Act
        let layout = canonical_layout();

        // Assert
        assert_eq!(layout.region_count(), 7);
        assert_eq!(layout.connectors().len(), 6);
    }

    #[test]
    fn test_build_with_empty_entries_fails_with_empty_layout() {
        let result = DiagramLayout::build(&[], DiagramConfig::default());
        assert_eq!(result.unwrap_err(), DiagramError::EmptyLayout);
    }

    #[test]
    fn test_region_centers_are_strictly_increasing_and_evenly_spaced() {
        // Arrange
        let layout = canonical_layout();
        let step = layout.config().region_height + layout.config().region_gap;

        // Assert
        let centers: Vec<f64> = layout.regions().iter().map(|r| r.vertical_center()).collect();
        for pair in centers.windows(2) {
            assert!(pair[1] > pair[0], "centers must increase down the stack");
            assert_eq!(pair[1] - pair[0], step, "centers must be spaced by height+gap");
        }
    }

    #[test]
    fn test_first_region_center_matches_reference_geometry() {
        // origin_y 50 + height 60 / 2 = 80
        let layout = canonical_layout();
        assert_eq!(layout.regions()[0].vertical_center(), 80.0);
    }

    #[test]
    fn test_regions_follow_entry_order_top_to_bottom() {
        let layout = canonical_layout();
        assert_eq!(layout.regions()[0].layer, OsiLayer::Physical);
        assert_eq!(layout.regions()[6].layer, OsiLayer::Application);
    }

    #[test]
    fn test_region_labels_carry_layer_suffix() {
        let layout = canonical_layout();
        assert_eq!(layout.regions()[3].label, "Transport Layer");
    }

    #[test]
    fn test_connectors_span_the_gaps_between_adjacent_regions() {
        // Arrange
        let layout = canonical_layout();

        // Assert – each connector runs from the upper region's bottom edge to
        // the lower region's top edge, on the horizontal center line.
        for (i, c) in layout.connectors().iter().enumerate() {
            assert_eq!(c.x, layout.config().horizontal_center());
            assert_eq!(c.y_start, layout.regions()[i].bounds.bottom());
            assert_eq!(c.y_end, layout.regions()[i + 1].bounds.y);
            assert!(c.y_end > c.y_start, "connectors must point downward");
        }
    }

    #[test]
    fn test_build_with_single_entry_produces_no_connectors() {
        // Arrange
        let registry = LayerRegistry::new();
        let one = &registry.entries()[..1];

        // Act
        let layout = DiagramLayout::build(one, DiagramConfig::default()).expect("build");

        // Assert
        assert_eq!(layout.region_count(), 1);
        assert!(layout.connectors().is_empty());
    }

    // ── hit_test ──────────────────────────────────────────────────────────────

    #[test]
    fn test_hit_test_finds_region_under_point() {
        // Arrange
        let layout = canonical_layout();
        let transport = layout.region_for(OsiLayer::Transport).expect("region");
        let inside = Point::new(
            transport.bounds.x + 5.0,
            transport.bounds.center_y(),
        );

        // Act
        let hit = layout.hit_test(inside);

        // Assert
        assert_eq!(hit.map(|r| r.layer), Some(OsiLayer::Transport));
    }

    #[test]
    fn test_hit_test_returns_none_in_gap_between_regions() {
        // Arrange – a point on the center line, halfway down the first gap.
        let layout = canonical_layout();
        let gap_y = layout.regions()[0].bounds.bottom() + layout.config().region_gap / 2.0;

        // Act / Assert
        assert!(layout.hit_test(Point::new(layout.config().horizontal_center(), gap_y)).is_none());
    }

    #[test]
    fn test_hit_test_returns_none_outside_the_stack() {
        let layout = canonical_layout();
        assert!(layout.hit_test(Point::new(10.0, 10.0)).is_none());
    }

    // ── marker_anchor ─────────────────────────────────────────────────────────

    #[test]
    fn test_marker_anchor_sits_on_center_line_at_region_center() {
        // Arrange
        let layout = canonical_layout();

        // Act
        let anchor = layout.marker_anchor(2);

        // Assert
        assert_eq!(anchor.x, layout.config().horizontal_center());
        assert_eq!(anchor.y, layout.regions()[2].vertical_center());
    }

    #[test]
    fn test_horizontal_center_matches_reference_geometry() {
        // origin_x 100 + width 700 / 2 = 450
        assert_eq!(DiagramConfig::default().horizontal_center(), 450.0);
    }
}
