//! The seven-layer content registry.
//!
//! All educational content shown by the application — one description page
//! per OSI layer plus a short tooltip per layer — is compiled into the binary
//! here.  There is no loading step and therefore no error condition: the
//! registry is constructed once at startup and never mutated.
//!
//! # Why an enum instead of layer-name strings?
//!
//! The rest of the codebase refers to layers by [`OsiLayer`] value rather
//! than by string.  This makes "layer not found" unrepresentable everywhere
//! except at the one boundary that genuinely receives text (name lookup from
//! the UI), which goes through [`OsiLayer::from_name`].

/// The seven canonical OSI layers, in canonical order (layer 1 first).
///
/// The discriminant order is load-bearing: `OsiLayer::ALL` and
/// [`LayerRegistry`] iteration both follow it, and the diagram stacks its
/// regions top-to-bottom in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OsiLayer {
    Physical,
    DataLink,
    Network,
    Transport,
    Session,
    Presentation,
    Application,
}

impl OsiLayer {
    /// All seven layers in canonical order.
    pub const ALL: [OsiLayer; 7] = [
        OsiLayer::Physical,
        OsiLayer::DataLink,
        OsiLayer::Network,
        OsiLayer::Transport,
        OsiLayer::Session,
        OsiLayer::Presentation,
        OsiLayer::Application,
    ];

    /// Returns the layer's position in canonical order (0 for Physical
    /// through 6 for Application).
    pub fn index(self) -> usize {
        match self {
            OsiLayer::Physical => 0,
            OsiLayer::DataLink => 1,
            OsiLayer::Network => 2,
            OsiLayer::Transport => 3,
            OsiLayer::Session => 4,
            OsiLayer::Presentation => 5,
            OsiLayer::Application => 6,
        }
    }

    /// Returns the display name, e.g. `"Data Link"`.
    ///
    /// This is the exact string used for tab labels, region labels (suffixed
    /// with `" Layer"`), and [`OsiLayer::from_name`] lookup.
    pub fn name(self) -> &'static str {
        match self {
            OsiLayer::Physical => "Physical",
            OsiLayer::DataLink => "Data Link",
            OsiLayer::Network => "Network",
            OsiLayer::Transport => "Transport",
            OsiLayer::Session => "Session",
            OsiLayer::Presentation => "Presentation",
            OsiLayer::Application => "Application",
        }
    }

    /// Resolves a display name back to its layer.
    ///
    /// Matching is exact (`"Data Link"`, not `"data link"` or `"DataLink"`);
    /// the only callers hold strings that originated from [`OsiLayer::name`].
    /// Returns `None` for anything else.
    pub fn from_name(name: &str) -> Option<OsiLayer> {
        OsiLayer::ALL.iter().copied().find(|l| l.name() == name)
    }

    /// Returns the stem of the layer's illustration file: the lowercased
    /// display name with spaces replaced by underscores (`"data_link"`).
    ///
    /// The asset loader appends the image extension and resolves the result
    /// against its configured directory.
    pub fn asset_stem(self) -> String {
        self.name().to_lowercase().replace(' ', "_")
    }
}

impl std::fmt::Display for OsiLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One layer's compiled-in content.
///
/// Immutable after construction; lives for the process duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerEntry {
    /// Which layer this entry describes.
    pub layer: OsiLayer,
    /// The description shown on the layer's own tab page.
    pub body_text: &'static str,
    /// The short text shown when hovering the layer's region in the diagram.
    pub tooltip_text: &'static str,
}

/// The ordered, fixed sequence of all seven layer entries.
///
/// Indexable by position (canonical order) and lookup-able by layer or by
/// display name.  No mutation operations and no error conditions — the data
/// is compiled in, not loaded.
#[derive(Debug, Clone)]
pub struct LayerRegistry {
    entries: [LayerEntry; 7],
}

impl LayerRegistry {
    /// Builds the registry with the canonical content.
    pub fn new() -> Self {
        Self { entries: CONTENT }
    }

    /// Returns the entries in canonical order.
    pub fn entries(&self) -> &[LayerEntry] {
        &self.entries
    }

    /// Returns the entry at the given canonical position, if in range.
    pub fn get(&self, index: usize) -> Option<&LayerEntry> {
        self.entries.get(index)
    }

    /// Returns the entry for the given layer.
    ///
    /// Infallible: every layer has exactly one entry, stored at its
    /// canonical index.
    pub fn entry(&self, layer: OsiLayer) -> &LayerEntry {
        &self.entries[layer.index()]
    }

    /// Looks up an entry by display name (`"Transport"`, `"Data Link"`, ...).
    pub fn by_name(&self, name: &str) -> Option<&LayerEntry> {
        OsiLayer::from_name(name).map(|layer| self.entry(layer))
    }

    /// Number of entries — always 7.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; provided for API completeness alongside [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ── Compiled-in content ───────────────────────────────────────────────────────

/// The canonical content, one record per layer in canonical order.
///
/// Body texts pair a one-line summary with practical troubleshooting tips;
/// tooltip texts are two-line condensations of the same material.
const CONTENT: [LayerEntry; 7] = [
    LayerEntry {
        layer: OsiLayer::Physical,
        body_text: "Handles raw bit transmission over physical media.\n\n\
            Configuration Tips:\n\
            \u{2022} Check cables, power\n\
            \u{2022} Use tools like cable testers\n\
            \u{2022} Look for link lights.",
        tooltip_text: "Moves bits over media.\nInspect cable, signal, power.",
    },
    LayerEntry {
        layer: OsiLayer::DataLink,
        body_text: "Responsible for MAC addressing and framing.\n\n\
            Configuration Tips:\n\
            \u{2022} Verify ARP cache\n\
            \u{2022} Fix duplex mismatches\n\
            \u{2022} Troubleshoot VLAN settings.",
        tooltip_text: "Transmits frames.\nFix MAC conflicts, ARP cache.",
    },
    LayerEntry {
        layer: OsiLayer::Network,
        body_text: "Manages routing and IP addressing.\n\n\
            Configuration Tips:\n\
            \u{2022} Check routing tables\n\
            \u{2022} Ping gateways\n\
            \u{2022} Verify DNS settings.",
        tooltip_text: "Routes packets via IP.\nVerify DNS, routing tables.",
    },
    LayerEntry {
        layer: OsiLayer::Transport,
        body_text: "Ensures reliable data transfer via TCP/UDP.\n\n\
            Configuration Tips:\n\
            \u{2022} Validate firewall rules\n\
            \u{2022} Use netstat to check ports\n\
            \u{2022} Monitor retransmissions.",
        tooltip_text: "Controls flow via TCP/UDP.\nTroubleshoot ports, firewalls.",
    },
    LayerEntry {
        layer: OsiLayer::Session,
        body_text: "Maintains connections between apps.\n\n\
            Configuration Tips:\n\
            \u{2022} Check session logs\n\
            \u{2022} Manage authentication\n\
            \u{2022} Observe session lifetimes.",
        tooltip_text: "Manages connection states.\nMonitor logs, auth cycles.",
    },
    LayerEntry {
        layer: OsiLayer::Presentation,
        body_text: "Translates data formats and handles encryption.\n\n\
            Configuration Tips:\n\
            \u{2022} Analyze SSL/TLS handshakes\n\
            \u{2022} Verify encoding issues\n\
            \u{2022} Use certificate validators.",
        tooltip_text: "Encrypts/formats data.\nCheck TLS handshakes, encoding.",
    },
    LayerEntry {
        layer: OsiLayer::Application,
        body_text: "Provides services like web, email, and FTP.\n\n\
            Configuration Tips:\n\
            \u{2022} Use curl/telnet to test services\n\
            \u{2022} Check logs for errors\n\
            \u{2022} Review API responses.",
        tooltip_text: "Handles web, email, FTP protocols.\nTools: curl, browser dev console.",
    },
];

// ── Tests ─────────────────────────────────────────────────────────────────────
