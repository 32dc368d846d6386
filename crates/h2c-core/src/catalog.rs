/// A fixed list of choices backing one combo box.
///
/// Entries may carry a human-readable note after the first space
/// (`"/input/x/click (left only)"`). Only the part before the space is ever
/// dispatched or persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    pub name: &'static str,
    pub entries: &'static [&'static str],
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Annotated entry at `index`, clamped to the last entry.
    pub fn label(&self, index: usize) -> &'static str {
        self.entries[index.min(self.entries.len() - 1)]
    }

    /// Bare value (note stripped) at `index`, clamped to the last entry.
    pub fn value(&self, index: usize) -> &'static str {
        strip_note(self.label(index))
    }

    /// Position of the entry whose bare value equals `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| strip_note(e) == name)
    }
}

/// Drop the trailing `" <note>"` from an annotated list entry.
pub fn strip_note(entry: &str) -> &str {
    match entry.split_once(' ') {
        Some((bare, _)) => bare,
        None => entry,
    }
}

/// Controller inputs a gesture can drive. Entry 0 strips to the empty
/// string, which the runtime treats as unbound.
pub const ACTIONS: Catalog = Catalog {
    name: "actions",
    entries: &[
        " (none)",
        "/input/menu/click",
        "/input/trigger/value",
        "/input/squeeze/value",
        "/input/thumbstick/click",
        "/input/x/click (left only)",
        "/input/y/click (left only)",
        "/input/a/click (right only)",
        "/input/b/click (right only)",
        "/input/system/click (not recommended)",
    ],
};

pub const INTERACTION_PROFILES: Catalog = Catalog {
    name: "interaction profiles",
    entries: &[
        "/interaction_profiles/microsoft/motion_controller (Windows Mixed Reality)",
        "/interaction_profiles/hp/mixed_reality_controller (HP Reverb G2)",
        "/interaction_profiles/oculus/touch_controller (Oculus Touch)",
        "/interaction_profiles/valve/index_controller (Valve Index)",
        "/interaction_profiles/htc/vive_controller (HTC Vive)",
    ],
};

/// Hand joints in `XrHandJointEXT` order.
pub const HAND_JOINTS: Catalog = Catalog {
    name: "hand joints",
    entries: &[
        "Palm",
        "Wrist",
        "Thumb metacarpal",
        "Thumb proximal",
        "Thumb distal",
        "Thumb tip",
        "Index metacarpal",
        "Index proximal",
        "Index intermediate",
        "Index distal",
        "Index tip",
        "Middle metacarpal",
        "Middle proximal",
        "Middle intermediate",
        "Middle distal",
        "Middle tip",
        "Ring metacarpal",
        "Ring proximal",
        "Ring intermediate",
        "Ring distal",
        "Ring tip",
        "Little metacarpal",
        "Little proximal",
        "Little intermediate",
        "Little distal",
        "Little tip",
    ],
};

pub const SKIN_TONES: Catalog = Catalog {
    name: "skin tones",
    entries: &["Bright", "Medium", "Dark", "Darker"],
};
