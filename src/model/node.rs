// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::geometry::{Bounds, GridPoint, SparseCell};
use super::ids::NodeId;

/// Variant tag of a [`NodeKind`], as used in external descriptors (`"type": "button"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Box,
    Card,
    Table,
    Hsplit,
    Placeholder,
    Button,
    Checkbox,
    Radio,
    Input,
    Dropdown,
    Tabs,
    Nav,
    List,
    Modal,
    Search,
    Toggle,
    Progress,
    Breadcrumb,
    Pagination,
    Line,
    Arrow,
    Text,
    Stroke,
    Group,
}

impl NodeType {
    pub const ALL: [NodeType; 24] = [
        Self::Box,
        Self::Card,
        Self::Table,
        Self::Hsplit,
        Self::Placeholder,
        Self::Button,
        Self::Checkbox,
        Self::Radio,
        Self::Input,
        Self::Dropdown,
        Self::Tabs,
        Self::Nav,
        Self::List,
        Self::Modal,
        Self::Search,
        Self::Toggle,
        Self::Progress,
        Self::Breadcrumb,
        Self::Pagination,
        Self::Line,
        Self::Arrow,
        Self::Text,
        Self::Stroke,
        Self::Group,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Card => "card",
            Self::Table => "table",
            Self::Hsplit => "hsplit",
            Self::Placeholder => "placeholder",
            Self::Button => "button",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Input => "input",
            Self::Dropdown => "dropdown",
            Self::Tabs => "tabs",
            Self::Nav => "nav",
            Self::List => "list",
            Self::Modal => "modal",
            Self::Search => "search",
            Self::Toggle => "toggle",
            Self::Progress => "progress",
            Self::Breadcrumb => "breadcrumb",
            Self::Pagination => "pagination",
            Self::Line => "line",
            Self::Arrow => "arrow",
            Self::Text => "text",
            Self::Stroke => "stroke",
            Self::Group => "group",
        }
    }

    /// Minimum `(width, height)` enforced on creation and resize.
    pub fn min_size(self) -> (i32, i32) {
        match self {
            Self::Box => (2, 2),
            Self::Card => (4, 4),
            Self::Table => (4, 3),
            Self::Hsplit => (5, 3),
            Self::Placeholder => (3, 3),
            Self::Button | Self::Checkbox | Self::Radio => (4, 1),
            Self::Input | Self::Tabs | Self::Nav => (4, 3),
            Self::Dropdown | Self::Search => (6, 3),
            Self::Modal => (6, 4),
            Self::List => (3, 1),
            Self::Toggle | Self::Pagination => (5, 1),
            Self::Progress => (3, 1),
            Self::Breadcrumb
            | Self::Line
            | Self::Arrow
            | Self::Text
            | Self::Stroke
            | Self::Group => (1, 1),
        }
    }

    /// Clamps `bounds` so it satisfies [`NodeType::min_size`].
    pub fn clamp_bounds(self, bounds: Bounds) -> Bounds {
        let (min_w, min_h) = self.min_size();
        Bounds { width: bounds.width.max(min_w), height: bounds.height.max(min_h), ..bounds }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNodeType(pub String);

impl fmt::Display for UnknownNodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown node type '{}'", self.0)
    }
}

impl std::error::Error for UnknownNodeType {}

impl FromStr for NodeType {
    type Err = UnknownNodeType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|ty| ty.as_str() == normalized)
            .ok_or_else(|| UnknownNodeType(s.to_owned()))
    }
}

/// Variant-specific payload of a scene node.
///
/// Line/arrow `points` and stroke `cells` are relative to the owning node's bounds origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Box { label: String },
    Card { title: String, content: String },
    Table { columns: Vec<String>, weights: Vec<u32> },
    Hsplit { ratio: u8 },
    Placeholder { label: String },
    Button { label: String },
    Checkbox { label: String, checked: bool },
    Radio { label: String, selected: bool },
    Input { placeholder: String },
    Dropdown { label: String },
    Tabs { tabs: Vec<String>, active: usize },
    Nav { title: String, links: Vec<String> },
    List { items: Vec<String> },
    Modal { title: String, content: String },
    Search { placeholder: String },
    Toggle { label: String, on: bool },
    Progress { percent: u8 },
    Breadcrumb { items: Vec<String> },
    Pagination { pages: u32, current: u32 },
    Line { points: Vec<GridPoint> },
    Arrow { points: Vec<GridPoint> },
    Text { content: String },
    Stroke { cells: Vec<SparseCell> },
    Group { child_ids: Vec<NodeId> },
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

impl NodeKind {
    pub fn node_type(&self) -> NodeType {
        match self {
            Self::Box { .. } => NodeType::Box,
            Self::Card { .. } => NodeType::Card,
            Self::Table { .. } => NodeType::Table,
            Self::Hsplit { .. } => NodeType::Hsplit,
            Self::Placeholder { .. } => NodeType::Placeholder,
            Self::Button { .. } => NodeType::Button,
            Self::Checkbox { .. } => NodeType::Checkbox,
            Self::Radio { .. } => NodeType::Radio,
            Self::Input { .. } => NodeType::Input,
            Self::Dropdown { .. } => NodeType::Dropdown,
            Self::Tabs { .. } => NodeType::Tabs,
            Self::Nav { .. } => NodeType::Nav,
            Self::List { .. } => NodeType::List,
            Self::Modal { .. } => NodeType::Modal,
            Self::Search { .. } => NodeType::Search,
            Self::Toggle { .. } => NodeType::Toggle,
            Self::Progress { .. } => NodeType::Progress,
            Self::Breadcrumb { .. } => NodeType::Breadcrumb,
            Self::Pagination { .. } => NodeType::Pagination,
            Self::Line { .. } => NodeType::Line,
            Self::Arrow { .. } => NodeType::Arrow,
            Self::Text { .. } => NodeType::Text,
            Self::Stroke { .. } => NodeType::Stroke,
            Self::Group { .. } => NodeType::Group,
        }
    }

    /// The payload a freshly placed widget of type `ty` starts with.
    pub fn default_for(ty: NodeType) -> Self {
        match ty {
            NodeType::Box => Self::Box { label: String::new() },
            NodeType::Card => {
                Self::Card { title: "Card title".to_owned(), content: "Card content".to_owned() }
            }
            NodeType::Table => Self::Table {
                columns: strings(&["Column 1", "Column 2", "Column 3"]),
                weights: vec![1, 1, 1],
            },
            NodeType::Hsplit => Self::Hsplit { ratio: 50 },
            NodeType::Placeholder => Self::Placeholder { label: "Image".to_owned() },
            NodeType::Button => Self::Button { label: "Button".to_owned() },
            NodeType::Checkbox => Self::Checkbox { label: "Option".to_owned(), checked: false },
            NodeType::Radio => Self::Radio { label: "Choice".to_owned(), selected: false },
            NodeType::Input => Self::Input { placeholder: "Enter text...".to_owned() },
            NodeType::Dropdown => Self::Dropdown { label: "Select".to_owned() },
            NodeType::Tabs => Self::Tabs { tabs: strings(&["Tab 1", "Tab 2", "Tab 3"]), active: 0 },
            NodeType::Nav => Self::Nav {
                title: "Brand".to_owned(),
                links: strings(&["Home", "About", "Contact"]),
            },
            NodeType::List => Self::List { items: strings(&["Item 1", "Item 2", "Item 3"]) },
            NodeType::Modal => {
                Self::Modal { title: "Dialog".to_owned(), content: "Message".to_owned() }
            }
            NodeType::Search => Self::Search { placeholder: "Search...".to_owned() },
            NodeType::Toggle => Self::Toggle { label: "Enabled".to_owned(), on: false },
            NodeType::Progress => Self::Progress { percent: 50 },
            NodeType::Breadcrumb => Self::Breadcrumb { items: strings(&["Home", "Page"]) },
            NodeType::Pagination => Self::Pagination { pages: 3, current: 1 },
            NodeType::Line => Self::Line { points: Vec::new() },
            NodeType::Arrow => Self::Arrow { points: Vec::new() },
            NodeType::Text => Self::Text { content: "Text".to_owned() },
            NodeType::Stroke => Self::Stroke { cells: Vec::new() },
            NodeType::Group => Self::Group { child_ids: Vec::new() },
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    pub fn child_ids(&self) -> &[NodeId] {
        match self {
            Self::Group { child_ids } => child_ids,
            _ => &[],
        }
    }

    pub(crate) fn child_ids_mut(&mut self) -> Option<&mut Vec<NodeId>> {
        match self {
            Self::Group { child_ids } => Some(child_ids),
            _ => None,
        }
    }
}

/// A scene node: shared header fields plus a variant payload.
///
/// Nodes live only inside a [`Document`](super::Document) arena; `parent_id` and group
/// `child_ids` are index relationships, never ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    name: SmolStr,
    bounds: Bounds,
    visible: bool,
    locked: bool,
    parent_id: Option<NodeId>,
    kind: NodeKind,
}

impl Node {
    pub(crate) fn from_descriptor(id: NodeId, descriptor: NodeDescriptor) -> Self {
        let ty = descriptor.kind.node_type();
        Self {
            id,
            name: descriptor.name,
            bounds: ty.clamp_bounds(descriptor.bounds),
            visible: true,
            locked: false,
            parent_id: None,
            kind: descriptor.kind,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn parent_id(&self) -> Option<&NodeId> {
        self.parent_id.as_ref()
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn node_type(&self) -> NodeType {
        self.kind.node_type()
    }

    pub(crate) fn set_id(&mut self, id: NodeId) {
        self.id = id;
    }

    pub(crate) fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = self.node_type().clamp_bounds(bounds);
    }

    pub(crate) fn set_parent_id(&mut self, parent_id: Option<NodeId>) {
        self.parent_id = parent_id;
    }

    pub(crate) fn kind_mut(&mut self) -> &mut NodeKind {
        &mut self.kind
    }

    /// Applies a shallow patch. Returns `true` when anything changed.
    ///
    /// A `kind` of a different variant is ignored so a patch never changes a node's type.
    pub(crate) fn apply_patch(&mut self, patch: &NodePatch) -> bool {
        let before = self.clone();
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(visible) = patch.visible {
            self.visible = visible;
        }
        if let Some(locked) = patch.locked {
            self.locked = locked;
        }
        if let Some(kind) = &patch.kind {
            if kind.node_type() == self.node_type() && !kind.is_group() {
                self.kind = kind.clone();
            }
        }
        if let Some(bounds) = patch.bounds {
            self.set_bounds(bounds);
        }
        *self != before
    }
}

/// Everything a tool commit supplies for a new node: identity, visibility, lock state and
/// parent are assigned by the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDescriptor {
    pub name: SmolStr,
    pub bounds: Bounds,
    pub kind: NodeKind,
}

impl NodeDescriptor {
    pub fn new(bounds: Bounds, kind: NodeKind) -> Self {
        Self { name: SmolStr::new(kind.node_type().as_str()), bounds, kind }
    }

    pub fn with_name(mut self, name: impl AsRef<str>) -> Self {
        self.name = SmolStr::new(name);
        self
    }

    pub fn node_type(&self) -> NodeType {
        self.kind.node_type()
    }

    pub fn translated(mut self, d_row: i32, d_col: i32) -> Self {
        self.bounds = self.bounds.translated(d_row, d_col);
        self
    }
}

/// Shallow update of a node's mutable fields. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePatch {
    pub name: Option<SmolStr>,
    pub bounds: Option<Bounds>,
    pub visible: Option<bool>,
    pub locked: Option<bool>,
    pub kind: Option<NodeKind>,
}

impl NodePatch {
    pub fn kind(kind: NodeKind) -> Self {
        Self { kind: Some(kind), ..Self::default() }
    }

    pub fn bounds(bounds: Bounds) -> Self {
        Self { bounds: Some(bounds), ..Self::default() }
    }
}
