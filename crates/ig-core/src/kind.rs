use std::fmt;

use serde::{Deserialize, Serialize};

/// Family of paired begin/end calls. Variant order matches [`EndOp`] so that
/// every kind indexes its canonical end in the pairing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScopeKind {
    Window,
    Child,
    StyleVar,
    Group,
    Combo,
    TreeNode,
    ListBox,
    MenuBar,
    MainMenuBar,
    Menu,
    Tooltip,
    Popup,
    Table,
    TabBar,
    TabItem,
    DragDropSource,
    DragDropTarget,
    Disabled,
    Id,
    StyleColor,
    ItemFlag,
}

impl ScopeKind {
    pub const ALL: [ScopeKind; 21] = [
        ScopeKind::Window,
        ScopeKind::Child,
        ScopeKind::StyleVar,
        ScopeKind::Group,
        ScopeKind::Combo,
        ScopeKind::TreeNode,
        ScopeKind::ListBox,
        ScopeKind::MenuBar,
        ScopeKind::MainMenuBar,
        ScopeKind::Menu,
        ScopeKind::Tooltip,
        ScopeKind::Popup,
        ScopeKind::Table,
        ScopeKind::TabBar,
        ScopeKind::TabItem,
        ScopeKind::DragDropSource,
        ScopeKind::DragDropTarget,
        ScopeKind::Disabled,
        ScopeKind::Id,
        ScopeKind::StyleColor,
        ScopeKind::ItemFlag,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Window => "Window",
            Self::Child => "Child",
            Self::StyleVar => "StyleVar",
            Self::Group => "Group",
            Self::Combo => "Combo",
            Self::TreeNode => "TreeNode",
            Self::ListBox => "ListBox",
            Self::MenuBar => "MenuBar",
            Self::MainMenuBar => "MainMenuBar",
            Self::Menu => "Menu",
            Self::Tooltip => "Tooltip",
            Self::Popup => "Popup",
            Self::Table => "Table",
            Self::TabBar => "TabBar",
            Self::TabItem => "TabItem",
            Self::DragDropSource => "DragDropSource",
            Self::DragDropTarget => "DragDropTarget",
            Self::Disabled => "Disabled",
            Self::Id => "Id",
            Self::StyleColor => "StyleColor",
            Self::ItemFlag => "ItemFlag",
        }
    }

    pub fn end_op(self) -> EndOp {
        EndOp::ALL[self as usize]
    }
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PushPolicy {
    /// Always pushes; the begin result is ignored.
    Unconditional,
    /// Pushes only when the begin call reported `true`.
    Conditional,
}

impl PushPolicy {
    pub fn is_unconditional(self) -> bool {
        matches!(self, Self::Unconditional)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeginOp {
    Begin,
    BeginChild,
    #[serde(rename = "BeginChildID")]
    BeginChildId,
    PushStyleVar,
    BeginGroup,
    BeginCombo,
    TreeNode,
    TreeNodeEx,
    TreePush,
    BeginListBox,
    BeginMenuBar,
    BeginMainMenuBar,
    BeginMenu,
    BeginTooltip,
    BeginItemTooltip,
    BeginPopup,
    BeginPopupModal,
    BeginPopupContextItem,
    BeginPopupContextWindow,
    BeginPopupContextVoid,
    BeginTable,
    BeginTabBar,
    BeginTabItem,
    BeginDragDropSource,
    BeginDragDropTarget,
    BeginDisabled,
    #[serde(rename = "PushID")]
    PushId,
    PushStyleColor,
    PushItemFlag,
}

impl BeginOp {
    pub const ALL: [BeginOp; 29] = [
        BeginOp::Begin,
        BeginOp::BeginChild,
        BeginOp::BeginChildId,
        BeginOp::PushStyleVar,
        BeginOp::BeginGroup,
        BeginOp::BeginCombo,
        BeginOp::TreeNode,
        BeginOp::TreeNodeEx,
        BeginOp::TreePush,
        BeginOp::BeginListBox,
        BeginOp::BeginMenuBar,
        BeginOp::BeginMainMenuBar,
        BeginOp::BeginMenu,
        BeginOp::BeginTooltip,
        BeginOp::BeginItemTooltip,
        BeginOp::BeginPopup,
        BeginOp::BeginPopupModal,
        BeginOp::BeginPopupContextItem,
        BeginOp::BeginPopupContextWindow,
        BeginOp::BeginPopupContextVoid,
        BeginOp::BeginTable,
        BeginOp::BeginTabBar,
        BeginOp::BeginTabItem,
        BeginOp::BeginDragDropSource,
        BeginOp::BeginDragDropTarget,
        BeginOp::BeginDisabled,
        BeginOp::PushId,
        BeginOp::PushStyleColor,
        BeginOp::PushItemFlag,
    ];

    /// Name the call is bound under in scripts.
    pub fn name(self) -> &'static str {
        match self {
            Self::Begin => "Begin",
            Self::BeginChild => "BeginChild",
            Self::BeginChildId => "BeginChildID",
            Self::PushStyleVar => "PushStyleVar",
            Self::BeginGroup => "BeginGroup",
            Self::BeginCombo => "BeginCombo",
            Self::TreeNode => "TreeNode",
            Self::TreeNodeEx => "TreeNodeEx",
            Self::TreePush => "TreePush",
            Self::BeginListBox => "BeginListBox",
            Self::BeginMenuBar => "BeginMenuBar",
            Self::BeginMainMenuBar => "BeginMainMenuBar",
            Self::BeginMenu => "BeginMenu",
            Self::BeginTooltip => "BeginTooltip",
            Self::BeginItemTooltip => "BeginItemTooltip",
            Self::BeginPopup => "BeginPopup",
            Self::BeginPopupModal => "BeginPopupModal",
            Self::BeginPopupContextItem => "BeginPopupContextItem",
            Self::BeginPopupContextWindow => "BeginPopupContextWindow",
            Self::BeginPopupContextVoid => "BeginPopupContextVoid",
            Self::BeginTable => "BeginTable",
            Self::BeginTabBar => "BeginTabBar",
            Self::BeginTabItem => "BeginTabItem",
            Self::BeginDragDropSource => "BeginDragDropSource",
            Self::BeginDragDropTarget => "BeginDragDropTarget",
            Self::BeginDisabled => "BeginDisabled",
            Self::PushId => "PushID",
            Self::PushStyleColor => "PushStyleColor",
            Self::PushItemFlag => "PushItemFlag",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }
}

impl fmt::Display for BeginOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// End-style calls, one per [`ScopeKind`] and in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndOp {
    End,
    EndChild,
    PopStyleVar,
    EndGroup,
    EndCombo,
    TreePop,
    EndListBox,
    EndMenuBar,
    EndMainMenuBar,
    EndMenu,
    EndTooltip,
    EndPopup,
    EndTable,
    EndTabBar,
    EndTabItem,
    EndDragDropSource,
    EndDragDropTarget,
    EndDisabled,
    #[serde(rename = "PopID")]
    PopId,
    PopStyleColor,
    PopItemFlag,
}

impl EndOp {
    pub const ALL: [EndOp; 21] = [
        EndOp::End,
        EndOp::EndChild,
        EndOp::PopStyleVar,
        EndOp::EndGroup,
        EndOp::EndCombo,
        EndOp::TreePop,
        EndOp::EndListBox,
        EndOp::EndMenuBar,
        EndOp::EndMainMenuBar,
        EndOp::EndMenu,
        EndOp::EndTooltip,
        EndOp::EndPopup,
        EndOp::EndTable,
        EndOp::EndTabBar,
        EndOp::EndTabItem,
        EndOp::EndDragDropSource,
        EndOp::EndDragDropTarget,
        EndOp::EndDisabled,
        EndOp::PopId,
        EndOp::PopStyleColor,
        EndOp::PopItemFlag,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::End => "End",
            Self::EndChild => "EndChild",
            Self::PopStyleVar => "PopStyleVar",
            Self::EndGroup => "EndGroup",
            Self::EndCombo => "EndCombo",
            Self::TreePop => "TreePop",
            Self::EndListBox => "EndListBox",
            Self::EndMenuBar => "EndMenuBar",
            Self::EndMainMenuBar => "EndMainMenuBar",
            Self::EndMenu => "EndMenu",
            Self::EndTooltip => "EndTooltip",
            Self::EndPopup => "EndPopup",
            Self::EndTable => "EndTable",
            Self::EndTabBar => "EndTabBar",
            Self::EndTabItem => "EndTabItem",
            Self::EndDragDropSource => "EndDragDropSource",
            Self::EndDragDropTarget => "EndDragDropTarget",
            Self::EndDisabled => "EndDisabled",
            Self::PopId => "PopID",
            Self::PopStyleColor => "PopStyleColor",
            Self::PopItemFlag => "PopItemFlag",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }
}

impl fmt::Display for EndOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
