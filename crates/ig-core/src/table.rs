use crate::kind::PushPolicy::{Conditional, Unconditional};
use crate::kind::{BeginOp, EndOp, PushPolicy, ScopeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeginPairing {
    pub op: BeginOp,
    pub kind: ScopeKind,
    pub policy: PushPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndPairing {
    pub op: EndOp,
    pub kind: ScopeKind,
    /// Accepts a repeat count, like `PopStyleVar(count)`.
    pub counted: bool,
}

/// Static begin/end pairing. Entries are stored in discriminant order, so
/// lookups are plain indexing.
#[derive(Debug)]
pub struct PairingTable {
    begins: &'static [BeginPairing],
    ends: &'static [EndPairing],
}

const fn begin(op: BeginOp, kind: ScopeKind, policy: PushPolicy) -> BeginPairing {
    BeginPairing { op, kind, policy }
}

const fn end(op: EndOp, kind: ScopeKind, counted: bool) -> EndPairing {
    EndPairing { op, kind, counted }
}

const BEGINS: [BeginPairing; 29] = [
    begin(BeginOp::Begin, ScopeKind::Window, Conditional),
    begin(BeginOp::BeginChild, ScopeKind::Child, Conditional),
    begin(BeginOp::BeginChildId, ScopeKind::Child, Conditional),
    begin(BeginOp::PushStyleVar, ScopeKind::StyleVar, Unconditional),
    begin(BeginOp::BeginGroup, ScopeKind::Group, Unconditional),
    begin(BeginOp::BeginCombo, ScopeKind::Combo, Conditional),
    begin(BeginOp::TreeNode, ScopeKind::TreeNode, Conditional),
    begin(BeginOp::TreeNodeEx, ScopeKind::TreeNode, Conditional),
    begin(BeginOp::TreePush, ScopeKind::TreeNode, Unconditional),
    begin(BeginOp::BeginListBox, ScopeKind::ListBox, Conditional),
    begin(BeginOp::BeginMenuBar, ScopeKind::MenuBar, Conditional),
    begin(BeginOp::BeginMainMenuBar, ScopeKind::MainMenuBar, Conditional),
    begin(BeginOp::BeginMenu, ScopeKind::Menu, Conditional),
    begin(BeginOp::BeginTooltip, ScopeKind::Tooltip, Conditional),
    begin(BeginOp::BeginItemTooltip, ScopeKind::Tooltip, Conditional),
    begin(BeginOp::BeginPopup, ScopeKind::Popup, Conditional),
    begin(BeginOp::BeginPopupModal, ScopeKind::Popup, Conditional),
    begin(BeginOp::BeginPopupContextItem, ScopeKind::Popup, Conditional),
    begin(BeginOp::BeginPopupContextWindow, ScopeKind::Popup, Conditional),
    begin(BeginOp::BeginPopupContextVoid, ScopeKind::Popup, Conditional),
    begin(BeginOp::BeginTable, ScopeKind::Table, Conditional),
    begin(BeginOp::BeginTabBar, ScopeKind::TabBar, Conditional),
    begin(BeginOp::BeginTabItem, ScopeKind::TabItem, Conditional),
    begin(BeginOp::BeginDragDropSource, ScopeKind::DragDropSource, Conditional),
    begin(BeginOp::BeginDragDropTarget, ScopeKind::DragDropTarget, Conditional),
    begin(BeginOp::BeginDisabled, ScopeKind::Disabled, Unconditional),
    begin(BeginOp::PushId, ScopeKind::Id, Unconditional),
    begin(BeginOp::PushStyleColor, ScopeKind::StyleColor, Unconditional),
    begin(BeginOp::PushItemFlag, ScopeKind::ItemFlag, Unconditional),
];

const ENDS: [EndPairing; 21] = [
    end(EndOp::End, ScopeKind::Window, false),
    end(EndOp::EndChild, ScopeKind::Child, false),
    end(EndOp::PopStyleVar, ScopeKind::StyleVar, true),
    end(EndOp::EndGroup, ScopeKind::Group, false),
    end(EndOp::EndCombo, ScopeKind::Combo, false),
    end(EndOp::TreePop, ScopeKind::TreeNode, false),
    end(EndOp::EndListBox, ScopeKind::ListBox, false),
    end(EndOp::EndMenuBar, ScopeKind::MenuBar, false),
    end(EndOp::EndMainMenuBar, ScopeKind::MainMenuBar, false),
    end(EndOp::EndMenu, ScopeKind::Menu, false),
    end(EndOp::EndTooltip, ScopeKind::Tooltip, false),
    end(EndOp::EndPopup, ScopeKind::Popup, false),
    end(EndOp::EndTable, ScopeKind::Table, false),
    end(EndOp::EndTabBar, ScopeKind::TabBar, false),
    end(EndOp::EndTabItem, ScopeKind::TabItem, false),
    end(EndOp::EndDragDropSource, ScopeKind::DragDropSource, false),
    end(EndOp::EndDragDropTarget, ScopeKind::DragDropTarget, false),
    end(EndOp::EndDisabled, ScopeKind::Disabled, false),
    end(EndOp::PopId, ScopeKind::Id, false),
    end(EndOp::PopStyleColor, ScopeKind::StyleColor, true),
    end(EndOp::PopItemFlag, ScopeKind::ItemFlag, false),
];

pub static PAIRING_TABLE: PairingTable = PairingTable {
    begins: &BEGINS,
    ends: &ENDS,
};

impl PairingTable {
    pub fn global() -> &'static PairingTable {
        &PAIRING_TABLE
    }

    pub fn begin(&self, op: BeginOp) -> &BeginPairing {
        &self.begins[op as usize]
    }

    pub fn end(&self, op: EndOp) -> &EndPairing {
        &self.ends[op as usize]
    }

    pub fn begins(&self) -> &[BeginPairing] {
        self.begins
    }

    pub fn ends(&self) -> &[EndPairing] {
        self.ends
    }

    /// Every begin-style and end-style script name, used to reserve them.
    pub fn op_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.begins
            .iter()
            .map(|entry| entry.op.name())
            .chain(self.ends.iter().map(|entry| entry.op.name()))
    }
}
