//! The window registry and its membership lists.

use std::collections::HashMap;

use hackerland_common::{WindowHandle, WindowType};

use super::types::{Placement, WindowClass, WindowId, WindowRecord};

/// Arena of tracked windows plus one ordered list per class.
///
/// Every tracked id appears in exactly one of: a workspace list, the
/// floating list, the scratchpad list, the sticky list. Its record's
/// `class` always names that list.
#[derive(Debug)]
pub struct WindowSet {
    records: HashMap<WindowId, WindowRecord>,
    by_handle: HashMap<WindowHandle, WindowId>,
    workspaces: Vec<Vec<WindowId>>,
    floating: Vec<WindowId>,
    scratchpad: Vec<WindowId>,
    sticky: Vec<WindowId>,
    current: usize,
    next_id: u32,
}

impl WindowSet {
    /// Create with `workspace_count` workspaces (at least one).
    pub fn new(workspace_count: usize) -> Self {
        Self {
            records: HashMap::new(),
            by_handle: HashMap::new(),
            workspaces: vec![Vec::new(); workspace_count.max(1)],
            floating: Vec::new(),
            scratchpad: Vec::new(),
            sticky: Vec::new(),
            current: 0,
            next_id: 1,
        }
    }

    // -- Accessors --

    pub fn workspace_count(&self) -> usize {
        self.workspaces.len()
    }

    pub fn current_workspace(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn id_of(&self, handle: WindowHandle) -> Option<WindowId> {
        self.by_handle.get(&handle).copied()
    }

    pub fn contains(&self, handle: WindowHandle) -> bool {
        self.by_handle.contains_key(&handle)
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowRecord> {
        self.records.get(&id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowRecord> {
        self.records.get_mut(&id)
    }

    pub fn workspace(&self, index: usize) -> &[WindowId] {
        self.workspaces.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn floating(&self) -> &[WindowId] {
        &self.floating
    }

    pub fn scratchpad(&self) -> &[WindowId] {
        &self.scratchpad
    }

    pub fn sticky(&self) -> &[WindowId] {
        &self.sticky
    }

    /// Windows under layout control right now: sticky windows first, then
    /// the current workspace in stack order.
    pub fn visible_tiled(&self) -> Vec<WindowId> {
        self.sticky
            .iter()
            .chain(&self.workspaces[self.current])
            .copied()
            .collect()
    }

    /// Windows that should be parked out of sight: every other workspace
    /// and the scratchpad.
    pub fn hidden(&self) -> Vec<WindowId> {
        self.workspaces
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != self.current)
            .flat_map(|(_, list)| list.iter())
            .chain(&self.scratchpad)
            .copied()
            .collect()
    }

    /// All records ordered by id.
    pub fn ids(&self) -> Vec<WindowId> {
        let mut ids: Vec<WindowId> = self.records.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    // -- Membership --

    /// Admit a window. Returns `None` if the handle is already tracked.
    pub fn insert(
        &mut self,
        handle: WindowHandle,
        title: impl Into<String>,
        window_type: WindowType,
        placement: Placement,
    ) -> Option<WindowId> {
        if self.by_handle.contains_key(&handle) {
            return None;
        }

        let id = WindowId(self.next_id);
        self.next_id += 1;

        let class = match placement {
            Placement::Tile => {
                self.workspaces[self.current].push(id);
                WindowClass::Tiled(self.current)
            }
            Placement::Float => {
                self.floating.push(id);
                WindowClass::Floating
            }
        };

        self.records.insert(
            id,
            WindowRecord {
                handle,
                title: title.into(),
                window_type,
                class,
                animation: None,
            },
        );
        self.by_handle.insert(handle, id);
        Some(id)
    }

    /// Forget a window entirely. Idempotent.
    pub fn remove(&mut self, handle: WindowHandle) -> Option<(WindowId, WindowRecord)> {
        let id = self.by_handle.remove(&handle)?;
        let record = self.records.remove(&id)?;
        self.detach(id, record.class);
        Some((id, record))
    }

    /// Make `index` the current workspace. False for the current or an
    /// out-of-range index.
    pub fn set_current(&mut self, index: usize) -> bool {
        if index >= self.workspaces.len() || index == self.current {
            return false;
        }
        self.current = index;
        true
    }

    /// Move a tiled or sticky window into the scratchpad, or a stashed one
    /// back to its home workspace. Floating windows are left alone.
    pub fn toggle_scratchpad(&mut self, id: WindowId) -> bool {
        let Some(class) = self.records.get(&id).map(|r| r.class) else {
            return false;
        };
        let next = match class {
            WindowClass::Tiled(home) => WindowClass::Scratchpad { home },
            WindowClass::Sticky => WindowClass::Scratchpad { home: self.current },
            WindowClass::Scratchpad { home } => WindowClass::Tiled(home),
            WindowClass::Floating => return false,
        };
        self.reclassify(id, class, next);
        true
    }

    /// Move a tiled window into the sticky set, or a sticky one onto the
    /// current workspace.
    pub fn toggle_sticky(&mut self, id: WindowId) -> bool {
        let Some(class) = self.records.get(&id).map(|r| r.class) else {
            return false;
        };
        let next = match class {
            WindowClass::Tiled(_) => WindowClass::Sticky,
            WindowClass::Sticky => WindowClass::Tiled(self.current),
            WindowClass::Floating | WindowClass::Scratchpad { .. } => return false,
        };
        self.reclassify(id, class, next);
        true
    }

    fn reclassify(&mut self, id: WindowId, from: WindowClass, to: WindowClass) {
        self.detach(id, from);
        match to {
            WindowClass::Tiled(index) => self.workspaces[index].push(id),
            WindowClass::Floating => self.floating.push(id),
            WindowClass::Scratchpad { .. } => self.scratchpad.push(id),
            WindowClass::Sticky => self.sticky.push(id),
        }
        if let Some(record) = self.records.get_mut(&id) {
            record.class = to;
        }
    }

    fn detach(&mut self, id: WindowId, class: WindowClass) {
        let list = match class {
            WindowClass::Tiled(index) => &mut self.workspaces[index],
            WindowClass::Floating => &mut self.floating,
            WindowClass::Scratchpad { .. } => &mut self.scratchpad,
            WindowClass::Sticky => &mut self.sticky,
        };
        list.retain(|other| *other != id);
    }

    /// Panics if any id is listed twice or its record disagrees with the
    /// list holding it.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let mut seen = std::collections::HashSet::new();
        let lists = self
            .workspaces
            .iter()
            .enumerate()
            .map(|(i, list)| (Some(i), list, "workspace"))
            .chain([
                (None, &self.floating, "floating"),
                (None, &self.scratchpad, "scratchpad"),
                (None, &self.sticky, "sticky"),
            ]);
        for (index, list, kind) in lists {
            for id in list {
                assert!(seen.insert(*id), "{id} listed twice");
                let class = self.records[id].class;
                let matches = match (kind, class) {
                    ("workspace", WindowClass::Tiled(i)) => Some(i) == index,
                    ("floating", WindowClass::Floating) => true,
                    ("scratchpad", WindowClass::Scratchpad { .. }) => true,
                    ("sticky", WindowClass::Sticky) => true,
                    _ => false,
                };
                assert!(matches, "{id} in {kind} list but class is {class:?}");
            }
        }
        assert_eq!(seen.len(), self.records.len(), "unlisted records");
        assert_eq!(self.by_handle.len(), self.records.len());
    }
}
