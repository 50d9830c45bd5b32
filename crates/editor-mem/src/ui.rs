use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use vellum_fontsize::{
    ControlOrigin, DropdownPopup, FontSizeInput, PopupPosition, Toolbar, ToolbarItem,
};

#[derive(Debug, Default)]
struct InputState {
    value: String,
    origin: ControlOrigin,
}

/// Recording input control. Clones share state, so a test can keep a handle
/// while the coordinator owns another.
#[derive(Debug, Clone, Default)]
pub struct MemInput {
    state: Rc<RefCell<InputState>>,
}

impl MemInput {
    pub fn new(origin: ControlOrigin) -> Self {
        Self {
            state: Rc::new(RefCell::new(InputState {
                value: String::new(),
                origin,
            })),
        }
    }
}

impl FontSizeInput for MemInput {
    fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.state.borrow_mut().value = value.to_string();
    }

    fn origin(&self) -> ControlOrigin {
        self.state.borrow().origin
    }
}

#[derive(Debug, Default)]
struct PopupState {
    visible: bool,
    position: Option<PopupPosition>,
}

/// Recording dropdown overlay.
#[derive(Debug, Clone, Default)]
pub struct MemPopup {
    state: Rc<RefCell<PopupState>>,
}

impl MemPopup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the popup was last shown.
    pub fn position(&self) -> Option<PopupPosition> {
        self.state.borrow().position
    }
}

impl DropdownPopup for MemPopup {
    fn show_at(&mut self, position: PopupPosition) {
        let mut state = self.state.borrow_mut();
        state.visible = true;
        state.position = Some(position);
    }

    fn hide(&mut self) {
        self.state.borrow_mut().visible = false;
    }

    fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }
}

/// Recording toolbar. Geometry is assigned by the test standing in for the
/// host's layout pass.
#[derive(Debug, Default)]
pub struct MemToolbar {
    items: Vec<ToolbarItem>,
    origins: HashMap<String, ControlOrigin>,
}

impl MemToolbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ToolbarItem] {
        &self.items
    }

    pub fn set_origin(&mut self, name: impl Into<String>, origin: ControlOrigin) {
        self.origins.insert(name.into(), origin);
    }
}

impl Toolbar for MemToolbar {
    fn insert_item(&mut self, position: isize, item: ToolbarItem) {
        let ix = if position < 0 {
            (self.items.len() as isize + position + 1).max(0) as usize
        } else {
            (position as usize).min(self.items.len())
        };
        self.items.insert(ix, item);
    }

    fn item(&self, name: &str) -> Option<&ToolbarItem> {
        self.items.iter().find(|item| item.name == name)
    }

    fn item_origin(&self, name: &str) -> Option<ControlOrigin> {
        self.origins.get(name).copied()
    }
}
