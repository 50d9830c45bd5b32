use crate::command::{SurfaceContext, change_font_size, step_font_size};
use crate::host::{DropdownPopup, FontSizeInput, PopupPosition};
use crate::size::{FontSize, FontSizeOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownVisibility {
    Closed,
    Open,
}

/// Notification delivered to observers registered on the coordinator.
/// Registration lives and dies with the coordinator instance, so handlers
/// never leak across editor attachments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownEvent {
    Opened,
    Closed,
}

/// Keeps the numeric input, the preset dropdown, and the active surface
/// consistent, whichever control a change originates from.
///
/// Invalid input never surfaces an error: the event is ignored, no state
/// transition happens, and the field keeps its text as typed.
pub struct FontSizeCoordinator {
    options: FontSizeOptions,
    visibility: DropdownVisibility,
    current: FontSize,
    input: Box<dyn FontSizeInput>,
    popup: Box<dyn DropdownPopup>,
    observers: Vec<Box<dyn FnMut(DropdownEvent)>>,
}

impl FontSizeCoordinator {
    pub fn new(
        options: FontSizeOptions,
        input: Box<dyn FontSizeInput>,
        popup: Box<dyn DropdownPopup>,
    ) -> Self {
        let current = options.default_size;
        let mut coordinator = Self {
            options,
            visibility: DropdownVisibility::Closed,
            current,
            input,
            popup,
            observers: Vec::new(),
        };
        coordinator.input.set_value(&current.to_string());
        coordinator
    }

    pub fn options(&self) -> &FontSizeOptions {
        &self.options
    }

    pub fn dropdown_visibility(&self) -> DropdownVisibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == DropdownVisibility::Open
    }

    /// The size the input currently mirrors.
    pub fn current_size(&self) -> FontSize {
        self.current
    }

    pub fn input_value(&self) -> String {
        self.input.value()
    }

    pub fn observe(&mut self, observer: impl FnMut(DropdownEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// The toolbar button was clicked.
    pub fn toggle_dropdown(&mut self, surface: &mut SurfaceContext<'_>) {
        match self.visibility {
            DropdownVisibility::Closed => self.open_dropdown(surface),
            DropdownVisibility::Open => self.close_dropdown(surface),
        }
    }

    /// A preset entry was clicked while the dropdown is open.
    pub fn preset_clicked(&mut self, surface: &mut SurfaceContext<'_>, size: FontSize) {
        self.apply(surface, size);
        self.close_dropdown(surface);
    }

    /// The input field committed its text. Non-numeric or non-positive text
    /// is ignored entirely.
    pub fn input_committed(&mut self, surface: &mut SurfaceContext<'_>) {
        let Some(size) = FontSize::parse(&self.input.value()) else {
            return;
        };
        self.apply(surface, size);
        self.close_dropdown(surface);
    }

    pub fn increment(&mut self, surface: &mut SurfaceContext<'_>) {
        self.step(surface, 1);
    }

    pub fn decrement(&mut self, surface: &mut SurfaceContext<'_>) {
        self.step(surface, -1);
    }

    /// The host selection moved; mirror the size under the new selection.
    pub fn selection_changed(&mut self, active: Option<FontSize>) {
        let size = active.unwrap_or(self.options.default_size);
        self.current = size;
        self.input.set_value(&size.to_string());
    }

    fn open_dropdown(&mut self, surface: &mut SurfaceContext<'_>) {
        if self.visibility == DropdownVisibility::Open {
            return;
        }
        let origin = self.input.origin();
        self.popup.show_at(PopupPosition {
            left: origin.left,
            top: origin.top + origin.height,
        });
        if let SurfaceContext::RichText(surface) = surface {
            surface.highlight_selection();
        }
        self.visibility = DropdownVisibility::Open;
        self.notify(DropdownEvent::Opened);
    }

    fn close_dropdown(&mut self, surface: &mut SurfaceContext<'_>) {
        if self.visibility == DropdownVisibility::Closed {
            return;
        }
        self.popup.hide();
        if let SurfaceContext::RichText(surface) = surface {
            surface.clear_highlight();
        }
        self.visibility = DropdownVisibility::Closed;
        self.notify(DropdownEvent::Closed);
    }

    fn apply(&mut self, surface: &mut SurfaceContext<'_>, size: FontSize) {
        let size = self.options.clamp(size);
        change_font_size(surface, size);
        self.clear_highlight_if_closed(surface);
        self.current = size;
        self.input.set_value(&size.to_string());
    }

    fn step(&mut self, surface: &mut SurfaceContext<'_>, delta: i32) {
        let next = step_font_size(surface, self.current, delta, &self.options);
        self.clear_highlight_if_closed(surface);
        self.current = next;
        self.input.set_value(&next.to_string());
    }

    /// The command marks the changed range; the mark only lives as long as
    /// the dropdown is open.
    fn clear_highlight_if_closed(&mut self, surface: &mut SurfaceContext<'_>) {
        if self.visibility == DropdownVisibility::Open {
            return;
        }
        if let SurfaceContext::RichText(surface) = surface {
            surface.clear_highlight();
        }
    }

    fn notify(&mut self, event: DropdownEvent) {
        for observer in &mut self.observers {
            observer(event);
        }
    }
}
