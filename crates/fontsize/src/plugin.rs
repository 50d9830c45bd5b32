use serde_json::Value;

use crate::command::{SurfaceContext, change_font_size, step_font_size};
use crate::coordinator::FontSizeCoordinator;
use crate::host::{DropdownPopup, FontSizeInput, Toolbar, ToolbarItem};
use crate::size::{FontSize, FontSizeOptions};

#[derive(Debug, Clone)]
pub struct CommandError {
    message: String,
}

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A named command the host registers against its command facility. One
/// `CommandSpec` serves both editing modes; the executor receives whichever
/// surface is active as a tagged variant.
#[derive(Clone)]
pub struct CommandSpec {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub args_example: Option<Value>,
    pub handler: std::sync::Arc<
        dyn Fn(&mut SurfaceContext<'_>, Option<Value>) -> Result<(), CommandError> + Send + Sync,
    >,
}

impl CommandSpec {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        handler: impl Fn(&mut SurfaceContext<'_>, Option<Value>) -> Result<(), CommandError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            keywords: Vec::new(),
            args_example: None,
            handler: std::sync::Arc::new(handler),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn args_example(mut self, args_example: Value) -> Self {
        self.args_example = Some(args_example);
        self
    }
}

pub const INPUT_CONTROL_NAME: &str = "fontsize-input";
pub const DROPDOWN_BUTTON_NAME: &str = "fontsize-presets";

/// The font-size plugin: everything the host needs to wire the feature up,
/// from toolbar descriptors and commands to the coordinator factory.
#[derive(Debug, Clone, Default)]
pub struct FontSizePlugin {
    options: FontSizeOptions,
}

impl FontSizePlugin {
    pub fn new(options: FontSizeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FontSizeOptions {
        &self.options
    }

    /// Builds the coordinator for one editor attachment, wired to the host's
    /// input and popup handles.
    pub fn coordinator(
        &self,
        input: Box<dyn FontSizeInput>,
        popup: Box<dyn DropdownPopup>,
    ) -> FontSizeCoordinator {
        FontSizeCoordinator::new(self.options.clone(), input, popup)
    }

    pub fn toolbar_items(&self) -> Vec<ToolbarItem> {
        vec![
            ToolbarItem::divider(),
            ToolbarItem::number_input(INPUT_CONTROL_NAME)
                .tooltip("Font Size")
                .width(40.0),
            ToolbarItem::button(DROPDOWN_BUTTON_NAME).tooltip("Preset sizes"),
        ]
    }

    /// Inserts the toolbar controls: the divider at the end, then the input
    /// and the dropdown button in front of it.
    pub fn install(&self, toolbar: &mut dyn Toolbar) {
        let mut items = self.toolbar_items();
        let divider = items.remove(0);
        toolbar.insert_item(-1, divider);
        for item in items {
            toolbar.insert_item(-2, item);
        }
    }

    pub fn commands(&self) -> Vec<CommandSpec> {
        let apply_options = self.options.clone();
        let increase_options = self.options.clone();
        let decrease_options = self.options.clone();
        vec![
            CommandSpec::new("fontsize.apply", "Set font size", move |surface, args| {
                let Some(size) = args
                    .as_ref()
                    .and_then(|v| v.get("size"))
                    .and_then(|v| v.as_u64())
                    .and_then(|v| u32::try_from(v).ok())
                    .and_then(FontSize::new)
                else {
                    // Invalid sizes are dropped without surfacing an error.
                    return Ok(());
                };
                change_font_size(surface, apply_options.clamp(size));
                Ok(())
            })
            .description("Apply a font size to the current selection.")
            .keywords(["font size", "text size", "typography"])
            .args_example(serde_json::json!({ "size": 16 })),
            CommandSpec::new(
                "fontsize.increase",
                "Increase font size",
                move |surface, _args| {
                    let current = surface
                        .active_font_size()
                        .unwrap_or(increase_options.default_size);
                    step_font_size(surface, current, 1, &increase_options);
                    Ok(())
                },
            )
            .description("Grow the selection's font size by one pixel.")
            .keywords(["font size", "bigger", "increase"]),
            CommandSpec::new(
                "fontsize.decrease",
                "Decrease font size",
                move |surface, _args| {
                    let current = surface
                        .active_font_size()
                        .unwrap_or(decrease_options.default_size);
                    step_font_size(surface, current, -1, &decrease_options);
                    Ok(())
                },
            )
            .description("Shrink the selection's font size by one pixel.")
            .keywords(["font size", "smaller", "decrease"]),
        ]
    }
}
