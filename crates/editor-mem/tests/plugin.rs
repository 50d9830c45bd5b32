use vellum_editor_mem::{
    Block, Document, MemEditor, MemMarkdown, MemRichText, MemToolbar, ParagraphBlock, Point,
    RichSelection, Run, RunStyle,
};
use vellum_fontsize::{
    ActiveSurfaceKind, ControlOrigin, FontSize, FontSizePlugin, LineCol, MarkupSelection,
    MarkupSurface, Toolbar, ToolbarItemKind,
};

fn size(px: u32) -> FontSize {
    FontSize::new(px).unwrap()
}

fn markup_editor(text: &str, from: LineCol, to: LineCol) -> MemEditor {
    let richtext = MemRichText::new(
        Document {
            blocks: vec![Block::paragraph("")],
        },
        RichSelection::collapsed(Point::new(0, 0)),
    );
    let mut markdown = MemMarkdown::new(text);
    markdown.set_selection(MarkupSelection { from, to });
    let mut editor = MemEditor::new(richtext, markdown);
    editor.switch_mode(ActiveSurfaceKind::Markup);
    editor
}

#[test]
fn registers_one_command_set_for_both_modes() {
    let plugin = FontSizePlugin::default();
    let ids: Vec<_> = plugin
        .commands()
        .iter()
        .map(|command| command.id.clone())
        .collect();

    assert_eq!(
        ids,
        vec!["fontsize.apply", "fontsize.increase", "fontsize.decrease"]
    );
}

#[test]
fn apply_command_takes_json_args() {
    let plugin = FontSizePlugin::default();
    let apply = plugin.commands().remove(0);
    let mut editor = markup_editor("word", LineCol::new(0, 0), LineCol::new(0, 4));
    assert_eq!(editor.surface().kind(), ActiveSurfaceKind::Markup);

    (apply.handler)(
        &mut editor.surface(),
        Some(serde_json::json!({ "size": 18 })),
    )
    .unwrap();

    assert_eq!(
        editor.markdown.text(),
        r#"<span class="size" style="font-size: 18px">word</span>"#
    );
}

#[test]
fn apply_command_drops_invalid_sizes_silently() {
    let plugin = FontSizePlugin::default();
    let apply = plugin.commands().remove(0);

    for args in [
        None,
        Some(serde_json::json!({})),
        Some(serde_json::json!({ "size": 0 })),
        Some(serde_json::json!({ "size": -5 })),
        Some(serde_json::json!({ "size": "big" })),
    ] {
        let mut editor = markup_editor("word", LineCol::new(0, 0), LineCol::new(0, 4));
        (apply.handler)(&mut editor.surface(), args).unwrap();
        assert_eq!(editor.markdown.text(), "word");
    }
}

#[test]
fn apply_command_clamps_oversized_values() {
    let plugin = FontSizePlugin::default();
    let apply = plugin.commands().remove(0);
    let mut editor = markup_editor("word", LineCol::new(0, 0), LineCol::new(0, 4));

    (apply.handler)(
        &mut editor.surface(),
        Some(serde_json::json!({ "size": 100 })),
    )
    .unwrap();

    assert_eq!(
        editor.markdown.text(),
        r#"<span class="size" style="font-size: 72px">word</span>"#
    );
}

#[test]
fn increase_steps_from_the_selection_size() {
    let plugin = FontSizePlugin::default();
    let increase = plugin.commands().remove(1);

    let doc = Document {
        blocks: vec![Block::Paragraph(ParagraphBlock {
            runs: vec![Run {
                text: "abc".to_string(),
                style: RunStyle {
                    font_size: Some(size(16)),
                    highlighted: false,
                },
            }],
        })],
    };
    let richtext = MemRichText::new(
        doc,
        RichSelection {
            anchor: Point::new(0, 0),
            focus: Point::new(0, 3),
        },
    );
    let mut editor = MemEditor::new(richtext, MemMarkdown::new(""));

    (increase.handler)(&mut editor.surface(), None).unwrap();

    let Block::Paragraph(paragraph) = &editor.richtext.doc().blocks[0] else {
        panic!("expected paragraph block");
    };
    assert!(
        paragraph
            .runs
            .iter()
            .all(|run| run.style.font_size == Some(size(17)))
    );
}

#[test]
fn decrease_falls_back_to_the_default_size() {
    let plugin = FontSizePlugin::default();
    let decrease = plugin.commands().remove(2);
    let mut editor = markup_editor("word", LineCol::new(0, 0), LineCol::new(0, 4));

    (decrease.handler)(&mut editor.surface(), None).unwrap();

    // No size under the selection: steps down from the default 16.
    assert_eq!(
        editor.markdown.text(),
        r#"<span class="size" style="font-size: 15px">word</span>"#
    );
}

#[test]
fn install_places_the_controls_before_the_divider() {
    let plugin = FontSizePlugin::default();
    let mut toolbar = MemToolbar::new();

    plugin.install(&mut toolbar);

    let names: Vec<_> = toolbar
        .items()
        .iter()
        .map(|item| (item.name.as_str(), item.kind))
        .collect();
    assert_eq!(
        names,
        vec![
            ("fontsize-input", ToolbarItemKind::NumberInput),
            ("fontsize-presets", ToolbarItemKind::Button),
            ("divider", ToolbarItemKind::Divider),
        ]
    );

    let input = toolbar.item("fontsize-input").unwrap();
    assert_eq!(input.tooltip.as_deref(), Some("Font Size"));
    assert_eq!(input.width, Some(40.0));

    let origin = ControlOrigin {
        left: 120.0,
        top: 10.0,
        height: 24.0,
    };
    toolbar.set_origin("fontsize-input", origin);
    assert_eq!(toolbar.item_origin("fontsize-input"), Some(origin));
}
