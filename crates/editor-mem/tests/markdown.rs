use vellum_editor_mem::MemMarkdown;
use vellum_fontsize::{
    FontSize, LineCol, MarkupSelection, MarkupSurface, SurfaceContext, change_font_size,
};

fn size(px: u32) -> FontSize {
    FontSize::new(px).unwrap()
}

#[test]
fn wraps_single_line_selection_and_reselects_it() {
    let mut surface = MemMarkdown::new("hello world\nsecond line");
    surface.set_selection(MarkupSelection {
        from: LineCol::new(0, 6),
        to: LineCol::new(0, 11),
    });

    change_font_size(&mut SurfaceContext::Markup(&mut surface), size(12));

    let styled = r#"<span class="size" style="font-size: 12px">world</span>"#;
    assert_eq!(surface.text(), format!("hello {styled}\nsecond line"));
    assert_eq!(
        surface.selection(),
        MarkupSelection {
            from: LineCol::new(0, 6),
            to: LineCol::new(0, 6 + styled.len()),
        }
    );
    assert!(surface.is_focused());
}

#[test]
fn restyles_an_already_styled_fragment() {
    let old = r#"<span class="size" style="font-size: 8px">mid</span>"#;
    let mut surface = MemMarkdown::new(&format!("before {old} after"));
    surface.set_selection(MarkupSelection {
        from: LineCol::new(0, 7),
        to: LineCol::new(0, 7 + old.len()),
    });

    change_font_size(&mut SurfaceContext::Markup(&mut surface), size(24));

    let new = r#"<span class="size" style="font-size: 24px">mid</span>"#;
    assert_eq!(surface.text(), format!("before {new} after"));
    assert_eq!(surface.text().matches("font-size:").count(), 1);
    // The old and new declarations differ in length; the selection end still
    // lands exactly past the rewritten fragment.
    assert_eq!(
        surface.selection(),
        MarkupSelection {
            from: LineCol::new(0, 7),
            to: LineCol::new(0, 7 + new.len()),
        }
    );
}

#[test]
fn multi_line_selection_ends_after_the_inserted_fragment() {
    let mut surface = MemMarkdown::new("hello world\nsecond line");
    surface.set_selection(MarkupSelection {
        from: LineCol::new(0, 6),
        to: LineCol::new(1, 6),
    });

    change_font_size(&mut SurfaceContext::Markup(&mut surface), size(14));

    let styled = "<span class=\"size\" style=\"font-size: 14px\">world\nsecond</span>";
    assert_eq!(surface.text(), format!("hello {styled} line"));
    assert_eq!(
        surface.selection(),
        MarkupSelection {
            from: LineCol::new(0, 6),
            to: LineCol::new(1, "second</span>".len()),
        }
    );
}

#[test]
fn empty_selection_inserts_an_empty_wrapper() {
    let mut surface = MemMarkdown::new("ab");
    surface.set_selection(MarkupSelection::collapsed(LineCol::new(0, 1)));

    change_font_size(&mut SurfaceContext::Markup(&mut surface), size(12));

    let styled = r#"<span class="size" style="font-size: 12px"></span>"#;
    assert_eq!(surface.text(), format!("a{styled}b"));
    assert_eq!(
        surface.selection(),
        MarkupSelection {
            from: LineCol::new(0, 1),
            to: LineCol::new(0, 1 + styled.len()),
        }
    );
}

#[test]
fn focus_returns_to_the_surface_after_the_edit() {
    let mut surface = MemMarkdown::new("word");
    surface.set_selection(MarkupSelection {
        from: LineCol::new(0, 0),
        to: LineCol::new(0, 4),
    });
    surface.blur();

    change_font_size(&mut SurfaceContext::Markup(&mut surface), size(10));

    assert!(surface.is_focused());
}
