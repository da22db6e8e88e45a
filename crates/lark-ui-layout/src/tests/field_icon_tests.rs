use super::*;

const BOUNDS: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 300.0,
    height: 44.0,
};

const REGIONS: [FieldRegion; 3] = [
    FieldRegion::Text,
    FieldRegion::Editing,
    FieldRegion::Placeholder,
];

#[test]
fn ltr_icon_hugs_leading_edge() {
    for width in [120.0, 300.0, 987.5] {
        let bounds = Rect::new(0.0, 0.0, width, 44.0);
        let frame = icon_frame(bounds, 20.0, LayoutDirection::Ltr, 30.0);
        assert_eq!(frame, Rect::new(0.0, 0.0, 20.0, 44.0));
    }
}

#[test]
fn ltr_icon_spans_full_height() {
    let bounds = Rect::new(0.0, 8.0, 300.0, 60.0);
    let frame = icon_frame(bounds, 20.0, LayoutDirection::Ltr, 30.0);
    assert_eq!(frame.y, 8.0);
    assert_eq!(frame.height, 60.0);
}

#[test]
fn rtl_icon_hugs_trailing_edge() {
    let frame = icon_frame(BOUNDS, 20.0, LayoutDirection::Rtl, 30.0);
    assert_eq!(frame.x, 280.0);
    assert_eq!(frame.width, 20.0);
}

#[test]
fn rtl_icon_occupies_bottom_text_band() {
    let frame = icon_frame(BOUNDS, 20.0, LayoutDirection::Rtl, 30.0);
    assert_eq!(frame, Rect::new(280.0, 14.0, 20.0, 30.0));
}

#[test]
fn every_region_gives_up_icon_width() {
    for direction in [LayoutDirection::Ltr, LayoutDirection::Rtl] {
        for region in REGIONS {
            for icon_width in [0.0, 20.0, 150.0, 300.0] {
                let rect = inset_for_icon(BOUNDS, icon_width, direction, region);
                assert_eq!(
                    rect.width,
                    BOUNDS.width - icon_width,
                    "{direction:?}/{region:?} width"
                );
            }
        }
    }
}

#[test]
fn ltr_regions_shift_past_the_icon() {
    let base = Rect::new(10.0, 0.0, 300.0, 44.0);
    for region in REGIONS {
        let rect = inset_for_icon(base, 20.0, LayoutDirection::Ltr, region);
        assert_eq!(rect.x, 30.0, "{region:?}");
    }
}

#[test]
fn rtl_text_region_shifts_outward() {
    let base = Rect::new(10.0, 0.0, 300.0, 44.0);
    let rect = inset_for_icon(base, 20.0, LayoutDirection::Rtl, FieldRegion::Text);
    assert_eq!(rect.x, -10.0);
}

#[test]
fn rtl_editing_and_placeholder_keep_their_origin() {
    let base = Rect::new(10.0, 0.0, 300.0, 44.0);
    for region in [FieldRegion::Editing, FieldRegion::Placeholder] {
        let rect = inset_for_icon(base, 20.0, LayoutDirection::Rtl, region);
        assert_eq!(rect.x, 10.0, "{region:?}");
    }
}

#[test]
fn vertical_extent_passes_through_untouched() {
    let base = Rect::new(0.0, 6.5, 300.0, 31.0);
    for direction in [LayoutDirection::Ltr, LayoutDirection::Rtl] {
        for region in REGIONS {
            let rect = inset_for_icon(base, 20.0, direction, region);
            assert_eq!(rect.y, 6.5);
            assert_eq!(rect.height, 31.0);
        }
    }
}

#[test]
fn scenario_ltr_field_with_default_icon() {
    let frame = icon_frame(BOUNDS, 20.0, LayoutDirection::Ltr, 30.0);
    assert_eq!(frame, Rect::new(0.0, 0.0, 20.0, 44.0));

    let text = inset_for_icon(BOUNDS, 20.0, LayoutDirection::Ltr, FieldRegion::Text);
    assert_eq!(text, Rect::new(20.0, 0.0, 280.0, 44.0));
}

#[test]
fn oversized_icon_yields_degenerate_rect() {
    // No clamping: the caller sees the negative width it asked for.
    let rect = inset_for_icon(BOUNDS, 400.0, LayoutDirection::Ltr, FieldRegion::Text);
    assert_eq!(rect.width, -100.0);
    assert_eq!(rect.x, 400.0);
}

#[test]
fn recomputation_is_idempotent() {
    let first = icon_frame(BOUNDS, 20.0, LayoutDirection::Rtl, 30.0);
    let second = icon_frame(BOUNDS, 20.0, LayoutDirection::Rtl, 30.0);
    assert_eq!(first, second);

    let a = inset_for_icon(BOUNDS, 20.0, LayoutDirection::Rtl, FieldRegion::Text);
    let b = inset_for_icon(BOUNDS, 20.0, LayoutDirection::Rtl, FieldRegion::Text);
    assert_eq!(a, b);
}
