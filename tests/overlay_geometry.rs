use osd_console::geometry::compute;
use osd_console::OsdSettings;

#[test]
fn three_newlines_give_four_line_heights_plus_margin() {
    let settings = OsdSettings::default();
    let geom = compute("a\nb\nc\nd", &settings).unwrap();
    let expected = 4.0 * settings.line_height + (settings.top_margin - settings.bg_gap);
    assert!((geom.bg_height - expected).abs() < 1e-6);
    assert!((geom.bg_height - 0.141).abs() < 1e-6);
}

#[test]
fn empty_display_collapses_the_panel() {
    assert!(compute("", &OsdSettings::default()).is_none());
}

#[test]
fn label_is_anchored_by_the_top_margin() {
    let settings = OsdSettings::default();
    let geom = compute("one\ntwo", &settings).unwrap();
    assert!((geom.label_top - settings.top_margin).abs() < 1e-6);
    assert!((geom.text_height - 2.0 * settings.line_height).abs() < 1e-6);
}
