use osd_console::chord::ChordSample;
use osd_console::OsdConsole;

fn chord(backtick: bool, ctrl: bool) -> ChordSample {
    ChordSample {
        backtick_down: backtick,
        ctrl_down: ctrl,
    }
}

#[test]
fn chord_edge_flips_visibility_exactly_once() {
    let mut console = OsdConsole::default();
    assert!(console.is_visible());

    assert!(console.handle_chord(chord(true, true)));
    assert!(!console.is_visible());

    // chord held across following frames does not re-toggle
    assert!(!console.handle_chord(chord(true, true)));
    assert!(!console.handle_chord(chord(true, true)));
    assert!(!console.is_visible());
}

#[test]
fn release_and_press_toggles_again() {
    let mut console = OsdConsole::default();
    console.handle_chord(chord(true, true));
    console.handle_chord(chord(false, false));
    assert!(console.handle_chord(chord(true, true)));
    assert!(console.is_visible());
}

#[test]
fn backtick_alone_is_ignored() {
    let mut console = OsdConsole::default();
    assert!(!console.handle_chord(chord(true, false)));
    assert!(console.is_visible());
}
