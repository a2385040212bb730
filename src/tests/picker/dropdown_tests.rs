use super::*;

fn area() -> Rect {
    Rect {
        x: 10,
        y: 5,
        width: 20,
        height: 8,
    }
}

#[test]
fn toggle_opens_and_closes() {
    let mut d = Dropdown::default();
    d.toggle(3, None);
    assert!(d.is_open());
    d.toggle(3, None);
    assert!(!d.is_open());
}

#[test]
fn disabled_while_there_are_no_items() {
    let mut d = Dropdown::default();
    d.toggle(0, None);
    assert!(!d.is_open());
    assert_eq!(d.choose(0), None);
}

#[test]
fn opening_highlights_the_current_item() {
    let mut d = Dropdown::default();
    d.toggle(4, Some(2));
    assert_eq!(d.highlighted(), 2);

    d.close();
    d.toggle(2, Some(9));
    assert_eq!(d.highlighted(), 1);
}

#[test]
fn choose_returns_highlight_and_closes() {
    let mut d = Dropdown::default();
    d.toggle(3, None);
    d.move_down(3);
    d.move_down(3);
    d.move_down(3);
    assert_eq!(d.highlighted(), 2);
    d.move_up();

    assert_eq!(d.choose(3), Some(1));
    assert!(!d.is_open());
    assert_eq!(d.choose(3), None);
}

#[test]
fn pointer_outside_closes_inside_keeps_open() {
    let mut d = Dropdown::default();
    d.set_area(area());
    d.toggle(3, None);

    assert!(!d.pointer_down(12, 6));
    assert!(d.is_open());

    assert!(d.pointer_down(30, 6));
    assert!(!d.is_open());
}

#[test]
fn pointer_on_closed_picker_is_a_no_op() {
    let mut d = Dropdown::default();
    d.set_area(area());
    assert!(!d.pointer_down(0, 0));
    assert!(!d.is_open());
}

#[test]
fn pointer_before_first_draw_closes() {
    let mut d = Dropdown::default();
    d.toggle(1, None);
    assert!(d.pointer_down(0, 0));
}
