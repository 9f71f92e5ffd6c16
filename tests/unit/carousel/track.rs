use super::*;

fn three_cards() -> Track {
    Track::new(TargetId(1), [100.0, 100.0, 100.0])
}

#[test]
fn new_track_holds_only_originals() {
    let t = three_cards();
    assert_eq!(t.original_count(), 3);
    assert_eq!(t.clone_count(), 0);
    assert_eq!(t.scroll_width(), 300.0);
    assert!(t.nodes().iter().all(|n| !n.clone));
}

#[test]
fn clone_pass_copies_every_original_in_order() {
    let mut t = Track::new(TargetId(1), [50.0, 70.0]);
    t.append_clone_pass();
    t.append_clone_pass();

    assert_eq!(t.clone_count(), 4);
    assert_eq!(t.scroll_width(), 480.0);
    let items: Vec<usize> = t.nodes().iter().map(|n| n.item).collect();
    assert_eq!(items, vec![0, 1, 0, 1, 0, 1]);
    assert!(t.nodes()[2..].iter().all(|n| n.clone));
    assert!(t.originals().iter().all(|n| !n.clone));
}

#[test]
fn remove_clones_restores_originals() {
    let mut t = three_cards();
    t.append_clone_pass();
    assert_eq!(t.remove_clones(), 3);
    assert_eq!(t, three_cards());
    assert_eq!(t.remove_clones(), 0);
}

#[test]
fn bad_widths_measure_as_zero() {
    let t = Track::new(TargetId(1), [-5.0, f64::NAN, 10.0]);
    assert_eq!(t.scroll_width(), 10.0);
}

#[test]
fn layout_is_contiguous_from_offset() {
    let mut t = Track::new(TargetId(1), [40.0, 60.0]);
    t.append_clone_pass();
    let boxes = t.layout(-30.0, 20.0);
    assert_eq!(boxes.len(), 4);
    assert_eq!(boxes[0].1, Rect::new(-30.0, 0.0, 10.0, 20.0));
    assert_eq!(boxes[1].1.x0, 10.0);
    assert_eq!(boxes[3].1.x1, 170.0);
    assert!(boxes[2].0.clone);
}
