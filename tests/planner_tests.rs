use armada::{Orientation, PlacementSession, TargetingSession};

#[test]
fn test_session_starts_at_origin_horizontal() {
    let session = PlacementSession::new(4);
    assert_eq!(session.anchor(), (0, 0));
    assert_eq!(session.orientation(), Orientation::Horizontal);
    assert_eq!(session.cells(), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
}

#[test]
fn test_move_clamps_against_full_hull_not_just_anchor() {
    let mut session = PlacementSession::new(4);
    // columns 0..=6 are the only valid anchors for a horizontal 4
    for expected in 1..=6 {
        assert!(session.move_by(0, 1));
        assert_eq!(session.anchor(), (0, expected));
    }
    // one more step would push the stern past the edge
    assert!(!session.move_by(0, 1));
    assert_eq!(session.anchor(), (0, 6));
    assert_eq!(session.cells(), vec![(0, 6), (0, 7), (0, 8), (0, 9)]);
}

#[test]
fn test_move_rejected_at_low_edges() {
    let mut session = PlacementSession::new(2);
    assert!(!session.move_by(-1, 0));
    assert!(!session.move_by(0, -1));
    assert_eq!(session.anchor(), (0, 0));
}

#[test]
fn test_vertical_hull_clamps_rows() {
    let mut session = PlacementSession::new(3);
    session.rotate();
    assert_eq!(session.orientation(), Orientation::Vertical);
    for _ in 0..20 {
        session.move_by(1, 0);
    }
    // rows 0..=7 fit a vertical 3
    assert_eq!(session.anchor(), (7, 0));
    assert!(!session.move_by(1, 0));
    // sideways is still free for a vertical hull
    assert!(session.move_by(0, 1));
    assert_eq!(session.anchor(), (7, 1));
}

#[test]
fn test_rotate_pulls_anchor_inward() {
    let mut session = PlacementSession::new(4);
    // park the horizontal hull near the bottom-right corner
    for _ in 0..6 {
        session.move_by(0, 1);
    }
    for _ in 0..9 {
        session.move_by(1, 0);
    }
    assert_eq!(session.anchor(), (9, 6));
    // rotating to vertical would hang rows 9..=12 off the board
    session.rotate();
    assert_eq!(session.orientation(), Orientation::Vertical);
    assert_eq!(session.anchor(), (6, 6));
    assert!(session.cells().iter().all(|&(r, c)| r < 10 && c < 10));
}

#[test]
fn test_rotate_back_keeps_hull_on_board() {
    let mut session = PlacementSession::new(4);
    session.rotate();
    for _ in 0..9 {
        session.move_by(0, 1);
    }
    assert_eq!(session.anchor(), (0, 9));
    session.rotate();
    assert_eq!(session.orientation(), Orientation::Horizontal);
    assert_eq!(session.anchor(), (0, 6));
}

#[test]
fn test_targeting_cursor_clamps_at_edges() {
    let mut session = TargetingSession::new();
    assert_eq!(session.coord(), (0, 0));
    assert!(!session.move_by(-1, 0));
    assert!(!session.move_by(0, -1));

    for _ in 0..20 {
        session.move_by(1, 0);
        session.move_by(0, 1);
    }
    assert_eq!(session.coord(), (9, 9));
    assert!(!session.move_by(1, 0));
    assert!(!session.move_by(0, 1));

    assert!(session.move_by(-1, -1));
    assert_eq!(session.coord(), (8, 8));
}
