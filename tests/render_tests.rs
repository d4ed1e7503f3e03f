use armada::{coord_label, Board, Orientation, Renderer, TextRenderer};

fn rendered(board: &Board, selection: Option<&[(usize, usize)]>, hide_ships: bool) -> String {
    let mut renderer = TextRenderer::new(Vec::new());
    renderer.render(board, None, selection, hide_ships).unwrap();
    String::from_utf8(renderer.into_inner()).unwrap()
}

#[test]
fn test_hidden_board_reveals_no_ships() {
    let mut board = Board::new();
    board.place_ship(3, (0, 0), Orientation::Horizontal).unwrap();

    let hidden = rendered(&board, None, true);
    assert!(!hidden.contains('S'), "un-hit ship cells must stay hidden");

    let revealed = rendered(&board, None, false);
    assert!(revealed.contains('S'));
}

#[test]
fn test_hits_show_through_hiding() {
    let mut board = Board::new();
    board.place_ship(2, (4, 4), Orientation::Vertical).unwrap();
    board.fire(4, 4).unwrap();
    board.fire(0, 0).unwrap();

    let hidden = rendered(&board, None, true);
    assert!(hidden.contains('X'));
    assert!(hidden.contains('o'));

    board.fire(5, 4).unwrap();
    let sunk = rendered(&board, None, true);
    assert!(sunk.contains('#'));
    assert!(!sunk.contains('X'), "whole hull flips from hit to sunk");
}

#[test]
fn test_selection_is_bracketed() {
    let board = Board::new();
    let out = rendered(&board, Some(&[(0, 0)]), false);
    assert!(out.contains("[.]"));
}

#[test]
fn test_coord_labels() {
    assert_eq!(coord_label(0, 0), "A1");
    assert_eq!(coord_label(3, 1), "B4");
    assert_eq!(coord_label(9, 9), "J10");
}
