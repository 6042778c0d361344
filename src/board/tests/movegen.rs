//! Move generation tests.

use crate::board::{Board, BoardBuilder, Color, MoveMap, Piece, Square};

fn moves_of(board: &Board, sq: Square) -> MoveMap {
    let piece = *board.piece_at(sq).expect("no piece on square");
    board.valid_moves(&piece)
}

fn destinations(moves: &MoveMap) -> Vec<Square> {
    moves.destinations().collect()
}

#[test]
fn test_capture_replaces_simple_steps() {
    let board = BoardBuilder::new()
        .piece(Square(5, 2), Color::Dark)
        .piece(Square(4, 1), Color::Light)
        .build();
    let moves = moves_of(&board, Square(5, 2));

    assert_eq!(destinations(&moves), vec![Square(3, 0)]);
    assert_eq!(
        moves.get(Square(3, 0)),
        Some(&[Piece::new(4, 1, Color::Light)][..])
    );
    assert!(!moves.contains(Square(4, 1)));
    assert!(!moves.contains(Square(4, 3)));
}

#[test]
fn test_lone_king_steps_all_four_ways() {
    let board = BoardBuilder::new().king(Square(4, 4), Color::Dark).build();
    let moves = moves_of(&board, Square(4, 4));

    assert_eq!(
        destinations(&moves),
        vec![Square(3, 3), Square(3, 5), Square(5, 3), Square(5, 5)]
    );
    assert!(!moves.has_captures());
}

#[test]
fn test_men_only_move_forward() {
    let board = BoardBuilder::new()
        .piece(Square(4, 3), Color::Dark)
        .piece(Square(3, 6), Color::Light)
        .build();

    assert_eq!(
        destinations(&moves_of(&board, Square(4, 3))),
        vec![Square(3, 2), Square(3, 4)]
    );
    assert_eq!(
        destinations(&moves_of(&board, Square(3, 6))),
        vec![Square(4, 5), Square(4, 7)]
    );
}

#[test]
fn test_starting_position_back_rows_are_blocked() {
    let board = Board::new();

    for col in 0..8 {
        for row in [6, 7] {
            if let Some(piece) = board.get_piece(row, col) {
                assert!(
                    board.valid_moves(piece).is_empty(),
                    "{piece} should be blocked by its own side"
                );
            }
        }
    }

    assert_eq!(
        destinations(&moves_of(&board, Square(5, 0))),
        vec![Square(4, 1)]
    );
    assert_eq!(
        destinations(&moves_of(&board, Square(5, 2))),
        vec![Square(4, 1), Square(4, 3)]
    );
    assert_eq!(
        destinations(&moves_of(&board, Square(2, 1))),
        vec![Square(3, 0), Square(3, 2)]
    );
}

#[test]
fn test_starting_position_movable_pieces() {
    let board = Board::new();
    let dark = board.movable_pieces(Color::Dark);
    let light = board.movable_pieces(Color::Light);

    assert_eq!(
        dark.keys().copied().collect::<Vec<_>>(),
        vec![Square(5, 0), Square(5, 2), Square(5, 4), Square(5, 6)]
    );
    assert_eq!(light.len(), 4);
    assert!(dark.values().all(|moves| !moves.has_captures()));
    assert!(board.has_moves(Color::Dark));
}

#[test]
fn test_same_color_piece_blocks() {
    let board = BoardBuilder::new()
        .piece(Square(5, 2), Color::Dark)
        .piece(Square(4, 1), Color::Dark)
        .build();
    assert_eq!(
        destinations(&moves_of(&board, Square(5, 2))),
        vec![Square(4, 3)]
    );
}

#[test]
fn test_occupied_landing_blocks_capture() {
    let board = BoardBuilder::new()
        .piece(Square(5, 2), Color::Dark)
        .piece(Square(4, 1), Color::Light)
        .piece(Square(3, 0), Color::Light)
        .build();
    let moves = moves_of(&board, Square(5, 2));
    assert!(!moves.has_captures());
    assert_eq!(destinations(&moves), vec![Square(4, 3)]);
}

#[test]
fn test_no_capture_off_the_edge() {
    let board = BoardBuilder::new()
        .piece(Square(2, 1), Color::Dark)
        .piece(Square(1, 0), Color::Light)
        .build();
    let moves = moves_of(&board, Square(2, 1));
    assert!(!moves.has_captures());
    assert_eq!(destinations(&moves), vec![Square(1, 2)]);
}

#[test]
fn test_light_man_captures_toward_higher_rows() {
    let board = BoardBuilder::new()
        .piece(Square(2, 1), Color::Light)
        .piece(Square(3, 2), Color::Dark)
        .piece(Square(1, 2), Color::Dark)
        .build();
    let moves = moves_of(&board, Square(2, 1));
    assert_eq!(destinations(&moves), vec![Square(4, 3)]);
    assert_eq!(moves[Square(4, 3)], vec![Piece::new(3, 2, Color::Dark)]);
}

#[test]
fn test_double_jump_lists_both_landings() {
    let first = Piece::new(5, 2, Color::Light);
    let second = Piece::new(3, 4, Color::Light);
    let board = BoardBuilder::new()
        .piece(Square(6, 1), Color::Dark)
        .piece(first.square(), Color::Light)
        .piece(second.square(), Color::Light)
        .build();
    let moves = moves_of(&board, Square(6, 1));

    assert_eq!(destinations(&moves), vec![Square(2, 5), Square(4, 3)]);
    assert_eq!(moves[Square(4, 3)], vec![first]);
    assert_eq!(moves[Square(2, 5)], vec![first, second]);
}

#[test]
fn test_triple_jump_keeps_every_capture() {
    let jumped = [
        Piece::new(6, 1, Color::Light),
        Piece::new(4, 3, Color::Light),
        Piece::new(2, 5, Color::Light),
    ];
    let mut builder = BoardBuilder::new().piece(Square(7, 0), Color::Dark);
    for piece in &jumped {
        builder = builder.piece(piece.square(), Color::Light);
    }
    let board = builder.build();
    let moves = moves_of(&board, Square(7, 0));

    assert_eq!(moves.len(), 3);
    assert_eq!(moves[Square(5, 2)], jumped[..1].to_vec());
    assert_eq!(moves[Square(3, 4)], jumped[..2].to_vec());
    assert_eq!(moves[Square(1, 6)], jumped.to_vec());
}

#[test]
fn test_chain_branches_both_ways() {
    let board = BoardBuilder::new()
        .piece(Square(6, 3), Color::Dark)
        .piece(Square(5, 4), Color::Light)
        .piece(Square(3, 4), Color::Light)
        .piece(Square(3, 6), Color::Light)
        .build();
    let moves = moves_of(&board, Square(6, 3));

    assert_eq!(
        destinations(&moves),
        vec![Square(2, 3), Square(2, 7), Square(4, 5)]
    );
    assert_eq!(moves[Square(2, 3)].len(), 2);
    assert_eq!(moves[Square(2, 7)].len(), 2);
}

#[test]
fn test_king_captures_backward() {
    let board = BoardBuilder::new()
        .king(Square(3, 3), Color::Dark)
        .piece(Square(4, 4), Color::Light)
        .build();
    let moves = moves_of(&board, Square(3, 3));
    assert_eq!(destinations(&moves), vec![Square(5, 5)]);
    assert_eq!(moves[Square(5, 5)], vec![Piece::new(4, 4, Color::Light)]);
}

#[test]
fn test_man_cannot_capture_backward() {
    let board = BoardBuilder::new()
        .piece(Square(3, 3), Color::Dark)
        .piece(Square(4, 4), Color::Light)
        .build();
    let moves = moves_of(&board, Square(3, 3));
    assert!(!moves.has_captures());
    assert_eq!(destinations(&moves), vec![Square(2, 2), Square(2, 4)]);
}

#[test]
fn test_cornered_piece_has_no_moves() {
    let board = BoardBuilder::new()
        .piece(Square(1, 0), Color::Light)
        .piece(Square(2, 1), Color::Dark)
        .piece(Square(3, 2), Color::Dark)
        .build();
    assert!(moves_of(&board, Square(1, 0)).is_empty());
    assert!(board.movable_pieces(Color::Light).is_empty());
    assert!(!board.has_moves(Color::Light));
}
