//! Board tests - dealing and selection rules

use tui_pairs::core::Board;
use tui_pairs::types::{SelectError, Symbol, CARD_COUNT};

fn layout_for(board: &Board) -> Vec<Symbol> {
    board.cards().iter().map(|c| c.symbol).collect()
}

#[test]
fn test_every_deal_is_a_permutation_of_the_pairs() {
    let mut expected: Vec<Symbol> = Symbol::ALL.iter().chain(Symbol::ALL.iter()).copied().collect();
    expected.sort();

    for seed in 0..500 {
        let board = Board::new(seed);
        let mut layout = layout_for(&board);
        assert_eq!(layout.len(), CARD_COUNT);
        layout.sort();
        assert_eq!(layout, expected, "seed {}", seed);
    }
}

#[test]
fn test_new_board_is_face_down_and_not_won() {
    let board = Board::new(12345);
    assert!(board.cards().iter().all(|c| !c.is_active));
    assert!(!board.is_won());
}

#[test]
fn test_deals_spread_symbols_over_positions() {
    // Over many deals, every symbol should land on position 0 at some point.
    let mut seen = Vec::new();
    for seed in 0..400 {
        let symbol = Board::new(seed).get(0).unwrap().symbol;
        if !seen.contains(&symbol) {
            seen.push(symbol);
        }
    }
    assert_eq!(seen.len(), Symbol::ALL.len());
}

#[test]
fn test_select_first_twice_fails_and_leaves_board() {
    let mut board = Board::new(5);
    board.select_first(9).unwrap();
    let before = board.clone();

    assert_eq!(
        board.select_first(9),
        Err(SelectError::AlreadyActive { index: 9 })
    );
    assert_eq!(board, before);
}

#[test]
fn test_compare_error_kinds() {
    let mut board = Board::new(5);
    assert_eq!(
        board.compare(3, 4),
        Err(SelectError::NotActive { index: 3 })
    );

    board.select_first(3).unwrap();
    let partner = board.partner_of(3).unwrap();
    board.compare(3, partner).unwrap();

    let other = (0..CARD_COUNT)
        .find(|i| *i != 3 && *i != partner)
        .unwrap();
    board.select_first(other).unwrap();
    assert_eq!(
        board.compare(other, partner),
        Err(SelectError::AlreadyActive { index: partner })
    );
}

#[test]
fn test_match_and_mismatch_outcomes() {
    let mut board = Board::new(77);

    let partner = board.partner_of(0).unwrap();
    let stranger = (1..CARD_COUNT).find(|i| *i != partner).unwrap();

    board.select_first(0).unwrap();
    let miss = board.compare(0, stranger).unwrap();
    assert!(!miss.is_match);
    assert!(!board.get(0).unwrap().is_active);
    assert!(!board.get(stranger).unwrap().is_active);

    board.select_first(0).unwrap();
    let hit = board.compare(0, partner).unwrap();
    assert!(hit.is_match);
    assert_eq!(hit.first.index, 0);
    assert_eq!(hit.second.index, partner);
    assert!(board.get(0).unwrap().is_active);
    assert!(board.get(partner).unwrap().is_active);
}

#[test]
fn test_board_is_won_after_matching_everything() {
    let mut board = Board::new(2024);
    for index in 0..CARD_COUNT {
        if board.get(index).unwrap().is_active {
            continue;
        }
        let partner = board.partner_of(index).unwrap();
        assert!(!board.is_won());
        board.select_first(index).unwrap();
        assert!(board.compare(index, partner).unwrap().is_match);
    }
    assert!(board.is_won());
    assert_eq!(board.active_count(), CARD_COUNT);
}
