//! Properties checked over every position reachable with the agent moving first

use std::collections::{HashMap, HashSet};

use tabular_ttt::{Board, Mark, Outcome, StateKey, tictactoe::LineAnalyzer};

/// Every reachable board, keyed by its serialization. Play stops at the
/// first outcome.
fn reachable_boards() -> HashMap<StateKey, Board> {
    let mut seen = HashMap::new();
    let mut frontier = vec![(Board::new(), Mark::Agent)];

    while let Some((board, to_move)) = frontier.pop() {
        if seen.insert(board.serialize(), board).is_some() {
            continue;
        }
        if board.is_terminal() {
            continue;
        }
        for coord in board.available_actions() {
            let next = board.apply(coord, to_move).unwrap();
            frontier.push((next, to_move.other()));
        }
    }

    seen
}

#[test]
fn reachable_position_count_matches_known_total() {
    // 5,478 legal positions reachable from the empty board
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn serialization_is_injective_and_round_trips() {
    let boards = reachable_boards();
    let distinct_cells: HashSet<_> = boards.values().map(|board| *board.cells()).collect();
    assert_eq!(distinct_cells.len(), boards.len());

    for (key, board) in &boards {
        assert_eq!(&Board::from_key(key), board);
        assert_eq!(&board.serialize(), key);
        assert_eq!(StateKey::parse(key.as_str()).unwrap(), *key);
    }
}

#[test]
fn mark_counts_follow_agent_first_turn_order() {
    for board in reachable_boards().values() {
        let agent = board.cells().iter().filter(|c| c.mark() == Some(Mark::Agent)).count();
        let opponent = board.cells().iter().filter(|c| c.mark() == Some(Mark::Opponent)).count();
        assert!(agent == opponent || agent == opponent + 1, "{board}");
    }
}

#[test]
fn no_outcome_before_five_marks() {
    for board in reachable_boards().values() {
        if board.mark_count() < 5 {
            assert_eq!(board.evaluate(), None, "{board}");
        }
    }
}

#[test]
fn outcomes_are_consistent_with_board_contents() {
    for board in reachable_boards().values() {
        match board.evaluate() {
            Some(Outcome::Draw) => {
                assert_eq!(board.mark_count(), 9);
                assert!(board.available_actions().is_empty());
            }
            Some(Outcome::AgentWin) => {
                assert!(LineAnalyzer::has_won(board.cells(), Mark::Agent));
                assert!(!LineAnalyzer::has_won(board.cells(), Mark::Opponent));
                // The agent moved last
                let agent = board.cells().iter().filter(|c| c.mark() == Some(Mark::Agent)).count();
                assert_eq!(agent * 2, board.mark_count() + 1, "{board}");
            }
            Some(Outcome::OpponentWin) => {
                assert!(LineAnalyzer::has_won(board.cells(), Mark::Opponent));
                let opponent = board.cells().iter().filter(|c| c.mark() == Some(Mark::Opponent)).count();
                assert_eq!(opponent * 2, board.mark_count(), "{board}");
            }
            None => assert!(!board.available_actions().is_empty(), "{board}"),
        }
    }
}

#[test]
fn available_actions_are_row_major_empty_cells() {
    for board in reachable_boards().values() {
        let actions = board.available_actions();
        assert_eq!(actions.len(), 9 - board.mark_count());

        let indices: Vec<usize> = actions.iter().map(|coord| coord.index()).collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(indices, sorted);
        assert!(actions.iter().all(|&coord| board.is_empty_at(coord)));
    }
}

#[test]
fn terminal_positions_by_outcome() {
    let mut counts: HashMap<Outcome, usize> = HashMap::new();
    for board in reachable_boards().values() {
        if let Some(outcome) = board.evaluate() {
            *counts.entry(outcome).or_default() += 1;
        }
    }

    assert_eq!(counts[&Outcome::AgentWin], 626);
    assert_eq!(counts[&Outcome::OpponentWin], 316);
    assert_eq!(counts[&Outcome::Draw], 16);
}
