//! Rules engine integration tests.
//!
//! Covers the documented end-to-end scenarios plus the canonical optimal
//! solution for the four-disc puzzle.

use hanoi::core::Peg::{Left, Middle, Right};
use hanoi::core::{Disc, Move, Peg, PuzzleState};
use hanoi::rules::{Hanoi, TurnOutcome};

/// The optimal 15-move solution for four discs, left to middle.
const OPTIMAL_SOLUTION: [(Peg, Peg); 15] = [
    (Left, Right),
    (Left, Middle),
    (Right, Middle),
    (Left, Right),
    (Middle, Left),
    (Middle, Right),
    (Left, Right),
    (Left, Middle),
    (Right, Middle),
    (Right, Left),
    (Middle, Left),
    (Right, Middle),
    (Left, Right),
    (Left, Middle),
    (Right, Middle),
];

#[test]
fn test_first_move_lands_smallest_disc() {
    // {left: [4,3,2,1]} --left->middle--> {left: [4,3,2], middle: [1]}
    let rules = Hanoi::default();
    let mut state = rules.initial_state();

    let outcome = rules.play(&mut state, Move::new(Left, Middle)).unwrap();

    assert_eq!(outcome, TurnOutcome::Continue);
    assert_eq!(state.stack(Left), &[Disc(4), Disc(3), Disc(2)]);
    assert_eq!(state.stack(Middle), &[Disc(1)]);
    assert!(state.is_empty(Right));
}

#[test]
fn test_rejected_move_changes_nothing() {
    // {left: [4,3,2], middle: [1]}: left->middle is illegal (2 not < 1).
    let rules = Hanoi::default();
    let mut state = PuzzleState::from_stacks([&[4, 3, 2], &[1], &[]]).unwrap();
    let before = state.clone();

    assert!(rules.play(&mut state, Move::new(Left, Middle)).is_err());
    assert_eq!(state, before);
}

#[test]
fn test_win_on_target_peg() {
    let rules = Hanoi::default();
    let state = PuzzleState::from_stacks([&[], &[4, 3, 2, 1], &[]]).unwrap();

    assert!(rules.is_won(&state));
}

#[test]
fn test_incomplete_target_is_not_won() {
    let rules = Hanoi::default();
    let state = PuzzleState::from_stacks([&[1], &[4, 3, 2], &[]]).unwrap();

    assert!(!rules.is_won(&state));
}

#[test]
fn test_full_stack_on_wrong_peg_is_not_won() {
    let rules = Hanoi::default();
    let state = PuzzleState::from_stacks([&[], &[], &[4, 3, 2, 1]]).unwrap();

    assert!(!rules.is_won(&state));
}

#[test]
fn test_optimal_solution_wins_on_the_last_move() {
    let rules = Hanoi::default();
    let mut state = rules.initial_state();

    for (i, &(from, to)) in OPTIMAL_SOLUTION.iter().enumerate() {
        let outcome = rules
            .play(&mut state, Move::new(from, to))
            .unwrap_or_else(|err| panic!("move {} rejected: {}", i + 1, err));

        if i + 1 < OPTIMAL_SOLUTION.len() {
            assert_eq!(outcome, TurnOutcome::Continue, "won early at move {}", i + 1);
        } else {
            assert_eq!(outcome, TurnOutcome::Won);
        }
    }

    assert_eq!(
        state.stack(Middle),
        &[Disc(4), Disc(3), Disc(2), Disc(1)]
    );
    assert!(state.is_empty(Left));
    assert!(state.is_empty(Right));
}

#[test]
fn test_invariants_hold_along_the_solution() {
    let rules = Hanoi::default();
    let mut state = rules.initial_state();

    for &(from, to) in &OPTIMAL_SOLUTION {
        rules.play(&mut state, Move::new(from, to)).unwrap();

        // Conservation: ranks are exactly {1,2,3,4}.
        let mut ranks: Vec<u8> = Peg::ALL
            .into_iter()
            .flat_map(|peg| state.stack(peg).iter().map(|d| d.rank()))
            .collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2, 3, 4]);

        // Ordering: every stack strictly descends bottom-to-top.
        for peg in Peg::ALL {
            let stack = state.stack(peg);
            for pair in stack.windows(2) {
                assert!(pair[1] < pair[0], "misordered stack on {}", peg);
            }
        }
    }
}

#[test]
fn test_rejections_along_the_way() {
    let rules = Hanoi::default();
    let mut state = rules.initial_state();

    // left -> right (1), left -> right is now illegal (2 onto 1).
    rules.play(&mut state, Move::new(Left, Right)).unwrap();
    let before = state.clone();

    assert!(rules.play(&mut state, Move::new(Left, Right)).is_err());
    assert_eq!(state, before);

    // Empty source stays illegal whatever the destination holds.
    assert!(rules.play(&mut state, Move::new(Middle, Left)).is_err());
    assert!(rules.play(&mut state, Move::new(Middle, Right)).is_err());
    assert_eq!(state, before);
}

#[test]
fn test_three_disc_puzzle_to_the_right() {
    // The parametrization is internal, but it must still hold together.
    let rules = Hanoi::new(3, Peg::Left, Peg::Right);
    let mut state = rules.initial_state();

    let solution = [
        (Left, Right),
        (Left, Middle),
        (Right, Middle),
        (Left, Right),
        (Middle, Left),
        (Middle, Right),
        (Left, Right),
    ];

    let mut last = TurnOutcome::Continue;
    for &(from, to) in &solution {
        last = rules.play(&mut state, Move::new(from, to)).unwrap();
    }

    assert_eq!(last, TurnOutcome::Won);
    assert_eq!(state.stack(Right), &[Disc(3), Disc(2), Disc(1)]);
}
