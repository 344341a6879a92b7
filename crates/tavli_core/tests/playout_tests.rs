//! Seeded random games checking properties that must hold after every move.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tavli_core::{
    BAR, Board, CHECKERS_PER_PLAYER, DiceChoice, DiceSet, MoveFailure, Player, RuleVariant,
    apply_die, find_playable_dice, is_all_checkers_collected, undo,
};

const MAX_TURNS: usize = 600;

// =============================================================================
// Helpers
// =============================================================================

/// Every (from, die) pair that succeeds on a scratch copy.
fn legal_moves(player: Player, board: &Board, dice: &DiceSet) -> Vec<(usize, usize)> {
    let mut moves = Vec::new();
    for from in 0..=24 {
        for die in dice.available_indices(false) {
            let mut test_board = board.clone();
            let mut test_dice = dice.clone();
            if apply_die(player, &mut test_board, &mut test_dice, from, die).is_success() {
                moves.push((from, die));
            }
        }
    }
    moves
}

fn assert_conserved(board: &Board) {
    for player in [Player::One, Player::Two] {
        assert_eq!(board.checker_count(player), CHECKERS_PER_PLAYER, "{player}");
    }
}

fn assert_bar_first(player: Player, board: &Board, dice: &DiceSet) {
    if !board.variant().has_bar_slot() || board.relative(player, BAR).is_empty() {
        return;
    }
    for from in 1..=24 {
        if !board.relative(player, from).is_topped_by(player) {
            continue;
        }
        for die in dice.available_indices(false) {
            let mut test_board = board.clone();
            let mut test_dice = dice.clone();
            let mv = apply_die(player, &mut test_board, &mut test_dice, from, die);
            assert_eq!(mv.failure, Some(MoveFailure::MandatoryBar));
        }
    }
}

/// Play one turn, checking the properties along the way.
fn play_turn(player: Player, board: &mut Board, rng: &mut StdRng) {
    let mut dice = DiceSet::from_values(rng.gen_range(1..=6), rng.gen_range(1..=6));
    let untouched = board.clone();
    let choice = find_playable_dice(player, board, &mut dice).unwrap();
    assert_eq!(*board, untouched, "search must not change the board");

    if dice.is_double() {
        assert!(!matches!(choice, DiceChoice::Either(_, _)));
    }

    let Some(option) = choice.options().choose(rng).map(|o| (*o).clone()) else {
        return;
    };
    let mut selected = option;

    loop {
        assert_bar_first(player, board, &selected);
        let moves = legal_moves(player, board, &selected);
        let Some(&(from, die)) = moves.choose(rng) else {
            break;
        };

        // Undo must restore board and dice exactly.
        let mut scratch = board.clone();
        let mut scratch_dice = selected.clone();
        let mut mv = apply_die(player, &mut scratch, &mut scratch_dice, from, die);
        assert!(mv.is_success());
        undo(player, &mut scratch, &mut scratch_dice, &mut mv).unwrap();
        assert_eq!(scratch, *board);
        assert_eq!(scratch_dice, selected);

        let mv = apply_die(player, board, &mut selected, from, die);
        assert!(mv.is_success());
        assert_conserved(board);
    }
}

fn play_game(variant: RuleVariant, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new(variant);
    let mut player = if rng.gen_range(0..2) == 0 {
        Player::One
    } else {
        Player::Two
    };

    for _ in 0..MAX_TURNS {
        play_turn(player, &mut board, &mut rng);
        if is_all_checkers_collected(player, &board) {
            assert!(!is_all_checkers_collected(player.other(), &board));
            return;
        }
        player = player.other();
    }
}

// =============================================================================
// Playouts
// =============================================================================

#[test]
fn test_portes_playouts() {
    for seed in 0..6 {
        play_game(RuleVariant::FacingCapture, seed);
    }
}

#[test]
fn test_plakoto_playouts() {
    for seed in 100..106 {
        play_game(RuleVariant::FacingPin, seed);
    }
}

#[test]
fn test_fevga_playouts() {
    for seed in 200..206 {
        play_game(RuleVariant::ParallelCapture, seed);
    }
}
