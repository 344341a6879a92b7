//! Random Move Tavli Player
//!
//! Picks one of the playable dice options at random, then plays random
//! legal checker moves until no die of the option can be used.
//! Useful for:
//! - Driving complete games through the rule engine
//! - Baseline comparisons

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tavli_core::{
    apply_die, Board, DiceChoice, DiceSet, EngineError, Game, Move, Player, Strategy, LAST_POINT,
};
use tracing::debug;


/// A player that makes random legal moves.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
    moves_played: u64,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible player for tests.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            moves_played: 0,
        }
    }

    pub fn moves_played(&self) -> u64 {
        self.moves_played
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Every (from, die) pair of `dice` that the board accepts.
pub fn legal_moves(player: Player, board: &Board, dice: &DiceSet) -> Vec<(usize, usize)> {
    let mut moves = Vec::new();
    for from in 0..=LAST_POINT {
        if !board.relative(player, from).is_topped_by(player) {
            continue;
        }
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

impl Strategy for RandomPlayer {
    fn play_turn(
        &mut self,
        game: &mut Game,
        player: Player,
        choice: &DiceChoice,
    ) -> Result<Vec<Move>, EngineError> {
        let Some(option) = choice.options().choose(&mut self.rng).map(|o| (*o).clone()) else {
            debug!(%player, "no playable dice");
            return Ok(Vec::new());
        };
        let mut selected = option;
        let mut played = Vec::new();

        loop {
            let moves = legal_moves(player, game.board(), &selected);
            let Some(&(from, die)) = moves.choose(&mut self.rng) else {
                break;
            };
            let mv = game.play(player, &mut selected, from, die);
            if !mv.is_success() {
                return Err(EngineError::Defect(format!(
                    "move {mv} accepted on a copy but rejected by the game"
                )));
            }
            played.push(mv);
        }

        game.commit(&selected)?;
        self.moves_played += played.len() as u64;
        debug!(%player, dice = %selected, moves = played.len(), "turn played");
        Ok(played)
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.moves_played = 0;
    }
}
