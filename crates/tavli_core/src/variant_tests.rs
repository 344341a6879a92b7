use super::*;
use crate::types::OUT;

fn board(variant: RuleVariant, first: &[usize], second: &[usize]) -> Board {
    Board::with_layout(variant, first, second).unwrap()
}

#[test]
fn test_player_tables() {
    let fevga = RuleVariant::ParallelCapture.player_config(Player::Two);
    assert_eq!(fevga.absolute(BAR), 26);
    assert_eq!(fevga.absolute(1), 13);
    assert_eq!(fevga.absolute(12), 24);
    assert_eq!(fevga.absolute(13), 1);
    assert_eq!(fevga.absolute(24), 12);
    assert_eq!(fevga.absolute(OUT), 27);

    for variant in [RuleVariant::FacingPin, RuleVariant::FacingCapture] {
        let second = variant.player_config(Player::Two);
        assert_eq!(second.absolute(1), 24);
        assert_eq!(second.absolute(24), 1);
        assert_eq!(second.absolute(OUT), 27);
    }

    for variant in RuleVariant::ALL {
        let first = variant.player_config(Player::One);
        assert!((0..ABSOLUTE_SLOTS).all(|i| first.absolute(i) == i));
    }
}

#[test]
fn test_initial_layouts() {
    for variant in RuleVariant::ALL {
        for player in [Player::One, Player::Two] {
            assert_eq!(variant.player_config(player).initial_layout.len(), 15);
        }
    }
    let portes = RuleVariant::FacingCapture.player_config(Player::One).initial_layout;
    assert_eq!(portes.iter().filter(|&&r| r == 19).count(), 5);
    assert!(
        RuleVariant::FacingPin
            .player_config(Player::Two)
            .initial_layout
            .iter()
            .all(|&r| r == 1)
    );
}

#[test]
fn test_only_portes_has_bar() {
    assert!(RuleVariant::FacingCapture.has_bar_slot());
    assert!(!RuleVariant::FacingPin.has_bar_slot());
    assert!(!RuleVariant::ParallelCapture.has_bar_slot());
}

#[test]
fn test_no_variant_boosts_stake() {
    let dice = DiceSet::from_values(6, 6);
    for variant in RuleVariant::ALL {
        assert!(!variant.has_doubling_boost(&dice));
    }
}

#[test]
fn test_board_view_geometry() {
    assert_eq!(
        RuleVariant::ParallelCapture.default_board_view(),
        BoardView::StartTopRight
    );
    assert_eq!(
        RuleVariant::FacingPin.default_board_view(),
        BoardView::StartBottomRight
    );
    assert_eq!(
        RuleVariant::FacingCapture.default_board_view(),
        BoardView::StartTopRight
    );

    assert_eq!(
        RuleVariant::ParallelCapture.inverse_board_view(BoardView::StartTopRight),
        BoardView::StartBottomLeft
    );
    assert_eq!(
        RuleVariant::ParallelCapture.inverse_board_view(BoardView::StartTopLeft),
        BoardView::StartBottomRight
    );
    assert_eq!(
        RuleVariant::FacingCapture.inverse_board_view(BoardView::StartTopRight),
        BoardView::StartBottomRight
    );
    assert_eq!(
        RuleVariant::FacingPin.inverse_board_view(BoardView::StartBottomLeft),
        BoardView::StartTopLeft
    );
    assert_eq!(
        RuleVariant::FacingPin.inverse_board_view(BoardView::Absolute),
        BoardView::Absolute
    );
}

#[test]
fn test_plakoto_pins_single_checker() {
    // Player 2 on relative 20 is absolute 5, four points ahead of player 1.
    let single = board(RuleVariant::FacingPin, &[1, 1], &[20]);
    assert!(RuleVariant::FacingPin.is_valid_move_target(Player::One, &single, 1, 5));

    let pair = board(RuleVariant::FacingPin, &[1, 1], &[20, 20]);
    assert!(!RuleVariant::FacingPin.is_valid_move_target(Player::One, &pair, 1, 5));

    let own = board(RuleVariant::FacingPin, &[1, 5, 5, 5], &[]);
    assert!(RuleVariant::FacingPin.is_valid_move_target(Player::One, &own, 1, 5));
}

#[test]
fn test_plakoto_pinned_stack_stays_with_pinner() {
    // Player 1 pinned on absolute 5 by player 2: the point belongs to player 2.
    let pinned = board(RuleVariant::FacingPin, &[5, 1], &[20]);
    assert_eq!(pinned.position(5).len(), 2);
    assert!(!RuleVariant::FacingPin.is_valid_move_target(Player::One, &pinned, 1, 5));
    assert!(RuleVariant::FacingPin.is_valid_move_target(Player::Two, &pinned, 18, 20));
}

#[test]
fn test_portes_target_rules() {
    let single = board(RuleVariant::FacingCapture, &[1], &[20]);
    assert!(RuleVariant::FacingCapture.is_valid_move_target(Player::One, &single, 1, 5));

    let pair = board(RuleVariant::FacingCapture, &[1], &[20, 20]);
    assert!(!RuleVariant::FacingCapture.is_valid_move_target(Player::One, &pair, 1, 5));
}

#[test]
fn test_portes_bar_must_enter_first() {
    let waiting = board(RuleVariant::FacingCapture, &[0, 1], &[]);
    assert!(!RuleVariant::FacingCapture.is_valid_move_target(Player::One, &waiting, 1, 3));
    assert!(RuleVariant::FacingCapture.is_valid_move_target(Player::One, &waiting, BAR, 3));
}

#[test]
fn test_track_targets_only() {
    let b = board(RuleVariant::FacingPin, &[20], &[]);
    assert!(!RuleVariant::FacingPin.is_valid_move_target(Player::One, &b, 20, OUT));
    assert!(!RuleVariant::FacingPin.is_valid_move_target(Player::One, &b, 20, BAR));
}

#[test]
fn test_fevga_single_checker_blocks() {
    // Player 2 relative 5 is absolute 17.
    let b = board(RuleVariant::ParallelCapture, &[14], &[5]);
    assert!(!RuleVariant::ParallelCapture.is_valid_move_target(Player::One, &b, 14, 17));
    assert!(RuleVariant::ParallelCapture.is_valid_move_target(Player::One, &b, 14, 16));
}

#[test]
fn test_fevga_lead_checker_must_pass_twelve() {
    let v = RuleVariant::ParallelCapture;

    let early = board(v, &[1, 1, 5], &[1]);
    assert!(!v.is_valid_move_target(Player::One, &early, 1, 3), "lead still on 5");
    assert!(v.is_valid_move_target(Player::One, &early, 5, 9), "lead itself moves");

    let released = board(v, &[1, 1, 14], &[1]);
    assert!(v.is_valid_move_target(Player::One, &released, 1, 3));
}

#[test]
fn test_fevga_first_six_cannot_be_closed() {
    let v = RuleVariant::ParallelCapture;

    // 1, 2, 3, 5, 6 held; moving one of the two checkers on 1 to 4 closes them all.
    let closing = board(v, &[1, 1, 2, 3, 5, 6, 14], &[1]);
    assert!(!v.is_valid_move_target(Player::One, &closing, 1, 4));

    // The lone checker on 3 leaves a gap behind it.
    let vacating = board(v, &[1, 2, 3, 5, 6, 14], &[1]);
    assert!(v.is_valid_move_target(Player::One, &vacating, 3, 4));

    // Stacking on a held point does not change the block.
    let stacking = board(v, &[1, 1, 2, 3, 4, 5, 6, 14], &[1]);
    assert!(v.is_valid_move_target(Player::One, &stacking, 1, 4));
}

#[test]
fn test_portes_capture_sends_checker_to_bar() {
    let mut b = board(RuleVariant::FacingCapture, &[3], &[18]);
    let mut mv = Move::new(Player::One, 3, 0, 4);
    RuleVariant::FacingCapture.before_move(Player::One, &mut b, &mut mv);
    assert_eq!(mv.captured, Some(crate::types::Checker::of(Player::Two)));
    assert!(b.position(7).is_empty());
    assert_eq!(b.relative(Player::Two, BAR).len(), 1);
}

#[test]
fn test_plakoto_before_move_keeps_checker() {
    let mut b = board(RuleVariant::FacingPin, &[3], &[18]);
    let before = b.clone();
    let mut mv = Move::new(Player::One, 3, 0, 4);
    RuleVariant::FacingPin.before_move(Player::One, &mut b, &mut mv);
    assert_eq!(mv.captured, None);
    assert_eq!(b, before);
}

#[test]
fn test_variant_serde_names() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        variant: RuleVariant,
    }
    let w: Wrapper = toml::from_str("variant = \"plakoto\"").unwrap();
    assert_eq!(w.variant, RuleVariant::FacingPin);
    let w: Wrapper = toml::from_str("variant = \"parallel_capture\"").unwrap();
    assert_eq!(w.variant, RuleVariant::ParallelCapture);
    assert_eq!(RuleVariant::FacingCapture.to_string(), "Portes");
}
