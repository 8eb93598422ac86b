use std::str::FromStr;

use montecarlo::{Die, DiceError, Face, Form, Game, ResultsView, RollTable, seeded_rng};

fn two_d6() -> Game {
    let dice = vec![Die::new(1..=6).unwrap(), Die::new(1..=6).unwrap()];
    Game::new(dice).unwrap()
}

fn wide(game: &Game) -> RollTable {
    match game.results(Form::Wide).unwrap() {
        ResultsView::Wide(table) => table,
        ResultsView::Narrow(_) => unreachable!(),
    }
}

#[test]
fn form_parses_known_selectors() {
    assert_eq!(Form::from_str("wide").unwrap(), Form::Wide);
    assert_eq!(Form::from_str("narrow").unwrap(), Form::Narrow);
    assert!(matches!(
        Form::from_str("tall").unwrap_err(),
        DiceError::InvalidForm(_)
    ));
}

#[test]
fn empty_die_list_is_rejected() {
    assert!(matches!(Game::new(vec![]).unwrap_err(), DiceError::EmptyGame));
}

#[test]
fn dice_must_share_a_face_set() {
    let dice = vec![Die::new(1..=6).unwrap(), Die::new(1..=4).unwrap()];
    assert!(matches!(
        Game::new(dice).unwrap_err(),
        DiceError::MismatchedDice(1)
    ));
}

#[test]
fn differently_weighted_dice_are_still_similar() {
    let mut loaded = Die::new(1..=6).unwrap();
    loaded.set_weight(6, 10.0).unwrap();
    assert!(Game::new(vec![Die::new(1..=6).unwrap(), loaded]).is_ok());
}

#[test]
fn results_before_play_fail() {
    let game = two_d6();
    assert!(!game.is_played());
    assert!(matches!(
        game.results(Form::Wide).unwrap_err(),
        DiceError::NotPlayed
    ));
}

#[test]
fn play_produces_rolls_by_dice_table() {
    let mut game = two_d6();
    let mut rng = seeded_rng(5);
    game.play(10, &mut rng).unwrap();
    assert!(game.is_played());

    let table = wide(&game);
    assert_eq!(table.num_rolls(), 10);
    assert_eq!(table.num_dice(), 2);
    assert_eq!(table.roll(1).map(<[Face]>::len), Some(2));
    assert_eq!(table.roll(10).map(<[Face]>::len), Some(2));
    assert_eq!(table.roll(11), None);
    assert_eq!(table.roll(0), None);
}

#[test]
fn replay_replaces_results() {
    let mut game = two_d6();
    let mut rng = seeded_rng(5);
    game.play(10, &mut rng).unwrap();
    game.play(3, &mut rng).unwrap();
    assert_eq!(wide(&game).num_rolls(), 3);
}

#[test]
fn failed_play_keeps_previous_results() {
    let mut game = two_d6();
    let mut rng = seeded_rng(5);
    game.play(4, &mut rng).unwrap();
    let before = wide(&game);

    assert!(matches!(
        game.play(0, &mut rng).unwrap_err(),
        DiceError::InvalidCount
    ));
    assert_eq!(wide(&game), before);
}

#[test]
fn narrow_form_matches_wide_form() {
    let mut game = two_d6();
    let mut rng = seeded_rng(8);
    game.play(6, &mut rng).unwrap();

    let table = wide(&game);
    let records = match game.results(Form::Narrow).unwrap() {
        ResultsView::Narrow(records) => records,
        ResultsView::Wide(_) => unreachable!(),
    };
    assert_eq!(records.len(), 6 * 2);

    // Roll-major, die-minor ordering with the same cell values.
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.roll, i / 2 + 1);
        assert_eq!(record.die, i % 2);
        assert_eq!(table.roll(record.roll).unwrap()[record.die], record.face);
    }

    // Same multiset of faces overall.
    let mut from_wide: Vec<Face> = table.rows().flatten().cloned().collect();
    let mut from_narrow: Vec<Face> = records.into_iter().map(|r| r.face).collect();
    from_wide.sort();
    from_narrow.sort();
    assert_eq!(from_wide, from_narrow);
}
