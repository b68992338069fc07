use super::*;
use crate::test_helpers::{drive, Outcome};
use pretty_assertions::assert_eq;
use scrawl_ir::Point;

const SMALL: &str = "+--+\n|  |\n+--+";

#[test]
fn small_box_matches_below_its_bottom_row() {
    let run = drive(&BoxGrammar::new(true), SMALL, Pos::new(0, 0), &[]);
    assert_eq!(run.outcome, Outcome::Matched(Pos::new(3, 1)));
    assert_eq!(
        run.render(),
        vec![Primitive::rectangle(
            Point::new(0.5, 0.5),
            Point::new(3.5, 2.5),
            Colour::Red
        )]
    );
}

#[test]
fn border_cells_are_occupied() {
    let run = drive(&BoxGrammar::new(true), SMALL, Pos::new(0, 0), &[]);
    let mut occupied = run.occupied();
    occupied.sort();
    let expected: Vec<Pos> = [
        (0, 0), (0, 1), (0, 2), (0, 3),
        (1, 0), (1, 3),
        (2, 0), (2, 1), (2, 2), (2, 3),
    ]
    .into_iter()
    .map(|(r, c)| Pos::new(r, c))
    .collect();
    assert_eq!(occupied, expected);
}

#[test]
fn attachment_flags() {
    let run = drive(&BoxGrammar::new(true), SMALL, Pos::new(0, 0), &[]);
    assert_eq!(run.written(Pos::new(0, 0)), TOP_LEFT);
    assert_eq!(run.written(Pos::new(0, 2)), TOP);
    assert_eq!(run.written(Pos::new(0, 4)), Meta::BOX_AFTER_E);
    assert_eq!(run.written(Pos::new(1, 0)), LEFT);
    assert_eq!(run.written(Pos::new(1, 4)), Meta::BOX_AFTER_E);
    assert_eq!(run.written(Pos::new(2, 0)), LEFT);
    assert_eq!(run.written(Pos::new(2, 3)), Meta::OCCUPIED);
    assert_eq!(run.written(Pos::new(2, 4)), Meta::BOX_AFTER_E);
    assert_eq!(run.written(Pos::new(1, 1)), Meta::NONE);
}

#[test]
fn row_underneath_is_flagged_up_to_width() {
    let run = drive(
        &BoxGrammar::new(true),
        "+-+\n| |\n+-+\nabcd",
        Pos::new(0, 0),
        &[],
    );
    assert_eq!(run.outcome, Outcome::Matched(Pos::new(3, 3)));
    for col in 0..3 {
        assert_eq!(run.written(Pos::new(3, col)), Meta::BOX_AFTER_S);
    }
    assert_eq!(run.written(Pos::new(3, 3)), Meta::NONE);
}

#[test]
fn short_row_underneath_stops_at_end_of_line() {
    let run = drive(
        &BoxGrammar::new(true),
        "+--+\n|  |\n+--+\nx",
        Pos::new(0, 0),
        &[],
    );
    assert_eq!(run.outcome, Outcome::Matched(Pos::new(3, 1)));
    assert_eq!(run.written(Pos::new(3, 0)), Meta::BOX_AFTER_S);
}

#[test]
fn indented_box_on_last_rows_still_matches() {
    let run = drive(
        &BoxGrammar::new(true),
        " +-+\n | |\n +-+",
        Pos::new(0, 1),
        &[],
    );
    assert_eq!(run.outcome, Outcome::Matched(Pos::new(3, 0)));
}

#[test]
fn tall_box() {
    let run = drive(
        &BoxGrammar::new(true),
        "+---+\n|   |\n|   |\n+---+",
        Pos::new(0, 0),
        &[],
    );
    assert!(run.is_match());
    let mut claims = run.machine.claims();
    claims.sort();
    assert_eq!(claims.len(), 6);
    assert_eq!(claims.first(), Some(&Pos::new(1, 1)));
    assert_eq!(claims.last(), Some(&Pos::new(2, 3)));
}

#[test]
fn interior_claims_follow_the_option() {
    let claiming = drive(&BoxGrammar::new(true), SMALL, Pos::new(0, 0), &[]);
    assert_eq!(
        claiming.machine.claims(),
        vec![Pos::new(1, 1), Pos::new(1, 2)]
    );
    let border_only = drive(&BoxGrammar::new(false), SMALL, Pos::new(0, 0), &[]);
    assert!(border_only.is_match());
    assert!(border_only.machine.claims().is_empty());
}

// === Rejection ===

#[test]
fn needs_a_side_row() {
    let run = drive(&BoxGrammar::new(true), "+-+\n+-+", Pos::new(0, 0), &[]);
    assert_eq!(run.outcome, Outcome::Rejected(Pos::new(1, 0)));
}

#[test]
fn needs_a_dash_on_top() {
    let run = drive(&BoxGrammar::new(true), "++\n||\n++", Pos::new(0, 0), &[]);
    assert_eq!(run.outcome, Outcome::Rejected(Pos::new(0, 1)));
}

#[test]
fn ragged_right_side_rejects() {
    let run = drive(&BoxGrammar::new(true), "+--+\n|  x\n+--+", Pos::new(0, 0), &[]);
    assert_eq!(run.outcome, Outcome::Rejected(Pos::new(1, 3)));
}

#[test]
fn bottom_must_match_width() {
    let run = drive(&BoxGrammar::new(true), "+--+\n|  |\n+-+", Pos::new(0, 0), &[]);
    assert_eq!(run.outcome, Outcome::Rejected(Pos::new(2, 2)));
}

#[test]
fn unclosed_box_rejects_at_end_of_input() {
    let run = drive(&BoxGrammar::new(true), "+--+\n|  |", Pos::new(0, 0), &[]);
    assert_eq!(run.outcome, Outcome::Rejected(Pos::new(2, 0)));
}

#[test]
fn occupied_border_rejects() {
    let run = drive(
        &BoxGrammar::new(true),
        SMALL,
        Pos::new(0, 0),
        &[(Pos::new(2, 1), Meta::OCCUPIED)],
    );
    assert_eq!(run.outcome, Outcome::Rejected(Pos::new(2, 1)));
}
