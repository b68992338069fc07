use super::*;
use crate::test_helpers::{drive, Outcome};
use pretty_assertions::assert_eq;

fn lines(prims: &[Primitive]) -> Vec<scrawl_ir::Line> {
    prims
        .iter()
        .map(|p| match p {
            Primitive::Line(line) => line.clone(),
            other => panic!("expected lines, got {other:?}"),
        })
        .collect()
}

#[test]
fn right_foot_meets_box_border() {
    let run = drive(
        &RIGHT,
        "--<|",
        Pos::new(0, 2),
        &[
            (Pos::new(0, 2), Meta::LINE_AFTER_E),
            (Pos::new(0, 3), Meta::BOX_START_E | Meta::OCCUPIED),
        ],
    );
    assert_eq!(run.outcome, Outcome::Matched(Pos::new(0, 3)));
    assert_eq!(run.occupied(), vec![Pos::new(0, 2)]);

    let lines = lines(&run.render());
    assert_eq!(lines.len(), 4);
    // Prongs fan out from the cell centre to the border.
    let root = Point::new(2.5, 0.5);
    assert_eq!(lines[0].a, root);
    assert_eq!(lines[0].b, Point::new(3.5, 0.5 - 0.3));
    assert_eq!(lines[1].b, Point::new(3.5, 0.5));
    assert_eq!(lines[2].b, Point::new(3.5, 0.5 + 0.3));
    assert_eq!(lines[3].a, Point::new(2.0, 0.5));
    assert_eq!(lines[3].b, root);
    assert!(lines.iter().all(|l| l.stroke == Some(Colour::Gray)));
}

#[test]
fn right_foot_needs_the_box() {
    let run = drive(
        &RIGHT,
        "--< ",
        Pos::new(0, 2),
        &[(Pos::new(0, 2), Meta::LINE_AFTER_E)],
    );
    assert_eq!(run.outcome, Outcome::Rejected(Pos::new(0, 3)));
}

#[test]
fn right_foot_needs_the_line() {
    let run = drive(
        &RIGHT,
        " <|",
        Pos::new(0, 1),
        &[(Pos::new(0, 2), Meta::BOX_START_E)],
    );
    assert_eq!(run.outcome, Outcome::Rejected(Pos::new(0, 1)));
}

#[test]
fn left_foot_takes_dash_from_the_line_start() {
    let run = drive(
        &LEFT,
        "|>- -",
        Pos::new(0, 1),
        &[
            (Pos::new(0, 1), Meta::BOX_AFTER_E),
            (Pos::new(0, 2), Meta::LINE_START_E | Meta::DASH_START_E),
        ],
    );
    assert!(run.is_match());
    let lines = lines(&run.render());
    assert_eq!(lines[3].stroke_type, StrokeType::Dashed);
    // Flipped: the prongs reach back to the border on the left.
    assert_eq!(lines[1].b, Point::new(0.5, 0.5));
}

#[test]
fn vertical_feet() {
    let up = drive(
        &UP,
        "+-+\nv\n|",
        Pos::new(1, 0),
        &[
            (Pos::new(1, 0), Meta::BOX_AFTER_S),
            (Pos::new(2, 0), Meta::LINE_START_S),
        ],
    );
    assert_eq!(up.outcome, Outcome::Matched(Pos::new(2, 0)));

    let down = drive(
        &DOWN,
        "|\n^\n+-+",
        Pos::new(1, 0),
        &[
            (Pos::new(1, 0), Meta::LINE_AFTER_S | Meta::DASH_AFTER_S),
            (Pos::new(2, 0), Meta::BOX_START_S),
        ],
    );
    assert_eq!(down.outcome, Outcome::Matched(Pos::new(2, 0)));
    let lines = lines(&down.render());
    assert_eq!(lines[3].stroke_type, StrokeType::Dashed);
    assert_eq!(lines[0].b, Point::new(0.5 - 0.6, 2.5));
}

#[test]
fn unreachable_box_rejects() {
    let run = drive(
        &DOWN,
        " |\n ^",
        Pos::new(1, 1),
        &[(Pos::new(1, 1), Meta::LINE_AFTER_S)],
    );
    assert_eq!(run.outcome, Outcome::Rejected(Pos::new(2, 0)));
}

#[test]
fn machine_outlives_a_local_grammar() {
    let run = {
        let foot = CrowsFootGrammar::new(GrammarKind::RightCrowsFoot, RIGHT.config);
        drive(
            &foot,
            "--<|",
            Pos::new(0, 2),
            &[
                (Pos::new(0, 2), Meta::LINE_AFTER_E),
                (Pos::new(0, 3), Meta::BOX_START_E | Meta::OCCUPIED),
            ],
        )
    };
    assert_eq!(run.outcome, Outcome::Matched(Pos::new(0, 3)));
    assert_eq!(lines(&run.render()).len(), 4);
}
