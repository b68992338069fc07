use super::*;
use pretty_assertions::assert_eq;
use rustc_hash::FxHashMap;

#[derive(Default)]
struct Recorder {
    visits: FxHashMap<GrammarKind, usize>,
    completions: Vec<(GrammarKind, Pos, Vec<(Pos, Meta)>)>,
}

impl ScanObserver for Recorder {
    fn visit(&mut self, pass: GrammarKind, _cell: Cell, _visible: Meta) {
        *self.visits.entry(pass).or_default() += 1;
    }

    fn completed(&mut self, pass: GrammarKind, matched: &Match, writes: &[(Pos, Meta)]) {
        assert_eq!(pass, matched.grammar());
        self.completions
            .push((pass, matched.anchor(), writes.to_vec()));
    }
}

fn run(text: &str) -> (Diagram, Recorder) {
    let grid = Grid::new(text);
    let mut recorder = Recorder::default();
    let diagram = Recognizer::default()
        .recognize_grid(&grid, &mut recorder)
        .unwrap_or_else(|e| panic!("{e}"));
    (diagram, recorder)
}

#[test]
fn every_pass_visits_every_cell() {
    let text = "ab\nc";
    let (_, recorder) = run(text);
    let cells = Grid::new(text).cell_count();
    assert_eq!(recorder.visits.len(), 27);
    assert!(recorder.visits.values().all(|&n| n == cells));
}

#[test]
fn literals_complete_in_scan_order() {
    let (diagram, recorder) = run("ab\nc");
    let anchors: Vec<Pos> = diagram.matches().iter().map(Match::anchor).collect();
    assert_eq!(anchors, vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 0)]);
    assert!(diagram
        .matches()
        .iter()
        .all(|m| m.grammar() == GrammarKind::Literal && m.is_complete()));
    assert_eq!(recorder.completions.len(), 3);
    assert_eq!(
        recorder.completions[0].2,
        vec![(Pos::new(0, 0), Meta::OCCUPIED)]
    );
}

#[test]
fn match_ids_increase_across_passes() {
    let (diagram, _) = run("---\nx");
    let ids: Vec<MatchId> = diagram.matches().iter().map(Match::id).collect();
    assert_eq!(diagram.matches()[0].grammar(), GrammarKind::HorizLine);
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "{ids:?}");
}

#[test]
fn overlapping_instances_leave_one_winner() {
    // Every `-` spawns a line; only the first to complete survives.
    let (diagram, _) = run("-----");
    assert_eq!(diagram.matches().len(), 1);
    let line = &diagram.matches()[0];
    assert_eq!(line.anchor(), Pos::new(0, 0));
    assert_eq!(line.footprint().len(), 5);
}

#[test]
fn later_passes_see_earlier_flags() {
    let (_, recorder) = run("-->");
    let line_writes = &recorder.completions[0].2;
    assert!(line_writes.contains(&(Pos::new(0, 2), Meta::LINE_AFTER_E)));
    assert_eq!(recorder.completions[1].0, GrammarKind::RightArrowhead);
}

#[test]
fn box_claims_interior_only_when_configured() {
    let text = "+--+\n|ab|\n+--+";
    let claiming = Recognizer::new(RecognizeOptions::new())
        .recognize(text)
        .unwrap_or_else(|e| panic!("{e}"));
    let border = Recognizer::new(RecognizeOptions::new().claim_box_interior(false))
        .recognize(text)
        .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(claiming.matches().len(), 1);
    assert_eq!(claiming.matches()[0].footprint().len(), 12);
    assert_eq!(border.matches().len(), 3);
    assert_eq!(border.matches()[0].footprint().len(), 10);
}
