use super::*;
use pretty_assertions::assert_eq;
use scrawl_ir::Primitive;

fn visit(row: i32, col: i32, glyph: Glyph) -> Visit {
    Visit {
        pos: Pos::new(row, col),
        glyph,
        meta: Meta::NONE,
    }
}

// === Arrival ===

#[test]
fn next_is_always_here() {
    let v = visit(3, 1, Glyph::EndOfInput);
    assert_eq!(Await::Next.arrival(&v), Arrival::Here);
}

#[test]
fn exact_position_is_here() {
    let v = visit(1, 2, Glyph::Char('x'));
    assert_eq!(Await::At(Pos::new(1, 2)).arrival(&v), Arrival::Here);
}

#[test]
fn passed_position_is_unreachable() {
    let v = visit(2, 0, Glyph::Char('x'));
    assert_eq!(Await::At(Pos::new(1, 5)).arrival(&v), Arrival::Unreachable);
    assert_eq!(Await::At(Pos::new(2, -1)).arrival(&v), Arrival::Unreachable);
}

#[test]
fn future_position_is_later() {
    let v = visit(2, 0, Glyph::EndOfLine);
    assert_eq!(Await::At(Pos::new(2, 4)).arrival(&v), Arrival::Later);
    assert_eq!(Await::At(Pos::new(3, 0)).arrival(&v), Arrival::Later);
}

#[test]
fn end_of_input_ends_every_other_wait() {
    let v = visit(4, 0, Glyph::EndOfInput);
    assert_eq!(Await::At(Pos::new(4, 3)).arrival(&v), Arrival::Unreachable);
    assert_eq!(Await::At(Pos::new(4, 0)).arrival(&v), Arrival::Here);
}

// === Expect ===

#[test]
fn expect_consumes_matching_free_cells() {
    let v = visit(0, 0, Glyph::Char('+'));
    assert_eq!(
        expect(&v, "+", Meta::OCCUPIED, Await::Next),
        Step::write(Meta::OCCUPIED, Await::Next)
    );
    assert_eq!(expect(&v, "-", Meta::OCCUPIED, Await::Next), Step::Rejected);
}

#[test]
fn expect_rejects_occupied_cells() {
    let mut v = visit(0, 0, Glyph::Char('+'));
    v.meta = Meta::OCCUPIED;
    assert_eq!(expect(&v, "+", Meta::OCCUPIED, Await::Next), Step::Rejected);
}

#[test]
fn expect_never_matches_sentinels() {
    let v = visit(0, 3, Glyph::EndOfLine);
    assert_eq!(expect(&v, "-| ", Meta::NONE, Await::Next), Step::Rejected);
}

// === Redirect ===

/// Records which entry point `redirect` chose.
#[derive(Default)]
struct Probe {
    advanced: Vec<Pos>,
    unreachable: Vec<Pos>,
}

impl Machine for Probe {
    fn advance(&mut self, visit: &Visit) -> Step {
        self.advanced.push(visit.pos);
        Step::Matched
    }

    fn unreachable(&mut self, visit: &Visit) -> Step {
        self.unreachable.push(visit.pos);
        Step::Rejected
    }

    fn render(&self) -> Vec<Primitive> {
        Vec::new()
    }
}

#[test]
fn redirect_to_current_cell_advances() {
    let mut probe = Probe::default();
    let v = visit(1, 0, Glyph::Char('|'));
    assert_eq!(redirect(&mut probe, Pos::new(1, 0), &v), Step::Matched);
    assert_eq!(probe.advanced, vec![Pos::new(1, 0)]);
}

#[test]
fn redirect_to_passed_cell_is_unreachable() {
    let mut probe = Probe::default();
    let v = visit(1, 0, Glyph::Char('|'));
    assert_eq!(redirect(&mut probe, Pos::new(1, -1), &v), Step::Rejected);
    assert_eq!(probe.unreachable, vec![Pos::new(1, 0)]);
    assert!(probe.advanced.is_empty());
}

#[test]
fn redirect_to_future_cell_waits() {
    let mut probe = Probe::default();
    let v = visit(1, 0, Glyph::Char('|'));
    assert_eq!(
        redirect(&mut probe, Pos::new(2, 0), &v),
        Step::wait(Await::At(Pos::new(2, 0)))
    );
    assert!(probe.advanced.is_empty());
    assert!(probe.unreachable.is_empty());
}

#[test]
fn terminal_steps() {
    assert!(Step::Matched.is_terminal());
    assert!(Step::Rejected.is_terminal());
    assert!(!Step::wait(Await::Next).is_terminal());
}
