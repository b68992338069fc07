use super::*;
use pretty_assertions::assert_eq;

#[test]
fn constructors_use_shape_defaults() {
    let line = Primitive::line(
        Point::new(0.0, 0.5),
        Point::new(3.0, 0.5),
        Colour::Blue,
        StrokeType::Dashed,
    );
    let Primitive::Line(inner) = &line else {
        panic!("expected a line, got {line:?}");
    };
    assert_eq!(inner.z, SHAPE_Z);
    assert_eq!(inner.stroke, Some(Colour::Blue));
    assert_eq!(inner.width, 1.0);
    assert_eq!(line.stroke_type(), Some(StrokeType::Dashed));
}

#[test]
fn shapes_have_no_fill() {
    let rect = Primitive::rectangle(Point::new(0.5, 0.5), Point::new(3.5, 2.5), Colour::Red);
    let Primitive::Rectangle(inner) = rect else {
        panic!("expected a rectangle");
    };
    assert_eq!(inner.fill, None);
    assert_eq!(inner.stroke_type, StrokeType::Solid);
}

#[test]
fn text_sits_below_shapes() {
    let text = Primitive::text(Point::new(1.0, 0.0), "A", Colour::Brown);
    let ellipse = Primitive::ellipse(Point::new(0.0, 0.0), Point::new(1.0, 1.0), Colour::Green);
    assert!(text.z() < ellipse.z());
    assert_eq!(text.stroke_type(), None);
    assert_eq!(text.kind_name(), "text");
}

#[test]
fn dashed_if() {
    assert_eq!(StrokeType::dashed_if(true), StrokeType::Dashed);
    assert_eq!(StrokeType::dashed_if(false), StrokeType::Solid);
    assert_eq!(StrokeType::default(), StrokeType::Solid);
}

#[test]
fn colour_names_are_css_keywords() {
    assert_eq!(Colour::DarkRed.name(), "darkred");
    assert_eq!(Colour::Gray.to_string(), "gray");
}
