use super::*;
use crate::foundation::core::Rect;
use crate::foundation::error::FloorplotError;
use crate::render::palette::{FixedPalette, RandomPalette};
use crate::render::sink::{RecordingSink, SinkCall};

fn palette() -> FixedPalette {
    FixedPalette::new(vec![
        ColorDef::rgb(0.1, 0.2, 0.3),
        ColorDef::rgb(0.4, 0.5, 0.6),
    ])
}

#[test]
fn only_five_token_lines_are_drawn() {
    let text = "Name\tWidth\tHeight\tX\tY\n\
                a 1 1 0 0\n\
                b 2 1 1 0\n\
                R2 1.0 2.0\n\
                x 1 2 3 4 5\n\
                c 1 3 0 1\n\
                \n";
    let mut sink = RecordingSink::new();
    let summary = render_str(text, &mut sink, &mut palette()).unwrap();
    assert_eq!(summary.rectangles, 3);
    assert_eq!(sink.draws().len(), 3);
}

#[test]
fn fields_map_to_lower_left_corner_and_size() {
    let mut sink = RecordingSink::new();
    render_str("R1 10.0 5.0 2.0 3.0\n", &mut sink, &mut palette()).unwrap();
    let draws = sink.draws();
    let r = draws[0].rect;
    assert_eq!(r, Rect::new(2.0, 3.0, 12.0, 8.0));
    assert_eq!(r.width(), 10.0);
    assert_eq!(r.height(), 5.0);
    assert_eq!(draws[0].edge, ColorDef::BLACK);
}

#[test]
fn call_sequence_is_draws_then_scaled_then_present() {
    let mut sink = RecordingSink::new();
    render_str("under 4 4 0 0\nover 4 4 2 2\n", &mut sink, &mut palette()).unwrap();

    let calls = sink.calls();
    assert_eq!(calls.len(), 4);
    let SinkCall::Draw(first) = &calls[0] else {
        panic!("expected draw, got {:?}", calls[0]);
    };
    let SinkCall::Draw(second) = &calls[1] else {
        panic!("expected draw, got {:?}", calls[1]);
    };
    assert_eq!(first.rect, Rect::new(0.0, 0.0, 4.0, 4.0));
    assert_eq!(second.rect, Rect::new(2.0, 2.0, 6.0, 6.0));
    assert_eq!(first.fill, ColorDef::rgb(0.1, 0.2, 0.3));
    assert_eq!(second.fill, ColorDef::rgb(0.4, 0.5, 0.6));
    assert_eq!(calls[2], SinkCall::SetAspect(AspectMode::Scaled));
    assert_eq!(calls[3], SinkCall::Present);
}

#[test]
fn wrong_token_counts_are_not_errors() {
    let mut sink = RecordingSink::new();
    let text = "R2 1.0 2.0\nR4 1.0 2.0 3.0 4.0 5.0\n";
    let summary = render_str(text, &mut sink, &mut palette()).unwrap();
    assert_eq!(summary.rectangles, 0);
    assert!(sink.draws().is_empty());
    assert!(sink.presented());
}

#[test]
fn non_numeric_field_aborts_before_any_draw() {
    let mut sink = RecordingSink::new();
    let text = "ok 1 1 0 0\nR3 abc 5.0 1.0 1.0\n";
    let err = render_str(text, &mut sink, &mut palette()).unwrap_err();
    assert!(matches!(
        err,
        FloorplotError::Parse {
            line: 2,
            field: "width",
            ..
        }
    ));
    assert!(sink.calls().is_empty());
}

#[test]
fn empty_input_still_presents() {
    let mut sink = RecordingSink::new();
    let summary = render_str("", &mut sink, &mut palette()).unwrap();
    assert_eq!(summary, RenderSummary { rectangles: 0 });
    assert_eq!(
        sink.calls(),
        &[SinkCall::SetAspect(AspectMode::Scaled), SinkCall::Present]
    );
}

#[test]
fn seeded_colors_are_reproducible_across_renders() {
    let text = "a 1 1 0 0\nb 1 1 1 0\nc 1 1 2 0\n";
    let mut s1 = RecordingSink::new();
    let mut s2 = RecordingSink::new();
    render_str(text, &mut s1, &mut RandomPalette::seeded(11)).unwrap();
    render_str(text, &mut s2, &mut RandomPalette::seeded(11)).unwrap();
    assert_eq!(s1.draws(), s2.draws());
}

#[test]
fn render_missing_file_is_io_error() {
    let mut sink = RecordingSink::new();
    let err = render("target/missing/plot_data.txt", &mut sink, &mut palette()).unwrap_err();
    assert!(matches!(err, FloorplotError::Io { .. }));
    assert!(sink.calls().is_empty());
}
