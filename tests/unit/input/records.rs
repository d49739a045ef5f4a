use super::*;

#[test]
fn five_tokens_map_to_fields_in_order() {
    let rec = parse_line("R1 10.0 5.0 2.0 3.0", 1).unwrap().unwrap();
    assert_eq!(rec.name, "R1");
    assert_eq!(rec.width, 10.0);
    assert_eq!(rec.height, 5.0);
    assert_eq!(rec.x, 2.0);
    assert_eq!(rec.y, 3.0);
    assert_eq!(rec.rect(), Rect::new(2.0, 3.0, 12.0, 8.0));
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let rec = parse_line("  blk 1 2 3 4\r\n", 1).unwrap().unwrap();
    assert_eq!(rec.name, "blk");
    assert_eq!(rec.y, 4.0);
}

#[test]
fn other_token_counts_are_skipped() {
    assert_eq!(parse_line("R2 1.0 2.0", 1).unwrap(), None);
    assert_eq!(parse_line("R2 1.0 2.0 3.0 4.0 5.0", 1).unwrap(), None);
    assert_eq!(parse_line("", 1).unwrap(), None);
    assert_eq!(parse_line("Name\tWidth\tHeight\tX\tY", 1).unwrap(), None);
}

#[test]
fn double_space_creates_an_empty_token() {
    // Six tokens once the empty one between the double space is counted.
    assert_eq!(parse_line("R1 1  2 3 4", 1).unwrap(), None);
    // Exactly five tokens, but the empty one is not a number.
    let err = parse_line("R1  2 3 4", 9).unwrap_err();
    match err {
        FloorplotError::Parse {
            line, field, token, ..
        } => {
            assert_eq!(line, 9);
            assert_eq!(field, "width");
            assert_eq!(token, "");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn whitespace_inside_a_numeric_token_is_ignored() {
    let rec = parse_line("R1 10.0\t 5.0 2.0 3.0", 1).unwrap().unwrap();
    assert_eq!(rec.width, 10.0);
    assert_eq!(rec.height, 5.0);

    let err = parse_line("R1 abc\t 5.0 2.0 3.0", 3).unwrap_err();
    assert!(matches!(
        err,
        FloorplotError::Parse { ref token, .. } if token == "abc\t"
    ));
}

#[test]
fn non_numeric_field_is_a_parse_error() {
    let err = parse_line("R3 abc 5.0 1.0 1.0", 4).unwrap_err();
    assert!(matches!(
        err,
        FloorplotError::Parse {
            line: 4,
            field: "width",
            ..
        }
    ));

    let err = parse_line("R3 1.0 5.0 1.0 y", 2).unwrap_err();
    assert!(matches!(err, FloorplotError::Parse { field: "y", .. }));
}

#[test]
fn parse_records_counts_only_accepted_lines() {
    let text = "Name\tWidth\tHeight\tX\tY\n\
                a 1 1 0 0\n\
                short 1 2\n\
                b 2 1 1 0\n\
                \n\
                too many tokens here 1 2\n\
                c 1 3 0 1\n";
    let records = parse_records(text).unwrap();
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn parse_records_reports_one_based_line_numbers() {
    let err = parse_records("a 1 1 0 0\nb 1 1 0 0\nc 1 nope 0 0\n").unwrap_err();
    assert!(matches!(
        err,
        FloorplotError::Parse {
            line: 3,
            field: "height",
            ..
        }
    ));
}

#[test]
fn exponent_and_negative_values_parse() {
    let rec = parse_line("m 1e2 2.5E-1 -3 -0.5", 1).unwrap().unwrap();
    assert_eq!(rec.width, 100.0);
    assert_eq!(rec.height, 0.25);
    assert_eq!(rec.x, -3.0);
    assert_eq!(rec.y, -0.5);
}

#[test]
fn empty_text_yields_no_records() {
    assert!(parse_records("").unwrap().is_empty());
}

#[test]
fn read_records_missing_file_is_io_error() {
    let err = read_records("target/definitely/not/here/plot_data.txt").unwrap_err();
    assert!(matches!(err, FloorplotError::Io { .. }));
}

#[test]
fn read_records_from_reader() {
    let data = b"a 1 2 3 4\nb 5 6 7 8\n";
    let records = read_records_from(&data[..], Path::new("mem")).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].x, 7.0);
}
