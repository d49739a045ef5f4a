use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FloorplotError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FloorplotError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        FloorplotError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn io_names_the_path() {
    let err = FloorplotError::io(
        "plot_data.txt",
        std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    );
    let msg = err.to_string();
    assert!(msg.contains("plot_data.txt"));
    assert!(msg.contains("no such file"));
}

#[test]
fn parse_reports_line_field_and_token() {
    let source = "abc".parse::<f64>().unwrap_err();
    let err = FloorplotError::Parse {
        line: 7,
        field: "width",
        token: "abc".to_string(),
        source,
    };
    let msg = err.to_string();
    assert!(msg.contains("line 7"));
    assert!(msg.contains("width 'abc'"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FloorplotError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
