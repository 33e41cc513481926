use super::*;
use serde_json::json;

#[test]
fn accepts_bare_array_and_points_object() {
    let bare = parse_coordinates(r#"[{"lat":1,"lng":2}]"#).expect("bare array");
    let wrapped = parse_coordinates(r#"{"points":[{"lat":1,"lng":2}]}"#).expect("points object");

    assert_eq!(bare.coordinates, vec![Coordinate::new(1.0, 2.0)]);
    assert_eq!(bare, wrapped);
}

#[test]
fn rejects_malformed_json() {
    assert_eq!(
        parse_coordinates("invalid json"),
        Err(SubmissionError::InvalidInput)
    );
    assert_eq!(parse_coordinates(""), Err(SubmissionError::InvalidInput));
    assert_eq!(
        parse_coordinates(r#"[{"lat":1,"lng":2}"#),
        Err(SubmissionError::InvalidInput)
    );
}

#[test]
fn filters_invalid_candidates() {
    let parsed = parse_coordinates(
        r#"[
            {"lat": 1, "lng": 2},
            {"lat": "1", "lng": 2},
            {"lat": 1},
            {"lat": null, "lng": 2},
            null,
            [1, 2],
            "1,2",
            {"lat": -33.8688, "lng": 151.2093, "name": "Sydney"}
        ]"#,
    )
    .expect("some valid");

    assert_eq!(parsed.candidate_count, 8);
    assert_eq!(parsed.rejected_count(), 6);
    assert_eq!(
        parsed.coordinates,
        vec![
            Coordinate::new(1.0, 2.0),
            Coordinate::new(-33.8688, 151.2093)
        ]
    );
}

#[test]
fn all_invalid_candidates_is_an_error() {
    assert_eq!(
        parse_coordinates(r#"[{"foo":1}]"#),
        Err(SubmissionError::NoValidCoordinates)
    );
    assert_eq!(
        parse_coordinates(r#"{"points":[null, {"lat":"x","lng":"y"}]}"#),
        Err(SubmissionError::NoValidCoordinates)
    );
}

#[test]
fn empty_candidates_are_not_an_error() {
    for raw in ["[]", r#"{"points":[]}"#, "{}", "42", "null", r#"{"points":{}}"#] {
        let parsed = parse_coordinates(raw).expect("empty submission");
        assert_eq!(parsed.candidate_count, 0, "{raw}");
        assert!(parsed.coordinates.is_empty(), "{raw}");
    }
}

#[test]
fn no_range_clamping() {
    let parsed = parse_coordinates(r#"[{"lat": 123.4, "lng": -500}]"#).expect("parsed");
    assert_eq!(parsed.coordinates, vec![Coordinate::new(123.4, -500.0)]);
}

#[test]
fn candidate_shapes() {
    assert_eq!(candidate_points(&json!([1, 2])).len(), 2);
    assert_eq!(candidate_points(&json!({ "points": [1] })).len(), 1);
    assert!(candidate_points(&json!({ "coords": [1] })).is_empty());
    assert!(candidate_points(&json!("points")).is_empty());
    assert_eq!(
        valid_coordinate(&json!({ "lat": 0, "lng": 0 })),
        Some(Coordinate::new(0.0, 0.0))
    );
    assert_eq!(valid_coordinate(&json!({ "lat": true, "lng": 0 })), None);
}

#[test]
fn out_of_range_numbers_are_filtered_not_invalid() {
    let parsed =
        parse_coordinates(r#"[{"lat":1e400,"lng":0},{"lat":1,"lng":2}]"#).expect("valid json");

    assert_eq!(parsed.candidate_count, 2);
    assert_eq!(parsed.coordinates, vec![Coordinate::new(1.0, 2.0)]);
    assert_eq!(
        parse_coordinates(r#"[{"lat":0,"lng":-1e999}]"#),
        Err(SubmissionError::NoValidCoordinates)
    );
}

#[test]
fn unpaired_surrogate_escapes_still_parse() {
    for raw in [
        r#"[{"lat":1,"lng":2,"name":"\ud800"}]"#,
        r#"[{"lat":1,"lng":2,"name":"\udc00x"}]"#,
        r#"{"note":"\uD800A","points":[{"lat":1,"lng":2}]}"#,
        r#"[{"lat":1,"lng":2,"name":"\ud83d\ude00 \\ud800"}]"#,
    ] {
        let parsed = parse_coordinates(raw).expect(raw);
        assert_eq!(parsed.coordinates, vec![Coordinate::new(1.0, 2.0)], "{raw}");
    }

    assert_eq!(
        replace_lone_surrogates(r#"["\ud800","\ud83d\ude00","\\ud800"]"#),
        r#"["\ufffd","\ud83d\ude00","\\ud800"]"#
    );
    assert_eq!(
        parse_coordinates(r#"[{"lat":1,"lng":2}"\ud800"#),
        Err(SubmissionError::InvalidInput)
    );
}
