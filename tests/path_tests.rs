use chartpath::path::{CoordAxis, Path, PathCommand, PathFormat, Segment};

fn sample_path() -> Path<u32> {
    let mut path = Path::new();
    path.move_to(1.0, 2.0, false, Some(0))
        .line_to(3.0, 4.0, false, Some(1))
        .curve_to(5.0, 6.0, 7.0, 8.0, 9.0, 10.0, false, Some(2))
        .arc_to(5.0, 5.0, 0.0, false, true, 15.0, 15.0, false, Some(3));
    path
}

#[test]
fn stringify_emits_canonical_commands() {
    assert_eq!(
        sample_path().stringify(),
        "M1,2L3,4C5,6,7,8,9,10A5,5,0,0,1,15,15"
    );
}

#[test]
fn relative_commands_use_lowercase_letters() {
    let mut path: Path<()> = Path::new();
    path.move_to(1.0, 1.0, false, None)
        .line_to(2.0, 0.0, true, None);

    assert_eq!(path.stringify(), "M1,1l2,0");
}

#[test]
fn stringify_rounds_to_the_configured_accuracy() {
    let mut path: Path<()> = Path::new();
    path.move_to(1.23456, 2.0, false, None);
    assert_eq!(path.stringify(), "M1.235,2");

    let mut precise: Path<()> = Path::new().with_format(PathFormat { accuracy: Some(1) });
    precise.move_to(1.26, 2.0, false, None);
    assert_eq!(precise.stringify(), "M1.3,2");
}

#[test]
fn stringify_is_repeatable() {
    let path = sample_path();
    assert_eq!(path.stringify(), path.stringify());
}

#[test]
fn empty_path_stringifies_to_nothing() {
    let path: Path<()> = Path::new();
    assert_eq!(path.stringify(), "");

    let closed: Path<()> = Path::new().with_closed(true);
    assert_eq!(closed.stringify(), "Z");
}

#[test]
fn parse_round_trips_well_formed_descriptions() {
    let description = "M1,2L3,4C5,6,7,8,9,10A5,5,0,0,1,15,15";
    let mut path: Path<()> = Path::new();
    path.parse(description).expect("well-formed path");

    assert_eq!(path.stringify(), description);
}

#[test]
fn parse_drops_closing_markers_and_keeps_the_flag() {
    let mut path: Path<()> = Path::new();
    path.parse("M0,0L5,5Z").expect("well-formed path");

    assert!(!path.is_closed());
    assert_eq!(path.len(), 2);
    assert_eq!(path.stringify(), "M0,0L5,5");
}

#[test]
fn parse_splices_at_the_cursor() {
    let mut path: Path<()> = Path::new();
    path.parse("M0,0L10,10").expect("well-formed path");
    path.set_position(1);
    path.parse("L5,5").expect("well-formed path");

    assert_eq!(path.stringify(), "M0,0L5,5L10,10");
    assert_eq!(path.position(), 2);
}

#[test]
fn parse_rejects_malformed_descriptions() {
    let mut path: Path<()> = Path::new();
    assert!(path.parse("M0,0Q3,3").is_err());
    assert!(path.parse("L1").is_err());
}

#[test]
fn cursor_is_clamped_to_the_element_count() {
    let mut path = sample_path();
    path.set_position(100);
    assert_eq!(path.position(), 4);
}

#[test]
fn remove_deletes_at_the_cursor() {
    let mut path = sample_path();
    path.set_position(1);
    path.remove(2);

    assert_eq!(path.len(), 2);
    assert_eq!(path.stringify(), "M1,2A5,5,0,0,1,15,15");
}

#[test]
fn remove_saturates_at_the_tail() {
    let mut path = sample_path();
    path.set_position(3);
    path.remove(10);

    assert_eq!(path.len(), 3);
}

#[test]
fn join_concatenates_element_sequences() {
    let mut first: Path<()> = Path::new();
    first.move_to(0.0, 0.0, false, None).line_to(1.0, 1.0, false, None);
    let mut second: Path<()> = Path::new();
    second.move_to(5.0, 5.0, false, None);

    let first_len = first.len();
    let second_len = second.len();
    let joined = Path::join(vec![first, second]);

    assert_eq!(joined.len(), first_len + second_len);
    assert_eq!(joined.stringify(), "M0,0L1,1M5,5");
}

#[test]
fn clone_is_independent_of_the_original() {
    let original = sample_path();
    let mut cloned = original.clone();
    cloned.translate(100.0, 100.0);

    assert_eq!(
        original.stringify(),
        "M1,2L3,4C5,6,7,8,9,10A5,5,0,0,1,15,15"
    );
    assert_ne!(cloned.stringify(), original.stringify());
}

#[test]
fn clone_preserves_attached_data() {
    let original = sample_path();
    let cloned = original.clone();

    let data: Vec<Option<u32>> = cloned
        .elements()
        .iter()
        .map(|element| element.data)
        .collect();
    assert_eq!(data, vec![Some(0), Some(1), Some(2), Some(3)]);
    assert_eq!(cloned.stringify(), original.stringify());
}

#[test]
fn clone_with_close_overrides_the_flag() {
    let original = sample_path();
    let closed = original.clone_with_close(true);

    assert!(closed.stringify().ends_with('Z'));
    assert!(!original.stringify().ends_with('Z'));
}

#[test]
fn split_by_command_starts_a_sub_path_per_recurrence() {
    let mut path: Path<()> = Path::new();
    path.parse("M0,0L1,1M2,2L3,3M4,4").expect("well-formed path");

    let sub_paths = path.split_by_command(PathCommand::Move);
    assert_eq!(sub_paths.len(), 3);
    assert_eq!(sub_paths[0].stringify(), "M0,0L1,1");
    assert_eq!(sub_paths[1].stringify(), "M2,2L3,3");
    assert_eq!(sub_paths[2].stringify(), "M4,4");
}

#[test]
fn scale_multiplies_per_axis() {
    let mut path: Path<()> = Path::new();
    path.parse("M1,2L3,4").expect("well-formed path");
    path.scale(2.0, 3.0);

    assert_eq!(path.stringify(), "M2,6L6,12");
}

#[test]
fn translate_shifts_per_axis() {
    let mut path: Path<()> = Path::new();
    path.parse("M1,2L3,4").expect("well-formed path");
    path.translate(10.0, 20.0);

    assert_eq!(path.stringify(), "M11,22L13,24");
}

#[test]
fn transform_keeps_values_when_the_callback_declines() {
    let mut path: Path<()> = Path::new();
    path.parse("M1,2L3,4").expect("well-formed path");
    path.transform(|axis, value| match axis {
        CoordAxis::X => Some(value + 1.0),
        CoordAxis::Y => None,
    });

    assert_eq!(path.stringify(), "M2,2L4,4");
}

#[test]
fn transform_leaves_arc_radii_untouched() {
    let mut path: Path<()> = Path::new();
    path.parse("A5,5,0,0,1,15,15").expect("well-formed path");
    path.scale(2.0, 2.0);

    let Segment::Arc { rx, ry, x, y, .. } = path.elements()[0].segment else {
        panic!("expected an arc");
    };
    assert_eq!((rx, ry), (5.0, 5.0));
    assert_eq!((x, y), (30.0, 30.0));
}
