use proptest::prelude::*;

use agenda::{
    codec::{CodecError, Record},
    record::{Event, Participation, User},
    types::{Category, parse_timestamp},
};

fn field() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 @.,À-ú-]{0,16}"
}

fn stamp() -> impl Strategy<Value = String> {
    (1u32..=28, 1u32..=12, 1970i32..=2099, 0u32..24, 0u32..60)
        .prop_map(|(d, m, y, h, min)| format!("{d:02}/{m:02}/{y:04} {h:02}:{min:02}"))
}

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

proptest! {
    #[test]
    fn user_lines_round_trip(name in field(), city in field(), email in field()) {
        let line = format!("{name};{city};{email}");
        let user = User::decode(&line).expect("decode");
        prop_assert_eq!(user.encode(), line);
    }

    #[test]
    fn event_lines_round_trip(
        name in field(),
        address in field(),
        cat in category(),
        ts in stamp(),
        description in field(),
    ) {
        let line = format!("{name};{address};{};{ts};{description}", cat.as_str());
        let event = Event::decode(&line).expect("decode");
        prop_assert_eq!(event.category, cat);
        prop_assert_eq!(event.encode(), line);
    }

    #[test]
    fn participation_lines_round_trip(event in field(), user in field()) {
        let line = format!("{event};{user}");
        let p = Participation::decode(&line).expect("decode");
        prop_assert_eq!(p.encode(), line);
    }
}

#[test]
fn event_decode_reads_every_field() {
    let ev = Event::decode("Show A;Rua X;Shows;01/01/2030 20:00;desc").expect("decode");
    assert_eq!(ev.name, "Show A");
    assert_eq!(ev.address, "Rua X");
    assert_eq!(ev.category, Category::Shows);
    assert_eq!(ev.date_time, parse_timestamp("01/01/2030 20:00").expect("ts"));
    assert_eq!(ev.description, "desc");
}

#[test]
fn wrong_field_counts_are_rejected() {
    assert_eq!(
        User::decode("Ana;Recife").unwrap_err(),
        CodecError::FieldCount {
            kind: "user",
            expected: 3,
            found: 2
        }
    );
    assert!(matches!(
        Participation::decode("a;b;c"),
        Err(CodecError::FieldCount { expected: 2, found: 3, .. })
    ));
    assert!(matches!(
        Event::decode("a;b;Shows;01/01/2030 20:00"),
        Err(CodecError::FieldCount { expected: 5, found: 4, .. })
    ));
}

#[test]
fn empty_trailing_fields_are_kept() {
    let user = User::decode("Ana;Recife;").expect("decode");
    assert_eq!(user.email, "");
    assert_eq!(user.encode(), "Ana;Recife;");
}

#[test]
fn bad_timestamps_and_categories_are_rejected() {
    assert!(matches!(
        Event::decode("a;b;Shows;2030-01-01 20:00;d"),
        Err(CodecError::Timestamp { .. })
    ));
    assert!(matches!(
        Event::decode("a;b;shows;01/01/2030 20:00;d"),
        Err(CodecError::Category(_))
    ));
}

#[test]
fn category_labels_match_exactly() {
    for cat in Category::ALL {
        assert_eq!(cat.as_str().parse::<Category>(), Ok(cat));
    }
    assert_eq!(
        "Eventos esportivos".parse::<Category>(),
        Ok(Category::EventosEsportivos)
    );
    assert!("Eventos Esportivos".parse::<Category>().is_err());
    assert!(" Shows".parse::<Category>().is_err());
    assert!("".parse::<Category>().is_err());
}
