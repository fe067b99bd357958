use calcodec::{Component, Decoder};

const MINIMAL: &str = include_str!("./resources/minimal.ics");
const MEETING: &str = include_str!("./resources/meeting.ics");

pub fn decode_one(input: &str) -> Component {
    Decoder::from_slice(input.as_bytes()).expect_one().unwrap()
}

pub mod line {
    use calcodec::LineReader;
    use itertools::Itertools;

    #[test]
    fn unfolds_fixture() {
        let lines = LineReader::from_slice(crate::MEETING.as_bytes())
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        let physical = crate::MEETING.matches("\r\n").count();
        assert_eq!(lines.len(), physical - 3);

        let attendee = lines
            .iter()
            .find(|line| line.as_str().starts_with("ATTENDEE;CN"))
            .unwrap();
        assert_eq!(
            attendee.as_str(),
            "ATTENDEE;CN=\"Doe, Jane\";ROLE=REQ-PARTICIPANT;RSVP=TRUE:mailto:jane@example.com"
        );
        // Line numbers count physical lines
        let numbers = lines.iter().map(|line| line.number()).collect_vec();
        assert_eq!(numbers[..3], [1, 2, 3]);
        assert!(numbers.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

pub mod property {
    use calcodec::{ContentLineParser, parser::ContentLineError};
    use insta::assert_snapshot;

    #[test]
    fn fixture() {
        let props = ContentLineParser::from_slice(crate::MEETING.as_bytes())
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(props.first().unwrap().name, "BEGIN");
        assert_eq!(props.last().unwrap().value, "VCALENDAR");

        let member = props
            .iter()
            .find(|prop| prop.params.contains("MEMBER"))
            .unwrap();
        assert_eq!(
            member.params.get_all("member").unwrap(),
            ["mailto:a@example.com", "mailto:b@example.com"]
        );
        assert_eq!(member.params.get("CN"), Some("Bob"));
        assert_eq!(member.value, "mailto:bob@example.com");
        assert_snapshot!(member, @r#"
        name: ATTENDEE
        params: Parameters([("MEMBER", ["mailto:a@example.com", "mailto:b@example.com"]), ("CN", ["Bob"])])
        value: "mailto:bob@example.com"
        "#);
    }

    #[test]
    fn errors() {
        let input = include_str!("./resources/property_errors.ics");
        let errors: Vec<_> = ContentLineParser::from_slice(input.as_bytes())
            .map(|res| res.unwrap_err())
            .collect();
        assert_eq!(errors.len(), 7);
        assert!(matches!(errors[0], ContentLineError::MissingValue(1, _)));
        assert!(matches!(errors[1], ContentLineError::MissingName(2, _)));
        assert!(matches!(
            errors[2],
            ContentLineError::MissingDelimiter(3, '=', _)
        ));
        assert!(matches!(
            errors[3],
            ContentLineError::MissingClosingQuote(4, _)
        ));
        assert!(matches!(errors[4], ContentLineError::MissingParamKey(5, _)));
        assert!(matches!(errors[5], ContentLineError::EmptyParamValue(6, _)));
        assert!(matches!(
            errors[6],
            ContentLineError::UnexpectedChar(7, '/', _)
        ));
        assert_snapshot!(&errors[0], @r#"Line 1: Missing value: "SUMMARY""#);
    }
}

pub mod decoder {
    use calcodec::{ComponentKind, Decoder, ParserError};

    #[test_log::test]
    fn minimal_calendar() {
        let calendar = crate::decode_one(crate::MINIMAL);
        assert_eq!(calendar.kind(), ComponentKind::Calendar);
        let names: Vec<_> = calendar.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["PRODID", "VERSION"]);

        assert_eq!(calendar.components.len(), 1);
        let event = &calendar.components[0];
        assert_eq!(event.kind(), ComponentKind::Event);
        let names: Vec<_> = event.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["UID", "DTSTAMP"]);
    }

    #[test_log::test]
    fn meeting() {
        let calendar = crate::decode_one(crate::MEETING);
        let kinds: Vec<_> = calendar.components.iter().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            [
                ComponentKind::Timezone,
                ComponentKind::Event,
                ComponentKind::Todo
            ]
        );
        let timezone = &calendar.components[0];
        assert_eq!(timezone.components.len(), 2);

        let event = calendar.events().next().unwrap();
        assert_eq!(event.components[0].kind(), ComponentKind::Alarm);
        assert_eq!(event.count_properties("ATTENDEE"), 2);
    }

    #[test]
    fn concatenated_streams() {
        let input = format!("{}{}", crate::MINIMAL, crate::MINIMAL);
        let calendars = Decoder::from_slice(input.as_bytes())
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(calendars.len(), 2);
        assert_eq!(calendars[0], calendars[1]);
    }

    #[test]
    fn begin_end_mismatch() {
        let input = crate::MINIMAL.replace("END:VEVENT", "END:VTODO");
        let err = Decoder::from_slice(input.as_bytes()).decode().unwrap_err();
        insta::assert_snapshot!(err, @"malformed component: expected END:VEVENT, found END:VTODO");
    }

    #[test]
    fn truncated_stream() {
        let input = &crate::MINIMAL[..crate::MINIMAL.find("END:VEVENT").unwrap()];
        let err = Decoder::from_slice(input.as_bytes()).decode().unwrap_err();
        assert!(matches!(err, ParserError::Unterminated(name) if name == "VEVENT"));
    }
}

pub mod values {
    use calcodec::{
        ValueError,
        types::{OlsonResolver, Tz},
    };
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use rstest::rstest;

    #[test]
    fn meeting_event() {
        let calendar = crate::decode_one(crate::MEETING);
        let event = calendar.events().next().unwrap();

        let summary = event.get_property("SUMMARY").unwrap();
        assert_eq!(summary.get_text().unwrap(), "Bastille Day Party, with snacks");

        let description = event.get_property("DESCRIPTION").unwrap();
        similar_asserts::assert_eq!(
            description.get_text().unwrap(),
            "Bring a dish to share. The party starts in the courtyard and moves upstairs\n\
            once it gets dark; wear something warm."
        );

        let categories = event.get_property("CATEGORIES").unwrap();
        assert_eq!(
            categories.get_text_list().unwrap(),
            ["PARTY", "HOLIDAY", "a,b"]
        );

        let start = event
            .get_property("DTSTART")
            .unwrap()
            .get_datetime(&OlsonResolver)
            .unwrap();
        assert_eq!(start.timezone(), Tz::Olson(chrono_tz::Europe::Berlin));
        assert_eq!(start, Utc.with_ymd_and_hms(1997, 7, 14, 15, 0, 0).unwrap());

        let duration = event.get_property("DURATION").unwrap();
        assert_eq!(duration.get_duration().unwrap(), Duration::minutes(90));

        let priority = event.get_property("PRIORITY").unwrap();
        assert_eq!(priority.get_integer().unwrap(), 5);

        let attach = event.get_property("ATTACH").unwrap();
        assert_eq!(attach.get_binary().unwrap(), b"hello world");

        let all_day = event.get_property("X-ALLDAY").unwrap();
        assert!(!all_day.get_bool().unwrap());
        assert!(matches!(
            all_day.get_text(),
            Err(ValueError::TypeMismatch { .. })
        ));

        let trigger = event.components[0].get_property("TRIGGER").unwrap();
        assert_eq!(trigger.get_duration().unwrap(), Duration::minutes(-15));
    }

    #[test]
    fn meeting_todo() {
        let calendar = crate::decode_one(crate::MEETING);
        let todo = calendar
            .components_of_kind(calcodec::ComponentKind::Todo)
            .next()
            .unwrap();
        let start = todo.get_property("DTSTART").unwrap();
        assert_eq!(
            start.get_date().unwrap(),
            NaiveDate::from_ymd_opt(1997, 7, 15).unwrap()
        );
        assert_eq!(
            todo.get_property("DURATION").unwrap().get_duration().unwrap(),
            Duration::weeks(1)
        );
    }

    #[rstest]
    #[case("PT3600S", 3600)]
    #[case("-P1D", -86400)]
    #[case("P1W", 604_800)]
    #[case("P15DT5H0M20S", 15 * 86400 + 5 * 3600 + 20)]
    fn durations(#[case] raw: &str, #[case] seconds: i64) {
        let prop = calcodec::Property::with_value("DURATION", raw);
        assert_eq!(prop.get_duration().unwrap(), Duration::seconds(seconds));
    }

    #[rstest]
    #[case("P1X")]
    #[case("PT1D")]
    #[case("P1H")]
    #[case("PTH")]
    fn invalid_durations(#[case] raw: &str) {
        let prop = calcodec::Property::with_value("DURATION", raw);
        assert!(matches!(prop.get_duration(), Err(ValueError::Duration(_))));
    }
}

pub mod encoder {
    use calcodec::{
        Component, Decoder, Emitter, EncodeError, Encoder, Property, ValidationError, validate,
    };

    #[test_log::test]
    fn minimal_calendar_regenerates_identically() {
        let calendar = crate::decode_one(crate::MINIMAL);
        similar_asserts::assert_eq!(calendar.generate(), crate::MINIMAL);
    }

    #[test_log::test]
    fn minimal_calendar_is_refused() {
        // The event has no METHOD and the calendar no DTSTART
        let calendar = crate::decode_one(crate::MINIMAL);
        let mut encoder = Encoder::new(Vec::new());
        let err = encoder.encode(&calendar).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::Validation(ValidationError::MissingCalendarStart(_))
        ));
        assert!(encoder.into_inner().is_empty());
    }

    #[test_log::test]
    fn roundtrip() {
        let calendar = crate::decode_one(crate::MEETING);
        validate(&calendar).unwrap();

        let mut encoder = Encoder::new(Vec::new());
        encoder.encode(&calendar).unwrap();
        let encoded = String::from_utf8(encoder.into_inner()).unwrap();

        for physical in encoded.split_terminator("\r\n") {
            assert!(physical.len() <= 75, "{physical:?} is too long");
        }
        let decoded = Decoder::from_slice(encoded.as_bytes())
            .expect_one()
            .unwrap();
        similar_asserts::assert_eq!(decoded, calendar);
        // Emitted text is stable once normalised
        similar_asserts::assert_eq!(decoded.generate(), encoded);
    }

    #[test]
    fn folds_description() {
        let calendar = crate::decode_one(crate::MEETING);
        let event = calendar.events().next().unwrap();
        similar_asserts::assert_eq!(
            event.get_property("DESCRIPTION").unwrap().generate(),
            "DESCRIPTION:Bring a dish to share. The party starts in the courtyard and m\r\n \
            oves upstairs\\nonce it gets dark\\; wear something warm.\r\n"
        );
    }

    #[test]
    fn built_calendar() {
        let mut event = Component::new("VEVENT");
        event.add_property(Property::with_value("UID", "built-1"));
        let mut dtstamp = Property::new("DTSTAMP");
        dtstamp.set_datetime(&chrono::Utc::now());
        event.add_property(dtstamp);
        let mut summary = Property::new("SUMMARY");
        summary.set_text("Notes; with \"quotes\", commas\nand lines");
        event.add_property(summary);
        let mut location = Property::new("LOCATION").with_param("ALTREP", "cid:room@x");
        location.set_text("Room 1");
        event.add_property(location);

        let mut calendar = Component::calendar();
        calendar.add_property(Property::with_value("DTSTART", "20240101T000000Z"));
        calendar.add_component(event);

        let mut encoder = Encoder::new(Vec::new());
        encoder.encode(&calendar).unwrap();
        let encoded = encoder.into_inner();

        let decoded = Decoder::from_slice(&encoded).expect_one().unwrap();
        assert_eq!(decoded, calendar);
        let event = decoded.events().next().unwrap();
        assert_eq!(
            event.get_property("SUMMARY").unwrap().get_text().unwrap(),
            "Notes; with \"quotes\", commas\nand lines"
        );
        assert_eq!(
            event.get_property("LOCATION").unwrap().params.get("ALTREP"),
            Some("cid:room@x")
        );
    }

    #[test_log::test]
    fn structural_property_is_refused() {
        let mut event = Component::new("VEVENT");
        event.add_property(Property::with_value("UID", "u1"));
        event.add_property(Property::with_value("DTSTAMP", "19960704T120000Z"));
        event.add_property(Property::with_value("END", "VEVENT"));
        let mut calendar = Component::calendar();
        calendar.add_property(Property::with_value("DTSTART", "19960704T120000Z"));
        calendar.add_component(event);

        let mut encoder = Encoder::new(Vec::new());
        let err = encoder.encode(&calendar).unwrap_err();
        insta::assert_snapshot!(
            err,
            @r#"refusing to encode an invalid component: VEVENT has a property "END" that cannot be encoded"#
        );
        assert!(encoder.into_inner().is_empty());
    }

    #[test]
    fn duplicate_prodid_is_refused() {
        let mut calendar = crate::decode_one(crate::MEETING);
        calendar.add_property(Property::with_value("PRODID", "-//Other//EN"));
        let err = Encoder::new(Vec::new()).encode(&calendar).unwrap_err();
        insta::assert_snapshot!(
            err,
            @"refusing to encode an invalid component: VCALENDAR must have exactly one PRODID, found 2"
        );
    }
}
