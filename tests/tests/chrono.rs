use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rowmap::{stmt::Value, ConnectionExt, Model, RowSourceExt};
use tests::{tests, DbTest};

#[derive(Debug, Default, PartialEq, Model)]
struct Event {
    id: i64,
    at: DateTime<Utc>,
    day: NaiveDate,
    local: NaiveDateTime,
    time: NaiveTime,
    ends: Option<DateTime<Utc>>,
}

const SCHEMA: &str = "
    CREATE TABLE events (
        id INTEGER PRIMARY KEY,
        at TEXT NOT NULL,
        day TEXT NOT NULL,
        local TEXT NOT NULL,
        time TEXT NOT NULL,
        ends TEXT
    );
";

const INSERT: &str = "
    INSERT INTO events (id, at, day, local, time, ends)
    VALUES (@id, @at, @day, @local, @time, @ends)
";

fn event(id: i64) -> Event {
    let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let time = NaiveTime::from_hms_milli_opt(12, 30, 15, 250).unwrap();

    Event {
        id,
        at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
        day,
        local: day.and_time(time),
        time,
        ends: None,
    }
}

fn date_times_round_trip(test: &mut DbTest) {
    let db = test.setup_db(SCHEMA);
    let events = vec![
        event(1),
        Event {
            ends: Some(Utc.with_ymd_and_hms(2030, 12, 31, 23, 59, 59).unwrap()),
            ..event(2)
        },
    ];

    for event in &events {
        db.execute(&db.create_command_for(INSERT, event, None).unwrap())
            .unwrap();
    }

    let select = db
        .create_command_for("SELECT * FROM events ORDER BY id", &events[0], None)
        .unwrap();
    let read: Vec<Event> = db.query(&select).unwrap().to_models().unwrap();

    assert_eq!(read, events);
}

fn date_times_are_stored_as_iso_text(test: &mut DbTest) {
    let db = test.setup_db(SCHEMA);
    db.execute(&db.create_command_for(INSERT, &event(1), None).unwrap())
        .unwrap();

    assert_eq!(
        test.raw_value(&db, "SELECT at FROM events"),
        Value::from("2024-03-01T12:30:00Z")
    );
    assert_eq!(
        test.raw_value(&db, "SELECT day FROM events"),
        Value::from("2024-03-01")
    );
    assert_eq!(
        test.raw_value(&db, "SELECT local FROM events"),
        Value::from("2024-03-01T12:30:15.250")
    );
    assert_eq!(
        test.raw_value(&db, "SELECT time FROM events"),
        Value::from("12:30:15.250")
    );
}

fn malformed_date_fails(test: &mut DbTest) {
    let db = test.setup_db(SCHEMA);
    db.execute_batch(
        "INSERT INTO events (id, at, day, local, time) VALUES (1, 'yesterday', '2024-03-01', '2024-03-01T00:00:00', '00:00:00')",
    )
    .unwrap();

    let select = db
        .create_command_for("SELECT * FROM events", &event(1), None)
        .unwrap();
    let err = db.query(&select).unwrap().to_models::<Event>().unwrap_err();

    assert!(err.is_type_conversion());
}

tests!(
    date_times_round_trip,
    date_times_are_stored_as_iso_text,
    malformed_date_fails,
);
