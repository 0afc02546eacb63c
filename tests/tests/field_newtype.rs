use pretty_assertions::assert_eq;
use rowmap::{
    stmt::{Type, Value},
    ConnectionExt, Field, Model, RowSourceExt,
};
use tests::{tests, DbTest};

/// Stored as text, validated on load.
#[derive(Debug, Default, Clone, PartialEq)]
struct Email(String);

impl Field for Email {
    fn ty() -> Option<Type> {
        Some(Type::String)
    }

    fn load(value: Value) -> rowmap::Result<Self> {
        let email = String::load(value)?;

        if !email.contains('@') {
            return Err(anyhow::anyhow!("{email:?} is not an email address").into());
        }

        Ok(Email(email))
    }

    fn store(&self) -> Value {
        Value::from(&self.0)
    }
}

#[derive(Debug, Default, PartialEq, Model)]
struct Contact {
    id: i64,
    email: Email,
    backup: Option<Email>,
}

const SCHEMA: &str = "CREATE TABLE contacts (id INTEGER PRIMARY KEY, email TEXT NOT NULL, backup TEXT);";
const INSERT: &str = "INSERT INTO contacts (id, email, backup) VALUES (@id, @email, @backup)";

fn custom_field_round_trips(test: &mut DbTest) {
    let db = test.setup_db(SCHEMA);
    let contact = Contact {
        id: 1,
        email: Email("ada@example.com".to_string()),
        backup: Some(Email("ada@backup.example".to_string())),
    };

    db.execute(&db.create_command_for(INSERT, &contact, None).unwrap())
        .unwrap();

    let select = db
        .create_command_for("SELECT * FROM contacts", &contact, None)
        .unwrap();
    let read: Vec<Contact> = db.query(&select).unwrap().to_models().unwrap();

    assert_eq!(read, [contact]);
}

fn custom_field_validation_error(test: &mut DbTest) {
    let db = test.setup_db(SCHEMA);
    db.execute_batch("INSERT INTO contacts (id, email) VALUES (1, 'not-an-email')")
        .unwrap();

    let select = db
        .create_command_for("SELECT * FROM contacts", &Contact::default(), None)
        .unwrap();
    let err = db
        .query(&select)
        .unwrap()
        .to_models::<Contact>()
        .unwrap_err();

    assert_eq!(err.to_string(), "\"not-an-email\" is not an email address");
    assert!(std::error::Error::source(&err).is_some());
}

tests!(custom_field_round_trips, custom_field_validation_error,);
