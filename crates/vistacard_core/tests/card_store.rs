use vistacard_core::db::open_db_in_memory;
use vistacard_core::{
    storage_key, CardField, CardRecord, CardStore, KeyValueStore, MemoryKeyValueStore,
    SqliteKeyValueStore, StorageError,
};

fn populated_record(identifier: &str) -> CardRecord {
    let mut record = CardRecord::with_identifier(identifier);
    record.update(CardField::FullName, "Ada Lovelace");
    record.update(CardField::Title, "Analyst");
    record.update(CardField::Bio, "First programmer.");
    record.update(CardField::Email, "ada@example.com");
    record.update(CardField::Phone, "+1 (555) 000-1111");
    record.update(CardField::Location, "London");
    record.update(CardField::LocationUrl, "https://maps.example/london");
    record.update(CardField::Linkedin, "https://linkedin.example/ada");
    record.update(CardField::Youtube, "https://youtube.example/@ada");
    record
}

#[test]
fn save_then_load_returns_equal_record() {
    let store = CardStore::new(MemoryKeyValueStore::new());
    let record = populated_record("abc123");

    store.save(&record).unwrap();
    let loaded = store.load("abc123").unwrap().unwrap();

    assert_eq!(loaded, record);
}

#[test]
fn serialized_form_round_trips_field_for_field() {
    let record = populated_record("abc123");
    let serialized = serde_json::to_string(&record).unwrap();
    let deserialized: CardRecord = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, record);

    let empty = CardRecord::with_identifier("zz999999");
    let serialized = serde_json::to_string(&empty).unwrap();
    let deserialized: CardRecord = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, empty);
}

#[test]
fn serialized_form_uses_historical_json_keys() {
    let record = populated_record("abc123");
    let serialized = serde_json::to_string(&record).unwrap();
    assert!(serialized.contains("\"cardId\":\"abc123\""));
    assert!(serialized.contains("\"fullName\":\"Ada Lovelace\""));
    assert!(serialized.contains("\"locationUrl\""));
}

#[test]
fn load_of_never_saved_identifier_is_not_found() {
    let store = CardStore::new(MemoryKeyValueStore::new());
    assert_eq!(store.load("never123").unwrap(), None);
}

#[test]
fn corrupt_stored_value_loads_as_not_found() {
    let storage = MemoryKeyValueStore::new();
    storage.set(&storage_key("abc123"), "not json at all").unwrap();
    storage
        .set(&storage_key("def456"), "{\"unexpected\":true}")
        .unwrap();

    let store = CardStore::new(storage);
    assert_eq!(store.load("abc123").unwrap(), None);
    assert_eq!(store.load("def456").unwrap(), None);
}

#[test]
fn second_save_overwrites_first() {
    let store = CardStore::new(MemoryKeyValueStore::new());

    let mut record = populated_record("abc123");
    store.save(&record).unwrap();

    record.update(CardField::Title, "Chief Analyst");
    store.save(&record).unwrap();

    let loaded = store.load("abc123").unwrap().unwrap();
    assert_eq!(loaded.title, "Chief Analyst");
}

#[test]
fn saved_card_is_not_visible_under_other_identifiers() {
    let store = CardStore::new(MemoryKeyValueStore::new());
    store.save(&populated_record("abc123")).unwrap();

    assert_eq!(store.load("abc124").unwrap(), None);
    assert_eq!(store.load("bc123").unwrap(), None);
    assert_eq!(store.load("").unwrap(), None);
}

#[test]
fn save_propagates_storage_failure() {
    let storage = MemoryKeyValueStore::new();
    storage.poison("over quota");

    let store = CardStore::new(storage);
    let err = store.save(&populated_record("abc123")).unwrap_err();
    assert!(matches!(err, StorageError::Unavailable(_)));
}

#[test]
fn sqlite_backend_round_trips_and_overwrites() {
    let conn = open_db_in_memory().unwrap();
    let store = CardStore::new(SqliteKeyValueStore::new(&conn));

    let mut record = populated_record("abc123");
    store.save(&record).unwrap();
    assert_eq!(store.load("abc123").unwrap().unwrap(), record);

    record.update(CardField::Email, "ada@new.example");
    store.save(&record).unwrap();
    assert_eq!(
        store.load("abc123").unwrap().unwrap().email,
        "ada@new.example"
    );

    assert_eq!(store.load("other999").unwrap(), None);
}

#[test]
fn sqlite_backend_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vistacard.db");

    let record = populated_record("abc123");
    {
        let conn = vistacard_core::db::open_db(&path).unwrap();
        let store = CardStore::new(SqliteKeyValueStore::new(&conn));
        store.save(&record).unwrap();
    }

    let conn = vistacard_core::db::open_db(&path).unwrap();
    let store = CardStore::new(SqliteKeyValueStore::new(&conn));
    assert_eq!(store.load("abc123").unwrap().unwrap(), record);
}
