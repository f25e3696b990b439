use crate::fixtures::{TestStore, alice_bob_carol};
use castpath_core::{
    CachedResolver, Error, IdentityResolver, NodeId, NodeKind, PersonId, SqliteStore,
    StoreConfig, WorkId,
};

#[test]
fn test_resolve_person_exact_match() {
    let fixture = alice_bob_carol();
    let store = fixture.store();

    assert_eq!(store.resolve_person("Alice").unwrap(), Some(PersonId(1)));
    assert_eq!(store.resolve_person("Carol").unwrap(), Some(PersonId(3)));
}

#[test]
fn test_resolve_person_case_insensitive() {
    let fixture = alice_bob_carol();
    let store = fixture.store();

    assert_eq!(store.resolve_person("aLiCe").unwrap(), Some(PersonId(1)));
    assert_eq!(store.resolve_person("  BOB  ").unwrap(), Some(PersonId(2)));
}

#[test]
fn test_resolve_person_keeps_stored_whitespace() {
    let fixture = TestStore::new();
    fixture.person(5, "Jean  Reno").person(6, "Ian McKellen");
    let store = fixture.store();

    assert_eq!(store.resolve_person("Jean  Reno").unwrap(), Some(PersonId(5)));
    assert_eq!(store.resolve_person(" jean  reno ").unwrap(), Some(PersonId(5)));
    assert_eq!(store.resolve_person("Ian   McKellen").unwrap(), Some(PersonId(6)));
}

#[test]
fn test_resolve_person_missing_is_absence() {
    let fixture = alice_bob_carol();
    let store = fixture.store();

    assert_eq!(store.resolve_person("Nobody").unwrap(), None);
    assert_eq!(store.resolve_person("").unwrap(), None);
}

#[test]
fn test_resolve_person_not_a_prefix_match() {
    let fixture = alice_bob_carol();
    let store = fixture.store();

    assert_eq!(store.resolve_person("Ali").unwrap(), None);
}

#[test]
fn test_resolve_duplicate_names_picks_lowest_id() {
    let fixture = TestStore::new();
    fixture
        .person(42, "John Smith")
        .person(7, "john smith")
        .person(99, "John Smith");
    let store = fixture.store();

    assert_eq!(store.resolve_person("John Smith").unwrap(), Some(PersonId(7)));
}

#[test]
fn test_reverse_lookups() {
    let fixture = alice_bob_carol();
    let store = fixture.store();

    assert_eq!(store.person_name(PersonId(2)).unwrap(), "Bob");
    assert_eq!(store.work_name(WorkId(10)).unwrap(), "MovieA");
    assert_eq!(store.node_name(NodeId::work(10)).unwrap(), "MovieA");
    assert_eq!(store.node_name(NodeId::person(1)).unwrap(), "Alice");
}

#[test]
fn test_reverse_lookup_missing_is_not_found() {
    let fixture = alice_bob_carol();
    let store = fixture.store();

    let person = store.person_name(PersonId(404));
    assert!(matches!(
        person,
        Err(Error::NotFound {
            kind: NodeKind::Person,
            id: 404
        })
    ));

    // Person 1 exists, but there is no work 1
    let work = store.work_name(WorkId(1));
    assert!(matches!(
        work,
        Err(Error::NotFound {
            kind: NodeKind::Work,
            id: 1
        })
    ));
}

#[test]
fn test_missing_store_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteStore::new(dir.path().join("absent.db"), StoreConfig::default()).unwrap();

    assert!(matches!(
        store.check_available(),
        Err(Error::StoreUnavailable { .. })
    ));
    let error = store.resolve_person("Alice").unwrap_err();
    assert!(error.is_store_failure());
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = StoreConfig::default();
    config.works.name_column = "primaryTitle--".to_string();

    let result = SqliteStore::new("imdb.db", config);
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_cached_resolver_over_store() {
    let fixture = alice_bob_carol();
    let resolver = CachedResolver::new(fixture.store());

    assert_eq!(resolver.node_name(NodeId::person(1)).unwrap(), "Alice");
    assert_eq!(resolver.node_name(NodeId::work(10)).unwrap(), "MovieA");
    assert_eq!(resolver.node_name(NodeId::person(1)).unwrap(), "Alice");
    assert_eq!(resolver.cached_len(), 2);
    assert_eq!(resolver.resolve_person("bob").unwrap(), Some(PersonId(2)));
}
