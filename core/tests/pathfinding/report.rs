use crate::fixtures::{alice_bob_carol, small_cast};
use castpath_core::{
    CachedResolver, Error, Graph, IdentityResolver, NodeId, NodeKind, name_nodes, render_path,
    shortest_path,
};
use rustc_hash::FxHashMap;

#[test]
fn test_render_alice_to_bob() {
    let fixture = alice_bob_carol();
    let store = fixture.store();
    let graph = Graph::build(&store).unwrap();

    let alice = store.resolve_person("Alice").unwrap().unwrap();
    let bob = store.resolve_person("Bob").unwrap().unwrap();

    let found = shortest_path(&graph, alice.into(), bob.into()).unwrap();
    assert_eq!(found.distance, 2);

    let names = render_path(&found.predecessors, alice.into(), bob.into(), &store).unwrap();
    assert_eq!(names, vec!["Alice", "MovieA", "Bob"]);
}

#[test]
fn test_render_self_path() {
    let fixture = alice_bob_carol();
    let store = fixture.store();

    let names = render_path(&FxHashMap::default(), NodeId::person(1), NodeId::person(1), &store).unwrap();
    assert_eq!(names, vec!["Alice"]);
}

#[test]
fn test_render_through_cache() {
    let fixture = small_cast();
    let resolver = CachedResolver::new(fixture.store());
    let graph = Graph::build(resolver.inner()).unwrap();

    let found = shortest_path(&graph, NodeId::person(1), NodeId::person(5)).unwrap();
    let names = render_path(&found.predecessors, NodeId::person(1), NodeId::person(5), &resolver).unwrap();

    assert_eq!(names.len() as u64, found.distance + 1);
    assert_eq!(names.first().map(String::as_str), Some("Alice"));
    assert_eq!(names.last().map(String::as_str), Some("Erin"));
}

#[test]
fn test_render_wrong_source_is_corrupt() {
    let fixture = alice_bob_carol();
    let store = fixture.store();
    let graph = Graph::build(&store).unwrap();

    let found = shortest_path(&graph, NodeId::person(1), NodeId::person(2)).unwrap();
    // The walk ends at Alice, not at Carol
    let result = render_path(&found.predecessors, NodeId::person(3), NodeId::person(2), &store);
    assert!(matches!(result, Err(Error::CorruptState(_))));
}

#[test]
fn test_name_nodes_unknown_id_is_not_found() {
    let fixture = alice_bob_carol();
    let store = fixture.store();

    let result = name_nodes(&[NodeId::person(1), NodeId::work(77)], &store);
    assert!(matches!(
        result,
        Err(Error::NotFound {
            kind: NodeKind::Work,
            id: 77
        })
    ));
}
