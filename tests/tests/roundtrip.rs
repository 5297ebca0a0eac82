//! Save-then-load round trips.

use quiver_tests::prelude::*;

#[test]
fn test_roundtrip_preserves_identity_and_children() {
    // GIVEN a transient aggregate with transient children
    let mut graph = Graph::new();
    let adapter = ArtifactIdGroupAdapter::default();
    let one = Artifact::new("storage0", "releases", "org/foo/bar-1.0.jar")
        .tagged(ArtifactTag::new("release"));
    let two = Artifact::new("storage0", "releases", "org/foo/bar-2.0.jar");
    let group = ArtifactIdGroup::new("storage0", "releases", "org.foo:bar")
        .with_artifact(one.clone())
        .with_artifact(two.clone());

    // WHEN saved and folded back
    let root = save_group(&mut graph, &adapter, &group);
    let loaded = load_group(&mut graph, &adapter, root, None);

    // THEN identity, natural key and the child set survive, modulo the
    // internal identifiers assigned by storage
    assert_eq!(loaded.uuid(), group.uuid());
    assert_eq!(loaded.storage_id(), "storage0");
    assert_eq!(loaded.repository_id(), "releases");
    assert_eq!(loaded.name(), "org.foo:bar");
    assert_eq!(loaded.vertex_id(), Some(root));

    let mut loaded_uuids: Vec<&str> = loaded.artifacts().iter().map(|a| a.uuid()).collect();
    loaded_uuids.sort();
    let mut expected = vec![one.uuid(), two.uuid()];
    expected.sort();
    assert_eq!(loaded_uuids, expected);

    for artifact in loaded.artifacts() {
        assert!(artifact.is_persisted());
    }
    let tagged = loaded
        .artifacts()
        .iter()
        .find(|a| a.uuid() == one.uuid())
        .unwrap();
    assert_eq!(tagged.path(), "org/foo/bar-1.0.jar");
    assert_eq!(tagged.tags().len(), 1);
    assert_eq!(tagged.tags()[0].name(), "release");
}

#[test]
fn test_roundtrip_with_mixed_transient_and_persisted_children() {
    // first round persists one child
    let mut graph = Graph::new();
    let adapter = ArtifactIdGroupAdapter::default();
    let group = ArtifactIdGroup::new("storage0", "releases", "org.foo:bar")
        .with_artifact(Artifact::new("storage0", "releases", "org/foo/bar-1.0.jar"));
    let root = save_group(&mut graph, &adapter, &group);

    // second round mixes the persisted child with a fresh one
    let mut reloaded = load_group(&mut graph, &adapter, root, None);
    let fresh = Artifact::new("storage0", "releases", "org/foo/bar-2.0.jar");
    let fresh_uuid = fresh.uuid().to_string();
    reloaded.add_artifact(fresh);
    save_group(&mut graph, &adapter, &reloaded);

    let final_state = load_group(&mut graph, &adapter, root, None);
    assert_eq!(final_state.artifacts().len(), 2);
    assert!(final_state
        .artifacts()
        .iter()
        .any(|a| a.uuid() == fresh_uuid));
    assert_eq!(final_state.uuid(), group.uuid());
}
