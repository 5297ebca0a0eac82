//! Read-path behavior of the group adapter.

use quiver_tests::prelude::*;

fn setup() -> (Graph, ArtifactIdGroupAdapter) {
    (Graph::new(), ArtifactIdGroupAdapter::default())
}

#[test]
fn test_fold_is_idempotent() {
    // GIVEN a stored group with a tagged artifact
    let (mut graph, adapter) = setup();
    let artifact = Artifact::new("storage0", "releases", "org/foo/bar-1.0.jar")
        .tagged(ArtifactTag::new("release"));
    let group =
        ArtifactIdGroup::new("storage0", "releases", "org.foo:bar").with_artifact(artifact);
    let root = save_group(&mut graph, &adapter, &group);

    // WHEN it is folded twice with no writes in between
    let first = load_group(&mut graph, &adapter, root, None);
    let second = load_group(&mut graph, &adapter, root, None);

    // THEN the results are structurally identical
    assert_eq!(first, second);
    assert_eq!(first.artifacts().len(), 1);
}

#[test]
fn test_unfiltered_fold_resolves_remotes_to_origin() {
    // GIVEN a group owning origin A and remote B deriving from A
    let (mut graph, adapter) = setup();
    let origin = Artifact::new("storage0", "releases", "org/foo/bar-1.0.jar")
        .tagged(ArtifactTag::new("release"));
    let origin_uuid = origin.uuid().to_string();
    let remote =
        Artifact::new("storage0", "proxy", "org/foo/bar-1.0.jar").derived_from(origin.clone());
    let group = ArtifactIdGroup::new("storage0", "releases", "org.foo:bar")
        .with_artifact(origin)
        .with_artifact(remote);
    let root = save_group(&mut graph, &adapter, &group);

    // WHEN folding without a filter
    let loaded = load_group(&mut graph, &adapter, root, None);

    // THEN the remote folds as its canonical origin and the child set
    // reduces to the origin alone
    assert_eq!(loaded.artifacts().len(), 1);
    assert_eq!(loaded.artifacts()[0].uuid(), origin_uuid);
    assert_eq!(loaded.artifacts()[0].repository_id(), "releases");
}

#[test]
fn test_tag_filtered_fold_skips_inheritance_resolution() {
    // GIVEN origin A tagged "release", untagged remote B deriving from A,
    // and an unrelated untagged artifact C
    let (mut graph, adapter) = setup();
    let origin = Artifact::new("storage0", "releases", "org/foo/bar-1.0.jar")
        .tagged(ArtifactTag::new("release"));
    let origin_uuid = origin.uuid().to_string();
    let remote =
        Artifact::new("storage0", "proxy", "org/foo/bar-1.0.jar").derived_from(origin.clone());
    let plain = Artifact::new("storage0", "releases", "org/foo/bar-2.0.jar");
    let plain_uuid = plain.uuid().to_string();
    let group = ArtifactIdGroup::new("storage0", "releases", "org.foo:bar")
        .with_artifact(origin)
        .with_artifact(remote)
        .with_artifact(plain);
    let root = save_group(&mut graph, &adapter, &group);

    // WHEN folding with the tag filter
    let tag = ArtifactTag::new("release");
    let tagged = load_group(&mut graph, &adapter, root, Some(&tag));

    // THEN only the tagged origin is returned
    assert_eq!(tagged.artifacts().len(), 1);
    assert_eq!(tagged.artifacts()[0].uuid(), origin_uuid);
    assert_eq!(tagged.artifacts()[0].tags().len(), 1);
    assert_eq!(tagged.artifacts()[0].tags()[0].name(), "release");

    // AND the unfiltered view resolves the remote and keeps the plain one
    let all = load_group(&mut graph, &adapter, root, None);
    let mut uuids: Vec<&str> = all.artifacts().iter().map(|a| a.uuid()).collect();
    uuids.sort();
    let mut expected = vec![origin_uuid.as_str(), plain_uuid.as_str()];
    expected.sort();
    assert_eq!(uuids, expected);
}

#[test]
fn test_fold_of_empty_group() {
    let (mut graph, adapter) = setup();
    let group = ArtifactIdGroup::new("storage0", "releases", "org.foo:bar");
    let root = save_group(&mut graph, &adapter, &group);

    let loaded = load_group(&mut graph, &adapter, root, None);
    assert!(loaded.artifacts().is_empty());
    assert_eq!(loaded.vertex_id(), Some(root));
    assert_eq!(loaded.uuid(), group.uuid());
}
