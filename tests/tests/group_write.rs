//! Write-path behavior of the group adapter.

use quiver_tests::prelude::*;

fn setup() -> (Graph, ArtifactIdGroupAdapter) {
    (Graph::new(), ArtifactIdGroupAdapter::default())
}

#[test]
fn test_exactly_one_vertex_per_transient_child() {
    // GIVEN a stored group with one artifact
    let (mut graph, adapter) = setup();
    let group = ArtifactIdGroup::new("storage0", "releases", "org.foo:bar")
        .with_artifact(Artifact::new("storage0", "releases", "org/foo/bar-1.0.jar"));
    let root = save_group(&mut graph, &adapter, &group);
    assert_eq!(graph.vertex_count(), 2);

    // WHEN the loaded (fully persisted) aggregate gains one new child
    let mut loaded = load_group(&mut graph, &adapter, root, None);
    loaded.add_artifact(Artifact::new("storage0", "releases", "org/foo/bar-2.0.jar"));
    save_group(&mut graph, &adapter, &loaded);

    // THEN exactly one vertex was created and the persisted child was
    // neither re-created nor re-wired
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(
        graph
            .edges_from(root, Some(schema::edges::GROUP_HAS_ARTIFACTS))
            .count(),
        2
    );
}

#[test]
fn test_re_executing_an_unfold_creates_nothing_new() {
    let (mut graph, adapter) = setup();
    let group = ArtifactIdGroup::new("storage0", "releases", "org.foo:bar")
        .with_artifact(Artifact::new("storage0", "releases", "org/foo/bar-1.0.jar"));

    // the entity stays transient between the two calls; the upserts
    // locate by uuid the second time around
    save_group(&mut graph, &adapter, &group);
    let vertices = graph.vertex_count();
    let edges = graph.edge_count();
    let root = save_group(&mut graph, &adapter, &group);

    assert_eq!(graph.vertex_count(), vertices);
    assert_eq!(graph.edge_count(), edges);
    assert_eq!(
        graph
            .edges_from(root, Some(schema::edges::GROUP_HAS_ARTIFACTS))
            .count(),
        1
    );
}

#[test]
fn test_persisted_natural_key_is_never_rewritten() {
    // GIVEN a stored group
    let (mut graph, adapter) = setup();
    let group = ArtifactIdGroup::new("storage0", "releases", "org.foo:bar");
    let root = save_group(&mut graph, &adapter, &group);

    // WHEN an entity carrying the same identity but a different natural
    // key is unfolded
    let tampered = ArtifactIdGroup::restored(
        root,
        group.uuid(),
        "other-storage",
        "other-repo",
        "org.other:name",
    );
    save_group(&mut graph, &adapter, &tampered);

    // THEN the stored key is untouched
    let loaded = load_group(&mut graph, &adapter, root, None);
    assert_eq!(loaded.storage_id(), "storage0");
    assert_eq!(loaded.repository_id(), "releases");
    assert_eq!(loaded.name(), "org.foo:bar");
}

#[test]
fn test_remote_child_wires_inherits_edge_to_origin() {
    // GIVEN a group whose child derives from an origin artifact
    let (mut graph, adapter) = setup();
    let origin = Artifact::new("storage0", "releases", "org/foo/bar-1.0.jar");
    let origin_uuid = origin.uuid().to_string();
    let remote =
        Artifact::new("storage0", "proxy", "org/foo/bar-1.0.jar").derived_from(origin);
    let remote_uuid = remote.uuid().to_string();
    let group =
        ArtifactIdGroup::new("storage0", "proxy", "org.foo:bar").with_artifact(remote);

    // WHEN saved
    let root = save_group(&mut graph, &adapter, &group);

    // THEN the ownership edge lands on the remote itself and the remote
    // carries the inherits edge to the (also created) origin
    let remote_vertex = graph.find_by_uuid(&remote_uuid).unwrap();
    let origin_vertex = graph.find_by_uuid(&origin_uuid).unwrap();
    assert!(graph.has_edge(schema::edges::GROUP_HAS_ARTIFACTS, root, remote_vertex));
    assert!(!graph.has_edge(schema::edges::GROUP_HAS_ARTIFACTS, root, origin_vertex));
    assert!(graph.has_edge(
        schema::edges::ARTIFACT_INHERITS_ORIGIN,
        remote_vertex,
        origin_vertex
    ));
}

#[test]
fn test_tags_are_shared_not_duplicated() {
    // GIVEN two artifacts carrying the same tag
    let (mut graph, adapter) = setup();
    let group = ArtifactIdGroup::new("storage0", "releases", "org.foo:bar")
        .with_artifact(
            Artifact::new("storage0", "releases", "org/foo/bar-1.0.jar")
                .tagged(ArtifactTag::new("release")),
        )
        .with_artifact(
            Artifact::new("storage0", "releases", "org/foo/bar-2.0.jar")
                .tagged(ArtifactTag::new("release")),
        );

    // WHEN saved
    save_group(&mut graph, &adapter, &group);

    // THEN one tag vertex serves both artifacts
    assert_eq!(
        graph
            .vertices_with_label(schema::vertices::ARTIFACT_TAG)
            .count(),
        1
    );
    let tag_vertex = graph.find_by_uuid("release").unwrap();
    assert_eq!(
        graph
            .edges_to(tag_vertex, Some(schema::edges::ARTIFACT_HAS_TAG))
            .count(),
        2
    );
}
