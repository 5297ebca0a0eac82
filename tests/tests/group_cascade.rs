//! Cascade planning over stored aggregates.

use quiver_tests::prelude::*;

fn setup() -> (Graph, ArtifactIdGroupAdapter) {
    (Graph::new(), ArtifactIdGroupAdapter::default())
}

#[test]
fn test_cascade_closes_over_children_and_their_remotes() {
    // GIVEN a group owning origin A and remote B deriving from A
    let (mut graph, adapter) = setup();
    let origin = Artifact::new("storage0", "releases", "org/foo/bar-1.0.jar");
    let origin_uuid = origin.uuid().to_string();
    let remote =
        Artifact::new("storage0", "proxy", "org/foo/bar-1.0.jar").derived_from(origin.clone());
    let remote_uuid = remote.uuid().to_string();
    let group = ArtifactIdGroup::new("storage0", "releases", "org.foo:bar")
        .with_artifact(origin)
        .with_artifact(remote);
    let root = save_group(&mut graph, &adapter, &group);

    // WHEN the deletion set is computed
    let set = cascade_set(&mut graph, &adapter, root);

    // THEN it holds the group, A, and B — nothing else
    let mut expected = vec![
        root,
        graph.find_by_uuid(&origin_uuid).unwrap(),
        graph.find_by_uuid(&remote_uuid).unwrap(),
    ];
    expected.sort();
    assert_eq!(set, expected);
}

#[test]
fn test_cascade_is_monotonic_and_idempotent() {
    let (mut graph, adapter) = setup();
    let origin = Artifact::new("storage0", "releases", "org/foo/bar-1.0.jar");
    let remote =
        Artifact::new("storage0", "proxy", "org/foo/bar-1.0.jar").derived_from(origin.clone());
    let group = ArtifactIdGroup::new("storage0", "releases", "org.foo:bar")
        .with_artifact(origin)
        .with_artifact(remote);
    let root = save_group(&mut graph, &adapter, &group);

    // running the plan twice on unchanged state yields the identical set
    let first = cascade_set(&mut graph, &adapter, root);
    let second = cascade_set(&mut graph, &adapter, root);
    assert_eq!(first, second);
}

#[test]
fn test_cascade_spares_shared_tags() {
    let (mut graph, adapter) = setup();
    let group = ArtifactIdGroup::new("storage0", "releases", "org.foo:bar").with_artifact(
        Artifact::new("storage0", "releases", "org/foo/bar-1.0.jar")
            .tagged(ArtifactTag::new("release")),
    );
    let root = save_group(&mut graph, &adapter, &group);

    let set = cascade_set(&mut graph, &adapter, root);
    let tag_vertex = graph.find_by_uuid("release").unwrap();
    assert!(!set.contains(&tag_vertex));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_cascade_never_sweeps_a_referenced_foreign_origin() {
    // GIVEN origin A owned by a hosted-repository group, and a proxy
    // group owning only the remote B that derives from A
    let (mut graph, adapter) = setup();
    let origin = Artifact::new("storage0", "releases", "org/foo/bar-1.0.jar");
    let origin_uuid = origin.uuid().to_string();
    let hosted = ArtifactIdGroup::new("storage0", "releases", "org.foo:bar")
        .with_artifact(origin.clone());
    let hosted_root = save_group(&mut graph, &adapter, &hosted);

    let remote =
        Artifact::new("storage0", "proxy", "org/foo/bar-1.0.jar").derived_from(origin);
    let remote_uuid = remote.uuid().to_string();
    let proxy =
        ArtifactIdGroup::new("storage0", "proxy", "org.foo:bar").with_artifact(remote);
    let proxy_root = save_group(&mut graph, &adapter, &proxy);

    // WHEN the proxy group's deletion set is computed
    let set = cascade_set(&mut graph, &adapter, proxy_root);

    // THEN it sweeps the proxy group and its remote, but the origin it
    // merely references survives
    let origin_vertex = graph.find_by_uuid(&origin_uuid).unwrap();
    let remote_vertex = graph.find_by_uuid(&remote_uuid).unwrap();
    assert!(set.contains(&proxy_root));
    assert!(set.contains(&remote_vertex));
    assert!(!set.contains(&origin_vertex));
    assert!(!set.contains(&hosted_root));

    // AND deleting the hosted group sweeps the origin together with the
    // remote fronting it, which would otherwise dangle
    let hosted_set = cascade_set(&mut graph, &adapter, hosted_root);
    assert!(hosted_set.contains(&hosted_root));
    assert!(hosted_set.contains(&origin_vertex));
    assert!(hosted_set.contains(&remote_vertex));
    assert!(!hosted_set.contains(&proxy_root));
}
