//! Architecture contract tests.

mod support;

use support::architecture::{
    find_lines_containing, find_lines_containing_outside, find_non_export_lines_in_mod_files,
};

#[test]
fn domain_has_no_framework_or_outer_layer_imports() {
    let hits = find_lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "crate::port",
            "tokio::",
            "reqwest::",
            "axum::",
        ],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn ports_depend_only_on_domain() {
    let hits = find_lines_containing(
        "src/port",
        &[
            "use crate::adapter",
            "use crate::infrastructure",
            "use crate::application",
            "reqwest::",
            "axum::",
        ],
    );

    assert!(hits.is_empty(), "found outer-layer imports in ports: {hits:#?}");
}

#[test]
fn application_has_no_transport_or_infrastructure_imports() {
    let hits = find_lines_containing(
        "src/application",
        &["crate::infrastructure", "reqwest::", "axum::", "tower_http::"],
    );

    assert!(
        hits.is_empty(),
        "found transport or infrastructure imports in application layer: {hits:#?}"
    );
}

#[test]
fn application_layer_has_no_direct_adapter_imports() {
    let hits = find_lines_containing("src/application", &["crate::adapter::"]);
    assert!(
        hits.is_empty(),
        "application layer should not import adapters directly: {hits:#?}"
    );
}

#[test]
fn testkit_fakes_stand_alone_from_adapters() {
    let hits = find_lines_containing(
        "src/testkit",
        &["crate::adapter::", "crate::infrastructure::"],
    );
    assert!(
        hits.is_empty(),
        "testkit fakes should implement ports without real adapters: {hits:#?}"
    );
}

#[test]
fn outbound_adapters_are_constructed_only_at_the_edges() {
    let hits = find_lines_containing_outside(
        "src",
        &["crate::adapter::outbound"],
        &[
            "src/adapter/outbound/",
            "src/infrastructure/factory/",
            "src/adapter/inbound/cli/check.rs",
            "src/adapter/inbound/cli/keygen.rs",
        ],
    );
    assert!(
        hits.is_empty(),
        "outbound adapters should only be built by factories or CLI tooling: {hits:#?}"
    );
}

#[test]
fn mod_rs_is_export_only() {
    let violations = find_non_export_lines_in_mod_files("src");
    assert!(
        violations.is_empty(),
        "found non-export content in mod.rs files: {violations:#?}"
    );
}
