//! Tests for resolving suppression requests.

use lintmark_common::RuleId;
use lintmark_suppress::{
    SuppressionRequest, SuppressionTarget, TargetFinder, TargetFinderRegistry, builtin_registry,
    resolve_all,
};
use lintmark_syntax::{NodeArena, NodeIndex, SyntaxKind};

fn top_level_function() -> (NodeArena, NodeIndex, NodeIndex) {
    let mut arena = NodeArena::new();
    let file = arena.add_root(SyntaxKind::File, 0, 60);
    let fun = arena.add_child(file, SyntaxKind::FunctionDeclaration, 0, 60);
    let params = arena.add_child(fun, SyntaxKind::ParameterList, 8, 30);
    let param = arena.add_child(params, SyntaxKind::Parameter, 9, 29);
    (arena, fun, param)
}

#[test]
fn test_request_uses_policy_finder() {
    let request = SuppressionRequest::new("standard:function-signature", NodeIndex(0));
    assert_eq!(request.target_finder(builtin_registry()), TargetFinder::FUNCTION);

    let request = SuppressionRequest::new("standard:max-line-length", NodeIndex(0));
    assert_eq!(request.target_finder(builtin_registry()), TargetFinder::Default);
}

#[test]
fn test_request_resolves_to_found_target() {
    let (arena, fun, param) = top_level_function();
    let request = SuppressionRequest::new("standard:parameter-list-wrapping", param);

    let target = request.resolve(&arena, builtin_registry());
    assert_eq!(target, SuppressionTarget::Found(fun));
    assert!(target.is_found());
    assert_eq!(target.node(), Some(fun));
}

#[test]
fn test_request_without_target_reports_not_found() {
    let (arena, _, param) = top_level_function();
    let request = SuppressionRequest::new(RuleId::new("standard:class-signature"), param);

    let target = request.resolve(&arena, builtin_registry());
    assert_eq!(
        target,
        SuppressionTarget::NotFound {
            rule_id: RuleId::new("standard:class-signature"),
            origin: param,
        }
    );
    assert!(!target.is_found());
    assert_eq!(target.node(), None);
}

#[test]
fn test_request_on_foreign_index_is_not_found() {
    let (arena, _, _) = top_level_function();
    for index in [NodeIndex(1000), NodeIndex::NONE] {
        let request = SuppressionRequest::new("standard:no-wildcard-imports", index);
        assert_eq!(request.resolve(&arena, builtin_registry()).node(), None);
    }
}

#[test]
fn test_resolve_all_keeps_request_order() {
    let (arena, fun, param) = top_level_function();
    let requests = vec![
        SuppressionRequest::new("standard:no-wildcard-imports", param),
        SuppressionRequest::new("standard:parameter-list-wrapping", param),
        SuppressionRequest::new("standard:class-signature", param),
    ];

    let targets = resolve_all(&arena, builtin_registry(), &requests);
    assert_eq!(
        targets,
        vec![
            SuppressionTarget::Found(param),
            SuppressionTarget::Found(fun),
            SuppressionTarget::NotFound {
                rule_id: RuleId::new("standard:class-signature"),
                origin: param,
            },
        ]
    );
}

#[test]
fn test_resolve_all_with_custom_registry() {
    let (arena, fun, param) = top_level_function();
    let registry = TargetFinderRegistry::empty()
        .with_entry(RuleId::new("custom:trailing-lambda"), TargetFinder::FUNCTION);
    let requests = [
        SuppressionRequest::new("custom:trailing-lambda", param),
        SuppressionRequest::new("standard:parameter-list-wrapping", param),
    ];

    let nodes: Vec<_> = resolve_all(&arena, &registry, &requests)
        .iter()
        .map(SuppressionTarget::node)
        .collect();
    // The empty registry knows nothing about the standard rule.
    assert_eq!(nodes, vec![Some(fun), Some(param)]);
}
