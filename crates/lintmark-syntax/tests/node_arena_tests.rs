//! Tests for arena construction and parent traversal.

use lintmark_syntax::{NodeArena, NodeIndex, NodeView, SyntaxKind};

/// `file → class → fun → parameter-list → parameter`
fn class_with_method() -> (NodeArena, [NodeIndex; 5]) {
    let mut arena = NodeArena::new();
    let file = arena.add_root(SyntaxKind::File, 0, 100);
    let class = arena.add_child(file, SyntaxKind::ClassDeclaration, 0, 90);
    let fun = arena.add_child(class, SyntaxKind::FunctionDeclaration, 10, 80);
    let params = arena.add_child(fun, SyntaxKind::ParameterList, 20, 40);
    let param = arena.add_child(params, SyntaxKind::Parameter, 21, 30);
    (arena, [file, class, fun, params, param])
}

#[test]
fn test_node_index_sentinel() {
    let index = NodeIndex(0);
    assert!(index.is_some());
    assert!(!index.is_none());
    assert_eq!(index.into_option(), Some(index));

    let none = NodeIndex::NONE;
    assert!(none.is_none());
    assert!(!none.is_some());
    assert_eq!(none.into_option(), None);
}

#[test]
fn test_parent_links() {
    let (arena, [file, class, fun, params, param]) = class_with_method();

    assert_eq!(arena.len(), 5);
    assert_eq!(arena.root(), file);
    assert!(arena.parent(file).is_none());
    assert_eq!(arena.parent(class), file);
    assert_eq!(arena.parent(fun), class);
    assert_eq!(arena.parent(params), fun);
    assert_eq!(arena.parent(param), params);
    assert_eq!(arena.children(fun), &[params]);
    assert!(arena.children(param).is_empty());
}

#[test]
fn test_ancestors_are_nearest_first_and_exclude_self() {
    let (arena, [file, class, fun, params, param]) = class_with_method();

    let chain: Vec<_> = arena.ancestors(param).collect();
    assert_eq!(chain, vec![params, fun, class, file]);
    assert_eq!(arena.ancestors(file).count(), 0);
    assert_eq!(arena.depth(param), 4);
    assert_eq!(arena.depth(file), 0);
}

#[test]
fn test_find_parent_skips_self() {
    let (arena, [_, class, fun, _, param]) = class_with_method();

    let is_fun = |kind: SyntaxKind| kind == SyntaxKind::FunctionDeclaration;
    assert_eq!(arena.find_parent(param, is_fun), Some(fun));
    // `fun` itself does not count; there is no function above it.
    assert_eq!(arena.find_parent(fun, is_fun), None);
    assert_eq!(
        arena.find_parent(fun, |kind| kind == SyntaxKind::ClassDeclaration),
        Some(class)
    );
}

#[test]
fn test_find_ancestor_or_self_checks_self_first() {
    let (arena, [file, _, fun, _, param]) = class_with_method();

    let is_fun = |kind: SyntaxKind| kind == SyntaxKind::FunctionDeclaration;
    assert_eq!(arena.find_ancestor_or_self(fun, is_fun), Some(fun));
    assert_eq!(arena.find_ancestor_or_self(param, is_fun), Some(fun));
    assert_eq!(arena.find_ancestor_or_self(file, is_fun), None);
    assert_eq!(arena.find_ancestor_or_self(NodeIndex::NONE, is_fun), None);
}

#[test]
fn test_find_parent_returns_nearest_match() {
    let mut arena = NodeArena::new();
    let file = arena.add_root(SyntaxKind::File, 0, 50);
    let outer = arena.add_child_spanning(file, SyntaxKind::FunctionDeclaration);
    let body = arena.add_child_spanning(outer, SyntaxKind::Block);
    let inner = arena.add_child_spanning(body, SyntaxKind::FunctionDeclaration);
    let ident = arena.add_child_spanning(inner, SyntaxKind::Identifier);

    assert_eq!(
        arena.find_parent(ident, |kind| kind == SyntaxKind::FunctionDeclaration),
        Some(inner)
    );
    assert_eq!(
        arena.find_parent(inner, |kind| kind == SyntaxKind::FunctionDeclaration),
        Some(outer)
    );
}

#[test]
fn test_add_child_clamps_range_into_parent() {
    let mut arena = NodeArena::new();
    let file = arena.add_root(SyntaxKind::File, 10, 20);
    let child = arena.add_child(file, SyntaxKind::Comment, 5, 40);

    let node = arena.get(child).unwrap();
    assert_eq!((node.pos, node.end), (10, 20));
}

#[test]
fn test_add_child_under_missing_parent_adds_nothing() {
    let mut arena = NodeArena::new();
    let orphan = arena.add_child(NodeIndex(7), SyntaxKind::Identifier, 0, 1);
    assert!(orphan.is_none());
    assert!(arena.is_empty());

    let orphan = arena.add_child(NodeIndex::NONE, SyntaxKind::Identifier, 0, 1);
    assert!(orphan.is_none());
    assert!(arena.root().is_none());
}

#[test]
fn test_unknown_indices_are_safe() {
    let (arena, _) = class_with_method();
    let missing = NodeIndex(99);

    assert!(arena.get(missing).is_none());
    assert!(arena.kind(missing).is_none());
    assert!(arena.parent(missing).is_none());
    assert!(arena.children(missing).is_empty());
    assert_eq!(arena.ancestors(missing).count(), 0);
    assert!(NodeView::new(&arena, missing).is_none());
    assert!(NodeView::new(&arena, NodeIndex::NONE).is_none());
}

#[test]
fn test_iter_visits_parents_before_children() {
    let (arena, _) = class_with_method();
    for index in arena.iter() {
        let parent = arena.parent(index);
        assert!(parent.is_none() || parent < index);
    }
    assert_eq!(arena.iter().count(), arena.len());
}

#[test]
fn test_node_view_navigation() {
    let (arena, [file, class, fun, params, param]) = class_with_method();
    let view = NodeView::new(&arena, param).unwrap();

    assert_eq!(view.kind(), SyntaxKind::Parameter);
    assert_eq!(view.index(), param);
    assert_eq!((view.pos(), view.end()), (21, 30));
    assert!(!view.is_root());
    assert_eq!(view.parent().map(|p| p.index()), Some(params));

    let chain: Vec<_> = view.ancestors().map(|v| v.index()).collect();
    assert_eq!(chain, vec![params, fun, class, file]);

    let class_view = view
        .find_parent(|kind| kind == SyntaxKind::ClassDeclaration)
        .unwrap();
    assert_eq!(class_view.index(), class);
    assert_eq!(
        class_view.children().map(|v| v.index()).collect::<Vec<_>>(),
        vec![fun]
    );

    let root = NodeView::new(&arena, file).unwrap();
    assert!(root.is_root());
    assert!(root.parent().is_none());
}

#[test]
fn test_node_view_equality_is_by_arena_and_index() {
    let (arena, [_, _, fun, _, _]) = class_with_method();
    let (other_arena, _) = class_with_method();

    let a = NodeView::new(&arena, fun).unwrap();
    let b = NodeView::new(&arena, fun).unwrap();
    let c = NodeView::new(&other_arena, fun).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_clear_empties_arena() {
    let (mut arena, _) = class_with_method();
    arena.clear();
    assert!(arena.is_empty());
    assert!(arena.root().is_none());
}

#[test]
fn test_node_index_from_usize_stops_below_sentinel() {
    assert_eq!(NodeIndex::from_usize(0), Some(NodeIndex(0)));
    assert_eq!(
        NodeIndex::from_usize(u32::MAX as usize - 1),
        Some(NodeIndex(u32::MAX - 1))
    );
    assert_eq!(NodeIndex::from_usize(u32::MAX as usize), None);
    assert_eq!(NodeIndex::from_usize(u32::MAX as usize + 1), None);
}

#[test]
fn test_node_view_find_ancestor_or_self() {
    let (arena, [file, class, fun, _, param]) = class_with_method();
    let is_class = |kind: SyntaxKind| kind == SyntaxKind::ClassDeclaration;

    let from_param = NodeView::new(&arena, param).unwrap();
    assert_eq!(
        from_param.find_ancestor_or_self(is_class).map(|v| v.index()),
        Some(class)
    );
    let from_class = NodeView::new(&arena, class).unwrap();
    assert_eq!(from_class.find_ancestor_or_self(is_class), Some(from_class));
    let from_fun = NodeView::new(&arena, fun).unwrap();
    assert!(
        from_fun
            .find_ancestor_or_self(|kind| kind == SyntaxKind::File)
            .is_some_and(|v| v.index() == file)
    );
}
