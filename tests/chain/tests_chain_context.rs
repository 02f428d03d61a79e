//! Chain Tests - Builder Context
//!
//! The in-block flag marks only the call a block attaches to, and no state
//! carries over between invocations or threads.

use gemchain::{BuilderContext, Chain, Link, LiteralType, build_chain, build_chain_with, parse};
use rayon::prelude::*;

use crate::helpers::chain_helpers::*;
use crate::helpers::source_fixtures::{CHAIN_CORPUS, DO_BLOCK_WITH_COMMAND_ARGS};

#[test]
fn test_arguments_do_not_inherit_block_flag() {
    assert_eq!(
        links_of("a.b(c) { }"),
        vec![
            call("a"),
            Link::call("b", vec![chain(vec![call("c")])], true),
        ]
    );
}

#[test]
fn test_receiver_does_not_inherit_block_flag() {
    assert_eq!(
        links_of("foo.bar(baz.qux) { |y| y }"),
        vec![
            call("foo"),
            Link::call("bar", vec![chain(vec![call("baz"), call("qux")])], true),
        ]
    );
}

#[test]
fn test_do_block_binds_to_outer_call() {
    assert_eq!(
        links_of(DO_BLOCK_WITH_COMMAND_ARGS),
        vec![
            call("items"),
            Link::call("each_slice", vec![literal(LiteralType::Integer)], true),
        ]
    );
}

#[test]
fn test_initial_in_block_flag() {
    let root = parse("a.b").unwrap();
    let context = BuilderContext::new().with_in_block(true);
    assert!(context.in_block());
    assert_eq!(
        build_chain_with(&root, &context).into_links(),
        vec![call("a"), block_call("b")]
    );
}

#[test]
fn test_flag_does_not_leak_between_invocations() {
    let root = parse("a.b").unwrap();
    let _ = build_chain_with(&root, &BuilderContext::new().with_in_block(true));
    assert_eq!(build_chain(&root).into_links(), vec![call("a"), call("b")]);
}

#[test]
fn test_sibling_operands_are_isolated() {
    assert_eq!(
        links_of("a.b { } || c"),
        vec![Link::Or {
            left: chain(vec![call("a"), block_call("b")]),
            right: chain(vec![call("c")]),
        }]
    );
}

#[test]
fn test_filename_is_provenance_only() {
    let root = parse("x || y").unwrap();
    let context = BuilderContext::new().with_filename("app/models/user.rb");
    let tagged = build_chain_with(&root, &context);
    let plain = build_chain(&root);

    assert_eq!(tagged, plain);
    assert_eq!(tagged.filename(), Some("app/models/user.rb"));
    assert_eq!(plain.filename(), None);
    match tagged.first() {
        Link::Or { left, .. } => assert_eq!(left.filename(), Some("app/models/user.rb")),
        other => panic!("expected Or, got {other:?}"),
    }
}

#[test]
fn test_chain_keeps_originating_node() {
    let root = parse("a.b").unwrap();
    let chain = build_chain(&root);
    assert_eq!(chain.node(), Some(&root));
}

#[test]
fn test_super_head_keeps_arguments_reachable() {
    let chain = gemchain::chain_from_source("super(1, 2)").unwrap();
    match chain.first() {
        Link::Head { word, origin } => {
            assert_eq!(word.as_str(), "super");
            let node = origin.node.as_ref().unwrap();
            assert_eq!(node.to_string(), "(SUPER (LIST (INTEGER \"1\") (INTEGER \"2\") nil))");
        }
        other => panic!("expected Head, got {other:?}"),
    }
}

#[test]
fn test_deterministic_across_threads() {
    let sequential: Vec<Chain> = CHAIN_CORPUS
        .iter()
        .map(|s| gemchain::chain_from_source(s).unwrap())
        .collect();
    let parallel: Vec<Chain> = CHAIN_CORPUS
        .par_iter()
        .map(|s| gemchain::chain_from_source(s).unwrap())
        .collect();
    assert_eq!(sequential, parallel);

    // Many concurrent builds over one shared tree
    let root = parse("[1, 2].map { |x| x.to_s }.first").unwrap();
    let expected = build_chain(&root);
    (0..64).into_par_iter().for_each(|i| {
        let context = BuilderContext::new().with_in_block(i % 2 == 0);
        let _ = build_chain_with(&root, &context);
        assert_eq!(build_chain(&root), expected);
    });
}
