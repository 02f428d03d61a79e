//! Chain Tests - Node Classification
//!
//! One case per recognized node shape, checked end to end from source text.

use gemchain::{Link, LiteralType};
use rstest::rstest;

use crate::helpers::chain_helpers::*;

// ============================================================================
// Calls
// ============================================================================

#[rstest]
#[case("a.b.c", vec![call("a"), call("b"), call("c")])]
#[case(
    "a.b(1,2)",
    vec![
        call("a"),
        call_with("b", vec![literal(LiteralType::Integer), literal(LiteralType::Integer)]),
    ]
)]
#[case("a&.b", vec![call("a"), call("b")])]
#[case("a + 1", vec![call("a"), call_with("+", vec![literal(LiteralType::Integer)])])]
#[case("a[0]", vec![call("a"), call_with("[]", vec![literal(LiteralType::Integer)])])]
#[case("a.b = 1", vec![call("a"), call_with("b=", vec![literal(LiteralType::Integer)])])]
#[case(
    "a[0] = 1",
    vec![
        call("a"),
        call_with("[]=", vec![literal(LiteralType::Integer), literal(LiteralType::Integer)]),
    ]
)]
#[case(
    "foo.bar(baz.qux)",
    vec![call("foo"), call_with("bar", vec![chain(vec![call("baz"), call("qux")])])]
)]
#[case("foo bar", vec![call_with("foo", vec![chain(vec![call("bar")])])])]
#[case("foo()", vec![call("foo")])]
fn test_calls(#[case] input: &str, #[case] expected: Vec<Link>) {
    assert_eq!(links_of(input), expected, "input: {input}");
}

// ============================================================================
// Blocks and block-pass
// ============================================================================

#[rstest]
#[case("a.b { }", vec![call("a"), block_call("b")])]
#[case("a.b do end", vec![call("a"), block_call("b")])]
#[case("foo { }", vec![block_call("foo")])]
#[case(
    "[1, 2].map { |x| x.to_s }",
    vec![Link::Literal(LiteralType::Array), block_call("map")]
)]
#[case("foo(&blk)", vec![Link::BlockVariable("&blk".into())])]
#[case("foo(1, &blk)", vec![Link::BlockVariable("&blk".into())])]
#[case(
    "a.each(&blk)",
    vec![
        call("a"),
        Link::call("each", vec![chain(vec![Link::BlockVariable("&blk".into())])], true),
    ]
)]
#[case(
    "a.map(&:to_s)",
    vec![
        call("a"),
        Link::call("map", vec![chain(vec![Link::BlockVariable("&to_s".into())])], true),
    ]
)]
fn test_blocks(#[case] input: &str, #[case] expected: Vec<Link>) {
    assert_eq!(links_of(input), expected, "input: {input}");
}

// ============================================================================
// Heads, constants and variables
// ============================================================================

#[rstest]
#[case("self.foo", vec![Link::head("self"), call("foo")])]
#[case("super", vec![Link::head("super")])]
#[case("super(1, 2)", vec![Link::head("super")])]
#[case("super.foo", vec![Link::head("super"), call("foo")])]
#[case("Foo", vec![Link::Constant("Foo".into())])]
#[case("Foo::Bar.new", vec![Link::Constant("Foo::Bar".into()), call("new")])]
#[case("::Foo", vec![Link::Constant("::Foo".into())])]
#[case("@foo.bar", vec![Link::InstanceVariable("@foo".into()), call("bar")])]
#[case("@@count", vec![Link::ClassVariable("@@count".into())])]
#[case("$stdout.puts", vec![Link::GlobalVariable("$stdout".into()), call("puts")])]
#[case("@x = 1", vec![Link::InstanceVariable("@x".into())])]
#[case("@x ||= []", vec![Link::Literal(LiteralType::Array)])]
#[case("@x ||= foo.bar", vec![call("foo"), call("bar")])]
#[case("x ||= Foo.new", vec![Link::Constant("Foo".into()), call("new")])]
#[case("x = 1", vec![call("x")])]
#[case("x = 1\nx.foo", vec![call("x")])]
#[case("[1].each { |y| y.succ }", vec![Link::Literal(LiteralType::Array), block_call("each")])]
fn test_references(#[case] input: &str, #[case] expected: Vec<Link>) {
    assert_eq!(links_of(input), expected, "input: {input}");
}

// ============================================================================
// Logical forms and sequences
// ============================================================================

#[rstest]
#[case(
    "x || y",
    vec![Link::Or { left: chain(vec![call("x")]), right: chain(vec![call("y")]) }]
)]
#[case("a && b.c", vec![call("b"), call("c")])]
#[case("a and b", vec![call("b")])]
#[case("begin; a.b; end", vec![call("a"), call("b")])]
#[case("(a.b).c", vec![call("a"), call("b"), call("c")])]
fn test_logical_and_sequences(#[case] input: &str, #[case] expected: Vec<Link>) {
    assert_eq!(links_of(input), expected, "input: {input}");
}

// ============================================================================
// Literals, definitions and fallbacks
// ============================================================================

#[rstest]
#[case("1", vec![Link::Literal(LiteralType::Integer)])]
#[case("1.5.floor", vec![Link::Literal(LiteralType::Float), call("floor")])]
#[case("'s'.upcase", vec![Link::Literal(LiteralType::String), call("upcase")])]
#[case(":sym", vec![Link::Literal(LiteralType::Symbol)])]
#[case("[1].first", vec![Link::Literal(LiteralType::Array), call("first")])]
#[case("[]", vec![Link::Literal(LiteralType::Array)])]
#[case("{}", vec![Link::Literal(LiteralType::Hash)])]
#[case("(1..5).to_a", vec![Link::Literal(LiteralType::Range), call("to_a")])]
#[case("nil", vec![Link::Literal(LiteralType::NilClass)])]
#[case("true", vec![Link::Literal(LiteralType::Boolean)])]
#[case("class Foo; end", vec![Link::UndefinedCall])]
#[case("module Foo; end", vec![Link::UndefinedCall])]
#[case("def foo; end", vec![Link::UndefinedCall])]
#[case("def self.foo; end", vec![Link::UndefinedCall])]
#[case("class << self; end", vec![Link::UndefinedCall])]
#[case("if x then y end", vec![Link::Empty])]
#[case("begin; a; rescue; b; end", vec![Link::Empty])]
#[case("", vec![Link::Empty])]
fn test_literals_and_fallbacks(#[case] input: &str, #[case] expected: Vec<Link>) {
    assert_eq!(links_of(input), expected, "input: {input}");
}

#[test]
fn test_chain_is_never_empty() {
    for source in crate::helpers::source_fixtures::CHAIN_CORPUS {
        let chain = gemchain::chain_from_source(source).unwrap();
        assert!(!chain.links().is_empty(), "empty chain for {source:?}");
    }
}
