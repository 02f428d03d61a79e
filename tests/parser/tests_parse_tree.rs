//! Parser Tests - Tree Shapes
//!
//! Each case parses a Ruby expression and compares the S-expression of the
//! resulting tree. The root is always a `SCOPE` whose body is the program.

use rstest::rstest;

use crate::helpers::chain_helpers::tree_of;
use crate::helpers::source_fixtures::*;

/// Body of the root scope, with its (empty) local table
fn body(sexp: &str) -> String {
    format!("(SCOPE [] nil {sexp})")
}

// ============================================================================
// Calls
// ============================================================================

#[rstest]
#[case("a.b", "(CALL (VCALL :a) :b nil)")]
#[case("a&.b", "(QCALL (VCALL :a) :b nil)")]
#[case("a.b(1, 2)", "(CALL (VCALL :a) :b (LIST (INTEGER \"1\") (INTEGER \"2\") nil))")]
#[case("foo()", "(FCALL :foo nil)")]
#[case("puts 'hi'", "(FCALL :puts (LIST (STR \"hi\") nil))")]
#[case("x.empty?", "(CALL (VCALL :x) :empty? nil)")]
#[case("a.b.c", "(CALL (CALL (VCALL :a) :b nil) :c nil)")]
#[case("a[1]", "(CALL (VCALL :a) :[] (LIST (INTEGER \"1\") nil))")]
#[case("Foo::bar", "(CALL (CONST :Foo) :bar nil)")]
#[case("Integer('1')", "(FCALL :Integer (LIST (STR \"1\") nil))")]
#[case(
    "foo(1, &blk)",
    "(FCALL :foo (BLOCK_PASS (LIST (INTEGER \"1\") nil) (VCALL :blk)))"
)]
#[case("a.each(&:to_s)", "(CALL (VCALL :a) :each (BLOCK_PASS nil (SYM \"to_s\")))")]
#[case(
    "foo bar: 1",
    "(FCALL :foo (LIST (HASH (LIST (SYM \"bar\") (INTEGER \"1\") nil)) nil))"
)]
#[case("foo *args", "(FCALL :foo (LIST (SPLAT (VCALL :args)) nil))")]
#[case("super", "(ZSUPER)")]
#[case("super(1, 2)", "(SUPER (LIST (INTEGER \"1\") (INTEGER \"2\") nil))")]
fn test_calls(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(tree_of(input), body(expected), "input: {input}");
}

// ============================================================================
// Blocks
// ============================================================================

#[rstest]
#[case(
    "a.b { |x| x }",
    "(ITER (CALL (VCALL :a) :b nil) (SCOPE [x] nil (DVAR :x)))"
)]
#[case("foo { }", "(ITER (FCALL :foo nil) (SCOPE [] nil nil))")]
#[case(
    "foo.bar baz do |x| end",
    "(ITER (CALL (VCALL :foo) :bar (LIST (VCALL :baz) nil)) (SCOPE [x] nil nil))"
)]
#[case(
    "[1, 2].map { |x| x.to_s }",
    "(ITER (CALL (LIST (INTEGER \"1\") (INTEGER \"2\") nil) :map nil) (SCOPE [x] nil (CALL (DVAR :x) :to_s nil)))"
)]
fn test_blocks(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(tree_of(input), body(expected), "input: {input}");
}

// ============================================================================
// Operators
// ============================================================================

#[rstest]
#[case(
    "1 + 2 * 3",
    "(OPCALL (INTEGER \"1\") :+ (LIST (OPCALL (INTEGER \"2\") :* (LIST (INTEGER \"3\") nil)) nil))"
)]
#[case("a || b && c", "(OR (VCALL :a) (AND (VCALL :b) (VCALL :c)))")]
#[case("a and b", "(AND (VCALL :a) (VCALL :b))")]
#[case("!a", "(OPCALL (VCALL :a) :! nil)")]
#[case("-a", "(OPCALL (VCALL :a) :-@ nil)")]
#[case("-1", "(INTEGER \"-1\")")]
#[case("-1.abs", "(CALL (INTEGER \"-1\") :abs nil)")]
#[case("1..5", "(DOT2 (INTEGER \"1\") (INTEGER \"5\"))")]
#[case("a == b", "(OPCALL (VCALL :a) :== (LIST (VCALL :b) nil))")]
#[case(
    "2 ** 3 ** 2",
    "(OPCALL (INTEGER \"2\") :** (LIST (OPCALL (INTEGER \"3\") :** (LIST (INTEGER \"2\") nil)) nil))"
)]
fn test_operators(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(tree_of(input), body(expected), "input: {input}");
}

// ============================================================================
// References and literals
// ============================================================================

#[rstest]
#[case("self", "(SELF)")]
#[case("Foo::Bar", "(COLON2 (CONST :Foo) :Bar)")]
#[case("::Foo", "(COLON3 :Foo)")]
#[case("@a", "(IVAR :@a)")]
#[case("@@a", "(CVAR :@@a)")]
#[case("$stdout", "(GVAR :$stdout)")]
#[case("1_000", "(INTEGER \"1000\")")]
#[case("1.5", "(FLOAT \"1.5\")")]
#[case(":sym", "(SYM \"sym\")")]
#[case("\"a#{b}\"", "(DSTR \"a#{b}\")")]
#[case("[]", "(ZLIST)")]
#[case("{}", "(HASH nil)")]
#[case(
    "{ a: 1, 'b' => 2 }",
    "(HASH (LIST (SYM \"a\") (INTEGER \"1\") (STR \"b\") (INTEGER \"2\") nil))"
)]
#[case("nil", "(NIL)")]
fn test_references_and_literals(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(tree_of(input), body(expected), "input: {input}");
}

// ============================================================================
// Assignment
// ============================================================================

#[test]
fn test_local_assignment_then_read() {
    assert_eq!(
        tree_of("x = 1; x.foo"),
        "(SCOPE [x] nil (BLOCK (LASGN :x (INTEGER \"1\")) (CALL (LVAR :x) :foo nil)))"
    );
}

#[rstest]
#[case("@a ||= 1", "(OP_ASGN_OR (IVAR :@a) nil (IASGN :@a (INTEGER \"1\")))")]
#[case("@a &&= 1", "(OP_ASGN_AND (IVAR :@a) (IASGN :@a (INTEGER \"1\")))")]
#[case(
    "a[1] = 2",
    "(ATTRASGN (VCALL :a) :[]= (LIST (INTEGER \"1\") (INTEGER \"2\") nil))"
)]
#[case("a.b = 1", "(ATTRASGN (VCALL :a) :b= (LIST (INTEGER \"1\") nil))")]
#[case("a.b += 1", "(OP_ASGN2 (VCALL :a) :b :+ (INTEGER \"1\"))")]
#[case(
    "a[0] ||= 1",
    "(OP_ASGN1 (VCALL :a) :|| (LIST (INTEGER \"0\") nil) (INTEGER \"1\"))"
)]
#[case("$g = 1", "(GASGN :$g (INTEGER \"1\"))")]
#[case("Foo = 1", "(CDECL :Foo (INTEGER \"1\"))")]
fn test_assignments(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(tree_of(input), body(expected), "input: {input}");
}

#[test]
fn test_compound_assignment_declares_local() {
    assert_eq!(
        tree_of("x += 1"),
        "(SCOPE [x] nil (LASGN :x (OPCALL (LVAR :x) :+ (LIST (INTEGER \"1\") nil))))"
    );
}

// ============================================================================
// Compound expressions and definitions
// ============================================================================

#[rstest]
#[case("if x then y end", "(IF (VCALL :x) (VCALL :y) nil)")]
#[case(
    "if a\n  b\nelsif c\n  d\nelse\n  e\nend",
    "(IF (VCALL :a) (VCALL :b) (IF (VCALL :c) (VCALL :d) (VCALL :e)))"
)]
#[case("a.b if c", "(IF (VCALL :c) (CALL (VCALL :a) :b nil) nil)")]
#[case("a unless b", "(UNLESS (VCALL :b) (VCALL :a) nil)")]
#[case("begin; a.b; end", "(BEGIN (CALL (VCALL :a) :b nil))")]
#[case("a rescue b", "(RESCUE (VCALL :a) (RESBODY nil (VCALL :b)) nil)")]
#[case("class Foo < Bar; end", "(CLASS (CONST :Foo) (CONST :Bar) (SCOPE [] nil nil))")]
#[case("module A::B; end", "(MODULE (COLON2 (CONST :A) :B) (SCOPE [] nil nil))")]
#[case("def foo; end", "(DEFN :foo (SCOPE [] nil nil))")]
#[case("def self.foo; end", "(DEFS (SELF) :foo (SCOPE [] nil nil))")]
#[case("def ==(other); end", "(DEFN :== (SCOPE [other] nil nil))")]
#[case("def name=(value); end", "(DEFN :name= (SCOPE [value] nil nil))")]
fn test_compound_expressions(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(tree_of(input), body(expected), "input: {input}");
}

#[test]
fn test_method_definition_with_parameters() {
    assert_eq!(
        tree_of(METHOD_WITH_PARAMS),
        body(
            "(DEFN :greet (SCOPE [name greeting rest loud blk] nil (CALL (LVAR :name) :upcase nil)))"
        )
    );
}

#[test]
fn test_class_body() {
    let tree = tree_of(CLASS_WITH_BODY);
    assert!(tree.starts_with("(SCOPE [] nil (CLASS (CONST :Greeter) (CONST :Base)"));
    assert!(tree.contains("(FCALL :attr_reader (LIST (SYM \"name\") nil))"));
    assert!(tree.contains("(IASGN :@name (LVAR :name))"));
    assert!(tree.contains("(SCLASS (SELF) (SCOPE [] nil (DEFN :build (SCOPE [] nil nil))))"));
}

#[test]
fn test_begin_rescue_else_ensure() {
    assert_eq!(
        tree_of(BEGIN_RESCUE),
        "(SCOPE [e] nil (ENSURE (RESCUE (CALL (VCALL :risky) :call nil) \
         (RESBODY (LIST (CONST :ArgumentError) (CONST :TypeError) nil) \
         (CALL (LVAR :e) :message nil)) \
         (VCALL :fine)) (VCALL :cleanup)))"
    );
}

#[test]
fn test_leading_dot_continuation() {
    assert_eq!(
        tree_of(LEADING_DOT_CHAIN),
        body("(CALL (CALL (VCALL :users) :active nil) :first nil)")
    );
}

#[test]
fn test_comments_and_blank_lines_are_ignored() {
    assert_eq!(
        tree_of("# leading\n\n  a.b # trailing\n"),
        body("(CALL (VCALL :a) :b nil)")
    );
}

#[test]
fn test_node_ranges() {
    let root = gemchain::parse("  foo.bar").unwrap();
    let call = root.child_node(2).unwrap();
    assert_eq!(u32::from(call.range().start()), 2);
    assert_eq!(u32::from(call.range().end()), 9);
    assert_eq!(u32::from(root.range().end()), 9);
}
