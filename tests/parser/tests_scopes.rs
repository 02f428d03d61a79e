//! Parser Tests - Local Variable Scopes
//!
//! A name reads as a local only after it has been assigned or declared as a
//! parameter in a visible scope. Blocks see enclosing locals; definitions
//! start fresh.

use crate::helpers::chain_helpers::tree_of;

#[test]
fn test_unassigned_name_is_a_call() {
    assert_eq!(tree_of("x"), "(SCOPE [] nil (VCALL :x))");
}

#[test]
fn test_block_sees_enclosing_local() {
    let tree = tree_of("x = 1\n[1].each { x }");
    assert!(tree.contains("(SCOPE [] nil (LVAR :x))"), "{tree}");
}

#[test]
fn test_block_local_assignment() {
    let tree = tree_of("[1].each { |y| z = y }");
    assert!(tree.contains("(SCOPE [y z] nil (DASGN :z (DVAR :y)))"), "{tree}");
}

#[test]
fn test_block_assigns_enclosing_local() {
    let tree = tree_of("x = 1\n[1].each { x = 2 }");
    assert!(tree.contains("(SCOPE [] nil (LASGN :x (INTEGER \"2\")))"), "{tree}");
}

#[test]
fn test_definition_hides_outer_locals() {
    let tree = tree_of("x = 1\ndef foo\n  x\nend");
    assert!(tree.contains("(DEFN :foo (SCOPE [] nil (VCALL :x)))"), "{tree}");
}

#[test]
fn test_parameters_are_locals() {
    let tree = tree_of("def foo(a)\n  a\nend");
    assert!(tree.contains("(SCOPE [a] nil (LVAR :a))"), "{tree}");
}

#[test]
fn test_block_locals_do_not_escape() {
    let tree = tree_of("[1].each { |y| y }\ny");
    assert!(tree.ends_with("(VCALL :y)))"), "{tree}");
}

#[test]
fn test_assignment_declares_before_value() {
    // `x = x` reads the freshly declared (nil) local
    assert_eq!(tree_of("x = x"), "(SCOPE [x] nil (LASGN :x (LVAR :x)))");
}

#[test]
fn test_local_with_parens_is_a_call() {
    let tree = tree_of("x = 1; x()");
    assert!(tree.contains("(FCALL :x nil)"), "{tree}");
}
