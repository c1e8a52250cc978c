use super::*;

enum Nested {
    Leaf(i64),
    Paren(Box<Nested>),
}

fn build(depth: usize) -> Nested {
    let mut node = Nested::Leaf(7);
    for _ in 0..depth {
        node = Nested::Paren(Box::new(node));
    }
    node
}

fn eval(node: &Nested) -> i64 {
    ensure_sufficient_stack(|| match node {
        Nested::Leaf(n) => *n,
        Nested::Paren(inner) => eval(inner),
    })
}

fn depth(node: &Nested) -> usize {
    ensure_sufficient_stack(|| match node {
        Nested::Leaf(_) => 0,
        Nested::Paren(inner) => depth(inner) + 1,
    })
}

#[test]
fn test_shallow_nesting() {
    assert_eq!(eval(&build(10)), 7);
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let tree = build(200_000);
    assert_eq!(depth(&tree), 200_000);
    assert_eq!(eval(&tree), 7);
    // Iterative teardown: the derived drop would recurse once per level.
    let mut node = tree;
    while let Nested::Paren(inner) = node {
        node = *inner;
    }
}

#[test]
fn test_passes_results_through() {
    let result: Result<i32, &str> = ensure_sufficient_stack(|| Err("falhou"));
    assert_eq!(result, Err("falhou"));
}
