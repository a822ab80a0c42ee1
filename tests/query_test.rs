//! Membership, sum, minimum and path-sum tests against the sample trees

use rstest::rstest;

use treewalk::fixture::{label_tree, numeric_tree};
use treewalk::node::Subtree;
use treewalk::util::testing;
use treewalk::{queue, recursive, stack};

// ============================================================
// Membership Tests
// ============================================================

#[rstest]
#[case('B', true)]
#[case('F', true)]
#[case('Z', false)]
fn given_label_tree_when_searching_breadth_first_then_reports_membership(
    #[case] target: char,
    #[case] expected: bool,
) {
    testing::init_test_setup();
    let tree = label_tree();

    assert_eq!(queue::includes(&tree, &target), expected);
}

#[rstest]
#[case('B', true)]
#[case('F', true)]
#[case('Z', false)]
fn given_label_tree_when_searching_recursively_then_reports_membership(
    #[case] target: char,
    #[case] expected: bool,
) {
    let tree = label_tree();

    assert_eq!(recursive::includes(&tree, &target), expected);
}

// ============================================================
// Sum Tests
// ============================================================

#[rstest]
fn given_numeric_tree_when_summing_then_both_variants_return_21() {
    let tree = numeric_tree();

    assert_eq!(recursive::sum(&tree), 21);
    assert_eq!(queue::sum(&tree), 21);
}

// ============================================================
// Minimum Tests
// ============================================================

#[rstest]
fn given_numeric_tree_when_taking_minimum_then_all_variants_return_1() {
    let tree = numeric_tree();

    assert_eq!(stack::min_value(&tree), Some(1));
    assert_eq!(queue::min_value(&tree), Some(1));
    assert_eq!(recursive::min_value(&tree), Some(1));
}

#[rstest]
fn given_tree_with_minimum_at_leaf_when_taking_minimum_then_leaf_wins() {
    use treewalk::node::Node;

    // Minimum sits in the right subtree's leaf, away from the root.
    let tree = Node::new(
        10,
        Node::leaf(7).boxed(),
        Node::new(9, Node::leaf(-3).boxed(), None).boxed(),
    )
    .boxed();

    assert_eq!(stack::min_value(&tree), Some(-3));
    assert_eq!(queue::min_value(&tree), Some(-3));
    assert_eq!(recursive::min_value(&tree), Some(-3));
}

// ============================================================
// Max Root-to-Leaf Path Sum Tests
// ============================================================

#[rstest]
fn given_numeric_tree_when_taking_max_path_sum_then_returns_10() {
    let tree = numeric_tree();

    // Candidate paths: 1+2+4 = 7, 1+2+5 = 8, 1+3+6 = 10.
    assert_eq!(recursive::max_path_sum(&tree), Some(10));
}

#[rstest]
fn given_numeric_tree_when_taking_max_path_sum_then_tree_is_untouched() {
    let tree = numeric_tree();
    let before = tree.clone();

    let _ = recursive::max_path_sum(&tree);

    assert_eq!(tree, before);
    // A later read sees the original values, not intermediate path sums.
    assert_eq!(queue::breadth_first_values(&tree), vec![1, 2, 3, 4, 5, 6]);
}

#[rstest]
fn given_single_node_tree_when_taking_max_path_sum_then_returns_its_value() {
    use treewalk::node::Node;

    let tree = Node::leaf(-7).boxed();

    assert_eq!(recursive::max_path_sum(&tree), Some(-7));
}

#[rstest]
fn given_one_sided_tree_when_taking_max_path_sum_then_absent_side_is_never_chosen() {
    use treewalk::node::Node;

    // 5 -> -2 -> 1 is the only path; the missing siblings must not be
    // treated as zero-valued alternatives.
    let tree = Node::new(
        5,
        None,
        Node::new(-2, Node::leaf(1).boxed(), None).boxed(),
    )
    .boxed();

    assert_eq!(recursive::max_path_sum(&tree), Some(4));
}

// ============================================================
// Root-to-Leaf Path Enumeration
// ============================================================

#[rstest]
fn given_label_tree_when_enumerating_paths_then_returns_all_three() {
    let tree = label_tree();

    let paths = recursive::root_to_leaf_paths(&tree);

    assert_eq!(
        paths,
        vec![
            vec!['A', 'B', 'D'],
            vec!['A', 'B', 'E'],
            vec!['A', 'C', 'F'],
        ]
    );
}

// ============================================================
// Empty Tree Boundaries
// ============================================================

#[rstest]
fn given_empty_tree_when_querying_then_returns_neutral_results() {
    let empty: Subtree<i64> = None;

    assert!(!queue::includes(&empty, &1));
    assert!(!recursive::includes(&empty, &1));
    assert_eq!(recursive::sum(&empty), 0);
    assert_eq!(queue::sum(&empty), 0);
    assert_eq!(stack::min_value(&empty), None);
    assert_eq!(queue::min_value(&empty), None);
    assert_eq!(recursive::min_value(&empty), None);
    assert_eq!(recursive::max_path_sum(&empty), None);
    assert!(recursive::root_to_leaf_paths(&empty).is_empty());
}

// ============================================================
// Idempotence
// ============================================================

#[rstest]
fn given_numeric_tree_when_querying_twice_then_results_are_identical() {
    let tree = numeric_tree();

    assert_eq!(recursive::sum(&tree), recursive::sum(&tree));
    assert_eq!(recursive::min_value(&tree), recursive::min_value(&tree));
    assert_eq!(recursive::max_path_sum(&tree), recursive::max_path_sum(&tree));
}
