#![cfg(feature = "serde")]

use configspace::{extract, Condition, ConditionPath, ConfigSpace, ExprGraph};

#[test]
fn condition_path_round_trip() {
    let path = ConditionPath::root()
        .extended(Condition::eq("a", 1))
        .extended(Condition::eq("d", 0));

    let json = serde_json::to_string(&path).unwrap();
    let back: ConditionPath = serde_json::from_str(&json).unwrap();
    assert_eq!(path, back);
}

#[test]
fn config_space_round_trip() {
    let mut g = ExprGraph::new();
    let x = g.uniform("x", 0.0, 1.0);
    let y = g.log_uniform("y", 1e-3, 1.0);
    let root = g.choice("pick", vec![x, y]);

    let space = extract(&g, root, &ConditionPath::root()).unwrap();

    let json = serde_json::to_string(&space).unwrap();
    let back: ConfigSpace = serde_json::from_str(&json).unwrap();
    assert_eq!(space, back);
}

#[test]
fn graph_round_trip_preserves_extraction() {
    let mut g = ExprGraph::new();
    let x = g.uniform("x", 0.0, 1.0);
    let y = g.uniform("y", 0.0, 1.0);
    let root = g.choice("pick", vec![x, y]);

    let json = serde_json::to_string(&g).unwrap();
    let g2: ExprGraph = serde_json::from_str(&json).unwrap();

    let seed = ConditionPath::root();
    assert_eq!(
        extract(&g, root, &seed).unwrap(),
        extract(&g2, root, &seed).unwrap()
    );
}
