use shape_editor::element::{Element, FINDRULE_VARIATION, Point, ShapeKind, factory};
use shape_editor::error::SceneError;
use shape_editor::geometry::shape_at;
use shape_editor::scene::{NodeId, Scene};

fn overlapping_pair(scene: &mut Scene) -> (NodeId, NodeId) {
    let first = scene
        .insert(factory::create_rectangle(Point::new(0, 0), Point::new(100, 100)))
        .unwrap();
    let second = scene
        .insert(factory::create_rectangle(Point::new(50, 50), Point::new(150, 150)))
        .unwrap();
    (first, second)
}

#[test]
fn test_insert_appends_to_tail() {
    let mut scene = Scene::new();
    let (first, second) = overlapping_pair(&mut scene);
    assert_eq!(scene.head(), Some(first));
    assert_eq!(scene.tail(), Some(second));
    assert_eq!(scene.len(), 2);
}

#[test]
fn test_overlap_resolves_to_head() {
    let mut scene = Scene::new();
    let (first, _) = overlapping_pair(&mut scene);
    assert_eq!(shape_at(&scene, Point::new(75, 75), FINDRULE_VARIATION), Some(first));
}

#[test]
fn test_promote_changes_priority() {
    let mut scene = Scene::new();
    let (first, second) = overlapping_pair(&mut scene);

    scene.promote(second).unwrap();
    assert_eq!(scene.head(), Some(second));
    assert_eq!(scene.tail(), Some(first));
    assert_eq!(shape_at(&scene, Point::new(75, 75), FINDRULE_VARIATION), Some(second));
}

#[test]
fn test_remove_twice_fails() {
    let mut scene = Scene::new();
    let (first, second) = overlapping_pair(&mut scene);

    assert_eq!(scene.len(), 2);
    assert!(scene.remove(first).is_ok());
    assert_eq!(scene.len(), 1);
    assert_eq!(scene.remove(first), Err(SceneError::StaleNode(first)));
    assert!(scene.contains(second));

    scene.remove(second).unwrap();
    assert_eq!(scene.remove(second), Err(SceneError::Empty));
}

#[test]
fn test_reused_slot_does_not_revive_old_handle() {
    let mut scene = Scene::new();
    let old = scene
        .insert(factory::create_circle(Point::new(50, 50), 20))
        .unwrap();
    scene.remove(old).unwrap();

    let new = scene
        .insert(factory::create_circle(Point::new(80, 80), 30))
        .unwrap();
    assert_ne!(old, new);
    assert!(scene.get(old).is_none());
    assert!(scene.contains(new));
}

#[test]
fn test_replace_keeps_position() {
    let mut scene = Scene::new();
    let a = scene
        .insert(factory::create_segment(Point::new(0, 0), Point::new(50, 50)))
        .unwrap();
    let b = scene
        .insert(factory::create_circle(Point::new(100, 100), 30))
        .unwrap();
    let c = scene
        .insert(factory::create_ellipse(Point::new(200, 200), 40, 20))
        .unwrap();

    scene
        .replace(b, factory::create_rectangle(Point::new(10, 10), Point::new(90, 90)))
        .unwrap();
    assert_eq!(scene.position(b), Some(1));
    assert_eq!(scene.get(b).map(|shape| shape.kind()), Some(ShapeKind::Rectangle));

    let order: Vec<_> = scene.iter().map(|(id, _)| id).collect();
    assert_eq!(order, vec![a, b, c]);
}

#[test]
fn test_find_first_stops_at_first_match() {
    let mut scene = Scene::new();
    scene
        .insert(factory::create_segment(Point::new(0, 0), Point::new(50, 0)))
        .unwrap();
    let circle = scene
        .insert(factory::create_circle(Point::new(100, 100), 30))
        .unwrap();
    scene
        .insert(factory::create_circle(Point::new(300, 300), 30))
        .unwrap();

    let mut visited = 0;
    let found = scene.find_first(|shape| {
        visited += 1;
        shape.kind() == ShapeKind::Circle
    });
    assert_eq!(found, Some(circle));
    assert_eq!(visited, 2);
    assert_eq!(scene.find_first(|shape| shape.kind() == ShapeKind::Text), None);
}

#[test]
fn test_clear_invalidates_handles() {
    let mut scene = Scene::new();
    let (first, second) = overlapping_pair(&mut scene);
    scene.clear();

    assert!(scene.is_empty());
    assert_eq!(scene.head(), None);
    assert!(!scene.contains(first));
    assert_eq!(scene.promote(second), Err(SceneError::StaleNode(second)));
}

#[test]
fn test_find_first_over_disjoint_shapes() {
    let mut scene = Scene::new();
    let nodes: Vec<_> = (0..4)
        .map(|i| {
            let x = i * 200;
            scene
                .insert(factory::create_rectangle(Point::new(x, 0), Point::new(x + 100, 100)))
                .unwrap()
        })
        .collect();

    for (i, node) in nodes.iter().enumerate() {
        let inside = Point::new(i as i32 * 200 + 50, 50);
        assert_eq!(shape_at(&scene, inside, FINDRULE_VARIATION), Some(*node));
    }
    assert_eq!(shape_at(&scene, Point::new(150, 50), FINDRULE_VARIATION), None);
}
