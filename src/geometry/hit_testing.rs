use crate::element::{Element, Point, Shape};
use crate::scene::{NodeId, Scene};

/// Find rule: is `cursor` on `shape` within `tolerance`
pub fn find_rule(cursor: Point, shape: &Shape, tolerance: i32) -> bool {
    shape.hit_test(cursor, tolerance)
}

/// Containment check against a single known node; stale nodes never match
pub fn node_contains(scene: &Scene, node: NodeId, cursor: Point, tolerance: i32) -> bool {
    scene
        .get(node)
        .is_some_and(|shape| find_rule(cursor, shape, tolerance))
}

/// First node under `cursor`, scanning from the head of the scene
pub fn shape_at(scene: &Scene, cursor: Point, tolerance: i32) -> Option<NodeId> {
    scene.find_first(|shape| find_rule(cursor, shape, tolerance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{FINDRULE_VARIATION, factory};

    #[test]
    fn test_shape_at_prefers_head() {
        let mut scene = Scene::new();
        let first = scene
            .insert(factory::create_rectangle(Point::new(0, 0), Point::new(100, 100)))
            .unwrap();
        let second = scene
            .insert(factory::create_rectangle(Point::new(50, 50), Point::new(150, 150)))
            .unwrap();

        let overlap = Point::new(75, 75);
        assert_eq!(shape_at(&scene, overlap, FINDRULE_VARIATION), Some(first));

        scene.promote(second).unwrap();
        assert_eq!(shape_at(&scene, overlap, FINDRULE_VARIATION), Some(second));
    }

    #[test]
    fn test_node_contains_ignores_stale_nodes() {
        let mut scene = Scene::new();
        let node = scene
            .insert(factory::create_circle(Point::new(100, 100), 50))
            .unwrap();
        assert!(node_contains(&scene, node, Point::new(150, 100), FINDRULE_VARIATION));
        assert!(!node_contains(&scene, node, Point::new(100, 100), FINDRULE_VARIATION));

        scene.remove(node).unwrap();
        assert!(!node_contains(&scene, node, Point::new(150, 100), FINDRULE_VARIATION));
    }
}
