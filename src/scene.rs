//! Ordered store of scene nodes.
//!
//! Nodes live in an arena and are linked into a doubly-linked sequence by
//! index. A [`NodeId`] carries the slot generation, so handles to removed
//! nodes are rejected instead of aliasing whatever reuses the slot.
//!
//! New nodes are appended at the tail. [`Scene::promote`] moves a node to
//! the head, and [`Scene::find_first`] scans from the head, so promoted nodes
//! win hit tests. Rendering walks the same head-to-tail order.

use log::debug;

use crate::element::Shape;
use crate::error::{SceneError, SceneResult};

/// Stable handle to a node in a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

#[derive(Debug, Clone)]
struct Node {
    shape: Shape,
    prev: Option<u32>,
    next: Option<u32>,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    slots: Vec<Slot>,
    free: Vec<u32>,
    head: Option<u32>,
    tail: Option<u32>,
    len: usize,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head.map(|index| self.id_at(index))
    }

    pub fn tail(&self) -> Option<NodeId> {
        self.tail.map(|index| self.id_at(index))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn get(&self, id: NodeId) -> Option<&Shape> {
        self.node(id).map(|node| &node.shape)
    }

    /// Append a shape at the tail
    pub fn insert(&mut self, shape: Shape) -> SceneResult<NodeId> {
        let node = Node {
            shape,
            prev: self.tail,
            next: None,
        };

        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index as usize].node = Some(node);
                index
            }
            None => {
                let index = u32::try_from(self.slots.len()).map_err(|_| SceneError::AllocationFailed)?;
                self.slots
                    .try_reserve(1)
                    .map_err(|_| SceneError::AllocationFailed)?;
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                index
            }
        };

        match self.tail {
            Some(tail) => self.link_mut(tail).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;

        let id = self.id_at(index);
        debug!("Inserted {:?} at tail (size {})", id, self.len);
        Ok(id)
    }

    /// Swap the payload of a node in place; its position does not change
    pub fn replace(&mut self, id: NodeId, shape: Shape) -> SceneResult<()> {
        let node = self.node_mut(id).ok_or(SceneError::StaleNode(id))?;
        node.shape = shape;
        Ok(())
    }

    /// Unlink a node and return its payload
    pub fn remove(&mut self, id: NodeId) -> SceneResult<Shape> {
        if self.len == 0 {
            return Err(SceneError::Empty);
        }
        if !self.contains(id) {
            return Err(SceneError::StaleNode(id));
        }

        self.unlink(id.index);
        let slot = &mut self.slots[id.index as usize];
        slot.generation = slot.generation.wrapping_add(1);
        let node = slot.node.take().ok_or(SceneError::StaleNode(id))?;
        self.free.push(id.index);
        self.len -= 1;

        debug!("Removed {:?} (size {})", id, self.len);
        Ok(node.shape)
    }

    /// Move a node to the head so it is scanned first
    pub fn promote(&mut self, id: NodeId) -> SceneResult<()> {
        if !self.contains(id) {
            return Err(SceneError::StaleNode(id));
        }
        if self.head == Some(id.index) {
            return Ok(());
        }

        self.unlink(id.index);
        let old_head = self.head;
        {
            let node = self.link_mut(id.index);
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(head) => self.link_mut(head).prev = Some(id.index),
            None => self.tail = Some(id.index),
        }
        self.head = Some(id.index);

        debug!("Promoted {:?} to head", id);
        Ok(())
    }

    /// First node, scanning from the head, whose shape matches `predicate`
    pub fn find_first<F>(&self, mut predicate: F) -> Option<NodeId>
    where
        F: FnMut(&Shape) -> bool,
    {
        self.iter()
            .find(|(_, shape)| predicate(shape))
            .map(|(id, _)| id)
    }

    /// Nodes in storage order, head to tail
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            scene: self,
            cursor: self.head,
        }
    }

    /// Zero-based position of a node counted from the head
    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.iter().position(|(node, _)| node == id)
    }

    /// Release every node; outstanding handles become stale
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index as u32);
            }
        }
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    fn id_at(&self, index: u32) -> NodeId {
        NodeId {
            index,
            generation: self.slots[index as usize].generation,
        }
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    // Only called with indices of live nodes reached through the links
    fn link_mut(&mut self, index: u32) -> &mut Node {
        match self.slots[index as usize].node.as_mut() {
            Some(node) => node,
            None => unreachable!("linked index {index} has no node"),
        }
    }

    fn unlink(&mut self, index: u32) {
        let (prev, next) = {
            let node = self.link_mut(index);
            (node.prev.take(), node.next.take())
        };
        match prev {
            Some(prev) => self.link_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.link_mut(next).prev = prev,
            None => self.tail = prev,
        }
    }
}

/// Head-to-tail iterator over a [`Scene`]
pub struct Iter<'a> {
    scene: &'a Scene,
    cursor: Option<u32>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (NodeId, &'a Shape);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let slot = &self.scene.slots[index as usize];
        let node = slot.node.as_ref()?;
        self.cursor = node.next;
        Some((
            NodeId {
                index,
                generation: slot.generation,
            },
            &node.shape,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Point, factory};

    fn segment(x: i32) -> Shape {
        factory::create_segment(Point::new(x, 0), Point::new(x + 50, 0))
    }

    fn order(scene: &Scene) -> Vec<NodeId> {
        scene.iter().map(|(id, _)| id).collect()
    }

    #[test]
    fn test_empty_scene_has_no_ends() {
        let scene = Scene::new();
        assert_eq!(scene.len(), 0);
        assert!(scene.head().is_none());
        assert!(scene.tail().is_none());
    }

    #[test]
    fn test_insert_appends_at_tail() {
        let mut scene = Scene::new();
        let a = scene.insert(segment(0)).unwrap();
        let b = scene.insert(segment(100)).unwrap();
        let c = scene.insert(segment(200)).unwrap();
        assert_eq!(order(&scene), vec![a, b, c]);
        assert_eq!(scene.head(), Some(a));
        assert_eq!(scene.tail(), Some(c));
    }

    #[test]
    fn test_remove_relinks_neighbors() {
        let mut scene = Scene::new();
        let a = scene.insert(segment(0)).unwrap();
        let b = scene.insert(segment(100)).unwrap();
        let c = scene.insert(segment(200)).unwrap();

        assert_eq!(scene.remove(b).unwrap(), segment(100));
        assert_eq!(order(&scene), vec![a, c]);

        scene.remove(a).unwrap();
        assert_eq!(scene.head(), Some(c));
        scene.remove(c).unwrap();
        assert!(scene.head().is_none() && scene.tail().is_none());
    }

    #[test]
    fn test_reused_slot_does_not_revive_old_handle() {
        let mut scene = Scene::new();
        let a = scene.insert(segment(0)).unwrap();
        scene.insert(segment(100)).unwrap();
        scene.remove(a).unwrap();

        let reused = scene.insert(segment(300)).unwrap();
        assert_ne!(a, reused);
        assert!(scene.get(a).is_none());
        assert_eq!(scene.remove(a), Err(SceneError::StaleNode(a)));
    }

    #[test]
    fn test_promote_tail_to_head() {
        let mut scene = Scene::new();
        let a = scene.insert(segment(0)).unwrap();
        let b = scene.insert(segment(100)).unwrap();
        let c = scene.insert(segment(200)).unwrap();

        scene.promote(c).unwrap();
        assert_eq!(order(&scene), vec![c, a, b]);
        assert_eq!(scene.tail(), Some(b));

        scene.promote(c).unwrap();
        assert_eq!(order(&scene), vec![c, a, b]);
    }

    #[test]
    fn test_clear_invalidates_handles() {
        let mut scene = Scene::new();
        let a = scene.insert(segment(0)).unwrap();
        scene.clear();
        assert!(scene.is_empty());
        assert!(!scene.contains(a));
        assert_eq!(scene.replace(a, segment(5)), Err(SceneError::StaleNode(a)));
    }
}
