//! Edit assist handles.
//!
//! Handles sit on a 3x3 grid over a shape's bounds with the center cell
//! left out. A handle's index is `x_cell * 3 + y_cell`, where a cell is
//! 0 for the minimum, 1 for the maximum and 2 for the middle of an axis.

use egui::Color32;

use crate::element::{Circle, Element, Ellipse, Extent, Point, Segment, Shape, Text};
use crate::renderer::{Canvas, Primitive};

pub const EDIT_ASSIST_MAX_NUM: usize = 8;

/// Position of a handle along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Min = 0,
    Max = 1,
    Mid = 2,
}

impl Cell {
    fn from_index(index: usize) -> Self {
        match index {
            0 => Cell::Min,
            1 => Cell::Max,
            _ => Cell::Mid,
        }
    }

    fn pick(self, min: i32, max: i32) -> i32 {
        match self {
            Cell::Min => min,
            Cell::Max => max,
            Cell::Mid => (min + max) / 2,
        }
    }
}

/// Index of one of the [`EDIT_ASSIST_MAX_NUM`] handle slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(u8);

impl HandleId {
    pub const ALL: [HandleId; EDIT_ASSIST_MAX_NUM] = [
        HandleId(0),
        HandleId(1),
        HandleId(2),
        HandleId(3),
        HandleId(4),
        HandleId(5),
        HandleId(6),
        HandleId(7),
    ];

    pub fn new(index: usize) -> Option<Self> {
        (index < EDIT_ASSIST_MAX_NUM).then(|| HandleId(index as u8))
    }

    pub fn from_cells(x: Cell, y: Cell) -> Option<Self> {
        Self::new(x as usize * 3 + y as usize)
    }

    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    pub fn x_cell(self) -> Cell {
        Cell::from_index(self.index() / 3)
    }

    pub fn y_cell(self) -> Cell {
        Cell::from_index(self.index() % 3)
    }
}

/// Handle positions for the shape being edited; `None` marks a cell the
/// shape kind has no handle for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistHandles {
    points: [Option<Point>; EDIT_ASSIST_MAX_NUM],
}

impl AssistHandles {
    pub fn compute(shape: &Shape) -> Self {
        // Raw endpoints for segments, so handle 0 is always `left` and handle 4 `right`
        let (min, max) = match shape {
            Shape::Segment(segment) => (segment.left(), segment.right()),
            _ => {
                let extent = shape.extent();
                (extent.min, extent.max)
            }
        };
        let present = |id: HandleId| match shape {
            Shape::Segment(_) => id.x_cell() == id.y_cell(),
            Shape::Circle(_) => (id.x_cell() == Cell::Mid) != (id.y_cell() == Cell::Mid),
            Shape::Rectangle(_) | Shape::Ellipse(_) | Shape::Text(_) => true,
        };

        let points = HandleId::ALL.map(|id| {
            present(id).then(|| {
                Point::new(id.x_cell().pick(min.x, max.x), id.y_cell().pick(min.y, max.y))
            })
        });
        Self { points }
    }

    pub fn get(&self, id: HandleId) -> Option<Point> {
        self.points[id.index()]
    }

    /// Present handles in index order
    pub fn iter(&self) -> impl Iterator<Item = (HandleId, Point)> + '_ {
        HandleId::ALL
            .into_iter()
            .filter_map(|id| self.get(id).map(|point| (id, point)))
    }

    pub fn present_count(&self) -> usize {
        self.points.iter().flatten().count()
    }

    /// Nearest handle within `tolerance` by Manhattan distance; ties go to the lowest index
    pub fn hit_test(&self, cursor: Point, tolerance: i32) -> Option<HandleId> {
        let mut best: Option<(HandleId, i32)> = None;
        for (id, point) in self.iter() {
            let distance = cursor.manhattan_distance(point);
            if distance > tolerance {
                continue;
            }
            if best.is_none_or(|(_, nearest)| distance < nearest) {
                best = Some((id, distance));
            }
        }
        best.map(|(id, _)| id)
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, radius: i32, color: Color32) {
        for (_, center) in self.iter() {
            canvas.draw_primitive(Primitive::Disc { center, radius }, color);
        }
    }
}

/// Fixed point and axis locks for a resize started from one handle.
///
/// While the drag runs, the dragged point follows the pointer except on a
/// locked axis, where it keeps the coordinate of `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeAnchor {
    pub handle: HandleId,
    pub anchor: Point,
    pub origin: Point,
    pub x_lock: bool,
    pub y_lock: bool,
}

impl ResizeAnchor {
    /// `None` when the shape has no handle in that slot
    pub fn for_handle(shape: &Shape, handle: HandleId) -> Option<Self> {
        let point = AssistHandles::compute(shape).get(handle)?;
        let (x_cell, y_cell) = (handle.x_cell(), handle.y_cell());

        let anchor = match shape {
            Shape::Segment(segment) => {
                let anchor = if x_cell == Cell::Min {
                    segment.right()
                } else {
                    segment.left()
                };
                Self::free(handle, anchor, point)
            }
            Shape::Rectangle(_) | Shape::Text(_) => {
                let extent = shape.extent();
                let (anchor_x, origin_x, x_lock) = box_axis(x_cell, extent.min.x, extent.max.x);
                let (anchor_y, origin_y, y_lock) = box_axis(y_cell, extent.min.y, extent.max.y);
                Self {
                    handle,
                    anchor: Point::new(anchor_x, anchor_y),
                    origin: Point::new(origin_x, origin_y),
                    x_lock,
                    y_lock,
                }
            }
            Shape::Circle(circle) => Self {
                handle,
                anchor: circle.center(),
                origin: point,
                x_lock: x_cell == Cell::Mid,
                y_lock: y_cell == Cell::Mid,
            },
            Shape::Ellipse(ellipse) => {
                // A locked axis keeps its far edge so that semi-axis is preserved
                let Extent { max, .. } = ellipse.extent();
                let x_lock = x_cell == Cell::Mid;
                let y_lock = y_cell == Cell::Mid;
                Self {
                    handle,
                    anchor: ellipse.center(),
                    origin: Point::new(
                        if x_lock { max.x } else { point.x },
                        if y_lock { max.y } else { point.y },
                    ),
                    x_lock,
                    y_lock,
                }
            }
        };
        Some(anchor)
    }

    fn free(handle: HandleId, anchor: Point, origin: Point) -> Self {
        Self {
            handle,
            anchor,
            origin,
            x_lock: false,
            y_lock: false,
        }
    }

    /// Where the dragged point sits for a given pointer position
    pub fn drag_to(&self, pointer: Point) -> Point {
        Point::new(
            if self.x_lock { self.origin.x } else { pointer.x },
            if self.y_lock { self.origin.y } else { pointer.y },
        )
    }

    /// Rebuild `shape` with the handle dragged to `pointer`; no size check
    pub fn apply(&self, shape: &Shape, pointer: Point) -> Shape {
        let dragged = self.drag_to(pointer);
        match shape {
            Shape::Segment(segment) => {
                if self.handle.x_cell() == Cell::Min {
                    Shape::Segment(Segment::new(dragged, segment.right()))
                } else {
                    Shape::Segment(Segment::new(segment.left(), dragged))
                }
            }
            Shape::Rectangle(rect) => Shape::Rectangle(rect.respanned(self.anchor, dragged)),
            Shape::Text(text) => Shape::Text(resized_text(text, self.anchor, dragged)),
            Shape::Circle(_) => {
                let radius = self.anchor.distance(dragged) as i32;
                Shape::Circle(Circle::new(self.anchor, radius))
            }
            Shape::Ellipse(_) => Shape::Ellipse(Ellipse::new(
                self.anchor,
                (dragged.x - self.anchor.x).abs(),
                (dragged.y - self.anchor.y).abs(),
            )),
        }
    }
}

// (anchor, origin, locked) for one axis of a box
fn box_axis(cell: Cell, min: i32, max: i32) -> (i32, i32, bool) {
    match cell {
        Cell::Min => (max, min, false),
        Cell::Max => (min, max, false),
        Cell::Mid => (min, max, true),
    }
}

fn resized_text(text: &Text, anchor: Point, dragged: Point) -> Text {
    text.with_position(text.position().respanned(anchor, dragged))
}
