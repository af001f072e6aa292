use std::collections::VecDeque;

use egui::{Context, Event, PointerButton, Pos2};

use crate::element::Point;

/// What happened to the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Down,
    Up,
    Move,
}

/// A pointer event in screen coordinates.
///
/// For `Down` and `Up` the button is the one that changed. For `Move` it is
/// the button held during the move, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub position: Point,
    pub button: Option<PointerButton>,
    pub transition: Transition,
}

impl PointerEvent {
    pub fn down(x: i32, y: i32, button: PointerButton) -> Self {
        Self {
            position: Point::new(x, y),
            button: Some(button),
            transition: Transition::Down,
        }
    }

    pub fn up(x: i32, y: i32, button: PointerButton) -> Self {
        Self {
            position: Point::new(x, y),
            button: Some(button),
            transition: Transition::Up,
        }
    }

    pub fn moved(x: i32, y: i32) -> Self {
        Self {
            position: Point::new(x, y),
            button: None,
            transition: Transition::Move,
        }
    }

    /// Move with `button` held
    pub fn dragged(x: i32, y: i32, button: PointerButton) -> Self {
        Self {
            button: Some(button),
            ..Self::moved(x, y)
        }
    }

    pub fn is_down(&self) -> bool {
        self.transition == Transition::Down
    }

    pub fn is_up(&self) -> bool {
        self.transition == Transition::Up
    }

    pub fn is_move(&self) -> bool {
        self.transition == Transition::Move
    }

    pub fn is_left(&self) -> bool {
        self.button == Some(PointerButton::Primary)
    }

    pub fn is_right(&self) -> bool {
        self.button == Some(PointerButton::Secondary)
    }
}

/// Blocking supplier of pointer events; `None` means the stream has ended
pub trait PointerSource {
    fn next_event(&mut self) -> Option<PointerEvent>;
}

impl PointerSource for VecDeque<PointerEvent> {
    fn next_event(&mut self) -> Option<PointerEvent> {
        self.pop_front()
    }
}

/// Converts raw egui input into [`PointerEvent`]s, keeping their order
#[derive(Debug, Default)]
pub struct InputHandler {
    held_button: Option<PointerButton>,
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain this frame's pointer events
    pub fn process_input(&mut self, ctx: &Context) -> Vec<PointerEvent> {
        ctx.input(|input| {
            input
                .events
                .iter()
                .filter_map(|event| self.convert(event))
                .collect()
        })
    }

    fn convert(&mut self, event: &Event) -> Option<PointerEvent> {
        match *event {
            Event::PointerMoved(pos) => {
                if self.last_pointer_pos == Some(pos) {
                    return None;
                }
                self.last_pointer_pos = Some(pos);
                Some(PointerEvent {
                    position: Point::from_pos2(pos),
                    button: self.held_button,
                    transition: Transition::Move,
                })
            }
            Event::PointerButton {
                pos,
                button,
                pressed,
                ..
            } => {
                self.last_pointer_pos = Some(pos);
                let transition = if pressed {
                    self.held_button = Some(button);
                    Transition::Down
                } else {
                    if self.held_button == Some(button) {
                        self.held_button = None;
                    }
                    Transition::Up
                };
                Some(PointerEvent {
                    position: Point::from_pos2(pos),
                    button: Some(button),
                    transition,
                })
            }
            Event::PointerGone => {
                self.last_pointer_pos = None;
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_source_drains_in_order() {
        let mut source: VecDeque<PointerEvent> = VecDeque::from(vec![
            PointerEvent::down(1, 2, PointerButton::Primary),
            PointerEvent::moved(3, 4),
        ]);
        assert!(source.next_event().is_some_and(|e| e.is_down() && e.is_left()));
        assert!(source.next_event().is_some_and(|e| e.is_move()));
        assert!(source.next_event().is_none());
    }

    #[test]
    fn test_converts_drag_sequence() {
        let mut handler = InputHandler::new();
        let events = [
            Event::PointerButton {
                pos: Pos2::new(400.0, 100.0),
                button: PointerButton::Primary,
                pressed: true,
                modifiers: Default::default(),
            },
            Event::PointerMoved(Pos2::new(410.4, 120.6)),
            Event::PointerMoved(Pos2::new(410.4, 120.6)),
            Event::PointerButton {
                pos: Pos2::new(410.4, 120.6),
                button: PointerButton::Primary,
                pressed: false,
                modifiers: Default::default(),
            },
            Event::PointerMoved(Pos2::new(420.0, 120.0)),
        ];
        let converted: Vec<_> = events.iter().filter_map(|e| handler.convert(e)).collect();

        assert_eq!(
            converted,
            vec![
                PointerEvent::down(400, 100, PointerButton::Primary),
                PointerEvent {
                    position: Point::new(410, 121),
                    button: Some(PointerButton::Primary),
                    transition: Transition::Move,
                },
                PointerEvent::up(410, 121, PointerButton::Primary),
                PointerEvent::moved(420, 120),
            ]
        );
    }
}
