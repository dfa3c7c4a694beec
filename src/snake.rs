use crate::error::{Result, SnakeError};
use crate::grid::{Coord, Velocity};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Order in which simultaneously pressed directions are tried.
    pub const PRIORITY: [Direction; 4] = [Right, Left, Up, Down];

    pub fn velocity(self) -> Velocity {
        match self {
            Up => Velocity::new(0, -1),
            Down => Velocity::new(0, 1),
            Left => Velocity::new(-1, 0),
            Right => Velocity::new(1, 0),
        }
    }

    pub fn from_velocity(v: Velocity) -> Option<Direction> {
        match (v.dx, v.dy) {
            (0, -1) => Some(Up),
            (0, 1) => Some(Down),
            (-1, 0) => Some(Left),
            (1, 0) => Some(Right),
            _ => None,
        }
    }

    pub fn head_char(self) -> char {
        match self {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

/// Segments of the snake, head first.
///
/// The store may hold more entries than the snake's logical size; callers
/// decide how many of them matter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Body {
    segments: Vec<Coord>,
}

impl Body {
    pub fn new(head: Coord) -> Self {
        Body { segments: vec![head] }
    }

    /// Builds a body from head-first segments.
    pub fn from_segments(segments: Vec<Coord>) -> Self {
        Body { segments }
    }

    pub fn head(&self) -> Result<Coord> {
        self.segments.first().copied().ok_or(SnakeError::EmptyBody)
    }

    pub fn at(&self, index: usize) -> Option<Coord> {
        self.segments.get(index).copied()
    }

    pub fn grow_from_head(&mut self, new_head: Coord) {
        self.segments.insert(0, new_head);
    }

    /// Drops stored segments past `len`.
    pub fn retain(&mut self, len: usize) {
        self.segments.truncate(len);
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The first `size` segments, the part of the body that is drawn and hit.
    pub fn visible(&self, size: usize) -> &[Coord] {
        &self.segments[..size.min(self.segments.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_from_head_shifts_old_head_back() {
        let mut body = Body::new(Coord::new(2, 2));
        body.grow_from_head(Coord::new(3, 2));

        assert_eq!(body.len(), 2);
        assert_eq!(body.head(), Ok(Coord::new(3, 2)));
        assert_eq!(body.at(1), Some(Coord::new(2, 2)));
    }

    #[test]
    fn empty_body_has_no_head() {
        let body = Body::default();
        assert_eq!(body.head(), Err(SnakeError::EmptyBody));
        assert_eq!(body.at(0), None);
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        let body = Body::new(Coord::new(0, 0));
        assert_eq!(body.at(1), None);
        assert_eq!(body.visible(5).len(), 1);
    }

    #[test]
    fn retain_keeps_the_front() {
        let mut body = Body::from_segments(vec![
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(2, 0),
        ]);
        body.retain(2);
        assert_eq!(body.visible(2), &[Coord::new(0, 0), Coord::new(1, 0)]);
    }

    #[test]
    fn directions_map_to_unit_velocities() {
        for dir in Direction::PRIORITY.iter() {
            assert_eq!(Direction::from_velocity(dir.velocity()), Some(*dir));
        }
        assert_eq!(Direction::from_velocity(Velocity::ZERO), None);
    }
}
