use crate::profile::ScrollAction;
use crate::{Error, Result};

/// Motion along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    /// Up or left
    Backward,
    #[default]
    Still,
    /// Down or right
    Forward,
}

impl Motion {
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Backward => -1,
            Self::Still => 0,
            Self::Forward => 1,
        }
    }
}

impl TryFrom<i32> for Motion {
    type Error = i32;

    fn try_from(value: i32) -> std::result::Result<Self, i32> {
        match value {
            -1 => Ok(Self::Backward),
            0 => Ok(Self::Still),
            1 => Ok(Self::Forward),
            other => Err(other),
        }
    }
}

/// Direction of an easing sequence on both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Direction {
    pub x: Motion,
    pub y: Motion,
}

impl Direction {
    /// Build a direction from raw axis values in {-1, 0, 1}
    ///
    /// At least one axis must be moving.
    pub fn new(x: i32, y: i32) -> Result<Self> {
        let invalid = || Error::InvalidDirection { x, y };
        let direction = Self {
            x: Motion::try_from(x).map_err(|_| invalid())?,
            y: Motion::try_from(y).map_err(|_| invalid())?,
        };
        if direction.is_still() {
            return Err(invalid());
        }
        Ok(direction)
    }

    pub fn is_still(&self) -> bool {
        self.x == Motion::Still && self.y == Motion::Still
    }

    /// Scroll actions fired by one step, vertical before horizontal
    pub fn scroll_actions(self) -> impl Iterator<Item = ScrollAction> {
        let vertical = match self.y {
            Motion::Backward => Some(ScrollAction::Up),
            Motion::Forward => Some(ScrollAction::Down),
            Motion::Still => None,
        };
        let horizontal = match self.x {
            Motion::Backward => Some(ScrollAction::Left),
            Motion::Forward => Some(ScrollAction::Right),
            Motion::Still => None,
        };
        vertical.into_iter().chain(horizontal)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x.as_i32(), self.y.as_i32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_maps_to_actions() {
        let cases = [
            ((0, -1), vec![ScrollAction::Up]),
            ((0, 1), vec![ScrollAction::Down]),
            ((-1, 0), vec![ScrollAction::Left]),
            ((1, 0), vec![ScrollAction::Right]),
            ((1, 1), vec![ScrollAction::Down, ScrollAction::Right]),
            ((-1, -1), vec![ScrollAction::Up, ScrollAction::Left]),
        ];
        for ((x, y), expected) in cases {
            let direction = Direction::new(x, y).unwrap();
            assert_eq!(direction.scroll_actions().collect::<Vec<_>>(), expected, "({x}, {y})");
        }
    }

    #[test]
    fn test_direction_rejects_still_and_out_of_range() {
        assert!(matches!(
            Direction::new(0, 0),
            Err(Error::InvalidDirection { x: 0, y: 0 })
        ));
        assert!(matches!(
            Direction::new(2, 0),
            Err(Error::InvalidDirection { x: 2, y: 0 })
        ));
        assert!(Direction::new(0, -3).is_err());
    }

    #[test]
    fn test_motion_roundtrip() {
        for value in [-1, 0, 1] {
            assert_eq!(Motion::try_from(value).unwrap().as_i32(), value);
        }
        assert_eq!(Motion::try_from(5), Err(5));
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::new(1, 0).unwrap().to_string(), "(1, 0)");
    }
}
