//! Plain data types making up the simulated world.
//!
//! All coordinates are integer logical units with the origin at the top-left
//! corner and y growing downwards.

use crate::error::PhysicsError;

/// The controllable bird.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub vel_y: i32,
    /// Set for the single frame following a flap; suppresses gravity.
    pub flapped: bool,
}

impl Player {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y, vel_y: 0, flapped: false }
    }

    /// Bounding box of a `width`×`height` sprite at the player position.
    #[must_use]
    pub const fn bounds(&self, width: i32, height: i32) -> BoundingBox {
        BoundingBox::from_origin(self.x, self.y, width, height)
    }
}

/// An upper/lower pipe sharing one x position, separated by a vertical gap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PipePair {
    pub x: i32,
    /// Bottom edge of the upper pipe.
    pub gap_top_y: i32,
    /// Top edge of the lower pipe.
    pub gap_bottom_y: i32,
}

impl PipePair {
    #[must_use]
    pub const fn new(x: i32, gap_top_y: i32, gap_bottom_y: i32) -> Self {
        Self { x, gap_top_y, gap_bottom_y }
    }

    #[must_use]
    pub const fn upper_bounds(&self, pipe_width: i32, pipe_height: i32) -> BoundingBox {
        BoundingBox::from_origin(self.x, self.gap_top_y - pipe_height, pipe_width, pipe_height)
    }

    #[must_use]
    pub const fn lower_bounds(&self, pipe_width: i32, pipe_height: i32) -> BoundingBox {
        BoundingBox::from_origin(self.x, self.gap_bottom_y, pipe_width, pipe_height)
    }

    #[must_use]
    pub const fn gap(&self) -> i32 {
        self.gap_bottom_y - self.gap_top_y
    }
}

/// Axis-aligned box, half-open on its right and bottom edges.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BoundingBox {
    #[must_use]
    pub const fn from_origin(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { left: x, top: y, right: x + width, bottom: y + height }
    }

    /// Shrink by `margin` on every side.
    #[must_use]
    pub const fn inset(self, margin: i32) -> Self {
        Self {
            left: self.left + margin,
            top: self.top + margin,
            right: self.right - margin,
            bottom: self.bottom - margin,
        }
    }

    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Discrete action space exposed to policies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Idle = 0,
    Flap = 1,
}

impl Action {
    pub const COUNT: usize = 2;

    /// Map an arg-max index to an action.
    pub fn from_index(index: usize) -> Result<Self, PhysicsError> {
        match index {
            0 => Ok(Self::Idle),
            1 => Ok(Self::Flap),
            _ => Err(PhysicsError::InvalidAction(format!(
                "action index {index} outside 0..{}",
                Self::COUNT
            ))),
        }
    }

    /// Decode a one-hot vector such as `[0, 1]`.
    ///
    /// Anything other than exactly one `1` among `0`s is rejected rather than
    /// read as "no flap".
    pub fn from_one_hot(vector: &[i32]) -> Result<Self, PhysicsError> {
        if vector.len() != Self::COUNT {
            return Err(PhysicsError::InvalidAction(format!(
                "expected {} entries, got {}",
                Self::COUNT,
                vector.len()
            )));
        }
        let mut hot = None;
        for (i, &v) in vector.iter().enumerate() {
            match (v, hot) {
                (0, _) => {}
                (1, None) => hot = Some(i),
                _ => {
                    return Err(PhysicsError::InvalidAction(format!(
                        "{vector:?} is not a one-hot vector"
                    )))
                }
            }
        }
        hot.map_or_else(
            || Err(PhysicsError::InvalidAction(format!("{vector:?} has no active entry"))),
            Self::from_index,
        )
    }

    #[must_use]
    pub const fn is_flap(self) -> bool {
        matches!(self, Self::Flap)
    }
}

impl From<Action> for bool {
    fn from(action: Action) -> Self {
        action.is_flap()
    }
}
