//! Box-box overlap test

use crate::types::BoundingBox;

/// True when the interiors of two boxes intersect.
///
/// Boxes that only share an edge do not overlap; a single unit of
/// penetration on both axes does.
#[must_use]
pub fn boxes_overlap(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.left < b.right && b.left < a.right &&
    a.top < b.bottom && b.top < a.bottom
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = BoundingBox::from_origin(0, 0, 10, 10);
        let right = BoundingBox::from_origin(10, 0, 10, 10);
        let below = BoundingBox::from_origin(0, 10, 10, 10);
        assert!(!boxes_overlap(&a, &right));
        assert!(!boxes_overlap(&a, &below));
    }

    #[test]
    fn one_unit_overlap_counts() {
        let a = BoundingBox::from_origin(0, 0, 10, 10);
        let b = BoundingBox::from_origin(9, 9, 10, 10);
        assert!(boxes_overlap(&a, &b));
        assert!(boxes_overlap(&b, &a));
    }

    #[test]
    fn inset_can_clear_a_graze() {
        let a = BoundingBox::from_origin(0, 0, 10, 10);
        let b = BoundingBox::from_origin(9, 0, 10, 10);
        assert!(boxes_overlap(&a, &b));
        assert!(!boxes_overlap(&a.inset(1), &b));
    }
}
