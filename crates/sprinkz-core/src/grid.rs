use sprinkz_types::{Coordinate, Reading};

pub const GRID_SIZE: i32 = 16;
/// Offset of the target sub-cell inside a grid cell
pub const SUB_CELL_OFFSET: i32 = 4;

/// Truncating division on purpose: negative inputs do not snap symmetrically
fn align_axis(value: i32) -> i32 {
    (value.wrapping_add(GRID_SIZE / 2) / GRID_SIZE) * GRID_SIZE + SUB_CELL_OFFSET
}

/// Snap x and z to the 4x4 sub-cell of the nearest 16 block grid line; y is kept
pub fn nearest_grid_anchor(pos: Coordinate) -> Coordinate {
    Coordinate {
        x: align_axis(pos.x),
        y: pos.y,
        z: align_axis(pos.z),
    }
}

/// Euclidean distance over x and z only
pub fn planar_distance(a: Coordinate, b: Coordinate) -> f64 {
    let dx = f64::from(b.x) - f64::from(a.x);
    let dz = f64::from(b.z) - f64::from(a.z);
    dx.hypot(dz)
}

pub fn reading_for(position: Coordinate) -> Reading {
    let anchor = nearest_grid_anchor(position);
    Reading {
        position,
        anchor,
        distance: planar_distance(position, anchor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_example() {
        let pos = Coordinate::new(10, 5, 10);
        let anchor = nearest_grid_anchor(pos);

        assert_eq!(anchor, Coordinate::new(20, 5, 20));
        assert!((planar_distance(pos, anchor) - 200f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_anchor_is_on_sub_cell() {
        let extremes = [i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX - 8, i32::MAX];
        for v in (-1000..=1000).chain(extremes) {
            let anchor = nearest_grid_anchor(Coordinate::new(v, 0, v));
            assert_eq!(anchor.x.rem_euclid(GRID_SIZE), SUB_CELL_OFFSET, "x for {v}");
            assert_eq!(anchor.z.rem_euclid(GRID_SIZE), SUB_CELL_OFFSET, "z for {v}");
        }
    }

    #[test]
    fn test_anchor_idempotent_for_non_negative() {
        for v in 0..=1000 {
            let once = nearest_grid_anchor(Coordinate::new(v, 7, v));
            assert_eq!(nearest_grid_anchor(once), once, "for {v}");
        }
    }

    #[test]
    fn test_negative_axis_truncates_toward_zero() {
        // -9 + 8 = -1 truncates to cell 0, not -1
        assert_eq!(align_axis(-9), 4);
        assert_eq!(align_axis(9), 20);
        assert_eq!(align_axis(-24), -12);
        assert_eq!(align_axis(-30), -12);
        assert_eq!(align_axis(-40), -28);
    }

    #[test]
    fn test_negative_anchor_not_idempotent() {
        let once = nearest_grid_anchor(Coordinate::new(-30, 0, -30));
        assert_eq!(once, Coordinate::new(-12, 0, -12));

        let twice = nearest_grid_anchor(once);
        assert_eq!(twice, Coordinate::new(4, 0, 4));
    }

    #[test]
    fn test_y_passes_through() {
        let anchor = nearest_grid_anchor(Coordinate::new(3, -61, 3));
        assert_eq!(anchor.y, -61);
    }

    #[test]
    fn test_distance_symmetric_and_ignores_y() {
        let pairs = [
            (Coordinate::new(0, 0, 0), Coordinate::new(3, 100, 4)),
            (Coordinate::new(-7, 5, 12), Coordinate::new(20, -5, -20)),
            (
                Coordinate::new(i32::MIN, 0, i32::MAX),
                Coordinate::new(i32::MAX, 0, i32::MIN),
            ),
        ];
        for (a, b) in pairs {
            assert_eq!(planar_distance(a, b), planar_distance(b, a));
            assert_eq!(planar_distance(a, a), 0.0);
        }
        assert_eq!(planar_distance(pairs[0].0, pairs[0].1), 5.0);
    }

    #[test]
    fn test_reading_for() {
        let reading = reading_for(Coordinate::new(100, 64, -32));

        assert_eq!(reading.anchor, Coordinate::new(100, 64, -12));
        assert_eq!(reading.distance, 20.0);
        assert_eq!(reading.distance_blocks(), 20);
    }
}
