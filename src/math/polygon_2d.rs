use crate::geometry::Point;

/// Exact twice-signed area of an integer polygon.
#[must_use]
pub fn doubled_signed_area(points: &[Point]) -> i64 {
    let n = points.len();
    if n < 3 {
        return 0;
    }
    let mut sum = 0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum
}

/// Rotates a closed polygon so it starts at its smallest vertex
/// (leftmost, then topmost). Ensures deterministic comparison of faces
/// traced from different starting edges.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Point]) -> Vec<Point> {
    let Some((best, _)) = points.iter().enumerate().min_by_key(|&(_, p)| *p) else {
        return Vec::new();
    };
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_polygons_have_no_area() {
        assert_eq!(doubled_signed_area(&[Point::new(1, 1), Point::new(2, 2)]), 0);
        assert_eq!(doubled_signed_area(&[]), 0);
    }

    #[test]
    fn doubled_area_sign_follows_winding() {
        let cw = [
            Point::new(0, 0),
            Point::new(4, 0),
            Point::new(4, 3),
            Point::new(0, 3),
        ];
        let mut ccw = cw;
        ccw.reverse();
        assert_eq!(doubled_signed_area(&cw), 24);
        assert_eq!(doubled_signed_area(&ccw), -24);
    }

    #[test]
    fn canonical_start_picks_smallest_vertex() {
        let pts = [Point::new(5, 5), Point::new(0, 9), Point::new(0, 2)];
        let rotated = rotate_to_canonical_start(&pts);
        assert_eq!(rotated, vec![Point::new(0, 2), Point::new(5, 5), Point::new(0, 9)]);
        assert!(rotate_to_canonical_start(&[]).is_empty());
    }
}
