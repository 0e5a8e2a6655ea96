use crate::braille::BrailleCanvas;
use glam::DVec2;

/// One polygon ring as consecutive points; the closing edge back to the
/// first point is implicit. A polygon is a slice of rings where the first
/// is the outer boundary and the rest are holes.
pub type Ring = Vec<DVec2>;

/// Draw a line using Bresenham's algorithm
pub fn draw_line(canvas: &mut BrailleCanvas, x0: i32, y0: i32, x1: i32, y1: i32) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        canvas.set_pixel_signed(x, y);

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;

        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }

        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

/// Outline a pixel-space ring, closing it back to its first point.
/// Segments fully outside the canvas are skipped.
pub fn draw_ring(canvas: &mut BrailleCanvas, ring: &[DVec2]) {
    if ring.len() < 2 {
        return;
    }
    let width_px = canvas.width() as f64 * 2.0;
    let height_px = canvas.height() as f64 * 4.0;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];
        if a.x.max(b.x) < 0.0
            || a.x.min(b.x) >= width_px
            || a.y.max(b.y) < 0.0
            || a.y.min(b.y) >= height_px
        {
            continue;
        }
        draw_line(
            canvas,
            a.x.round() as i32,
            a.y.round() as i32,
            b.x.round() as i32,
            b.y.round() as i32,
        );
    }
}

/// Fill a pixel-space polygon with even-odd scanlines. All rings
/// contribute crossings, so holes stay unfilled without any winding
/// bookkeeping.
///
/// Each pixel row is sampled at its vertical center (`y + 0.5`) and a
/// pixel is filled when its own center falls inside a crossing pair.
pub fn fill_rings(canvas: &mut BrailleCanvas, rings: &[Ring]) {
    let Some((min, max)) = rings_bbox(rings) else {
        return;
    };
    let width_px = canvas.width() as f64 * 2.0;
    let height_px = canvas.height() as i32 * 4;

    let y_start = (min.y.floor() as i32).max(0);
    let y_end = (max.y.ceil() as i32).min(height_px - 1);

    let mut crossings: Vec<f64> = Vec::new();
    for y in y_start..=y_end {
        let yc = y as f64 + 0.5;
        crossings.clear();
        for ring in rings {
            if ring.len() < 3 {
                continue;
            }
            for i in 0..ring.len() {
                let a = ring[i];
                let b = ring[(i + 1) % ring.len()];
                // Half-open span test so shared vertices count once
                if (a.y <= yc) != (b.y <= yc) {
                    let t = (yc - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }
        }
        crossings.sort_unstable_by(f64::total_cmp);
        for pair in crossings.chunks_exact(2) {
            let x0 = pair[0].max(0.0);
            let x1 = pair[1].min(width_px);
            if x1 <= x0 {
                continue;
            }
            let first = ((x0 - 0.5).ceil() as i32).max(0);
            let last = (x1 - 0.5).floor() as i32;
            if last < first {
                continue;
            }
            canvas.fill_span(first as usize, last as usize, y as usize);
        }
    }
}

/// Even-odd point-in-polygon over all rings, in the rings' own
/// coordinate space. A point inside a hole ring is outside the polygon.
pub fn point_in_rings(point: DVec2, rings: &[Ring]) -> bool {
    let mut inside = false;
    for ring in rings {
        if ring.len() < 3 {
            continue;
        }
        for i in 0..ring.len() {
            let a = ring[i];
            let b = ring[(i + 1) % ring.len()];
            if (a.y <= point.y) != (b.y <= point.y) {
                let t = (point.y - a.y) / (b.y - a.y);
                if point.x < a.x + t * (b.x - a.x) {
                    inside = !inside;
                }
            }
        }
    }
    inside
}

/// Componentwise bounding box over every point of every ring.
pub fn rings_bbox(rings: &[Ring]) -> Option<(DVec2, DVec2)> {
    let mut min = DVec2::splat(f64::INFINITY);
    let mut max = DVec2::splat(f64::NEG_INFINITY);
    for p in rings.iter().flatten() {
        min = min.min(*p);
        max = max.max(*p);
    }
    (min.x <= max.x).then_some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Ring {
        vec![
            DVec2::new(x0, y0),
            DVec2::new(x1, y0),
            DVec2::new(x1, y1),
            DVec2::new(x0, y1),
        ]
    }

    #[test]
    fn filled_square_covers_its_interior() {
        let mut canvas = BrailleCanvas::new(4, 2);
        fill_rings(&mut canvas, &[square(0.0, 0.0, 8.0, 8.0)]);
        assert_eq!(canvas.to_string(), "⣿⣿⣿⣿\n⣿⣿⣿⣿");
    }

    #[test]
    fn hole_ring_stays_empty() {
        let mut canvas = BrailleCanvas::new(4, 2);
        let rings = [square(0.0, 0.0, 8.0, 8.0), square(2.0, 2.0, 6.0, 6.0)];
        fill_rings(&mut canvas, &rings);
        assert_eq!(canvas.to_string(), "⣿⠛⠛⣿\n⣿⣤⣤⣿");
    }

    #[test]
    fn ring_outline_traces_the_perimeter() {
        let mut canvas = BrailleCanvas::new(4, 2);
        let ring = square(0.0, 0.0, 7.0, 7.0);
        draw_ring(&mut canvas, &ring);
        assert_eq!(canvas.to_string(), "⡏⠉⠉⢹\n⣇⣀⣀⣸");
    }

    #[test]
    fn offscreen_fill_is_clipped_to_the_canvas() {
        let mut canvas = BrailleCanvas::new(2, 1);
        fill_rings(&mut canvas, &[square(-100.0, -100.0, 100.0, 100.0)]);
        assert_eq!(canvas.to_string(), "⣿⣿");
    }

    #[test]
    fn point_in_rings_respects_holes() {
        let rings = [square(0.0, 0.0, 8.0, 8.0), square(2.0, 2.0, 6.0, 6.0)];
        assert!(point_in_rings(DVec2::new(1.0, 4.0), &rings));
        assert!(!point_in_rings(DVec2::new(4.0, 4.0), &rings));
        assert!(!point_in_rings(DVec2::new(9.0, 4.0), &rings));
    }

    #[test]
    fn bbox_spans_all_rings() {
        let rings = [square(2.0, 3.0, 5.0, 7.0), square(-1.0, 4.0, 3.0, 6.0)];
        let (min, max) = rings_bbox(&rings).unwrap();
        assert_eq!((min.x, min.y), (-1.0, 3.0));
        assert_eq!((max.x, max.y), (5.0, 7.0));
        assert!(rings_bbox(&[]).is_none());
    }

    #[test]
    fn degenerate_rings_are_ignored() {
        let mut canvas = BrailleCanvas::new(2, 1);
        let stub: Ring = vec![DVec2::new(0.0, 0.0), DVec2::new(4.0, 4.0)];
        fill_rings(&mut canvas, &[stub.clone()]);
        assert_eq!(canvas.to_string(), "⠀⠀");
        assert!(!point_in_rings(DVec2::new(1.0, 1.0), &[stub]));
    }
}
