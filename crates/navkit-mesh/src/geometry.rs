use navkit_core::{inverse_lerp, Vec3};

/// Hits closer to the ray origin than this are treated as the origin touching
/// the surface it starts on.
pub(crate) const RAY_EPSILON: f32 = 1e-4;

pub(crate) fn tri_edges(tri: &[Vec3; 3]) -> [(Vec3, Vec3); 3] {
    [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])]
}

pub(crate) fn tri_centroid(tri: &[Vec3; 3]) -> Vec3 {
    (tri[0] + tri[1] + tri[2]) / 3.0
}

pub(crate) fn closest_point_on_segment(p: Vec3, a: Vec3, b: Vec3) -> Vec3 {
    a.lerp(b, inverse_lerp(a, b, p))
}

/// Horizontal normal of the edge `a -> b`, pointing away from `opposite`.
pub(crate) fn outward_edge_normal(a: Vec3, b: Vec3, opposite: Vec3) -> Vec3 {
    let d = b - a;
    let n = Vec3::new(d.z, 0.0, -d.x).normalize_or_zero();
    let inward = opposite - a;
    if n.x * inward.x + n.z * inward.z > 0.0 {
        -n
    } else {
        n
    }
}

/// Closest point to `p` on the (solid) triangle `tri`.
pub(crate) fn closest_point_on_triangle(p: Vec3, tri: &[Vec3; 3]) -> Vec3 {
    let (a, b, c) = (tri[0], tri[1], tri[2]);
    let ab = b - a;
    let ac = c - a;

    let ap = p - a;
    let d1 = ab.dot(ap);
    let d2 = ac.dot(ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return a;
    }

    let bp = p - b;
    let d3 = ab.dot(bp);
    let d4 = ac.dot(bp);
    if d3 >= 0.0 && d4 <= d3 {
        return b;
    }

    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        let v = d1 / (d1 - d3);
        return a + ab * v;
    }

    let cp = p - c;
    let d5 = ab.dot(cp);
    let d6 = ac.dot(cp);
    if d6 >= 0.0 && d5 <= d6 {
        return c;
    }

    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        let w = d2 / (d2 - d6);
        return a + ac * w;
    }

    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return b + (c - b) * w;
    }

    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    a + ab * v + ac * w
}

/// Two-sided ray/triangle intersection. Returns the ray parameter of the hit.
pub(crate) fn ray_triangle_t(origin: Vec3, dir: Vec3, tri: &[Vec3; 3]) -> Option<f32> {
    let e1 = tri[1] - tri[0];
    let e2 = tri[2] - tri[0];
    let pvec = dir.cross(e2);
    let det = e1.dot(pvec);
    if det.abs() <= 1e-8 {
        return None;
    }
    let inv_det = 1.0 / det;

    let tvec = origin - tri[0];
    let u = tvec.dot(pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(e1);
    let v = dir.dot(qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    Some(e2.dot(qvec) * inv_det)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri() -> [Vec3; 3] {
        [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 2.0),
        ]
    }

    #[test]
    fn closest_point_projects_inside_and_clamps_outside() {
        let t = tri();
        let inside = closest_point_on_triangle(Vec3::new(0.5, 3.0, 0.5), &t);
        assert!((inside - Vec3::new(0.5, 0.0, 0.5)).length() < 1e-6);

        let beyond_hypotenuse = closest_point_on_triangle(Vec3::new(2.0, 0.0, 2.0), &t);
        assert!((beyond_hypotenuse - Vec3::new(1.0, 0.0, 1.0)).length() < 1e-6);

        let corner = closest_point_on_triangle(Vec3::new(-1.0, 0.0, -1.0), &t);
        assert_eq!(corner, Vec3::ZERO);
    }

    #[test]
    fn outward_normal_points_away_from_opposite_vertex() {
        let t = tri();
        let n = outward_edge_normal(t[0], t[1], t[2]);
        assert!((n - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
        let n = outward_edge_normal(t[1], t[0], t[2]);
        assert!((n - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn ray_hits_both_faces() {
        let t = tri();
        let down = ray_triangle_t(Vec3::new(0.5, 5.0, 0.5), Vec3::NEG_Y, &t);
        assert_eq!(down, Some(5.0));
        let up = ray_triangle_t(Vec3::new(0.5, -2.0, 0.5), Vec3::Y, &t);
        assert_eq!(up, Some(2.0));
        assert_eq!(ray_triangle_t(Vec3::new(3.0, 5.0, 3.0), Vec3::NEG_Y, &t), None);
    }
}
