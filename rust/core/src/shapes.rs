// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Digital shapes painted into labeled images.
//!
//! Every painter clips to the image domain and returns the number of voxels
//! it relabeled.

use crate::image::LabeledImage;
use crate::space::{inf, norm1, norm2_squared, sup, Voxel};

/// Labels every voxel of `image` for which `inside` holds.
pub fn shaper<L: Clone>(
    image: &mut LabeledImage<L>,
    label: L,
    inside: impl FnMut(&Voxel) -> bool,
) -> usize {
    image.relabel_where(label, inside)
}

/// Labels the axis-aligned box between `lower` and `upper` (inclusive).
pub fn fill_box<L: Clone>(
    image: &mut LabeledImage<L>,
    lower: &Voxel,
    upper: &Voxel,
    label: L,
) -> usize {
    let (lo, hi) = (inf(lower, upper), sup(lower, upper));
    shaper(image, label, |v| {
        lo.x <= v.x && v.x <= hi.x && lo.y <= v.y && v.y <= hi.y && lo.z <= v.z && v.z <= hi.z
    })
}

/// Labels the digital L1 ball (octahedron) of the given radius.
pub fn add_norm1_ball<L: Clone>(
    image: &mut LabeledImage<L>,
    center: &Voxel,
    radius: i64,
    label: L,
) -> usize {
    shaper(image, label, |v| norm1(&(*v - *center)) <= radius)
}

/// Labels the digital Euclidean ball of the given radius.
pub fn add_norm2_ball<L: Clone>(
    image: &mut LabeledImage<L>,
    center: &Voxel,
    radius: i64,
    label: L,
) -> usize {
    shaper(image, label, |v| norm2_squared(&(*v - *center)) <= radius * radius)
}

/// Resets the L1 ball to `background`.
pub fn remove_norm1_ball<L: Clone>(
    image: &mut LabeledImage<L>,
    center: &Voxel,
    radius: i64,
    background: L,
) -> usize {
    add_norm1_ball(image, center, radius, background)
}

/// Resets the Euclidean ball to `background`.
pub fn remove_norm2_ball<L: Clone>(
    image: &mut LabeledImage<L>,
    center: &Voxel,
    radius: i64,
    background: L,
) -> usize {
    add_norm2_ball(image, center, radius, background)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Domain;
    use nalgebra::Point3;

    fn blank(n: usize) -> LabeledImage<u8> {
        LabeledImage::new(Domain::from_size(n, n, n).unwrap(), 0)
    }

    #[test]
    fn norm1_ball_of_radius_one_is_seven_voxels() {
        let mut image = blank(5);
        let painted = add_norm1_ball(&mut image, &Point3::new(2, 2, 2), 1, 1);
        assert_eq!(painted, 7);
        assert_eq!(image.labels().iter().filter(|&&l| l == 1).count(), 7);
    }

    #[test]
    fn norm2_ball_contains_norm1_ball() {
        let mut image = blank(7);
        let center = Point3::new(3, 3, 3);
        let n2 = add_norm2_ball(&mut image, &center, 2, 1);
        let n1 = add_norm1_ball(&mut blank(7), &center, 2, 1);
        assert!(n2 >= n1);
        // Radius-2 Euclidean ball: 1 + 6 + 12 + 8 + 6 = 33 voxels.
        assert_eq!(n2, 33);
    }

    #[test]
    fn remove_ball_restores_background() {
        let mut image = blank(5);
        let center = Point3::new(2, 2, 2);
        add_norm2_ball(&mut image, &center, 2, 3);
        remove_norm2_ball(&mut image, &center, 1, 0);
        assert_eq!(image.get(&center), Some(&0));
        assert_eq!(image.get(&Point3::new(4, 2, 2)), Some(&3));
    }

    #[test]
    fn shapes_clip_to_domain() {
        let mut image = blank(2);
        let painted = fill_box(&mut image, &Point3::new(1, 1, 1), &Point3::new(-3, 0, 5), 9);
        // x in [-3, 1] ∩ [0, 1], y in [0, 1], z in [1, 5] ∩ [0, 1].
        assert_eq!(painted, 4);
    }
}
