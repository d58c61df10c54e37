// Copyright (c) 2026, the sulcus developers
// Licensed under the BSD 3-Clause License

use ndarray::Array3;
use nifti::NiftiHeader;

use crate::constant::CROP_MULTIPLE;

/// Axis-aligned voxel bounding box of the foreground of a brain mask.
///
/// Stored as a minimum corner plus a size per axis, so the far corner
/// `min + size` is one past the last foreground voxel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min: [usize; 3],
    pub size: [usize; 3],
}

impl BoundingBox {
    /// Compute the bounding box of the foreground label in a binary mask
    ///
    /// Returns `None` if the mask contains no foreground voxels.
    ///
    /// # Arguments
    ///
    /// * `mask` - Binary mask volume where foreground voxels are 1
    ///
    /// # Examples
    ///
    /// ```
    /// use ndarray::Array3;
    /// use sulcus_core::crop::BoundingBox;
    ///
    /// let mut mask = Array3::<u8>::zeros((8, 8, 8));
    /// mask[[2, 3, 4]] = 1;
    /// mask[[5, 3, 4]] = 1;
    ///
    /// let bb = BoundingBox::from_mask(&mask).unwrap();
    /// assert_eq!(bb.min, [2, 3, 4]);
    /// assert_eq!(bb.size, [4, 1, 1]);
    /// ```
    pub fn from_mask(mask: &Array3<u8>) -> Option<BoundingBox> {
        let mut min = [usize::MAX; 3];
        let mut max = [0usize; 3];
        let mut found = false;

        for ((i, j, k), &voxel) in mask.indexed_iter() {
            if voxel != 1 {
                continue;
            }

            found = true;

            let index = [i, j, k];
            for axis in 0..3 {
                min[axis] = min[axis].min(index[axis]);
                max[axis] = max[axis].max(index[axis]);
            }
        }

        if !found {
            return None;
        }

        let size = [
            max[0] - min[0] + 1,
            max[1] - min[1] + 1,
            max[2] - min[2] + 1,
        ];

        Some(BoundingBox { min, size })
    }
}

/// Extract the voxel-to-physical affine from a NIfTI header
///
/// Prefers the sform rows when set, falling back to voxel scaling from
/// pixdim. Rows are the x, y, z physical coordinate equations.
fn affine(header: &NiftiHeader) -> [[f64; 4]; 3] {
    if header.sform_code > 0 {
        [
            header.srow_x.map(|v| v as f64),
            header.srow_y.map(|v| v as f64),
            header.srow_z.map(|v| v as f64),
        ]
    } else {
        [
            [header.pixdim[1] as f64, 0.0, 0.0, 0.0],
            [0.0, header.pixdim[2] as f64, 0.0, 0.0],
            [0.0, 0.0, header.pixdim[3] as f64, 0.0],
        ]
    }
}

fn voxel_to_physical(affine: &[[f64; 4]; 3], index: [f64; 3]) -> [f64; 3] {
    [0usize, 1, 2].map(|row| {
        affine[row][0] * index[0]
            + affine[row][1] * index[1]
            + affine[row][2] * index[2]
            + affine[row][3]
    })
}

/// Physical extent of a bounding box, in millimeters per axis
///
/// The min corner and the min + size corner are pushed through the header
/// affine and the absolute per-axis difference is rounded to the nearest
/// integer. Axis lengths are identical between the RAS convention of the
/// NIfTI affine and the LPS convention of the downstream ITK tools, so the
/// affine is applied directly.
///
/// # Arguments
///
/// * `header` - Header of the mask image the bounding box was computed from
/// * `bounding_box` - Voxel bounding box of the mask foreground
pub fn physical_extent(header: &NiftiHeader, bounding_box: &BoundingBox) -> [f64; 3] {
    let affine = affine(header);

    let min = bounding_box.min.map(|v| v as f64);
    let max = [
        (bounding_box.min[0] + bounding_box.size[0]) as f64,
        (bounding_box.min[1] + bounding_box.size[1]) as f64,
        (bounding_box.min[2] + bounding_box.size[2]) as f64,
    ];

    let min_mm = voxel_to_physical(&affine, min);
    let max_mm = voxel_to_physical(&affine, max);

    [0usize, 1, 2].map(|axis| (max_mm[axis] - min_mm[axis]).abs().round())
}

/// The crop window handed to SynthSeg, plus the device routing decision.
///
/// When a mask extent exceeds the requested window on an axis, the window
/// grows by one crop multiple on that axis and execution is pinned to the
/// CPU so the enlarged region cannot exhaust GPU memory. The flag is sticky
/// and the enlargement is applied at most once per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropPlan {
    pub window: [u32; 3],
    pub force_cpu: bool,
}

impl CropPlan {
    pub fn new(window: [u32; 3]) -> CropPlan {
        CropPlan {
            window,
            force_cpu: false,
        }
    }

    /// Enlarge the crop window to better fit a mask extent
    ///
    /// # Arguments
    ///
    /// * `extent` - Physical extent of the mask bounding box per axis, in mm
    ///
    /// # Examples
    ///
    /// ```
    /// use sulcus_core::crop::CropPlan;
    ///
    /// let mut plan = CropPlan::new([192, 256, 192]);
    /// plan.fit_extent([200.0, 250.0, 190.0]);
    ///
    /// assert_eq!(plan.window, [224, 256, 192]);
    /// assert!(plan.force_cpu);
    /// ```
    pub fn fit_extent(&mut self, extent: [f64; 3]) {
        for axis in 0..3 {
            if extent[axis] > self.window[axis] as f64 {
                self.window[axis] += CROP_MULTIPLE;
                self.force_cpu = true;
            }
        }
    }
}

#[cfg(test)]
mod test {

    use super::*;

    fn header_1mm() -> NiftiHeader {
        NiftiHeader {
            sform_code: 1,
            srow_x: [1.0, 0.0, 0.0, -96.0],
            srow_y: [0.0, 1.0, 0.0, -128.0],
            srow_z: [0.0, 0.0, 1.0, -96.0],
            ..NiftiHeader::default()
        }
    }

    fn header_2mm() -> NiftiHeader {
        NiftiHeader {
            sform_code: 1,
            srow_x: [2.0, 0.0, 0.0, 0.0],
            srow_y: [0.0, 2.0, 0.0, 0.0],
            srow_z: [0.0, 0.0, 2.0, 0.0],
            ..NiftiHeader::default()
        }
    }

    #[test]
    fn test_bounding_box_empty_mask() {
        let mask = Array3::<u8>::zeros((16, 16, 16));
        assert!(BoundingBox::from_mask(&mask).is_none());
    }

    #[test]
    fn test_bounding_box_single_voxel() {
        let mut mask = Array3::<u8>::zeros((16, 16, 16));
        mask[[7, 8, 9]] = 1;

        let bb = BoundingBox::from_mask(&mask).unwrap();

        assert_eq!(bb.min, [7, 8, 9]);
        assert_eq!(bb.size, [1, 1, 1]);
    }

    #[test]
    fn test_bounding_box_ignores_other_labels() {
        let mut mask = Array3::<u8>::zeros((16, 16, 16));
        mask[[2, 2, 2]] = 1;
        mask[[12, 12, 12]] = 2;

        let bb = BoundingBox::from_mask(&mask).unwrap();

        assert_eq!(bb.min, [2, 2, 2]);
        assert_eq!(bb.size, [1, 1, 1]);
    }

    #[test]
    fn test_physical_extent_isotropic() {
        let mut mask = Array3::<u8>::zeros((32, 32, 32));
        for i in 4..14 {
            mask[[i, 5, 6]] = 1;
        }

        let bb = BoundingBox::from_mask(&mask).unwrap();
        let extent = physical_extent(&header_1mm(), &bb);

        assert_eq!(extent, [10.0, 1.0, 1.0]);
    }

    #[test]
    fn test_physical_extent_scales_with_spacing() {
        let mut mask = Array3::<u8>::zeros((32, 32, 32));
        for i in 4..14 {
            mask[[i, 5, 6]] = 1;
        }

        let bb = BoundingBox::from_mask(&mask).unwrap();
        let extent = physical_extent(&header_2mm(), &bb);

        assert_eq!(extent, [20.0, 2.0, 2.0]);
    }

    #[test]
    fn test_physical_extent_pixdim_fallback() {
        let header = NiftiHeader {
            sform_code: 0,
            pixdim: [0.0, 0.5, 1.0, 2.0, 0.0, 0.0, 0.0, 0.0],
            ..NiftiHeader::default()
        };

        let bb = BoundingBox {
            min: [0, 0, 0],
            size: [10, 10, 10],
        };

        assert_eq!(physical_extent(&header, &bb), [5.0, 10.0, 20.0]);
    }

    #[test]
    fn test_crop_plan_unchanged_when_mask_fits() {
        let mut plan = CropPlan::new([192, 256, 192]);
        plan.fit_extent([192.0, 200.0, 150.0]);

        assert_eq!(plan.window, [192, 256, 192]);
        assert!(!plan.force_cpu);
    }

    #[test]
    fn test_crop_plan_enlarges_single_axis() {
        let mut plan = CropPlan::new([192, 256, 192]);
        plan.fit_extent([192.0, 257.0, 150.0]);

        assert_eq!(plan.window, [192, 288, 192]);
        assert!(plan.force_cpu);
    }

    #[test]
    fn test_crop_plan_enlarges_every_exceeded_axis() {
        let mut plan = CropPlan::new([192, 256, 192]);
        plan.fit_extent([300.0, 300.0, 150.0]);

        assert_eq!(plan.window, [224, 288, 192]);
        assert!(plan.force_cpu);
    }

    #[test]
    fn test_crop_plan_enlarges_once_even_for_large_extent() {
        let mut plan = CropPlan::new([192, 256, 192]);
        plan.fit_extent([400.0, 200.0, 150.0]);

        assert_eq!(plan.window, [224, 256, 192]);
        assert!(plan.force_cpu);
    }
}
