// Copyright (c) 2026, the sulcus developers
// Licensed under the BSD 3-Clause License

use std::fs;

use sulcus_core::constant::{EXTRACT_REGION_TOOL, RESAMPLE_TOOL, SYNTHSEG_INPUT_SUFFIX};
use sulcus_core::crop::{BoundingBox, CropPlan, physical_extent};
use sulcus_core::error::SulcusError;
use sulcus_core::im::MaskVolume;
use sulcus_core::ut::track;

use super::{Resolved, tools};

/// Produce the working image for SynthSeg and the final crop plan
///
/// With a mask, the input is cropped to the mask bounding box plus padding
/// and the crop window is checked against the mask extent; without one, the
/// input is copied verbatim. Either way the working image is then resampled
/// in place to 1mm isotropic spacing with b-spline interpolation.
pub fn run(
    resolved: &Resolved,
    window: [u32; 3],
    mask_pad: u32,
) -> Result<CropPlan, SulcusError> {
    let synthseg_input = resolved.output(SYNTHSEG_INPUT_SUFFIX);
    let mut plan = CropPlan::new(window);

    if let Some(mask_path) = &resolved.mask {
        track::log("Cropping input image around mask");

        tools::run(
            EXTRACT_REGION_TOOL,
            [
                "3".to_string(),
                resolved.input.display().to_string(),
                synthseg_input.display().to_string(),
                mask_path.display().to_string(),
                "1".to_string(),
                mask_pad.to_string(),
            ],
        )?;

        let mask = MaskVolume::open(mask_path)?;

        if let Some(bounding_box) = BoundingBox::from_mask(mask.data()) {
            plan.fit_extent(physical_extent(mask.header(), &bounding_box));
        }

        if plan.force_cpu {
            track::log(
                "WARNING: brain mask extent is larger than cropped region for SynthSeg, \
                 using CPU to avoid running out of memory",
            );
        }
    } else {
        fs::copy(&resolved.input, &synthseg_input).map_err(|err| {
            SulcusError::OtherError(format!("Could not copy input image: {}", err))
        })?;
    }

    tools::run(
        RESAMPLE_TOOL,
        [
            "3".to_string(),
            synthseg_input.display().to_string(),
            synthseg_input.display().to_string(),
            "1x1x1".to_string(),
            "0".to_string(),
            "4".to_string(),
        ],
    )?;

    track::log(&format!(
        "Input image: {} resampled to {}",
        resolved.input.display(),
        synthseg_input.display()
    ));

    Ok(plan)
}
