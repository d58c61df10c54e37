// Copyright (c) 2026, the sulcus developers
// Licensed under the BSD 3-Clause License

use sulcus_core::constant::{
    APPLY_TRANSFORMS_TOOL, PARCELLATION_ORIG_SUFFIX, PARCELLATION_SUFFIX,
    POSTERIORS_ORIG_SUFFIX, POSTERIORS_SUFFIX, SYNTHSEG_ORIG_SUFFIX, SYNTHSEG_SUFFIX,
};
use sulcus_core::error::SulcusError;
use sulcus_core::ut::track;

use crate::args::Cli;

use super::{Resolved, tools};

/// Resample SynthSeg outputs from the working space back to original space
///
/// An identity spatial transform is used throughout; the working image was
/// derived from the original purely by crop and resample, so the geometric
/// headers of the two spaces already correspond. Label maps use GenericLabel
/// interpolation, posteriors are resampled per component.
pub fn run(resolved: &Resolved, cli: &Cli) -> Result<(), SulcusError> {
    track::log("Resampling output to original space");

    apply_transforms(resolved, SYNTHSEG_SUFFIX, SYNTHSEG_ORIG_SUFFIX, true, false)?;

    if cli.wants_posteriors() {
        apply_transforms(
            resolved,
            POSTERIORS_SUFFIX,
            POSTERIORS_ORIG_SUFFIX,
            false,
            true,
        )?;
    }

    if cli.parc {
        apply_transforms(
            resolved,
            PARCELLATION_SUFFIX,
            PARCELLATION_ORIG_SUFFIX,
            true,
            false,
        )?;
    }

    Ok(())
}

fn apply_transforms(
    resolved: &Resolved,
    input_suffix: &str,
    output_suffix: &str,
    label_interpolation: bool,
    multi_component: bool,
) -> Result<(), SulcusError> {
    let mut args = vec!["-d".to_string(), "3".to_string()];

    if multi_component {
        args.push("-e".to_string());
        args.push("3".to_string());
    }

    args.extend([
        "-i".to_string(),
        resolved.output(input_suffix).display().to_string(),
        "-o".to_string(),
        resolved.output(output_suffix).display().to_string(),
        "-t".to_string(),
        "Identity".to_string(),
        "-r".to_string(),
        resolved.input.display().to_string(),
    ]);

    if label_interpolation {
        args.push("-n".to_string());
        args.push("GenericLabel".to_string());
    }

    args.push("--verbose".to_string());

    tools::run(APPLY_TRANSFORMS_TOOL, args)
}
