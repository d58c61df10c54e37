// Copyright (c) 2026, the sulcus developers
// Licensed under the BSD 3-Clause License

use std::env;

use sulcus_core::constant::{
    POSTERIORS_SUFFIX, PYTHON, QC_SUFFIX, SYNTHSEG_INPUT_SUFFIX, SYNTHSEG_SCRIPT,
    SYNTHSEG_SCRIPT_ENV, SYNTHSEG_SUFFIX, VOLUMES_SUFFIX,
};
use sulcus_core::crop::CropPlan;
use sulcus_core::error::SulcusError;
use sulcus_core::ut::track;

use crate::args::Cli;

use super::{Resolved, tools};

/// Invoke SynthSeg on the prepared 1mm working image
///
/// The label map at `<prefix>SynthSeg.nii.gz` is always produced; all other
/// outputs are opt-in. The tool's exit status is trusted as-is and no
/// output validation is performed.
pub fn run(resolved: &Resolved, cli: &Cli, plan: &CropPlan) -> Result<(), SulcusError> {
    let synthseg_input = resolved.output(SYNTHSEG_INPUT_SUFFIX);

    let script =
        env::var(SYNTHSEG_SCRIPT_ENV).unwrap_or_else(|_| SYNTHSEG_SCRIPT.to_string());

    let mut args = vec![
        script,
        "--i".to_string(),
        synthseg_input.display().to_string(),
        "--o".to_string(),
        resolved.output(SYNTHSEG_SUFFIX).display().to_string(),
        "--crop".to_string(),
    ];

    args.extend(plan.window.iter().map(|c| c.to_string()));

    if cli.wants_posteriors() {
        args.push("--post".to_string());
        args.push(resolved.output(POSTERIORS_SUFFIX).display().to_string());
    }

    if cli.qc {
        args.push("--qc".to_string());
        args.push(resolved.output(QC_SUFFIX).display().to_string());
    }

    if cli.vol {
        args.push("--vol".to_string());
        args.push(resolved.output(VOLUMES_SUFFIX).display().to_string());
    }

    if cli.parc {
        args.push("--parc".to_string());
    }

    if cli.robust {
        args.push("--robust".to_string());
    }

    if cli.cpu || plan.force_cpu {
        args.push("--cpu".to_string());
    }

    track::log(&format!("Running SynthSeg on {}", synthseg_input.display()));
    track::log(&format!("SynthSeg args: {}", args.join(" ")));

    tools::run(PYTHON, args)
}
