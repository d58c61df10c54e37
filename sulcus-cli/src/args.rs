// Copyright (c) 2026, the sulcus developers
// Licensed under the BSD 3-Clause License

use clap::Parser;

use sulcus_core::constant::{DEFAULT_CROP, DEFAULT_MASK_PAD};

const LONG_ABOUT: &str = "\
Wrapper for brain segmentation with SynthSeg.

The input image is resampled to 1mm isotropic resolution with b-spline
interpolation before segmentation. It is recommended to provide a brain
mask, in which case the image is cropped about the mask bounding box before
resampling, which ensures the SynthSeg region of interest contains the
brain. If the mask is larger than the crop parameters, the crop is enlarged
and SynthSeg is switched to CPU mode to avoid running out of GPU memory.

Outputs are written to the output prefix with these suffixes:

  SynthSegInput.nii.gz - resampled (and optionally cropped) SynthSeg input
  SynthSeg.nii.gz      - SynthSeg label image, in SynthSegInput space

Optional output suffixes:

  Posteriors.nii.gz             - label posteriors, SynthSegInput space
  PosteriorsOrig.nii.gz         - label posteriors, original space
  QC.csv                        - SynthSeg QC metrics
  Volumes.csv                   - label volumes, SynthSegInput space
  SynthSegOrig.nii.gz           - label image, original space
  CorticalParcellationOrig.nii.gz - cortical parcellation, original space
  SynthSegToAntsCT.nii.gz       - labels remapped for antsct
  AntsctPosteriors{1..6}.nii.gz - per-category posteriors for antsct";

#[derive(Debug, Parser)]
#[command(name = "sulcus")]
#[command(version, about = "Brain segmentation with SynthSeg.", long_about = LONG_ABOUT)]
pub struct Cli {
    #[arg(long, help = "Input structural image.", required = true)]
    pub input: Option<String>,

    #[arg(long, help = "Output prefix.", required = true)]
    pub output: Option<String>,

    #[arg(long, help = "Brain mask about which to crop the input image.")]
    pub mask: Option<String>,

    #[arg(
        long,
        help = "Padding around brain mask, in voxels.",
        default_value_t = DEFAULT_MASK_PAD
    )]
    pub mask_pad: u32,

    #[arg(
        long,
        help = "Resample the output images to the original space. This is a post-processing step; all QC and volume measures are computed in the 1mm space."
    )]
    pub resample_orig: bool,

    #[arg(
        long,
        help = "Output results in antsct format (implies --resample-orig and --post)."
    )]
    pub antsct: bool,

    #[arg(long, help = "Use CPU instead of GPU, even if GPU is available.")]
    pub cpu: bool,

    #[arg(
        long,
        num_args = 3,
        value_names = ["X", "Y", "Z"],
        help = "Crop parameters, must be multiples of 32. If increasing beyond the default, you may need to add --cpu to avoid running out of memory.",
        default_values_t = DEFAULT_CROP
    )]
    pub crop: Vec<u32>,

    #[arg(
        long,
        help = "Output a multi-component image containing label posterior probabilities."
    )]
    pub post: bool,

    #[arg(long, help = "Do cortical parcellation.")]
    pub parc: bool,

    #[arg(long, help = "Output a CSV file containing QC measures.")]
    pub qc: bool,

    #[arg(
        long,
        help = "Use robust fitting for low-resolution or other challenging data."
    )]
    pub robust: bool,

    #[arg(long, help = "Output a CSV file containing label volumes.")]
    pub vol: bool,
}

impl Cli {
    /// Posteriors are produced when requested directly or implied by --antsct
    pub fn wants_posteriors(&self) -> bool {
        self.post || self.antsct
    }

    /// Original-space outputs are produced when requested directly or
    /// implied by --antsct
    pub fn wants_original_space(&self) -> bool {
        self.resample_orig || self.antsct
    }
}
