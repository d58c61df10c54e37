// Copyright (c) 2026, the sulcus developers
// Licensed under the BSD 3-Clause License

// Output file suffixes, appended directly to the user-supplied output prefix
pub const SYNTHSEG_INPUT_SUFFIX: &str = "SynthSegInput.nii.gz";
pub const SYNTHSEG_SUFFIX: &str = "SynthSeg.nii.gz";
pub const POSTERIORS_SUFFIX: &str = "Posteriors.nii.gz";
pub const QC_SUFFIX: &str = "QC.csv";
pub const VOLUMES_SUFFIX: &str = "Volumes.csv";
pub const SYNTHSEG_ORIG_SUFFIX: &str = "SynthSegOrig.nii.gz";
pub const POSTERIORS_ORIG_SUFFIX: &str = "PosteriorsOrig.nii.gz";
pub const PARCELLATION_SUFFIX: &str = "CorticalParcellation.nii.gz";
pub const PARCELLATION_ORIG_SUFFIX: &str = "CorticalParcellationOrig.nii.gz";
pub const ANTSCT_LABELS_SUFFIX: &str = "SynthSegToAntsCT.nii.gz";
pub const ANTSCT_POSTERIORS_PREFIX: &str = "AntsctPosteriors";

// SynthSeg crop windows must stay multiples of 32 voxels
pub const DEFAULT_CROP: [u32; 3] = [192, 256, 192];
pub const CROP_MULTIPLE: u32 = 32;
pub const DEFAULT_MASK_PAD: u32 = 32;

// External executables resolved on PATH
pub const EXTRACT_REGION_TOOL: &str = "ExtractRegionFromImageByMask";
pub const RESAMPLE_TOOL: &str = "ResampleImage";
pub const APPLY_TRANSFORMS_TOOL: &str = "antsApplyTransforms";
pub const PYTHON: &str = "python";

// Default SynthSeg entry point inside the container, overridable via the
// environment for non-container installs
pub const SYNTHSEG_SCRIPT: &str = "/opt/SynthSeg/scripts/commands/SynthSeg_predict.py";
pub const SYNTHSEG_SCRIPT_ENV: &str = "SULCUS_SYNTHSEG_SCRIPT";

// Number of tissue categories in the antsct labeling scheme
pub const ANTSCT_CATEGORIES: usize = 6;

// SynthSeg label to antsct category. Entry order matches the channel order
// of the SynthSeg posterior image, background first.
pub const SYNTHSEG_TO_ANTSCT: [(i16, i16); 33] = [
    (0, 0),  // background
    (2, 3),  // left cerebral white matter
    (3, 2),  // left cerebral cortex
    (4, 1),  // left lateral ventricle
    (5, 1),  // left inferior lateral ventricle
    (7, 6),  // left cerebellum white matter
    (8, 6),  // left cerebellum cortex
    (10, 4), // left thalamus
    (11, 4), // left caudate
    (12, 4), // left putamen
    (13, 4), // left pallidum
    (14, 1), // 3rd ventricle
    (15, 1), // 4th ventricle
    (16, 5), // brain-stem
    (17, 4), // left hippocampus
    (18, 4), // left amygdala
    (24, 1), // CSF
    (26, 4), // left accumbens area
    (28, 4), // left ventral DC
    (41, 3), // right cerebral white matter
    (42, 2), // right cerebral cortex
    (43, 1), // right lateral ventricle
    (44, 1), // right inferior lateral ventricle
    (46, 6), // right cerebellum white matter
    (47, 6), // right cerebellum cortex
    (49, 4), // right thalamus
    (50, 4), // right caudate
    (51, 4), // right putamen
    (52, 4), // right pallidum
    (53, 4), // right hippocampus
    (54, 4), // right amygdala
    (58, 4), // right accumbens area
    (60, 4), // right ventral DC
];
