// Copyright (c) 2026, the sulcus developers
// Licensed under the BSD 3-Clause License

use sulcus_core::constant::{
    ANTSCT_LABELS_SUFFIX, ANTSCT_POSTERIORS_PREFIX, POSTERIORS_ORIG_SUFFIX,
    SYNTHSEG_ORIG_SUFFIX,
};
use sulcus_core::error::SulcusError;
use sulcus_core::im::{self, LabelVolume, PosteriorVolume};
use sulcus_core::remap;
use sulcus_core::ut::track;

use super::Resolved;

/// Remap original-space outputs into the antsct labeling scheme
///
/// Writes the remapped label map plus one posterior image per antsct
/// category, all carrying the geometry of the original-space label map.
pub fn run(resolved: &Resolved) -> Result<(), SulcusError> {
    track::log("Outputting in antsct format");

    let labels = LabelVolume::open(resolved.output(SYNTHSEG_ORIG_SUFFIX))?;
    let remapped = remap::remap_labels(labels.data());

    im::save_labels(
        resolved.output(ANTSCT_LABELS_SUFFIX),
        &remapped,
        labels.header(),
    )?;

    let posteriors = PosteriorVolume::open(resolved.output(POSTERIORS_ORIG_SUFFIX))?;
    let categories = remap::collapse_posteriors(posteriors.data())?;

    for (index, category) in categories.iter().enumerate() {
        let suffix = format!("{}{}.nii.gz", ANTSCT_POSTERIORS_PREFIX, index + 1);

        im::save_probability(resolved.output(&suffix), category, labels.header())?;
    }

    Ok(())
}
