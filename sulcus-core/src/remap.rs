// Copyright (c) 2026, the sulcus developers
// Licensed under the BSD 3-Clause License

use ndarray::{Array3, Array4, Axis};

use crate::constant::{ANTSCT_CATEGORIES, SYNTHSEG_TO_ANTSCT};
use crate::error::SulcusError;

/// Map a single SynthSeg label to its antsct tissue category
///
/// Labels absent from the table map to 0 and become indistinguishable from
/// background, matching the downstream pipeline's expectations.
///
/// # Examples
///
/// ```
/// use sulcus_core::remap::antsct_label;
///
/// assert_eq!(antsct_label(17), 4);
/// assert_eq!(antsct_label(16), 5);
/// assert_eq!(antsct_label(0), 0);
/// ```
pub fn antsct_label(label: i16) -> i16 {
    SYNTHSEG_TO_ANTSCT
        .iter()
        .find(|(synthseg, _)| *synthseg == label)
        .map(|(_, antsct)| *antsct)
        .unwrap_or(0)
}

/// Rewrite a SynthSeg label volume into the antsct labeling scheme
///
/// # Arguments
///
/// * `labels` - SynthSeg label map in original space
pub fn remap_labels(labels: &Array3<i16>) -> Array3<i16> {
    labels.mapv(antsct_label)
}

/// Collapse per-label posterior channels into the six antsct categories
///
/// Channel i of the input corresponds to entry i of the label table, with
/// the background channel first; the background channel does not contribute
/// to any category. Each output channel is the elementwise sum of the
/// posteriors of all labels mapping to that category, so probability mass
/// is conserved for voxels with zero background probability.
///
/// # Arguments
///
/// * `posteriors` - 4D posterior image with channels on the last axis
pub fn collapse_posteriors(
    posteriors: &Array4<f32>,
) -> Result<Vec<Array3<f32>>, SulcusError> {
    let shape = posteriors.shape();

    if shape[3] != SYNTHSEG_TO_ANTSCT.len() {
        return Err(SulcusError::PosteriorFormatError(format!(
            "Expected {} channels but found {}.",
            SYNTHSEG_TO_ANTSCT.len(),
            shape[3]
        )));
    }

    let dim = (shape[0], shape[1], shape[2]);
    let mut categories = vec![Array3::<f32>::zeros(dim); ANTSCT_CATEGORIES];

    for (channel, &(label, category)) in SYNTHSEG_TO_ANTSCT.iter().enumerate() {
        if label == 0 {
            continue;
        }

        categories[(category - 1) as usize] += &posteriors.index_axis(Axis(3), channel);
    }

    Ok(categories)
}
