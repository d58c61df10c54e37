// Copyright (c) 2026, the sulcus developers
// Licensed under the BSD 3-Clause License

use std::path::Path;

use ndarray::{Array3, Array4, Ix3, Ix4};
use nifti::writer::WriterOptions;
use nifti::{InMemNiftiObject, IntoNdArray, NiftiHeader, NiftiObject, ReaderOptions};

use crate::error::SulcusError;

fn read_object<P: AsRef<Path>>(path: P) -> Result<InMemNiftiObject, SulcusError> {
    ReaderOptions::new()
        .read_file(path.as_ref())
        .map_err(|err| {
            SulcusError::ImageReadError(format!("{}: {}", path.as_ref().display(), err))
        })
}

/// A binary brain mask volume
///
/// Foreground voxels carry the value 1; any other value is background for
/// the purposes of crop planning.
#[derive(Debug, Clone)]
pub struct MaskVolume {
    data: Array3<u8>,
    header: NiftiHeader,
}

impl MaskVolume {
    /// Open a mask image from the provided path
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a 3D NIfTI mask image
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sulcus_core::im::MaskVolume;
    /// let mask = MaskVolume::open("mask.nii.gz").unwrap();
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<MaskVolume, SulcusError> {
        let object = read_object(&path)?;
        let header = object.header().clone();

        let data = object
            .into_volume()
            .into_ndarray::<u8>()
            .map_err(|err| SulcusError::ImageReadError(err.to_string()))?
            .into_dimensionality::<Ix3>()
            .map_err(|_| {
                SulcusError::ImageDimensionError(format!(
                    "Mask {} must be 3D.",
                    path.as_ref().display()
                ))
            })?;

        Ok(MaskVolume { data, header })
    }

    pub fn data(&self) -> &Array3<u8> {
        &self.data
    }

    pub fn header(&self) -> &NiftiHeader {
        &self.header
    }
}

/// An integer label map, such as the SynthSeg segmentation output
#[derive(Debug, Clone)]
pub struct LabelVolume {
    data: Array3<i16>,
    header: NiftiHeader,
}

impl LabelVolume {
    /// Open a label image from the provided path
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a 3D NIfTI label image
    pub fn open<P: AsRef<Path>>(path: P) -> Result<LabelVolume, SulcusError> {
        let object = read_object(&path)?;
        let header = object.header().clone();

        let data = object
            .into_volume()
            .into_ndarray::<i16>()
            .map_err(|err| SulcusError::ImageReadError(err.to_string()))?
            .into_dimensionality::<Ix3>()
            .map_err(|_| {
                SulcusError::ImageDimensionError(format!(
                    "Label map {} must be 3D.",
                    path.as_ref().display()
                ))
            })?;

        Ok(LabelVolume { data, header })
    }

    pub fn data(&self) -> &Array3<i16> {
        &self.data
    }

    pub fn header(&self) -> &NiftiHeader {
        &self.header
    }
}

/// A 4D posterior probability image with one channel per SynthSeg label
#[derive(Debug, Clone)]
pub struct PosteriorVolume {
    data: Array4<f32>,
    header: NiftiHeader,
}

impl PosteriorVolume {
    /// Open a posterior image from the provided path
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a 4D NIfTI image, channels on the last axis
    pub fn open<P: AsRef<Path>>(path: P) -> Result<PosteriorVolume, SulcusError> {
        let object = read_object(&path)?;
        let header = object.header().clone();

        let data = object
            .into_volume()
            .into_ndarray::<f32>()
            .map_err(|err| SulcusError::ImageReadError(err.to_string()))?
            .into_dimensionality::<Ix4>()
            .map_err(|_| {
                SulcusError::ImageDimensionError(format!(
                    "Posterior image {} must be 4D.",
                    path.as_ref().display()
                ))
            })?;

        Ok(PosteriorVolume { data, header })
    }

    pub fn data(&self) -> &Array4<f32> {
        &self.data
    }

    pub fn header(&self) -> &NiftiHeader {
        &self.header
    }
}

/// Write a label volume, copying geometry from a reference header
///
/// # Arguments
///
/// * `path` - Output path, gzipped when ending in .gz
/// * `data` - Label values
/// * `header` - Header supplying origin, spacing, and direction
pub fn save_labels<P: AsRef<Path>>(
    path: P,
    data: &Array3<i16>,
    header: &NiftiHeader,
) -> Result<(), SulcusError> {
    WriterOptions::new(path.as_ref())
        .reference_header(header)
        .write_nifti(data)
        .map_err(|err| {
            SulcusError::ImageWriteError(format!("{}: {}", path.as_ref().display(), err))
        })
}

/// Write a scalar probability volume, copying geometry from a reference header
///
/// # Arguments
///
/// * `path` - Output path, gzipped when ending in .gz
/// * `data` - Probability values
/// * `header` - Header supplying origin, spacing, and direction
pub fn save_probability<P: AsRef<Path>>(
    path: P,
    data: &Array3<f32>,
    header: &NiftiHeader,
) -> Result<(), SulcusError> {
    WriterOptions::new(path.as_ref())
        .reference_header(header)
        .write_nifti(data)
        .map_err(|err| {
            SulcusError::ImageWriteError(format!("{}: {}", path.as_ref().display(), err))
        })
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    pub fn test_open_missing_file() {
        let mask = MaskVolume::open("does_not_exist.nii.gz");
        assert!(mask.is_err());
    }

    #[test]
    pub fn test_label_write_read_round_trip() {
        const OUTPUT: &str = "TEST_LABEL_WRITE.nii.gz";

        let mut labels = Array3::<i16>::zeros((6, 7, 8));
        labels[[1, 2, 3]] = 17;
        labels[[4, 5, 6]] = 41;

        let header = NiftiHeader {
            sform_code: 1,
            srow_x: [1.0, 0.0, 0.0, -3.0],
            srow_y: [0.0, 1.0, 0.0, -4.0],
            srow_z: [0.0, 0.0, 1.0, -5.0],
            ..NiftiHeader::default()
        };

        save_labels(OUTPUT, &labels, &header).unwrap();

        let reloaded = LabelVolume::open(OUTPUT).unwrap();

        assert_eq!(reloaded.data(), &labels);
        assert_eq!(reloaded.header().srow_x, [1.0, 0.0, 0.0, -3.0]);

        std::fs::remove_file(OUTPUT).unwrap();
    }

    #[test]
    pub fn test_posterior_requires_4d_image() {
        const OUTPUT: &str = "TEST_PROBABILITY_WRITE.nii.gz";

        let probabilities = Array3::<f32>::zeros((4, 4, 4));
        let header = NiftiHeader::default();

        // A valid 3D file opens as a mask, but not as a posterior image
        save_probability(OUTPUT, &probabilities, &header).unwrap();

        assert!(MaskVolume::open(OUTPUT).is_ok());
        assert!(PosteriorVolume::open(OUTPUT).is_err());

        std::fs::remove_file(OUTPUT).unwrap();
    }
}
