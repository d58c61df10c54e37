// Copyright (c) 2026, the sulcus developers
// Licensed under the BSD 3-Clause License

use std::fmt;

#[derive(Debug, Clone)]
pub enum SulcusError {
    ImageReadError(String),
    ImageWriteError(String),
    ImageDimensionError(String),
    PosteriorFormatError(String),
    ToolLaunchError(String),
    ToolFailedError(String),
    NoFileError(String),
    DirError(String),
    OtherError(String),
}

impl fmt::Display for SulcusError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SulcusError::ImageReadError(message) => {
                write!(
                    f,
                    "[sulcus::ImageReadError] Failed to read image. {}",
                    message
                )
            }
            SulcusError::ImageWriteError(message) => {
                write!(
                    f,
                    "[sulcus::ImageWriteError] Failed to write image. {}",
                    message
                )
            }
            SulcusError::ImageDimensionError(message) => {
                write!(
                    f,
                    "[sulcus::ImageDimensionError] Image has unexpected dimensionality. {}",
                    message
                )
            }
            SulcusError::PosteriorFormatError(message) => {
                write!(
                    f,
                    "[sulcus::PosteriorFormatError] Posterior image does not match the SynthSeg label set. {}",
                    message
                )
            }
            SulcusError::ToolLaunchError(message) => {
                write!(
                    f,
                    "[sulcus::ToolLaunchError] Failed to launch external tool. {}",
                    message
                )
            }
            SulcusError::ToolFailedError(message) => {
                write!(
                    f,
                    "[sulcus::ToolFailedError] External tool reported failure. {}",
                    message
                )
            }
            SulcusError::NoFileError(message) => {
                write!(
                    f,
                    "[sulcus::NoFileError] File could not be found. {}.",
                    message
                )
            }
            SulcusError::DirError(message) => {
                write!(
                    f,
                    "[sulcus::DirError] Directory could not be created or read. {}.",
                    message
                )
            }
            SulcusError::OtherError(message) => {
                write!(f, "[sulcus::OtherError] Error: {}.", message)
            }
        }
    }
}

impl std::error::Error for SulcusError {}
