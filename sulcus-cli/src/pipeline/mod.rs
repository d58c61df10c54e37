// Copyright (c) 2026, the sulcus developers
// Licensed under the BSD 3-Clause License

use std::path::{Path, PathBuf};

mod antsct;
mod preprocess;
mod resample;
mod segment;
mod tools;

use sulcus_core::constant::CROP_MULTIPLE;

use crate::args::Cli;

/// Validated and normalized pipeline inputs
pub struct Resolved {
    pub input: PathBuf,
    pub prefix: String,
    pub mask: Option<PathBuf>,
}

impl Resolved {
    /// Build an output path by appending a suffix to the output prefix
    pub fn output(&self, suffix: &str) -> PathBuf {
        PathBuf::from(format!("{}{}", self.prefix, suffix))
    }
}

/// Run the full segmentation pipeline
///
/// Steps run strictly in order: preprocess (crop and resample), segment,
/// then optionally resample back to original space and remap for antsct.
/// The first failing step aborts the run; outputs written before the
/// failure are left on disk.
pub fn run(cli: &Cli) {
    let window = validate_crop(&cli.crop);
    let resolved = resolve(cli);

    let plan = preprocess::run(&resolved, window, cli.mask_pad).unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });

    segment::run(&resolved, cli, &plan).unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });

    if cli.wants_original_space() {
        resample::run(&resolved, cli).unwrap_or_else(|err| {
            eprintln!("{}", err);
            std::process::exit(1);
        });

        if cli.antsct {
            antsct::run(&resolved).unwrap_or_else(|err| {
                eprintln!("{}", err);
                std::process::exit(1);
            });
        }
    }
}

fn validate_crop(crop: &[u32]) -> [u32; 3] {
    if crop.len() != 3 {
        eprintln!("[sulcus::pipeline] ERROR: Crop parameters must be exactly three values.");
        std::process::exit(1);
    }

    if crop
        .iter()
        .any(|c| *c == 0 || c % CROP_MULTIPLE != 0)
    {
        eprintln!(
            "[sulcus::pipeline] ERROR: Crop parameters must be positive multiples of {}.",
            CROP_MULTIPLE
        );
        std::process::exit(1);
    }

    [crop[0], crop[1], crop[2]]
}

fn resolve(cli: &Cli) -> Resolved {
    let input = cli.input.to_owned().unwrap();
    let input = std::fs::canonicalize(&input).unwrap_or_else(|_| {
        eprintln!(
            "[sulcus::pipeline] ERROR: Input image {} could not be found.",
            input
        );
        std::process::exit(1);
    });

    let prefix = cli.output.to_owned().unwrap();

    if let Some(parent) = Path::new(&prefix).parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            std::fs::create_dir_all(parent).unwrap_or_else(|err| {
                eprintln!(
                    "[sulcus::pipeline] ERROR: Could not create output directory. {}.",
                    err
                );
                std::process::exit(1);
            });
        }
    }

    // A mask path that does not resolve to a readable file downgrades to
    // running without a mask
    let mask = cli
        .mask
        .as_deref()
        .map(Path::new)
        .filter(|mask| mask.is_file())
        .and_then(|mask| std::fs::canonicalize(mask).ok());

    Resolved {
        input,
        prefix,
        mask,
    }
}
