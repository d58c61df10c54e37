// Copyright (c) 2026, the sulcus developers
// Licensed under the BSD 3-Clause License

use std::ffi::OsStr;
use std::process::Command;

use sulcus_core::error::SulcusError;

/// Run an external tool to completion, blocking until it exits
///
/// Basic numeric libraries in the external tools are pinned to a single
/// thread; they contribute little runtime next to SynthSeg itself and this
/// keeps the resource footprint predictable.
///
/// # Arguments
///
/// * `program` - Executable name, resolved on PATH
/// * `args` - Full argument list
pub fn run<I, S>(program: &str, args: I) -> Result<(), SulcusError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let status = Command::new(program)
        .args(args)
        .env("OMP_NUM_THREADS", "1")
        .env("ITK_GLOBAL_DEFAULT_NUMBER_OF_THREADS", "1")
        .status()
        .map_err(|err| SulcusError::ToolLaunchError(format!("{}: {}", program, err)))?;

    if !status.success() {
        return Err(SulcusError::ToolFailedError(format!(
            "{} exited with {}",
            program, status
        )));
    }

    Ok(())
}
