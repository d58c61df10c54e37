// Copyright (c) 2026, the sulcus developers
// Licensed under the BSD 3-Clause License

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_missing_required_args() {
    Command::cargo_bin("sulcus")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--input"));
}

#[test]
fn test_crop_must_be_multiple_of_32() {
    Command::cargo_bin("sulcus")
        .unwrap()
        .args([
            "--input", "t1w.nii.gz", "--output", "out/sub-", "--crop", "100", "256", "192",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("multiples of 32"));
}

#[test]
fn test_crop_must_be_positive() {
    Command::cargo_bin("sulcus")
        .unwrap()
        .args([
            "--input", "t1w.nii.gz", "--output", "out/sub-", "--crop", "0", "256", "192",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("multiples of 32"));
}

#[test]
fn test_missing_input_image() {
    Command::cargo_bin("sulcus")
        .unwrap()
        .args([
            "--input",
            "DOES_NOT_EXIST.nii.gz",
            "--output",
            "TEST_MISSING_INPUT/sub-",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not be found"));
}

// The end-to-end tests below run the pipeline against stub executables on a
// prepended PATH. The no-mask path never parses the input image, so a plain
// text file stands in for the structural image.
#[cfg(unix)]
mod stubbed {

    use std::fs;
    use std::path::{Path, PathBuf};

    use super::*;

    fn write_stub(bin: &Path, name: &str, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = bin.join(name);
        fs::write(&path, body).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// Create a scratch directory with an input image and stubbed
    /// ResampleImage and python executables. The python stub records its
    /// argument list in synthseg_args.txt.
    fn setup(name: &str) -> (PathBuf, String) {
        let root = std::env::temp_dir().join(name);

        if root.exists() {
            fs::remove_dir_all(&root).unwrap();
        }

        let bin = root.join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::write(root.join("t1w.nii.gz"), "not a real image").unwrap();

        write_stub(&bin, "ResampleImage", "#!/bin/sh\nexit 0\n");
        write_stub(
            &bin,
            "python",
            "#!/bin/sh\necho \"$@\" > synthseg_args.txt\nexit 0\n",
        );

        let path = format!(
            "{}:{}",
            bin.display(),
            std::env::var("PATH").unwrap_or_default()
        );

        (root, path)
    }

    fn synthseg_args(root: &Path) -> String {
        fs::read_to_string(root.join("synthseg_args.txt")).unwrap()
    }

    #[test]
    fn test_default_run_without_mask() {
        let (root, path) = setup("SULCUS_TEST_DEFAULT_RUN");

        Command::cargo_bin("sulcus")
            .unwrap()
            .current_dir(&root)
            .env("PATH", &path)
            .args(["--input", "t1w.nii.gz", "--output", "out/sub-"])
            .assert()
            .success();

        // The copied working image exists and SynthSeg saw the default crop
        // window with no CPU forcing
        assert!(root.join("out/sub-SynthSegInput.nii.gz").exists());

        let args = synthseg_args(&root);

        assert!(args.contains("--crop 192 256 192"));
        assert!(args.contains("sub-SynthSeg.nii.gz"));
        assert!(!args.contains("--cpu"));
        assert!(!args.contains("--post"));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_cpu_flag_is_forwarded() {
        let (root, path) = setup("SULCUS_TEST_CPU_RUN");

        Command::cargo_bin("sulcus")
            .unwrap()
            .current_dir(&root)
            .env("PATH", &path)
            .args(["--input", "t1w.nii.gz", "--output", "out/sub-", "--cpu"])
            .assert()
            .success();

        assert!(synthseg_args(&root).contains("--cpu"));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_optional_outputs_are_forwarded() {
        let (root, path) = setup("SULCUS_TEST_OPTIONAL_RUN");

        Command::cargo_bin("sulcus")
            .unwrap()
            .current_dir(&root)
            .env("PATH", &path)
            .args([
                "--input", "t1w.nii.gz", "--output", "out/sub-", "--post", "--qc", "--vol",
                "--parc", "--robust", "--crop", "224", "256", "192",
            ])
            .assert()
            .success();

        let args = synthseg_args(&root);

        assert!(args.contains("--crop 224 256 192"));
        assert!(args.contains("sub-Posteriors.nii.gz"));
        assert!(args.contains("sub-QC.csv"));
        assert!(args.contains("sub-Volumes.csv"));
        assert!(args.contains("--parc"));
        assert!(args.contains("--robust"));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_missing_mask_falls_back_to_copy() {
        let (root, path) = setup("SULCUS_TEST_NO_MASK_RUN");

        // No ExtractRegionFromImageByMask stub exists, so the run only
        // succeeds if the missing mask downgrades to the copy path
        Command::cargo_bin("sulcus")
            .unwrap()
            .current_dir(&root)
            .env("PATH", &path)
            .args([
                "--input",
                "t1w.nii.gz",
                "--output",
                "out/sub-",
                "--mask",
                "DOES_NOT_EXIST.nii.gz",
            ])
            .assert()
            .success();

        assert!(root.join("out/sub-SynthSegInput.nii.gz").exists());

        fs::remove_dir_all(&root).unwrap();
    }
}
