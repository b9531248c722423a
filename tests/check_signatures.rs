/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use edgesig::cli::main as cli_main;
use edgesig::Signature;
use std::path::Path;
use tempfile::Builder;

fn write_edges(dir: &Path, name: &str, contents: &str) -> Result<String> {
    let path = dir.join(name);
    std::fs::write(&path, contents)?;
    Ok(path.display().to_string())
}

#[test]
fn test_reordered_and_swapped() -> Result<()> {
    let tmp_dir = Builder::new().prefix("edgesig_eq").tempdir()?;
    let input = write_edges(tmp_dir.path(), "input.tsv", "1\t2\t5\n3\t4\t9\n")?;
    let output = write_edges(tmp_dir.path(), "output.tsv", "4\t3\t9\n2\t1\t5\n")?;

    assert!(cli_main(vec!["edgesig", &input, &output])?);
    Ok(())
}

#[test]
fn test_blank_lines_and_weight_wraparound() -> Result<()> {
    let tmp_dir = Builder::new().prefix("edgesig_blank").tempdir()?;
    let input = write_edges(tmp_dir.path(), "input.tsv", "1\t2\t5\n3\t4\t9\n")?;
    let output = write_edges(
        tmp_dir.path(),
        "output.tsv",
        "\n1\t2\t261\n   \n3\t4\t9\n\n",
    )?;

    assert!(cli_main(vec!["edgesig", &input, &output])?);
    Ok(())
}

#[test]
fn test_mismatch() -> Result<()> {
    let tmp_dir = Builder::new().prefix("edgesig_neq").tempdir()?;
    let input = write_edges(tmp_dir.path(), "input.tsv", "1\t2\t5\n3\t4\t9\n")?;
    let changed_weight = write_edges(tmp_dir.path(), "weight.tsv", "1\t2\t6\n3\t4\t9\n")?;
    let extra_edge = write_edges(
        tmp_dir.path(),
        "extra.tsv",
        "1\t2\t5\n3\t4\t9\n5\t6\t7\n",
    )?;

    assert!(!cli_main(vec!["edgesig", &input, &changed_weight])?);
    assert!(!cli_main(vec!["edgesig", &input, &extra_edge])?);
    Ok(())
}

#[test]
fn test_empty_files_match() -> Result<()> {
    let tmp_dir = Builder::new().prefix("edgesig_empty").tempdir()?;
    let input = write_edges(tmp_dir.path(), "input.tsv", "")?;
    let output = write_edges(tmp_dir.path(), "output.tsv", "\n  \n")?;

    assert!(cli_main(vec!["edgesig", &input, &output])?);
    assert_eq!(Signature::from_path(&input, None)?, Signature::default());
    Ok(())
}

#[test]
fn test_determinism() -> Result<()> {
    let tmp_dir = Builder::new().prefix("edgesig_det").tempdir()?;
    let input = write_edges(tmp_dir.path(), "input.tsv", "7\t8\t9\n-1\t5\t7\n")?;

    assert_eq!(
        Signature::from_path(&input, None)?,
        Signature::from_path(&input, None)?
    );
    assert!(cli_main(vec!["edgesig", &input, &input])?);
    Ok(())
}

#[test]
fn test_parse_error_aborts() -> Result<()> {
    let tmp_dir = Builder::new().prefix("edgesig_parse").tempdir()?;
    let input = write_edges(tmp_dir.path(), "input.tsv", "1\t2\t5\n")?;
    let two_fields = write_edges(tmp_dir.path(), "two_fields.tsv", "1\t2\t5\n1\t2\n")?;
    let not_a_number = write_edges(tmp_dir.path(), "nan.tsv", "1\ttwo\t3\n")?;

    assert!(cli_main(vec!["edgesig", &input, &two_fields]).is_err());
    assert!(cli_main(vec!["edgesig", &input, &not_a_number]).is_err());
    Ok(())
}

#[test]
fn test_missing_file() -> Result<()> {
    let tmp_dir = Builder::new().prefix("edgesig_missing").tempdir()?;
    let input = write_edges(tmp_dir.path(), "input.tsv", "1\t2\t5\n")?;
    let missing = tmp_dir.path().join("no_such_file.tsv").display().to_string();

    assert!(cli_main(vec!["edgesig", &input, &missing]).is_err());
    Ok(())
}
