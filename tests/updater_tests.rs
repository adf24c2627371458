//! Tests for updating whole files and batches of files.

#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::unwrap_used)]

mod common;

use std::fs;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use anyhow::Result;
use common::{LAST_YEAR, Level, THIS_YEAR, make_updater, read_file, write_file};
use copyright_bump::file_filter::create_default_filter;
use copyright_bump::processor::FileCollector;
use copyright_bump::report::FileAction;
use tempfile::tempdir;

const OWNER: &str = "Unit Test Example";

fn notice(years: &str) -> String {
  format!("Copyright (C) {years} {OWNER}")
}

#[test]
fn test_dry_run_then_update() -> Result<()> {
  let temp_dir = tempdir()?;
  let original = notice(&format!("1915, 2001-{LAST_YEAR}"));
  let path = write_file(
    temp_dir.path(),
    "example.txt",
    format!("Test the updater.\n{original}\n"),
  )?;

  let (updater, _) = make_updater("Example", true);
  let report = updater.update_file(&path)?;
  assert_eq!(report.action, FileAction::Updated);
  assert_eq!(read_file(&path)?.lines().last(), Some(original.as_str()));

  let (updater, _) = make_updater("Example", false);
  let report = updater.update_file(&path)?;
  assert_eq!(report.action, FileAction::Updated);
  assert_eq!(report.changed_lines, vec![2]);
  let revised = notice(&format!("1915, 2001-{THIS_YEAR}"));
  assert_eq!(read_file(&path)?.lines().last(), Some(revised.as_str()));

  Ok(())
}

#[test]
fn test_only_candidate_lines_change() -> Result<()> {
  let temp_dir = tempdir()?;
  let content = format!(
    "#!/bin/sh\n# {}\n# Copyright (C) 2019 Someone Else\necho 2019 {OWNER}\n\r\n# {}\r\n",
    notice("2019"),
    notice(LAST_YEAR),
  );
  let path = write_file(temp_dir.path(), "script.sh", &content)?;

  let (updater, reporter) = make_updater(OWNER, false);
  let report = updater.update_file(&path)?;

  let expected = format!(
    "#!/bin/sh\n# {}\n# Copyright (C) 2019 Someone Else\necho 2019 {OWNER}\n\r\n# {}\r\n",
    notice(&format!("2019, {THIS_YEAR}")),
    notice(&format!("{LAST_YEAR}-{THIS_YEAR}")),
  );
  assert_eq!(read_file(&path)?, expected);
  assert_eq!(report.changed_lines, vec![2, 6]);
  assert_eq!(reporter.messages(Level::Debug).len(), 2);
  assert_eq!(
    reporter.messages(Level::Info),
    vec![format!("Update: {}", path.display())]
  );

  Ok(())
}

#[test]
fn test_bad_line_does_not_stop_the_file() -> Result<()> {
  let temp_dir = tempdir()?;
  let content = format!(
    "{}\n{}\n{}\n",
    notice("(no years)"),
    notice(&format!("2001 and {LAST_YEAR}")),
    notice("2001"),
  );
  let path = write_file(temp_dir.path(), "notes.md", &content)?;

  let (updater, reporter) = make_updater(OWNER, false);
  let report = updater.update_file(&path)?;

  assert_eq!(report.action, FileAction::Updated);
  assert_eq!(report.changed_lines, vec![3]);
  let failed: Vec<usize> = report.line_failures.iter().map(|f| f.line).collect();
  assert_eq!(failed, vec![1, 2]);

  let errors = reporter.messages(Level::Error);
  assert_eq!(errors.len(), 2);
  assert!(errors[0].contains("no copyright year(s)"));
  assert!(errors[1].contains("unrecognized separator"));

  let lines: Vec<String> = read_file(&path)?.lines().map(str::to_string).collect();
  assert_eq!(lines[0], notice("(no years)"));
  assert_eq!(lines[1], notice(&format!("2001 and {LAST_YEAR}")));
  assert_eq!(lines[2], notice(&format!("2001, {THIS_YEAR}")));

  Ok(())
}

#[test]
fn test_current_file_is_not_rewritten() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = write_file(temp_dir.path(), "a.txt", format!("{}\n", notice(THIS_YEAR)))?;
  let before = fs::metadata(&path)?.modified()?;

  let (updater, reporter) = make_updater(OWNER, false);
  let report = updater.update_file(&path)?;

  assert_eq!(report.action, FileAction::Unchanged);
  assert_eq!(fs::metadata(&path)?.modified()?, before);
  assert_eq!(
    reporter.messages(Level::Info),
    vec![format!("No changes necessary: {}", path.display())]
  );

  Ok(())
}

#[test]
fn test_file_without_notice() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = write_file(temp_dir.path(), "a.txt", "Copyright (C) 2001 Another Owner\n")?;

  let (updater, reporter) = make_updater(OWNER, false);
  assert_eq!(updater.update_file(&path)?.action, FileAction::NoNotice);
  assert!(reporter.messages(Level::Info).is_empty());

  Ok(())
}

#[test]
fn test_non_utf8_file_is_an_error() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = write_file(temp_dir.path(), "latin1.txt", b"Copyright (C) 2001 Caf\xe9 Owner\n")?;

  let (updater, _) = make_updater("Owner", false);
  assert!(updater.update_file(&path).is_err());

  Ok(())
}

#[tokio::test]
async fn test_batch_continues_past_failures() -> Result<()> {
  let temp_dir = tempdir()?;
  let mut files = Vec::new();
  for i in 0..20 {
    files.push(write_file(
      temp_dir.path(),
      &format!("src/file_{i:02}.txt"),
      format!("{}\n", notice("2010")),
    )?);
  }
  let gone = temp_dir.path().join("src/deleted.txt");
  files.push(gone.clone());
  let binary = write_file(temp_dir.path(), "src/blob.txt", [0xffu8, 0xfe, 0x00, 0x01])?;
  files.push(binary.clone());

  let (updater, reporter) = make_updater(OWNER, false);
  let reports = updater.process(files).await;

  assert_eq!(reports.len(), 22);
  let mut sorted = reports.iter().map(|r| r.path.clone()).collect::<Vec<_>>();
  sorted.sort();
  assert_eq!(reports.iter().map(|r| r.path.clone()).collect::<Vec<_>>(), sorted);

  let failed: Vec<_> = reports.iter().filter(|r| r.action == FileAction::Failed).collect();
  assert_eq!(failed.len(), 2);
  assert!(failed.iter().any(|r| r.path == gone));
  assert!(failed.iter().any(|r| r.path == binary));
  assert_eq!(reporter.messages(Level::Error).len(), 2);

  let updated = reports.iter().filter(|r| r.action == FileAction::Updated).count();
  assert_eq!(updated, 20);
  assert_eq!(
    read_file(&temp_dir.path().join("src/file_07.txt"))?,
    format!("{}\n", notice(&format!("2010, {THIS_YEAR}")))
  );

  Ok(())
}

#[cfg(unix)]
#[tokio::test]
async fn test_read_only_file_is_reported() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = write_file(temp_dir.path(), "locked.txt", format!("{}\n", notice("2010")))?;
  fs::set_permissions(&path, fs::Permissions::from_mode(0o444))?;

  // Running as root ignores file permissions.
  if fs::OpenOptions::new().write(true).open(&path).is_ok() {
    return Ok(());
  }

  let (updater, _) = make_updater(OWNER, false);
  let reports = updater.process(vec![path.clone()]).await;
  assert_eq!(reports[0].action, FileAction::Failed);
  assert!(reports[0].error.as_deref().unwrap().contains("Failed to write file"));
  assert_eq!(read_file(&path)?, format!("{}\n", notice("2010")));

  Ok(())
}

#[tokio::test]
async fn test_collect_then_process_tree() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();
  let kept = write_file(root, "pkg/module.py", format!("# {}\n", notice(LAST_YEAR)))?;
  let built = write_file(root, "build/lib/module.py", format!("# {}\n", notice(LAST_YEAR)))?;
  let docs_built = write_file(root, "docs/build/html/index.html", format!("<!-- {} -->\n", notice(LAST_YEAR)))?;
  write_file(root, "pkg/logo.png", [0x89u8, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0])?;

  let filter = create_default_filter(&[], &[])?;
  let files = FileCollector::new(&[], Box::new(filter)).collect(&[root.to_path_buf()])?;
  assert_eq!(files, vec![kept.clone()]);

  let (updater, _) = make_updater(OWNER, false);
  let reports = updater.process(files).await;
  assert_eq!(reports.len(), 1);
  assert_eq!(read_file(&kept)?, format!("# {}\n", notice(&format!("{LAST_YEAR}-{THIS_YEAR}"))));
  assert_eq!(read_file(&built)?, format!("# {}\n", notice(LAST_YEAR)));
  assert_eq!(read_file(&docs_built)?, format!("<!-- {} -->\n", notice(LAST_YEAR)));

  Ok(())
}
