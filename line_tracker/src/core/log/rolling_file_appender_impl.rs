// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

/// Creates a "never rolling" appender for the file at `path_str`. The file is created
/// right away.
///
/// Note that if you wrap this up in a non blocking writer, it doesn't work. Here's an
/// example of this:
/// `tracing_appender::non_blocking(try_create("foo")?)`
///
/// # Errors
///
/// Returns an error if:
/// - The path has no parent directory
/// - The path has no file name
/// - The file can't be created (permissions, missing parent, etc)
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(&path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access parent folder of {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    tracing_appender::rolling::RollingFileAppender::builder()
        .rotation(tracing_appender::rolling::Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .map_err(|err| miette::miette!("Can't create log file {}: {err}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::try_create_temp_dir;

    #[test]
    fn test_try_create_makes_the_file() {
        let dir = try_create_temp_dir().unwrap();
        let file_path = dir.join("tracker.log");
        let appender = try_create(file_path.to_str().unwrap()).unwrap();
        drop(appender);
        assert!(file_path.exists());
    }

    #[test]
    fn test_try_create_missing_parent_dir_fails() {
        let dir = try_create_temp_dir().unwrap();
        let file_path = dir.join("does_not_exist").join("tracker.log");
        // Parent is a regular file.
        std::fs::write(dir.join("does_not_exist"), "").unwrap();
        assert!(try_create(file_path.to_str().unwrap()).is_err());
    }
}
