// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use rand::{Rng, rngs::ThreadRng};
use std::{ops::Deref,
          path::{Path, PathBuf}};

const PET_NAMES: [&str; 8] =
    ["buddy", "max", "bella", "charlie", "lucy", "daisy", "molly", "rocky"];

const FRUIT_NAMES: [&str; 8] =
    ["apple", "banana", "orange", "pear", "peach", "grape", "kiwi", "mango"];

/// A directory under [`std::env::temp_dir`] that is deleted when this is dropped.
#[derive(Debug)]
pub struct TempDir {
    pub inner: PathBuf,
}

impl TempDir {
    /// Join a path to the temporary directory.
    pub fn join<P: AsRef<Path>>(&self, path: P) -> PathBuf { self.inner.join(path) }
}

/// Create a temporary directory. The directory is automatically deleted when the
/// [`TempDir`] struct is dropped.
///
/// # Errors
///
/// Returns an error if the directory can't be created (permissions, full disk, etc).
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let new_temp_dir = std::env::temp_dir().join(generate_friendly_random_id());
    std::fs::create_dir(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir {
        inner: new_temp_dir,
    })
}

/// Something like `lucy-kiwi-042-7731`.
#[must_use]
pub fn generate_friendly_random_id() -> String {
    let mut rng: ThreadRng = rand::rng();
    let pet = PET_NAMES[rng.random_range(0..PET_NAMES.len())];
    let fruit = FRUIT_NAMES[rng.random_range(0..FRUIT_NAMES.len())];
    let number: u16 = rng.random_range(0..1000);
    let suffix: u32 = rng.random();
    format!("{pet}-{fruit}-{number:03}-{suffix}")
}

impl Drop for TempDir {
    fn drop(&mut self) {
        // We don't care about the result of this operation.
        std::fs::remove_dir_all(&self.inner).ok();
    }
}

impl Deref for TempDir {
    type Target = PathBuf;

    fn deref(&self) -> &Self::Target { &self.inner }
}
