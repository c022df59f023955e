// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::StdMutex;
use smallvec::SmallVec;
use std::{io::{Result, Write},
          sync::{Arc, MutexGuard, PoisonError}};
use strip_ansi_escapes::strip;

pub type StdoutMockBuffer = SmallVec<[u8; 256]>;

/// You can safely clone this struct, since it only contains an `Arc<StdMutex<..>>`.
/// The inner `buffer` is shared between clones, not copied.
///
/// The main constructors are:
/// - [`StdoutMock::default`]
/// - [`super::OutputDeviceExt::new_mock()`]
#[derive(Clone, Debug, Default)]
pub struct StdoutMock {
    pub buffer: Arc<StdMutex<StdoutMockBuffer>>,
}

impl StdoutMock {
    fn lock_buffer(&self) -> MutexGuard<'_, StdoutMockBuffer> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn get_copy_of_buffer(&self) -> StdoutMockBuffer { self.lock_buffer().clone() }

    /// Raw bytes, escape sequences included. Invalid UTF-8 is replaced.
    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        String::from_utf8_lossy(&self.lock_buffer()).into_owned()
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        let stripped = strip(self.lock_buffer().as_slice());
        String::from_utf8_lossy(&stripped).into_owned()
    }

    pub fn clear(&self) { self.lock_buffer().clear(); }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.lock_buffer().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}
