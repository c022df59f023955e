// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{SafeRawTerminal, SendRawTerminal, StdMutex};
use std::{fmt::{Debug, Formatter},
          io::Write,
          sync::{Arc, MutexGuard, PoisonError}};

pub type LockedOutputDevice<'a> = &'a mut dyn std::io::Write;

/// Macro to simplify locking and getting a mutable reference to the output device.
/// Don't call this again in the same scope, it will deadlock! A safe approach is to use
/// this macro in a separate block scope.
///
/// ```
/// use r3bl_line_tracker::{LockedOutputDevice, OutputDevice, lock_output_device_as_mut};
///
/// let device = OutputDevice::new_stderr();
/// { // Start a new block scope to avoid deadlock.
///     let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
///     let _ = mut_ref.write_all(b"");
/// } // The lock is released here.
/// ```
#[macro_export]
macro_rules! lock_output_device_as_mut {
    ($device:expr) => {
        &mut *$device.lock()
    };
}

/// The place that [`crate::CrosstermTerminal`] (and the display log layer) writes to.
/// - It is safe to clone, all clones share the same underlying writer.
/// - To write to it, see [`Self::lock()`] or the [`lock_output_device_as_mut`] macro.
/// - For tests, `OutputDeviceExt::new_mock()` creates one that captures its output.
#[derive(Clone)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
    pub is_mock: bool,
}

impl Debug for OutputDevice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputDevice")
            .field("is_mock", &self.is_mock)
            .finish_non_exhaustive()
    }
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stdout())),
            is_mock: false,
        }
    }

    #[must_use]
    pub fn new_stderr() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stderr())),
            is_mock: false,
        }
    }

    /// Locks the output device for writing. A poisoned lock is recovered.
    pub fn lock(&self) -> MutexGuard<'_, SendRawTerminal> {
        self.resource.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Each call locks the device for just that call.
impl Write for OutputDevice {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.lock().write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.lock().flush() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutputDeviceExt;

    #[test]
    fn test_stderr_output_device_is_not_mock() {
        let device = OutputDevice::new_stderr();
        let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
        drop(mut_ref.write_all(b""));
        assert!(!device.is_mock);
    }

    #[test]
    fn test_clones_share_the_writer() {
        let (device, mock) = OutputDevice::new_mock();
        let clone = device.clone();
        {
            let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
            mut_ref.write_all(b"a").unwrap();
        }
        {
            let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(clone);
            mut_ref.write_all(b"b").unwrap();
        }
        assert_eq!(mock.get_copy_of_buffer_as_string(), "ab");
        assert!(format!("{device:?}").contains("is_mock: true"));
    }
}
