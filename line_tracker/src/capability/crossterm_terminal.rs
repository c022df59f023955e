// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CapabilityOperation, ClearDirection, ColorDepth, OutputDevice,
            ResizeListener, SendRawTerminal, StdMutex, TerminalCapability,
            global_color_depth, queue_clear_line, queue_move_absolute,
            queue_move_relative};
use std::{fmt::{Debug, Formatter},
          io::Write,
          sync::{Arc, PoisonError}};

pub const DEFAULT_COLUMNS: u16 = 80;
pub const DEFAULT_ROWS: u16 = 24;

type SharedResizeListeners = Arc<StdMutex<Vec<ResizeListener>>>;

/// A [`TerminalCapability`] for a real terminal, using crossterm commands written to an
/// [`OutputDevice`] (stdout, stderr, or a mock for tests).
///
/// - Every call is flushed before it returns.
/// - IO errors are logged and reported as `false`.
/// - The terminal doesn't report its cursor row, so
///   [`TerminalCapability::reported_cursor_row`] is [`None`].
/// - Resize notifications come from a `SIGWINCH` watcher thread, which is started by
///   the first [`TerminalCapability::subscribe_resize`] call and stopped on drop. On
///   non unix platforms, subscribing returns `false`.
pub struct CrosstermTerminal {
    output_device: OutputDevice,
    color_depth: ColorDepth,
    resize_listeners: SharedResizeListeners,
    #[cfg(unix)]
    resize_watcher: Option<resize_watcher::ResizeWatcher>,
}

impl Debug for CrosstermTerminal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrosstermTerminal")
            .field("output_device", &self.output_device)
            .field("color_depth", &self.color_depth)
            .finish_non_exhaustive()
    }
}

impl Default for CrosstermTerminal {
    fn default() -> Self { Self::new_stdout() }
}

impl CrosstermTerminal {
    /// The color depth is taken from [`global_color_depth::detect`].
    #[must_use]
    pub fn new(output_device: OutputDevice) -> Self {
        Self {
            output_device,
            color_depth: global_color_depth::detect(),
            resize_listeners: Arc::new(StdMutex::new(Vec::new())),
            #[cfg(unix)]
            resize_watcher: None,
        }
    }

    #[must_use]
    pub fn new_stdout() -> Self { Self::new(OutputDevice::new_stdout()) }

    #[must_use]
    pub fn new_stderr() -> Self { Self::new(OutputDevice::new_stderr()) }

    /// Use `color_depth` instead of the detected one.
    #[must_use]
    pub fn with_color_depth(mut self, color_depth: ColorDepth) -> Self {
        self.color_depth = color_depth;
        self
    }

    #[must_use]
    pub fn output_device(&self) -> &OutputDevice { &self.output_device }

    fn size(&self) -> (u16, u16) {
        if self.output_device.is_mock {
            return (DEFAULT_COLUMNS, DEFAULT_ROWS);
        }
        crossterm::terminal::size().unwrap_or((DEFAULT_COLUMNS, DEFAULT_ROWS))
    }

    /// Run `queue` against the locked output device, then flush.
    fn run(
        &mut self,
        operation: CapabilityOperation,
        queue: impl FnOnce(&mut SendRawTerminal) -> std::io::Result<()>,
    ) -> bool {
        let mut locked = self.output_device.lock();
        let result = queue(&mut *locked).and_then(|()| locked.flush());
        match result {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(
                    message = "Terminal IO failed",
                    operation = %operation,
                    error = ?error
                );
                false
            }
        }
    }
}

impl TerminalCapability for CrosstermTerminal {
    fn write(&mut self, text: &str) -> bool {
        self.run(CapabilityOperation::Write, |out| out.write_all(text.as_bytes()))
    }

    fn clear_current_line(&mut self, direction: ClearDirection) -> bool {
        self.run(CapabilityOperation::ClearCurrentLine, |out| {
            queue_clear_line(out, direction)
        })
    }

    fn move_cursor_relative(&mut self, dx: isize, dy: isize) -> bool {
        self.run(CapabilityOperation::MoveCursorRelative, |out| {
            queue_move_relative(out, dx, dy)
        })
    }

    fn move_cursor_absolute(&mut self, x: u16, y: Option<u16>) -> bool {
        self.run(CapabilityOperation::MoveCursorAbsolute, |out| {
            queue_move_absolute(out, x, y)
        })
    }

    fn query_color_depth(&self) -> ColorDepth { self.color_depth }

    #[cfg(unix)]
    fn subscribe_resize(&mut self, listener: ResizeListener) -> bool {
        if self.resize_watcher.is_none() {
            match resize_watcher::ResizeWatcher::try_start(self.resize_listeners.clone())
            {
                Ok(it) => self.resize_watcher = Some(it),
                Err(error) => {
                    tracing::warn!(
                        message = "Can't watch for terminal resize",
                        error = ?error
                    );
                    return false;
                }
            }
        }
        self.resize_listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
        true
    }

    #[cfg(not(unix))]
    fn subscribe_resize(&mut self, _listener: ResizeListener) -> bool { false }

    fn columns(&self) -> u16 { self.size().0 }

    fn rows(&self) -> u16 { self.size().1 }
}

#[cfg(unix)]
mod resize_watcher {
    use super::SharedResizeListeners;
    use signal_hook::{consts::signal::SIGWINCH, iterator::{Handle, Signals}};
    use std::{sync::PoisonError, thread::JoinHandle};

    /// Calls every listener on each `SIGWINCH`. Stops when dropped.
    pub struct ResizeWatcher {
        handle: Handle,
        thread: Option<JoinHandle<()>>,
    }

    impl ResizeWatcher {
        pub fn try_start(listeners: SharedResizeListeners) -> std::io::Result<Self> {
            let mut signals = Signals::new([SIGWINCH])?;
            let handle = signals.handle();
            let thread = std::thread::Builder::new()
                .name("sigwinch".into())
                .spawn(move || {
                    for _ in signals.forever() {
                        tracing::debug!(message = "SIGWINCH received");
                        let mut listeners =
                            listeners.lock().unwrap_or_else(PoisonError::into_inner);
                        for listener in listeners.iter_mut() {
                            listener();
                        }
                    }
                })?;
            Ok(Self {
                handle,
                thread: Some(thread),
            })
        }
    }

    impl Drop for ResizeWatcher {
        fn drop(&mut self) {
            self.handle.close();
            if let Some(thread) = self.thread.take() {
                drop(thread.join());
            }
        }
    }
}
