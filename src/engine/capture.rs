// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Console capture for engine runs.
//!
//! The engine's console output is written into a single buffer guarded by an
//! async mutex. A [`CaptureSession`] owns the buffer for one invocation; a
//! second caller waits in [`ConsoleCapture::acquire`] until the session is
//! finished or dropped, so two runs never interleave their output.

use std::fmt;
use std::io::{self, Write};

use tokio::sync::{Mutex, MutexGuard};

/// Everything the engine printed during one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput(String);

impl CapturedOutput {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CapturedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Default)]
pub struct ConsoleCapture {
    buffer: Mutex<Vec<u8>>,
}

impl ConsoleCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive use of the console and start an empty session.
    pub async fn acquire(&self) -> CaptureSession<'_> {
        CaptureSession::start(self.buffer.lock().await)
    }

    /// Start a session only if no other session is active.
    pub fn try_acquire(&self) -> Option<CaptureSession<'_>> {
        self.buffer.try_lock().ok().map(CaptureSession::start)
    }
}

/// Exclusive, scoped access to the console buffer.
///
/// Releasing happens on drop, so an engine failure part-way through a run
/// still frees the console for the next caller.
pub struct CaptureSession<'a> {
    buffer: MutexGuard<'a, Vec<u8>>,
}

impl<'a> CaptureSession<'a> {
    fn start(mut buffer: MutexGuard<'a, Vec<u8>>) -> Self {
        buffer.clear();
        Self { buffer }
    }

    /// End the session and hand back the captured text.
    pub fn finish(mut self) -> CapturedOutput {
        let bytes = std::mem::take(&mut *self.buffer);
        CapturedOutput(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Write for CaptureSession<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for CaptureSession<'_> {
    fn drop(&mut self) {
        self.buffer.clear();
    }
}
