// docdist: documentation environment and dist tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output streaming for processes.
//!
//! ```text
//! run_child()
//!   stdout/stderr reader tasks
//!     each line --> debug!
//!               --> tail    (stderr, last STDERR_TAIL_LINES)
//!   wait
//!   join readers --> ProcessOutput
//! ```

use std::collections::VecDeque;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::builder::{ProcessBuilder, ProcessOutput, STDERR_TAIL_LINES};

/// Trailing lines of one stream.
type StreamTail = VecDeque<String>;

/// Spawns a reader task for a piped stream.
fn spawn_reader<R>(
    stream: Option<R>,
    tail_len: usize,
    process_name: &str,
    stream_name: &'static str,
) -> Option<JoinHandle<StreamTail>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let stream = stream?;
    let process_name = process_name.to_string();
    Some(tokio::spawn(async move {
        read_stream(stream, tail_len, &process_name, stream_name).await
    }))
}

/// Waits for a reader task, tolerating a panicked or absent reader.
async fn join_reader(handle: Option<JoinHandle<StreamTail>>) -> StreamTail {
    match handle {
        Some(handle) => handle.await.unwrap_or_default(),
        None => StreamTail::default(),
    }
}

impl ProcessBuilder {
    /// Runs the child process, streaming its output and waiting for exit.
    pub(super) async fn run_child(
        &self,
        name: &str,
        child: &mut Child,
    ) -> std::io::Result<ProcessOutput> {
        let stdout_handle = spawn_reader(child.stdout.take(), 0, name, "stdout");
        let stderr_handle =
            spawn_reader(child.stderr.take(), STDERR_TAIL_LINES, name, "stderr");

        let status = child.wait().await?;

        join_reader(stdout_handle).await;
        let stderr_tail = join_reader(stderr_handle).await;

        Ok(ProcessOutput::new(
            status.code().unwrap_or(-1),
            stderr_tail.into_iter().collect(),
        ))
    }
}

/// Reads a stream line by line until EOF.
///
/// Lines are decoded lossily: tools like pip occasionally emit bytes in the
/// console code page, and the pipe must be drained regardless.
async fn read_stream<R>(
    reader: R,
    tail_len: usize,
    process_name: &str,
    stream_name: &str,
) -> StreamTail
where
    R: AsyncRead + Unpin,
{
    let mut tail = StreamTail::new();
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf)
                    .trim_end_matches(['\r', '\n'])
                    .to_string();
                debug!(process = %process_name, stream = %stream_name, "{line}");
                if tail_len > 0 {
                    if tail.len() == tail_len {
                        tail.pop_front();
                    }
                    tail.push_back(line);
                }
            }
            Err(e) => {
                warn!(
                    process = %process_name,
                    stream = %stream_name,
                    error = %e,
                    "error reading stream"
                );
                break;
            }
        }
    }

    tail
}
