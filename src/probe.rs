//! Connection probe: one connect-read-close cycle with timing

use crate::{
    defaults,
    models::ProbeOutcome,
    types::{ProbeError, Target},
};
use std::time::{Duration, Instant};
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Executes exactly one connect → read → close cycle against a fixed
/// target and reports a uniform [`ProbeOutcome`] no matter how the
/// cycle terminates.
///
/// The probe sends nothing: the server under test is expected to push an
/// unsolicited UTF-8 response immediately on accept. A single bounded
/// receive is performed and a short read is accepted as the full
/// response. The probe holds no state between invocations and performs
/// no retries.
#[derive(Debug, Clone)]
pub struct ConnectionProbe {
    target: Target,
    timeout: Duration,
    read_limit: usize,
}

impl ConnectionProbe {
    /// Create a probe with the default timeout and read limit
    pub fn new(target: Target) -> Self {
        Self {
            target,
            timeout: defaults::DEFAULT_CONNECT_TIMEOUT,
            read_limit: defaults::READ_LIMIT,
        }
    }

    /// Set the bound covering both connect and read
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of bytes read from the peer
    pub fn with_read_limit(mut self, read_limit: usize) -> Self {
        self.read_limit = read_limit;
        self
    }

    /// Get the probed target
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Run one probe cycle.
    ///
    /// `elapsed_ms` in the returned outcome spans from immediately before
    /// the connect attempt to the instant the outcome is finalized,
    /// whether that is a decoded payload, the timeout bound elapsing, or
    /// a socket error. The stream is dropped on every exit path.
    pub async fn run(&self) -> ProbeOutcome {
        let start = Instant::now();

        match timeout(self.timeout, self.connect_and_receive()).await {
            Ok(Ok(payload)) => ProbeOutcome::success(start.elapsed(), payload),
            Ok(Err(error)) => ProbeOutcome::failed(start.elapsed(), error),
            Err(_) => ProbeOutcome::timed_out(start.elapsed()),
        }
    }

    /// Connect and perform a single bounded receive
    async fn connect_and_receive(&self) -> Result<String, ProbeError> {
        let mut stream = TcpStream::connect((self.target.host.as_str(), self.target.port))
            .await
            .map_err(classify_io_error)?;

        let mut buffer = vec![0u8; self.read_limit];
        let n = stream.read(&mut buffer).await.map_err(classify_io_error)?;
        buffer.truncate(n);

        String::from_utf8(buffer)
            .map_err(|e| ProbeError::Connection(format!("response is not valid UTF-8: {}", e)))
    }
}

/// Map an I/O failure to its probe classification. An OS-level connect
/// timeout counts as a timeout even when it beats the configured bound.
fn classify_io_error(error: std::io::Error) -> ProbeError {
    if error.kind() == std::io::ErrorKind::TimedOut {
        ProbeError::Timeout
    } else {
        ProbeError::Connection(error.to_string())
    }
}
