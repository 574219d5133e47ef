//! Spawning the client once it has been located.

use crate::core::{Error, Invocation, Result};
use crate::runtime::{command::format_command, locator::Locator};
use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Launches the client binary resolved by a shared [`Locator`]
///
/// # Examples
///
/// ```rust,no_run
/// # use node_locator::runtime::{ClientLauncher, Locator};
/// # use std::sync::Arc;
/// # use std::time::Duration;
/// # #[tokio::main]
/// # async fn main() -> node_locator::core::Result<()> {
/// let locator = Arc::new(Locator::new("/home/alice/.local/share/node-locator"));
/// let launcher = ClientLauncher::new(locator).timeout(Duration::from_secs(30));
///
/// let status = launcher.run(["--version"]).await?;
/// assert!(status.success());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClientLauncher {
    locator: Arc<Locator>,
    timeout: Option<Duration>,
}

impl ClientLauncher {
    pub fn new(locator: Arc<Locator>) -> Self {
        Self {
            locator,
            timeout: None,
        }
    }

    /// Kill the client if it has not exited within `timeout`
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    /// Locate the client and start it with `args`
    ///
    /// Output from the child is forwarded to the log line by line: stdout at
    /// debug level, stderr at warn level. The child is killed if the returned
    /// handle is dropped.
    pub async fn spawn<I, S>(&self, args: I) -> Result<ClientHandle>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let invocation = self.locator.locate().await?;
        let args = args.into_iter().map(Into::into).collect::<Vec<_>>();
        launch(&invocation, &args, self.timeout)
    }

    /// Start the client and wait for it to exit successfully
    pub async fn run<I, S>(&self, args: I) -> Result<ExitStatus>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let status = self.spawn(args).await?.wait().await?;
        if status.success() {
            Ok(status)
        } else {
            Err(Error::ProcessFailed(status))
        }
    }
}

fn launch(
    invocation: &Invocation,
    args: &[String],
    timeout: Option<Duration>,
) -> Result<ClientHandle> {
    info!("{}", format_command(&invocation.to_string(), args));

    let mut child = Command::new(invocation.program())
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| Error::Spawn {
            command: invocation.to_string(),
            source,
        })?;

    let mut readers = Vec::with_capacity(2);
    if let Some(stdout) = child.stdout.take() {
        readers.push(tokio::spawn(forward_lines(stdout, false)));
    }
    if let Some(stderr) = child.stderr.take() {
        readers.push(tokio::spawn(forward_lines(stderr, true)));
    }

    Ok(ClientHandle {
        child,
        timeout,
        readers,
    })
}

async fn forward_lines<R>(reader: R, is_stderr: bool)
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) if is_stderr => warn!(target: "node_locator::client", "{}", line),
            Ok(Some(line)) => debug!(target: "node_locator::client", "{}", line),
            Ok(None) => break,
            Err(e) => {
                debug!("stopped reading client output: {}", e);
                break;
            }
        }
    }
}

/// A running client process
#[derive(Debug)]
pub struct ClientHandle {
    child: Child,
    timeout: Option<Duration>,
    readers: Vec<JoinHandle<()>>,
}

impl ClientHandle {
    /// OS process id, `None` once the child has been reaped
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    pub async fn kill(&mut self) -> Result<()> {
        self.child.kill().await?;
        Ok(())
    }

    /// Wait for the child to exit
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`] after killing the child when the launcher's
    /// timeout elapses first.
    pub async fn wait(mut self) -> Result<ExitStatus> {
        let status = match self.timeout {
            Some(limit) => {
                let outcome = tokio::time::timeout(limit, self.child.wait()).await;
                match outcome {
                    Ok(status) => status?,
                    Err(_) => {
                        warn!("Client did not exit within {:?}, killing it", limit);
                        self.child.kill().await?;
                        return Err(Error::Timeout(limit));
                    }
                }
            }
            None => self.child.wait().await?,
        };

        for reader in self.readers.drain(..) {
            if let Err(e) = reader.await {
                debug!("client output reader failed: {}", e);
            }
        }

        debug!("Client exited with {}", status);
        Ok(status)
    }
}
