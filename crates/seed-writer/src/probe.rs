//! Backpressure observation for async sinks.

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::AsyncWrite;

/// Pass-through [`AsyncWrite`] that counts how often the inner sink pushed
/// back.
///
/// A stall is one episode of `Poll::Pending` following a ready poll: the
/// writer is suspended until the sink drains. Repeated pending polls within
/// the same episode count once.
#[derive(Debug)]
pub struct BackpressureProbe<W> {
    inner: W,
    stalls: u64,
    stalled: bool,
}

impl<W> BackpressureProbe<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            stalls: 0,
            stalled: false,
        }
    }

    /// Number of stall episodes observed so far.
    pub fn stalls(&self) -> u64 {
        self.stalls
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn observe<T>(&mut self, poll: Poll<T>) -> Poll<T> {
        match poll {
            Poll::Pending => {
                if !self.stalled {
                    self.stalled = true;
                    self.stalls += 1;
                }
                Poll::Pending
            }
            ready => {
                self.stalled = false;
                ready
            }
        }
    }
}

impl<W: AsyncWrite + Unpin> AsyncWrite for BackpressureProbe<W> {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        let this = self.get_mut();
        let poll = Pin::new(&mut this.inner).poll_write(cx, buf);
        this.observe(poll)
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        let this = self.get_mut();
        let poll = Pin::new(&mut this.inner).poll_flush(cx);
        this.observe(poll)
    }

    fn poll_shutdown(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        let this = self.get_mut();
        let poll = Pin::new(&mut this.inner).poll_shutdown(cx);
        this.observe(poll)
    }
}
