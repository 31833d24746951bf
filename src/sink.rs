//! [`futures::Sink`] adapters. Both containers are unbounded, so the sinks are always ready
//! and never fail.

use crate::bag::Bag;
use crate::queue::Queue;
use futures::Sink;
use std::convert::Infallible;
use std::pin::Pin;
use std::task::{Context, Poll};

#[cfg_attr(docsrs, doc(cfg(feature = "sink")))]
impl<E> Sink<E> for Queue<E> {
    type Error = Infallible;

    fn poll_ready(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn start_send(self: Pin<&mut Self>, item: E) -> Result<(), Self::Error> {
        self.get_mut().enqueue(item);
        Ok(())
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn poll_close(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "sink")))]
impl<E> Sink<E> for Bag<E> {
    type Error = Infallible;

    fn poll_ready(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn start_send(self: Pin<&mut Self>, item: E) -> Result<(), Self::Error> {
        self.get_mut().add(item);
        Ok(())
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn poll_close(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }
}

// only built with `cargo test --features sink` (or `--all-features`)
#[cfg(test)]
mod tests {
    use super::*;
    use futures::{SinkExt, StreamExt, stream};
    use static_assertions::assert_impl_all;
    use tokio_test::block_on;

    #[test]
    fn test_sink_static_properties() {
        assert_impl_all!(Queue<usize>: Sink<usize>, Unpin);
        assert_impl_all!(Bag<usize>: Sink<usize>, Unpin);
    }

    #[test]
    fn test_queue_sink_enqueues_in_order() {
        let mut queue = Queue::new();
        block_on(async {
            queue.send(1).await.unwrap();
            queue.feed(2).await.unwrap();
            queue.send_all(&mut stream::iter(3..=5).map(Ok)).await.unwrap();
        });
        assert_eq!("[1, 2, 3, 4, 5]", queue.to_string());
    }

    #[test]
    fn test_bag_sink_adds_at_head() {
        let mut bag = Bag::new();
        block_on(async {
            stream::iter(["a", "b", "c"]).map(Ok).forward(&mut bag).await.unwrap();
        });
        assert_eq!(3, bag.len());
        assert_eq!("[c, b, a]", bag.to_string());
    }
}
