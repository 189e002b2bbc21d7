//! Bounded generic channel, filled and drained on one thread.
//!
//! Sends never block: a full buffer is reported as an error instead, so a
//! single caller filling and then draining cannot deadlock.

use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError, TrySendError};

use crate::error::{CollectError, CollectResult};

/// A bounded FIFO channel carrying values of one type.
pub struct Channel<T> {
    sender: Option<SyncSender<T>>,
    receiver: Receiver<T>,
    capacity: usize,
    len: usize,
}

impl<T> Channel<T> {
    /// Creates a channel that buffers up to `capacity` values.
    ///
    /// A zero capacity is rejected: a rendezvous channel cannot be filled
    /// and drained by the same caller.
    pub fn with_capacity(capacity: usize) -> CollectResult<Self> {
        if capacity == 0 {
            return Err(CollectError::invalid_capacity(capacity));
        }
        let (sender, receiver) = mpsc::sync_channel(capacity);
        Ok(Self {
            sender: Some(sender),
            receiver,
            capacity,
            len: 0,
        })
    }

    /// Buffers a value at the back of the channel.
    pub fn send(&mut self, value: T) -> CollectResult<()> {
        let sender = self.sender.as_ref().ok_or(CollectError::ChannelClosed)?;
        match sender.try_send(value) {
            Ok(()) => {
                self.len += 1;
                Ok(())
            }
            Err(TrySendError::Full(_)) => {
                log::debug!("channel full at capacity {}", self.capacity);
                Err(CollectError::channel_full(self.capacity))
            }
            Err(TrySendError::Disconnected(_)) => Err(CollectError::ChannelClosed),
        }
    }

    /// Closes the send side. Buffered values remain available to drain.
    pub fn close(&mut self) {
        if self.sender.take().is_some() {
            log::trace!("channel closed with {} buffered values", self.len);
        }
    }

    /// Returns true once [`Channel::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.sender.is_none()
    }

    /// Takes the next buffered value, if any.
    pub fn recv(&mut self) -> Option<T> {
        match self.receiver.try_recv() {
            Ok(value) => {
                self.len -= 1;
                Some(value)
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Yields every buffered value in send order.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { channel: self }
    }

    /// Returns the number of buffered values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the buffer capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Iterator returned by [`Channel::drain`].
pub struct Drain<'a, T> {
    channel: &'a mut Channel<T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.channel.recv()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.channel.len, Some(self.channel.len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_close_drain() {
        let mut ch = Channel::with_capacity(10).unwrap();
        for i in 0..10 {
            ch.send(i).unwrap();
        }
        assert_eq!(ch.len(), 10);

        ch.close();
        assert!(ch.is_closed());

        let drained: Vec<i32> = ch.drain().collect();
        assert_eq!(drained, (0..10).collect::<Vec<_>>());
        assert!(ch.is_empty());
    }

    #[test]
    fn test_send_when_full() {
        let mut ch = Channel::with_capacity(2).unwrap();
        ch.send("a").unwrap();
        ch.send("b").unwrap();
        assert_eq!(ch.send("c"), Err(CollectError::channel_full(2)));
        assert_eq!(ch.len(), 2);

        assert_eq!(ch.recv(), Some("a"));
        ch.send("c").unwrap();
        assert_eq!(ch.drain().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn test_send_after_close() {
        let mut ch = Channel::with_capacity(3).unwrap();
        ch.send(format!("hello: {}", 0)).unwrap();
        ch.close();
        ch.close();

        assert_eq!(ch.send("late".to_string()), Err(CollectError::ChannelClosed));
        assert_eq!(ch.recv(), Some("hello: 0".to_string()));
        assert_eq!(ch.recv(), None);
    }

    #[test]
    fn test_drain_open_channel_stops_when_empty() {
        let mut ch = Channel::with_capacity(4).unwrap();
        ch.send(1u8).unwrap();
        assert_eq!(ch.drain().size_hint(), (1, Some(1)));
        assert_eq!(ch.drain().collect::<Vec<_>>(), vec![1]);
        assert!(!ch.is_closed());
        ch.send(2).unwrap();
        assert_eq!(ch.recv(), Some(2));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(
            Channel::<i32>::with_capacity(0),
            Err(CollectError::InvalidCapacity(0))
        ));
    }
}
