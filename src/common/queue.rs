use crate::core::error::CapacityError;

/// First-in first-out circular buffer with a fixed capacity.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    data: Box<[Option<T>]>,
    front: usize,
    len: usize,
}

impl<T> Queue<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: std::iter::repeat_with(|| None).take(capacity).collect(),
            front: 0,
            len: 0,
        }
    }

    pub fn enqueue(&mut self, value: T) -> Result<(), CapacityError> {
        if self.len == self.capacity() {
            return Err(CapacityError::overflow(self.capacity()));
        }

        let rear = (self.front + self.len) % self.capacity();
        self.data[rear] = Some(value);
        self.len += 1;
        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<T, CapacityError> {
        if self.is_empty() {
            return Err(CapacityError::underflow(self.capacity()));
        }

        let value = self.data[self.front].take();
        self.front = (self.front + 1) % self.capacity();
        self.len -= 1;

        // Occupied slots between `front` and `front + len` are always `Some`.
        value.ok_or(CapacityError::underflow(self.capacity()))
    }

    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.data[self.front].as_ref()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::core::error::CapacityErrorKind;

    use super::*;

    fn create_full_queue() -> Queue<usize> {
        let mut queue = Queue::with_capacity(3);
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        queue.enqueue(3).unwrap();
        queue
    }

    #[test]
    fn dequeue_fifo() {
        let mut queue = create_full_queue();

        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.dequeue(), Ok(3));
        assert!(queue.is_empty());
    }

    #[test]
    fn enqueue_overflow() {
        let mut queue = create_full_queue();

        assert_matches!(
            queue.enqueue(4),
            Err(CapacityError {
                kind: CapacityErrorKind::Overflow,
                capacity: 3
            })
        );
    }

    #[test]
    fn dequeue_underflow() {
        let mut queue = Queue::<usize>::with_capacity(3);

        assert_matches!(
            queue.dequeue(),
            Err(CapacityError {
                kind: CapacityErrorKind::Underflow,
                ..
            })
        );
    }

    #[test]
    fn circular_reuse() {
        let mut queue = create_full_queue();

        assert_eq!(queue.dequeue(), Ok(1));
        queue.enqueue(4).unwrap();
        assert_eq!(queue.len(), 3);

        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.dequeue(), Ok(3));
        assert_eq!(queue.peek(), Some(&4));
        assert_eq!(queue.dequeue(), Ok(4));
    }

    #[test]
    fn full_then_empty() {
        let mut queue = create_full_queue();
        assert_matches!(queue.enqueue(4), Err(_));

        for expected in 1..=3 {
            assert_eq!(queue.dequeue(), Ok(expected));
        }

        assert_matches!(queue.dequeue(), Err(_));
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn zero_capacity() {
        let mut queue = Queue::with_capacity(0);

        assert_matches!(queue.enqueue(1), Err(_));
        assert_matches!(queue.dequeue(), Err(_));
    }
}
