use crate::core::error::CapacityError;

/// Last-in first-out container with a fixed capacity.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> Stack<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: T) -> Result<(), CapacityError> {
        if self.data.len() == self.capacity {
            return Err(CapacityError::overflow(self.capacity));
        }

        self.data.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, CapacityError> {
        self.data
            .pop()
            .ok_or(CapacityError::underflow(self.capacity))
    }

    pub fn peek(&self) -> Result<&T, CapacityError> {
        self.data
            .last()
            .ok_or(CapacityError::underflow(self.capacity))
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
