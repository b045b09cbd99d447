//! Lifecycle of one asynchronous call: `idle → pending → (ready | failed)`.

/// State of a form submission or data load.
///
/// Every form and list in the portal holds one of these instead of separate
/// loading / error / success flags.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncOperation<T, E = String> {
    Idle,
    Pending,
    Ready(T),
    Failed(E),
}

impl<T, E> Default for AsyncOperation<T, E> {
    fn default() -> Self {
        AsyncOperation::Idle
    }
}

impl<T, E> AsyncOperation<T, E> {
    pub fn start(&mut self) {
        *self = AsyncOperation::Pending;
    }

    pub fn finish(&mut self, result: Result<T, E>) {
        *self = match result {
            Ok(value) => AsyncOperation::Ready(value),
            Err(error) => AsyncOperation::Failed(error),
        };
    }

    pub fn succeed(&mut self, value: T) {
        *self = AsyncOperation::Ready(value);
    }

    pub fn fail(&mut self, error: E) {
        *self = AsyncOperation::Failed(error);
    }

    pub fn reset(&mut self) {
        *self = AsyncOperation::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, AsyncOperation::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, AsyncOperation::Pending)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, AsyncOperation::Ready(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            AsyncOperation::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            AsyncOperation::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Drop a finished outcome, keeping an in-flight call.
    pub fn settle(&mut self) {
        if matches!(self, AsyncOperation::Ready(_) | AsyncOperation::Failed(_)) {
            self.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut op: AsyncOperation<u32> = AsyncOperation::default();
        assert!(op.is_idle());

        op.start();
        assert!(op.is_pending());
        assert_eq!(op.value(), None);

        op.finish(Ok(7));
        assert!(op.is_ready());
        assert_eq!(op.value(), Some(&7));

        op.start();
        op.finish(Err("boom".to_string()));
        assert_eq!(op.error().map(String::as_str), Some("boom"));
        assert_eq!(op.value(), None);
    }

    #[test]
    fn test_settle_keeps_pending() {
        let mut op: AsyncOperation<()> = AsyncOperation::Pending;
        op.settle();
        assert!(op.is_pending());

        op.fail("nope".to_string());
        op.settle();
        assert!(op.is_idle());
    }
}
