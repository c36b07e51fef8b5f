//! Failure values produced by the guarded boundary.
//!
//! [`Try::attempt`](super::Try::attempt) and [`Try::guard`](super::Try::guard)
//! are the only places where raised failure signals become values. Two signals
//! exist in Rust: an `Err` returned by the computation and a panic unwinding
//! out of it. A caught panic becomes a [`Panic`]; [`Captured`] is the default
//! failure type of [`Try`](super::Try) and can hold either.

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

/// A panic caught by the guarded boundary.
///
/// # Examples
///
/// ```rust
/// use fpkernel::control::Panic;
///
/// let panic = Panic::new("index out of bounds");
/// assert_eq!(panic.message(), "index out of bounds");
/// assert_eq!(format!("{panic}"), "computation panicked: index out of bounds");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Panic {
    message: String,
}

impl Panic {
    /// Creates a panic value carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extracts the message from a panic payload.
    ///
    /// `panic!` payloads are either `&'static str` or `String`; anything else
    /// is reported as `"Unknown panic"`.
    pub(crate) fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "Unknown panic".to_string()
        };
        Self { message }
    }

    /// Returns the panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "computation panicked: {}", self.message)
    }
}

impl Error for Panic {}

/// Runs `computation`, turning a panic into a [`Panic`] value.
pub(crate) fn guarded<T, F>(computation: F) -> Result<T, Panic>
where
    F: FnOnce() -> T,
{
    catch_unwind(AssertUnwindSafe(computation)).map_err(|payload| {
        let panic = Panic::from_payload(payload.as_ref());
        tracing::debug!(message = %panic.message(), "guarded computation panicked");
        panic
    })
}

/// The default failure type of [`Try`](super::Try): a shared handle to the
/// error exactly as it was raised.
///
/// `Captured` wraps the original error without re-wrapping or copying it.
/// Clones share the same allocation, so identity survives every combinator
/// that threads a failure through; [`same_as`](Self::same_as) checks it and
/// equality is defined by it.
///
/// Any `Error + Send + Sync + 'static` converts into `Captured`, which is why
/// `?` works inside suppliers handed to [`Try::attempt`](super::Try::attempt).
/// For that conversion to be coherent `Captured` does not implement
/// [`Error`] itself; use [`as_error`](Self::as_error) or convert into
/// `Box<dyn Error + Send + Sync>`.
///
/// # Examples
///
/// ```rust
/// use fpkernel::control::Captured;
/// use std::num::ParseIntError;
///
/// let error = "x".parse::<i32>().unwrap_err();
/// let captured = Captured::from(error.clone());
///
/// assert!(captured.is::<ParseIntError>());
/// assert_eq!(captured.downcast_ref::<ParseIntError>(), Some(&error));
/// assert!(captured.same_as(&captured.clone()));
/// ```
#[derive(Clone)]
pub struct Captured {
    inner: Arc<dyn Error + Send + Sync + 'static>,
}

impl Captured {
    /// Captures `error`.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(error),
        }
    }

    /// Returns `true` if the captured error is of type `E`.
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.inner.is::<E>()
    }

    /// Returns the captured error as `E`, if it is one.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Returns `true` if the failure is a caught panic.
    pub fn is_panic(&self) -> bool {
        self.is::<Panic>()
    }

    /// Returns `true` if both handles point at the same captured error.
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Borrows the captured error.
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }
}

impl<E> From<E> for Captured
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl From<Captured> for Box<dyn Error + Send + Sync + 'static> {
    fn from(captured: Captured) -> Self {
        Box::new(SharedError(captured.inner))
    }
}

impl PartialEq for Captured {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl fmt::Debug for Captured {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, formatter)
    }
}

impl fmt::Display for Captured {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, formatter)
    }
}

impl AsRef<dyn Error + Send + Sync + 'static> for Captured {
    fn as_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.as_error()
    }
}

// Boxed form of a captured error; display and source forward to the original.
struct SharedError(Arc<dyn Error + Send + Sync + 'static>);

impl fmt::Debug for SharedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, formatter)
    }
}

impl fmt::Display for SharedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, formatter)
    }
}

impl Error for SharedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

static_assertions::assert_impl_all!(Panic: Send, Sync, Error);
static_assertions::assert_impl_all!(Captured: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Captured: Error);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug)]
    struct Disk;

    impl fmt::Display for Disk {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "disk unavailable")
        }
    }

    impl Error for Disk {}

    #[rstest]
    #[case(Box::new("static message") as Box<dyn Any + Send>, "static message")]
    #[case(Box::new(String::from("owned message")) as Box<dyn Any + Send>, "owned message")]
    #[case(Box::new(7_u8) as Box<dyn Any + Send>, "Unknown panic")]
    fn panic_from_payload(#[case] payload: Box<dyn Any + Send>, #[case] expected: &str) {
        assert_eq!(Panic::from_payload(payload.as_ref()).message(), expected);
    }

    #[rstest]
    fn guarded_returns_value() {
        assert_eq!(guarded(|| 42), Ok(42));
    }

    #[rstest]
    fn guarded_catches_panic() {
        let result: Result<i32, Panic> = guarded(|| panic!("exploded"));
        assert_eq!(result, Err(Panic::new("exploded")));
    }

    #[rstest]
    fn captured_display_delegates_to_original() {
        let captured = Captured::new(Disk);
        assert_eq!(captured.to_string(), "disk unavailable");
        assert_eq!(format!("{captured:?}"), "Disk");
    }

    #[rstest]
    fn captured_equality_is_identity() {
        let first = Captured::new(Panic::new("same text"));
        let second = Captured::new(Panic::new("same text"));
        assert_eq!(first, first.clone());
        assert_ne!(first, second);
    }

    #[rstest]
    fn captured_converts_into_boxed_error() {
        let boxed: Box<dyn Error + Send + Sync> = Captured::new(Disk).into();
        assert_eq!(boxed.to_string(), "disk unavailable");
    }

    #[rstest]
    fn captured_panic_is_detected() {
        assert!(Captured::from(Panic::new("boom")).is_panic());
        assert!(!Captured::new(Disk).is_panic());
    }
}
