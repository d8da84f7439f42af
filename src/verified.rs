/// A wrapper for data that has passed sanitization and is safe to forward.
///
/// `Verified<T>` is the output type of every [`Sanitizer`](crate::Sanitizer).
/// Unlike a raw value or a [`Tainted<T>`](crate::Tainted), holding a
/// `Verified<T>` is proof that the value went through a controlled
/// validation path. It is what the query filter attaches to a
/// [`QuerySpec`](crate::QuerySpec).
///
/// # Construction Invariants
///
/// External code cannot construct `Verified<T>`: there is no public
/// constructor and no `From<T>` impl. Construction happens only through
/// `new_unchecked`, which is `pub(crate)` and may only be called after a
/// sanitizer's rules have been applied.
///
/// # Access
///
/// Access is ergonomic but explicit: [`AsRef::as_ref`] borrows the value,
/// [`into_inner`](Self::into_inner) consumes it. No `Deref`, no `Default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verified<T> {
    inner: T,
}

impl<T> Verified<T> {
    /// Creates a `Verified<T>` without performing validation.
    ///
    /// Policy-level safety: callers must have already validated the value.
    /// This is why the constructor is `pub(crate)`: only the sanitizers in
    /// this crate are trusted to call it.
    pub(crate) fn new_unchecked(value: T) -> Self {
        Self { inner: value }
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> AsRef<T> for Verified<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}
