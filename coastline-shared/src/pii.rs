use std::fmt;

const MASK: &str = "********";

/// A wrapper for visitor-supplied text that masks its value in Debug and Display output.
///
/// Contact form fields travel through `tracing` spans; wrapping them keeps a
/// stray `{:?}` from writing a visitor's email into the browser console.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Masked<T>(pub T);

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

impl<T> Masked<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the real value. Call sites should not hand it to a log macro.
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl Masked<String> {
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}
