// MIT/Apache2 License

use std::{ffi::CStr, fmt};

/// Static container for a CStr.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub(crate) struct StaticCstr {
    inner: &'static str,
}

impl StaticCstr {
    /// `inner` must end in a nul byte and contain no other.
    #[inline]
    pub(crate) const fn new(inner: &'static str) -> Self {
        Self { inner }
    }

    #[inline]
    pub(crate) fn get(self) -> &'static CStr {
        let bytes = self.inner.as_bytes();
        debug_assert_eq!(bytes.last(), Some(&b'\0'));
        // SAFETY: every StaticCstr is built from a concat!() ending in "\0"
        unsafe { CStr::from_bytes_with_nul_unchecked(bytes) }
    }

    /// The name without its terminator.
    #[inline]
    pub(crate) fn as_str(self) -> &'static str {
        &self.inner[..self.inner.len() - 1]
    }
}

impl fmt::Debug for StaticCstr {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}
