// MIT/Apache2 License

use std::{cell::Cell, ffi::c_void, fmt, mem, ptr::NonNull};

/// The address of a resolved GL entry point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlFunction(NonNull<c_void>);

impl GlFunction {
    /// Create a new GL function pointer.
    ///
    /// # Safety
    ///
    /// Behavior is undefined if the pointer is not, in fact, a GL function pointer.
    #[inline]
    pub const unsafe fn new(ptr: NonNull<c_void>) -> Self {
        Self(ptr)
    }

    /// Wrap an address returned by a platform loader.
    ///
    /// Returns `None` for null, and for the values `1`, `2`, `3` and `-1` that some
    /// `wglGetProcAddress` implementations return instead of null for unsupported functions.
    ///
    /// # Safety
    ///
    /// Same as [`GlFunction::new`].
    #[inline]
    pub unsafe fn from_raw(ptr: *const c_void) -> Option<Self> {
        match ptr as usize {
            1 | 2 | 3 | usize::MAX => None,
            _ => NonNull::new(ptr as *mut c_void).map(Self),
        }
    }

    /// Get the inner pointer.
    #[inline]
    pub fn into_inner(self) -> NonNull<c_void> {
        self.0
    }

    #[inline]
    pub fn as_ptr(self) -> *const c_void {
        self.0.as_ptr()
    }

    /// Reinterpret the address as a typed function pointer.
    ///
    /// # Safety
    ///
    /// `F` must be a function pointer type matching the native signature of the entry point.
    #[inline]
    pub(crate) unsafe fn cast<F: Copy>(self) -> F {
        debug_assert_eq!(mem::size_of::<F>(), mem::size_of::<*const c_void>());
        mem::transmute_copy::<*const c_void, F>(&self.as_ptr())
    }
}

/// Cache for the typed pointer of a single entry point.
///
/// A slot starts empty and is filled at most once, by the first resolution that succeeds. Failed
/// resolutions leave it empty. The `Cell` keeps slots, and the table holding them, off other
/// threads: a GL context is only current on one thread at a time.
pub(crate) struct Slot<F> {
    cell: Cell<Option<F>>,
}

impl<F: Copy> Slot<F> {
    #[inline]
    pub(crate) const fn empty() -> Self {
        Self {
            cell: Cell::new(None),
        }
    }

    #[inline]
    pub(crate) fn get(&self) -> Option<F> {
        self.cell.get()
    }

    #[inline]
    pub(crate) fn is_resolved(&self) -> bool {
        self.get().is_some()
    }

    /// Return the cached pointer, or run `init` and cache what it returns.
    #[inline]
    pub(crate) fn get_or_try_init<I>(&self, init: I) -> crate::Result<F>
    where
        I: FnOnce() -> crate::Result<F>,
    {
        if let Some(f) = self.get() {
            return Ok(f);
        }

        let f = init()?;
        self.cell.set(Some(f));
        Ok(f)
    }
}

impl<F: Copy> fmt::Debug for Slot<F> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_resolved() {
            "Slot(resolved)"
        } else {
            "Slot(empty)"
        })
    }
}
