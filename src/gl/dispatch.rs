// MIT/Apache2 License

use std::{
    ffi::{c_void, CStr},
    fmt,
};

/// The type used to look up OpenGL entry points.
///
/// This is the seam between `breadgl` and whatever created the context: GLX, EGL, WGL, CGL, or a
/// windowing library wrapping one of them. Lookups happen lazily, the first time each function is
/// called through a [`Gl`](super::Gl).
///
/// # Safety
///
/// A non-null address returned from `get_proc_address` must be the address of the named entry
/// point for the context the dispatcher belongs to, with the signature the OpenGL registry gives
/// that name. `breadgl` casts it to that signature and calls it.
pub unsafe trait GlDispatch {
    /// Get the procedural address of the given function, or null if it is not available.
    fn get_proc_address(&mut self, name: &CStr) -> *const c_void;
}

unsafe impl<D: GlDispatch + ?Sized> GlDispatch for &mut D {
    #[inline]
    fn get_proc_address(&mut self, name: &CStr) -> *const c_void {
        (**self).get_proc_address(name)
    }
}

unsafe impl<D: GlDispatch + ?Sized> GlDispatch for Box<D> {
    #[inline]
    fn get_proc_address(&mut self, name: &CStr) -> *const c_void {
        (**self).get_proc_address(name)
    }
}

/// A [`GlDispatch`] backed by a closure, usually a windowing library's `get_proc_address`.
pub struct ProcLoader<F> {
    loader: F,
}

impl<F: FnMut(&CStr) -> *const c_void> ProcLoader<F> {
    /// Wrap a closure that resolves entry point names.
    ///
    /// # Safety
    ///
    /// The closure must uphold the contract of [`GlDispatch`].
    #[inline]
    pub unsafe fn new(loader: F) -> Self {
        Self { loader }
    }
}

unsafe impl<F: FnMut(&CStr) -> *const c_void> GlDispatch for ProcLoader<F> {
    #[inline]
    fn get_proc_address(&mut self, name: &CStr) -> *const c_void {
        (self.loader)(name)
    }
}

impl<F> fmt::Debug for ProcLoader<F> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProcLoader")
    }
}
