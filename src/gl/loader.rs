// MIT/Apache2 License

use super::{functions::GlFunctions, GlDispatch, GlFunction, ProcLoader, Slot};
use crate::{util::StaticCstr, Error};
use std::{
    cell::RefCell,
    ffi::{c_void, CStr},
    fmt,
};

/// When the convenience wrappers drain and log the driver's error queue.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorChecks {
    /// Leave the queue alone. Callers use [`Gl::check_error`] themselves.
    Never,
    /// After calls that allocate driver memory, such as `buffer_data` and `tex_image_2d`.
    AfterAllocations,
    /// After every convenience wrapper.
    AfterEveryCall,
}

impl Default for ErrorChecks {
    #[inline]
    fn default() -> Self {
        Self::Never
    }
}

/// Options controlling how a [`Gl`] resolves and checks its functions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GlOptions {
    /// If the core name of an entry point is missing, try its extension aliases
    /// (`glGenFramebuffersEXT` for `glGenFramebuffers`, and so on).
    pub fallbacks: bool,
    /// When to drain and log the error queue.
    pub error_checks: ErrorChecks,
}

impl Default for GlOptions {
    #[inline]
    fn default() -> Self {
        Self {
            fallbacks: true,
            error_checks: ErrorChecks::Never,
        }
    }
}

/// The table of OpenGL entry points for one context.
///
/// Every entry point is looked up through the dispatcher the first time it is called, then
/// cached for the lifetime of the `Gl`. A `Gl` is not `Sync`: like the context it belongs to, it
/// must only be used from the thread where that context is current.
pub struct Gl<D> {
    dispatch: RefCell<D>,
    pub(crate) functions: GlFunctions,
    options: GlOptions,
}

impl<D: GlDispatch> Gl<D> {
    /// Create a table that resolves functions through `dispatch`.
    #[inline]
    pub fn new(dispatch: D) -> Self {
        Self::with_options(dispatch, GlOptions::default())
    }

    #[inline]
    pub fn with_options(dispatch: D, options: GlOptions) -> Self {
        Self {
            dispatch: RefCell::new(dispatch),
            functions: GlFunctions::new(),
            options,
        }
    }

    #[inline]
    pub fn options(&self) -> GlOptions {
        self.options
    }

    /// Take back the dispatcher. Resolved functions are forgotten.
    #[inline]
    pub fn into_dispatch(self) -> D {
        self.dispatch.into_inner()
    }

    /// Look up an entry point that is not part of this table. The result is not cached.
    #[inline]
    pub fn get_proc_address(&self, name: &CStr) -> crate::Result<Option<GlFunction>> {
        let mut dispatch = self
            .dispatch
            .try_borrow_mut()
            .map_err(|_| Error::DispatchBusy)?;
        let addr = dispatch.get_proc_address(name);
        // SAFETY: GlDispatch guarantees non-null addresses belong to the named function
        Ok(unsafe { GlFunction::from_raw(addr) })
    }

    /// Find the address of an entry point, trying its aliases after the core name.
    pub(crate) fn resolve(&self, names: &[StaticCstr]) -> crate::Result<GlFunction> {
        let (primary, aliases) = names
            .split_first()
            .ok_or(Error::StaticMsg("Entry point has no name"))?;

        log::trace!("Resolving {}", primary.as_str());
        if let Some(f) = self.get_proc_address(primary.get())? {
            log::debug!("Resolved {} at {:p}", primary.as_str(), f.as_ptr());
            return Ok(f);
        }

        if self.options.fallbacks {
            for alias in aliases {
                log::trace!("Resolving {} as {}", primary.as_str(), alias.as_str());
                if let Some(f) = self.get_proc_address(alias.get())? {
                    log::debug!(
                        "{} is unavailable, using {} at {:p}",
                        primary.as_str(),
                        alias.as_str(),
                        f.as_ptr()
                    );
                    return Ok(f);
                }
            }
        }

        log::warn!(
            "{} is not supported by the current context",
            primary.as_str()
        );
        Err(Error::NotSupported(primary.as_str()))
    }

    /// Return the cached pointer in `slot`, resolving it on first use.
    #[inline]
    pub(crate) fn load<F: Copy>(&self, slot: &Slot<F>, names: &[StaticCstr]) -> crate::Result<F> {
        slot.get_or_try_init(|| {
            let f = self.resolve(names)?;
            // SAFETY: the slot type is the registry signature of the names it is resolved with
            Ok(unsafe { f.cast::<F>() })
        })
    }
}

impl<F: FnMut(&CStr) -> *const c_void> Gl<ProcLoader<F>> {
    /// Create a table that resolves functions with a closure.
    ///
    /// ```no_run
    /// # fn platform_get_proc_address(_: &std::ffi::CStr) -> *const std::ffi::c_void { std::ptr::null() }
    /// let gl = unsafe { breadgl::Gl::load_with(|name: &std::ffi::CStr| platform_get_proc_address(name)) };
    /// ```
    ///
    /// # Safety
    ///
    /// The closure must uphold the contract of [`GlDispatch`].
    #[inline]
    pub unsafe fn load_with(loader: F) -> Self {
        Self::new(ProcLoader::new(loader))
    }
}

impl<D> fmt::Debug for Gl<D> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gl")
            .field("resolved", &self.functions.resolved_count())
            .field("options", &self.options)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::testing::{self, with_driver, MockDispatch};
    use std::{cell::Cell, ptr, rc::Rc};

    /// Looks the same name up again through the table it belongs to.
    struct Reentrant {
        gl: Rc<Cell<*const Gl<Reentrant>>>,
        busy: Rc<Cell<Option<bool>>>,
    }

    unsafe impl GlDispatch for Reentrant {
        fn get_proc_address(&mut self, name: &CStr) -> *const c_void {
            let gl = self.gl.get();
            if !gl.is_null() {
                let nested = unsafe { &*gl }.get_proc_address(name);
                self.busy
                    .set(Some(matches!(nested, Err(Error::DispatchBusy))));
            }
            ptr::null()
        }
    }

    #[test]
    fn nothing_is_resolved_up_front() {
        let gl = testing::mock_gl();
        assert!(!gl.is_resolved("glGenBuffers"));
        with_driver(|d| assert!(d.lookups.is_empty()));
        assert_eq!(
            format!("{:?}", gl),
            "Gl { resolved: 0, options: GlOptions { fallbacks: true, error_checks: Never } }"
        );
    }

    #[test]
    fn resolving_twice_looks_up_once() {
        let gl = testing::mock_gl();
        gl.gen_buffers(2).unwrap();
        gl.gen_buffers(2).unwrap();

        assert!(gl.is_resolved("glGenBuffers"));
        with_driver(|d| assert_eq!(d.lookups, vec!["glGenBuffers".to_string()]));
    }

    #[test]
    fn unsupported_functions_are_reported_by_name() {
        let gl = testing::mock_gl();
        with_driver(|d| {
            d.unsupported = vec![
                "glDrawBuffers",
                "glDrawBuffersARB",
                "glDrawBuffersATI",
                "glDrawBuffersEXT",
            ]
        });

        assert!(matches!(
            gl.draw_buffers(&[breadgl_enums::BACK]),
            Err(Error::NotSupported("glDrawBuffers"))
        ));
        with_driver(|d| {
            assert!(d.calls.is_empty());
            assert_eq!(d.lookups.len(), 4);
        });

        // failures are not cached
        assert!(gl.draw_buffers(&[breadgl_enums::BACK]).is_err());
        with_driver(|d| assert_eq!(d.lookups.len(), 8));
        assert!(!gl.is_resolved("glDrawBuffers"));
    }

    #[test]
    fn aliases_are_tried_in_order() {
        let gl = testing::mock_gl();
        with_driver(|d| d.unsupported = vec!["glGenFramebuffers"]);

        assert_eq!(gl.gen_framebuffers(1).unwrap().len(), 1);
        with_driver(|d| {
            assert_eq!(
                d.lookups,
                vec!["glGenFramebuffers".to_string(), "glGenFramebuffersEXT".to_string()]
            )
        });
    }

    #[test]
    fn aliases_can_be_turned_off() {
        let gl = testing::mock_gl_with(GlOptions {
            fallbacks: false,
            ..GlOptions::default()
        });
        with_driver(|d| d.unsupported = vec!["glGenFramebuffers"]);

        assert!(matches!(
            gl.gen_framebuffers(1),
            Err(Error::NotSupported("glGenFramebuffers"))
        ));
        with_driver(|d| assert_eq!(d.lookups, vec!["glGenFramebuffers".to_string()]));
    }

    #[test]
    fn preload_reports_missing_functions() {
        let gl = testing::mock_gl();
        let missing = gl.preload();

        assert!(missing.contains(&"glDispatchCompute"));
        assert!(!missing.contains(&"glGenBuffers"));
        assert!(gl.is_resolved("glGenBuffers"));
        assert!(!gl.is_resolved("glDispatchCompute"));
    }

    #[test]
    fn supports_looks_up_by_name() {
        let gl = testing::mock_gl();
        assert!(gl.supports("glFenceSync"));
        assert!(gl.is_resolved("glFenceSync"));
        assert!(!gl.supports("glDispatchCompute"));

        // not in the table, so never looked up
        assert!(!gl.supports("glNotARealFunction"));
        with_driver(|d| assert!(!d.lookups.iter().any(|l| l == "glNotARealFunction")));
    }

    #[test]
    fn uncached_lookups() {
        let gl = testing::mock_gl();
        let name = CStr::from_bytes_with_nul(b"glGetError\0").unwrap();

        assert!(gl.get_proc_address(name).unwrap().is_some());
        assert!(gl.get_proc_address(name).unwrap().is_some());
        assert!(!gl.is_resolved("glGetError"));
        with_driver(|d| assert_eq!(d.lookups.len(), 2));
    }

    #[test]
    fn wgl_sentinels_count_as_missing() {
        let gl = unsafe { Gl::load_with(|_: &CStr| 2usize as *const c_void) };
        assert!(matches!(
            gl.get_error(),
            Err(Error::NotSupported("glGetError"))
        ));

        let gl = unsafe { Gl::load_with(|_: &CStr| ptr::null()) };
        assert!(matches!(gl.get_error(), Err(Error::NotSupported(_))));
    }

    #[test]
    fn dispatch_is_returned() {
        let gl = Gl::new(MockDispatch);
        let _dispatch: MockDispatch = gl.into_dispatch();
    }

    #[test]
    fn reentrant_dispatch_is_refused() {
        let (table, busy) = (Rc::new(Cell::new(ptr::null())), Rc::new(Cell::new(None)));
        let gl = Gl::new(Reentrant {
            gl: table.clone(),
            busy: busy.clone(),
        });
        table.set(&gl as *const Gl<Reentrant>);

        let name = CStr::from_bytes_with_nul(b"glGetError\0").unwrap();
        assert!(gl.get_proc_address(name).unwrap().is_none());
        assert_eq!(busy.get(), Some(true));

        // the outer lookup still finishes, and nothing is left borrowed
        busy.set(None);
        assert!(matches!(gl.get_error(), Err(Error::NotSupported("glGetError"))));
        assert_eq!(busy.get(), Some(true));

        table.set(ptr::null());
        assert!(gl.get_proc_address(name).unwrap().is_none());
    }
}
