// MIT/Apache2 License

use super::{debug::CallKind, Gl, GlDispatch};
use crate::Error;
use breadgl_enums::{
    self as gl,
    types::{GLbitfield, GLint, GLsizei, GLsync, GLuint64, __GLsync},
};
use std::ptr::NonNull;

/// A fence sync object created by [`Gl::fence_sync`].
///
/// The handle is opaque and never dereferenced. It is not `Copy`: [`Gl::delete_sync`] consumes it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct GlSync(NonNull<__GLsync>);

impl GlSync {
    /// Wrap a sync handle from a raw entry point call.
    ///
    /// # Safety
    ///
    /// `sync` must be a live sync object of the context it is used with.
    #[inline]
    pub unsafe fn from_raw(sync: GLsync) -> Option<Self> {
        NonNull::new(sync as *mut __GLsync).map(Self)
    }

    #[inline]
    pub fn as_raw(&self) -> GLsync {
        self.0.as_ptr()
    }

    /// Give up ownership of the handle without deleting the sync object.
    #[inline]
    pub fn into_raw(self) -> GLsync {
        self.0.as_ptr()
    }
}

/// The successful outcomes of [`Gl::client_wait_sync`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WaitStatus {
    /// The fence was signaled before the call.
    AlreadySignaled,
    /// The fence was signaled while waiting.
    ConditionSatisfied,
    /// The timeout ran out first.
    TimeoutExpired,
}

impl<D: GlDispatch> Gl<D> {
    /// Insert a fence that is signaled once every command issued before it has completed.
    pub fn fence_sync(&self) -> crate::Result<GlSync> {
        let sync = unsafe { self.FenceSync(gl::SYNC_GPU_COMMANDS_COMPLETE, 0)? };
        self.check_after("glFenceSync", CallKind::Allocation)?;

        match unsafe { GlSync::from_raw(sync) } {
            Some(sync) => Ok(sync),
            None => {
                self.check_error()?;
                Err(Error::StaticMsg("glFenceSync returned a null sync object"))
            }
        }
    }

    /// Block until `sync` is signaled or `timeout` nanoseconds pass.
    ///
    /// `flags` is `0` or `GL_SYNC_FLUSH_COMMANDS_BIT`. The timeout is forwarded unchanged.
    pub fn client_wait_sync(
        &self,
        sync: &GlSync,
        flags: GLbitfield,
        timeout: GLuint64,
    ) -> crate::Result<WaitStatus> {
        let status = unsafe { self.ClientWaitSync(sync.as_raw(), flags, timeout)? };
        self.check_after("glClientWaitSync", CallKind::Query)?;
        match status {
            gl::ALREADY_SIGNALED => Ok(WaitStatus::AlreadySignaled),
            gl::CONDITION_SATISFIED => Ok(WaitStatus::ConditionSatisfied),
            gl::TIMEOUT_EXPIRED => Ok(WaitStatus::TimeoutExpired),
            _ => {
                log::error!("glClientWaitSync failed with status {:#x}", status);
                Err(Error::WaitFailed)
            }
        }
    }

    /// Make the server wait for `sync` before executing further commands. Returns immediately.
    pub fn wait_sync(&self, sync: &GlSync) -> crate::Result {
        unsafe { self.WaitSync(sync.as_raw(), 0, gl::TIMEOUT_IGNORED)? };
        self.check_after("glWaitSync", CallKind::Command)
    }

    #[inline]
    pub fn is_sync(&self, sync: &GlSync) -> crate::Result<bool> {
        let is_sync = unsafe { self.IsSync(sync.as_raw())? };
        self.check_after("glIsSync", CallKind::Query)?;
        Ok(is_sync != gl::FALSE)
    }

    /// Poll the fence without waiting.
    pub fn is_signaled(&self, sync: &GlSync) -> crate::Result<bool> {
        let mut status: GLint = 0;
        let mut length: GLsizei = 0;
        unsafe { self.GetSynciv(sync.as_raw(), gl::SYNC_STATUS, 1, &mut length, &mut status)? };
        self.check_after("glGetSynciv", CallKind::Query)?;
        Ok(status as u32 == gl::SIGNALED)
    }

    #[inline]
    pub fn delete_sync(&self, sync: GlSync) -> crate::Result {
        unsafe { self.DeleteSync(sync.into_raw())? };
        self.check_after("glDeleteSync", CallKind::Command)
    }
}
