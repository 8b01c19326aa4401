// MIT/Apache2 License

use super::{marshal, ErrorChecks, Gl, GlDispatch};
use breadgl_enums::{
    self as gl,
    types::{GLchar, GLenum, GLsizei, GLuint},
};
use std::{borrow::Cow, ffi::c_void, fmt, ptr, slice};

/// How many times [`Gl::drain_errors`] calls `glGetError` before giving up.
///
/// Without a current context some drivers report `GL_INVALID_OPERATION` forever.
pub const MAX_DRAINED_ERRORS: usize = 16;

/// An error code from the driver's error queue.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidEnum,
    InvalidValue,
    InvalidOperation,
    StackOverflow,
    StackUnderflow,
    OutOfMemory,
    InvalidFramebufferOperation,
    ContextLost,
    /// A code this crate does not know the name of.
    Other(GLenum),
}

impl ErrorCode {
    /// Interpret a `glGetError` result. `GL_NO_ERROR` becomes `None`.
    #[inline]
    pub fn from_raw(code: GLenum) -> Option<Self> {
        Some(match code {
            gl::NO_ERROR => return None,
            gl::INVALID_ENUM => Self::InvalidEnum,
            gl::INVALID_VALUE => Self::InvalidValue,
            gl::INVALID_OPERATION => Self::InvalidOperation,
            gl::STACK_OVERFLOW => Self::StackOverflow,
            gl::STACK_UNDERFLOW => Self::StackUnderflow,
            gl::OUT_OF_MEMORY => Self::OutOfMemory,
            gl::INVALID_FRAMEBUFFER_OPERATION => Self::InvalidFramebufferOperation,
            gl::CONTEXT_LOST => Self::ContextLost,
            other => Self::Other(other),
        })
    }

    #[inline]
    pub fn into_raw(self) -> GLenum {
        match self {
            Self::InvalidEnum => gl::INVALID_ENUM,
            Self::InvalidValue => gl::INVALID_VALUE,
            Self::InvalidOperation => gl::INVALID_OPERATION,
            Self::StackOverflow => gl::STACK_OVERFLOW,
            Self::StackUnderflow => gl::STACK_UNDERFLOW,
            Self::OutOfMemory => gl::OUT_OF_MEMORY,
            Self::InvalidFramebufferOperation => gl::INVALID_FRAMEBUFFER_OPERATION,
            Self::ContextLost => gl::CONTEXT_LOST,
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for ErrorCode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnum => f.write_str("GL_INVALID_ENUM"),
            Self::InvalidValue => f.write_str("GL_INVALID_VALUE"),
            Self::InvalidOperation => f.write_str("GL_INVALID_OPERATION"),
            Self::StackOverflow => f.write_str("GL_STACK_OVERFLOW"),
            Self::StackUnderflow => f.write_str("GL_STACK_UNDERFLOW"),
            Self::OutOfMemory => f.write_str("GL_OUT_OF_MEMORY"),
            Self::InvalidFramebufferOperation => f.write_str("GL_INVALID_FRAMEBUFFER_OPERATION"),
            Self::ContextLost => f.write_str("GL_CONTEXT_LOST"),
            Self::Other(code) => write!(f, "{:#06x}", code),
        }
    }
}

/// What kind of call a convenience wrapper just made, for [`ErrorChecks`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum CallKind {
    Command,
    Allocation,
    /// Reads state back. Only checked under [`ErrorChecks::AfterEveryCall`].
    Query,
}

/// A message read back from the debug message log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugMessage {
    pub source: GLenum,
    pub kind: GLenum,
    pub id: GLuint,
    pub severity: GLenum,
    pub message: String,
}

impl<D: GlDispatch> Gl<D> {
    /// Pop one code off the error queue.
    #[inline]
    pub fn get_error(&self) -> crate::Result<Option<ErrorCode>> {
        let code = unsafe { self.GetError()? };
        Ok(ErrorCode::from_raw(code))
    }

    /// Empty the error queue, returning the codes in the order the driver reported them.
    ///
    /// Stops after [`MAX_DRAINED_ERRORS`] reads. The driver may merge repeated errors, so the
    /// result is a diagnostic, not a count.
    pub fn drain_errors(&self) -> crate::Result<Vec<ErrorCode>> {
        let mut codes = Vec::new();
        while codes.len() < MAX_DRAINED_ERRORS {
            match self.get_error()? {
                Some(code) => codes.push(code),
                None => break,
            }
        }

        Ok(codes)
    }

    /// Drain the error queue and log every code. `after` names the operation being checked.
    pub fn log_errors(&self, after: &str) -> crate::Result<usize> {
        let codes = self.drain_errors()?;
        for code in &codes {
            log::error!("OpenGL error after {}: {}", after, code);
        }

        Ok(codes.len())
    }

    /// Drain the error queue and fail with the first code, if there was one.
    pub fn check_error(&self) -> crate::Result {
        let mut codes = self.drain_errors()?.into_iter();
        match codes.next() {
            None => Ok(()),
            Some(first) => {
                codes.for_each(|code| log::warn!("Additional OpenGL error: {}", code));
                Err(first.into())
            }
        }
    }

    /// Apply the configured [`ErrorChecks`] after a convenience wrapper.
    #[inline]
    pub(crate) fn check_after(&self, function: &'static str, kind: CallKind) -> crate::Result {
        let check = match self.options().error_checks {
            ErrorChecks::Never => false,
            ErrorChecks::AfterAllocations => kind == CallKind::Allocation,
            ErrorChecks::AfterEveryCall => true,
        };

        if check {
            self.log_errors(function)?;
        }

        Ok(())
    }

    /// Route KHR_debug output into the `log` crate.
    ///
    /// Enables `GL_DEBUG_OUTPUT` and `GL_DEBUG_OUTPUT_SYNCHRONOUS`, so messages are logged on the
    /// thread that caused them.
    pub fn enable_debug_output(&self) -> crate::Result {
        unsafe {
            self.DebugMessageCallback(Some(log_debug_message), ptr::null())?;
            self.Enable(gl::DEBUG_OUTPUT)?;
            self.Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS)?;
        }
        log::debug!("Routing OpenGL debug output to the log");
        self.check_after("glDebugMessageCallback", CallKind::Command)
    }

    /// Insert an application message into the debug stream.
    pub fn debug_message_insert(
        &self,
        source: GLenum,
        kind: GLenum,
        id: GLuint,
        severity: GLenum,
        message: &str,
    ) -> crate::Result {
        let length = marshal::length("glDebugMessageInsert", message.len())?;
        unsafe {
            self.DebugMessageInsert(
                source,
                kind,
                id,
                severity,
                length,
                message.as_ptr().cast(),
            )?;
        }
        self.check_after("glDebugMessageInsert", CallKind::Command)
    }

    /// Open a named debug group. Close it with [`Gl::pop_debug_group`].
    pub fn push_debug_group(&self, source: GLenum, id: GLuint, message: &str) -> crate::Result {
        let length = marshal::length("glPushDebugGroup", message.len())?;
        unsafe { self.PushDebugGroup(source, id, length, message.as_ptr().cast())? };
        self.check_after("glPushDebugGroup", CallKind::Command)
    }

    #[inline]
    pub fn pop_debug_group(&self) -> crate::Result {
        unsafe { self.PopDebugGroup()? };
        self.check_after("glPopDebugGroup", CallKind::Command)
    }

    /// Attach a label to an object, shown by debuggers and in debug messages.
    pub fn object_label(&self, identifier: GLenum, name: GLuint, label: &str) -> crate::Result {
        let length = marshal::length("glObjectLabel", label.len())?;
        unsafe { self.ObjectLabel(identifier, name, length, label.as_ptr().cast())? };
        self.check_after("glObjectLabel", CallKind::Command)
    }

    /// Read an object's label back.
    pub fn get_object_label(&self, identifier: GLenum, name: GLuint) -> crate::Result<String> {
        let capacity = marshal::written(self.get_integer(gl::MAX_LABEL_LENGTH)?, usize::MAX);
        let label =
            marshal::read_string("glGetObjectLabel", capacity, |buf_size, length, label| unsafe {
                self.GetObjectLabel(identifier, name, buf_size, length, label)
            })?;
        self.check_after("glGetObjectLabel", CallKind::Query)?;
        Ok(label)
    }

    /// Fetch up to `count` stored messages from the debug message log.
    pub fn get_debug_message_log(&self, count: usize) -> crate::Result<Vec<DebugMessage>> {
        const FUNCTION: &str = "glGetDebugMessageLog";

        if count == 0 {
            return Ok(Vec::new());
        }

        let max_length = marshal::written(
            self.get_integer(gl::MAX_DEBUG_MESSAGE_LENGTH)?,
            usize::MAX,
        );
        let capacity = count
            .checked_mul(max_length)
            .ok_or(crate::Error::LengthOverflow {
                function: FUNCTION,
                length: usize::MAX,
            })?;

        let mut sources: Vec<GLenum> = vec![0; count];
        let mut kinds: Vec<GLenum> = vec![0; count];
        let mut ids: Vec<GLuint> = vec![0; count];
        let mut severities: Vec<GLenum> = vec![0; count];
        let mut lengths: Vec<GLsizei> = vec![0; count];
        let mut text = vec![0u8; capacity];

        let fetched = unsafe {
            self.GetDebugMessageLog(
                marshal::length(FUNCTION, count)?,
                marshal::length(FUNCTION, capacity)?,
                sources.as_mut_ptr(),
                kinds.as_mut_ptr(),
                ids.as_mut_ptr(),
                severities.as_mut_ptr(),
                lengths.as_mut_ptr(),
                text.as_mut_ptr().cast::<GLchar>(),
            )?
        };
        let fetched = (fetched as usize).min(count);

        // messages are packed back to back, each with its nul terminator
        let mut offset = 0;
        let mut messages = Vec::with_capacity(fetched);
        for i in 0..fetched {
            let len = marshal::written(lengths[i], capacity - offset);
            let raw = &text[offset..offset + len];
            offset += len;

            let raw = raw.strip_suffix(&[0]).unwrap_or(raw);
            messages.push(DebugMessage {
                source: sources[i],
                kind: kinds[i],
                id: ids[i],
                severity: severities[i],
                message: marshal::decode(FUNCTION, raw.to_vec())?,
            });
        }

        self.check_after(FUNCTION, CallKind::Query)?;
        Ok(messages)
    }
}

fn source_name(source: GLenum) -> &'static str {
    match source {
        gl::DEBUG_SOURCE_API => "API",
        gl::DEBUG_SOURCE_WINDOW_SYSTEM => "Window",
        gl::DEBUG_SOURCE_SHADER_COMPILER => "ShaderCompiler",
        gl::DEBUG_SOURCE_THIRD_PARTY => "3rdParty",
        gl::DEBUG_SOURCE_APPLICATION => "App",
        _ => "OtherSrc",
    }
}

fn type_name(kind: GLenum) -> &'static str {
    match kind {
        gl::DEBUG_TYPE_ERROR => "Error",
        gl::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "Deprecated",
        gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "Undefined",
        gl::DEBUG_TYPE_PORTABILITY => "Portability",
        gl::DEBUG_TYPE_PERFORMANCE => "Performance",
        gl::DEBUG_TYPE_MARKER => "Marker",
        gl::DEBUG_TYPE_PUSH_GROUP => "PushGroup",
        gl::DEBUG_TYPE_POP_GROUP => "PopGroup",
        _ => "OtherTy",
    }
}

pub(crate) fn severity_level(severity: GLenum) -> log::Level {
    match severity {
        gl::DEBUG_SEVERITY_HIGH => log::Level::Error,
        gl::DEBUG_SEVERITY_MEDIUM => log::Level::Warn,
        gl::DEBUG_SEVERITY_LOW => log::Level::Info,
        _ => log::Level::Debug,
    }
}

unsafe extern "system" fn log_debug_message(
    source: GLenum,
    kind: GLenum,
    id: GLuint,
    severity: GLenum,
    length: GLsizei,
    message: *const GLchar,
    _user_param: *const c_void,
) {
    // assert the correct signature
    const _: gl::types::GLDEBUGPROC = Some(log_debug_message);

    let text: Cow<'_, str> = if message.is_null() {
        Cow::Borrowed("")
    } else if length < 0 {
        std::ffi::CStr::from_ptr(message).to_string_lossy()
    } else {
        String::from_utf8_lossy(slice::from_raw_parts(
            message.cast::<u8>(),
            length as usize,
        ))
    };

    log::log!(
        severity_level(severity),
        "{}>{}>{}>{}",
        source_name(source),
        type_name(kind),
        id,
        text
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::{
        testing::{self, with_driver},
        GlOptions,
    };

    #[test]
    fn error_codes_round_trip() {
        assert_eq!(ErrorCode::from_raw(gl::NO_ERROR), None);
        for &raw in &[0x0500, 0x0501, 0x0502, 0x0503, 0x0504, 0x0505, 0x0506, 0x0507, 0x1234] {
            let code = ErrorCode::from_raw(raw).unwrap();
            assert_eq!(code.into_raw(), raw);
        }
        assert_eq!(ErrorCode::OutOfMemory.to_string(), "GL_OUT_OF_MEMORY");
        assert_eq!(ErrorCode::Other(0x1234).to_string(), "0x1234");
    }

    #[test]
    fn drain_errors_empties_the_queue() {
        let gl = testing::mock_gl();
        with_driver(|d| {
            d.errors
                .extend([gl::OUT_OF_MEMORY, gl::INVALID_ENUM].iter().copied())
        });

        assert_eq!(
            gl.drain_errors().unwrap(),
            vec![ErrorCode::OutOfMemory, ErrorCode::InvalidEnum]
        );
        assert!(gl.drain_errors().unwrap().is_empty());
    }

    #[test]
    fn drain_errors_is_bounded() {
        let gl = testing::mock_gl();
        with_driver(|d| d.sticky_error = Some(gl::INVALID_OPERATION));

        let codes = gl.drain_errors().unwrap();
        assert_eq!(codes.len(), MAX_DRAINED_ERRORS);
        assert!(codes.iter().all(|c| *c == ErrorCode::InvalidOperation));
    }

    #[test]
    fn check_error_returns_first_code() {
        let gl = testing::mock_gl();
        with_driver(|d| {
            d.errors
                .extend([gl::INVALID_VALUE, gl::INVALID_ENUM].iter().copied())
        });

        assert!(matches!(
            gl.check_error(),
            Err(crate::Error::Gl(ErrorCode::InvalidValue))
        ));
        assert!(gl.check_error().is_ok());
    }

    #[test]
    fn allocation_checks_drain_the_queue() {
        let gl = testing::mock_gl_with(GlOptions {
            error_checks: ErrorChecks::AfterAllocations,
            ..GlOptions::default()
        });
        with_driver(|d| d.errors.push_back(gl::OUT_OF_MEMORY));

        gl.buffer_data(gl::ARRAY_BUFFER, &[0u8; 64], gl::STATIC_DRAW)
            .unwrap();
        with_driver(|d| assert!(d.errors.is_empty()));
    }

    #[test]
    fn every_call_checks_drain_after_queries() {
        let gl = testing::mock_gl_with(GlOptions {
            error_checks: ErrorChecks::AfterEveryCall,
            ..GlOptions::default()
        });

        with_driver(|d| d.errors.push_back(gl::INVALID_ENUM));
        gl.get_integer(gl::MAX_LABEL_LENGTH).unwrap();
        with_driver(|d| assert!(d.errors.is_empty()));

        with_driver(|d| d.errors.push_back(gl::INVALID_ENUM));
        assert_eq!(gl.get_string(gl::VENDOR).unwrap(), "breadgl");
        with_driver(|d| assert!(d.errors.is_empty()));

        with_driver(|d| d.errors.push_back(gl::INVALID_ENUM));
        gl.enable_debug_output().unwrap();
        with_driver(|d| assert!(d.errors.is_empty()));

        with_driver(|d| d.errors.push_back(gl::INVALID_VALUE));
        gl.get_object_label(gl::BUFFER, 1).unwrap();
        with_driver(|d| assert!(d.errors.is_empty()));
    }

    #[test]
    fn allocation_checks_leave_queries_alone() {
        let gl = testing::mock_gl_with(GlOptions {
            error_checks: ErrorChecks::AfterAllocations,
            ..GlOptions::default()
        });
        with_driver(|d| d.errors.push_back(gl::INVALID_ENUM));

        gl.get_integer(gl::MAX_LABEL_LENGTH).unwrap();
        gl.push_debug_group(gl::DEBUG_SOURCE_APPLICATION, 1, "pass").unwrap();
        with_driver(|d| assert_eq!(d.errors.len(), 1));
    }

    #[test]
    fn debug_groups_pass_their_message() {
        let gl = testing::mock_gl();
        gl.push_debug_group(gl::DEBUG_SOURCE_APPLICATION, 3, "ombres ✓")
            .unwrap();
        gl.pop_debug_group().unwrap();

        with_driver(|d| {
            assert_eq!(
                d.calls,
                vec![
                    "glPushDebugGroup(0x824a, 3, \"ombres ✓\")".to_string(),
                    "glPopDebugGroup()".to_string(),
                ]
            )
        });
    }

    #[test]
    fn labels_round_trip_non_ascii() {
        let gl = testing::mock_gl();
        let label = "tampon de sommets ✓";

        gl.object_label(gl::BUFFER, 3, label).unwrap();
        with_driver(|d| assert_eq!(d.label, label.as_bytes()));
        assert_eq!(gl.get_object_label(gl::BUFFER, 3).unwrap(), label);
    }

    #[test]
    fn debug_output_reaches_the_callback() {
        let gl = testing::mock_gl();
        gl.enable_debug_output().unwrap();

        with_driver(|d| {
            assert!(d.debug_callback.is_some());
            assert!(d.enabled.contains(&gl::DEBUG_OUTPUT));
            assert!(d.enabled.contains(&gl::DEBUG_OUTPUT_SYNCHRONOUS));
        });

        gl.debug_message_insert(
            gl::DEBUG_SOURCE_APPLICATION,
            gl::DEBUG_TYPE_MARKER,
            7,
            gl::DEBUG_SEVERITY_NOTIFICATION,
            "frame start",
        )
        .unwrap();
        with_driver(|d| assert_eq!(d.debug_messages, vec!["frame start".to_string()]));
    }

    #[test]
    fn severities_map_to_levels() {
        assert_eq!(severity_level(gl::DEBUG_SEVERITY_HIGH), log::Level::Error);
        assert_eq!(severity_level(gl::DEBUG_SEVERITY_MEDIUM), log::Level::Warn);
        assert_eq!(severity_level(gl::DEBUG_SEVERITY_LOW), log::Level::Info);
        assert_eq!(
            severity_level(gl::DEBUG_SEVERITY_NOTIFICATION),
            log::Level::Debug
        );
    }

    #[test]
    fn message_log_splits_packed_text() {
        let gl = testing::mock_gl();
        with_driver(|d| {
            d.debug_log = vec![
                (gl::DEBUG_SOURCE_API, gl::DEBUG_TYPE_ERROR, 1, gl::DEBUG_SEVERITY_HIGH, "bad enum".into()),
                (gl::DEBUG_SOURCE_APPLICATION, gl::DEBUG_TYPE_MARKER, 2, gl::DEBUG_SEVERITY_LOW, "marqueur é".into()),
            ]
        });

        let messages = gl.get_debug_message_log(4).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].message, "bad enum");
        assert_eq!(messages[0].severity, gl::DEBUG_SEVERITY_HIGH);
        assert_eq!(messages[1].id, 2);
        assert_eq!(messages[1].message, "marqueur é");
    }
}
