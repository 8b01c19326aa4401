// MIT/Apache2 License

use crate::gl::ErrorCode;
use breadgl_enums::types::GLenum;
use std::{fmt, str::Utf8Error};

/// Sum error type for breadgl operations.
#[derive(Debug)]
pub enum Error {
    /// A static string message.
    StaticMsg(&'static str),
    /// A string message.
    Msg(String),
    /// The current context does not expose the named entry point.
    NotSupported(&'static str),
    /// An empty slice was passed to a parameter the entry point reads from.
    EmptyArray {
        function: &'static str,
        parameter: &'static str,
    },
    /// A length does not fit in the integer type the entry point takes.
    LengthOverflow {
        function: &'static str,
        length: usize,
    },
    /// A buffer is smaller than the data the driver will read or write.
    BufferTooSmall {
        function: &'static str,
        required: usize,
        actual: usize,
    },
    /// A single-value query was made for a parameter whose value count varies, such as
    /// `GL_COMPRESSED_TEXTURE_FORMATS`.
    MultiValued {
        function: &'static str,
        pname: GLenum,
    },
    /// A string bound for a nul-terminated parameter contains a nul byte.
    InteriorNul {
        function: &'static str,
        position: usize,
    },
    /// The driver handed back text that is not UTF-8.
    InvalidUtf8 {
        function: &'static str,
        source: Utf8Error,
    },
    /// The driver reported an error through its error queue.
    Gl(ErrorCode),
    /// A shader failed to compile. Contains the info log.
    ShaderFail(String),
    /// A program failed to link. Contains the info log.
    ProgramFail(String),
    /// `glClientWaitSync` returned `GL_WAIT_FAILED`.
    WaitFailed,
    /// The proc address dispatcher was re-entered while it was resolving a function.
    DispatchBusy,
}

impl std::error::Error for Error {
    #[inline]
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidUtf8 { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaticMsg(s) => f.write_str(s),
            Self::Msg(s) => f.write_str(s),
            Self::NotSupported(name) => {
                write!(f, "Function \"{}\" is not supported by the current context", name)
            }
            Self::EmptyArray {
                function,
                parameter,
            } => write!(
                f,
                "Parameter \"{}\" of {} requires at least one element",
                parameter, function
            ),
            Self::LengthOverflow { function, length } => {
                write!(f, "Length {} is too large for {}", length, function)
            }
            Self::BufferTooSmall {
                function,
                required,
                actual,
            } => write!(
                f,
                "{} needs a buffer of {} bytes, got {}",
                function, required, actual
            ),
            Self::MultiValued { function, pname } => write!(
                f,
                "Parameter {:#06x} of {} has a variable number of values",
                pname, function
            ),
            Self::InteriorNul { function, position } => write!(
                f,
                "String passed to {} contains a nul byte at position {}",
                function, position
            ),
            Self::InvalidUtf8 { function, source } => {
                write!(f, "{} returned invalid UTF-8: {}", function, source)
            }
            Self::Gl(code) => write!(f, "OpenGL error: {}", code),
            Self::ShaderFail(log) => write!(f, "Shader failed to compile: {}", log),
            Self::ProgramFail(log) => write!(f, "Program failed to link: {}", log),
            Self::WaitFailed => f.write_str("Waiting on a sync object failed"),
            Self::DispatchBusy => f.write_str("Proc address dispatcher is already in use"),
        }
    }
}

impl From<ErrorCode> for Error {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        Self::Gl(code)
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
