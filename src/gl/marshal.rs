// MIT/Apache2 License

//! Conversions between Rust arguments and the pointer-and-count shapes OpenGL takes.

use crate::Error;
use breadgl_enums::types::{GLchar, GLint, GLsizei, GLsizeiptr};
use num_traits::NumCast;
use std::{convert::TryFrom, ffi::CString, marker::PhantomData, mem};
use tinyvec::TinyVec;

/// Convert a length to the integer type an entry point takes.
#[inline]
pub(crate) fn length<N: NumCast>(function: &'static str, length: usize) -> crate::Result<N> {
    N::from(length).ok_or(Error::LengthOverflow { function, length })
}

/// Element count of a slice the driver reads from. Empty slices are rejected.
#[inline]
pub(crate) fn count<T, N: NumCast>(
    function: &'static str,
    parameter: &'static str,
    items: &[T],
) -> crate::Result<N> {
    if items.is_empty() {
        return Err(Error::EmptyArray {
            function,
            parameter,
        });
    }

    length(function, items.len())
}

/// Size in bytes of a slice the driver reads from. Empty slices are rejected.
#[inline]
pub(crate) fn byte_size<T>(
    function: &'static str,
    parameter: &'static str,
    items: &[T],
) -> crate::Result<GLsizeiptr> {
    if items.is_empty() {
        return Err(Error::EmptyArray {
            function,
            parameter,
        });
    }

    length(function, mem::size_of_val(items))
}

/// Encode a string for a parameter that is read up to a nul terminator.
#[inline]
pub(crate) fn c_string(function: &'static str, s: &str) -> crate::Result<CString> {
    CString::new(s).map_err(|e| Error::InteriorNul {
        function,
        position: e.nul_position(),
    })
}

/// Decode text the driver wrote.
#[inline]
pub(crate) fn decode(function: &'static str, bytes: Vec<u8>) -> crate::Result<String> {
    String::from_utf8(bytes).map_err(|e| Error::InvalidUtf8 {
        function,
        source: e.utf8_error(),
    })
}

/// Clamp a length the driver reported to the buffer it was written to.
#[inline]
pub(crate) fn written(reported: GLsizei, capacity: usize) -> usize {
    usize::try_from(reported).unwrap_or(0).min(capacity)
}

/// Read text the driver writes into a caller-sized buffer.
///
/// `write` gets the buffer capacity, a pointer to receive the actual length, and the buffer.
/// The string is cut to the length the driver reported, not the capacity.
pub(crate) fn read_string<W>(function: &'static str, capacity: usize, write: W) -> crate::Result<String>
where
    W: FnOnce(GLsizei, *mut GLsizei, *mut GLchar) -> crate::Result,
{
    let buf_size: GLsizei = length(function, capacity)?;
    let mut buffer = vec![0u8; capacity];
    let mut reported: GLsizei = 0;

    write(buf_size, &mut reported, buffer.as_mut_ptr().cast())?;

    buffer.truncate(written(reported, capacity));
    decode(function, buffer)
}

/// A list of strings passed with explicit byte lengths, as `glShaderSource` takes them.
pub(crate) struct SourceList<'a> {
    pointers: Vec<*const GLchar>,
    lengths: TinyVec<[GLint; 4]>,
    _strings: PhantomData<&'a str>,
}

impl<'a> SourceList<'a> {
    pub(crate) fn new(function: &'static str, strings: &[&'a str]) -> crate::Result<Self> {
        if strings.is_empty() {
            return Err(Error::EmptyArray {
                function,
                parameter: "strings",
            });
        }

        let lengths = strings
            .iter()
            .map(|s| length(function, s.len()))
            .collect::<crate::Result<TinyVec<[GLint; 4]>>>()?;
        let pointers = strings.iter().map(|s| s.as_ptr().cast::<GLchar>()).collect();

        Ok(Self {
            pointers,
            lengths,
            _strings: PhantomData,
        })
    }

    #[inline]
    pub(crate) fn count(&self, function: &'static str) -> crate::Result<GLsizei> {
        length(function, self.pointers.len())
    }

    #[inline]
    pub(crate) fn pointers(&self) -> *const *const GLchar {
        self.pointers.as_ptr()
    }

    #[inline]
    pub(crate) fn lengths(&self) -> *const GLint {
        self.lengths.as_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{ptr, slice};

    #[test]
    fn empty_slices_fail_fast() {
        let empty: [u32; 0] = [];
        assert!(matches!(
            count::<_, GLsizei>("glDeleteBuffers", "buffers", &empty),
            Err(Error::EmptyArray {
                function: "glDeleteBuffers",
                parameter: "buffers"
            })
        ));
        assert!(matches!(
            byte_size("glBufferData", "data", &empty),
            Err(Error::EmptyArray { .. })
        ));
    }

    #[test]
    fn byte_size_counts_bytes() {
        let data = [0u32; 5];
        assert_eq!(byte_size("glBufferData", "data", &data).unwrap(), 20);
        assert_eq!(count::<_, GLsizei>("glDrawBuffers", "bufs", &data).unwrap(), 5);
    }

    #[test]
    fn overflowing_lengths_are_reported() {
        let res: crate::Result<GLsizei> = length("glShaderSource", usize::MAX);
        assert!(matches!(
            res,
            Err(Error::LengthOverflow {
                function: "glShaderSource",
                length: usize::MAX
            })
        ));
    }

    #[test]
    fn interior_nul_is_located() {
        assert!(matches!(
            c_string("glGetUniformLocation", "ab\0c"),
            Err(Error::InteriorNul { position: 2, .. })
        ));
        assert_eq!(
            c_string("glGetUniformLocation", "u_color").unwrap().as_bytes(),
            b"u_color"
        );
    }

    #[test]
    fn written_is_clamped() {
        assert_eq!(written(-1, 8), 0);
        assert_eq!(written(5, 8), 5);
        assert_eq!(written(12, 8), 8);
    }

    fn fill(text: &'static [u8]) -> impl FnOnce(GLsizei, *mut GLsizei, *mut GLchar) -> crate::Result {
        move |cap, len, buf| {
            let n = text.len().min(cap as usize);
            unsafe {
                ptr::copy_nonoverlapping(text.as_ptr(), buf.cast::<u8>(), n);
                *len = n as GLsizei;
            }
            Ok(())
        }
    }

    #[test]
    fn read_string_uses_reported_length() {
        // capacity larger than the text
        let s = read_string("glGetShaderInfoLog", 32, fill(b"error: oops")).unwrap();
        assert_eq!(s, "error: oops");
        assert_eq!(s.len(), 11);

        // length equal to capacity
        let s = read_string("glGetShaderInfoLog", 4, fill(b"abcd")).unwrap();
        assert_eq!(s, "abcd");

        // nothing written
        let s = read_string("glGetShaderInfoLog", 0, fill(b"ignored")).unwrap();
        assert_eq!(s, "");
    }

    #[test]
    fn read_string_rejects_invalid_utf8() {
        let res = read_string("glGetObjectLabel", 2, fill(b"\xff\xfe"));
        assert!(matches!(
            res,
            Err(Error::InvalidUtf8 {
                function: "glGetObjectLabel",
                ..
            })
        ));
    }

    #[test]
    fn source_list_keeps_lengths() {
        let strings = ["#version 330 core\n", "void main() {}\n", "// é"];
        let list = SourceList::new("glShaderSource", &strings).unwrap();
        assert_eq!(list.count("glShaderSource").unwrap(), 3);

        let lengths = unsafe { slice::from_raw_parts(list.lengths(), 3) };
        assert_eq!(lengths, &[18, 15, 5]);

        let pointers = unsafe { slice::from_raw_parts(list.pointers(), 3) };
        let last = unsafe { slice::from_raw_parts(pointers[2].cast::<u8>(), 5) };
        assert_eq!(last, "// é".as_bytes());
    }
}
