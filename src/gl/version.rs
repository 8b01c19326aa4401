// MIT/Apache2 License

use std::fmt;

/// The API a context implements.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GlApi {
    Gl,
    Gles,
}

/// The version of a context, as reported by `GL_VERSION`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GlVersion {
    pub api: GlApi,
    pub major: u8,
    pub minor: u8,
}

impl GlVersion {
    #[inline]
    pub fn new(api: GlApi, major: u8, minor: u8) -> Self {
        Self { api, major, minor }
    }

    /// Parse a `GL_VERSION` string.
    ///
    /// Desktop strings start with the version (`"4.6.0 NVIDIA 535.54"`). ES strings start with
    /// `"OpenGL ES"`, optionally followed by a profile (`"OpenGL ES-CM 1.1"`).
    pub fn parse(version: &str) -> Option<Self> {
        let (api, rest) = match version.strip_prefix("OpenGL ES") {
            Some(rest) => {
                // skip the profile, if any
                let rest = match rest.strip_prefix('-') {
                    Some(profile) => profile.splitn(2, ' ').nth(1)?,
                    None => rest,
                };
                (GlApi::Gles, rest.trim_start())
            }
            None => (GlApi::Gl, version.trim_start()),
        };

        let number = rest.split(|c: char| c == ' ' || c == '-').next()?;
        let mut parts = number.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;

        Some(Self::new(api, major, minor))
    }

    /// Tell whether this version is at least `major.minor`.
    #[inline]
    pub fn at_least(self, major: u8, minor: u8) -> bool {
        (self.major, self.minor) >= (major, minor)
    }
}

impl fmt::Display for GlVersion {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.api {
            GlApi::Gl => write!(f, "OpenGL {}.{}", self.major, self.minor),
            GlApi::Gles => write!(f, "OpenGL ES {}.{}", self.major, self.minor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_versions() {
        assert_eq!(
            GlVersion::parse("4.6.0 NVIDIA 535.54"),
            Some(GlVersion::new(GlApi::Gl, 4, 6))
        );
        assert_eq!(
            GlVersion::parse("3.3 (Core Profile) Mesa 23.1.4"),
            Some(GlVersion::new(GlApi::Gl, 3, 3))
        );
        assert_eq!(
            GlVersion::parse("2.1-Build 10.18"),
            Some(GlVersion::new(GlApi::Gl, 2, 1))
        );
    }

    #[test]
    fn es_versions() {
        assert_eq!(
            GlVersion::parse("OpenGL ES 3.2 Mesa 23.1"),
            Some(GlVersion::new(GlApi::Gles, 3, 2))
        );
        assert_eq!(
            GlVersion::parse("OpenGL ES-CM 1.1"),
            Some(GlVersion::new(GlApi::Gles, 1, 1))
        );
        assert_eq!(
            GlVersion::parse("OpenGL ES 2.0 (ANGLE 2.1.0)"),
            Some(GlVersion::new(GlApi::Gles, 2, 0))
        );
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(GlVersion::parse(""), None);
        assert_eq!(GlVersion::parse("OpenGL ES"), None);
        assert_eq!(GlVersion::parse("four point six"), None);
        assert_eq!(GlVersion::parse("4"), None);
    }

    #[test]
    fn ordering_and_display() {
        let version = GlVersion::new(GlApi::Gl, 4, 3);
        assert!(version.at_least(3, 3));
        assert!(version.at_least(4, 3));
        assert!(!version.at_least(4, 5));
        assert_eq!(version.to_string(), "OpenGL 4.3");
    }
}
