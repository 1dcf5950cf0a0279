//! Single-allocation concatenation of text and numbers.
//!
//! [`cat!`](crate::cat) accepts a fixed list of string slices, characters,
//! integers and floating-point values and concatenates them into one
//! [`String`]. Every argument is first turned into an [`AlphaNum`], a text
//! view that renders numbers into an inline buffer, so no intermediate heap
//! string is created per argument. The output is allocated once, pre-sized to
//! the total length of all views.

use std::fmt::{self, Write};

/// Size of the inline buffer used to render a character or number.
///
/// Large enough for any 64-bit integer and for the shortest round-trip form
/// of most floating-point values; floats that do not fit fall back to
/// scientific notation.
const INLINE_CAPACITY: usize = 32;

/// A borrowed or inline-rendered piece of text that can be concatenated.
///
/// The set of types convertible into an `AlphaNum` is closed: string slices,
/// `&String`, owned `String`s (moved in, not copied), `char`, the 8- to
/// 64-bit and pointer-sized integers, `f32` and `f64`.
pub struct AlphaNum<'a> {
    repr: Repr<'a>,
}

enum Repr<'a> {
    View(&'a str),
    Owned(String),
    Inline(InlineBuf),
}

impl<'a> AlphaNum<'a> {
    /// Returns the text this value renders to.
    pub fn as_str(&self) -> &str {
        match &self.repr {
            Repr::View(view) => view,
            Repr::Owned(s) => s.as_str(),
            Repr::Inline(buf) => buf.as_str(),
        }
    }

    fn inline(args: fmt::Arguments<'_>) -> Option<Self> {
        let mut buf = InlineBuf::new();
        buf.write_fmt(args).ok()?;
        Some(Self {
            repr: Repr::Inline(buf),
        })
    }

    fn float(value: impl fmt::Display + fmt::LowerExp) -> Self {
        Self::inline(format_args!("{value}"))
            .or_else(|| Self::inline(format_args!("{value:e}")))
            .unwrap_or(Self {
                repr: Repr::View(""),
            })
    }
}

impl<'a> From<&'a str> for AlphaNum<'a> {
    fn from(view: &'a str) -> Self {
        Self {
            repr: Repr::View(view),
        }
    }
}

impl<'a> From<&'a String> for AlphaNum<'a> {
    fn from(s: &'a String) -> Self {
        Self {
            repr: Repr::View(s.as_str()),
        }
    }
}

impl From<String> for AlphaNum<'_> {
    fn from(s: String) -> Self {
        Self {
            repr: Repr::Owned(s),
        }
    }
}

impl From<char> for AlphaNum<'_> {
    fn from(ch: char) -> Self {
        let mut buf = InlineBuf::new();
        buf.len = ch.encode_utf8(&mut buf.bytes).len();
        Self {
            repr: Repr::Inline(buf),
        }
    }
}

macro_rules! alpha_num_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AlphaNum<'_> {
                fn from(value: $ty) -> Self {
                    // A 64-bit integer never exceeds the inline capacity.
                    Self::inline(format_args!("{value}")).unwrap_or(Self {
                        repr: Repr::View(""),
                    })
                }
            }
        )*
    };
}

alpha_num_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f32> for AlphaNum<'_> {
    fn from(value: f32) -> Self {
        Self::float(value)
    }
}

impl From<f64> for AlphaNum<'_> {
    fn from(value: f64) -> Self {
        Self::float(value)
    }
}

struct InlineBuf {
    bytes: [u8; INLINE_CAPACITY],
    len: usize,
}

impl InlineBuf {
    fn new() -> Self {
        Self {
            bytes: [0; INLINE_CAPACITY],
            len: 0,
        }
    }

    fn as_str(&self) -> &str {
        // Only whole UTF-8 sequences are ever written.
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }
}

impl Write for InlineBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > INLINE_CAPACITY {
            return Err(fmt::Error);
        }
        self.bytes[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

/// Concatenates string views into a single string allocated exactly once.
pub fn cat_views(views: &[&str]) -> String {
    let total = views.iter().map(|view| view.len()).sum();
    let mut out = String::with_capacity(total);
    for view in views {
        out.push_str(view);
    }
    out
}

/// Concatenates strings, characters and numbers into a single [`String`].
///
/// ```
/// use cairn_common::cat;
///
/// let line = cat!("<test>", -1100, ',', 1100u32);
/// assert_eq!(line, "<test>-1100,1100");
/// ```
#[macro_export]
macro_rules! cat {
    ($($part:expr),+ $(,)?) => {
        $crate::cat_views(&[$($crate::AlphaNum::from($part).as_str()),+])
    };
}
