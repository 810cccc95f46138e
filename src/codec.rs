//! Encoding rules for the value kinds a [`SmartBuffer`] understands.
//!
//! Numbers are stored as their native-endian bytes at their natural width.
//! Strings are stored as an `i16` length prefix followed by the UTF-8
//! content. Implement [`Encode`] and [`Decode`] for your own types by
//! composing these.

use alloc::string::String;
use core::fmt::Debug;

use crate::SmartBuffer;
use crate::error::{BufferError, BufferResult};

/// Width of the length prefix in front of every string.
pub const STRING_PREFIX_BYTES: usize = <i16 as NeRepr>::BYTES;

pub trait Encode {
    fn encode(&self, buffer: &mut SmartBuffer) -> BufferResult<()>;
}

pub trait Decode: Sized {
    /// The built-in kinds leave the read cursor untouched when they fail.
    fn decode(buffer: &mut SmartBuffer) -> BufferResult<Self>;
}

/// A fixed-width number stored as its native-endian bytes.
pub trait NeRepr: Sized + Clone + Copy + Debug {
    const BYTES: usize = core::mem::size_of::<Self>();

    fn put_ne(self, buffer: &mut SmartBuffer);

    fn take_ne(buffer: &mut SmartBuffer) -> BufferResult<Self>;
}

macro_rules! basic_ne_impl {
    ($($t:ty),*) => {
        $(impl NeRepr for $t {
            #[inline(always)]
            fn put_ne(self, buffer: &mut SmartBuffer) {
                buffer.put(&self.to_ne_bytes());
            }

            #[inline(always)]
            fn take_ne(buffer: &mut SmartBuffer) -> BufferResult<Self> {
                buffer.consume_arr().map(<$t>::from_ne_bytes)
            }
        }

        impl Encode for $t {
            #[inline]
            fn encode(&self, buffer: &mut SmartBuffer) -> BufferResult<()> {
                self.put_ne(buffer);
                Ok(())
            }
        }

        impl Decode for $t {
            #[inline]
            fn decode(buffer: &mut SmartBuffer) -> BufferResult<Self> {
                Self::take_ne(buffer)
            }
        })*
    };
}
basic_ne_impl!(i8, i16, i32, i64);
basic_ne_impl!(u8, u16, u32, u64);
basic_ne_impl!(f32, f64);

impl Encode for str {
    fn encode(&self, buffer: &mut SmartBuffer) -> BufferResult<()> {
        let len = i16::try_from(self.len()).map_err(|_| BufferError::StringTooLong(self.len()))?;
        len.put_ne(buffer);
        buffer.put(self.as_bytes());
        Ok(())
    }
}

impl Encode for String {
    fn encode(&self, buffer: &mut SmartBuffer) -> BufferResult<()> {
        self.as_str().encode(buffer)
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, buffer: &mut SmartBuffer) -> BufferResult<()> {
        (**self).encode(buffer)
    }
}

impl Decode for String {
    fn decode(buffer: &mut SmartBuffer) -> BufferResult<Self> {
        // The prefix is only peeked so a short or invalid string consumes nothing
        let len = i16::from_ne_bytes(buffer.peek_arr()?);
        let len = usize::try_from(len).map_err(|_| BufferError::NegativeLength(len))?;
        let total = STRING_PREFIX_BYTES + len;
        let framed = buffer.peek(total)?;
        let value = core::str::from_utf8(&framed[STRING_PREFIX_BYTES..])
            .map_err(|_| BufferError::InvalidUtf8)?
            .into();
        buffer.consume(total)?;
        Ok(value)
    }
}
