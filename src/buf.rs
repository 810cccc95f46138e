use alloc::{string::String, vec::Vec};
use log::{debug, trace};

use crate::codec::{Decode, Encode, NeRepr};
use crate::error::{BufferError, BufferResult};

/// Capacity used by [`SmartBuffer::new`] and [`Default`].
pub const DEFAULT_CAPACITY: usize = 256;

/// A growable byte buffer with independent write and read cursors.
///
/// Bytes in `[0, size())` are the written data. Reads consume that region
/// front to back and never move past the write cursor; a read that would do
/// so fails with [`BufferError::Underflow`] and consumes nothing.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct SmartBuffer {
    /// Zero-initialised storage, its length is the capacity
    storage: Vec<u8>,
    // SAFETY: read <= write <= storage.len() must always be upheld
    read: usize,
    write: usize,
}

impl Default for SmartBuffer {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! typed_methods {
    ($($t:ty => $write:ident, $read:ident;)*) => {
        $(
            #[doc = concat!("Writes a `", stringify!($t), "` in native byte order.")]
            #[inline]
            pub fn $write(&mut self, value: $t) {
                value.put_ne(self);
            }

            #[doc = concat!("Reads a `", stringify!($t), "` written by [`Self::", stringify!($write), "`].")]
            #[inline]
            pub fn $read(&mut self) -> BufferResult<$t> {
                self.read::<$t>()
            }
        )*
    };
}

impl SmartBuffer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SmartBuffer {
            storage: alloc::vec![0; capacity],
            read: 0,
            write: 0,
        }
    }

    /// Grows the storage by twice `additional` whenever `additional` more
    /// bytes would not fit behind the write cursor.
    fn ensure_capacity(&mut self, additional: usize) {
        let capacity = self.storage.len();
        if self.write + additional > capacity {
            let grown = capacity + additional * 2;
            trace!("growing buffer from {capacity} to {grown} bytes");
            self.storage.resize(grown, 0);
        }
    }

    /// Appends `bytes` at the write cursor.
    #[inline]
    pub(crate) fn put(&mut self, bytes: &[u8]) {
        self.ensure_capacity(bytes.len());
        let end = self.write + bytes.len();
        self.storage[self.write..end].copy_from_slice(bytes);
        self.write = end;
    }

    /// Bytes between the read and the write cursor.
    #[inline]
    pub(crate) fn available(&self) -> &[u8] {
        // SAFETY: read <= write <= storage.len() is an invariant of this data structure
        unsafe { self.storage.get_unchecked(self.read..self.write) }
    }

    fn underflow(&self, requested: usize) -> BufferError {
        let available = self.remaining();
        debug!("rejecting read of {requested} bytes, {available} available");
        BufferError::Underflow {
            requested,
            available,
        }
    }

    #[inline]
    pub(crate) fn peek(&self, count: usize) -> BufferResult<&[u8]> {
        match self.available().get(..count) {
            Some(slice) => Ok(slice),
            None => Err(self.underflow(count)),
        }
    }

    #[inline]
    pub(crate) fn consume(&mut self, count: usize) -> BufferResult<&[u8]> {
        self.peek(count)?;
        let start = self.read;
        // SAFETY: peek() succeeding means read + count <= write, so this is a valid new value
        // for read
        self.read += count;
        Ok(unsafe { self.storage.get_unchecked(start..self.read) })
    }

    #[inline]
    pub(crate) fn peek_arr<const LEN: usize>(&self) -> BufferResult<[u8; LEN]> {
        let slice = self.peek(LEN)?;
        // SAFETY: If peek() returned Ok, then the length of the slice matches the len requested
        Ok(unsafe { slice.try_into().unwrap_unchecked() })
    }

    #[inline]
    pub(crate) fn consume_arr<const LEN: usize>(&mut self) -> BufferResult<[u8; LEN]> {
        let arr = self.peek_arr()?;
        self.read += LEN;
        Ok(arr)
    }

    /// Encodes `value` at the write cursor.
    ///
    /// Returns the buffer again so writes can be chained:
    /// `buf.write(&1u8)?.write("name")?;`
    pub fn write<T: Encode + ?Sized>(&mut self, value: &T) -> BufferResult<&mut Self> {
        value.encode(self)?;
        Ok(self)
    }

    /// Decodes a `T` at the read cursor.
    pub fn read<T: Decode>(&mut self) -> BufferResult<T> {
        T::decode(self)
    }

    /// Decodes into `out`, returning the buffer so reads can be chained.
    pub fn read_into<T: Decode>(&mut self, out: &mut T) -> BufferResult<&mut Self> {
        *out = self.read()?;
        Ok(self)
    }

    typed_methods! {
        i8 => write_i8, read_i8;
        i16 => write_i16, read_i16;
        i32 => write_i32, read_i32;
        i64 => write_i64, read_i64;
        u8 => write_u8, read_u8;
        u16 => write_u16, read_u16;
        u32 => write_u32, read_u32;
        u64 => write_u64, read_u64;
        f32 => write_f32, read_f32;
        f64 => write_f64, read_f64;
    }

    /// Writes a 16-bit length prefix followed by the UTF-8 content.
    ///
    /// Strings longer than `i16::MAX` bytes are rejected and nothing is written.
    pub fn write_string(&mut self, value: &str) -> BufferResult<()> {
        self.write(value).map(drop)
    }

    pub fn read_string(&mut self) -> BufferResult<String> {
        self.read()
    }

    /// Appends `data` verbatim. The length is not recorded.
    pub fn write_bytes(&mut self, data: &[u8]) {
        self.put(data);
    }

    /// Fills `dest` with the next `dest.len()` bytes.
    pub fn read_bytes(&mut self, dest: &mut [u8]) -> BufferResult<()> {
        dest.copy_from_slice(self.consume(dest.len())?);
        Ok(())
    }

    /// Borrows the next `count` bytes without copying them.
    pub fn read_slice(&mut self, count: usize) -> BufferResult<&[u8]> {
        self.consume(count)
    }

    /// Appends raw bytes without any framing, growing as needed.
    pub fn inject(&mut self, raw: &[u8]) {
        self.put(raw);
    }

    /// Logically empties the buffer. The storage is kept for reuse.
    pub fn reset(&mut self) {
        trace!("resetting buffer holding {} bytes", self.write);
        self.read = 0;
        self.write = 0;
    }

    /// Rewinds the read cursor so the written data can be read again.
    pub fn reset_read(&mut self) {
        self.read = 0;
    }

    /// Number of written bytes.
    pub const fn size(&self) -> usize {
        self.write
    }

    pub const fn is_empty(&self) -> bool {
        self.write == 0
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub const fn read_position(&self) -> usize {
        self.read
    }

    /// Number of written bytes not yet read.
    pub const fn remaining(&self) -> usize {
        self.write - self.read
    }

    /// The written bytes, `[0, size())`.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: write <= storage.len() is an invariant of this data structure
        unsafe { self.storage.get_unchecked(..self.write) }
    }

    /// Consumes the buffer, returning the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        let Self {
            mut storage, write, ..
        } = self;
        storage.truncate(write);
        storage
    }
}

impl From<Vec<u8>> for SmartBuffer {
    /// Wraps already encoded bytes so they can be read back.
    fn from(storage: Vec<u8>) -> Self {
        let write = storage.len();
        SmartBuffer {
            storage,
            read: 0,
            write,
        }
    }
}

impl From<&[u8]> for SmartBuffer {
    fn from(data: &[u8]) -> Self {
        Self::from(data.to_vec())
    }
}
