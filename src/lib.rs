#![no_std]
extern crate alloc;
mod buf;
pub use buf::*;
pub mod codec;
pub use codec::{Decode, Encode};
pub mod error;
