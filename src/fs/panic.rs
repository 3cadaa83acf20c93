use std::error::Error;

use derive_more::{Display, Error};

/// An error that can only arise from a bug in this crate, rather than from the environment.
pub trait Panic: Error {
    fn panic(&self) -> ! {
        panic!("{}", self)
    }
}

#[derive(Debug, Display, Error)]
#[display("pointer exceeded stack space")]
pub struct BadStackAddrPanic;
impl Panic for BadStackAddrPanic {}
