use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("path is empty or resolves to nothing but a root or parent marker")]
pub struct InvalidPathError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("path contains a nul byte before its end")]
pub struct MalformedPathError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum NormalizeError {
    // EINVAL
    Invalid(InvalidPathError),
    // EILSEQ
    Malformed(MalformedPathError),
}
