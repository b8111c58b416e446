//! Home page data: assembly and display selection

mod assembler;
mod selection;

pub use assembler::{AuthorDetails, PageAssembler, PageData};
pub use selection::{DisplayPolicy, Selection};

#[cfg(test)]
pub(crate) use assembler::tests::MemorySource;
