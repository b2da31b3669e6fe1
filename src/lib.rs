pub mod cli;
pub mod convert;
pub mod document;
pub mod error;
pub mod source;

pub use convert::{convert, Converter, ConverterOptions, OutputManifest, DEFAULT_PREFIX};
pub use document::{ParameterDocument, ParameterValue};
pub use error::{ConvertError, InputError, WriteError};
pub use source::{Row, Source, SourceOptions};
