mod base16;
mod base32;
mod base64;
mod codepoint;
mod entity;
mod escape;
mod morse;
mod radix;
mod urlencoding;
pub mod registry;
pub(crate) mod util;

pub use registry::{Registry, Scheme};

use crate::error::Result;
use crate::types::CodecMeta;

/// A named pair of text transforms.
///
/// `encode` and `decode` are pure; they are not guaranteed to be inverses of
/// each other for every input. Codecs that cannot carry some input faithfully
/// say so through `encode_losses` / `decode_losses` instead of failing.
pub trait Codec: Send + Sync {
    fn meta(&self) -> CodecMeta;
    fn encode(&self, input: &str) -> Result<String>;
    fn decode(&self, input: &str) -> Result<String>;

    /// Characters of `input` that `encode` drops or cannot represent.
    fn encode_losses(&self, _input: &str) -> Vec<char> {
        Vec::new()
    }

    /// Tokens of `input` that `decode` ignores.
    fn decode_losses(&self, _input: &str) -> Vec<String> {
        Vec::new()
    }

    fn name(&self) -> &'static str {
        self.meta().name
    }
}
