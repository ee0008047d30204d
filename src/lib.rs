pub mod codec;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod types;

pub use codec::{Codec, Registry, Scheme};
pub use dispatch::{transcode, Outcome, PartialLoss, RedirectTarget, Request, Transcoded};
pub use error::{ErrorKind, Result, TranscodeError};
pub use types::{CaseSensitivity, CodecMeta, Context, InputSource, Mode, PaddingRule, TextUnit};
