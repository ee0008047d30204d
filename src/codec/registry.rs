use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Serialize, Serializer};

use super::Codec;
use crate::error::{TranscodeError, Result};
use crate::types::CodecMeta;

macro_rules! register_codecs {
    ($($scheme:ident => $module:ident :: $codec:ident),* $(,)?) => {
        /// The closed set of supported schemes.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Scheme {
            $($scheme),*
        }

        impl Scheme {
            pub const ALL: &'static [Scheme] = &[$(Scheme::$scheme),*];

            pub fn codec(self) -> &'static dyn Codec {
                match self {
                    $(Scheme::$scheme => &super::$module::$codec),*
                }
            }
        }
    };
}

register_codecs! {
    Base64 => base64::Base64,
    UnicodeEscapeShort => escape::UnicodeEscapeShort,
    UnicodeEscapeLong => escape::UnicodeEscapeLong,
    DecEntity => entity::DecEntity,
    HexEntity => entity::HexEntity,
    HexEscape => escape::HexEscape,
    OctalEscape => escape::OctalEscape,
    Url => urlencoding::Url,
    Unicode => escape::Unicode,
    Hex => base16::Hex,
    Dec => radix::Dec,
    Bin => radix::Bin,
    MorseCode => morse::MorseCode,
    CodePoint => codepoint::CodePoint,
    Base32 => base32::Base32,
    Base16 => base16::Base16,
}

impl Scheme {
    pub fn name(self) -> &'static str {
        self.codec().name()
    }
}

impl Serialize for Scheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

pub struct Registry {
    name_map: HashMap<String, Scheme>,
}

impl Registry {
    fn new() -> Self {
        let mut name_map = HashMap::new();
        for &scheme in Scheme::ALL {
            let meta = scheme.codec().meta();
            for name in std::iter::once(&meta.name).chain(meta.aliases.iter()) {
                if let Some(existing) = name_map.insert(name.to_lowercase(), scheme) {
                    panic!("Duplicate codec name '{}' for schemes '{}' and '{}'", name, existing, scheme);
                }
            }
        }
        Registry { name_map }
    }

    pub fn global() -> &'static Registry {
        REGISTRY.get_or_init(Registry::new)
    }

    /// Resolves a scheme name or alias, ignoring case.
    pub fn lookup(&self, name: &str) -> Result<Scheme> {
        self.name_map
            .get(name.to_lowercase().as_str())
            .copied()
            .ok_or_else(|| TranscodeError::unknown_codec(name))
    }

    pub fn get(&self, name: &str) -> Result<&'static dyn Codec> {
        self.lookup(name).map(Scheme::codec)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_map.contains_key(name.to_lowercase().as_str())
    }

    pub fn schemes(&self) -> &'static [Scheme] {
        Scheme::ALL
    }

    pub fn list(&self) -> Vec<CodecMeta> {
        Scheme::ALL.iter().map(|s| s.codec().meta()).collect()
    }
}
