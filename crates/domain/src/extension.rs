// crates/domain/src/extension.rs
//! Closed set of recognised file-extension categories.

use std::{fmt, str::FromStr};

use file_classify_shared_kernel::DomainError;
use serde::{Deserialize, Serialize};

macro_rules! extension_tags {
    ($($variant:ident => $token:literal),+ $(,)?) => {
        /// Display category assigned to a file by its final `.`-separated segment.
        ///
        /// Every recognised variant owns exactly one lowercase token. [`ExtensionTag::Default`]
        /// is the fallback for anything unrecognised and is never produced by
        /// [`ExtensionTag::from_token`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
        pub enum ExtensionTag {
            $(
                #[serde(rename = $token)]
                $variant,
            )+
            #[default]
            #[serde(rename = "default")]
            Default,
        }

        impl ExtensionTag {
            /// All recognised tags, excluding the fallback.
            pub const KNOWN: &'static [ExtensionTag] = &[$(ExtensionTag::$variant),+];

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(ExtensionTag::$variant => $token,)+
                    ExtensionTag::Default => "default",
                }
            }

            /// Looks up an already case-folded token. Returns `None` for unknown tokens
            /// and for the literal `default`.
            #[must_use]
            pub fn from_token(token: &str) -> Option<Self> {
                match token {
                    $($token => Some(ExtensionTag::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

extension_tags! {
    Assembly => "asm",
    Bash => "sh",
    Basic => "vb",
    C => "c",
    CHeader => "h",
    Clojure => "clj",
    CoffeeScript => "coffee",
    Cpp => "cpp",
    CSharp => "cs",
    Css => "css",
    Dart => "dart",
    Elixir => "ex",
    Elm => "elm",
    Erlang => "erl",
    FSharp => "fs",
    Go => "go",
    GoModule => "mod",
    GraphQl => "graphql",
    Groovy => "groovy",
    Haskell => "hs",
    Html => "html",
    Java => "java",
    JavaScript => "js",
    Json => "json",
    Jsx => "jsx",
    Julia => "jl",
    Kotlin => "kt",
    Less => "less",
    Lock => "lock",
    Lua => "lua",
    Markdown => "md",
    Mdx => "mdx",
    Nix => "nix",
    OCaml => "ml",
    Perl => "pl",
    Php => "php",
    PowerShell => "ps1",
    Python => "py",
    R => "r",
    Reason => "re",
    Ruby => "rb",
    Rust => "rs",
    Sass => "sass",
    Scala => "scala",
    Scss => "scss",
    Sql => "sql",
    Svelte => "svelte",
    Svg => "svg",
    Swift => "swift",
    Terraform => "tf",
    Text => "txt",
    Toml => "toml",
    Tsx => "tsx",
    TypeScript => "ts",
    Vue => "vue",
    Yaml => "yaml",
    Yml => "yml",
    Zig => "zig",
}

impl ExtensionTag {
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }
}

impl fmt::Display for ExtensionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses user-facing tokens such as `--ext ts,RS,default`.
///
/// Unlike [`ExtensionTag::from_token`] this accepts `default` and folds case.
impl FromStr for ExtensionTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().trim_start_matches('.').to_ascii_lowercase();
        if token == Self::Default.as_str() {
            return Ok(Self::Default);
        }
        Self::from_token(&token).ok_or(DomainError::UnknownExtension { token })
    }
}
