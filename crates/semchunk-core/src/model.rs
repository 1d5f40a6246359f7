//! The loosely-shaped `model` input and how it is interpreted.

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokenizers::Tokenizer;

/// Token-counting callback: returns the size of a candidate chunk
pub type TokenCounter = Arc<dyn Fn(&str) -> usize + Send + Sync>;

/// What the caller handed in as "the model".
///
/// Strings are deliberately left uninterpreted until [`ModelSpec::strategy`]
/// inspects them, since inline tokenizer JSON, a `.json` tokenizer path and
/// a tiktoken model name are all plain strings.
pub enum ModelSpec {
    /// A pre-built HuggingFace tokenizer
    Tokenizer(Box<Tokenizer>),
    /// A token-counting callback
    Callback(TokenCounter),
    /// A filesystem path to a tokenizer definition
    Path(PathBuf),
    /// Inline tokenizer JSON, a `.json` path, or a model identifier
    Name(String),
}

/// How the splitter's sizer gets constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InitStrategy {
    /// Hand a pre-built tokenizer over directly
    Tokenizer,
    /// Call back into the caller per candidate chunk
    Callback,
    /// Parse a tokenizer definition from an inline JSON string
    InlineJson,
    /// Load a tokenizer definition file
    TokenizerFile,
    /// Look up a named model in tiktoken's registry
    NamedModel,
}

impl ModelSpec {
    pub fn callback<F>(counter: F) -> Self
    where
        F: Fn(&str) -> usize + Send + Sync + 'static,
    {
        ModelSpec::Callback(Arc::new(counter))
    }

    /// Classify the input. Order matters and is fixed:
    ///
    /// 1. tokenizer instance
    /// 2. callback
    /// 3. string that parses as JSON, with `NaN`, `Infinity` and `-Infinity` allowed
    /// 4. path, or string ending in `.json`
    /// 5. anything else is a model name
    ///
    /// A string that fails the JSON check simply falls through.
    pub fn strategy(&self) -> InitStrategy {
        match self {
            ModelSpec::Tokenizer(_) => InitStrategy::Tokenizer,
            ModelSpec::Callback(_) => InitStrategy::Callback,
            ModelSpec::Name(s) if is_valid_json(s) => InitStrategy::InlineJson,
            ModelSpec::Path(_) => InitStrategy::TokenizerFile,
            ModelSpec::Name(s) if is_json_file_path(s) => InitStrategy::TokenizerFile,
            ModelSpec::Name(_) => InitStrategy::NamedModel,
        }
    }
}

/// Non-finite number literals accepted by the JSON check
const NON_FINITE: [&str; 3] = ["-Infinity", "Infinity", "NaN"];

fn is_valid_json(content: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(&replace_non_finite(content)).is_ok()
}

/// Swap `NaN`, `Infinity` and `-Infinity` outside string literals for
/// `null` so serde_json can judge the rest of the document.
fn replace_non_finite(content: &str) -> Cow<'_, str> {
    if !NON_FINITE.iter().any(|literal| content.contains(literal)) {
        return Cow::Borrowed(content);
    }

    let mut out = String::with_capacity(content.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut i = 0;
    while i < content.len() {
        let rest = &content[i..];
        if !in_string {
            if let Some(literal) = NON_FINITE.iter().find(|literal| rest.starts_with(**literal)) {
                out.push_str("null");
                i += literal.len();
                continue;
            }
        }

        let Some(c) = rest.chars().next() else {
            break;
        };
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
        }
        out.push(c);
        i += c.len_utf8();
    }
    Cow::Owned(out)
}

fn is_json_file_path(content: &str) -> bool {
    content.ends_with(".json")
}

impl fmt::Debug for ModelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSpec::Tokenizer(_) => f.write_str("Tokenizer(..)"),
            ModelSpec::Callback(_) => f.write_str("Callback(..)"),
            ModelSpec::Path(path) => f.debug_tuple("Path").field(path).finish(),
            ModelSpec::Name(name) => f.debug_tuple("Name").field(name).finish(),
        }
    }
}

impl fmt::Display for InitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InitStrategy::Tokenizer => "tokenizer",
            InitStrategy::Callback => "callback",
            InitStrategy::InlineJson => "inline-json",
            InitStrategy::TokenizerFile => "tokenizer-file",
            InitStrategy::NamedModel => "named-model",
        };
        f.write_str(name)
    }
}

impl From<&str> for ModelSpec {
    fn from(name: &str) -> Self {
        ModelSpec::Name(name.to_string())
    }
}

impl From<String> for ModelSpec {
    fn from(name: String) -> Self {
        ModelSpec::Name(name)
    }
}

impl From<PathBuf> for ModelSpec {
    fn from(path: PathBuf) -> Self {
        ModelSpec::Path(path)
    }
}

impl From<&Path> for ModelSpec {
    fn from(path: &Path) -> Self {
        ModelSpec::Path(path.to_path_buf())
    }
}

impl From<Tokenizer> for ModelSpec {
    fn from(tokenizer: Tokenizer) -> Self {
        ModelSpec::Tokenizer(Box::new(tokenizer))
    }
}

impl From<TokenCounter> for ModelSpec {
    fn from(counter: TokenCounter) -> Self {
        ModelSpec::Callback(counter)
    }
}
