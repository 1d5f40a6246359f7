use anyhow::Result;
use semchunk_core::{
    get_chunker, Chunker, ChunkerConfig, ChunkerResolver, CodeLanguage, Config, InitStrategy,
    ModelSpec, SemanticChunker, SplitterFamily,
};
use std::io::Write;
use std::str::FromStr;
use tokenizers::Tokenizer;

const LOREM: &str = "Contrary to popular belief, Lorem Ipsum is not simply random text. It has roots in a piece of classical Latin \
literature from 45 BC, making it over 2000 years old. Richard McClintock, a Latin professor at Hampden-Sydney \
College in Virginia, looked up one of the more obscure Latin words, consectetur, from a Lorem Ipsum passage, \
and going through the cites of the word in classical literature, discovered the undoubtable source. Lorem Ipsum \
comes from sections 1.10.32 and 1.10.33 of \"de Finibus Bonorum et Malorum\" (The Extremes of Good and Evil) by \
Cicero, written in 45 BC. This book is a treatise on the theory of ethics, very popular during the Renaissance.";

const MARKDOWN: &str = r#"# Lorem Ipsum Intro

Contrary to popular belief, Lorem Ipsum is not simply random text. It has roots in a piece of classical Latin literature
from 45 BC, making it over 2000 years old.

## Origins

Richard McClintock, a Latin professor at Hampden-Sydney College in Virginia, looked up one of the more obscure Latin
words, consectetur, from a Lorem Ipsum passage, and going through the cites of the word in classical literature,
discovered the undoubtable source.

- It comes from "de Finibus Bonorum et Malorum"
- It was written by Cicero in 45 BC
"#;

#[cfg(feature = "grammars")]
const PYTHON: &str = r#"
import random

def main():
    numbers = [random.randint(1, 100) for _ in range(10)]  # ten random integers
    print("Random numbers:")
    for number in numbers:
        print(number)  # print each one

if __name__ == "__main__":
    main()
"#;

#[cfg(feature = "grammars")]
const KOTLIN: &str = r#"
import kotlin.random.Random

fun main() {
    val randomNumbers = IntArray(10) { Random.nextInt(1, 100) } // ten random integers between 1 and 99
    println("Random numbers:")
    for (number in randomNumbers) {
        println(number)  // print each one
    }
}
"#;

const WORD_TOKENIZER_JSON: &str = r#"{
    "version": "1.0",
    "truncation": null,
    "padding": null,
    "added_tokens": [],
    "normalizer": null,
    "pre_tokenizer": { "type": "Whitespace" },
    "post_processor": null,
    "decoder": null,
    "model": {
        "type": "WordLevel",
        "vocab": { "[UNK]": 0, "lorem": 1, "ipsum": 2 },
        "unk_token": "[UNK]"
    }
}"#;

/// Word-level tokenizer that truncates every encoding to four tokens
const TRUNCATING_TOKENIZER_JSON: &str = r#"{
    "version": "1.0",
    "truncation": {
        "direction": "Right",
        "max_length": 4,
        "strategy": "LongestFirst",
        "stride": 0
    },
    "padding": null,
    "added_tokens": [],
    "normalizer": null,
    "pre_tokenizer": { "type": "Whitespace" },
    "post_processor": null,
    "decoder": null,
    "model": {
        "type": "WordLevel",
        "vocab": { "[UNK]": 0, "a": 1 },
        "unk_token": "[UNK]"
    }
}"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn tiktoken_len(model: &str, text: &str) -> Result<usize> {
    let bpe = tiktoken_rs::get_bpe_from_model(model)?;
    Ok(bpe.encode_ordinary(text).len())
}

fn non_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Checks that both operations agree and that every offset points at its chunk
fn assert_consistent(chunker: &Chunker, content: &str) {
    let chunks = chunker.chunks(content);
    let indexed = chunker.chunk_with_indices(content);

    assert_eq!(
        chunks,
        indexed.iter().map(|(_, chunk)| *chunk).collect::<Vec<_>>()
    );

    let mut previous = 0;
    for (offset, chunk) in indexed {
        assert!(offset >= previous, "offsets went backwards");
        previous = offset;

        let at_offset: String = content.chars().skip(offset).take(chunk.chars().count()).collect();
        assert_eq!(at_offset, chunk);
    }
}

#[test]
fn test_named_model_text_chunks_fit_budget() -> Result<()> {
    init_tracing();
    let config = ChunkerConfig::text(10).with_overlap(1).with_trim(false);
    let chunker = get_chunker("gpt-3.5-turbo", &config)?;

    assert_eq!(chunker.family(), SplitterFamily::Text);
    assert_eq!(chunker.strategy(), InitStrategy::NamedModel);

    let chunks = chunker.chunks(LOREM);
    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert!(tiktoken_len("gpt-3.5-turbo", chunk)? <= 10, "{chunk:?}");
    }
    assert_consistent(&chunker, LOREM);
    Ok(())
}

#[test]
fn test_markdown_chunks_fit_budget() -> Result<()> {
    init_tracing();
    let chunker = get_chunker("gpt-3.5-turbo", &ChunkerConfig::markdown(10))?;
    assert_eq!(chunker.family(), SplitterFamily::Markdown);

    let chunks = chunker.chunks(MARKDOWN);
    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert!(tiktoken_len("gpt-3.5-turbo", chunk)? <= 10, "{chunk:?}");
    }
    assert_eq!(non_whitespace(&chunks.concat()), non_whitespace(MARKDOWN));
    assert_consistent(&chunker, MARKDOWN);
    Ok(())
}

#[cfg(feature = "grammars")]
#[test]
fn test_code_chunks_reconstruct_snippet() -> Result<()> {
    init_tracing();
    let config = ChunkerConfig::code(CodeLanguage::Python, 10);
    let chunker = get_chunker("gpt-3.5-turbo", &config)?;
    assert_eq!(chunker.family(), SplitterFamily::Code);

    let chunks = chunker.chunks(PYTHON);
    assert!(chunks.len() > 1);
    assert_eq!(non_whitespace(&chunks.concat()), non_whitespace(PYTHON));
    for chunk in &chunks {
        assert!(tiktoken_len("gpt-3.5-turbo", chunk)? <= 10, "{chunk:?}");
    }
    assert_consistent(&chunker, PYTHON);
    Ok(())
}

#[cfg(feature = "grammars")]
#[test]
fn test_kotlin_code_chunks_fit_budget() -> Result<()> {
    init_tracing();
    let config = ChunkerConfig::code(CodeLanguage::Kotlin, 10);
    let chunker = get_chunker("gpt-3.5-turbo", &config)?;
    assert_eq!(chunker.family(), SplitterFamily::Code);

    let chunks = chunker.chunks(KOTLIN);
    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert!(tiktoken_len("gpt-3.5-turbo", chunk)? <= 10, "{chunk:?}");
    }
    assert_eq!(non_whitespace(&chunks.concat()), non_whitespace(KOTLIN));
    assert_consistent(&chunker, KOTLIN);
    Ok(())
}

#[cfg(not(feature = "grammars"))]
#[test]
fn test_code_without_bundled_grammars_is_missing_dependency() {
    use semchunk_core::ChunkerError;

    let err = get_chunker("gpt-3.5-turbo", &ChunkerConfig::code(CodeLanguage::Python, 10))
        .unwrap_err();
    assert!(
        matches!(err, ChunkerError::MissingDependency { .. }),
        "unexpected error: {err}"
    );
}

#[test]
fn test_truncating_tokenizer_still_fits_budget() -> Result<()> {
    init_tracing();
    let content = vec!["a"; 30].join(" ");
    let chunker = get_chunker(TRUNCATING_TOKENIZER_JSON, &ChunkerConfig::text(10))?;
    assert_eq!(chunker.strategy(), InitStrategy::InlineJson);

    let chunks = chunker.chunks(&content);
    assert!(chunks.len() >= 3, "{chunks:?}");
    for chunk in &chunks {
        assert!(chunk.split_whitespace().count() <= 10, "{chunk:?}");
    }
    assert_eq!(non_whitespace(&chunks.concat()), non_whitespace(&content));
    Ok(())
}

#[test]
fn test_range_budget() -> Result<()> {
    let chunker = get_chunker("gpt-3.5-turbo", &ChunkerConfig::text((5, 12)))?;
    for chunk in chunker.chunks(LOREM) {
        assert!(tiktoken_len("gpt-3.5-turbo", chunk)? <= 12, "{chunk:?}");
    }
    Ok(())
}

#[test]
fn test_chunking_is_deterministic() -> Result<()> {
    let chunker = get_chunker("gpt-3.5-turbo", &ChunkerConfig::text(16).with_overlap(4))?;
    assert_eq!(chunker.chunks(LOREM), chunker.chunks(LOREM));
    assert_eq!(
        chunker.chunk_with_indices(LOREM),
        chunker.chunk_with_indices(LOREM)
    );
    Ok(())
}

#[test]
fn test_chunker_is_shareable_across_threads() -> Result<()> {
    let chunker = get_chunker("gpt-3.5-turbo", &ChunkerConfig::text(12))?;
    let expected = chunker.chunks(LOREM);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| chunker.chunks(LOREM)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("chunking thread panicked"), expected);
        }
    });
    Ok(())
}

#[test]
fn test_char_offsets_with_multibyte_text() -> Result<()> {
    let content = "Ünïcödé wörds ärë fün. ".repeat(8);
    let chunker = get_chunker(
        ModelSpec::callback(|text: &str| text.chars().count()),
        &ChunkerConfig::text(20),
    )?;

    let indexed = chunker.chunk_with_indices(&content);
    let bytes = chunker.chunk_byte_indices(&content);
    assert_eq!(indexed.len(), bytes.len());
    for ((chars, chunk), (byte, byte_chunk)) in indexed.iter().zip(&bytes) {
        assert_eq!(chunk, byte_chunk);
        assert_eq!(&content[*byte..*byte + chunk.len()], *chunk);
        assert_eq!(content[..*byte].chars().count(), *chars);
    }
    assert_consistent(&chunker, &content);
    Ok(())
}

#[test]
fn test_tokenizer_instance_and_file_shapes() -> Result<()> {
    let tokenizer = Tokenizer::from_str(WORD_TOKENIZER_JSON).map_err(anyhow::Error::msg)?;
    let chunker = get_chunker(tokenizer, &ChunkerConfig::text(3))?;
    assert_eq!(chunker.strategy(), InitStrategy::Tokenizer);
    for chunk in chunker.chunks("lorem ipsum dolor sit amet consectetur") {
        assert!(chunk.split_whitespace().count() <= 3, "{chunk:?}");
    }

    let mut file = tempfile::Builder::new().suffix(".json").tempfile()?;
    file.write_all(WORD_TOKENIZER_JSON.as_bytes())?;

    let by_suffix = file.path().to_string_lossy().into_owned();
    let chunker = get_chunker(by_suffix, &ChunkerConfig::text(3))?;
    assert_eq!(chunker.strategy(), InitStrategy::TokenizerFile);

    let chunker = get_chunker(file.path(), &ChunkerConfig::markdown(3))?;
    assert_eq!(chunker.strategy(), InitStrategy::TokenizerFile);
    assert_eq!(chunker.family(), SplitterFamily::Markdown);
    Ok(())
}

#[test]
fn test_resolve_default_config() -> Result<()> {
    let defaults = ChunkerResolver::default().resolve_config(&Config::default())?;
    assert_eq!(defaults.family(), SplitterFamily::Text);
    assert_eq!(defaults.strategy(), InitStrategy::NamedModel);
    Ok(())
}

#[cfg(feature = "grammars")]
#[test]
fn test_resolve_from_config_file() -> Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(
        file,
        "[model]\nname = \"gpt-3.5-turbo\"\n\n[chunker]\ntype = \"code\"\nlanguage = \"python\"\nmax_tokens = 10"
    )?;

    let config = semchunk_config::ConfigBuilder::from_file(file.path())?;
    assert_eq!(config.chunker.language, Some(CodeLanguage::Python));

    let chunker = ChunkerResolver::new().resolve_config(&config)?;
    assert_eq!(chunker.family(), SplitterFamily::Code);
    assert!(chunker.chunks(PYTHON).len() > 1);
    Ok(())
}
