use tokenizers::Tokenizer;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Fetch a tokenizer by hub name (e.g. "Qwen/Qwen3-1.7B").
pub fn load_pretrained(model: &str) -> Result<Tokenizer> {
    debug!("Loading pretrained tokenizer '{}'", model);
    Tokenizer::from_pretrained(model, None).map_err(|e| {
        ClientError::Tokenizer(format!(
            "failed to load pretrained tokenizer '{}': {}",
            model, e
        ))
    })
}

/// Count the tokens in `prompt`, without special tokens.
pub fn count_tokens(tokenizer: &Tokenizer, prompt: &str) -> Result<usize> {
    let encoding = tokenizer
        .encode(prompt, false)
        .map_err(|e| ClientError::Tokenizer(e.to_string()))?;
    Ok(encoding.get_ids().len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokenizers::models::wordlevel::WordLevel;

    fn word_level(entries: &[(&str, u32)]) -> Tokenizer {
        let vocab: HashMap<String, u32> = entries
            .iter()
            .map(|(word, id)| (word.to_string(), *id))
            .collect();
        // The builder's vocab is an AHashMap; collect into it.
        let model = WordLevel::builder()
            .vocab(vocab.into_iter().collect())
            .unk_token("[UNK]".to_string())
            .build()
            .unwrap();
        Tokenizer::new(model)
    }

    #[test]
    fn counts_known_word() {
        let tokenizer = word_level(&[("wood", 0), ("[UNK]", 1)]);
        assert_eq!(count_tokens(&tokenizer, "wood").unwrap(), 1);
    }

    #[test]
    fn unknown_text_falls_back_to_unk() {
        let tokenizer = word_level(&[("wood", 0), ("[UNK]", 1)]);
        // No pre-tokenizer is configured, so the whole prompt is one lookup.
        let encoding = tokenizer.encode("chuck", false).unwrap();
        assert_eq!(encoding.get_ids(), &[1]);
        assert_eq!(count_tokens(&tokenizer, "chuck").unwrap(), 1);
    }
}
