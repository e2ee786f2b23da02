//! Splits text into chunks the speech provider accepts.
//!
//! The provider rejects requests longer than [`MAX_CHUNK_CHARS`]. Text is cut
//! after sentence punctuation first, then on whitespace, and any word still
//! too long is hard-split.

/// Largest number of characters sent in one speech request.
pub const MAX_CHUNK_CHARS: usize = 100;

const SENTENCE_ENDS: &[char] = &[
    '.', '!', '?', ';', ':', ',', '\n', '。', '！', '？', '；', '：', '，', '、', '।', '؟', '،',
];

/// Splits `text` into trimmed, non-empty chunks of at most `max_chars` characters.
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();

    for sentence in split_sentences(text) {
        if sentence.chars().count() <= max_chars {
            chunks.push(sentence.to_string());
            continue;
        }
        pack_words(sentence, max_chars, &mut chunks);
    }

    chunks
}

fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        if SENTENCE_ENDS.contains(&ch) {
            let end = idx + ch.len_utf8();
            sentences.push(&text[start..end]);
            start = end;
        }
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty() && !s.chars().all(|c| SENTENCE_ENDS.contains(&c)))
        .collect()
}

fn pack_words(sentence: &str, max_chars: usize, chunks: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_len = 0;

    for word in sentence.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            hard_split(word, max_chars, chunks);
            continue;
        }

        let needed = if current.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };

        if needed > max_chars {
            chunks.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_len = needed;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
}

fn hard_split(word: &str, max_chars: usize, chunks: &mut Vec<String>) {
    let chars: Vec<char> = word.chars().collect();
    for piece in chars.chunks(max_chars) {
        chunks.push(piece.iter().collect());
    }
}
