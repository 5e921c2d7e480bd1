use std::num::NonZeroUsize;
use std::str::SplitWhitespace;

/// A run of at most `max` consecutive words from the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    words: Vec<&'a str>,
}

impl<'a> Chunk<'a> {
    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Words joined with single spaces.
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// Lazy iterator over word chunks. Clone it to restart from the same position.
#[derive(Debug, Clone)]
pub struct WordChunks<'a> {
    words: SplitWhitespace<'a>,
    max: NonZeroUsize,
}

pub fn chunk_words(text: &str, max: NonZeroUsize) -> WordChunks<'_> {
    WordChunks {
        words: text.split_whitespace(),
        max,
    }
}

impl<'a> Iterator for WordChunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let words: Vec<&'a str> = self.words.by_ref().take(self.max.get()).collect();
        if words.is_empty() {
            None
        } else {
            Some(Chunk { words })
        }
    }
}

impl std::iter::FusedIterator for WordChunks<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn max(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn numbered_words(n: usize) -> String {
        (0..n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn twelve_hundred_words_split_into_500_500_200() {
        let text = numbered_words(1200);
        let sizes: Vec<usize> = chunk_words(&text, max(500)).map(|c| c.word_count()).collect();
        assert_eq!(sizes, vec![500, 500, 200]);
    }

    #[test]
    fn concatenated_chunks_reproduce_word_sequence() {
        let text = "  The quick\tbrown fox\n\njumps over   the lazy dog  ";
        for n in 1..=10 {
            let rejoined: Vec<&str> = chunk_words(text, max(n))
                .flat_map(|c| c.words().to_vec())
                .collect();
            let expected: Vec<&str> = text.split_whitespace().collect();
            assert_eq!(rejoined, expected, "max = {n}");
        }
    }

    #[test]
    fn only_last_chunk_may_be_short() {
        let text = numbered_words(23);
        let chunks: Vec<Chunk<'_>> = chunk_words(&text, max(5)).collect();
        let (last, full) = chunks.split_last().unwrap();
        assert!(full.iter().all(|c| c.word_count() == 5));
        assert!((1..=5).contains(&last.word_count()));
        assert_eq!(last.word_count(), 3);
    }

    #[test]
    fn empty_and_blank_input_yield_nothing() {
        assert_eq!(chunk_words("", max(3)).count(), 0);
        assert_eq!(chunk_words(" \n\t ", max(3)).count(), 0);
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_chunk() {
        let text = numbered_words(10);
        let sizes: Vec<usize> = chunk_words(&text, max(5)).map(|c| c.word_count()).collect();
        assert_eq!(sizes, vec![5, 5]);
    }

    #[test]
    fn clone_restarts_from_same_position() {
        let text = numbered_words(7);
        let mut chunks = chunk_words(&text, max(3));
        chunks.next();
        let replay = chunks.clone();
        assert_eq!(chunks.collect::<Vec<_>>(), replay.collect::<Vec<_>>());
    }

    #[test]
    fn text_joins_with_single_spaces() {
        let chunk = chunk_words("a\n b \t c d", max(3)).next().unwrap();
        assert_eq!(chunk.text(), "a b c");
    }
}
