#![allow(missing_docs)]

use std::{
    collections::HashMap,
    sync::{Arc, LazyLock},
};

use bytemint::{Pair, TokenId, Tokenizer, TokenizerOptions, Vocabulary};
use divan::{Bencher, black_box, counter::BytesCount};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

static ENGLISH_CORPUS: &str = "\
The quick brown fox jumps over the lazy dog. \
It was the best of times, it was the worst of times, \
it was the age of wisdom, it was the age of foolishness. \
Call me Ishmael. Some years ago, never mind how long precisely, \
having little or no money in my purse, and nothing particular \
to interest me on shore, I thought I would sail about a little \
and see the watery part of the world.\n";

fn english_text() -> String {
    ENGLISH_CORPUS.repeat(40)
}

/// Learn `count` merge rules from the corpus, most frequent pair first.
fn learn_rules(count: usize) -> Vec<Pair> {
    let mut ids: Vec<TokenId> = ENGLISH_CORPUS.bytes().map(TokenId::from).collect();
    let mut rules = Vec::with_capacity(count);

    for i in 0..count {
        let mut counts: HashMap<Pair, usize> = HashMap::new();
        for w in ids.windows(2) {
            *counts.entry((w[0], w[1])).or_default() += 1;
        }
        let Some((&pair, _)) = counts.iter().max_by_key(|&(p, c)| (*c, std::cmp::Reverse(*p)))
        else {
            break;
        };

        let minted = 256 + i as TokenId;
        let mut merged = Vec::with_capacity(ids.len());
        let mut j = 0;
        while j < ids.len() {
            if j + 1 < ids.len() && (ids[j], ids[j + 1]) == pair {
                merged.push(minted);
                j += 2;
            } else {
                merged.push(ids[j]);
                j += 1;
            }
        }
        ids = merged;
        rules.push(pair);
    }
    rules
}

static SMALL: LazyLock<Arc<Tokenizer>> = LazyLock::new(|| build(32));
static LARGE: LazyLock<Arc<Tokenizer>> = LazyLock::new(|| build(256));

fn build(count: usize) -> Arc<Tokenizer> {
    let vocab = Vocabulary::from_rules(learn_rules(count)).unwrap();
    TokenizerOptions::default().build(Arc::new(vocab)).unwrap()
}

mod encode {
    use super::*;

    #[divan::bench]
    fn small_vocab(bencher: Bencher) {
        let text = english_text();
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| SMALL.encode(black_box(&text), false, false));
    }

    #[divan::bench]
    fn large_vocab(bencher: Bencher) {
        let text = english_text();
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| LARGE.encode(black_box(&text), false, false));
    }

    #[divan::bench]
    fn large_vocab_anticausal(bencher: Bencher) {
        let text = english_text();
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| LARGE.encode(black_box(&text), true, true));
    }

    #[divan::bench]
    fn large_vocab_batch(bencher: Bencher) {
        let batch: Vec<String> = ENGLISH_CORPUS.lines().map(|s| s.repeat(8)).collect();
        let batch: Vec<String> = std::iter::repeat_n(batch, 16).flatten().collect();
        let total: usize = batch.iter().map(String::len).sum();
        bencher
            .counter(BytesCount::new(total))
            .bench(|| LARGE.encode_batch(black_box(&batch), false, false));
    }
}

mod decode {
    use super::*;

    #[divan::bench]
    fn large_vocab(bencher: Bencher) {
        let text = english_text();
        let ids = LARGE.encode(&text, false, false);
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| LARGE.decode_text(black_box(&ids), false).unwrap());
    }

    #[divan::bench]
    fn large_vocab_anticausal(bencher: Bencher) {
        let text = english_text();
        let ids = LARGE.encode(&text, true, true);
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| LARGE.decode_text(black_box(&ids), true).unwrap());
    }
}
