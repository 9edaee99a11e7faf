use chrono::{Duration, Utc};
use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use blog_core::domain::{Author, BlogPost};
use blog_shared::dto::{AuthorPayload, CreatePostRequest};

use crate::words::{FIRST_NAMES, LAST_NAMES, TITLES, WORDS};

const MAX_AGE_SECS: i64 = 30 * 24 * 60 * 60;

/// Fake post generator over any RNG.
pub struct PostFaker<R = ThreadRng> {
    rng: R,
}

impl PostFaker<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for PostFaker<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl PostFaker<StdRng> {
    /// Deterministic generator; equal seeds yield equal sequences
    /// (ids and timestamps aside, which come from the clock and uuid v4).
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> PostFaker<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    fn pick(&mut self, list: &[&'static str]) -> &'static str {
        list.choose(&mut self.rng).copied().unwrap_or_default()
    }

    pub fn author(&mut self) -> Author {
        Author {
            first_name: self.pick(FIRST_NAMES).to_string(),
            last_name: self.pick(LAST_NAMES).to_string(),
        }
    }

    pub fn title(&mut self) -> String {
        self.pick(TITLES).to_string()
    }

    /// One paragraph of 3 to 6 sentences.
    pub fn content(&mut self) -> String {
        let sentences = self.rng.gen_range(3..=6);
        (0..sentences)
            .map(|_| self.sentence())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn sentence(&mut self) -> String {
        let len = self.rng.gen_range(6..=14);
        let words: Vec<&str> = (0..len).map(|_| self.pick(WORDS)).collect();
        let mut sentence = String::new();
        if let Some(first) = words.first() {
            let mut chars = first.chars();
            if let Some(c) = chars.next() {
                sentence.extend(c.to_uppercase());
                sentence.push_str(chars.as_str());
            }
        }
        for word in words.iter().skip(1) {
            sentence.push(' ');
            sentence.push_str(word);
        }
        sentence.push('.');
        sentence
    }

    pub fn post(&mut self) -> BlogPost {
        let age = Duration::seconds(self.rng.gen_range(0..MAX_AGE_SECS));
        let author = self.author();
        let title = self.title();
        let content = self.content();
        BlogPost::with_created(author, title, content, Utc::now() - age)
    }

    pub fn posts(&mut self, n: usize) -> Vec<BlogPost> {
        (0..n).map(|_| self.post()).collect()
    }

    pub fn create_request(&mut self) -> CreatePostRequest {
        let author = self.author();
        CreatePostRequest::new(
            AuthorPayload::new(author.first_name, author.last_name),
            self.title(),
            self.content(),
        )
    }
}
