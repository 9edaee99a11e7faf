//! Word lists the generator draws from.

/// The fixed set of titles generated posts use.
pub const TITLES: &[&str] = &[
    "10 things -- you won't believe #4",
    "Notes on shipping small services",
    "Why your tests are flaky",
    "A field guide to pagination",
    "What I learned rewriting our importer",
    "Ten years of the same text editor",
    "Backups you have never restored",
];

pub(crate) const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Linus", "Margaret", "Dennis", "Barbara", "Ken", "Frances", "Alan", "Radia",
    "Edsger", "Katherine",
];

pub(crate) const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Torvalds", "Hamilton", "Ritchie", "Liskov", "Thompson", "Allen",
    "Turing", "Perlman", "Dijkstra", "Johnson",
];

pub(crate) const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat",
];
