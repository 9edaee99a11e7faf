//! # Blog Fixtures
//!
//! Randomized blog post data for seeding stores and building request
//! payloads in tests.
//!
//! ```ignore
//! let seed = blog_fixtures::generate_posts(10);
//! repo.insert_many(seed).await?;
//! ```

mod faker;
mod words;

pub use faker::PostFaker;
pub use words::TITLES;

use blog_core::domain::{Author, BlogPost};
use blog_shared::dto::CreatePostRequest;

/// A random post with a `created` time within the last 30 days.
pub fn generate_post() -> BlogPost {
    PostFaker::new().post()
}

/// `n` random posts, for bulk seeding.
pub fn generate_posts(n: usize) -> Vec<BlogPost> {
    PostFaker::new().posts(n)
}

/// A random, fully populated creation payload.
pub fn generate_create_request() -> CreatePostRequest {
    PostFaker::new().create_request()
}

pub fn generate_author() -> Author {
    PostFaker::new().author()
}

pub fn generate_title() -> String {
    PostFaker::new().title()
}

pub fn generate_content() -> String {
    PostFaker::new().content()
}
