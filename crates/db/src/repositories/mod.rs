//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod comment_repo;
pub mod post_repo;
pub mod profile_repo;
pub mod session_repo;
pub mod token_repo;

pub use category_repo::CategoryRepo;
pub use comment_repo::CommentRepo;
pub use post_repo::PostRepo;
pub use profile_repo::ProfileRepo;
pub use session_repo::SessionRepo;
pub use token_repo::TokenRepo;
