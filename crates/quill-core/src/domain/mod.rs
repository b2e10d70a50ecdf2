//! Domain entities and the pure guards around them.

mod conflict;
mod post;
mod query;
mod validate;

pub use conflict::check_conflict;
pub use post::{BlogPost, PostDraft};
pub use query::PostQuery;
pub use validate::{check_id_match, validate_draft};
