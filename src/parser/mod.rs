pub mod frontmatter;

pub use frontmatter::{
    has_front_matter, read_front_matter, split_front_matter, strip_legacy_line,
    upsert_front_matter, FrontMatter, FrontMatterError, DELIMITER,
};
