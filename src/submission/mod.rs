pub mod fields;
pub mod id;
pub mod metadata;
pub mod parser;
pub mod pipeline;
