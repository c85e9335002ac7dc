// Résumé field extraction.
// Pure, synchronous heuristics over extracted document text. Nothing in here
// performs I/O or holds state between calls; handlers wrap it for HTTP.

pub mod contact;
pub mod education;
pub mod experience;
pub mod handlers;
pub mod normalize;
pub mod pipeline;
pub mod sections;
pub mod skills;
pub mod summary;
