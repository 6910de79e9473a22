pub mod result;
pub mod url_type;

pub use result::{ResearchResult, SummaryResult};
pub use url_type::UrlType;
