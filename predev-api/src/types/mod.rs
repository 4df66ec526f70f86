pub mod query;
pub mod request;
pub mod response;

pub use query::ListSpecsQuery;
pub use request::{FileAttachment, OutputFormat, SpecRequest};
pub use response::{
    AsyncSpecHandle, CreditsBalance, SpecEndpoint, SpecListPage, SpecResponse, SpecStatus,
    ZippedDocsUrl,
};
