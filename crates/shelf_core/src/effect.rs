#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    QueryCatalog {
        request_id: crate::RequestId,
        term: String,
        max_results: u32,
    },
}

impl From<crate::SearchRequest> for Effect {
    fn from(request: crate::SearchRequest) -> Self {
        Effect::QueryCatalog {
            request_id: request.request_id,
            term: request.term,
            max_results: request.max_results,
        }
    }
}
