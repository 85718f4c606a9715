use std::future::Future;

use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
        store::session::IndexSource,
    },
    model::session::IndexInfo,
};

pub async fn get_index() -> Result<IndexInfo, ApiError> {
    let request = get("/");
    let response = send_request(request).await?;
    parse_response(response).await
}

/// Identity endpoint reached over the browser fetch API.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpIndex;

impl IndexSource for HttpIndex {
    fn fetch_index(&self) -> impl Future<Output = Result<IndexInfo, ApiError>> {
        get_index()
    }
}
