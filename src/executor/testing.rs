//! In-memory transport for unit tests.

use super::{Transport, TransportError};
use crate::models::request::ApiRequest;
use crate::models::response::ApiResponse;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Replays queued responses in order and records every request it sees.
#[derive(Debug, Default)]
pub(crate) struct RecordingTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, reason(status)).with_body(body)));
    }

    pub(crate) fn respond_with(&self, response: ApiResponse) {
        self.responses.borrow_mut().push_back(Ok(response));
    }

    pub(crate) fn fail(&self, err: TransportError) {
        self.responses.borrow_mut().push_back(Err(err));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        self.responses.borrow_mut().pop_front().unwrap_or_else(|| {
            Err(TransportError::NetworkError(format!(
                "no response queued for {} {}",
                request.method, request.url
            )))
        })
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        401 => "Unauthorized",
        404 => "Not Found",
        _ => "Unknown",
    }
}
