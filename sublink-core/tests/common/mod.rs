#![allow(dead_code)]

use std::future::Future;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use sublink_core::{ClientError, Dispatcher, RequestDescriptor};

/// Records every request and answers with a fixed body.
#[derive(Debug, Clone)]
pub struct RecordingDispatcher {
    requests: Arc<Mutex<Vec<RequestDescriptor>>>,
    reply: Value,
}

impl RecordingDispatcher {
    pub fn replying(reply: Value) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply,
        }
    }

    pub fn ok() -> Self {
        Self::replying(json!({"code": "00000", "msg": "ok"}))
    }

    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().unwrap().clone()
    }

    pub fn single_request(&self) -> RequestDescriptor {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl Dispatcher for RecordingDispatcher {
    fn dispatch(
        &self,
        request: RequestDescriptor,
    ) -> impl Future<Output = Result<Value, ClientError>> + Send {
        self.requests.lock().unwrap().push(request);
        let reply = self.reply.clone();
        async move { Ok(reply) }
    }
}

/// Rejects every request with a fixed HTTP status.
#[derive(Debug, Clone)]
pub struct RejectingDispatcher {
    pub status: u16,
    pub calls: Arc<Mutex<usize>>,
}

impl RejectingDispatcher {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl Dispatcher for RejectingDispatcher {
    fn dispatch(
        &self,
        _request: RequestDescriptor,
    ) -> impl Future<Output = Result<Value, ClientError>> + Send {
        *self.calls.lock().unwrap() += 1;
        let status = self.status;
        async move {
            Err(ClientError::Status {
                status,
                body: "not found".into(),
            })
        }
    }
}
