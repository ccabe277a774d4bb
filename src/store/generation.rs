//! Last architecture proposal returned by the backend.

use crate::api::public::architect::ArchitectResponse;

#[derive(Default, Debug)]
pub struct GenerationStore {
    result: Option<ArchitectResponse>,
    is_loading: bool,
    error: Option<String>,
}

impl GenerationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> Option<&ArchitectResponse> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_result(&mut self, result: Option<ArchitectResponse>) {
        self.result = result;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn clear(&mut self) {
        self.result = None;
        self.error = None;
    }
}
