use std::{ops::Deref, sync::Arc};

use crate::{
    error::{ErrorVerbosity, ErrorVerbosityProvider},
    repo::BookRepository,
};

#[derive(Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    pub fn new(repository: BookRepository, error_verbosity: ErrorVerbosity) -> Self {
        Self {
            inner: Arc::new(ApiStateInner {
                repository,
                error_verbosity,
            }),
        }
    }

    pub fn repository(&self) -> &BookRepository {
        &self.inner.repository
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct ApiStateInner {
    repository: BookRepository,
    error_verbosity: ErrorVerbosity,
}

impl ErrorVerbosityProvider for ApiState {
    fn error_verbosity(&self) -> ErrorVerbosity {
        self.inner.error_verbosity
    }
}
