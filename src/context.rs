use std::sync::Arc;

use camino::{Utf8Path as Path, Utf8PathBuf as PathBuf};

use crate::types::dataset::Dataset;

/// Everything a request handler needs, built once before the server starts.
#[derive(Clone)]
pub struct AppContext {
    dataset: Arc<Dataset>,
    data_file: PathBuf,
}

impl AppContext {
    pub fn new(dataset: Dataset, data_file: PathBuf) -> Self {
        Self {
            dataset: Arc::new(dataset),
            data_file,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}
