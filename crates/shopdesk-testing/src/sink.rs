use std::sync::{Arc, Mutex, MutexGuard};

use shopdesk_runtime::{ExportSink, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum ExportRecord {
    Csv { name: String, content: String },
    Pdf { order_id: u64, url: String },
}

/// Keeps every export in memory. Clones share the record list.
#[derive(Debug, Clone, Default)]
pub struct MemoryExportSink {
    records: Arc<Mutex<Vec<ExportRecord>>>,
}

impl MemoryExportSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn records_mut(&self) -> MutexGuard<'_, Vec<ExportRecord>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn records(&self) -> Vec<ExportRecord> {
        self.records_mut().clone()
    }

    pub fn last_csv(&self) -> Option<(String, String)> {
        self.records_mut().iter().rev().find_map(|r| match r {
            ExportRecord::Csv { name, content } => Some((name.clone(), content.clone())),
            ExportRecord::Pdf { .. } => None,
        })
    }
}

impl ExportSink for MemoryExportSink {
    fn save_csv(&mut self, name: &str, content: &str) -> Result<String> {
        self.records_mut().push(ExportRecord::Csv {
            name: name.to_string(),
            content: content.to_string(),
        });
        Ok(format!("memory://{}", name))
    }

    fn open_pdf(&mut self, order_id: u64, url: &str) -> Result<String> {
        self.records_mut().push(ExportRecord::Pdf {
            order_id,
            url: url.to_string(),
        });
        Ok(url.to_string())
    }
}
