//! Named widgets managed by the demo host
//!
//! The store is shared with submit futures, which validate and apply
//! changes off the UI task.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Local};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("A widget named '{0}' already exists")]
    Duplicate(String),

    #[error("No widget named '{0}'")]
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub name: String,
    pub created_at: DateTime<Local>,
}

#[derive(Debug, Default)]
pub struct WidgetStore {
    widgets: Vec<Widget>,
}

impl WidgetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.widgets.iter().position(|w| w.name == name)
    }

    pub fn create(&mut self, name: &str) -> Result<usize, StoreError> {
        if self.position(name).is_some() {
            return Err(StoreError::Duplicate(name.to_string()));
        }
        self.widgets.push(Widget {
            name: name.to_string(),
            created_at: Local::now(),
        });
        Ok(self.widgets.len() - 1)
    }

    pub fn rename(&mut self, from: &str, to: &str) -> Result<usize, StoreError> {
        let index = self
            .position(from)
            .ok_or_else(|| StoreError::NotFound(from.to_string()))?;
        if from != to && self.position(to).is_some() {
            return Err(StoreError::Duplicate(to.to_string()));
        }
        self.widgets[index].name = to.to_string();
        Ok(index)
    }

    pub fn remove(&mut self, name: &str) -> Result<Widget, StoreError> {
        let index = self
            .position(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        Ok(self.widgets.remove(index))
    }
}

/// Store handle shared between the UI and submit futures
#[derive(Debug, Clone, Default)]
pub struct SharedStore(Arc<Mutex<WidgetStore>>);

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the store; a poisoned lock still yields the data
    pub fn lock(&self) -> MutexGuard<'_, WidgetStore> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
