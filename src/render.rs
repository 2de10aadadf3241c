//! Rendering adapters that apply view intents

use log::info;
use std::sync::Mutex;

use mindconnect_views::Intent;

/// Applies intents to some concrete UI
pub trait Renderer: Send + Sync {
    fn render(&self, intent: &Intent);
}

/// Keeps every intent it receives, in order
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    intents: Mutex<Vec<Intent>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything rendered so far
    pub fn intents(&self) -> Vec<Intent> {
        self.intents.lock().map(|i| i.clone()).unwrap_or_default()
    }

    /// Drain the recorded intents
    pub fn take(&self) -> Vec<Intent> {
        self.intents
            .lock()
            .map(|mut i| std::mem::take(&mut *i))
            .unwrap_or_default()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, intent: &Intent) {
        if let Ok(mut intents) = self.intents.lock() {
            intents.push(intent.clone());
        }
    }
}

/// Writes each intent to the log at `info`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn render(&self, intent: &Intent) {
        info!("render: {:?}", intent);
    }
}
