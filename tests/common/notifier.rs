//! Recording notifier for client tests

use std::sync::Mutex;

use sekolah_beta::client::{Notifier, Toast};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    LoadingStarted,
    LoadingFinished,
    Toast(Toast),
    Redirect(String),
}

/// Notifier that remembers every event in order
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<UiEvent>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<UiEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                UiEvent::Toast(toast) => Some(toast),
                _ => None,
            })
            .collect()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                UiEvent::Redirect(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: UiEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl Notifier for RecordingNotifier {
    fn start_loading(&self) {
        self.push(UiEvent::LoadingStarted);
    }

    fn finish_loading(&self) {
        self.push(UiEvent::LoadingFinished);
    }

    fn toast(&self, toast: Toast) {
        self.push(UiEvent::Toast(toast));
    }

    fn redirect(&self, path: &str) {
        self.push(UiEvent::Redirect(path.to_string()));
    }
}
