//! Recording container used by the manager tests.

use std::collections::HashSet;

use chorus_common::types::{Rect, Size};

use crate::container::{Container, ViewPreferences};

#[derive(Debug, Clone, PartialEq)]
pub struct MockView {
    pub serial: u32,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(String),
    Attach(u32),
    Detach(u32),
    SetBounds(u32, Rect),
    SetZoom(u32, f64),
    Load(u32, String),
}

#[derive(Default)]
pub struct MockContainer {
    pub size: Size,
    pub calls: Vec<Call>,
    /// URLs whose creation fails.
    pub refuse: HashSet<String>,
    /// View serials whose bounds updates fail.
    pub broken_bounds: HashSet<u32>,
    next_serial: u32,
}

impl MockContainer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            ..Default::default()
        }
    }

    pub fn set_bounds_calls(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::SetBounds(..)))
            .count()
    }

    /// Most recent bounds applied to the view with this serial.
    pub fn last_bounds(&self, serial: u32) -> Option<Rect> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::SetBounds(s, r) if *s == serial => Some(*r),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Container for MockContainer {
    type View = MockView;
    type Error = String;

    fn create_view(&mut self, url: &str, _prefs: &ViewPreferences) -> Result<MockView, String> {
        self.calls.push(Call::Create(url.to_string()));
        if self.refuse.contains(url) {
            return Err("container refused".to_string());
        }
        self.next_serial += 1;
        Ok(MockView {
            serial: self.next_serial,
            url: url.to_string(),
        })
    }

    fn attach(&mut self, view: &MockView) {
        self.calls.push(Call::Attach(view.serial));
    }

    fn detach(&mut self, view: &MockView) {
        self.calls.push(Call::Detach(view.serial));
    }

    fn container_size(&self) -> Size {
        self.size
    }

    fn set_bounds(&mut self, view: &MockView, bounds: Rect) -> Result<(), String> {
        self.calls.push(Call::SetBounds(view.serial, bounds));
        if self.broken_bounds.contains(&view.serial) {
            return Err("view is gone".to_string());
        }
        Ok(())
    }

    fn set_zoom(&mut self, view: &MockView, factor: f64) -> Result<(), String> {
        self.calls.push(Call::SetZoom(view.serial, factor));
        Ok(())
    }

    fn load_address(&mut self, view: &MockView, url: &str) -> Result<(), String> {
        self.calls.push(Call::Load(view.serial, url.to_string()));
        Ok(())
    }
}
