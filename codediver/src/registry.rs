// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{collections::HashMap, rc::Rc};

use log::trace;

use crate::Section;

/// Named blocks that `PERFORM` can reach. Names are matched
/// case-insensitively.
#[derive(Debug, Default)]
pub struct SectionRegistry {
    sections: HashMap<String, Rc<Section>>,
}

impl SectionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the section that was registered under the same name before.
    pub fn register(&mut self, name: &str, section: Rc<Section>) -> Option<Rc<Section>> {
        let key = name.to_ascii_uppercase();
        trace!("Registering section {key}");
        self.sections.insert(key, section)
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Rc<Section>> {
        self.sections.get(&name.to_ascii_uppercase()).cloned()
    }

    pub fn clear(&mut self) {
        self.sections.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Registered names, upper-cased and sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sections.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
