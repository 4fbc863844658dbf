// Copyright 2026 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;

use crate::document::LayerId;

/// Per-layer visibility, keyed by layer id.
///
/// Layers are visible unless explicitly hidden. Ids need not exist in any
/// document; a state recorded for an unknown id applies once a layer with
/// that id shows up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayerVisibility {
    visible: HashMap<LayerId, bool>,
}

impl LayerVisibility {
    /// Creates a store where every layer is visible.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether layer `id` is visible.
    pub fn is_visible(&self, id: LayerId) -> bool {
        self.visible.get(&id).copied().unwrap_or(true)
    }

    /// Flips the visibility of layer `id`.
    pub fn toggle(&mut self, id: LayerId) {
        let visible = self.is_visible(id);
        self.set_visible(id, !visible);
    }

    /// Sets the visibility of layer `id`.
    pub fn set_visible(&mut self, id: LayerId, visible: bool) {
        if visible {
            // Visible is the default, so the entry can go.
            self.visible.remove(&id);
        } else {
            self.visible.insert(id, false);
        }
    }

    /// Makes every layer visible again.
    pub fn show_all(&mut self) {
        self.visible.clear();
    }

    /// Ids of hidden layers, in no particular order.
    pub fn hidden(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.visible
            .iter()
            .filter(|&(_, &visible)| !visible)
            .map(|(&id, _)| id)
    }
}
