use std::sync::Arc;

use crate::{
    clock::shared::SharedClock,
    scene::instance::{FrameSnapshot, PatternInstance},
    variant::table::VariantTable,
};

/// The per-frame loop: owns the shared clock and the mounted sections.
///
/// [`advance`](FrameDriver::advance) ticks the clock exactly once and only then reads
/// every section, so all sections in a frame observe the same time.
#[derive(Debug)]
pub struct FrameDriver {
    clock: Arc<SharedClock>,
    table: VariantTable,
    sections: Vec<(String, PatternInstance)>,
}

impl FrameDriver {
    /// A driver over `clock`, resolving sections through `table`.
    pub fn new(clock: Arc<SharedClock>, table: VariantTable) -> Self {
        Self {
            clock,
            table,
            sections: Vec::new(),
        }
    }

    /// A driver over the process-wide clock and the built-in table.
    pub fn global() -> Self {
        Self::new(SharedClock::global(), VariantTable::builtin())
    }

    /// The clock this driver ticks.
    pub fn clock(&self) -> &Arc<SharedClock> {
        &self.clock
    }

    /// The lookup table used by [`mount`](FrameDriver::mount).
    pub fn table(&self) -> &VariantTable {
        &self.table
    }

    /// Mount `variant_name` under `section_id`, replacing any section with the same id.
    ///
    /// Returns `false` when the pattern could not be built; the id is then left
    /// unmounted and the section draws nothing.
    pub fn mount(&mut self, section_id: impl Into<String>, variant_name: &str) -> bool {
        let id = section_id.into();
        let instance = PatternInstance::mount(variant_name, &self.table, self.clock.clone());
        let existing = self.sections.iter().position(|(s, _)| *s == id);
        match (instance, existing) {
            (Some(inst), Some(i)) => {
                self.sections[i].1 = inst;
                true
            }
            (Some(inst), None) => {
                tracing::debug!(section = %id, variant = %inst.variant(), "mounted section");
                self.sections.push((id, inst));
                true
            }
            (None, Some(i)) => {
                self.sections.remove(i);
                false
            }
            (None, None) => false,
        }
    }

    /// Drop the section with `section_id`, releasing its family. Returns whether it existed.
    pub fn unmount(&mut self, section_id: &str) -> bool {
        let before = self.sections.len();
        self.sections.retain(|(s, _)| s != section_id);
        self.sections.len() != before
    }

    /// Look up a mounted section.
    pub fn get(&self, section_id: &str) -> Option<&PatternInstance> {
        self.sections
            .iter()
            .find(|(s, _)| s == section_id)
            .map(|(_, inst)| inst)
    }

    /// Mounted section ids in mount order.
    pub fn section_ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|(s, _)| s.as_str())
    }

    /// Number of mounted sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether no section is mounted.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Snapshots of every section at the current time, without ticking.
    pub fn snapshot(&self) -> Vec<(&str, FrameSnapshot<'_>)> {
        self.sections
            .iter()
            .map(|(id, inst)| (id.as_str(), inst.snapshot()))
            .collect()
    }

    /// Run one frame: tick once, then snapshot every section in mount order.
    pub fn advance(&self) -> Vec<(&str, FrameSnapshot<'_>)> {
        self.clock.tick();
        self.snapshot()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/driver.rs"]
mod tests;
