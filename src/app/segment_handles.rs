//! Segment-Handles: ziehbare Steuerpunkte für die Zeilen einer Card.
//!
//! Zustände: `Inactive` (keine Handles) → `Built` → `Dragging` → `Built`.
//! Handles sind abgeleitet und werden nie persistiert. Die Zeile eines
//! Handles ist nach dem Aufbau unveränderlich; ändert sich die Zeilenanzahl,
//! wird der gesamte Satz verworfen und neu aufgebaut.

use crate::core::{Card, CardId};
use glam::{Quat, Vec3};

/// Zustand des Handle-Controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlePhase {
    Inactive,
    Built,
    Dragging,
}

/// Ein Steuerpunkt für eine Zeile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHandle {
    row: usize,
    /// Zeilenmittelpunkt inklusive Offset im lokalen Card-Raum
    pub local_position: Vec3,
    pub world_position: Vec3,
    /// Weltrotation der Card (Handles werden nur verschoben)
    pub world_rotation: Quat,
}

impl SegmentHandle {
    pub fn row(&self) -> usize {
        self.row
    }
}

/// Baseline beim Drag-Start, beides im lokalen Raum.
#[derive(Debug, Clone, Copy)]
struct DragBaseline {
    row: usize,
    local_position: Vec3,
    offset: Vec3,
}

/// Verwaltet die Handles der aktiven Einzel-Selektion.
#[derive(Debug, Clone, Default)]
pub struct SegmentHandleController {
    card: Option<CardId>,
    handles: Vec<SegmentHandle>,
    drag: Option<DragBaseline>,
    radius: f32,
}

impl SegmentHandleController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> HandlePhase {
        match (self.card, self.drag) {
            (None, _) => HandlePhase::Inactive,
            (Some(_), None) => HandlePhase::Built,
            (Some(_), Some(_)) => HandlePhase::Dragging,
        }
    }

    /// Card, zu der die Handles gehören.
    pub fn active_card(&self) -> Option<CardId> {
        self.card
    }

    pub fn handles(&self) -> &[SegmentHandle] {
        &self.handles
    }

    pub fn handle(&self, row: usize) -> Option<&SegmentHandle> {
        self.handles.get(row)
    }

    /// Darstellungsradius der Handles (Welteinheiten).
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Zeile des gerade gezogenen Handles.
    pub fn dragging_row(&self) -> Option<usize> {
        self.drag.map(|d| d.row)
    }

    /// Verwirft alle Handles und baut sie für `card` neu auf.
    pub fn build(&mut self, card: &Card, radius: f32) {
        let params = card.params();
        let rotation = card.world_rotation();
        self.handles = (0..params.row_count())
            .map(|row| {
                let local = params.row_center(row);
                SegmentHandle {
                    row,
                    local_position: local,
                    world_position: card.local_to_world(local),
                    world_rotation: rotation,
                }
            })
            .collect();
        self.card = Some(card.id());
        self.drag = None;
        self.radius = radius;
        log::debug!("{} Segment-Handles für Card {} aufgebaut", self.handles.len(), card.id());
    }

    /// Entfernt alle Handles (→ `Inactive`).
    pub fn clear(&mut self) {
        if self.card.is_some() {
            log::debug!("Segment-Handles entfernt");
        }
        self.card = None;
        self.handles.clear();
        self.drag = None;
    }

    /// Startet den Drag eines Handles (`Built` → `Dragging`).
    ///
    /// Gibt `false` zurück, wenn die Card nicht die aktive ist oder die
    /// Zeile nicht existiert.
    pub fn begin_drag(&mut self, card: &Card, row: usize) -> bool {
        if self.card != Some(card.id()) {
            return false;
        }
        let Some(handle) = self.handles.get(row) else {
            return false;
        };
        self.drag = Some(DragBaseline {
            row,
            local_position: handle.local_position,
            offset: card.params().segment_offset(row),
        });
        true
    }

    /// Drag-Update mit neuer lokaler Handle-Position.
    ///
    /// Neuer Offset = Baseline-Offset + (Position − Baseline-Position). Nur die
    /// Vertices der betroffenen Zeile werden gepatcht; das Handle rastet
    /// danach auf den exakt neu berechneten Zeilenmittelpunkt ein.
    pub fn drag_to_local(&mut self, card: &mut Card, local: Vec3) -> bool {
        let Some(baseline) = self.drag else {
            return false;
        };
        if self.card != Some(card.id()) || !local.is_finite() {
            return false;
        }
        let offset = baseline.offset + (local - baseline.local_position);
        if !card.apply_segment_offset(baseline.row, offset) {
            return false;
        }
        let snapped = card.params().row_center(baseline.row);
        let world = card.local_to_world(snapped);
        if let Some(handle) = self.handles.get_mut(baseline.row) {
            handle.local_position = snapped;
            handle.world_position = world;
        }
        true
    }

    /// Drag-Update mit neuer Weltposition (z.B. vom Gizmo).
    pub fn drag_to_world(&mut self, card: &mut Card, world: Vec3) -> bool {
        let local = card.world_to_local(world);
        self.drag_to_local(card, local)
    }

    /// Beendet den Drag (`Dragging` → `Built`) und liefert die bearbeitete Zeile.
    pub fn end_drag(&mut self) -> Option<usize> {
        self.drag.take().map(|d| d.row)
    }

    /// Projiziert alle Handles aus ihrer lokalen Definition neu in den Weltraum.
    pub fn sync_world_positions(&mut self, card: &Card) {
        if self.card != Some(card.id()) {
            return;
        }
        let rotation = card.world_rotation();
        for handle in &mut self.handles {
            handle.world_position = card.local_to_world(handle.local_position);
            handle.world_rotation = rotation;
        }
    }
}
