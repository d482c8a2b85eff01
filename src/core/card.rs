//! Hair-Card-Entität: Identität, Name, Transformation, Parameter und Mesh.

use super::geometry::{synthesize, VertexBuffer};
use super::{CardParams, CardParamsPatch, Transform};
use glam::{Affine3A, Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// Eindeutige ID einer Card innerhalb einer Sitzung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u64);

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Eine platzierte Hair-Card.
///
/// Das Mesh gehört exklusiv der Card und wird bei Parameteränderungen
/// vollständig neu synthetisiert. Die Welt-Matrix wird lazy aus der
/// Transformation berechnet und bei jeder Änderung invalidiert.
#[derive(Debug, Clone)]
pub struct Card {
    id: CardId,
    /// Anzeigename (Kartenliste, Sitzungs-Selektion)
    pub name: String,
    transform: Transform,
    params: CardParams,
    mesh: VertexBuffer,
    world_cache: Cell<Option<Affine3A>>,
}

impl Card {
    /// Erstellt eine Card und synthetisiert ihr Mesh.
    pub fn new(id: CardId, name: impl Into<String>, mut params: CardParams, transform: Transform) -> Self {
        params.repair_segment_offsets();
        let mesh = synthesize(&params);
        Self {
            id,
            name: name.into(),
            transform,
            params,
            mesh,
            world_cache: Cell::new(None),
        }
    }

    /// Platziert eine Card auf einer Oberfläche (Wurzel um `root_offset` entlang der Normalen versetzt).
    pub fn place(
        id: CardId,
        name: impl Into<String>,
        params: CardParams,
        surface_point: Vec3,
        surface_normal: Vec3,
    ) -> Self {
        let transform = Transform::on_surface(surface_point, surface_normal, params.root_offset);
        Self::new(id, name, params, transform)
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn params(&self) -> &CardParams {
        &self.params
    }

    pub fn mesh(&self) -> &VertexBuffer {
        &self.mesh
    }

    /// Ersetzt die Transformation.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
        self.world_cache.set(None);
    }

    /// Mutabler Zugriff auf die Transformation (invalidiert die Welt-Matrix).
    pub fn transform_mut(&mut self) -> &mut Transform {
        self.world_cache.set(None);
        &mut self.transform
    }

    /// Lokal→Welt-Matrix (gecacht).
    pub fn world_matrix(&self) -> Affine3A {
        if let Some(m) = self.world_cache.get() {
            return m;
        }
        let m = self.transform.matrix();
        self.world_cache.set(Some(m));
        m
    }

    pub fn local_to_world(&self, local: Vec3) -> Vec3 {
        self.world_matrix().transform_point3(local)
    }

    pub fn world_to_local(&self, world: Vec3) -> Vec3 {
        self.world_matrix().inverse().transform_point3(world)
    }

    /// Weltrotation der Card.
    pub fn world_rotation(&self) -> Quat {
        self.transform.rotation
    }

    /// Übernimmt einen Parameter-Patch und ersetzt das Mesh durch eine Neusynthese.
    pub fn rebuild_geometry(&mut self, patch: &CardParamsPatch) {
        self.params.apply_patch(patch);
        self.mesh = synthesize(&self.params);
    }

    /// Setzt den Offset einer Zeile und patcht nur die betroffenen Vertices.
    ///
    /// Gibt `false` zurück, wenn die Zeile nicht existiert.
    pub fn apply_segment_offset(&mut self, row: usize, offset: Vec3) -> bool {
        if self.params.repair_segment_offsets() {
            self.mesh = synthesize(&self.params);
        }
        let Some(slot) = self.params.segment_offsets.get_mut(row) else {
            return false;
        };
        *slot = offset;
        if !self.mesh.patch_row(&self.params, row) {
            self.mesh = synthesize(&self.params);
        }
        true
    }

    /// Setzt den Wurzelabstand und verschiebt die Card entlang ihrer lokalen Normalen um die Differenz.
    pub fn set_root_offset(&mut self, root_offset: f32) {
        let delta = root_offset - self.params.root_offset;
        let normal = self.transform.normal().normalize_or_zero();
        self.transform_mut().position += normal * delta;
        self.params.root_offset = root_offset;
    }

    /// Tiefe Kopie mit neuer ID, neuem Namen und leicht versetzter Position.
    pub fn duplicate(&self, id: CardId, name: impl Into<String>, offset: Vec3) -> Self {
        let mut transform = self.transform;
        transform.position += offset;
        Self {
            id,
            name: name.into(),
            transform,
            params: self.params.clone(),
            mesh: self.mesh.clone(),
            world_cache: Cell::new(None),
        }
    }

    /// Serialisierbare Form (Name, Transformation, Parameter).
    pub fn to_record(&self) -> CardRecord {
        CardRecord {
            name: self.name.clone(),
            pos: self.transform.position,
            quat: self.transform.rotation,
            scale: self.transform.scale,
            params: Some(self.params.clone()),
        }
    }

    /// Baut eine Card aus einem Record neu auf.
    ///
    /// `fallback` wird für Records ohne Parameter verwendet. Nicht-endliche
    /// Werte oder eine entartete Rotation gelten als fehlerhafter Eintrag.
    pub fn from_record(id: CardId, record: &CardRecord, fallback: &CardParams) -> anyhow::Result<Self> {
        let params = record.params.clone().unwrap_or_else(|| fallback.clone());
        if !params.is_finite() {
            anyhow::bail!("Card '{}': Parameter enthalten ungültige Zahlen", record.name);
        }
        if !(params.width > 0.0 && params.length > 0.0) {
            anyhow::bail!("Card '{}': Breite und Länge müssen positiv sein", record.name);
        }
        if !(record.pos.is_finite() && record.quat.is_finite() && record.scale.is_finite()) {
            anyhow::bail!("Card '{}': Transformation enthält ungültige Zahlen", record.name);
        }
        if record.quat.length_squared() < 1e-12 {
            anyhow::bail!("Card '{}': Rotation ist entartet", record.name);
        }
        let transform = Transform {
            position: record.pos,
            rotation: record.quat.normalize(),
            scale: record.scale,
        };
        Ok(Self::new(id, record.name.clone(), params, transform))
    }
}

/// Persistierte Form einer Card (Sitzung und History).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pos: Vec3,
    #[serde(default = "default_quat")]
    pub quat: Quat,
    #[serde(default = "default_scale")]
    pub scale: Vec3,
    #[serde(default)]
    pub params: Option<CardParams>,
}

fn default_quat() -> Quat {
    Quat::IDENTITY
}

fn default_scale() -> Vec3 {
    Vec3::ONE
}
