use crate::core::{Axis, CardParams, CardParamsPatch, MirrorConfig};
use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Aktiver Interaktionsmodus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditorMode {
    /// Klick auf das Modell platziert eine Card
    #[default]
    Place,
    /// Klick selektiert Cards bzw. Segment-Handles
    Select,
}

/// Globale Platzierungsparameter (Breite/Länge/Offset relativ zur Modell-Skalierung).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceParams {
    pub width: f32,
    pub length: f32,
    pub segments: u32,
    pub curvature: f32,
    pub taper: f32,
    pub offset: f32,
    pub alpha_test: f32,
    pub double_sided: bool,
    #[serde(flatten)]
    pub mirror: MirrorConfig,
}

impl Default for PlaceParams {
    fn default() -> Self {
        Self {
            width: 0.025,
            length: 0.12,
            segments: 8,
            curvature: 0.2,
            taper: 0.2,
            offset: 0.002,
            alpha_test: 0.1,
            double_sided: true,
            mirror: MirrorConfig::default(),
        }
    }
}

impl PlaceParams {
    /// Card-Parameter für eine neue Platzierung bei gegebener Modell-Skalierung.
    pub fn card_params(&self, model_scale: f32) -> CardParams {
        CardParams::new(
            self.width * model_scale,
            self.length * model_scale,
            self.segments,
            self.curvature,
            self.taper,
            self.offset * model_scale,
        )
    }
}

/// Live-Edit eines einzelnen Platzierungsparameters (relative Werte).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamEdit {
    Width(f32),
    Length(f32),
    Segments(u32),
    Curvature(f32),
    Taper(f32),
    Offset(f32),
}

impl ParamEdit {
    /// History-Label des Parameters.
    pub fn label(&self) -> &'static str {
        match self {
            ParamEdit::Width(_) => "width",
            ParamEdit::Length(_) => "length",
            ParamEdit::Segments(_) => "segments",
            ParamEdit::Curvature(_) => "curvature",
            ParamEdit::Taper(_) => "taper",
            ParamEdit::Offset(_) => "offset",
        }
    }

    /// Gibt `true` zurück, wenn der Wert endlich ist.
    pub fn is_finite(&self) -> bool {
        match *self {
            ParamEdit::Width(v)
            | ParamEdit::Length(v)
            | ParamEdit::Curvature(v)
            | ParamEdit::Taper(v)
            | ParamEdit::Offset(v) => v.is_finite(),
            ParamEdit::Segments(_) => true,
        }
    }

    /// Schreibt den Wert in die globalen Platzierungsparameter.
    pub fn apply_to(&self, params: &mut PlaceParams) {
        match *self {
            ParamEdit::Width(v) => params.width = v,
            ParamEdit::Length(v) => params.length = v,
            ParamEdit::Segments(v) => params.segments = v.max(1),
            ParamEdit::Curvature(v) => params.curvature = v,
            ParamEdit::Taper(v) => params.taper = v,
            ParamEdit::Offset(v) => params.offset = v,
        }
    }

    /// Geometrie-Patch für selektierte Cards; `None` für den Wurzelabstand,
    /// der die Card verschiebt statt sie neu aufzubauen.
    pub fn card_patch(&self, model_scale: f32) -> Option<CardParamsPatch> {
        let mut patch = CardParamsPatch::default();
        match *self {
            ParamEdit::Width(v) => patch.width = Some(v * model_scale),
            ParamEdit::Length(v) => patch.length = Some(v * model_scale),
            ParamEdit::Segments(v) => patch.segment_count = Some(v.max(1)),
            ParamEdit::Curvature(v) => patch.curvature = Some(v),
            ParamEdit::Taper(v) => patch.taper = Some(v),
            ParamEdit::Offset(_) => return None,
        }
        Some(patch)
    }
}

/// Gemeinsame Material-Ressource aller Cards.
///
/// Änderungen markieren das Material als `dirty`; der Renderer holt es
/// per [`HairMaterial::take_dirty`] ab.
#[derive(Debug, Clone, PartialEq)]
pub struct HairMaterial {
    pub alpha_test: f32,
    pub double_sided: bool,
    /// Name der geladenen Textur (`None` = prozedurale Standardtextur)
    pub texture: Option<String>,
    /// Im Editor erzeugte Strähnen-Textur zu `texture`
    generated: Option<RgbaImage>,
    dirty: bool,
}

impl Default for HairMaterial {
    fn default() -> Self {
        Self {
            alpha_test: 0.1,
            double_sided: true,
            texture: None,
            generated: None,
            dirty: true,
        }
    }
}

impl HairMaterial {
    /// Übernimmt geänderte Werte und markiert das Material bei Bedarf als dirty.
    pub fn update(&mut self, alpha_test: Option<f32>, double_sided: Option<bool>) {
        if let Some(a) = alpha_test {
            if a.is_finite() && a != self.alpha_test {
                self.alpha_test = a.clamp(0.0, 1.0);
                self.dirty = true;
            }
        }
        if let Some(d) = double_sided {
            if d != self.double_sided {
                self.double_sided = d;
                self.dirty = true;
            }
        }
    }

    /// Setzt eine extern geladene Textur; eine erzeugte Textur wird verworfen.
    pub fn set_texture(&mut self, texture: Option<String>) {
        if self.texture != texture || self.generated.is_some() {
            self.texture = texture;
            self.generated = None;
            self.dirty = true;
        }
    }

    /// Übernimmt eine im Editor erzeugte Textur unter `name`.
    pub fn set_generated(&mut self, name: String, image: RgbaImage) {
        self.texture = Some(name);
        self.generated = Some(image);
        self.dirty = true;
    }

    pub fn generated(&self) -> Option<&RgbaImage> {
        self.generated.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Liefert und löscht das Dirty-Flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

/// Letzte absolut angewendete Werte der Rotations-/Skalierungs-Eingaben.
///
/// Die Eingabefelder liefern absolute Werte; angewendet wird jeweils nur die
/// Differenz zum letzten Wert. Bei Selektionswechsel zurück auf 0° / 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationInputs {
    /// Grad je Achse (X, Y, Z)
    pub degrees: [f32; 3],
    pub scale: f32,
}

impl Default for RotationInputs {
    fn default() -> Self {
        Self {
            degrees: [0.0; 3],
            scale: 1.0,
        }
    }
}

impl RotationInputs {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Übernimmt einen neuen Absolutwert und liefert das Delta in Grad.
    pub fn rotation_delta(&mut self, axis: Axis, degrees: f32) -> f32 {
        let i = axis.index();
        let delta = degrees - self.degrees[i];
        self.degrees[i] = degrees;
        delta
    }

    /// Übernimmt einen neuen Skalierungswert und liefert den relativen Faktor.
    ///
    /// Ungültige Werte (nicht endlich, null) liefern `None` und ändern nichts.
    pub fn scale_factor(&mut self, value: f32) -> Option<f32> {
        if !value.is_finite() || value == 0.0 {
            return None;
        }
        let last = if self.scale == 0.0 { 1.0 } else { self.scale };
        self.scale = value;
        Some(value / last)
    }
}

/// Zustand des Editors (Modus, Segment-Bearbeitung, Eingabe-Baselines)
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Aktiver Modus
    pub mode: EditorMode,
    /// Segment-Handles aktiv
    pub segment_edit_enabled: bool,
    /// Rotations-/Skalierungs-Baseline
    pub inputs: RotationInputs,
    /// Gizmo-Drag einer Card läuft
    pub transform_dragging: bool,
}
