//! Core-Domänentypen: Card-Parameter, Geometrie-Synthese, Cards, Spiegelung, Textur.

pub mod axis;
pub mod card;
pub mod card_collection;
/// Card-Parameter und Teiländerungen
///
/// - CardParams: Breite, Länge, Segmente, Biegung, Verjüngung, Segment-Offsets
/// - CardParamsPatch: optionale Felder für Live-Edits
pub mod card_params;
pub mod geometry;
pub mod mirror;
pub mod model;
pub mod texture;
pub mod transform;

pub use axis::Axis;
pub use card::{Card, CardId, CardRecord};
pub use card_collection::{CardCollection, CARD_NAME_PREFIX};
pub use card_params::{CardParams, CardParamsPatch};
pub use geometry::{synthesize, VertexBuffer};
pub use mirror::{mirror_placement, MirrorConfig, MirroredPlacement, DEFAULT_MIRROR_TOLERANCE};
pub use model::ImportedModel;
pub use texture::{
    default_hair_texture, encode_png, generate_strand_texture, Rgb, StrandTextureParams,
};
pub use transform::{align_to_normal, Transform, CARD_NORMAL_AXIS};
