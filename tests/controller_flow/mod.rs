use glam::Vec3;
use hair_card_editor::{
    AppController, AppIntent, AppState, CardId, EditorMode, ImportedModel, PickHit,
};

mod history;
mod mirror_and_placement;
mod segment_handles;
mod session_and_selection;

/// State mit geladenem Einheits-Modell (Skalierung 1.0, Mitte im Ursprung).
pub(crate) fn state_with_model() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ModelImported {
                model: ImportedModel::new("kopf", Vec3::splat(-0.5), Vec3::splat(0.5)),
            },
        )
        .expect("ModelImported sollte ohne Fehler durchlaufen");
    (controller, state)
}

/// Platziert eine Card per Klick auf die Modelloberfläche.
pub(crate) fn click_model(
    controller: &mut AppController,
    state: &mut AppState,
    point: Vec3,
    normal: Vec3,
) {
    controller
        .handle_intent(
            state,
            AppIntent::PointerPressed {
                hit: Some(PickHit::model(point, normal)),
                additive: false,
                orbit_modifier: false,
            },
        )
        .expect("PointerPressed sollte ohne Fehler durchlaufen");
}

pub(crate) fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

pub(crate) fn card_names(state: &AppState) -> Vec<String> {
    state.cards.iter().map(|c| c.name.clone()).collect()
}

pub(crate) fn switch_to_select(controller: &mut AppController, state: &mut AppState) {
    send(
        controller,
        state,
        AppIntent::SetModeRequested {
            mode: EditorMode::Select,
        },
    );
}

/// Selektiert genau eine Card (Listen-Klick, in jedem Modus gültig).
pub(crate) fn select(controller: &mut AppController, state: &mut AppState, id: CardId) {
    send(
        controller,
        state,
        AppIntent::CardClicked {
            id,
            additive: false,
        },
    );
}

pub(crate) fn first_id(state: &AppState) -> CardId {
    state.cards.ids()[0]
}
