//! The casting wheel. A signed-in user spins once; the drawn item is
//! stamped into their profile signature and can never be re-rolled.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use rand::Rng;
use serde::Serialize;
use taramind_core::error::CoreError;
use taramind_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// A wheel segment. `name` is what gets persisted to the profile, so it
/// doubles as the lookup key when re-displaying a stored result.
#[derive(Debug, Serialize)]
pub struct WheelItem {
    pub id: u32,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub nervous_system_area: &'static str,
    pub note: &'static str,
}

/// The wheel segments, shipped with the build.
pub const WHEEL_ITEMS: &[WheelItem] = &[
    WheelItem {
        id: 1,
        name: "Amygdala",
        kind: "instinct",
        nervous_system_area: "limbic system",
        note: "Quick to fire, slow to forget.",
    },
    WheelItem {
        id: 2,
        name: "Prefrontal Cortex",
        kind: "reason",
        nervous_system_area: "frontal lobe",
        note: "Plans first, acts later.",
    },
    WheelItem {
        id: 3,
        name: "Hippocampus",
        kind: "memory",
        nervous_system_area: "temporal lobe",
        note: "Keeps every story filed.",
    },
    WheelItem {
        id: 4,
        name: "Cerebellum",
        kind: "balance",
        nervous_system_area: "hindbrain",
        note: "Grace under pressure.",
    },
    WheelItem {
        id: 5,
        name: "Hypothalamus",
        kind: "drive",
        nervous_system_area: "diencephalon",
        note: "Hunger, heat, heart.",
    },
    WheelItem {
        id: 6,
        name: "Brainstem",
        kind: "endurance",
        nervous_system_area: "medulla",
        note: "Keeps going when everything else stops.",
    },
    WheelItem {
        id: 7,
        name: "Corpus Callosum",
        kind: "harmony",
        nervous_system_area: "midline",
        note: "Two halves, one voice.",
    },
    WheelItem {
        id: 8,
        name: "Mirror Neurons",
        kind: "empathy",
        nervous_system_area: "premotor cortex",
        note: "Feels what the other feels.",
    },
];

/// Spin state for the calling user.
#[derive(Debug, Serialize)]
pub struct SpinState {
    pub has_spun: bool,
    pub result: Option<&'static WheelItem>,
}

/// GET /wheel -- whether the caller has spun, and their stored result.
pub async fn get_state(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<SpinState>>> {
    let profile = ProfileRepo::find_by_id(&state.pool, user.profile_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: user.profile_id,
        }))?;

    let result = profile.signature.as_deref().and_then(find_item);
    Ok(Json(DataResponse {
        data: SpinState {
            has_spun: profile.signature.is_some(),
            result,
        },
    }))
}

/// POST /wheel -- draw a random item and claim it.
///
/// The claim is a single conditional update, so two rapid spins from the
/// same account cannot both land.
pub async fn spin(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<DataResponse<&'static WheelItem>>> {
    let user = AuthUser::from_headers(&headers, &state.config.jwt).map_err(|_| {
        AppError::Core(CoreError::Unauthorized(
            "Please login to spin the wheel".into(),
        ))
    })?;

    let index = rand::rng().random_range(0..WHEEL_ITEMS.len());
    let item = &WHEEL_ITEMS[index];

    let claimed =
        ProfileRepo::set_signature_if_unset(&state.pool, user.profile_id, item.name).await?;
    if !claimed {
        // Either the user already spun or their profile row is gone.
        ProfileRepo::find_by_id(&state.pool, user.profile_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Profile",
                id: user.profile_id,
            }))?;
        return Err(AppError::BadRequest(
            "You have already spun the wheel".into(),
        ));
    }

    tracing::info!(user_id = user.profile_id, item = item.name, "wheel spun");
    Ok(Json(DataResponse { data: item }))
}

fn find_item(name: &str) -> Option<&'static WheelItem> {
    WHEEL_ITEMS.iter().find(|item| item.name == name)
}
