use crate::{
    network::{CoauthorNetwork, CoauthorTree, NodeLinkGraph},
    search::{Researcher, search_researchers},
    server::{
        error::{ApiError, ApiResult},
        state::AppState,
    },
};
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::{error, info};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct NetworkParams {
    pub researcher: Option<String>,
}

/// `GET /search?query=`
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<Researcher>>> {
    let researchers = search_researchers(&state.openalex, &params.query)
        .await
        .inspect_err(|e| error!(query = %params.query, "Error searching researchers: {e}"))?;
    Ok(Json(researchers))
}

/// `GET /network?researcher=`: top collaborators as a node-link graph
pub async fn network(
    State(state): State<AppState>,
    Query(params): Query<NetworkParams>,
) -> ApiResult<Json<NodeLinkGraph>> {
    let network = fetch_network(&state, params).await?;
    Ok(Json(network.graph()))
}

/// `GET /network/tree?researcher=`: every collaborator under the researcher
pub async fn network_tree(
    State(state): State<AppState>,
    Query(params): Query<NetworkParams>,
) -> ApiResult<Json<CoauthorTree>> {
    let network = fetch_network(&state, params).await?;
    Ok(Json(network.tree()))
}

async fn fetch_network(state: &AppState, params: NetworkParams) -> ApiResult<CoauthorNetwork> {
    let researcher = params
        .researcher
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("researcher is required".to_owned()))?;
    info!(researcher = %researcher, "Received researcher ID");

    CoauthorNetwork::fetch(&state.openalex, &researcher)
        .await
        .map_err(|e| {
            let e = ApiError::from(e);
            error!(researcher = %researcher, "Error building network: {e}");
            e
        })
}
