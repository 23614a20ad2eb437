use coauthor_network::{CoauthorNetwork, Config, OpenAlex, search_researchers};
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{InitializeResult, ServerCapabilities},
    schemars, tool, tool_handler, tool_router,
    transport::stdio,
};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct CoauthorNetworkMCP {
    tool_router: ToolRouter<Self>,
    client: OpenAlex,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SearchResearchersRequest {
    #[schemars(description = "Free-text researcher name to search for")]
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct NetworkRequest {
    #[schemars(
        description = "OpenAlex author ID, either bare (A5023888391) or as URL (https://openalex.org/A5023888391)"
    )]
    pub researcher: String,
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("Error: {e}"))
}

fn error_json(context: &str, e: &coauthor_network::Error) -> String {
    to_json(&json!({
        "error": format!("{context}: {e}"),
    }))
}

#[tool_router]
impl CoauthorNetworkMCP {
    pub fn new(client: OpenAlex) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Search OpenAlex for researchers by name. Returns up to 10 candidates with id, name, institution and profile URL."
    )]
    pub async fn search_researchers(
        &self,
        Parameters(SearchResearchersRequest { query }): Parameters<SearchResearchersRequest>,
    ) -> String {
        match search_researchers(&self.client, &query).await {
            Ok(researchers) => to_json(&researchers),
            Err(e) => error_json("Failed to search researchers", &e),
        }
    }

    #[tool(
        description = "Get the co-authorship graph of a researcher: the researcher and their 20 most frequent collaborators as nodes, with edges weighted by the number of shared works."
    )]
    pub async fn get_coauthor_graph(
        &self,
        Parameters(NetworkRequest { researcher }): Parameters<NetworkRequest>,
    ) -> String {
        match CoauthorNetwork::fetch(&self.client, &researcher).await {
            Ok(network) => to_json(&network.graph()),
            Err(e) => error_json("Failed to fetch researcher data", &e),
        }
    }

    #[tool(
        description = "Get every collaborator of a researcher as a tree: the researcher as root and each co-author as a child whose value is the number of shared works."
    )]
    pub async fn get_coauthor_tree(
        &self,
        Parameters(NetworkRequest { researcher }): Parameters<NetworkRequest>,
    ) -> String {
        match CoauthorNetwork::fetch(&self.client, &researcher).await {
            Ok(network) => to_json(&network.tree()),
            Err(e) => error_json("Failed to fetch researcher data", &e),
        }
    }
}

#[tool_handler]
impl ServerHandler for CoauthorNetworkMCP {
    fn get_info(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: rmcp::model::ProtocolVersion::default(),
            server_info: rmcp::model::Implementation {
                name: "coauthor-network".to_owned(),
                version: env!("CARGO_PKG_VERSION").to_owned(),
                title: Some("Co-author Network MCP Server".to_owned()),
                icons: None,
                website_url: Some("https://openalex.org".to_owned()),
            },
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            instructions: Some("MCP Server for OpenAlex co-authorship networks. Search researchers by name, then fetch a researcher's collaborators as a ranked graph or a full tree.".to_owned()),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting co-author network MCP server");

    let config = Config::from_env()?;
    let client = OpenAlex::new(&config.openalex)?;

    let service = CoauthorNetworkMCP::new(client)
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("Error: {:?}", e);
        })?;

    service.waiting().await?;

    Ok(())
}
